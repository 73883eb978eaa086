use std::path::PathBuf;

use anyhow::Context as _;
use uuid::Uuid;

use crate::domain::repository::ImageStore;
use crate::domain::types::ProofImage;
use crate::error::ClaimsServiceError;

/// Writes proof images under `dir` and links them below `base_url`.
#[derive(Clone)]
pub struct LocalImageStore {
    pub dir: PathBuf,
    pub base_url: String,
}

impl ImageStore for LocalImageStore {
    async fn store(&self, image: ProofImage) -> Result<String, ClaimsServiceError> {
        if !image.is_image() {
            return Err(ClaimsServiceError::InvalidProofImage);
        }
        let file_name = format!("{}.{}", Uuid::new_v4(), extension_for(&image.content_type));

        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create upload dir {}", self.dir.display()))?;
        tokio::fs::write(self.dir.join(&file_name), &image.bytes)
            .await
            .context("write proof image")?;

        Ok(format!("{}/{file_name}", self.base_url.trim_end_matches('/')))
    }

    async fn discard(&self, url: &str) -> Result<(), ClaimsServiceError> {
        let file_name = url
            .strip_prefix(self.base_url.trim_end_matches('/'))
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|name| !name.is_empty() && !name.contains(['/', '\\']) && *name != "..")
            .with_context(|| format!("{url} is not a stored proof image"))?;

        match tokio::fs::remove_file(self.dir.join(file_name)).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                Err(anyhow::Error::new(e).context("remove proof image").into())
            }
            _ => Ok(()),
        }
    }
}

fn extension_for(content_type: &str) -> &'static str {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match mime.as_str() {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/heic" => "heic",
        "image/bmp" => "bmp",
        _ => "img",
    }
}
