use serde::{Deserialize, Serialize};

use crate::domain::repository::SimilarityScorer;
use crate::domain::types::ScoringError;

/// Client for the text-similarity inference service.
#[derive(Clone)]
pub struct HttpSimilarityScorer {
    pub client: reqwest::Client,
    pub base_url: String,
}

#[derive(Serialize)]
struct SimilarityRequest<'a> {
    source: &'a str,
    candidate: &'a str,
}

#[derive(Deserialize)]
struct SimilarityResponse {
    score: f64,
}

impl HttpSimilarityScorer {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

impl SimilarityScorer for HttpSimilarityScorer {
    async fn connect(&self) -> Result<(), ScoringError> {
        self.client
            .get(self.url("/health"))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ScoringError::Unreachable(e.to_string()))?;
        Ok(())
    }

    async fn score(&self, source: &str, candidate: &str) -> Result<f64, ScoringError> {
        let resp = self
            .client
            .post(self.url("/similarity"))
            .json(&SimilarityRequest { source, candidate })
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| ScoringError::Failed(e.to_string()))?;
        let body: SimilarityResponse = resp
            .json()
            .await
            .map_err(|e| ScoringError::Failed(format!("decode response: {e}")))?;
        if !body.score.is_finite() {
            return Err(ScoringError::Failed(format!("non-finite score {}", body.score)));
        }
        Ok(body.score)
    }
}
