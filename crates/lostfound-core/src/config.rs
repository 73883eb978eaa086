/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` (one field per env var, matched
/// case-insensitively against the upper-snake-case name) and call
/// `Config::from_env()` at startup. Use `#[serde(default = "..")]` for
/// optional settings.
///
/// # Panics
///
/// Panics if any required env var is missing or cannot be deserialized.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Self {
        match envy::from_env() {
            Ok(config) => config,
            Err(e) => panic!("failed to load config from environment: {e}"),
        }
    }

    /// Load from an explicit key/value iterator instead of the process environment.
    fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
