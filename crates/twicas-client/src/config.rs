//! Client configuration loaded from environment variables.

use crate::TwicasError;
use crate::auth::Credentials;
use crate::client::ClientOptions;

pub const ACCESS_TOKEN_VAR: &str = "TWICAS_ACCESS_TOKEN";
pub const CLIENT_ID_VAR: &str = "TWICAS_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "TWICAS_CLIENT_SECRET";
pub const GZIP_VAR: &str = "TWICAS_GZIP";
pub const BASE_URL_VAR: &str = "TWICAS_BASE_URL";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub gzip: bool,
    pub base_url: Option<String>,
}

impl ClientConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, TwicasError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TwicasError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_parts(
            lookup(ACCESS_TOKEN_VAR),
            lookup(CLIENT_ID_VAR),
            lookup(CLIENT_SECRET_VAR),
        )?;

        let gzip = lookup(GZIP_VAR)
            .map(|v| matches!(v.trim(), "true" | "1"))
            .unwrap_or(false);

        let base_url = lookup(BASE_URL_VAR).filter(|v| !v.is_empty());

        Ok(Self {
            credentials,
            gzip,
            base_url,
        })
    }

    pub fn into_options(self) -> ClientOptions {
        let options = ClientOptions::new(self.credentials).gzip(self.gzip);
        match self.base_url {
            Some(url) => options.base_url(url),
            None => options,
        }
    }
}
