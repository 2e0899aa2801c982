//! Webhook server configuration from environment variables.

use anyhow::bail;

pub const SIGNATURE_VAR: &str = "TWICAS_WEBHOOK_SIGNATURE";
pub const PORT_VAR: &str = "SERVER_PORT";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Webhook signature of the TwitCasting application.
    pub signature: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let signature = lookup(SIGNATURE_VAR).unwrap_or_default();
        if signature.is_empty() {
            bail!("{SIGNATURE_VAR} must be set");
        }

        let port = parse_u16(&lookup(PORT_VAR).unwrap_or_default(), DEFAULT_PORT);

        Ok(Self { port, signature })
    }
}

fn parse_u16(s: &str, default: u16) -> u16 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_and_overrides() {
        let config = ServerConfig::from_lookup(|key| match key {
            SIGNATURE_VAR => Some("sig".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.signature, "sig");

        let config = ServerConfig::from_lookup(|key| match key {
            SIGNATURE_VAR => Some("sig".into()),
            PORT_VAR => Some("3000".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn garbage_port_falls_back() {
        let config = ServerConfig::from_lookup(|key| match key {
            SIGNATURE_VAR => Some("sig".into()),
            PORT_VAR => Some("http".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn signature_is_required() {
        assert!(ServerConfig::from_lookup(|_| None).is_err());
    }
}
