//! Credential handling for the TwitCasting API.
//!
//! A client authenticates either as a user (OAuth access token, sent as
//! `Bearer`) or as an application (client id + secret, sent as `Basic`).

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use crate::TwicasError;

#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    AccessToken(String),
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
}

impl Credentials {
    pub fn access_token(token: impl Into<String>) -> Self {
        Credentials::AccessToken(token.into())
    }

    pub fn client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Credentials::ClientCredentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Pick a credential form from optional parts. An access token wins over
    /// client credentials. Empty strings count as absent.
    pub fn from_parts(
        access_token: Option<String>,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Result<Self, TwicasError> {
        let present = |v: Option<String>| v.filter(|s| !s.is_empty());

        if let Some(token) = present(access_token) {
            return Ok(Credentials::AccessToken(token));
        }
        match (present(client_id), present(client_secret)) {
            (Some(client_id), Some(client_secret)) => Ok(Credentials::ClientCredentials {
                client_id,
                client_secret,
            }),
            _ => Err(TwicasError::InvalidCredentials),
        }
    }

    /// Value of the `Authorization` header.
    pub fn authorization_header(&self) -> Result<String, TwicasError> {
        match self {
            Credentials::AccessToken(token) if !token.is_empty() => Ok(format!("Bearer {token}")),
            Credentials::ClientCredentials {
                client_id,
                client_secret,
            } if !client_id.is_empty() && !client_secret.is_empty() => {
                let encoded = BASE64.encode(format!("{client_id}:{client_secret}"));
                Ok(format!("Basic {encoded}"))
            }
            _ => Err(TwicasError::InvalidCredentials),
        }
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::AccessToken(_) => f.debug_tuple("AccessToken").field(&"***").finish(),
            Credentials::ClientCredentials { client_id, .. } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .field("client_secret", &"***")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_becomes_bearer() {
        let header = Credentials::access_token("T").authorization_header().unwrap();
        assert_eq!(header, "Bearer T");
    }

    #[test]
    fn client_credentials_become_basic() {
        let header = Credentials::client_credentials("id", "secret")
            .authorization_header()
            .unwrap();
        // base64("id:secret")
        assert_eq!(header, "Basic aWQ6c2VjcmV0");
    }

    #[test]
    fn token_takes_precedence_over_client_pair() {
        let creds = Credentials::from_parts(
            Some("T".into()),
            Some("id".into()),
            Some("secret".into()),
        )
        .unwrap();
        assert_eq!(creds, Credentials::access_token("T"));
    }

    #[test]
    fn incomplete_parts_are_rejected() {
        assert!(matches!(
            Credentials::from_parts(None, None, None),
            Err(TwicasError::InvalidCredentials)
        ));
        assert!(matches!(
            Credentials::from_parts(None, Some("id".into()), None),
            Err(TwicasError::InvalidCredentials)
        ));
        assert!(matches!(
            Credentials::from_parts(Some(String::new()), Some("id".into()), Some(String::new())),
            Err(TwicasError::InvalidCredentials)
        ));
    }

    #[test]
    fn empty_token_has_no_header() {
        assert!(Credentials::access_token("").authorization_header().is_err());
    }

    #[test]
    fn debug_hides_secrets() {
        let text = format!("{:?}", Credentials::client_credentials("id", "secret"));
        assert!(text.contains("\"id\""));
        assert!(!text.contains("\"secret\""));
        assert!(!format!("{:?}", Credentials::access_token("tok")).contains("tok"));
    }
}
