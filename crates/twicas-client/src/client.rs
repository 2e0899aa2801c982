//! Client facade: configuration plus one method per endpoint.
//!
//! The endpoint methods themselves live in [`crate::api`], grouped by area.

use reqwest::header::{ACCEPT_ENCODING, AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::transport::{HttpTransport, Transport};
use crate::{API_VERSION, API_VERSION_HEADER, DEFAULT_BASE_URL, TwicasError};

/// Options for [`TwicasClient::new`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub credentials: Credentials,
    /// Ask upstream for gzip-compressed bodies.
    pub gzip: bool,
    /// API root, [`DEFAULT_BASE_URL`] when `None`.
    pub base_url: Option<String>,
}

impl ClientOptions {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            gzip: false,
            base_url: None,
        }
    }

    pub fn gzip(mut self, gzip: bool) -> Self {
        self.gzip = gzip;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// TwitCasting API v2 client.
///
/// Holds no mutable state: every method issues exactly one request through
/// the transport and can be called concurrently from any task.
#[derive(Debug, Clone)]
pub struct TwicasClient<T = HttpTransport> {
    pub(crate) base_url: Url,
    headers: HeaderMap,
    pub(crate) transport: T,
}

impl TwicasClient<HttpTransport> {
    /// Build a client backed by reqwest.
    pub fn new(options: ClientOptions) -> Result<Self, TwicasError> {
        let (base_url, headers) = resolve(&options)?;
        let transport = HttpTransport::new(headers.clone(), options.gzip)?;
        tracing::debug!(%base_url, gzip = options.gzip, "TwitCasting client created");
        Ok(Self {
            base_url,
            headers,
            transport,
        })
    }

    /// Build a client from `TWICAS_*` environment variables.
    pub fn from_env() -> Result<Self, TwicasError> {
        Self::new(ClientConfig::from_env()?.into_options())
    }
}

impl<T: Transport> TwicasClient<T> {
    /// Build a client that sends through `transport`. The transport is
    /// responsible for attaching [`Self::default_headers`].
    pub fn with_transport(options: ClientOptions, transport: T) -> Result<Self, TwicasError> {
        let (base_url, headers) = resolve(&options)?;
        Ok(Self {
            base_url,
            headers,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Headers attached to every call.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

fn resolve(options: &ClientOptions) -> Result<(Url, HeaderMap), TwicasError> {
    let base_url = Url::parse(options.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
    if base_url.cannot_be_a_base() {
        return Err(TwicasError::InvalidConfig(format!(
            "base URL {base_url} cannot carry a path"
        )));
    }

    let mut auth = HeaderValue::from_str(&options.credentials.authorization_header()?)
        .map_err(|_| TwicasError::InvalidCredentials)?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
    headers.insert(AUTHORIZATION, auth);
    if options.gzip {
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
    }

    Ok((base_url, headers))
}
