//! TwitCasting API v2 client library.
//!
//! Provides a typed REST client with request parameter validation,
//! response schema validation and rate-limit reporting, plus a
//! transport-agnostic receiver for signed webhook deliveries.

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod response;
pub mod schema;
pub mod transport;
pub mod webhook;

pub use auth::Credentials;
pub use client::{ClientOptions, TwicasClient};
pub use config::ClientConfig;
pub use error::{ErrorKind, TwicasError};
pub use response::{ApiResponse, ImageResponse, RateLimit};
pub use transport::{ApiRequest, HttpMethod, HttpTransport, RawResponse, Transport};
pub use webhook::{WebhookReceiver, WebhookResponse};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://apiv2.twitcasting.tv";

pub const API_VERSION_HEADER: &str = "X-Api-Version";
pub const API_VERSION: &str = "2.0";
