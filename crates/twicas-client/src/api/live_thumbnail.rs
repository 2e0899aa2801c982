use url::Url;

use super::*;
use crate::response::format_image_response;
use crate::transport::{ApiRequest, HttpMethod};

impl<T: Transport> TwicasClient<T> {
    /// URL of a user's live thumbnail, for use in `<img>` tags and the like.
    /// Makes no request.
    pub fn live_thumbnail_url(&self, user_id: &str) -> Result<Url, TwicasError> {
        self.endpoint_url(LIVE_THUMBNAIL_PATH, &[user_id])
    }

    /// Download a user's live thumbnail (`image/jpeg` or `image/png`).
    ///
    /// This endpoint is not rate limited, so the result carries no counters.
    pub async fn get_live_thumbnail_image(
        &self,
        user_id: &str,
    ) -> Result<ImageResponse, TwicasError> {
        let request = ApiRequest {
            method: HttpMethod::Get,
            url: self.live_thumbnail_url(user_id)?,
            body: None,
        };
        let raw = self.transport.send(request).await?;
        format_image_response(raw)
    }
}
