use super::*;

impl<T: Transport> TwicasClient<T> {
    /// RTMP ingest URL and stream key of the authenticated user.
    pub async fn get_rtmp_url(&self) -> Result<ApiResponse<RtmpUrl>, TwicasError> {
        self.dispatch(&GET_RTMP_URL, &[], None).await
    }
}
