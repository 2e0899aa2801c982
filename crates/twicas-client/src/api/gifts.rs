use super::*;

impl<T: Transport> TwicasClient<T> {
    /// Gifts received by the authenticated user in the last 10 seconds.
    /// Pass the returned `slice_id` back to fetch only newer ones.
    pub async fn get_gifts(&self, params: &GiftsParams) -> Result<ApiResponse<Gifts>, TwicasError> {
        self.dispatch(&GET_GIFTS, &[], Some(to_params(params)?)).await
    }
}
