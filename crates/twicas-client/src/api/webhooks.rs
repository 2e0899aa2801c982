use super::*;

impl<T: Transport> TwicasClient<T> {
    /// Webhooks registered for this application. Requires client credentials.
    pub async fn get_webhook_list(
        &self,
        params: &WebHookListParams,
    ) -> Result<ApiResponse<WebHookList>, TwicasError> {
        self.dispatch(&GET_WEBHOOK_LIST, &[], Some(to_params(params)?))
            .await
    }

    pub async fn register_webhook(
        &self,
        params: &WebHookEventsParams,
    ) -> Result<ApiResponse<RegisteredWebHooks>, TwicasError> {
        self.dispatch(&REGISTER_WEBHOOK, &[], Some(to_params(params)?))
            .await
    }

    /// Remove events. Parameters travel in the query string.
    pub async fn remove_webhook(
        &self,
        params: &WebHookEventsParams,
    ) -> Result<ApiResponse<RemovedWebHooks>, TwicasError> {
        self.dispatch(&REMOVE_WEBHOOK, &[], Some(to_params(params)?))
            .await
    }
}
