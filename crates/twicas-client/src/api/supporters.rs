use super::*;

impl<T: Transport> TwicasClient<T> {
    /// Whether `user_id` supports `params.target_user_id`.
    pub async fn get_supporting_status(
        &self,
        user_id: &str,
        params: &SupportingStatusParams,
    ) -> Result<ApiResponse<SupportingStatus>, TwicasError> {
        self.dispatch(&GET_SUPPORTING_STATUS, &[user_id], Some(to_params(params)?))
            .await
    }

    pub async fn support_user(
        &self,
        params: &SupportParams,
    ) -> Result<ApiResponse<SupportResult>, TwicasError> {
        self.dispatch(&SUPPORT_USER, &[], Some(to_params(params)?)).await
    }

    pub async fn unsupport_user(
        &self,
        params: &SupportParams,
    ) -> Result<ApiResponse<UnsupportResult>, TwicasError> {
        self.dispatch(&UNSUPPORT_USER, &[], Some(to_params(params)?)).await
    }

    /// Users that `user_id` supports.
    pub async fn get_supporting_list(
        &self,
        user_id: &str,
        params: &SupportingListParams,
    ) -> Result<ApiResponse<SupportingList>, TwicasError> {
        self.dispatch(&GET_SUPPORTING_LIST, &[user_id], Some(to_params(params)?))
            .await
    }

    /// Users supporting `user_id`.
    pub async fn get_supporter_list(
        &self,
        user_id: &str,
        params: &SupporterListParams,
    ) -> Result<ApiResponse<SupporterList>, TwicasError> {
        self.dispatch(&GET_SUPPORTER_LIST, &[user_id], Some(to_params(params)?))
            .await
    }
}
