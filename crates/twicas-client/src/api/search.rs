use super::*;

impl<T: Transport> TwicasClient<T> {
    pub async fn search_users(
        &self,
        params: &UserSearchParams,
    ) -> Result<ApiResponse<UserSearchResult>, TwicasError> {
        self.dispatch(&SEARCH_USERS, &[], Some(to_params(params)?)).await
    }

    /// Search lives that are on air.
    pub async fn search_live_movies(
        &self,
        params: &LiveSearchParams,
    ) -> Result<ApiResponse<LiveSearchResult>, TwicasError> {
        self.dispatch(&SEARCH_LIVE_MOVIES, &[], Some(to_params(params)?))
            .await
    }
}
