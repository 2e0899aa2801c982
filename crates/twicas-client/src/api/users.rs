use super::*;

impl<T: Transport> TwicasClient<T> {
    /// Get a user's profile and supporter counts.
    ///
    /// `user_id` may be the numeric id or the screen id.
    pub async fn get_user_info(&self, user_id: &str) -> Result<ApiResponse<UserInfo>, TwicasError> {
        self.dispatch(&GET_USER_INFO, &[user_id], None).await
    }

    /// Get the application and user the access token belongs to.
    pub async fn verify_credentials(
        &self,
    ) -> Result<ApiResponse<VerifiedCredentials>, TwicasError> {
        self.dispatch(&VERIFY_CREDENTIALS, &[], None).await
    }
}
