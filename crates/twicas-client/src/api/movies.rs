use super::*;

impl<T: Transport> TwicasClient<T> {
    pub async fn get_movie_info(
        &self,
        movie_id: &str,
    ) -> Result<ApiResponse<MovieWithBroadcaster>, TwicasError> {
        self.dispatch(&GET_MOVIE_INFO, &[movie_id], None).await
    }

    /// List a user's movies, newest first.
    pub async fn get_movies_by_user(
        &self,
        user_id: &str,
        params: &MoviesByUserParams,
    ) -> Result<ApiResponse<MoviesByUser>, TwicasError> {
        self.dispatch(&GET_MOVIES_BY_USER, &[user_id], Some(to_params(params)?))
            .await
    }

    /// Get the live a user is broadcasting right now. Upstream answers with
    /// an error (code 404) when the user is offline.
    pub async fn get_current_live(
        &self,
        user_id: &str,
    ) -> Result<ApiResponse<MovieWithBroadcaster>, TwicasError> {
        self.dispatch(&GET_CURRENT_LIVE, &[user_id], None).await
    }

    /// Set the telop of the authenticated user's current live.
    pub async fn set_current_live_subtitle(
        &self,
        params: &SubtitleParams,
    ) -> Result<ApiResponse<LiveSubtitle>, TwicasError> {
        self.dispatch(&SET_CURRENT_LIVE_SUBTITLE, &[], Some(to_params(params)?))
            .await
    }

    pub async fn unset_current_live_subtitle(
        &self,
    ) -> Result<ApiResponse<LiveSubtitle>, TwicasError> {
        self.dispatch(&UNSET_CURRENT_LIVE_SUBTITLE, &[], None).await
    }

    /// Set the hashtag of the authenticated user's current live. The
    /// leading `#` is not part of the value.
    pub async fn set_current_live_hashtag(
        &self,
        params: &HashtagParams,
    ) -> Result<ApiResponse<LiveHashtag>, TwicasError> {
        self.dispatch(&SET_CURRENT_LIVE_HASHTAG, &[], Some(to_params(params)?))
            .await
    }

    pub async fn unset_current_live_hashtag(
        &self,
    ) -> Result<ApiResponse<LiveHashtag>, TwicasError> {
        self.dispatch(&UNSET_CURRENT_LIVE_HASHTAG, &[], None).await
    }
}
