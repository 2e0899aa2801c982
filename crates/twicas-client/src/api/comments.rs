use super::*;

impl<T: Transport> TwicasClient<T> {
    /// Get comments of a movie, newest first.
    pub async fn get_comments(
        &self,
        movie_id: &str,
        params: &CommentsParams,
    ) -> Result<ApiResponse<Comments>, TwicasError> {
        self.dispatch(&GET_COMMENTS, &[movie_id], Some(to_params(params)?))
            .await
    }

    /// Post a comment as the authenticated user.
    pub async fn post_comment(
        &self,
        movie_id: &str,
        params: &PostCommentParams,
    ) -> Result<ApiResponse<PostedComment>, TwicasError> {
        self.dispatch(&POST_COMMENT, &[movie_id], Some(to_params(params)?))
            .await
    }

    /// Delete a comment. Only the movie owner or the comment author may do so.
    pub async fn delete_comment(
        &self,
        movie_id: &str,
        comment_id: &str,
    ) -> Result<ApiResponse<DeletedComment>, TwicasError> {
        self.dispatch(&DELETE_COMMENT, &[movie_id, comment_id], None)
            .await
    }
}
