use super::*;

impl<T: Transport> TwicasClient<T> {
    /// Categories that currently have lives.
    pub async fn get_categories(
        &self,
        params: &CategoriesParams,
    ) -> Result<ApiResponse<Categories>, TwicasError> {
        self.dispatch(&GET_CATEGORIES, &[], Some(to_params(params)?)).await
    }
}
