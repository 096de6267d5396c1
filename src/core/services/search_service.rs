use crate::AppError;
use crate::api::client::PRODUCTS_ENDPOINT;
use crate::api::models::SearchResults;
use crate::core::services::traits::ProductApi;
use crate::core::services::types::SearchQuery;
use crate::utils::validation::validate_query;

/// Product search over a single fixed endpoint
pub struct SearchService<A: ProductApi> {
    api: A,
}

impl<A: ProductApi> SearchService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Validate the query and issue one request; no defaults are injected here
    pub async fn search_products(&self, query: &SearchQuery) -> Result<SearchResults, AppError> {
        validate_query(&query.query)?;

        let params = query.to_params();
        let raw = self.api.get_json(PRODUCTS_ENDPOINT, &params).await?;
        Ok(SearchResults::new(raw))
    }
}
