/// Product search parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    /// Free-text query, sent verbatim as `q`
    pub query: String,
    /// Number of products to return
    pub size: Option<u32>,
    /// Maximum price filter
    pub budget: Option<u32>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: Option<u32>) -> Self {
        self.size = size;
        self
    }

    pub fn with_budget(mut self, budget: Option<u32>) -> Self {
        self.budget = budget;
        self
    }

    /// Query parameters for the endpoint; optional values appear only when set
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.query.clone())];
        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }
        if let Some(budget) = self.budget {
            params.push(("budget", budget.to_string()));
        }
        params
    }
}
