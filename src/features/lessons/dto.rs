use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub search_query: Option<String>,
}

impl SearchParams {
    /// Repeated `search_query` keys are joined with commas, so
    /// `?search_query=a&search_query=b` searches for `a,b`.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let values: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == "search_query")
            .map(|(_, value)| value)
            .collect();

        Self {
            search_query: (!values.is_empty()).then(|| values.join(",")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateLessonResponse {
    pub message: String,
}
