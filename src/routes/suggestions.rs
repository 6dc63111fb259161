use crate::services::suggestions;
use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
}

/// GET /addresses/suggestions?q=...
pub async fn address_suggestions(Query(query): Query<SuggestionQuery>) -> Json<SuggestionResponse> {
    let suggestions = suggestions::suggest(&query.q)
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(SuggestionResponse { suggestions })
}
