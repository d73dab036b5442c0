use serde::{Deserialize, Serialize};

/// Query parameters for the search endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SearchQuery {
    pub q: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
