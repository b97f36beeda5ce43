use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Empty JSON object returned by endpoints that have nothing to report.
#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct EmptyDto {}
