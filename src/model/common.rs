use serde::{Deserialize, Serialize};

/// Request body carrying only the caller's access token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub access_token: String,
}

/// Request body carrying a single string payload plus the access token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringRequest {
    pub data: String,
    pub access_token: String,
}

/// Request body carrying a list-of-strings payload plus the access token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringListRequest {
    pub data: Vec<String>,
    pub access_token: String,
}

/// Response envelope for a single boolean value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct BooleanResponse {
    pub data: bool,
}

/// Response envelope for a list of strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StringListResponse {
    pub data: Vec<String>,
}
