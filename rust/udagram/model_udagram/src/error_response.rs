use serde::{Deserialize, Serialize};

/// A plain old json error response.
/// yup, thats it.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorResponse<'a> {
    /// Message to explain failure
    pub error: &'a str,
}

/// A list response, `{"items": [...]}`
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ItemsResponse<T> {
    /// The returned items
    pub items: Vec<T>,
}

/// A creation response, `{"newItem": {...}}`
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewItemResponse<T> {
    /// The created item
    pub new_item: T,
}
