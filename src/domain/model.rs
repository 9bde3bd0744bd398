use serde::{Deserialize, Serialize};

/// One product record as returned by the catalog API. Extra payload fields
/// (id, description, rating, ...) are ignored; a missing field is a
/// deserialization error that propagates to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub category: String,
    pub price: f64,
    pub image: String,
}
