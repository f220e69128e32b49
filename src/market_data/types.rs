use serde::Deserialize;

/// A partition of instruments by upstream data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Gold,
    Currency,
    Cryptocurrency,
}

impl Category {
    /// Path segment of the category's endpoint under the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Category::Gold => "gold",
            Category::Currency => "currency",
            Category::Cryptocurrency => "cryptocurrency",
        }
    }
}

/// One quoted item as served by the upstream API.
/// `price` is in the unit implied by the category; `change_percent` is
/// signed and unbounded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricedInstrument {
    pub name: String,
    pub price: f64,
    #[serde(rename = "changePercent")]
    pub change_percent: f64,
}
