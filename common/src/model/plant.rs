use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier of a plant record.
///
/// json-server style backends hand out either numeric ids (`1`) or string ids
/// (`"a1b2"`). The form received is kept as-is so it can be echoed back into
/// item URLs without conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlantId {
    Number(u64),
    Text(String),
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlantId::Number(n) => write!(f, "{}", n),
            PlantId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for PlantId {
    fn from(value: u64) -> Self {
        PlantId::Number(value)
    }
}

impl From<&str> for PlantId {
    fn from(value: &str) -> Self {
        PlantId::Text(value.to_string())
    }
}

/// A plant record as owned by the remote catalog.
///
/// The local copy is a cache: it is only ever replaced by what the server
/// returns, never edited speculatively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    /// Freshly created records come back without a stock flag; they are in stock.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl Plant {
    /// Case-insensitive substring match of `query` against the plant name.
    /// An empty query matches every plant.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
