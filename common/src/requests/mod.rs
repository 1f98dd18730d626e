use serde::Serialize;

use crate::model::plant::PlantId;

/// Path of the collection endpoint, relative to the API base URL.
pub const PLANTS_PATH: &str = "/plants";

#[derive(Serialize, Debug, Clone, PartialEq)]
/// Body of `POST /plants`. The server assigns `id` and the stock flag.
pub struct NewPlant {
    pub name: String,
    pub image: String,
    pub price: f64,
}

/// Body of `PATCH /plants/{id}`. Only the fields that are set are sent.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlantPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl PlantPatch {
    pub fn stock(in_stock: bool) -> Self {
        Self {
            in_stock: Some(in_stock),
            ..Self::default()
        }
    }

    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }
}

/// Resolves catalog endpoints against a base URL such as `http://localhost:3000`.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection(&self) -> String {
        format!("{}{}", self.base_url, PLANTS_PATH)
    }

    pub fn item(&self, id: &PlantId) -> String {
        format!("{}{}/{}", self.base_url, PLANTS_PATH, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_only_sends_set_fields() {
        assert_eq!(
            serde_json::to_string(&PlantPatch::stock(false)).unwrap(),
            r#"{"inStock":false}"#
        );
        assert_eq!(
            serde_json::to_string(&PlantPatch::price(9.5)).unwrap(),
            r#"{"price":9.5}"#
        );
    }

    #[test]
    fn endpoints_join_base_and_id() {
        let endpoints = Endpoints::new("http://localhost:3000/");
        assert_eq!(endpoints.collection(), "http://localhost:3000/plants");
        assert_eq!(
            endpoints.item(&PlantId::from(4)),
            "http://localhost:3000/plants/4"
        );
        assert_eq!(
            endpoints.item(&PlantId::from("x9")),
            "http://localhost:3000/plants/x9"
        );
    }
}
