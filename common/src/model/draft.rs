//! The unsaved plant captured by the creation form, and the single numeric
//! check the catalog applies to user-entered prices.

use crate::error::ValidationError;
use crate::requests::NewPlant;

/// Form-owned candidate plant. Every field is raw text; the price is only
/// parsed when the draft is turned into a request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantDraft {
    pub name: String,
    pub image: String,
    pub price: String,
}

impl PlantDraft {
    /// Builds the POST body, parsing the price on the way.
    pub fn to_new_plant(&self) -> Result<NewPlant, ValidationError> {
        Ok(NewPlant {
            name: self.name.clone(),
            image: self.image.clone(),
            price: parse_price(&self.price)?,
        })
    }
}

/// Accepts a non-empty decimal that is finite and not negative.
/// Surrounding whitespace is ignored.
pub fn parse_price(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidPrice(input.to_string()));
    }
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(ValidationError::InvalidPrice(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_decimals() {
        assert_eq!(parse_price("12.50"), Ok(12.5));
        assert_eq!(parse_price(" 7 "), Ok(7.0));
        assert_eq!(parse_price("0"), Ok(0.0));
    }

    #[test]
    fn rejects_empty_and_non_numeric() {
        for input in ["", "   ", "abc", "12,50", "1.2.3", "NaN", "inf", "-3"] {
            assert_eq!(
                parse_price(input),
                Err(ValidationError::InvalidPrice(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn draft_becomes_numeric_body() {
        let draft = PlantDraft {
            name: "Monstera".to_string(),
            image: "https://example.com/m.jpg".to_string(),
            price: "24.99".to_string(),
        };
        let body = serde_json::to_value(draft.to_new_plant().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Monstera",
                "image": "https://example.com/m.jpg",
                "price": 24.99
            })
        );
    }

    #[test]
    fn draft_with_bad_price_is_rejected() {
        let draft = PlantDraft {
            name: "Monstera".to_string(),
            image: String::new(),
            price: "cheap".to_string(),
        };
        assert!(draft.to_new_plant().is_err());
    }
}
