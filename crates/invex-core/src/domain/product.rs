// ============================================================================
// Invex Core - Product Entity
// File: crates/invex-core/src/domain/product.rs
// Description: Inventory line item keyed by its product number
// ============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use invex_shared::constants::{MAX_DESIGNATION_LENGTH, MAX_PRODUCT_NUMBER_LENGTH};

use crate::error::DomainError;

static PRODUCT_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 -]+$").expect("product number pattern is valid"));

static DESIGNATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zÀ-ÿ0-9 '-]+$").expect("designation pattern is valid"));

/// Product entity as stored. `montant` is always derived.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct Product {
    #[validate(
        length(max = MAX_PRODUCT_NUMBER_LENGTH, message = "numProduit is too long"),
        regex(
            path = *PRODUCT_NUMBER_RE,
            message = "numProduit may only contain letters, digits, spaces and '-'"
        )
    )]
    pub num_produit: String,

    #[validate(
        length(max = MAX_DESIGNATION_LENGTH, message = "design is too long"),
        regex(
            path = *DESIGNATION_RE,
            message = "design may only contain letters, digits, spaces, ' and -"
        )
    )]
    pub design: String,

    #[validate(range(exclusive_min = 0.0, message = "prix must be greater than 0"))]
    pub prix: f64,

    #[validate(range(min = 1, message = "quantite must be greater than 0"))]
    pub quantite: i32,
}

impl Product {
    pub fn montant(&self) -> f64 {
        self.prix * f64::from(self.quantite)
    }
}

/// The mutable part of a product.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ProductChanges {
    #[validate(
        length(max = MAX_DESIGNATION_LENGTH, message = "design is too long"),
        regex(
            path = *DESIGNATION_RE,
            message = "design may only contain letters, digits, spaces, ' and -"
        )
    )]
    pub design: String,

    #[validate(range(exclusive_min = 0.0, message = "prix must be greater than 0"))]
    pub prix: f64,

    #[validate(range(min = 1, message = "quantite must be greater than 0"))]
    pub quantite: i32,
}

/// A product row as returned to clients, with the derived amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine {
    pub num_produit: String,
    pub design: String,
    pub prix: f64,
    pub quantite: i32,
    pub montant: f64,
}

impl From<Product> for ProductLine {
    fn from(product: Product) -> Self {
        let montant = product.montant();
        Self {
            num_produit: product.num_produit,
            design: product.design,
            prix: product.prix,
            quantite: product.quantite,
            montant,
        }
    }
}

/// A number as clients send it: a JSON number or a numeric string.
/// Strings accept `,` as the decimal separator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// `None` when the value is not a finite number.
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => {
                let cleaned: String = s
                    .trim()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| if c == ',' { '.' } else { c })
                    .collect();
                cleaned.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }

    fn is_blank(&self) -> bool {
        matches!(self, NumericInput::Text(s) if s.trim().is_empty())
    }
}

/// Unvalidated creation input.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub num_produit: Option<String>,
    pub design: Option<String>,
    pub prix: Option<NumericInput>,
    pub quantite: Option<NumericInput>,
}

/// Unvalidated update input.
#[derive(Debug, Clone, Default)]
pub struct ProductChangesDraft {
    pub design: Option<String>,
    pub prix: Option<NumericInput>,
    pub quantite: Option<NumericInput>,
}

impl ProductDraft {
    pub fn into_product(self) -> Result<Product, DomainError> {
        let mut missing = Vec::new();
        let num_produit = required_text(self.num_produit, "numProduit", &mut missing);
        let design = required_text(self.design, "design", &mut missing);
        let prix = required_number(self.prix, "prix", &mut missing);
        let quantite = required_number(self.quantite, "quantite", &mut missing);

        let (Some(num_produit), Some(design), Some(prix), Some(quantite)) =
            (num_produit, design, prix, quantite)
        else {
            return Err(all_fields_required(&missing));
        };

        let product = Product {
            num_produit,
            design,
            prix: parse_price(&prix)?,
            quantite: parse_quantity(&quantite)?,
        };
        product.validate()?;
        Ok(product)
    }
}

impl ProductChangesDraft {
    pub fn into_changes(self) -> Result<ProductChanges, DomainError> {
        let mut missing = Vec::new();
        let design = required_text(self.design, "design", &mut missing);
        let prix = required_number(self.prix, "prix", &mut missing);
        let quantite = required_number(self.quantite, "quantite", &mut missing);

        let (Some(design), Some(prix), Some(quantite)) = (design, prix, quantite) else {
            return Err(all_fields_required(&missing));
        };

        let changes = ProductChanges {
            design,
            prix: parse_price(&prix)?,
            quantite: parse_quantity(&quantite)?,
        };
        changes.validate()?;
        Ok(changes)
    }
}

fn required_text(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

fn required_number(
    value: Option<NumericInput>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<NumericInput> {
    match value {
        Some(v) if !v.is_blank() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

fn all_fields_required(missing: &[&str]) -> DomainError {
    DomainError::ValidationError(format!(
        "All fields are required (missing: {})",
        missing.join(", ")
    ))
}

fn parse_price(value: &NumericInput) -> Result<f64, DomainError> {
    value
        .to_f64()
        .ok_or_else(|| DomainError::ValidationError("prix must be a number".to_string()))
}

fn parse_quantity(value: &NumericInput) -> Result<i32, DomainError> {
    let not_whole = || DomainError::ValidationError("quantite must be a whole number".to_string());
    let number = value.to_f64().ok_or_else(not_whole)?;
    if number.fract() != 0.0 || number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
        return Err(not_whole());
    }
    Ok(number as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(num: &str, design: &str, prix: NumericInput, quantite: NumericInput) -> ProductDraft {
        ProductDraft {
            num_produit: Some(num.to_string()),
            design: Some(design.to_string()),
            prix: Some(prix),
            quantite: Some(quantite),
        }
    }

    #[test]
    fn test_valid_draft() {
        let product = draft("P-001", "Clé à molette", NumericInput::Number(12.5), NumericInput::Number(4.0))
            .into_product()
            .unwrap();
        assert_eq!(product.num_produit, "P-001");
        assert_eq!(product.design, "Clé à molette");
        assert_eq!(product.quantite, 4);
        assert!((product.montant() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_draft_trims_text_fields() {
        let product = draft("  P 2  ", " Vis ", NumericInput::Number(1.0), NumericInput::Number(1.0))
            .into_product()
            .unwrap();
        assert_eq!(product.num_produit, "P 2");
        assert_eq!(product.design, "Vis");
    }

    #[test]
    fn test_missing_fields_are_listed() {
        let err = ProductDraft {
            num_produit: Some("P1".to_string()),
            design: Some("   ".to_string()),
            prix: None,
            quantite: Some(NumericInput::Number(2.0)),
        }
        .into_product()
        .unwrap_err();

        match err {
            DomainError::ValidationError(msg) => {
                assert!(msg.starts_with("All fields are required"));
                assert!(msg.contains("design"));
                assert!(msg.contains("prix"));
                assert!(!msg.contains("quantite"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_numeric_strings_with_comma() {
        let product = draft(
            "P1",
            "Marteau",
            NumericInput::Text("12,75".to_string()),
            NumericInput::Text(" 3 ".to_string()),
        )
        .into_product()
        .unwrap();
        assert!((product.prix - 12.75).abs() < f64::EPSILON);
        assert_eq!(product.quantite, 3);
    }

    #[test]
    fn test_rejects_non_numeric_and_non_finite_price() {
        for bad in ["abc", "NaN", "inf"] {
            let err = draft("P1", "Marteau", NumericInput::Text(bad.to_string()), NumericInput::Number(1.0))
                .into_product()
                .unwrap_err();
            assert!(matches!(err, DomainError::ValidationError(ref m) if m.contains("prix")), "{}", bad);
        }
    }

    #[test]
    fn test_rejects_fractional_or_huge_quantity() {
        for bad in [2.5, 1e12] {
            let err = draft("P1", "Marteau", NumericInput::Number(1.0), NumericInput::Number(bad))
                .into_product()
                .unwrap_err();
            assert!(matches!(err, DomainError::ValidationError(ref m) if m.contains("whole number")));
        }
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let err = draft("P1", "Marteau", NumericInput::Number(0.0), NumericInput::Number(1.0))
            .into_product()
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(ref m) if m.contains("prix must be greater than 0")));

        let err = draft("P1", "Marteau", NumericInput::Number(1.0), NumericInput::Number(-3.0))
            .into_product()
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(ref m) if m.contains("quantite must be greater than 0")));
    }

    #[test]
    fn test_rejects_special_characters() {
        let err = draft("P#1", "Marteau", NumericInput::Number(1.0), NumericInput::Number(1.0))
            .into_product()
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(ref m) if m.contains("numProduit")));

        let err = draft("P1", "Marteau <b>", NumericInput::Number(1.0), NumericInput::Number(1.0))
            .into_product()
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(ref m) if m.contains("design")));
    }

    #[test]
    fn test_only_plain_spaces_are_allowed_inside_text() {
        let ok = draft("P 1-A", "Clé à molette", NumericInput::Number(1.0), NumericInput::Number(1.0))
            .into_product();
        assert!(ok.is_ok());

        let err = draft("P\t1", "Marteau", NumericInput::Number(1.0), NumericInput::Number(1.0))
            .into_product()
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(ref m) if m.contains("numProduit")));

        let err = draft("P1", "Marteau\nlourd", NumericInput::Number(1.0), NumericInput::Number(1.0))
            .into_product()
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(ref m) if m.contains("design")));
    }

    #[test]
    fn test_changes_draft() {
        let changes = ProductChangesDraft {
            design: Some("Pince".to_string()),
            prix: Some(NumericInput::Number(3.0)),
            quantite: Some(NumericInput::Number(7.0)),
        }
        .into_changes()
        .unwrap();
        assert_eq!(changes.design, "Pince");
        assert_eq!(changes.quantite, 7);

        let err = ProductChangesDraft::default().into_changes().unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(ref m) if m.contains("design, prix, quantite")));
    }

    #[test]
    fn test_numeric_input_deserializes_both_shapes() {
        let number: NumericInput = serde_json::from_str("10.5").unwrap();
        let text: NumericInput = serde_json::from_str("\"10,5\"").unwrap();
        assert_eq!(number.to_f64(), Some(10.5));
        assert_eq!(text.to_f64(), Some(10.5));
    }

    #[test]
    fn test_product_line_serializes_camel_case() {
        let line = ProductLine::from(Product {
            num_produit: "P1".to_string(),
            design: "Vis".to_string(),
            prix: 2.5,
            quantite: 4,
        });
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "numProduit": "P1",
                "design": "Vis",
                "prix": 2.5,
                "quantite": 4,
                "montant": 10.0
            })
        );
    }
}
