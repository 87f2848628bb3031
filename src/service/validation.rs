//! Turn a JSON request body into a typed `CarInput`.
//!
//! Numeric fields are parsed explicitly: JSON numbers are taken as-is and
//! strings must hold a number. Any other shape is a validation error rather
//! than a silent coercion. Blank strings count as absent.

use crate::error::AppError;
use crate::model::CarInput;
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Body for POST: `brand`, `model` and `year` must be present and non-empty.
    pub fn validate_create(body: Value) -> Result<CarInput, AppError> {
        let car = Self::parse(body)?;
        if !car.has_identity() || car.year == Some(0) {
            return Err(AppError::Validation(
                "brand, model and year are required".into(),
            ));
        }
        Ok(car)
    }

    /// Body for PUT: same field rules, nothing required.
    pub fn validate_update(body: Value) -> Result<CarInput, AppError> {
        Self::parse(body)
    }

    fn parse(body: Value) -> Result<CarInput, AppError> {
        let obj = match body {
            Value::Object(m) => m,
            _ => return Err(AppError::BadRequest("body must be a JSON object".into())),
        };
        Ok(CarInput {
            brand: text(&obj, "brand")?,
            model: text(&obj, "model")?,
            year: integer(&obj, "year")?,
            color: text(&obj, "color")?,
            price: decimal(&obj, "price")?,
            mileage: integer(&obj, "mileage")?,
            description: text(&obj, "description")?,
            image_url: text(&obj, "imageUrl")?,
            highlights: text(&obj, "highlights")?,
        })
    }
}

/// Present, non-null and not a blank string.
fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(v) => Some(v),
    }
}

fn text(obj: &Map<String, Value>, key: &str) -> Result<Option<String>, AppError> {
    match present(obj, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AppError::Validation(format!("{} must be a string", key))),
    }
}

fn integer(obj: &Map<String, Value>, key: &str) -> Result<Option<i64>, AppError> {
    let invalid = || AppError::Validation(format!("{} must be an integer", key));
    match present(obj, key) {
        None => Ok(None),
        Some(Value::Number(n)) => n.as_i64().map(Some).ok_or_else(invalid),
        Some(Value::String(s)) => s.trim().parse().map(Some).map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

fn decimal(obj: &Map<String, Value>, key: &str) -> Result<Option<f64>, AppError> {
    let invalid = || AppError::Validation(format!("{} must be a number", key));
    match present(obj, key) {
        None => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or_else(invalid),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Some(f)),
            _ => Err(invalid()),
        },
        Some(_) => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_accepts_full_payload() {
        let car = RequestValidator::validate_create(json!({
            "brand": "Peugeot",
            "model": "308",
            "year": 2019,
            "color": "Bleu",
            "price": 15999.9,
            "mileage": 42000,
            "imageUrl": "https://example.com/308.jpg",
        }))
        .unwrap();
        assert_eq!(car.brand.as_deref(), Some("Peugeot"));
        assert_eq!(car.year, Some(2019));
        assert_eq!(car.price, Some(15999.9));
        assert_eq!(car.image_url.as_deref(), Some("https://example.com/308.jpg"));
        assert_eq!(car.description, None);
    }

    #[test]
    fn create_requires_identity_fields() {
        for body in [
            json!({"model": "308", "year": 2019}),
            json!({"brand": "Peugeot", "year": 2019}),
            json!({"brand": "Peugeot", "model": "308"}),
            json!({"brand": "", "model": "308", "year": 2019}),
            json!({"brand": "Peugeot", "model": "308", "year": null}),
            json!({"brand": "Peugeot", "model": "308", "year": 0}),
        ] {
            let err = RequestValidator::validate_create(body).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn numeric_strings_are_parsed() {
        let car = RequestValidator::validate_create(json!({
            "brand": "Renault",
            "model": "Twingo",
            "year": "2004",
            "price": "1200.50",
            "mileage": " 180000 ",
        }))
        .unwrap();
        assert_eq!(car.year, Some(2004));
        assert_eq!(car.price, Some(1200.5));
        assert_eq!(car.mileage, Some(180_000));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        for body in [
            json!({"brand": "a", "model": "b", "year": 2000, "price": "cheap"}),
            json!({"brand": "a", "model": "b", "year": 2000, "mileage": 12.5}),
            json!({"brand": "a", "model": "b", "year": true}),
            json!({"brand": "a", "model": "b", "year": 2000, "price": "NaN"}),
            json!({"brand": 7, "model": "b", "year": 2000}),
        ] {
            assert!(RequestValidator::validate_create(body).is_err());
        }
    }

    #[test]
    fn update_requires_nothing() {
        let car = RequestValidator::validate_update(json!({"color": "Vert"})).unwrap();
        assert_eq!(car.brand, None);
        assert_eq!(car.color.as_deref(), Some("Vert"));
    }

    #[test]
    fn body_must_be_an_object() {
        let err = RequestValidator::validate_update(json!([1, 2])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
