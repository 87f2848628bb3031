//! Car row and request payload types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of the `cars` table. JSON keys match the column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Car {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i64,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub mileage: Option<i64>,
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    #[sqlx(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub highlights: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Validated body of a create or update request.
///
/// Every field is optional here: creation additionally requires `brand`,
/// `model` and `year`, while an update writes whatever is given (absent
/// fields become NULL).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarInput {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i64>,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub mileage: Option<i64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub highlights: Option<String>,
}

impl CarInput {
    pub fn has_identity(&self) -> bool {
        self.brand.is_some() && self.model.is_some() && self.year.is_some()
    }
}
