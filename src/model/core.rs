//! Value objects for the person resource model.
//!
//! Records are plain serde structs; their wire constraints live in static
//! [`ObjectSchema`] descriptors consumed by the validator. Optional fields
//! serialize as explicit `null` when unset, so an echoed or merged record
//! always carries its full shape.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::schema::{FieldSpec, FieldType, ObjectSchema};

/// Closed set of recognized hair colors.
///
/// Serializes to its lowercase label; deserialization performs the
/// membership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

impl HairColor {
    /// String labels accepted on the wire, in declaration order.
    pub const LABELS: &'static [&'static str] = &["white", "brown", "black", "blonde", "red"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    #[serde(default)]
    pub hair_color: Option<HairColor>,
    #[serde(default)]
    pub is_married: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    pub country: String,
}

static PERSON_SCHEMA: Lazy<ObjectSchema> = Lazy::new(|| {
    ObjectSchema::new(
        "Person",
        vec![
            FieldSpec::required(
                "first_name",
                FieldType::String {
                    min_len: Some(1),
                    max_len: Some(50),
                },
            ),
            FieldSpec::required(
                "last_name",
                FieldType::String {
                    min_len: Some(1),
                    max_len: Some(50),
                },
            ),
            FieldSpec::required(
                "age",
                FieldType::Integer {
                    gt: Some(0),
                    le: Some(100),
                },
            ),
            FieldSpec::optional(
                "hair_color",
                FieldType::Enum {
                    allowed: HairColor::LABELS,
                },
            ),
            FieldSpec::optional("is_married", FieldType::Boolean),
        ],
    )
});

static LOCATION_SCHEMA: Lazy<ObjectSchema> = Lazy::new(|| {
    ObjectSchema::new(
        "Location",
        vec![
            FieldSpec::required(
                "city",
                FieldType::String {
                    min_len: Some(1),
                    max_len: Some(20),
                },
            ),
            FieldSpec::optional(
                "state",
                FieldType::String {
                    min_len: None,
                    max_len: None,
                },
            ),
            FieldSpec::required(
                "country",
                FieldType::String {
                    min_len: Some(1),
                    max_len: Some(20),
                },
            ),
        ],
    )
});

impl Person {
    #[must_use]
    pub fn schema() -> &'static ObjectSchema {
        &PERSON_SCHEMA
    }
}

impl Location {
    #[must_use]
    pub fn schema() -> &'static ObjectSchema {
        &LOCATION_SCHEMA
    }
}
