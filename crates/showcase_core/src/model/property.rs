//! Property listing model.
//!
//! # Responsibility
//! - Define the stored `Property` record and its wire shape.
//! - Unpack `CreatePropertyRequest` into a validated `NewProperty`.
//!
//! # Invariants
//! - `id` is assigned by `Property::create`, never taken from the request.
//! - `created_at == updated_at` for every record built by `create`.

use super::validation::{PresenceCheck, ValidationError};
use super::{new_record_id, now, Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{Display, Formatter};

const REQUIRED_FIELDS: &[&str] = &["name", "type", "location", "price"];
/// Largest magnitude a JSON number can carry as an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Listing category. Serialized with the human-facing labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Plot,
    Shed,
    #[serde(rename = "Retail Store", alias = "RetailStore")]
    RetailStore,
    #[serde(rename = "Plot Store", alias = "PlotStore")]
    PlotStore,
    Residential,
    Commercial,
    Industrial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 7] = [
        Self::Plot,
        Self::Shed,
        Self::RetailStore,
        Self::PlotStore,
        Self::Residential,
        Self::Commercial,
        Self::Industrial,
    ];

    /// Wire label, e.g. `"Retail Store"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Plot => "Plot",
            Self::Shed => "Shed",
            Self::RetailStore => "Retail Store",
            Self::PlotStore => "Plot Store",
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
        }
    }

    /// Parses a wire label or its compact spelling (`RetailStore`).
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            kind.label() == value || kind.label().replace(' ', "") == value
        })
    }
}

impl Display for PropertyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map position of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Stored property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: RecordId,
    pub name: String,
    /// Serialized as `type` to match the external schema.
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub location: String,
    /// Whole prices are written as JSON integers (`100000`, not `100000.0`).
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Builds a stored record from validated input, stamping a fresh id and
    /// the current time.
    pub fn create(input: NewProperty) -> Self {
        Self::with_id(new_record_id(), now(), input)
    }

    /// Builds a record with a caller-provided id and timestamp.
    ///
    /// Used for fixture seeding where ids are fixed.
    pub fn with_id(id: impl Into<RecordId>, at: DateTime<Utc>, input: NewProperty) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            kind: input.kind,
            location: input.location,
            price: input.price,
            description: input.description,
            image: input.image,
            coordinates: input.coordinates,
            features: input.features,
            created_at: at,
            updated_at: at,
        }
    }
}

fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

impl Record for Property {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Validated property fields, ready to be stamped into a `Property`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub name: String,
    pub kind: PropertyType,
    pub location: String,
    pub price: f64,
    pub description: String,
    pub image: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub features: Option<Vec<String>>,
}

/// `POST /api/properties` body. Every field is optional on the wire so that
/// absence is reported as a validation error rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// Raw wire label; mapped onto `PropertyType` after the presence check.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl CreatePropertyRequest {
    /// Checks `name`, `type`, `location` and `price` for presence.
    ///
    /// # Errors
    /// - `ValidationError::MissingFields` naming every required field when any
    ///   of them is absent or falsy (`""` counts as absent for `type`).
    /// - `ValidationError::UnknownPropertyType` when `type` is present but not
    ///   a known label.
    pub fn validate(self) -> Result<NewProperty, ValidationError> {
        let mut check = PresenceCheck::new(REQUIRED_FIELDS);
        let name = check.text("name", self.name);
        let kind = check.text("type", self.kind);
        let location = check.text("location", self.location);
        let price = check.number("price", self.price);
        check.finish()?;
        let kind =
            PropertyType::from_label(&kind).ok_or(ValidationError::UnknownPropertyType(kind))?;

        Ok(NewProperty {
            name,
            kind,
            location,
            price,
            description: self.description.unwrap_or_default(),
            image: self.image,
            coordinates: self.coordinates,
            features: self.features,
        })
    }
}

/// Response body for `GET /api/properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListResponse {
    pub properties: Vec<Property>,
}

/// Response body for `POST /api/properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePropertyResponse {
    pub property: Property,
    pub message: String,
}
