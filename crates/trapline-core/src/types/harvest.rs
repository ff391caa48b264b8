//! Harvest records, drafts, and creation payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::date::lenient_date;
use crate::types::{NumberInput, RecordId};

/// A catch landed by a boat, as stored by the backend.
///
/// Decoding tolerates both `_id` and `id`, and both `harvest_date` and
/// `date`; the first non-empty value of each pair wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHarvest")]
pub struct Harvest {
    /// Backend-assigned identity
    #[serde(rename = "_id")]
    pub id: RecordId,

    /// Landing date
    pub harvest_date: Option<NaiveDate>,

    /// Vessel name
    pub boat: String,

    /// Fishing area or port
    pub location: String,

    /// Landed weight in kilograms
    pub weight_kg: Option<f64>,

    /// Dock price per kilogram in USD
    pub price_per_kg: Option<f64>,

    /// Free-form notes
    pub notes: Option<String>,
}

/// Wire shape of a harvest, with every key variant kept apart.
#[derive(Deserialize)]
struct RawHarvest {
    #[serde(rename = "_id", default)]
    store_id: Option<RecordId>,
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_date")]
    harvest_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    date: Option<NaiveDate>,
    #[serde(default)]
    boat: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    weight_kg: Option<f64>,
    #[serde(default)]
    price_per_kg: Option<f64>,
    #[serde(default)]
    notes: Option<String>,
}

impl From<RawHarvest> for Harvest {
    fn from(raw: RawHarvest) -> Self {
        Self {
            id: RecordId::first_present(raw.store_id, raw.id),
            harvest_date: raw.harvest_date.or(raw.date),
            boat: raw.boat,
            location: raw.location,
            weight_kg: raw.weight_kg,
            price_per_kg: raw.price_per_kg,
            notes: raw.notes,
        }
    }
}

impl Harvest {
    /// Weight and price multiplied, counting an absent factor as zero.
    pub fn revenue(&self) -> f64 {
        self.weight_kg.unwrap_or(0.0) * self.price_per_kg.unwrap_or(0.0)
    }
}

/// In-progress harvest form values, held as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestDraft {
    /// Landing date text (`YYYY-MM-DD` from a date input)
    pub harvest_date: String,
    /// Vessel name
    pub boat: String,
    /// Area or port
    pub location: String,
    /// Weight text, parsed at submission
    pub weight_kg: String,
    /// Price text, parsed at submission
    pub price_per_kg: String,
    /// Optional notes
    pub notes: String,
}

impl HarvestDraft {
    /// Returns `true` if every field is blank.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks that every required field (all but notes) has a value.
    ///
    /// Fields are checked in form order and the first blank one is reported.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("harvest_date", &self.harvest_date),
            ("boat", &self.boat),
            ("location", &self.location),
            ("weight_kg", &self.weight_kg),
            ("price_per_kg", &self.price_per_kg),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(Error::validation_field(
                *field,
                format!("{field} is required"),
            )),
            None => Ok(()),
        }
    }

    /// Builds the creation payload, parsing the numeric fields.
    pub fn to_payload(&self) -> NewHarvest {
        NewHarvest {
            harvest_date: self.harvest_date.clone(),
            boat: self.boat.clone(),
            location: self.location.clone(),
            weight_kg: NumberInput::parse(&self.weight_kg),
            price_per_kg: NumberInput::parse(&self.price_per_kg),
            notes: self.notes.clone(),
        }
    }
}

/// Body of a harvest creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewHarvest {
    /// Landing date as entered
    pub harvest_date: String,
    /// Vessel name
    pub boat: String,
    /// Area or port
    pub location: String,
    /// Parsed weight
    pub weight_kg: NumberInput,
    /// Parsed price
    pub price_per_kg: NumberInput,
    /// Notes, empty when none were entered
    pub notes: String,
}

impl NewHarvest {
    /// Returns `true` if any numeric field failed to parse.
    pub fn has_invalid_numbers(&self) -> bool {
        !self.weight_kg.is_valid() || !self.price_per_kg.is_valid()
    }
}
