//! Investment records, drafts, and creation payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::date::lenient_date;
use crate::types::{NumberInput, RecordId};

/// An investor contribution, as stored by the backend.
///
/// Accepts `id` for `_id` and `date` for `investment_date`, like [`Harvest`].
///
/// [`Harvest`]: crate::Harvest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawInvestment")]
pub struct Investment {
    /// Backend-assigned identity
    #[serde(rename = "_id")]
    pub id: RecordId,

    /// Investor's name
    pub investor_name: String,

    /// Contribution in USD
    pub amount_usd: Option<f64>,

    /// Date of the contribution
    pub investment_date: Option<NaiveDate>,

    /// Instrument description (e.g. "revenue share")
    pub instrument: String,

    /// Free-form notes
    pub notes: Option<String>,
}

#[derive(Deserialize)]
struct RawInvestment {
    #[serde(rename = "_id", default)]
    store_id: Option<RecordId>,
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default)]
    investor_name: String,
    #[serde(default)]
    amount_usd: Option<f64>,
    #[serde(default, deserialize_with = "lenient_date")]
    investment_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    date: Option<NaiveDate>,
    #[serde(default)]
    instrument: String,
    #[serde(default)]
    notes: Option<String>,
}

impl From<RawInvestment> for Investment {
    fn from(raw: RawInvestment) -> Self {
        Self {
            id: RecordId::first_present(raw.store_id, raw.id),
            investor_name: raw.investor_name,
            amount_usd: raw.amount_usd,
            investment_date: raw.investment_date.or(raw.date),
            instrument: raw.instrument,
            notes: raw.notes,
        }
    }
}

/// In-progress investment form values, held as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentDraft {
    /// Investor's full name
    pub investor_name: String,
    /// Amount text, parsed at submission
    pub amount_usd: String,
    /// Date text (`YYYY-MM-DD`)
    pub investment_date: String,
    /// Instrument description
    pub instrument: String,
    /// Optional notes
    pub notes: String,
}

impl InvestmentDraft {
    /// Returns `true` if every field is blank.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks that every required field (all but notes) has a value.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("investor_name", &self.investor_name),
            ("amount_usd", &self.amount_usd),
            ("investment_date", &self.investment_date),
            ("instrument", &self.instrument),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(Error::validation_field(
                *field,
                format!("{field} is required"),
            )),
            None => Ok(()),
        }
    }

    /// Builds the creation payload, parsing the amount.
    pub fn to_payload(&self) -> NewInvestment {
        NewInvestment {
            investor_name: self.investor_name.clone(),
            amount_usd: NumberInput::parse(&self.amount_usd),
            investment_date: self.investment_date.clone(),
            instrument: self.instrument.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Body of an investment creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewInvestment {
    /// Investor's full name
    pub investor_name: String,
    /// Parsed amount
    pub amount_usd: NumberInput,
    /// Date as entered
    pub investment_date: String,
    /// Instrument description
    pub instrument: String,
    /// Notes, empty when none were entered
    pub notes: String,
}

impl NewInvestment {
    /// Returns `true` if the amount failed to parse.
    pub fn has_invalid_numbers(&self) -> bool {
        !self.amount_usd.is_valid()
    }
}
