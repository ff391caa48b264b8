//! Lenient calendar-date decoding for backend records.

use chrono::NaiveDate;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Extracts the leading `YYYY-MM-DD` of a date or timestamp string.
///
/// Returns `None` when the text does not start with a valid calendar date.
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let head = text.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Deserializes an optional date without failing the enclosing record.
///
/// Used with `#[serde(default, deserialize_with = ...)]` on record date
/// fields; anything that is not a string starting with a calendar date
/// becomes `None`.
pub(crate) fn lenient_date<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LooseText>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|text| text.0)
        .as_deref()
        .and_then(parse_calendar_date))
}

/// Any JSON value, keeping only string content.
struct LooseText(Option<String>);

impl<'de> Deserialize<'de> for LooseText {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LooseVisitor;

        impl<'de> Visitor<'de> for LooseVisitor {
            type Value = LooseText;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a date string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LooseText, E> {
                Ok(LooseText(Some(v.to_string())))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<LooseText, E> {
                Ok(LooseText(Some(v)))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<LooseText, E> {
                Ok(LooseText(None))
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<LooseText, E> {
                Ok(LooseText(None))
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<LooseText, E> {
                Ok(LooseText(None))
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<LooseText, E> {
                Ok(LooseText(None))
            }

            fn visit_unit<E: de::Error>(self) -> Result<LooseText, E> {
                Ok(LooseText(None))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<LooseText, A::Error> {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(LooseText(None))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<LooseText, A::Error> {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(LooseText(None))
            }
        }

        deserializer.deserialize_any(LooseVisitor)
    }
}
