//! Tolerant JSON decoding for fields with inconsistent wire shapes.
//!
//! Several fields in the Shopify REST API have changed serialization over
//! the years, so responses from different shops (or different eras of the
//! same shop) encode logically identical data in different JSON shapes:
//!
//! - Line item `properties` may arrive as an array of name/value pairs,
//!   as a single bare object, as `{}`, as `null`, or be absent entirely.
//! - `requested_fulfillment_service_id` may arrive as a string, a number,
//!   or `null`.
//! - Timestamps on recurring application charges may be date-only
//!   (`YYYY-MM-DD`) or full RFC 3339 with a zone offset.
//!
//! The decoders in this module normalize each of those fields into a single
//! in-memory shape. Each decoder dispatches on the first significant byte of
//! the raw value rather than parsing into a generic tree first, so the shape
//! decision is made before any allocation.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::rest::decode::{decode_properties, decode_variant_scalar};
//!
//! // Array and single-object payloads normalize to the same shape.
//! let props = decode_properties(r#"[{"name":"engraving","value":"HBD"}]"#).unwrap();
//! assert_eq!(props.len(), 1);
//! assert_eq!(props[0].name, "engraving");
//!
//! let props = decode_properties(r#"{"name":"engraving","value":"HBD"}"#).unwrap();
//! assert_eq!(props.len(), 1);
//!
//! // The legacy "no properties" marker collapses to an empty list.
//! assert!(decode_properties("{}").unwrap().is_empty());
//!
//! // Scalars collapse to their string rendering.
//! assert_eq!(decode_variant_scalar("12345").unwrap(), "12345");
//! assert_eq!(decode_variant_scalar("null").unwrap(), "");
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use thiserror::Error;

/// Error type for shape-tolerant field decoding.
///
/// Returned when a raw JSON value is genuinely malformed, or arrives in a
/// shape the field has never legitimately used. Shape *drift* (array vs.
/// object vs. null) is handled without error; corruption is not.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The value failed to parse as the shape its first token promised.
    #[error("malformed {shape} value: {source}")]
    Malformed {
        /// The shape implied by the first significant byte.
        shape: &'static str,
        /// The underlying JSON parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The value arrived in a JSON shape the field never legitimately uses.
    #[error("unsupported JSON shape: expected {expected}, found {found}")]
    UnsupportedShape {
        /// The shapes the field is known to use.
        expected: &'static str,
        /// The shape that was actually received.
        found: &'static str,
    },
}

/// Error type for flexible timestamp parsing.
///
/// Carries the original input string so callers can report exactly what
/// the API sent.
#[derive(Debug, Error)]
#[error("invalid timestamp '{value}': {source}")]
pub struct TimestampParseError {
    /// The string that failed to parse.
    pub value: String,
    #[source]
    source: chrono::ParseError,
}

/// A single name/value property pair as sent by the API.
///
/// Used for order `note_attributes` and line item `properties`. The value
/// is kept as raw JSON since the API accepts arbitrary JSON there.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NoteAttribute {
    /// The property name.
    #[serde(default)]
    pub name: String,
    /// The property value.
    #[serde(default)]
    pub value: serde_json::Value,
}

impl NoteAttribute {
    /// Returns `true` if this pair is the legacy "no properties" marker:
    /// an object with an empty name and a null value, as produced by `{}`.
    #[must_use]
    pub fn is_empty_marker(&self) -> bool {
        self.name.is_empty() && self.value.is_null()
    }
}

/// Decodes a properties field that may arrive in several historical shapes.
///
/// The input is the raw JSON text of the field value. The branch is decided
/// by the first significant byte:
///
/// - empty input or `null` decodes to an empty list
/// - `[` decodes as an array of [`NoteAttribute`] pairs
/// - anything else decodes as a single [`NoteAttribute`] object; the
///   "effectively empty" marker (`{}`) collapses to an empty list, any
///   other object becomes a one-element list
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] if the value fails to parse as the
/// shape its first byte promised. Shape drift is tolerated; corrupt JSON
/// is not.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::decode::decode_properties;
///
/// assert!(decode_properties("").unwrap().is_empty());
/// assert!(decode_properties("{}").unwrap().is_empty());
///
/// let single = decode_properties(r#"{"name":"gift_note","value":"Enjoy!"}"#).unwrap();
/// assert_eq!(single.len(), 1);
/// ```
pub fn decode_properties(raw: &str) -> Result<Vec<NoteAttribute>, DecodeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }

    if trimmed.as_bytes()[0] == b'[' {
        return serde_json::from_str(trimmed).map_err(|source| DecodeError::Malformed {
            shape: "array",
            source,
        });
    }

    let single: NoteAttribute =
        serde_json::from_str(trimmed).map_err(|source| DecodeError::Malformed {
            shape: "object",
            source,
        })?;

    if single.is_empty_marker() {
        Ok(Vec::new())
    } else {
        Ok(vec![single])
    }
}

/// Decodes a scalar field that may arrive as a string, a number, or null.
///
/// All three shapes collapse into a single string: null becomes the empty
/// string, numbers become their decimal rendering, strings pass through.
///
/// # Errors
///
/// Returns [`DecodeError::UnsupportedShape`] for booleans, objects, and
/// arrays, and [`DecodeError::Malformed`] for values that are not valid
/// JSON at all.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::decode::decode_variant_scalar;
///
/// assert_eq!(decode_variant_scalar("null").unwrap(), "");
/// assert_eq!(decode_variant_scalar("12345").unwrap(), "12345");
/// assert_eq!(decode_variant_scalar(r#""manual""#).unwrap(), "manual");
/// assert!(decode_variant_scalar("true").is_err());
/// ```
pub fn decode_variant_scalar(raw: &str) -> Result<String, DecodeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(String::new());
    }

    const EXPECTED: &str = "null, number, or string";

    match trimmed.as_bytes()[0] {
        b'"' => serde_json::from_str::<String>(trimmed).map_err(|source| DecodeError::Malformed {
            shape: "string",
            source,
        }),
        b't' | b'f' => Err(DecodeError::UnsupportedShape {
            expected: EXPECTED,
            found: "boolean",
        }),
        b'{' => Err(DecodeError::UnsupportedShape {
            expected: EXPECTED,
            found: "object",
        }),
        b'[' => Err(DecodeError::UnsupportedShape {
            expected: EXPECTED,
            found: "array",
        }),
        _ => serde_json::from_str::<serde_json::Number>(trimmed)
            .map(|n| n.to_string())
            .map_err(|source| DecodeError::Malformed {
                shape: "number",
                source,
            }),
    }
}

/// Parses a timestamp that may be date-only or full RFC 3339.
///
/// The API emits two representations across different endpoints: plain
/// `YYYY-MM-DD` dates and RFC 3339 timestamps with a numeric zone offset.
/// String length is the discriminator: exactly 10 bytes means date-only,
/// which parses to midnight at a zero offset; anything else is parsed as
/// RFC 3339 with its offset preserved.
///
/// # Errors
///
/// Returns [`TimestampParseError`] (carrying the original string) when the
/// input matches neither format.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::decode::parse_flexible_timestamp;
///
/// assert!(parse_flexible_timestamp(None).unwrap().is_none());
///
/// let midnight = parse_flexible_timestamp(Some("2013-06-27")).unwrap().unwrap();
/// assert_eq!(midnight.to_rfc3339(), "2013-06-27T00:00:00+00:00");
///
/// let offset = parse_flexible_timestamp(Some("2013-06-27T08:48:27-04:00"))
///     .unwrap()
///     .unwrap();
/// assert_eq!(offset.offset().local_minus_utc(), -4 * 3600);
/// ```
pub fn parse_flexible_timestamp(
    raw: Option<&str>,
) -> Result<Option<DateTime<FixedOffset>>, TimestampParseError> {
    let Some(value) = raw else {
        return Ok(None);
    };

    let parsed = if value.len() == 10 {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
    } else {
        DateTime::parse_from_rfc3339(value)
    };

    parsed.map(Some).map_err(|source| TimestampParseError {
        value: value.to_string(),
        source,
    })
}

/// Serde adapter for [`decode_properties`].
///
/// Apply with `#[serde(default, deserialize_with = "...")]` so an absent
/// field also decodes to an empty list.
///
/// # Errors
///
/// Returns a deserializer error wrapping [`DecodeError`] on malformed input.
pub fn deserialize_properties<'de, D>(deserializer: D) -> Result<Vec<NoteAttribute>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Box<RawValue>> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(Vec::new()),
        Some(value) => decode_properties(value.get()).map_err(de::Error::custom),
    }
}

/// Serde adapter for [`decode_variant_scalar`].
///
/// # Errors
///
/// Returns a deserializer error wrapping [`DecodeError`] for boolean,
/// object, or array input.
pub fn deserialize_variant_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Box<RawValue>> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(String::new()),
        Some(value) => decode_variant_scalar(value.get()).map_err(de::Error::custom),
    }
}

/// Serde adapter for [`parse_flexible_timestamp`].
///
/// # Errors
///
/// Returns a deserializer error wrapping [`TimestampParseError`] when the
/// string matches neither recognized format.
pub fn deserialize_flexible_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    parse_flexible_timestamp(raw.as_deref()).map_err(de::Error::custom)
}
