//! Serializers for scalar values.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::format::{Item, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveTime, Utc};

use super::Serializer;
use crate::error::{ConfigError, DecodeError};
use crate::wire::WireValue;

/// Timestamp format used when none is given: `Sat, 21 Aug 2010 22:31:20 +0000`.
///
/// Day and month names are always English; formatting never consults the
/// process locale.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S +0000";

/// Wire string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSerializer;

impl Serializer for StringSerializer {
    type Value = String;

    fn encode(&self, value: &String) -> WireValue {
        WireValue::String(value.clone())
    }

    fn decode(&self, wire: &WireValue) -> Result<String, DecodeError> {
        wire.as_str()
            .map(str::to_owned)
            .ok_or_else(|| DecodeError::mismatch("string", wire))
    }
}

/// Wire boolean.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolSerializer;

impl Serializer for BoolSerializer {
    type Value = bool;

    fn encode(&self, value: &bool) -> WireValue {
        WireValue::Bool(*value)
    }

    fn decode(&self, wire: &WireValue) -> Result<bool, DecodeError> {
        wire.as_bool()
            .ok_or_else(|| DecodeError::mismatch("boolean", wire))
    }
}

/// Wire integer in `0..=u64::MAX`.
#[derive(Debug, Clone, Copy, Default)]
pub struct U64Serializer;

impl Serializer for U64Serializer {
    type Value = u64;

    fn encode(&self, value: &u64) -> WireValue {
        WireValue::from(*value)
    }

    fn decode(&self, wire: &WireValue) -> Result<u64, DecodeError> {
        match wire {
            WireValue::Number(n) => n
                .as_u64()
                .ok_or_else(|| DecodeError::invalid("unsigned 64-bit integer", n.to_string())),
            other => Err(DecodeError::mismatch("unsigned 64-bit integer", other)),
        }
    }
}

/// Wire integer in `i64::MIN..=i64::MAX`.
#[derive(Debug, Clone, Copy, Default)]
pub struct I64Serializer;

impl Serializer for I64Serializer {
    type Value = i64;

    fn encode(&self, value: &i64) -> WireValue {
        WireValue::from(*value)
    }

    fn decode(&self, wire: &WireValue) -> Result<i64, DecodeError> {
        match wire {
            WireValue::Number(n) => n
                .as_i64()
                .ok_or_else(|| DecodeError::invalid("signed 64-bit integer", n.to_string())),
            other => Err(DecodeError::mismatch("signed 64-bit integer", other)),
        }
    }
}

/// Wire number as a 64-bit float.
///
/// JSON has no NaN or infinity: non-finite values encode as `null`, which this
/// serializer then refuses to decode. Pair it with a validator when that
/// matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct F64Serializer;

impl Serializer for F64Serializer {
    type Value = f64;

    fn encode(&self, value: &f64) -> WireValue {
        WireValue::from(*value)
    }

    fn decode(&self, wire: &WireValue) -> Result<f64, DecodeError> {
        wire.as_f64()
            .ok_or_else(|| DecodeError::mismatch("number", wire))
    }
}

/// UTC timestamp rendered as a wire string in a fixed `strftime` format.
///
/// The format is fixed at construction and used in both directions; strings in
/// any other format fail to decode. Sub-second precision is dropped unless the
/// format asks for it. A format without a time of day decodes to midnight UTC,
/// and an offset read through `%z` is applied before converting to UTC.
#[derive(Debug, Clone)]
pub struct TimestampSerializer {
    format: String,
}

impl TimestampSerializer {
    /// Creates a serializer for `format`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidTimestampFormat`] if the format contains
    /// a specifier `chrono` does not understand.
    pub fn new(format: impl Into<String>) -> Result<Self, ConfigError> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidTimestampFormat { format });
        }
        Ok(Self { format })
    }

    /// Returns the format string.
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Default for TimestampSerializer {
    fn default() -> Self {
        Self {
            format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Serializer for TimestampSerializer {
    type Value = DateTime<Utc>;

    fn encode(&self, value: &DateTime<Utc>) -> WireValue {
        WireValue::String(value.format(&self.format).to_string())
    }

    fn decode(&self, wire: &WireValue) -> Result<DateTime<Utc>, DecodeError> {
        let expected = || format!("timestamp in format '{}'", self.format);
        let text = wire
            .as_str()
            .ok_or_else(|| DecodeError::mismatch(expected(), wire))?;
        let reject = |detail: &dyn std::fmt::Display| {
            DecodeError::invalid(expected(), format!("'{text}' ({detail})"))
        };

        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, text, StrftimeItems::new(&self.format))
            .map_err(|e| reject(&e))?;

        let offset = parsed.offset().unwrap_or(0);
        // Date-only formats decode to midnight.
        let has_time = parsed.hour_mod_12().is_some() || parsed.timestamp().is_some();
        let local = if has_time {
            parsed
                .to_naive_datetime_with_offset(offset)
                .map_err(|e| reject(&e))?
        } else {
            parsed
                .to_naive_date()
                .map_err(|e| reject(&e))?
                .and_time(NaiveTime::MIN)
        };

        let zone = FixedOffset::east_opt(offset).ok_or_else(|| reject(&"offset out of range"))?;
        local
            .and_local_timezone(zone)
            .single()
            .map(|instant| instant.with_timezone(&Utc))
            .ok_or_else(|| reject(&"instant out of range"))
    }
}

/// Bytes carried as a standard-alphabet base64 wire string.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySerializer;

impl Serializer for BinarySerializer {
    type Value = Vec<u8>;

    fn encode(&self, value: &Vec<u8>) -> WireValue {
        WireValue::String(STANDARD.encode(value))
    }

    fn decode(&self, wire: &WireValue) -> Result<Vec<u8>, DecodeError> {
        let text = wire
            .as_str()
            .ok_or_else(|| DecodeError::mismatch("base64 string", wire))?;
        STANDARD
            .decode(text)
            .map_err(|e| DecodeError::invalid("base64 string", format!("'{text}' ({e})")))
    }
}

/// The unit value, for routes that take no argument or return no result.
///
/// Encodes as `null`; decodes `null` or an empty object.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidSerializer;

impl Serializer for VoidSerializer {
    type Value = ();

    fn encode(&self, _value: &()) -> WireValue {
        WireValue::Null
    }

    fn decode(&self, wire: &WireValue) -> Result<(), DecodeError> {
        match wire {
            WireValue::Null => Ok(()),
            WireValue::Object(map) if map.is_empty() => Ok(()),
            other => Err(DecodeError::mismatch("null", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_string_round_trip() {
        let wire = StringSerializer.encode(&"héllo \"q\"".to_string());
        assert_eq!(wire, json!("héllo \"q\""));
        assert_eq!(StringSerializer.decode(&wire).unwrap(), "héllo \"q\"");
    }

    #[test]
    fn test_string_rejects_number() {
        let err = StringSerializer.decode(&json!(5)).unwrap_err();
        assert_eq!(err.to_string(), "$: expected string, got integer");
    }

    #[test]
    fn test_bool() {
        assert_eq!(BoolSerializer.encode(&false), json!(false));
        assert!(BoolSerializer.decode(&json!(true)).unwrap());
        assert!(BoolSerializer.decode(&json!("true")).is_err());
    }

    #[test]
    fn test_u64_extremes() {
        let wire = U64Serializer.encode(&u64::MAX);
        assert_eq!(wire.to_string(), "18446744073709551615");
        assert_eq!(U64Serializer.decode(&wire).unwrap(), u64::MAX);
    }

    #[test]
    fn test_u64_rejects_negative_and_fraction() {
        let err = U64Serializer.decode(&json!(-1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "$: expected unsigned 64-bit integer, got -1"
        );
        assert!(U64Serializer.decode(&json!(1.5)).is_err());
        assert!(U64Serializer.decode(&json!("1")).is_err());
    }

    #[test]
    fn test_i64() {
        assert_eq!(I64Serializer.decode(&json!(-42)).unwrap(), -42);
        assert!(I64Serializer.decode(&json!(u64::MAX)).is_err());
    }

    #[test]
    fn test_f64() {
        assert_eq!(F64Serializer.decode(&json!(2.5)).unwrap(), 2.5);
        assert_eq!(F64Serializer.decode(&json!(3)).unwrap(), 3.0);
        assert_eq!(F64Serializer.encode(&f64::NAN), json!(null));
        assert!(F64Serializer.decode(&json!(null)).is_err());
    }

    #[test]
    fn test_timestamp_default_format() {
        let ts = Utc.with_ymd_and_hms(2010, 8, 21, 22, 31, 20).unwrap();
        let wire = TimestampSerializer::default().encode(&ts);
        assert_eq!(wire, json!("Sat, 21 Aug 2010 22:31:20 +0000"));
        assert_eq!(TimestampSerializer::default().decode(&wire).unwrap(), ts);
    }

    #[test]
    fn test_timestamp_custom_format() {
        let ser = TimestampSerializer::new("%Y-%m-%dT%H:%M:%SZ").unwrap();
        let ts = Utc.with_ymd_and_hms(2015, 4, 1, 8, 0, 5).unwrap();
        assert_eq!(ser.encode(&ts), json!("2015-04-01T08:00:05Z"));
        assert_eq!(ser.decode(&json!("2015-04-01T08:00:05Z")).unwrap(), ts);
    }

    #[test]
    fn test_timestamp_date_only_format() {
        let ser = TimestampSerializer::new("%Y-%m-%d").unwrap();
        let ts = Utc.with_ymd_and_hms(2015, 4, 1, 0, 0, 0).unwrap();
        assert_eq!(ser.encode(&ts), json!("2015-04-01"));
        assert_eq!(ser.decode(&json!("2015-04-01")).unwrap(), ts);
    }

    #[test]
    fn test_timestamp_applies_offset() {
        let ser = TimestampSerializer::new("%Y-%m-%dT%H:%M:%S%z").unwrap();
        let expected = Utc.with_ymd_and_hms(2015, 4, 1, 8, 0, 0).unwrap();
        assert_eq!(ser.decode(&json!("2015-04-01T10:00:00+0200")).unwrap(), expected);
        assert_eq!(ser.decode(&json!("2015-04-01T03:30:00-0430")).unwrap(), expected);

        let ts = Utc.with_ymd_and_hms(2020, 2, 29, 23, 59, 59).unwrap();
        assert_eq!(ser.decode(&ser.encode(&ts)).unwrap(), ts);
    }

    #[test]
    fn test_timestamp_hour_without_minute_is_rejected() {
        let ser = TimestampSerializer::new("%Y-%m-%d %H").unwrap();
        assert!(ser.decode(&json!("2015-04-01 10")).is_err());
    }

    #[test]
    fn test_timestamp_rejects_other_format() {
        let ser = TimestampSerializer::new("%Y-%m-%dT%H:%M:%SZ").unwrap();
        let err = ser.decode(&json!("Sat, 21 Aug 2010 22:31:20 +0000")).unwrap_err();
        assert!(
            err.to_string()
                .contains("expected timestamp in format '%Y-%m-%dT%H:%M:%SZ'")
        );
    }

    #[test]
    fn test_timestamp_rejects_bad_format_string() {
        let result = TimestampSerializer::new("%Y-%Q");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidTimestampFormat { .. })
        ));
    }

    #[test]
    fn test_binary() {
        let wire = BinarySerializer.encode(&vec![0x00, 0x01, 0xFF]);
        assert_eq!(wire, json!("AAH/"));
        assert_eq!(BinarySerializer.decode(&wire).unwrap(), vec![0x00, 0x01, 0xFF]);
        assert!(BinarySerializer.decode(&json!("not base64!")).is_err());
    }

    #[test]
    fn test_void() {
        assert_eq!(VoidSerializer.encode(&()), json!(null));
        assert!(VoidSerializer.decode(&json!(null)).is_ok());
        assert!(VoidSerializer.decode(&json!({})).is_ok());
        assert!(VoidSerializer.decode(&json!({"a": 1})).is_err());
    }
}
