//! # Announcement Record
//!
//! Wire model for one announcement: a UUID (the dedup key), a rich-text
//! message, and optional locale / time-window constraints. Timestamps are
//! RFC-3339 offset date-times on the wire.
//!
//! Decoding is per-record tolerant: a malformed element in a payload is
//! reported as a [`RecordError`] without touching its siblings. Encoding is
//! the structural inverse (absent optional fields are omitted).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::RecordError;
use crate::text::RichText;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub uuid: Uuid,
    pub message: RichText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire: Option<DateTime<FixedOffset>>,
}

impl Announcement {
    /// Decode one record from a payload element. The `uuid` and `message`
    /// checks run first so their absence is reported precisely; everything
    /// else (timestamp syntax, message shape) surfaces as [`RecordError::Decode`].
    pub fn decode(value: Value) -> Result<Self, RecordError> {
        let obj = value.as_object().ok_or(RecordError::NotAnObject)?;

        let raw_id = match obj.get("uuid") {
            None | Some(Value::Null) => return Err(RecordError::MissingId),
            Some(v) => v,
        };
        let uuid = raw_id
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .ok_or_else(|| RecordError::BadId(raw_id.to_string()))?;

        match obj.get("message") {
            None | Some(Value::Null) => return Err(RecordError::MissingMessage { uuid }),
            Some(_) => {}
        }

        serde_json::from_value(value).map_err(RecordError::Decode)
    }

    /// Serialize to the wire representation (tooling and tests).
    pub fn to_json(&self) -> String {
        // Serialization of this shape cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn to_json_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Value {
        json!({
            "uuid": "11111111-1111-1111-1111-111111111111",
            "message": "hello"
        })
    }

    #[test]
    fn minimal_record_decodes() {
        let rec = Announcement::decode(base()).unwrap();
        assert_eq!(
            rec.uuid,
            "11111111-1111-1111-1111-111111111111".parse::<Uuid>().unwrap()
        );
        assert_eq!(rec.message.plain_text(), "hello");
        assert_eq!(rec.locale, None);
        assert_eq!(rec.from, None);
        assert_eq!(rec.expire, None);
    }

    #[test]
    fn explicit_nulls_decode_as_absent() {
        let mut v = base();
        v["locale"] = Value::Null;
        v["from"] = Value::Null;
        v["expire"] = Value::Null;
        let rec = Announcement::decode(v).unwrap();
        assert_eq!(rec.locale, None);
        assert_eq!(rec.from, None);
        assert_eq!(rec.expire, None);
    }

    #[test]
    fn missing_uuid_is_rejected() {
        let v = json!({"message": "hello"});
        assert!(matches!(
            Announcement::decode(v),
            Err(RecordError::MissingId)
        ));
    }

    #[test]
    fn null_uuid_is_rejected() {
        let v = json!({"uuid": null, "message": "hello"});
        assert!(matches!(
            Announcement::decode(v),
            Err(RecordError::MissingId)
        ));
    }

    #[test]
    fn non_uuid_id_is_rejected() {
        let v = json!({"uuid": "not-a-uuid", "message": "hello"});
        assert!(matches!(Announcement::decode(v), Err(RecordError::BadId(_))));
    }

    #[test]
    fn missing_message_is_rejected_with_uuid() {
        let v = json!({"uuid": "11111111-1111-1111-1111-111111111111"});
        match Announcement::decode(v) {
            Err(RecordError::MissingMessage { uuid }) => {
                assert_eq!(
                    uuid,
                    "11111111-1111-1111-1111-111111111111".parse::<Uuid>().unwrap()
                );
            }
            other => panic!("expected MissingMessage, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_timestamp_is_rejected() {
        let mut v = base();
        v["from"] = json!("yesterday at noon");
        assert!(matches!(
            Announcement::decode(v),
            Err(RecordError::Decode(_))
        ));
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(matches!(
            Announcement::decode(json!("string")),
            Err(RecordError::NotAnObject)
        ));
    }

    #[test]
    fn round_trip_preserves_all_fields() {
        let v = json!({
            "uuid": "22222222-2222-2222-2222-222222222222",
            "message": {"text": "styled", "bold": true},
            "locale": "en-US",
            "from": "2026-01-01T00:00:00+00:00",
            "expire": "2026-12-31T23:59:59+01:00"
        });
        let rec = Announcement::decode(v).unwrap();
        let back = Announcement::decode(rec.to_json_value()).unwrap();
        assert_eq!(back, rec);
        assert_eq!(back.from.unwrap().timestamp(), rec.from.unwrap().timestamp());
    }

    #[test]
    fn encoding_omits_absent_optionals() {
        let rec = Announcement::decode(base()).unwrap();
        let value = rec.to_json_value();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("locale"));
        assert!(!obj.contains_key("from"));
        assert!(!obj.contains_key("expire"));
    }
}
