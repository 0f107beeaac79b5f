use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;

use super::FromRaw;
use super::fields::{as_record, int_field, opt_int_field, opt_string_field, string_field};
use crate::error::ApiResult;
use crate::timestamp::parse_timestamp;

/// A receiver deployment as listed by the `receivers` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receiver {
    pub deployment_name: String,
    /// `active`, `terminated`, ...
    pub deployment_status: String,
    pub motus_receiver_id: i64,
    pub project_receiver_id: i64,
    pub deployment_start: DateTime<FixedOffset>,
    pub receiver_type: Option<String>,
    /// Hardware identifier, e.g. `SG-5113BBBK0173`
    pub receiver_id: String,
    pub device_id: Option<i64>,
    pub mac_address: Option<String>,
}

impl Receiver {
    pub fn is_active(&self) -> bool {
        self.deployment_status.eq_ignore_ascii_case("active")
    }
}

impl FromRaw for Receiver {
    /// Builds a receiver from one element of the `receivers` payload.
    ///
    /// # Errors
    ///
    /// Fails on a missing key, on a non-integer `motusRecvID`/`recvProjectID`
    /// (or non-null `deviceID`), and on a `dtStart` outside the API
    /// timestamp format.
    fn from_raw(raw: &Value) -> ApiResult<Self> {
        let recv = as_record(raw, "receiver")?;

        Ok(Self {
            deployment_name: string_field(recv, "deploymentName")?,
            deployment_status: string_field(recv, "deploymentStatus")?,
            motus_receiver_id: int_field(recv, "motusRecvID")?,
            project_receiver_id: int_field(recv, "recvProjectID")?,
            deployment_start: parse_timestamp(&string_field(recv, "dtStart")?)?,
            receiver_type: opt_string_field(recv, "receiverType")?,
            receiver_id: string_field(recv, "receiverID")?,
            device_id: opt_int_field(recv, "deviceID")?,
            mac_address: opt_string_field(recv, "macAddress")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn crysler_park() -> Value {
        json!({
            "receiverID": "SG-5113BBBK0173",
            "motusRecvID": 383,
            "recvProjectID": 1,
            "deviceID": 251,
            "macAddress": "0",
            "receiverType": "SENSORGNOME",
            "dtStart": "2016-11-19 00:00:00 +00:00",
            "deploymentStatus": "active",
            "deploymentName": "Crysler Park Marina",
        })
    }

    #[test]
    fn test_receiver_from_raw() {
        let recv = Receiver::from_raw(&crysler_park()).unwrap();

        assert_eq!(recv.receiver_id, "SG-5113BBBK0173");
        assert_eq!(recv.motus_receiver_id, 383);
        assert_eq!(recv.project_receiver_id, 1);
        assert_eq!(recv.device_id, Some(251));
        assert_eq!(recv.mac_address.as_deref(), Some("0"));
        assert_eq!(recv.receiver_type.as_deref(), Some("SENSORGNOME"));
        assert_eq!(
            recv.deployment_start,
            Utc.with_ymd_and_hms(2016, 11, 19, 0, 0, 0).unwrap()
        );
        assert_eq!(recv.deployment_status, "active");
        assert_eq!(recv.deployment_name, "Crysler Park Marina");
        assert!(recv.is_active());
    }

    #[test]
    fn test_receiver_nullable_fields() {
        let raw = json!({
            "receiverID": "TEMP16",
            "motusRecvID": 476,
            "recvProjectID": 5,
            "deviceID": null,
            "macAddress": null,
            "receiverType": null,
            "dtStart": "2014-05-29 00:00:00 +00:00",
            "deploymentStatus": "terminated",
            "deploymentName": "Hopewell",
        });
        let recv = Receiver::from_raw(&raw).unwrap();

        assert_eq!(recv.receiver_id, "TEMP16");
        assert_eq!(recv.motus_receiver_id, 476);
        assert_eq!(recv.project_receiver_id, 5);
        assert_eq!(recv.device_id, None);
        assert_eq!(recv.mac_address, None);
        assert_eq!(recv.receiver_type, None);
        assert!(!recv.is_active());
    }

    #[test]
    fn test_receiver_string_ids_are_coerced() {
        let mut raw = crysler_park();
        raw["motusRecvID"] = json!("383");
        raw["deviceID"] = json!("251");
        let recv = Receiver::from_raw(&raw).unwrap();
        assert_eq!(recv.motus_receiver_id, 383);
        assert_eq!(recv.device_id, Some(251));
    }

    #[test]
    fn test_receiver_non_numeric_id_fails() {
        let mut raw = crysler_park();
        raw["recvProjectID"] = json!("one");
        let err = Receiver::from_raw(&raw).unwrap_err();
        assert!(matches!(err, ApiError::FieldCoercion { field, .. } if field == "recvProjectID"));
    }

    #[test]
    fn test_receiver_missing_key_fails() {
        let mut raw = crysler_park();
        raw.as_object_mut().unwrap().remove("deploymentName");
        let err = Receiver::from_raw(&raw).unwrap_err();
        assert!(matches!(err, ApiError::MissingField(key) if key == "deploymentName"));
    }

    #[test]
    fn test_receiver_bad_timestamp_fails() {
        let mut raw = crysler_park();
        raw["dtStart"] = json!("2016-11-19");
        let err = Receiver::from_raw(&raw).unwrap_err();
        assert!(matches!(err, ApiError::TimestampParse { .. }));
    }

    #[test]
    fn test_receiver_from_non_object() {
        let err = Receiver::from_raw(&json!([crysler_park()])).unwrap_err();
        assert!(matches!(err, ApiError::FieldCoercion { .. }));
    }
}
