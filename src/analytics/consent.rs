use chrono::Utc;
use gloo_console::log;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::analytics::events::{AnalyticsEvent, DataLayerSink, EventSink};

/// Single localStorage key holding the whole LGPD choice as one JSON blob.
/// Writes replace the record wholesale; categories are never merged.
const STORAGE_KEY: &str = "trilhadev_consent";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub marketing: bool,
    pub analytics: bool,
    pub preferences: bool,
    pub timestamp: String,
}

impl ConsentRecord {
    pub fn granted(timestamp: String) -> Self {
        ConsentRecord {
            marketing: true,
            analytics: true,
            preferences: true,
            timestamp,
        }
    }

    pub fn denied(timestamp: String) -> Self {
        ConsentRecord {
            marketing: false,
            analytics: false,
            preferences: false,
            timestamp,
        }
    }

    /// The consent events bypass the usual gating: they are how the tag
    /// manager learns what it is allowed to do.
    pub fn event(&self) -> AnalyticsEvent {
        AnalyticsEvent::new("consent_update")
            .param("marketing", json!(self.marketing))
            .param("analytics", json!(self.analytics))
            .param("preferences", json!(self.preferences))
            .param("consent_timestamp", json!(self.timestamp))
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn stored_consent() -> Option<ConsentRecord> {
    let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

fn persist(record: &ConsentRecord) {
    let Some(storage) = local_storage() else {
        log!("localStorage unavailable, consent choice not persisted");
        return;
    };
    match serde_json::to_string(record) {
        Ok(blob) => {
            if storage.set_item(STORAGE_KEY, &blob).is_err() {
                log!("failed to persist consent record");
            }
        }
        Err(e) => log!("failed to serialize consent record:", e.to_string()),
    }
}

pub fn grant_all_consent() {
    let record = ConsentRecord::granted(Utc::now().to_rfc3339());
    persist(&record);
    DataLayerSink.record(&record.event());
}

pub fn deny_all_consent() {
    let record = ConsentRecord::denied(Utc::now().to_rfc3339());
    persist(&record);
    DataLayerSink.record(&record.event());
}

/// Re-announces a previously stored choice on boot so the tag manager starts
/// the session in the right mode. Returns the record so the banner knows
/// whether to show itself.
pub fn apply_stored_consent() -> Option<ConsentRecord> {
    let record = stored_consent()?;
    DataLayerSink.record(&record.event());
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_json() {
        let record = ConsentRecord::granted("2026-08-30T12:00:00+00:00".to_string());
        let blob = serde_json::to_string(&record).unwrap();
        let back: ConsentRecord = serde_json::from_str(&blob).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn grant_and_deny_set_every_category() {
        let granted = ConsentRecord::granted("t".to_string());
        assert!(granted.marketing && granted.analytics && granted.preferences);

        let denied = ConsentRecord::denied("t".to_string());
        assert!(!denied.marketing && !denied.analytics && !denied.preferences);
    }

    #[test]
    fn consent_event_mirrors_the_record() {
        let record = ConsentRecord::denied("2026-08-30T12:00:00+00:00".to_string());
        let event = record.event();
        assert_eq!(event.name, "consent_update");
        assert_eq!(event.params["marketing"], json!(false));
        assert_eq!(event.params["analytics"], json!(false));
        assert_eq!(event.params["consent_timestamp"], json!("2026-08-30T12:00:00+00:00"));
    }

    #[test]
    fn legacy_blob_shape_is_rejected_not_merged() {
        // A record missing a category never half-applies; it reads as absent.
        let partial = r#"{"marketing":true,"timestamp":"t"}"#;
        assert!(serde_json::from_str::<ConsentRecord>(partial).is_err());
    }
}
