use gloo_console::log;
use serde_json::{json, Map, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};

use crate::analytics::consent;
use crate::config;

/// One entry bound for the tag-manager queue. Flat key/value payload under a
/// single event name, mirrored 1:1 into the dataLayer object.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsEvent {
    pub name: String,
    pub params: Map<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(name: &str) -> Self {
        AnalyticsEvent {
            name: name.to_string(),
            params: Map::new(),
        }
    }

    pub fn param(mut self, key: &str, value: Value) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }

    fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("event".to_string(), json!(self.name));
        for (key, value) in &self.params {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

/// Where events go. The app only ever appends; nothing in here reads the
/// queue back. A test double just collects into a Vec.
pub trait EventSink {
    fn record(&self, event: &AnalyticsEvent);
}

/// The real sink: `window.dataLayer`, created on first use when the GTM
/// snippet hasn't run yet. Push failures are logged and swallowed; analytics
/// must never break the form.
pub struct DataLayerSink;

impl EventSink for DataLayerSink {
    fn record(&self, event: &AnalyticsEvent) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let key = JsValue::from_str("dataLayer");
        let data_layer = match Reflect::get(&window, &key)
            .ok()
            .and_then(|existing| existing.dyn_into::<Array>().ok())
        {
            Some(array) => array,
            None => {
                let array = Array::new();
                if Reflect::set(&window, &key, &array).is_err() {
                    log!("dataLayer unavailable, dropping event", event.name.clone());
                    return;
                }
                array
            }
        };
        match serde_wasm_bindgen::to_value(&event.to_json()) {
            Ok(entry) => {
                data_layer.push(&entry);
            }
            Err(e) => log!("dataLayer push failed:", e.to_string()),
        }
    }
}

fn merge_overrides(mut event: AnalyticsEvent, overrides: &Map<String, Value>) -> AnalyticsEvent {
    for (key, value) in overrides {
        event.params.insert(key.clone(), value.clone());
    }
    event
}

pub fn form_submission_event(
    form_id: &str,
    page_path: &str,
    overrides: &Map<String, Value>,
) -> AnalyticsEvent {
    let event = AnalyticsEvent::new("form_submission")
        .param("form_id", json!(form_id))
        .param("page_path", json!(page_path));
    merge_overrides(event, overrides)
}

pub fn webinar_registration_event(
    form_id: &str,
    page_path: &str,
    overrides: &Map<String, Value>,
) -> AnalyticsEvent {
    let event = AnalyticsEvent::new("webinar_registration")
        .param("form_id", json!(form_id))
        .param("page_path", json!(page_path));
    merge_overrides(event, overrides)
}

pub fn cta_click_event(label: &str, destination: &str, page_path: &str) -> AnalyticsEvent {
    AnalyticsEvent::new("cta_click")
        .param("cta_label", json!(label))
        .param("cta_destination", json!(destination))
        .param("page_path", json!(page_path))
}

pub fn page_view_event(page_path: &str, title: &str) -> AnalyticsEvent {
    AnalyticsEvent::new("page_view")
        .param("page_path", json!(page_path))
        .param("page_title", json!(title))
        .param("container_id", json!(config::gtm_container_id()))
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Build-mode flag AND a stored analytics consent: both must hold before any
/// event other than the consent updates themselves leaves the app.
fn analytics_allowed() -> bool {
    config::tracking_enabled()
        && consent::stored_consent().map(|record| record.analytics).unwrap_or(false)
}

pub fn track_form_submission(form_id: &str, overrides: Map<String, Value>) {
    if !analytics_allowed() {
        return;
    }
    DataLayerSink.record(&form_submission_event(form_id, &current_path(), &overrides));
}

pub fn track_webinar_registration(form_id: &str, overrides: Map<String, Value>) {
    if !analytics_allowed() {
        return;
    }
    DataLayerSink.record(&webinar_registration_event(form_id, &current_path(), &overrides));
}

pub fn track_cta_click(label: &str, destination: &str) {
    if !analytics_allowed() {
        return;
    }
    DataLayerSink.record(&cta_click_event(label, destination, &current_path()));
}

pub fn track_page_view(title: &str) {
    if !analytics_allowed() {
        return;
    }
    DataLayerSink.record(&page_view_event(&current_path(), title));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSink {
        events: RefCell<Vec<AnalyticsEvent>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            RecordingSink {
                events: RefCell::new(Vec::new()),
            }
        }
    }

    impl EventSink for RecordingSink {
        fn record(&self, event: &AnalyticsEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn form_submission_carries_form_id_and_path() {
        let event = form_submission_event("webinar_registration", "/webinar/rust-na-web", &Map::new());
        assert_eq!(event.name, "form_submission");
        assert_eq!(event.params["form_id"], json!("webinar_registration"));
        assert_eq!(event.params["page_path"], json!("/webinar/rust-na-web"));
    }

    #[test]
    fn caller_overrides_win_on_collision() {
        let mut overrides = Map::new();
        overrides.insert("page_path".to_string(), json!("/custom"));
        overrides.insert("lead_score".to_string(), json!(42));

        let event = form_submission_event("newsletter_signup", "/", &overrides);
        assert_eq!(event.params["page_path"], json!("/custom"));
        assert_eq!(event.params["lead_score"], json!(42));
        assert_eq!(event.params["form_id"], json!("newsletter_signup"));
    }

    #[test]
    fn events_serialize_flat_with_event_key() {
        let event = cta_click_event("inscreva-se", "/bootcamp", "/");
        let value = event.to_json();
        assert_eq!(value["event"], json!("cta_click"));
        assert_eq!(value["cta_label"], json!("inscreva-se"));
        assert_eq!(value["cta_destination"], json!("/bootcamp"));
    }

    #[test]
    fn sink_is_append_only() {
        let sink = RecordingSink::new();
        sink.record(&page_view_event("/", "TrilhaDev"));
        sink.record(&cta_click_event("ver-agenda", "/webinar/rust-na-web", "/"));

        let events = sink.events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "page_view");
        assert_eq!(events[1].name, "cta_click");
    }
}
