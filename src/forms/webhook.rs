use std::collections::HashMap;

use chrono::Utc;
use gloo_console::log;
use gloo_net::http::Request;
use serde_json::{json, Map, Value};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

/// Which lead-intake endpoint a form feeds. Each variant carries its URL
/// path and the static metadata the growth team wants attached server-side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebhookType {
    NewsletterSignup,
    WebinarRegistration,
    BootcampApplication,
}

impl WebhookType {
    /// Also the `form_id` reported to analytics.
    pub fn form_id(&self) -> &'static str {
        match self {
            WebhookType::NewsletterSignup => "newsletter_signup",
            WebhookType::WebinarRegistration => "webinar_registration",
            WebhookType::BootcampApplication => "bootcamp_application",
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/leads/{}", config::get_webhook_base_url(), self.form_id())
    }

    pub fn metadata(&self) -> Map<String, Value> {
        let mut meta = Map::new();
        meta.insert("form_id".to_string(), json!(self.form_id()));
        let pipeline = match self {
            WebhookType::NewsletterSignup => "nurture",
            WebhookType::WebinarRegistration => "evento",
            WebhookType::BootcampApplication => "vendas",
        };
        meta.insert("pipeline".to_string(), json!(pipeline));
        meta
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Settlement policy for a finished POST. With `suppress_transport_errors`
/// on (the lead-form default), the user never sees a failed submission:
/// a lost lead beats a scared one. With it off, non-2xx and network errors
/// surface as `Error`.
pub fn settle(outcome: Result<u16, String>, suppress_transport_errors: bool) -> SubmitStatus {
    match outcome {
        Ok(status) if (200..300).contains(&status) => SubmitStatus::Success,
        Ok(status) => {
            if suppress_transport_errors {
                SubmitStatus::Success
            } else {
                SubmitStatus::Error(format!("O envio falhou (HTTP {})", status))
            }
        }
        Err(message) => {
            if suppress_transport_errors {
                SubmitStatus::Success
            } else {
                SubmitStatus::Error(format!("Falha de conexão: {}", message))
            }
        }
    }
}

/// Assembles the JSON body from the sanitized field map plus the envelope
/// every intake expects: `source`, `page_url`, `submitted_at`, and any
/// page-supplied extras (e.g. `webinar_datetime`). Extras win on collision.
pub fn build_payload(
    sanitized: &HashMap<String, String>,
    source: &str,
    page_url: &str,
    extra: &Map<String, Value>,
) -> Map<String, Value> {
    let mut payload = Map::new();
    for (key, value) in sanitized {
        payload.insert(key.clone(), json!(value));
    }
    payload.insert("source".to_string(), json!(source));
    payload.insert("page_url".to_string(), json!(page_url));
    payload.insert("submitted_at".to_string(), json!(Utc::now().to_rfc3339()));
    for (key, value) in extra {
        payload.insert(key.clone(), value.clone());
    }
    payload
}

#[derive(Clone, PartialEq)]
pub struct UseWebhookHandle {
    pub status: SubmitStatus,
    pub submit: Callback<Map<String, Value>>,
    pub reset: Callback<()>,
}

/// One POST per `submit` call, JSON body = payload + endpoint metadata.
/// No timeout, no retry, no idempotency key: a double-click submits twice,
/// which the intake deduplicates downstream.
#[hook]
pub fn use_webhook(webhook_type: WebhookType, suppress_transport_errors: bool) -> UseWebhookHandle {
    let status = use_state(|| SubmitStatus::Idle);

    let submit = {
        let status = status.clone();
        Callback::from(move |payload: Map<String, Value>| {
            let status = status.clone();
            status.set(SubmitStatus::Loading);

            let url = webhook_type.endpoint();
            let mut body = payload;
            for (key, value) in webhook_type.metadata() {
                body.insert(key, value);
            }

            spawn_local(async move {
                let outcome = match Request::post(&url).json(&Value::Object(body)) {
                    Ok(request) => match request.send().await {
                        Ok(response) => {
                            log!("webhook", url.clone(), "responded", response.status());
                            Ok(response.status())
                        }
                        Err(e) => {
                            log!("webhook", url.clone(), "network error:", e.to_string());
                            Err(e.to_string())
                        }
                    },
                    Err(e) => Err(e.to_string()),
                };
                status.set(settle(outcome, suppress_transport_errors));
            });
        })
    };

    let reset = {
        let status = status.clone();
        Callback::from(move |_| status.set(SubmitStatus::Idle))
    };

    UseWebhookHandle {
        status: (*status).clone(),
        submit,
        reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_honest_mode_distinguishes_outcomes() {
        assert_eq!(settle(Ok(200), false), SubmitStatus::Success);
        assert_eq!(settle(Ok(204), false), SubmitStatus::Success);

        match settle(Ok(500), false) {
            SubmitStatus::Error(message) => assert!(message.contains("500")),
            other => panic!("expected error, got {:?}", other),
        }
        match settle(Err("fetch failed".to_string()), false) {
            SubmitStatus::Error(message) => assert!(message.contains("fetch failed")),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn settle_optimistic_mode_never_fails() {
        assert_eq!(settle(Ok(200), true), SubmitStatus::Success);
        assert_eq!(settle(Ok(503), true), SubmitStatus::Success);
        assert_eq!(settle(Err("offline".to_string()), true), SubmitStatus::Success);
    }

    #[test]
    fn endpoints_are_keyed_by_form_id() {
        let url = WebhookType::WebinarRegistration.endpoint();
        assert!(url.ends_with("/leads/webinar_registration"));
        assert_eq!(
            WebhookType::BootcampApplication.metadata()["form_id"],
            json!("bootcamp_application")
        );
    }

    #[test]
    fn payload_carries_fields_and_envelope() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Ana".to_string());
        fields.insert("email".to_string(), "ana@example.com".to_string());

        let payload = build_payload(&fields, "site", "https://trilhadev.com.br/", &Map::new());

        assert_eq!(payload["name"], json!("Ana"));
        assert_eq!(payload["email"], json!("ana@example.com"));
        assert_eq!(payload["source"], json!("site"));
        assert_eq!(payload["page_url"], json!("https://trilhadev.com.br/"));
        // RFC 3339 with explicit offset.
        let submitted_at = payload["submitted_at"].as_str().unwrap();
        assert!(submitted_at.contains('T'), "got {}", submitted_at);
    }

    #[test]
    fn extras_override_fields_on_collision() {
        let mut fields = HashMap::new();
        fields.insert("source".to_string(), "typed-by-user".to_string());

        let mut extra = Map::new();
        extra.insert("source".to_string(), json!("webinar-card"));
        extra.insert("webinar_datetime".to_string(), json!("2026-03-12T19:30:00-03:00"));

        let payload = build_payload(&fields, "site", "https://x/", &extra);
        assert_eq!(payload["source"], json!("webinar-card"));
        assert_eq!(payload["webinar_datetime"], json!("2026-03-12T19:30:00-03:00"));
    }
}
