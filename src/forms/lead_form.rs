use std::collections::HashMap;

use serde_json::{Map, Value};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::analytics::events;
use crate::forms::fields::{FieldKind, InputType};
use crate::forms::validation::{phone_mask, sanitize_form_data, validate_required_fields};
use crate::forms::webhook::{build_payload, use_webhook, SubmitStatus, WebhookType};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub fields: Vec<FieldKind>,
    pub webhook_type: WebhookType,
    #[prop_or_default]
    pub on_success: Option<Callback<HashMap<String, String>>>,
    /// Attribution tag for the intake; a `utm_source` query param wins over it.
    #[prop_or(AttrValue::Static("site"))]
    pub source: AttrValue,
    /// Page-computed payload extras, e.g. `webinar_datetime`.
    #[prop_or_default]
    pub extra: Map<String, Value>,
    #[prop_or(AttrValue::Static("Quero participar"))]
    pub submit_label: AttrValue,
    #[prop_or(true)]
    pub suppress_transport_errors: bool,
}

fn blank_values(fields: &[FieldKind]) -> HashMap<String, String> {
    fields
        .iter()
        .map(|field| (field.key().to_string(), String::new()))
        .collect()
}

fn text_input_type(input: InputType) -> &'static str {
    match input {
        InputType::Email => "email",
        InputType::Tel => "tel",
        _ => "text",
    }
}

fn current_page_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_default()
}

fn current_page_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let values = {
        let fields = props.fields.clone();
        use_state(move || blank_values(&fields))
    };
    let errors = use_state(HashMap::<String, String>::new);
    let last_submitted = use_state(|| None::<HashMap<String, String>>);

    let utm_source = use_search_param("utm_source".to_string());
    let webhook = use_webhook(props.webhook_type, props.suppress_transport_errors);

    let on_field_input = {
        let values = values.clone();
        Callback::from(move |(field, raw): (FieldKind, String)| {
            let mut next = (*values).clone();
            let value = if field == FieldKind::Phone {
                phone_mask(&raw)
            } else {
                raw
            };
            next.insert(field.key().to_string(), value);
            values.set(next);
        })
    };

    let onsubmit = {
        let values = values.clone();
        let errors = errors.clone();
        let last_submitted = last_submitted.clone();
        let submit = webhook.submit.clone();
        let fields = props.fields.clone();
        let source = utm_source
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| props.source.to_string());
        let extra = props.extra.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let data = (*values).clone();
            let result = validate_required_fields(&data, &fields);
            errors.set(result.errors.clone());
            if !result.is_valid {
                // Inline messages only; nothing leaves the page.
                return;
            }

            let clean = sanitize_form_data(&data);
            let payload = build_payload(&clean, &source, &current_page_url(), &extra);
            last_submitted.set(Some(clean));
            submit.emit(payload);
        })
    };

    {
        let last_submitted = last_submitted.clone();
        let on_success = props.on_success.clone();
        let form_id = props.webhook_type.form_id();
        use_effect_with_deps(
            move |status| {
                if matches!(status, SubmitStatus::Success) {
                    events::track_form_submission(form_id, Map::new());
                    if current_page_path().contains("/webinar") {
                        events::track_webinar_registration(form_id, Map::new());
                    }
                    if let (Some(callback), Some(data)) = (on_success, (*last_submitted).clone()) {
                        callback.emit(data);
                    }
                }
                || ()
            },
            webhook.status.clone(),
        );
    }

    let reset_form = {
        let values = values.clone();
        let errors = errors.clone();
        let last_submitted = last_submitted.clone();
        let reset = webhook.reset.clone();
        let fields = props.fields.clone();
        Callback::from(move |_: MouseEvent| {
            values.set(blank_values(&fields));
            errors.set(HashMap::new());
            last_submitted.set(None);
            reset.emit(());
        })
    };

    let is_loading = matches!(webhook.status, SubmitStatus::Loading);

    html! {
        <div class="lead-form">
            <style>
                {r#"
                    .lead-form {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(46, 204, 113, 0.15);
                        border-radius: 16px;
                        padding: 2rem;
                        width: 100%;
                        max-width: 440px;
                        backdrop-filter: blur(10px);
                    }
                    .lead-form .form-field {
                        margin-bottom: 1.2rem;
                        display: flex;
                        flex-direction: column;
                    }
                    .lead-form label {
                        color: rgba(255, 255, 255, 0.85);
                        font-size: 0.9rem;
                        margin-bottom: 0.4rem;
                    }
                    .lead-form input,
                    .lead-form select,
                    .lead-form textarea {
                        background: rgba(0, 0, 0, 0.35);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 8px;
                        padding: 0.8rem;
                        color: #fff;
                        font-size: 1rem;
                    }
                    .lead-form .has-error input,
                    .lead-form .has-error select,
                    .lead-form .has-error textarea {
                        border-color: #e74c3c;
                    }
                    .lead-form .field-error {
                        color: #e74c3c;
                        font-size: 0.8rem;
                        margin-top: 0.3rem;
                    }
                    .lead-form button[type="submit"] {
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        border-radius: 8px;
                        background: linear-gradient(45deg, #2ecc71, #27ae60);
                        color: #fff;
                        font-size: 1rem;
                        font-weight: bold;
                        cursor: pointer;
                    }
                    .lead-form button[type="submit"]:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .lead-form .success-banner {
                        text-align: center;
                        color: #2ecc71;
                    }
                    .lead-form .success-banner button {
                        margin-top: 1rem;
                        background: none;
                        border: 1px solid rgba(46, 204, 113, 0.5);
                        border-radius: 8px;
                        color: #2ecc71;
                        padding: 0.6rem 1.2rem;
                        cursor: pointer;
                    }
                    .lead-form .error-banner {
                        color: #e74c3c;
                        margin-bottom: 1rem;
                        text-align: center;
                    }
                "#}
            </style>
            {
                match &webhook.status {
                    SubmitStatus::Success => html! {
                        <div class="success-banner">
                            <h3>{"Inscrição recebida!"}</h3>
                            <p>{"Em breve você recebe os detalhes no seu e-mail."}</p>
                            <button onclick={reset_form}>{"Enviar outro cadastro"}</button>
                        </div>
                    },
                    status => html! {
                        <form onsubmit={onsubmit}>
                            {
                                if let SubmitStatus::Error(message) = status {
                                    html! { <div class="error-banner">{message.clone()}</div> }
                                } else {
                                    html! {}
                                }
                            }
                            {
                                for props.fields.iter().map(|field| {
                                    let field = *field;
                                    let descriptor = field.descriptor();
                                    let value = (*values).get(descriptor.key).cloned().unwrap_or_default();
                                    let error = (*errors).get(descriptor.key).cloned();
                                    let on_field_input = on_field_input.clone();

                                    let control = match descriptor.input {
                                        InputType::Text | InputType::Email | InputType::Tel => html! {
                                            <input
                                                type={text_input_type(descriptor.input)}
                                                value={value.clone()}
                                                placeholder={descriptor.placeholder}
                                                oninput={move |e: InputEvent| {
                                                    let input: HtmlInputElement = e.target_unchecked_into();
                                                    on_field_input.emit((field, input.value()));
                                                }}
                                            />
                                        },
                                        InputType::Select(options) => html! {
                                            <select onchange={move |e: Event| {
                                                let select: HtmlSelectElement = e.target_unchecked_into();
                                                on_field_input.emit((field, select.value()));
                                            }}>
                                                <option value="" selected={value.is_empty()} disabled={true}>
                                                    {descriptor.placeholder}
                                                </option>
                                                {
                                                    for options.iter().map(|option| html! {
                                                        <option value={*option} selected={value == *option}>
                                                            {*option}
                                                        </option>
                                                    })
                                                }
                                            </select>
                                        },
                                        InputType::TextArea => html! {
                                            <textarea
                                                value={value.clone()}
                                                placeholder={descriptor.placeholder}
                                                rows="4"
                                                oninput={move |e: InputEvent| {
                                                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                                                    on_field_input.emit((field, area.value()));
                                                }}
                                            />
                                        },
                                    };

                                    html! {
                                        <div class={classes!("form-field", error.is_some().then_some("has-error"))}>
                                            <label>{descriptor.label}</label>
                                            {control}
                                            {
                                                if let Some(message) = error {
                                                    html! { <span class="field-error">{message}</span> }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </div>
                                    }
                                })
                            }
                            <button type="submit" disabled={is_loading}>
                                {
                                    if is_loading {
                                        "Enviando...".to_string()
                                    } else {
                                        props.submit_label.to_string()
                                    }
                                }
                            </button>
                        </form>
                    },
                }
            }
        </div>
    }
}
