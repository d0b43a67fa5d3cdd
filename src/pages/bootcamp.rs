use std::collections::HashMap;

use gloo_console::log;
use yew::prelude::*;

use crate::analytics::events;
use crate::forms::fields::FieldKind;
use crate::forms::lead_form::LeadForm;
use crate::forms::webhook::WebhookType;

#[function_component(Bootcamp)]
pub fn bootcamp() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                events::track_page_view("Bootcamp TrilhaDev");
                || ()
            },
            (),
        );
    }

    let apply_cta = Callback::from(move |_: MouseEvent| {
        events::track_cta_click("aplicar-bootcamp", "#aplicacao");
    });

    let application_received = Callback::from(|data: HashMap<String, String>| {
        log!(
            "aplicação registrada para",
            data.get("email").cloned().unwrap_or_default()
        );
    });

    html! {
        <div class="bootcamp-page">
            <header class="bootcamp-hero">
                <h1>{"Bootcamp TrilhaDev"}</h1>
                <p class="subtitle">
                    {"Dez semanas, três projetos reais, revisão de código toda semana. Turmas de no máximo 30 pessoas."}
                </p>
                <a class="apply-cta" href="#aplicacao" onclick={apply_cta}>{"Quero aplicar"}</a>
            </header>

            <section class="bootcamp-pillars">
                <div class="pillar">
                    <h3>{"Projeto, não playlist"}</h3>
                    <p>{"Você constrói uma API, um front e um pipeline de dados de ponta a ponta, com issues e pull requests de verdade."}</p>
                </div>
                <div class="pillar">
                    <h3>{"Mentoria de quem contrata"}</h3>
                    <p>{"Seus revisores são tech leads ativos no mercado brasileiro. O feedback é o mesmo que você receberia no emprego."}</p>
                </div>
                <div class="pillar">
                    <h3>{"Preparação de entrevista"}</h3>
                    <p>{"Simulações técnicas e comportamentais nas duas últimas semanas, gravadas e comentadas."}</p>
                </div>
            </section>

            <section id="aplicacao" class="bootcamp-apply">
                <div class="apply-copy">
                    <h2>{"Aplique para a próxima turma"}</h2>
                    <p>
                        {"A seleção é por ordem de aplicação e uma conversa de 20 minutos. Deixe seu WhatsApp que o time entra em contato em até um dia útil."}
                    </p>
                </div>
                <LeadForm
                    fields={vec![FieldKind::Name, FieldKind::Email, FieldKind::Phone, FieldKind::Role]}
                    webhook_type={WebhookType::BootcampApplication}
                    on_success={application_received}
                    source="bootcamp-page"
                    submit_label="Enviar aplicação"
                />
            </section>

            <style>
                {r#"
                    .bootcamp-page {
                        min-height: 100vh;
                        padding: 7rem 2rem 4rem;
                        max-width: 1080px;
                        margin: 0 auto;
                    }
                    .bootcamp-hero {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .bootcamp-hero h1 {
                        font-size: 3rem;
                        background: linear-gradient(45deg, #fff, #2ecc71);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        margin-bottom: 1rem;
                    }
                    .bootcamp-hero .subtitle {
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 1.2rem;
                        max-width: 620px;
                        margin: 0 auto 2rem;
                    }
                    .apply-cta {
                        display: inline-block;
                        padding: 1rem 2rem;
                        border-radius: 8px;
                        background: linear-gradient(45deg, #2ecc71, #27ae60);
                        color: #fff;
                        font-weight: bold;
                        text-decoration: none;
                    }
                    .bootcamp-pillars {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .pillar h3 {
                        color: #2ecc71;
                        margin-bottom: 0.6rem;
                    }
                    .pillar p {
                        color: rgba(255, 255, 255, 0.75);
                        line-height: 1.5;
                    }
                    .bootcamp-apply {
                        display: flex;
                        gap: 3rem;
                        align-items: flex-start;
                        flex-wrap: wrap;
                    }
                    .apply-copy {
                        flex: 1;
                        min-width: 280px;
                    }
                    .apply-copy h2 {
                        color: #fff;
                        margin-bottom: 1rem;
                    }
                    .apply-copy p {
                        color: rgba(255, 255, 255, 0.75);
                        line-height: 1.6;
                    }
                "#}
            </style>
        </div>
    }
}
