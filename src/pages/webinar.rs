use serde_json::{json, Map, Value};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::events;
use crate::forms::fields::FieldKind;
use crate::forms::lead_form::LeadForm;
use crate::forms::schedule::webinar_datetime;
use crate::forms::webhook::WebhookType;
use crate::Route;

/// One webinar landing page worth of copy. All three live webinars share a
/// single template below; only this record changes between them.
#[derive(Clone, PartialEq)]
pub struct WebinarContent {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub accent: &'static str,
    pub day: u32,
    pub month: &'static str,
    pub year: i32,
    pub time: &'static str,
    pub host: &'static str,
    pub topics: &'static [&'static str],
}

const WEBINARS: [WebinarContent; 3] = [
    WebinarContent {
        slug: "rust-na-web",
        title: "Rust na Web sem medo",
        subtitle: "WebAssembly, Yew e o fim do \"mas Rust não é pra front\"",
        accent: "#e67e22",
        day: 12,
        month: "mar",
        year: 2026,
        time: "19:30 BRT",
        host: "Marina Castro",
        topics: &[
            "Por que empresas estão levando Rust para o navegador",
            "Do zero ao primeiro componente em 40 minutos",
            "O caminho de carreira que ninguém te contou",
        ],
    },
    WebinarContent {
        slug: "carreira-backend",
        title: "Carreira Backend em 2026",
        subtitle: "O mapa honesto de quem contrata para times de sistemas",
        accent: "#3498db",
        day: 9,
        month: "abr",
        year: 2026,
        time: "20:00 BRT",
        host: "Paulo Siqueira",
        topics: &[
            "O que separa júnior de pleno nas entrevistas reais",
            "Portfólio que passa no filtro de 30 segundos",
            "Salários por stack: os números que coletamos",
        ],
    },
    WebinarContent {
        slug: "primeiro-emprego-dev",
        title: "Primeiro emprego dev",
        subtitle: "Da transição de carreira à primeira oferta assinada",
        accent: "#9b59b6",
        day: 7,
        month: "mai",
        year: 2026,
        time: "19:00 BRT",
        host: "Aline Duarte",
        topics: &[
            "Os três projetos que valem mais que certificados",
            "LinkedIn e GitHub que recrutador abre até o fim",
            "Como alunos da TrilhaDev fecharam as primeiras vagas",
        ],
    },
];

pub fn find_webinar(slug: &str) -> Option<&'static WebinarContent> {
    WEBINARS.iter().find(|webinar| webinar.slug == slug)
}

pub fn webinar_catalog() -> &'static [WebinarContent] {
    &WEBINARS
}

#[derive(Properties, PartialEq)]
pub struct WebinarPageProps {
    pub slug: AttrValue,
}

#[function_component(WebinarPage)]
pub fn webinar_page(props: &WebinarPageProps) -> Html {
    // Hooks run before the slug lookup so the not-found branch keeps the
    // hook order stable across slug changes.
    use_effect_with_deps(
        move |slug: &AttrValue| {
            if let Some(content) = find_webinar(slug) {
                events::track_page_view(content.title);
            }
            || ()
        },
        props.slug.clone(),
    );

    let Some(content) = find_webinar(&props.slug) else {
        return html! {
            <div class="webinar-page">
                <section class="webinar-missing">
                    <h1>{"Webinar não encontrado"}</h1>
                    <p>{"Esse evento já aconteceu ou o link veio quebrado."}</p>
                    <Link<Route> to={Route::Home} classes="back-home">{"Voltar para a página inicial"}</Link<Route>>
                </section>
            </div>
        };
    };

    let mut extra = Map::new();
    extra.insert("webinar_slug".to_string(), json!(content.slug));
    if let Some(datetime) = webinar_datetime(content.day, content.month, content.year, content.time) {
        extra.insert("webinar_datetime".to_string(), Value::String(datetime));
    }

    let cta_click = {
        let slug = content.slug;
        Callback::from(move |_: MouseEvent| {
            events::track_cta_click("garantir-vaga", slug);
        })
    };

    html! {
        <div class="webinar-page">
            <style>
                {format!(r#"
                    .webinar-page {{
                        min-height: 100vh;
                        padding: 7rem 2rem 4rem;
                        max-width: 1080px;
                        margin: 0 auto;
                    }}
                    .webinar-hero h1 {{
                        font-size: 2.8rem;
                        background: linear-gradient(45deg, #fff, {accent});
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        margin-bottom: 0.8rem;
                    }}
                    .webinar-hero .subtitle {{
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 1.2rem;
                        margin-bottom: 1.5rem;
                    }}
                    .webinar-when {{
                        display: inline-block;
                        border: 1px solid {accent};
                        border-radius: 10px;
                        padding: 0.7rem 1.4rem;
                        color: {accent};
                        font-weight: bold;
                        margin-bottom: 2rem;
                    }}
                    .webinar-body {{
                        display: flex;
                        gap: 3rem;
                        flex-wrap: wrap;
                        align-items: flex-start;
                    }}
                    .webinar-topics {{
                        flex: 1;
                        min-width: 300px;
                    }}
                    .webinar-topics li {{
                        color: rgba(255, 255, 255, 0.85);
                        margin-bottom: 0.9rem;
                        line-height: 1.5;
                    }}
                    .webinar-host {{
                        color: rgba(255, 255, 255, 0.6);
                        margin-top: 1.5rem;
                        font-size: 0.95rem;
                    }}
                    .webinar-cta {{
                        display: inline-block;
                        margin: 1rem 0 2rem;
                        padding: 0.9rem 1.8rem;
                        border-radius: 8px;
                        background: {accent};
                        color: #fff;
                        font-weight: bold;
                        text-decoration: none;
                    }}
                    .webinar-missing {{
                        text-align: center;
                        padding-top: 4rem;
                    }}
                "#, accent = content.accent)}
            </style>
            <header class="webinar-hero">
                <h1>{content.title}</h1>
                <p class="subtitle">{content.subtitle}</p>
                <div class="webinar-when">
                    {format!("{:02} {} {} • {} • online e gratuito", content.day, content.month, content.year, content.time)}
                </div>
            </header>
            <a class="webinar-cta" href="#inscricao" onclick={cta_click}>{"Garantir minha vaga"}</a>
            <div class="webinar-body">
                <div class="webinar-topics">
                    <h2>{"O que você vai levar"}</h2>
                    <ul>
                        { for content.topics.iter().map(|topic| html! { <li>{*topic}</li> }) }
                    </ul>
                    <p class="webinar-host">{format!("Com {}, do time TrilhaDev.", content.host)}</p>
                </div>
                <div id="inscricao">
                    <LeadForm
                        fields={vec![FieldKind::Name, FieldKind::Email, FieldKind::Phone]}
                        webhook_type={WebhookType::WebinarRegistration}
                        source={format!("webinar-{}", content.slug)}
                        extra={extra}
                        submit_label="Garantir minha vaga"
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_slugs_are_unique_and_resolvable() {
        let mut seen = std::collections::HashSet::new();
        for webinar in webinar_catalog() {
            assert!(seen.insert(webinar.slug), "duplicate slug {}", webinar.slug);
            assert_eq!(find_webinar(webinar.slug).unwrap().title, webinar.title);
        }
        assert!(find_webinar("nao-existe").is_none());
    }

    #[test]
    fn every_catalog_entry_has_a_computable_datetime() {
        for webinar in webinar_catalog() {
            let datetime = webinar_datetime(webinar.day, webinar.month, webinar.year, webinar.time);
            assert!(datetime.is_some(), "bad schedule data for {}", webinar.slug);
            assert!(datetime.unwrap().ends_with("-03:00"));
        }
    }
}
