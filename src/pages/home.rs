use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::events;
use crate::forms::fields::FieldKind;
use crate::forms::lead_form::LeadForm;
use crate::forms::webhook::WebhookType;
use crate::pages::webinar::webinar_catalog;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                events::track_page_view("TrilhaDev");
                || ()
            },
            (),
        );
    }

    let bootcamp_cta = Callback::from(move |_: MouseEvent| {
        events::track_cta_click("conhecer-bootcamp", "/bootcamp");
    });

    html! {
        <div class="home-page">
            <header class="hero">
                <div class="hero-content">
                    <h1>{"Sua carreira dev começa com uma trilha, não com sorte"}</h1>
                    <p class="hero-subtitle">
                        {"Webinars gratuitos e um bootcamp intensivo para quem quer sair do tutorial e entrar no mercado."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Bootcamp} classes="forward-link">
                            <button class="hero-cta" onclick={bootcamp_cta}>{"Conhecer o bootcamp"}</button>
                        </Link<Route>>
                        <a href="#agenda" class="secondary-link">{"Ver agenda de webinars"}</a>
                    </div>
                </div>
            </header>

            <section id="agenda" class="webinar-grid">
                <h2>{"Próximos webinars gratuitos"}</h2>
                <div class="webinar-cards">
                    {
                        for webinar_catalog().iter().map(|webinar| {
                            let card_cta = {
                                let slug = webinar.slug;
                                Callback::from(move |_: MouseEvent| {
                                    events::track_cta_click("webinar-card", slug);
                                })
                            };
                            html! {
                                <div class="webinar-card" style={format!("border-color: {}", webinar.accent)}>
                                    <span class="card-date" style={format!("color: {}", webinar.accent)}>
                                        {format!("{:02} {} • {}", webinar.day, webinar.month, webinar.time)}
                                    </span>
                                    <h3>{webinar.title}</h3>
                                    <p>{webinar.subtitle}</p>
                                    <div onclick={card_cta}>
                                        <Link<Route>
                                            to={Route::Webinar { slug: webinar.slug.to_string() }}
                                            classes="card-link"
                                        >
                                            {"Quero participar"}
                                        </Link<Route>>
                                    </div>
                                </div>
                            }
                        })
                    }
                </div>
            </section>

            <section class="how-it-works">
                <h2>{"Como a trilha funciona"}</h2>
                <div class="steps-grid">
                    <div class="step">
                        <h3>{"Assista um webinar"}</h3>
                        <p>{"Uma hora, ao vivo, sem enrolação: o estado real do mercado e o que estudar primeiro."}</p>
                    </div>
                    <div class="step">
                        <h3>{"Entre no bootcamp"}</h3>
                        <p>{"Dez semanas de projeto guiado com revisão de código de devs que já contratam."}</p>
                    </div>
                    <div class="step">
                        <h3>{"Apresente portfólio"}</h3>
                        <p>{"Você termina com três projetos de verdade no GitHub e simulações de entrevista."}</p>
                    </div>
                </div>
            </section>

            <section class="newsletter">
                <div class="newsletter-copy">
                    <h2>{"Receba a agenda antes de todo mundo"}</h2>
                    <p>{"Um e-mail por semana com vagas de webinar, material gratuito e análises de mercado. Zero spam."}</p>
                </div>
                <LeadForm
                    fields={vec![FieldKind::Name, FieldKind::Email]}
                    webhook_type={WebhookType::NewsletterSignup}
                    source="home-newsletter"
                    submit_label="Quero receber"
                />
            </section>

            <footer class="footer-cta">
                <div class="footer-content">
                    <h2>{"Pronto pra trocar tutorial por trilha?"}</h2>
                    <Link<Route> to={Route::Bootcamp} classes="forward-link">
                        <button class="hero-cta">{"Ver o bootcamp"}</button>
                    </Link<Route>>
                    <div class="legal-links">
                        <Link<Route> to={Route::Privacy}>{"Política de Privacidade"}</Link<Route>>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                    .home-page {
                        min-height: 100vh;
                    }
                    .hero {
                        min-height: 85vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 6rem 2rem 3rem;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        max-width: 760px;
                        margin: 0 auto 1rem;
                        background: linear-gradient(45deg, #fff, #2ecc71);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-subtitle {
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 1.2rem;
                        max-width: 560px;
                        margin: 0 auto 2rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        align-items: center;
                        flex-wrap: wrap;
                    }
                    .hero-cta {
                        padding: 1rem 2rem;
                        font-size: 1.1rem;
                        font-weight: bold;
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        background: linear-gradient(45deg, #2ecc71, #27ae60);
                        cursor: pointer;
                    }
                    .secondary-link {
                        color: #2ecc71;
                        text-decoration: none;
                    }
                    .webinar-grid {
                        max-width: 1080px;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                    }
                    .webinar-grid h2,
                    .how-it-works h2,
                    .newsletter h2 {
                        font-size: 2rem;
                        margin-bottom: 2rem;
                        color: #fff;
                    }
                    .webinar-cards {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }
                    .webinar-card {
                        border: 1px solid;
                        border-radius: 12px;
                        padding: 1.5rem;
                        background: rgba(30, 30, 30, 0.6);
                    }
                    .webinar-card h3 {
                        color: #fff;
                        margin: 0.6rem 0;
                    }
                    .webinar-card p {
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 0.95rem;
                        margin-bottom: 1rem;
                    }
                    .card-date {
                        font-weight: bold;
                        font-size: 0.9rem;
                    }
                    .card-link {
                        color: #fff;
                        font-weight: bold;
                        text-decoration: underline;
                        cursor: pointer;
                    }
                    .how-it-works {
                        max-width: 1080px;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                        text-align: center;
                    }
                    .steps-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                    }
                    .step h3 {
                        color: #2ecc71;
                        margin-bottom: 0.6rem;
                    }
                    .step p {
                        color: rgba(255, 255, 255, 0.75);
                        line-height: 1.5;
                    }
                    .newsletter {
                        max-width: 1080px;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                        display: flex;
                        gap: 3rem;
                        align-items: center;
                        flex-wrap: wrap;
                    }
                    .newsletter-copy {
                        flex: 1;
                        min-width: 280px;
                    }
                    .newsletter-copy p {
                        color: rgba(255, 255, 255, 0.75);
                        line-height: 1.5;
                    }
                    .footer-cta {
                        text-align: center;
                        padding: 5rem 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .footer-cta h2 {
                        color: #fff;
                        margin-bottom: 1.5rem;
                    }
                    .legal-links {
                        margin-top: 2rem;
                        font-size: 0.85rem;
                    }
                    .legal-links a {
                        color: rgba(255, 255, 255, 0.5);
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.1rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
