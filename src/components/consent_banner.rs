use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::consent;
use crate::Route;

/// LGPD banner. On boot it re-announces a stored choice to the tag manager;
/// only when no record exists does it reveal itself, after a short delay so
/// it doesn't compete with the hero.
#[function_component(ConsentBanner)]
pub fn consent_banner() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                if consent::apply_stored_consent().is_none() {
                    let timeout = Timeout::new(1_200, move || {
                        visible.set(true);
                    });
                    timeout.forget();
                }
                || ()
            },
            (),
        );
    }

    let accept = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            consent::grant_all_consent();
            visible.set(false);
        })
    };

    let decline = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            consent::deny_all_consent();
            visible.set(false);
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class="consent-banner">
            <style>
                {r#"
                    .consent-banner {
                        position: fixed;
                        bottom: 1.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        width: calc(100% - 3rem);
                        max-width: 640px;
                        background: rgba(20, 20, 20, 0.95);
                        border: 1px solid rgba(46, 204, 113, 0.25);
                        border-radius: 12px;
                        padding: 1.2rem 1.5rem;
                        z-index: 100;
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
                        animation: consent-slide 0.4s ease-out;
                    }
                    @keyframes consent-slide {
                        from { transform: translate(-50%, 100%); opacity: 0; }
                        to { transform: translate(-50%, 0); opacity: 1; }
                    }
                    .consent-banner p {
                        color: rgba(255, 255, 255, 0.85);
                        font-size: 0.9rem;
                        margin-bottom: 1rem;
                    }
                    .consent-banner .consent-actions {
                        display: flex;
                        gap: 0.8rem;
                        justify-content: flex-end;
                    }
                    .consent-banner button {
                        border-radius: 8px;
                        padding: 0.6rem 1.4rem;
                        font-size: 0.9rem;
                        cursor: pointer;
                    }
                    .consent-banner .consent-accept {
                        background: linear-gradient(45deg, #2ecc71, #27ae60);
                        border: none;
                        color: #fff;
                    }
                    .consent-banner .consent-decline {
                        background: none;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        color: rgba(255, 255, 255, 0.8);
                    }
                "#}
            </style>
            <p>
                {"Usamos cookies para medir o alcance das nossas campanhas, conforme a LGPD. Veja a "}
                <Link<Route> to={Route::Privacy}>{"política de privacidade"}</Link<Route>>
                {"."}
            </p>
            <div class="consent-actions">
                <button class="consent-decline" onclick={decline}>{"Recusar"}</button>
                <button class="consent-accept" onclick={accept}>{"Aceitar"}</button>
            </div>
        </div>
    }
}
