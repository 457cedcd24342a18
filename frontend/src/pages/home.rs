use chrono::Datelike;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::ripple::RippleButton;
use crate::config;
use crate::pages::contact::{ContactSection, NewsletterForm};
use crate::pages::pricing::PricingSection;

const STYLES: &str = r#"
    body {
        --bg: #0d1117;
        --fg: #e6edf3;
        --muted: rgba(230, 237, 243, 0.7);
        --card: rgba(30, 30, 30, 0.7);
        --accent: #7EB2FF;
        background: var(--bg);
        color: var(--fg);
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        transition: background 0.3s ease, color 0.3s ease;
    }
    body.light {
        --bg: #f7f9fc;
        --fg: #1b1f24;
        --muted: rgba(27, 31, 36, 0.7);
        --card: #ffffff;
        --accent: #1E90FF;
    }
    .top-nav {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem 2rem;
    }
    .nav-logo {
        font-weight: 700;
        font-size: 1.4rem;
        color: var(--fg);
        text-decoration: none;
    }
    .nav-right {
        display: flex;
        gap: 1.5rem;
        align-items: center;
    }
    .nav-link {
        color: var(--muted);
        text-decoration: none;
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        display: block;
        width: 24px;
        height: 2px;
        margin: 5px 0;
        background: var(--fg);
    }
    .theme-toggle {
        background: none;
        border: 1px solid rgba(126, 178, 255, 0.3);
        border-radius: 999px;
        padding: 0.3rem 0.6rem;
        cursor: pointer;
    }
    @media (max-width: 900px) {
        .burger-menu {
            display: block;
        }
        .nav-right {
            display: none;
            position: absolute;
            top: 4rem;
            right: 1rem;
            flex-direction: column;
            padding: 1.5rem;
            background: var(--card);
            border-radius: 16px;
            box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
            z-index: 20;
        }
        .nav-right.open {
            display: flex;
        }
    }
    .hero {
        text-align: center;
        padding: 6rem 1.5rem 4rem;
    }
    .hero h1 {
        font-size: 3rem;
        margin-bottom: 1rem;
        background: linear-gradient(45deg, var(--fg), var(--accent));
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero p {
        color: var(--muted);
        max-width: 640px;
        margin: 0 auto 2rem;
    }
    .btn {
        border: none;
        border-radius: 10px;
        padding: 0.75rem 1.4rem;
        font-weight: 600;
        cursor: pointer;
        background: var(--accent);
        color: #fff;
    }
    .btn:disabled {
        opacity: 0.5;
        cursor: not-allowed;
    }
    .btn-ghost, .btn-link {
        background: transparent;
        color: var(--accent);
        border: 1px solid var(--accent);
    }
    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.45);
        transform: scale(0);
        animation: ripple 0.6s linear;
        pointer-events: none;
    }
    @keyframes ripple {
        to { transform: scale(1); opacity: 0; }
    }
    .reveal [data-reveal-el] {
        opacity: 0;
        transform: translateY(16px);
        transition: opacity 0.5s ease var(--delay, 0ms), transform 0.5s ease var(--delay, 0ms);
    }
    .reveal.in-view [data-reveal-el] {
        opacity: 1;
        transform: none;
    }
    .pricing-section, .calculator-section, .contact-section, .features {
        max-width: 1100px;
        margin: 0 auto;
        padding: 4rem 1.5rem;
    }
    .pricing-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        flex-wrap: wrap;
        gap: 1rem;
    }
    .pricing-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.5rem;
        margin-top: 2rem;
    }
    .card {
        background: var(--card);
        border: 1px solid rgba(30, 144, 255, 0.1);
        border-radius: 16px;
        padding: 2rem;
        cursor: pointer;
        transition: transform 0.15s ease, border-color 0.2s ease;
    }
    .card.selected {
        border-color: var(--accent);
        box-shadow: 0 0 0 2px var(--accent);
    }
    .amount {
        font-size: 2.2rem;
        font-weight: 700;
        display: inline-block;
    }
    .amount.pulse {
        animation: pulse 0.4s ease;
    }
    @keyframes pulse {
        50% { transform: scale(1.08); }
    }
    .calculator-section {
        display: grid;
        grid-template-columns: 2fr 1fr;
        gap: 2rem;
    }
    @media (max-width: 900px) {
        .calculator-section {
            grid-template-columns: 1fr;
        }
    }
    .slider-row {
        display: flex;
        flex-direction: column;
        margin-bottom: 1.2rem;
    }
    .estimate {
        background: var(--card);
        border-radius: 16px;
        padding: 1.5rem;
    }
    .estimate-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 0.6rem;
    }
    .contact-form {
        display: grid;
        gap: 0.6rem;
        max-width: 560px;
    }
    .contact-form input, .contact-form textarea, .newsletter-form input {
        padding: 0.7rem;
        border-radius: 8px;
        border: 1px solid rgba(126, 178, 255, 0.3);
        background: transparent;
        color: var(--fg);
    }
    [aria-invalid="true"] {
        border-color: #ff6b6b !important;
    }
    .toast {
        position: fixed;
        bottom: 2rem;
        left: 50%;
        transform: translate(-50%, 20px);
        opacity: 0;
        display: flex;
        gap: 1rem;
        align-items: center;
        background: var(--card);
        border-radius: 12px;
        padding: 0.9rem 1.2rem;
        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
        transition: opacity 0.25s ease, transform 0.25s ease;
        z-index: 50;
    }
    .toast.show {
        opacity: 1;
        transform: translate(-50%, 0);
    }
    .toast-close {
        background: none;
        border: none;
        color: var(--fg);
        font-size: 1.2rem;
        cursor: pointer;
    }
    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        margin: -1px;
        overflow: hidden;
        clip: rect(0 0 0 0);
        white-space: nowrap;
    }
    footer {
        text-align: center;
        padding: 3rem 1.5rem;
        color: var(--muted);
    }
    @media (prefers-reduced-motion: reduce) {
        .reveal [data-reveal-el], .card, .toast {
            transition: none;
        }
        .amount.pulse, .ripple {
            animation: none;
        }
    }
"#;

/// Stylesheet shared by every page.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! { <style>{ STYLES }</style> }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let brand = &config::site().brand;
    let year = chrono::Local::now().year();

    html! {
        <footer>
            <NewsletterForm />
            <p>
                {"© "}<span id="year">{ year }</span>{" "}{ brand.clone() }{". Tous droits réservés."}
            </p>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let brand = &config::site().brand;

    let scroll_to_offers = Callback::from(|_: MouseEvent| {
        if let Some(section) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("offres"))
        {
            section.scroll_into_view();
        }
    });

    html! {
        <main class="landing-page">
            <header class="hero">
                <h1>{ format!("{}, l'hébergement qui suit votre croissance", brand) }</h1>
                <p>
                    {"Serveurs NVMe, sauvegardes automatiques et ressources ajustables à la volée. Choisissez un plan, réglez vos ressources, voyez le prix en direct."}
                </p>
                <RippleButton class="hero-cta" onclick={scroll_to_offers}>
                    {"Voir les offres"}
                </RippleButton>
            </header>

            <PricingSection />

            <Reveal class="features">
                <h2 data-reveal-el="true">{"Pourquoi nous choisir ?"}</h2>
                <ul class="feature-list">
                    <li data-reveal-el="true">{"⚡ Déploiement en moins de 60 secondes"}</li>
                    <li data-reveal-el="true">{"🔒 Pare-feu et certificats TLS inclus"}</li>
                    <li data-reveal-el="true">{"🇫🇷 Centres de données en Europe"}</li>
                    <li data-reveal-el="true">{"💬 Support humain 7j/7"}</li>
                </ul>
            </Reveal>

            <ContactSection />
        </main>
    }
}
