use log::{info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::ripple::RippleButton;
use crate::components::toast::use_toast;
use crate::validation::{validate_contact, validate_newsletter, ContactField, ContactForm};

fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

fn invalid_attr(invalid: bool) -> Option<AttrValue> {
    invalid.then(|| AttrValue::from("true"))
}

#[derive(Clone, Copy, Default, PartialEq)]
struct InvalidFields {
    name: bool,
    email: bool,
    message: bool,
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let toast = use_toast();
    let form = use_state(ContactForm::default);
    let invalid = use_state(InvalidFields::default);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(ContactForm { name: input_value(e), ..(*form).clone() });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(ContactForm { email: input_value(e), ..(*form).clone() });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm { message: input.value(), ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let invalid = invalid.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_contact(&form) {
                Ok(clean) => {
                    info!("Contact form accepted ({} characters)", clean.message.chars().count());
                    invalid.set(InvalidFields::default());
                    toast.show("Merci ! Message envoyé, notre équipe revient vers vous sous 24h.");
                    form.set(ContactForm::default());
                }
                Err(errors) => {
                    let mut flags = InvalidFields::default();
                    for error in &errors {
                        warn!("Contact form rejected: {}", error);
                        match error.field() {
                            Some(ContactField::Name) => flags.name = true,
                            Some(ContactField::Email) => flags.email = true,
                            Some(ContactField::Message) => flags.message = true,
                            None => {}
                        }
                        // One slot: the last failure is the one left on screen.
                        toast.show(error.to_string());
                    }
                    invalid.set(flags);
                }
            }
        })
    };

    html! {
        <Reveal id="contact" class="contact-section">
            <h2 data-reveal-el="true">{"Parlons de votre projet"}</h2>
            <form id="contactForm" class="contact-form" novalidate=true data-reveal-el="true" {onsubmit}>
                <label for="contact-name">{"Nom"}</label>
                <input
                    id="contact-name"
                    name="name"
                    type="text"
                    autocomplete="name"
                    value={form.name.clone()}
                    aria-invalid={invalid_attr(invalid.name)}
                    oninput={on_name}
                />
                <label for="contact-email">{"Email"}</label>
                <input
                    id="contact-email"
                    name="email"
                    type="email"
                    autocomplete="email"
                    value={form.email.clone()}
                    aria-invalid={invalid_attr(invalid.email)}
                    oninput={on_email}
                />
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    value={form.message.clone()}
                    aria-invalid={invalid_attr(invalid.message)}
                    oninput={on_message}
                />
                <RippleButton submit=true class="btn-primary">{"Envoyer"}</RippleButton>
            </form>
        </Reveal>
    }
}

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let toast = use_toast();
    let email = use_state(String::new);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(input_value(e)))
    };

    let onsubmit = {
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_newsletter(&email) {
                Ok(address) => {
                    info!("Newsletter subscription accepted for domain {}", address.rsplit('@').next().unwrap_or_default());
                    toast.show("Merci ! Abonnement confirmé.");
                    email.set(String::new());
                }
                Err(error) => {
                    warn!("Newsletter rejected: {}", error);
                    toast.show(error.to_string());
                }
            }
        })
    };

    html! {
        <form id="newsletterForm" class="newsletter-form" novalidate=true {onsubmit}>
            <label for="newsletter-email" class="sr-only">{"Email"}</label>
            <input
                id="newsletter-email"
                name="email"
                type="email"
                placeholder="vous@exemple.fr"
                value={(*email).clone()}
                {oninput}
            />
            <RippleButton submit=true class="btn-secondary">{"S'abonner"}</RippleButton>
        </form>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <main class="contact-page">
            <ContactSection />
        </main>
    }
}
