use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod focus_trap;
mod pricing;
mod theme;
mod validation;
mod components {
    pub mod nav;
    pub mod price;
    pub mod reveal;
    pub mod ripple;
    pub mod tilt;
    pub mod toast;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod pricing;
}

use components::{nav::Nav, toast::ToastHost};
use pages::{
    contact::ContactPage,
    home::{Footer, GlobalStyles, Home},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <main class="not-found">
                    <h1>{"Page introuvable"}</h1>
                    <Link<Route> to={Route::Home}>{"Retour à l'accueil"}</Link<Route>>
                </main>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    let brand = config::site().brand.clone();

    html! {
        <BrowserRouter>
            <GlobalStyles />
            <ToastHost>
                <Nav brand={brand} />
                <Switch<Route> render={switch} />
                <Footer />
            </ToastHost>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    // Apply the stored preference before the first paint.
    theme::apply(theme::load());
    yew::Renderer::<App>::new().render();
}
