use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, HtmlElement, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::focus_trap::FocusTrap;
use crate::theme::{self, Theme};
use crate::Route;

const FOCUSABLE: &str = r#"a, button, input, [tabindex]:not([tabindex="-1"])"#;

/// Focusable descendants of `container` that are laid out and enabled, in document order.
fn focusable_in(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .filter(|el| !el.has_attribute("disabled") && el.offset_parent().is_some())
        .collect()
}

fn active_element() -> Option<HtmlElement> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn viewport_width() -> Option<f64> {
    window().and_then(|w| w.inner_width().ok()).and_then(|v| v.as_f64())
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let current = use_state(theme::load);

    let onclick = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| {
            let next = current.toggled();
            theme::apply(next);
            theme::store(next);
            current.set(next);
        })
    };

    let pressed = if *current == Theme::Light { "true" } else { "false" };

    html! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            aria-label="Basculer le thème clair"
            aria-pressed={pressed}
            {onclick}
        >
            { if current.is_light() { "☀️" } else { "🌙" } }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let trap = use_mut_ref(FocusTrap::<HtmlElement>::default);
    let nav_ref = use_node_ref();
    let toggle_ref = use_node_ref();
    let breakpoint = config::site().mobile_breakpoint_px;

    {
        let trap = trap.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    match nav_ref.cast::<Element>() {
                        Some(panel) => {
                            let mut trap = trap.borrow_mut();
                            if let Some(first) = trap.enable(focusable_in(&panel), active_element()) {
                                let _ = first.focus();
                            }
                            if !trap.is_active() {
                                debug!("Navigation panel has nothing focusable, trap left inactive");
                            }
                        }
                        None => debug!("Navigation panel not mounted, focus trap skipped"),
                    }
                } else if let Some(previous) = trap.borrow_mut().disable() {
                    let _ = previous.focus();
                }
                || ()
            },
            *menu_open,
        );
    }

    {
        let trap = trap.clone();
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !*menu_open {
                return;
            }
            match e.key().as_str() {
                "Tab" => {
                    let active = active_element();
                    if let Some(target) = trap.borrow().on_tab(active.as_ref(), e.shift_key()) {
                        e.prevent_default();
                        let _ = target.focus();
                    }
                }
                "Escape" => menu_open.set(false),
                _ => {}
            }
        });
    }

    {
        let menu_open = menu_open.clone();
        let nav_ref = nav_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            if !*menu_open || viewport_width().map_or(true, |w| w > breakpoint) {
                return;
            }
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            let inside = |node_ref: &NodeRef| {
                node_ref
                    .cast::<Node>()
                    .map_or(false, |n| n.contains(Some(&target)))
            };
            if !inside(&nav_ref) && !inside(&toggle_ref) {
                menu_open.set(false);
            }
        });
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("resize", move |_: Event| {
            if *menu_open && viewport_width().map_or(false, |w| w > breakpoint) {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let open = if *menu_open { "true" } else { "false" };

    html! {
        <header class="site-header">
            <nav class="top-nav" aria-label="Navigation principale">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { props.brand.clone() }
                </Link<Route>>

                <button
                    id="navToggle"
                    ref={toggle_ref}
                    class="burger-menu"
                    type="button"
                    aria-controls="mainNav"
                    aria-expanded={open}
                    aria-label="Menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div
                    id="mainNav"
                    ref={nav_ref}
                    class={classes!("nav-right", (*menu_open).then(|| "open"))}
                    data-open={open}
                >
                    <a href="/#offres" class="nav-link" onclick={close_menu.clone()}>{"Offres"}</a>
                    <a href="/#calculateur" class="nav-link" onclick={close_menu.clone()}>{"Calculateur"}</a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                    <ThemeToggle />
                </div>
            </nav>
        </header>
    }
}
