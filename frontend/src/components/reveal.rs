use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::prefers_reduced_motion;
use crate::config;

/// `--delay` value for the `index`-th staggered child.
pub fn stagger_delay(index: u32, stagger_ms: u32) -> String {
    format!("{}ms", index.saturating_mul(stagger_ms))
}

fn stagger_children(section: &Element, stagger_ms: u32) {
    let Ok(items) = section.query_selector_all("[data-reveal-el]") else {
        return;
    };
    for i in 0..items.length() {
        if let Some(item) = items.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            let _ = item.style().set_property("--delay", &stagger_delay(i, stagger_ms));
        }
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A `<section class="reveal">` that gains `in-view` once it scrolls into the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let in_view = use_state(|| false);

    {
        let node = node.clone();
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |_| {
                let site = config::site();
                let stagger_ms = site.timing.reveal_stagger_ms;
                let mut observer = None;

                if prefers_reduced_motion() || !observer_supported() {
                    debug!("Reveal animations disabled, showing section immediately");
                    in_view.set(true);
                } else if let Some(section) = node.cast::<Element>() {
                    let reveal = in_view.clone();
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, obs: IntersectionObserver| {
                            for entry in entries.iter() {
                                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                    continue;
                                };
                                if entry.is_intersecting() {
                                    let target = entry.target();
                                    stagger_children(&target, stagger_ms);
                                    reveal.set(true);
                                    obs.unobserve(&target);
                                }
                            }
                        },
                    );
                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(site.reveal_threshold));
                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(obs) => {
                            obs.observe(&section);
                            observer = Some((obs, callback));
                        }
                        Err(_) => {
                            debug!("IntersectionObserver construction failed, showing section");
                            in_view.set(true);
                        }
                    }
                }

                move || {
                    if let Some((obs, _callback)) = observer {
                        obs.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", (*in_view).then(|| "in-view"), props.class.clone())}
        >
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_step_by_stagger() {
        assert_eq!(stagger_delay(0, 80), "0ms");
        assert_eq!(stagger_delay(1, 80), "80ms");
        assert_eq!(stagger_delay(4, 80), "320ms");
    }
}
