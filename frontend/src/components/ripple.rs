use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config;

/// Position and size of a ripple, in pixels relative to its button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: u32,
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Ripple centred on a click at (`x`, `y`) inside a `width` x `height` button.
    pub fn at(id: u32, width: f64, height: f64, x: f64, y: f64) -> Self {
        let size = width.max(height) * 1.2;
        Self {
            id,
            size,
            left: x - size / 2.0,
            top: y - size / 2.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {}px; top: {}px;",
            self.left,
            self.top,
            size = self.size
        )
    }
}

#[derive(Default, PartialEq)]
struct Ripples {
    live: Vec<Ripple>,
}

enum RippleAction {
    Spawn(Ripple),
    Remove(u32),
}

impl Reducible for Ripples {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RippleAction::Spawn(ripple) => {
                let mut live = self.live.clone();
                live.push(ripple);
                Rc::new(Ripples { live })
            }
            RippleAction::Remove(id) => Rc::new(Ripples {
                live: self.live.iter().copied().filter(|r| r.id != id).collect(),
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Render as a form submit button instead of a plain button.
    #[prop_or_default]
    pub submit: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub aria_pressed: Option<bool>,
    #[prop_or_default]
    pub aria_controls: Option<AttrValue>,
    #[prop_or_default]
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub onkeydown: Callback<KeyboardEvent>,
    #[prop_or_default]
    pub children: Children,
}

/// A `.btn` that spawns a ripple at the click point.
#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let ripples = use_reducer(Ripples::default);
    let next_id = use_mut_ref(|| 0u32);
    let ripple_ms = config::site().timing.ripple_ms;

    let onclick = {
        let ripples = ripples.clone();
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            let button = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(".btn").ok().flatten());
            if let Some(button) = button {
                let rect = button.get_bounding_client_rect();
                let id = {
                    let mut next = next_id.borrow_mut();
                    *next = next.wrapping_add(1);
                    *next
                };
                ripples.dispatch(RippleAction::Spawn(Ripple::at(
                    id,
                    rect.width(),
                    rect.height(),
                    f64::from(e.client_x()) - rect.left(),
                    f64::from(e.client_y()) - rect.top(),
                )));
                let dispatcher = ripples.dispatcher();
                Timeout::new(ripple_ms, move || dispatcher.dispatch(RippleAction::Remove(id))).forget();
            }
            onclick.emit(e);
        })
    };

    let aria_pressed = props.aria_pressed.map(|p| if p { "true" } else { "false" });

    html! {
        <button
            ref={props.node_ref.clone()}
            id={props.id.clone()}
            type={if props.submit { "submit" } else { "button" }}
            class={classes!("btn", props.class.clone())}
            style="position: relative; overflow: hidden;"
            disabled={props.disabled}
            aria-pressed={aria_pressed}
            aria-controls={props.aria_controls.clone()}
            {onclick}
            onkeydown={props.onkeydown.clone()}
        >
            { for props.children.iter() }
            { for ripples.live.iter().map(|r| html! {
                <span key={r.id} class="ripple" style={r.style()}></span>
            }) }
        </button>
    }
}
