use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

/// Handle for raising a toast from anywhere below a [`ToastHost`].
#[derive(Clone, PartialEq)]
pub struct Toaster {
    show: Callback<String>,
}

impl Toaster {
    pub fn show(&self, message: impl Into<String>) {
        self.show.emit(message.into());
    }
}

/// Toaster from the surrounding host, or one backed by `window.alert` when none is mounted.
#[hook]
pub fn use_toast() -> Toaster {
    match use_context::<Toaster>() {
        Some(toaster) => toaster,
        None => Toaster {
            show: Callback::from(|message: String| {
                debug!("No toast host mounted, falling back to alert");
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&message);
                }
            }),
        },
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastState {
    pub message: String,
    pub shown: bool,
    pub hidden: bool,
    /// Bumped on every show, so identical messages still count as new.
    pub shows: u32,
}

impl Default for ToastState {
    fn default() -> Self {
        Self {
            message: String::new(),
            shown: false,
            hidden: true,
            shows: 0,
        }
    }
}

pub enum ToastAction {
    Show(String),
    Hide,
    /// End of the hide transition.
    Conceal,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show(message) => Rc::new(ToastState {
                message,
                shown: true,
                hidden: false,
                shows: self.shows.wrapping_add(1),
            }),
            ToastAction::Hide if self.shown => Rc::new(ToastState {
                shown: false,
                ..(*self).clone()
            }),
            // A toast shown again during the transition stays visible.
            ToastAction::Conceal if !self.shown && !self.hidden => Rc::new(ToastState {
                hidden: true,
                ..(*self).clone()
            }),
            _ => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let state = use_reducer(ToastState::default);
    let auto_hide = use_mut_ref(|| None::<Timeout>);
    let conceal = use_mut_ref(|| None::<Timeout>);
    let close_ref = use_node_ref();
    let timing = config::site().timing;

    let hide = {
        let dispatcher = state.dispatcher();
        let auto_hide = auto_hide.clone();
        let conceal = conceal.clone();
        Callback::from(move |_: ()| {
            auto_hide.borrow_mut().take();
            dispatcher.dispatch(ToastAction::Hide);
            let dispatcher = dispatcher.clone();
            *conceal.borrow_mut() = Some(Timeout::new(timing.toast_hide_ms, move || {
                dispatcher.dispatch(ToastAction::Conceal);
            }));
        })
    };

    let show = {
        let dispatcher = state.dispatcher();
        let hide = hide.clone();
        Callback::from(move |message: String| {
            info!("Toast: {}", message);
            conceal.borrow_mut().take();
            dispatcher.dispatch(ToastAction::Show(message));
            let hide = hide.clone();
            // Dropping the previous timeout cancels it.
            *auto_hide.borrow_mut() = Some(Timeout::new(timing.toast_ms, move || hide.emit(())));
        })
    };

    {
        let close_ref = close_ref.clone();
        use_effect_with_deps(
            move |(shown, _)| {
                if *shown {
                    if let Some(button) = close_ref.cast::<HtmlElement>() {
                        let _ = button.focus();
                    }
                }
                || ()
            },
            (state.shown, state.shows),
        );
    }

    {
        let hide = hide.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                hide.emit(());
            }
        });
    }

    let toaster = use_memo(|_| Toaster { show }, ());

    let on_close = {
        let hide = hide.clone();
        Callback::from(move |_: MouseEvent| hide.emit(()))
    };

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { for props.children.iter() }
            <div
                id="toast"
                class={classes!("toast", state.shown.then(|| "show"))}
                hidden={state.hidden}
                role="status"
                aria-live="polite"
            >
                <span class="toast-msg">{ state.message.clone() }</span>
                <button ref={close_ref} class="toast-close" aria-label="Fermer" onclick={on_close}>
                    {"×"}
                </button>
            </div>
        </ContextProvider<Toaster>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ToastState, action: ToastAction) -> ToastState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn show_replaces_current_message() {
        let first = reduce(ToastState::default(), ToastAction::Show("Un".into()));
        let second = reduce(first, ToastAction::Show("Deux".into()));
        assert_eq!(second.message, "Deux");
        assert!(second.shown);
        assert!(!second.hidden);
    }

    #[test]
    fn same_message_twice_counts_as_a_new_show() {
        let first = reduce(ToastState::default(), ToastAction::Show("Merci".into()));
        let second = reduce(first.clone(), ToastAction::Show("Merci".into()));
        assert_eq!(first.shows, 1);
        assert_eq!(second.shows, 2);
        assert_ne!((first.shown, first.shows), (second.shown, second.shows));
    }

    #[test]
    fn hide_then_conceal() {
        let shown = reduce(ToastState::default(), ToastAction::Show("Salut".into()));
        let hiding = reduce(shown, ToastAction::Hide);
        assert!(!hiding.shown);
        assert!(!hiding.hidden);
        let concealed = reduce(hiding, ToastAction::Conceal);
        assert!(concealed.hidden);
    }

    #[test]
    fn reshow_during_transition_is_not_concealed() {
        let state = reduce(ToastState::default(), ToastAction::Show("Un".into()));
        let state = reduce(state, ToastAction::Hide);
        let state = reduce(state, ToastAction::Show("Deux".into()));
        let state = reduce(state, ToastAction::Conceal);
        assert!(state.shown);
        assert!(!state.hidden);
    }

    #[test]
    fn hide_when_hidden_is_a_no_op() {
        let state = reduce(ToastState::default(), ToastAction::Hide);
        assert_eq!(state, ToastState::default());
    }
}
