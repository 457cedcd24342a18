use yew::prelude::*;

use crate::animation::{use_animated_number, use_pulse};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct PriceProps {
    pub value: u32,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Render `value` as-is, without counting up or pulsing.
    #[prop_or_default]
    pub instant: bool,
}

/// Currency amount that counts up to each new value and pulses when it changes.
#[function_component(AnimatedPrice)]
pub fn animated_price(props: &PriceProps) -> Html {
    let site = config::site();
    let shown = use_animated_number(props.value, site.timing.count_up_ms);
    let (pulsing, on_pulse_end) = use_pulse(props.value);

    let (amount, pulse) = if props.instant {
        (props.value, false)
    } else {
        (shown, pulsing)
    };

    html! {
        <span
            id={props.id.clone()}
            class={classes!("amount", pulse.then(|| "pulse"), props.class.clone())}
            onanimationend={on_pulse_end}
        >
            { format!("{}{}", site.currency, amount) }
        </span>
    }
}
