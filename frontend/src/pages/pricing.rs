use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::price::AnimatedPrice;
use crate::components::reveal::Reveal;
use crate::components::ripple::RippleButton;
use crate::components::tilt::use_tilt;
use crate::components::toast::use_toast;
use crate::config::{self, Plan, SliderRange};
use crate::pricing::{
    parse_slider, plan_display_price, BillingPeriod, Estimate, ResourceConfig, SelectedPlan,
};

fn is_activation_key(e: &KeyboardEvent) -> bool {
    matches!(e.key().as_str(), "Enter" | " ")
}

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub plan: Plan,
    pub period: BillingPeriod,
    pub selected: bool,
    pub on_select: Callback<String>,
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let rates = config::site().rates;
    let card_ref = use_node_ref();
    let button_ref = use_node_ref();
    let tilt = use_tilt(card_ref.clone());

    // Selecting from anywhere on the card leaves focus on its button.
    let select = {
        let id = props.plan.id.clone();
        let on_select = props.on_select.clone();
        let button_ref = button_ref.clone();
        Callback::from(move |_: ()| {
            on_select.emit(id.clone());
            if let Some(button) = button_ref.cast::<HtmlElement>() {
                let _ = button.focus();
            }
        })
    };

    let on_card_click = {
        let select = select.clone();
        Callback::from(move |_: MouseEvent| select.emit(()))
    };

    let on_card_key = {
        let select = select.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e) {
                e.prevent_default();
                select.emit(());
            }
        })
    };

    let on_button_click = {
        let select = select.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            select.emit(());
        })
    };

    let on_button_key = {
        let select = select.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e) {
                e.prevent_default();
                e.stop_propagation();
                select.emit(());
            }
        })
    };

    let plan = &props.plan;
    let pressed = if props.selected { "true" } else { "false" };
    let period_suffix = format!("/{}", props.period.label());

    html! {
        <div
            ref={card_ref}
            class={classes!("card", "pricing-card", props.selected.then(|| "selected"))}
            role="button"
            tabindex="0"
            aria-pressed={pressed}
            data-plan={plan.id.clone()}
            data-reveal-el="true"
            style={tilt.style}
            onmousemove={tilt.onmousemove}
            onmouseleave={tilt.onmouseleave}
            onclick={on_card_click}
            onkeydown={on_card_key}
        >
            <div class="card-header">
                <h3>{ plan.name.clone() }</h3>
                <div class="price">
                    <AnimatedPrice value={plan_display_price(plan, props.period, &rates)} />
                    <span class="period">{ period_suffix }</span>
                </div>
            </div>
            <ul>
                { for plan.features.iter().map(|f| html! { <li>{ f.clone() }</li> }) }
            </ul>
            <RippleButton
                class="select-plan"
                node_ref={button_ref}
                aria_pressed={Some(props.selected)}
                onclick={on_button_click}
                onkeydown={on_button_key}
            >
                { if props.selected { "Sélectionné" } else { "Choisir ce plan" } }
            </RippleButton>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SliderProps {
    pub id: AttrValue,
    pub value_id: AttrValue,
    pub label: AttrValue,
    pub unit: AttrValue,
    pub range: SliderRange,
    pub value: i32,
    pub on_change: Callback<i32>,
}

#[function_component(ResourceSlider)]
pub fn resource_slider(props: &SliderProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        let default = props.range.default;
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(parse_slider(&input.value(), default));
        })
    };

    html! {
        <div class="slider-row">
            <label for={props.id.clone()}>
                { props.label.clone() }
                {" : "}
                <span id={props.value_id.clone()}>{ props.value }</span>
                { props.unit.clone() }
            </label>
            <input
                type="range"
                id={props.id.clone()}
                min={props.range.min.to_string()}
                max={props.range.max.to_string()}
                step={props.range.step.to_string()}
                value={props.value.to_string()}
                {oninput}
            />
        </div>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let site = config::site();
    let rates = site.rates;
    let toast = use_toast();

    let yearly = use_state(|| false);
    let resources = use_state(|| ResourceConfig::from_sliders(&site.sliders));
    let selected = use_state(|| {
        site.preselected_plan()
            .map(|plan| SelectedPlan::from_plan(plan, &rates))
    });
    let cooling_down = use_state(|| false);

    let period = BillingPeriod::from_yearly(*yearly);
    let estimate = Estimate::compute((*selected).as_ref(), &resources, period, &rates);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: String| match site.plan(&id) {
            Some(plan) => {
                info!("Plan selected: {}", plan.id);
                selected.set(Some(SelectedPlan::from_plan(plan, &rates)));
            }
            None => debug!("Ignoring unknown plan id {}", id),
        })
    };

    let on_clear = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Plan selection cleared");
            selected.set(None);
        })
    };

    let on_billing_change = {
        let yearly = yearly.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            yearly.set(input.checked());
        })
    };

    let on_small_toggle = {
        let yearly = yearly.clone();
        Callback::from(move |_: MouseEvent| yearly.set(!*yearly))
    };

    let set_resource = |apply: fn(&mut ResourceConfig, i32)| {
        let resources = resources.clone();
        Callback::from(move |value: i32| {
            let mut next = *resources;
            apply(&mut next, value);
            resources.set(next);
        })
    };

    let on_add = {
        let toast = toast.clone();
        let cooling_down = cooling_down.clone();
        let cooldown_ms = site.timing.add_cooldown_ms;
        Callback::from(move |_: MouseEvent| {
            toast.show("Plan ajouté à l'estimation.");
            cooling_down.set(true);
            let cooling_down = cooling_down.clone();
            Timeout::new(cooldown_ms, move || cooling_down.set(false)).forget();
        })
    };

    let selected_id = (*selected).as_ref().map(|p| p.id.clone());
    let plan_name = selected_id
        .as_deref()
        .and_then(|id| site.plan(id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Aucun".to_string());

    html! {
        <>
            <Reveal id="offres" class="pricing-section">
                <div class="pricing-header">
                    <h2>{"Des offres simples, sans surprise"}</h2>
                    <div class="billing-switch">
                        <label class="switch">
                            <input
                                type="checkbox"
                                id="billingToggle"
                                checked={*yearly}
                                onchange={on_billing_change}
                            />
                            <span>{"Facturation annuelle (-10 %)"}</span>
                        </label>
                    </div>
                </div>
                <div class="pricing-grid">
                    { for site.plans.iter().map(|plan| html! {
                        <PlanCard
                            key={plan.id.clone()}
                            plan={plan.clone()}
                            {period}
                            selected={selected_id.as_deref() == Some(plan.id.as_str())}
                            on_select={on_select.clone()}
                        />
                    }) }
                </div>
            </Reveal>

            <Reveal id="calculateur" class="calculator-section">
                <div class="calculator" data-reveal-el="true">
                    <h2>{"Ajustez vos ressources"}</h2>
                    <ResourceSlider
                        id="cpuRange"
                        value_id="cpuVal"
                        label="CPU"
                        unit=" vCPU"
                        range={site.sliders.cpu}
                        value={resources.cpu}
                        on_change={set_resource(|r, v| r.cpu = v)}
                    />
                    <ResourceSlider
                        id="ramRange"
                        value_id="ramVal"
                        label="RAM"
                        unit=" Go"
                        range={site.sliders.ram}
                        value={resources.ram}
                        on_change={set_resource(|r, v| r.ram = v)}
                    />
                    <ResourceSlider
                        id="diskRange"
                        value_id="diskVal"
                        label="Disque"
                        unit=" Go"
                        range={site.sliders.disk}
                        value={resources.disk}
                        on_change={set_resource(|r, v| r.disk = v)}
                    />
                    <p class="calc-total">
                        {"Ressources : "}
                        <AnimatedPrice id="calcPrice" value={estimate.resource_cost} />
                        {"/mois"}
                    </p>
                </div>

                <aside class="estimate" data-reveal-el="true" aria-live="polite">
                    <h3>{"Votre estimation"}</h3>
                    <dl>
                        <dt>{"Plan"}</dt>
                        <dd id="estPlan">{ plan_name }</dd>
                        <dt>{"Ressources"}</dt>
                        <dd id="estResources">{ estimate.resources.clone() }</dd>
                    </dl>
                    <p class="estimate-total">
                        <AnimatedPrice
                            id="estPrice"
                            value={estimate.price}
                            instant={!estimate.add_enabled}
                        />
                        {" / "}
                        <span id="estPeriod">{ estimate.period.label() }</span>
                    </p>
                    <div class="estimate-actions">
                        <RippleButton
                            id="toggleBillingSmall"
                            class="btn-ghost"
                            aria_pressed={Some(period.is_yearly())}
                            aria_controls="billingToggle"
                            onclick={on_small_toggle}
                        >
                            { if period.is_yearly() { "Voir en mensuel" } else { "Voir en annuel" } }
                        </RippleButton>
                        <RippleButton
                            id="addToCart"
                            class="btn-primary"
                            disabled={!estimate.add_enabled || *cooling_down}
                            onclick={on_add}
                        >
                            {"Ajouter à l'estimation"}
                        </RippleButton>
                        <RippleButton
                            class="btn-link"
                            disabled={!estimate.add_enabled}
                            onclick={on_clear}
                        >
                            {"Réinitialiser"}
                        </RippleButton>
                    </div>
                </aside>
            </Reveal>
        </>
    }
}
