use crate::config::{Plan, Rates, Sliders};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingPeriod {
    Monthly,
    Annual,
}

impl BillingPeriod {
    pub fn from_yearly(yearly: bool) -> Self {
        if yearly {
            BillingPeriod::Annual
        } else {
            BillingPeriod::Monthly
        }
    }

    pub fn is_yearly(self) -> bool {
        self == BillingPeriod::Annual
    }

    pub fn label(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "mois",
            BillingPeriod::Annual => "an",
        }
    }
}

/// Slider values of the resource calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceConfig {
    pub cpu: i32,
    pub ram: i32,
    pub disk: i32,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self { cpu: 2, ram: 4, disk: 100 }
    }
}

impl ResourceConfig {
    pub fn from_sliders(sliders: &Sliders) -> Self {
        Self {
            cpu: sliders.cpu.default,
            ram: sliders.ram.default,
            disk: sliders.disk.default,
        }
    }

    pub fn summary(&self) -> String {
        format!("{} vCPU / {}GB / {}GB", self.cpu, self.ram, self.disk)
    }
}

/// Parses a raw slider value, falling back to `default` on anything unparsable.
pub fn parse_slider(raw: &str, default: i32) -> i32 {
    raw.trim().parse::<i32>().unwrap_or(default)
}

/// Monthly cost of the configured resources, in whole euros.
pub fn resource_cost(res: &ResourceConfig, rates: &Rates) -> u32 {
    let raw = f64::from(res.cpu) * rates.cpu
        + f64::from(res.ram) * rates.ram_gb
        + f64::from(res.disk) * rates.disk_gb;
    js_round(raw).max(0.0) as u32
}

/// Yearly equivalent of a monthly amount with the annual discount applied.
pub fn annualize(monthly: u32, rates: &Rates) -> u32 {
    js_round(f64::from(monthly) * 12.0 * rates.annual_factor).max(0.0) as u32
}

// Math.round semantics: halves round towards positive infinity.
fn js_round(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// The plan currently held by the estimate panel.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedPlan {
    pub id: String,
    pub monthly: u32,
    pub annual: u32,
}

impl SelectedPlan {
    pub fn from_plan(plan: &Plan, rates: &Rates) -> Self {
        Self {
            id: plan.id.clone(),
            monthly: plan.monthly,
            annual: plan_annual_price(plan, rates),
        }
    }
}

/// Annual price of a plan, derived from the monthly price when the catalog omits it.
pub fn plan_annual_price(plan: &Plan, rates: &Rates) -> u32 {
    plan.annual.unwrap_or_else(|| annualize(plan.monthly, rates))
}

/// Price shown on a plan card for the given period.
pub fn plan_display_price(plan: &Plan, period: BillingPeriod, rates: &Rates) -> u32 {
    match period {
        BillingPeriod::Monthly => plan.monthly,
        BillingPeriod::Annual => plan_annual_price(plan, rates),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Estimate {
    pub resource_cost: u32,
    /// Total for the period, zero when no plan is selected.
    pub price: u32,
    pub period: BillingPeriod,
    pub add_enabled: bool,
    pub resources: String,
}

impl Estimate {
    pub fn compute(
        plan: Option<&SelectedPlan>,
        res: &ResourceConfig,
        period: BillingPeriod,
        rates: &Rates,
    ) -> Self {
        let resource_cost = resource_cost(res, rates);
        let price = match plan {
            None => 0,
            Some(plan) => match period {
                BillingPeriod::Monthly => plan.monthly.saturating_add(resource_cost),
                BillingPeriod::Annual => plan.annual.saturating_add(annualize(resource_cost, rates)),
            },
        };

        Self {
            resource_cost,
            price,
            period,
            add_enabled: plan.is_some(),
            resources: res.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(id: &str, monthly: u32, annual: Option<u32>) -> Plan {
        Plan {
            id: id.to_string(),
            name: id.to_string(),
            monthly,
            annual,
            features: Vec::new(),
            selected: false,
        }
    }

    #[test]
    fn resource_cost_follows_linear_formula() {
        let rates = Rates::default();
        for cpu in [0, 1, 2, 7, 16] {
            for ram in [0, 1, 3, 4, 33, 64] {
                for disk in [0, 10, 25, 100, 575, 1000] {
                    let res = ResourceConfig { cpu, ram, disk };
                    let expected = (cpu as f64 * 3.0 + ram as f64 * 0.5 + disk as f64 * 0.02)
                        .round()
                        .max(0.0) as u32;
                    assert_eq!(resource_cost(&res, &rates), expected, "{:?}", res);
                }
            }
        }
    }

    #[test]
    fn default_resources_cost_ten_euros() {
        // 2*3 + 4*0.5 + 100*0.02 = 10
        assert_eq!(resource_cost(&ResourceConfig::default(), &Rates::default()), 10);
    }

    #[test]
    fn halves_round_up() {
        let res = ResourceConfig { cpu: 0, ram: 1, disk: 0 };
        assert_eq!(resource_cost(&res, &Rates::default()), 1);
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        let res = ResourceConfig { cpu: -5, ram: 0, disk: 0 };
        assert_eq!(resource_cost(&res, &Rates::default()), 0);
    }

    #[test]
    fn malformed_slider_values_use_default() {
        assert_eq!(parse_slider("8", 2), 8);
        assert_eq!(parse_slider(" 12 ", 2), 12);
        assert_eq!(parse_slider("", 4), 4);
        assert_eq!(parse_slider("lots", 100), 100);
    }

    #[test]
    fn monthly_estimate_adds_resource_cost() {
        let rates = Rates::default();
        let selected = SelectedPlan::from_plan(&plan("pro", 12, Some(130)), &rates);
        let est = Estimate::compute(Some(&selected), &ResourceConfig::default(), BillingPeriod::Monthly, &rates);
        assert_eq!(est.resource_cost, 10);
        assert_eq!(est.price, 22);
        assert_eq!(est.period.label(), "mois");
        assert!(est.add_enabled);
    }

    #[test]
    fn annual_estimate_discounts_resources() {
        let rates = Rates::default();
        let selected = SelectedPlan::from_plan(&plan("pro", 12, Some(130)), &rates);
        let res = ResourceConfig { cpu: 4, ram: 8, disk: 250 };
        let cost = resource_cost(&res, &rates);
        assert_eq!(cost, 21);
        let est = Estimate::compute(Some(&selected), &res, BillingPeriod::Annual, &rates);
        assert_eq!(est.price, 130 + (21.0_f64 * 12.0 * 0.9).round() as u32);
        assert_eq!(est.period.label(), "an");
    }

    #[test]
    fn no_plan_means_zero_and_disabled() {
        let rates = Rates::default();
        let res = ResourceConfig { cpu: 8, ram: 32, disk: 500 };
        for period in [BillingPeriod::Monthly, BillingPeriod::Annual] {
            let est = Estimate::compute(None, &res, period, &rates);
            assert_eq!(est.price, 0);
            assert!(!est.add_enabled);
            assert_eq!(est.resources, "8 vCPU / 32GB / 500GB");
        }
    }

    #[test]
    fn oversized_resources_saturate_the_price() {
        let rates = Rates::default();
        let selected = SelectedPlan::from_plan(&plan("pro", 12, Some(130)), &rates);
        let res = ResourceConfig { cpu: i32::MAX, ..ResourceConfig::default() };
        for period in [BillingPeriod::Monthly, BillingPeriod::Annual] {
            let est = Estimate::compute(Some(&selected), &res, period, &rates);
            assert_eq!(est.resource_cost, u32::MAX);
            assert_eq!(est.price, u32::MAX);
        }
    }

    #[test]
    fn annual_price_falls_back_to_discounted_monthly() {
        let rates = Rates::default();
        let business = plan("business", 29, None);
        assert_eq!(plan_annual_price(&business, &rates), 313);
        assert_eq!(plan_display_price(&business, BillingPeriod::Monthly, &rates), 29);
        assert_eq!(plan_display_price(&business, BillingPeriod::Annual, &rates), 313);
        assert_eq!(SelectedPlan::from_plan(&business, &rates).annual, 313);
    }

    #[test]
    fn sliders_seed_resource_defaults() {
        assert_eq!(ResourceConfig::from_sliders(&Sliders::default()), ResourceConfig::default());
    }
}
