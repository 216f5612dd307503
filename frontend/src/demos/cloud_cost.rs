use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Aws,
    Azure,
    Gcp,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Aws, Provider::Azure, Provider::Gcp];

    pub fn name(self) -> &'static str {
        match self {
            Provider::Aws => "AWS",
            Provider::Azure => "Azure",
            Provider::Gcp => "Google Cloud",
        }
    }

    /// Relative to AWS list prices.
    pub fn multiplier(self) -> f64 {
        match self {
            Provider::Aws => 1.0,
            Provider::Azure => 0.97,
            Provider::Gcp => 0.93,
        }
    }

    fn from_value(value: &str) -> Self {
        match value {
            "Azure" => Provider::Azure,
            "Google Cloud" => Provider::Gcp,
            _ => Provider::Aws,
        }
    }
}

pub struct InstanceSize {
    pub name: &'static str,
    pub vcpus: u32,
    pub memory_gb: u32,
    pub hourly_usd: f64,
}

pub const INSTANCE_SIZES: &[InstanceSize] = &[
    InstanceSize { name: "Small", vcpus: 2, memory_gb: 4, hourly_usd: 0.0416 },
    InstanceSize { name: "Medium", vcpus: 2, memory_gb: 8, hourly_usd: 0.0832 },
    InstanceSize { name: "Large", vcpus: 4, memory_gb: 16, hourly_usd: 0.1664 },
    InstanceSize { name: "XLarge", vcpus: 8, memory_gb: 32, hourly_usd: 0.3328 },
];

pub const STORAGE_PER_GB: f64 = 0.023;
pub const EGRESS_PER_GB: f64 = 0.09;
pub const FREE_EGRESS_GB: f64 = 100.0;
pub const DEFAULT_HOURS: f64 = 730.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostInputs {
    pub provider: Provider,
    pub instances: u32,
    pub size: usize,
    pub hours: f64,
    pub storage_gb: f64,
    pub egress_gb: f64,
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            provider: Provider::Aws,
            instances: 3,
            size: 1,
            hours: DEFAULT_HOURS,
            storage_gb: 500.0,
            egress_gb: 250.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostBreakdown {
    pub compute: f64,
    pub storage: f64,
    pub egress: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.compute + self.storage + self.egress
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

pub fn estimate_cost(inputs: &CostInputs) -> CostBreakdown {
    let size = INSTANCE_SIZES.get(inputs.size).unwrap_or(&INSTANCE_SIZES[0]);
    let multiplier = inputs.provider.multiplier();
    let hours = non_negative(inputs.hours).min(744.0);
    let billable_egress = (non_negative(inputs.egress_gb) - FREE_EGRESS_GB).max(0.0);

    CostBreakdown {
        compute: f64::from(inputs.instances) * size.hourly_usd * hours * multiplier,
        storage: non_negative(inputs.storage_gb) * STORAGE_PER_GB * multiplier,
        egress: billable_egress * EGRESS_PER_GB * multiplier,
    }
}

fn usd(value: f64) -> String {
    format!("${:.2}", value)
}

fn parse_or<T: std::str::FromStr>(e: &InputEvent, fallback: T) -> T {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value().parse().unwrap_or(fallback)
}

#[function_component(CloudCostEstimator)]
pub fn cloud_cost_estimator() -> Html {
    let inputs = use_state(CostInputs::default);
    let breakdown = estimate_cost(&inputs);

    let on_provider = {
        let inputs = inputs.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            inputs.set(CostInputs { provider: Provider::from_value(&select.value()), ..*inputs });
        })
    };
    let on_size = {
        let inputs = inputs.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let size = select.value().parse().unwrap_or(0);
            inputs.set(CostInputs { size, ..*inputs });
        })
    };
    let on_instances = {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            inputs.set(CostInputs { instances: parse_or(&e, 0), ..*inputs });
        })
    };
    let on_hours = {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            inputs.set(CostInputs { hours: parse_or(&e, DEFAULT_HOURS), ..*inputs });
        })
    };
    let on_storage = {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            inputs.set(CostInputs { storage_gb: parse_or(&e, 0.0), ..*inputs });
        })
    };
    let on_egress = {
        let inputs = inputs.clone();
        Callback::from(move |e: InputEvent| {
            inputs.set(CostInputs { egress_gb: parse_or(&e, 0.0), ..*inputs });
        })
    };

    html! {
        <div class="demo-widget cloud-cost">
            <div class="demo-controls">
                <label>
                    {"Provider"}
                    <select onchange={on_provider}>
                        { for Provider::ALL.into_iter().map(|p| html! {
                            <option value={p.name()} selected={p == inputs.provider}>{p.name()}</option>
                        }) }
                    </select>
                </label>
                <label>
                    {"Instance size"}
                    <select onchange={on_size}>
                        { for INSTANCE_SIZES.iter().enumerate().map(|(i, s)| html! {
                            <option value={i.to_string()} selected={i == inputs.size}>
                                {format!("{} ({} vCPU, {} GB)", s.name, s.vcpus, s.memory_gb)}
                            </option>
                        }) }
                    </select>
                </label>
                <label>
                    {"Instances"}
                    <input type="number" min="0" value={inputs.instances.to_string()} oninput={on_instances} />
                </label>
                <label>
                    {"Hours per month"}
                    <input type="number" min="0" max="744" value={inputs.hours.to_string()} oninput={on_hours} />
                </label>
                <label>
                    {"Storage (GB)"}
                    <input type="number" min="0" value={inputs.storage_gb.to_string()} oninput={on_storage} />
                </label>
                <label>
                    {"Egress (GB)"}
                    <input type="number" min="0" value={inputs.egress_gb.to_string()} oninput={on_egress} />
                </label>
            </div>
            <table class="demo-table">
                <tbody>
                    <tr><td>{"Compute"}</td><td>{usd(breakdown.compute)}</td></tr>
                    <tr><td>{"Block storage"}</td><td>{usd(breakdown.storage)}</td></tr>
                    <tr><td>{format!("Egress (first {} GB free)", FREE_EGRESS_GB)}</td><td>{usd(breakdown.egress)}</td></tr>
                    <tr class="highlight"><td>{"Estimated monthly total"}</td><td>{usd(breakdown.total())}</td></tr>
                </tbody>
            </table>
            <p class="demo-hint">{"Indicative list prices only. Reserved capacity and committed-use discounts are not included."}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn aws_baseline() {
        let inputs = CostInputs {
            provider: Provider::Aws,
            instances: 2,
            size: 2,
            hours: 730.0,
            storage_gb: 100.0,
            egress_gb: 300.0,
        };
        let cost = estimate_cost(&inputs);
        assert!(close(cost.compute, 2.0 * 0.1664 * 730.0));
        assert!(close(cost.storage, 2.3));
        assert!(close(cost.egress, 200.0 * 0.09));
        assert!(close(cost.total(), cost.compute + cost.storage + cost.egress));
    }

    #[test]
    fn provider_multiplier_scales_every_line() {
        let aws = estimate_cost(&CostInputs::default());
        let gcp = estimate_cost(&CostInputs { provider: Provider::Gcp, ..CostInputs::default() });
        assert!(close(gcp.compute, aws.compute * 0.93));
        assert!(close(gcp.storage, aws.storage * 0.93));
        assert!(close(gcp.egress, aws.egress * 0.93));
    }

    #[test]
    fn free_egress_allowance() {
        let cost = estimate_cost(&CostInputs { egress_gb: 80.0, ..CostInputs::default() });
        assert_eq!(cost.egress, 0.0);
    }

    #[test]
    fn junk_inputs_never_go_negative() {
        let cost = estimate_cost(&CostInputs {
            hours: f64::NAN,
            storage_gb: -50.0,
            egress_gb: f64::INFINITY,
            size: 99,
            ..CostInputs::default()
        });
        assert_eq!(cost.compute, 0.0);
        assert_eq!(cost.storage, 0.0);
        assert_eq!(cost.egress, 0.0);
    }

    #[test]
    fn zero_instances_cost_nothing_to_run() {
        let cost = estimate_cost(&CostInputs { instances: 0, ..CostInputs::default() });
        assert_eq!(cost.compute, 0.0);
        assert!(cost.storage > 0.0);
    }
}
