use yew::prelude::*;
use yew_hooks::prelude::*;

const FRAME_MS: u32 = 30;

/// Ease-out cubic count from zero to `target` over `duration_ms`.
pub fn counter_value(target: u32, elapsed_ms: u32, duration_ms: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let t = f64::from(elapsed_ms) / f64::from(duration_ms);
    let eased = 1.0 - (1.0 - t).powi(3);
    (f64::from(target) * eased).round() as u32
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
    #[prop_or(1800)]
    pub duration_ms: u32,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &CounterProps) -> Html {
    let elapsed = use_state(|| 0u32);

    {
        let elapsed = elapsed.clone();
        let running = *elapsed < props.duration_ms;
        use_interval(
            move || elapsed.set(*elapsed + FRAME_MS),
            if running { FRAME_MS } else { 0 },
        );
    }

    html! {
        <div class="stat-counter">
            <span class="stat-value">
                {counter_value(props.target, *elapsed, props.duration_ms)}{props.suffix.clone()}
            </span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}
