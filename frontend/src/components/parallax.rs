use yew::prelude::*;
use yew_hooks::prelude::*;

/// Vertical shift for content scrolling at `speed` relative to the page.
pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    if !scroll_y.is_finite() || scroll_y <= 0.0 {
        return 0.0;
    }
    scroll_y * speed
}

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    pub children: Children,
    #[prop_or(0.3)]
    pub speed: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Parallax)]
pub fn parallax(props: &ParallaxProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let shift = parallax_offset(scroll_y, props.speed);

    html! {
        <div class={classes!("parallax", props.class.clone())}
             style={format!("transform: translate3d(0, {:.1}px, 0); will-change: transform;", shift)}>
            { for props.children.iter() }
        </div>
    }
}
