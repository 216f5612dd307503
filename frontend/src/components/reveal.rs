use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::Element;

/// An element counts as seen once its top edge is `threshold` of the way up the viewport.
pub fn is_revealed(element_top: f64, viewport_height: f64, threshold: f64) -> bool {
    element_top < viewport_height * (1.0 - threshold.clamp(0.0, 1.0))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or(0.15)]
    pub threshold: f64,
    /// Stagger in milliseconds, applied as a CSS transition delay.
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    {
        let node = node.clone();
        let visible = visible.clone();
        let threshold = props.threshold;
        use_effect_with_deps(
            move |(_, height)| {
                if !*visible {
                    if let Some(el) = node.cast::<Element>() {
                        let top = el.get_bounding_client_rect().top();
                        if is_revealed(top, *height, threshold) {
                            visible.set(true);
                        }
                    }
                }
                || ()
            },
            (scroll_y as i64, viewport_height),
        );
    }

    html! {
        <div ref={node}
             class={classes!("reveal", (*visible).then_some("revealed"))}
             style={format!("transition-delay: {}ms;", props.delay_ms)}>
            { for props.children.iter() }
            <style>
                {r#"
                .reveal {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: none;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_the_fold_stays_hidden() {
        assert!(!is_revealed(900.0, 800.0, 0.15));
        assert!(!is_revealed(700.0, 800.0, 0.15));
    }

    #[test]
    fn inside_viewport_is_revealed() {
        assert!(is_revealed(500.0, 800.0, 0.15));
        assert!(is_revealed(-100.0, 800.0, 0.15));
    }
}
