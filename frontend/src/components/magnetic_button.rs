use yew::prelude::*;
use web_sys::Element;

/// Pull towards the pointer, as a fraction of its distance from the centre.
const STRENGTH: f64 = 0.3;
const MAX_PULL_PX: f64 = 14.0;

/// Translation for an element whose box is `(left, top, width, height)` when the
/// pointer sits at `(x, y)`. Clamped so the button never wanders off.
pub fn magnetic_offset(x: f64, y: f64, rect: (f64, f64, f64, f64)) -> (f64, f64) {
    let (left, top, width, height) = rect;
    let dx = (x - (left + width / 2.0)) * STRENGTH;
    let dy = (y - (top + height / 2.0)) * STRENGTH;
    (dx.clamp(-MAX_PULL_PX, MAX_PULL_PX), dy.clamp(-MAX_PULL_PX, MAX_PULL_PX))
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let offset = use_state(|| (0.0f64, 0.0f64));
    let node = use_node_ref();

    let onmousemove = {
        let offset = offset.clone();
        let node = node.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(el) = node.cast::<Element>() {
                let r = el.get_bounding_client_rect();
                offset.set(magnetic_offset(
                    f64::from(e.client_x()),
                    f64::from(e.client_y()),
                    (r.left(), r.top(), r.width(), r.height()),
                ));
            }
        })
    };
    let onmouseleave = {
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| offset.set((0.0, 0.0)))
    };
    let onclick = props.onclick.clone().unwrap_or_default();

    let (dx, dy) = *offset;
    html! {
        <button
            ref={node}
            class={classes!("magnetic-button", props.class.clone())}
            style={format!("transform: translate({:.1}px, {:.1}px);", dx, dy)}
            {onmousemove}
            {onmouseleave}
            {onclick}
        >
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_pointer_does_not_move() {
        assert_eq!(magnetic_offset(50.0, 20.0, (0.0, 0.0, 100.0, 40.0)), (0.0, 0.0));
    }

    #[test]
    fn follows_pointer_and_clamps() {
        let (dx, dy) = magnetic_offset(60.0, 20.0, (0.0, 0.0, 100.0, 40.0));
        assert!((dx - 3.0).abs() < 1e-9);
        assert_eq!(dy, 0.0);
        assert_eq!(magnetic_offset(1000.0, -1000.0, (0.0, 0.0, 100.0, 40.0)), (MAX_PULL_PX, -MAX_PULL_PX));
    }
}
