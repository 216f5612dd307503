use yew::prelude::*;
use gloo_timers::callback::Timeout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
    Info,
}

impl BannerKind {
    fn class(self) -> &'static str {
        match self {
            BannerKind::Success => "banner-success",
            BannerKind::Error => "banner-error",
            BannerKind::Info => "banner-info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            BannerKind::Success => "✓",
            BannerKind::Error => "!",
            BannerKind::Info => "i",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub kind: BannerKind,
    pub message: AttrValue,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
    /// Dismisses itself after this many milliseconds when set.
    #[prop_or_default]
    pub auto_dismiss_ms: Option<u32>,
}

#[function_component(Banner)]
pub fn banner(props: &BannerProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let delay = props.auto_dismiss_ms;
        use_effect_with_deps(
            move |_| {
                let timeout = match (delay, on_dismiss) {
                    (Some(delay), Some(on_dismiss)) => Some(Timeout::new(delay, move || on_dismiss.emit(()))),
                    _ => None,
                };
                move || drop(timeout)
            },
            (props.message.clone(), props.auto_dismiss_ms),
        );
    }

    let close = props.on_dismiss.as_ref().map(|on_dismiss| {
        let on_dismiss = on_dismiss.clone();
        html! {
            <button class="banner-close" aria-label="Dismiss" onclick={Callback::from(move |_: MouseEvent| on_dismiss.emit(()))}>
                {"×"}
            </button>
        }
    });

    html! {
        <div class={classes!("banner", props.kind.class())} role="status">
            <span class="banner-icon">{props.kind.icon()}</span>
            <span class="banner-message">{props.message.clone()}</span>
            { for close }
            <style>
                {r#"
                .banner {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 1.25rem;
                    border-radius: 10px;
                    margin: 1rem 0;
                    animation: bannerIn 0.3s ease;
                }
                .banner-success {
                    background: rgba(46, 204, 113, 0.12);
                    border: 1px solid rgba(46, 204, 113, 0.4);
                    color: #b8f5d0;
                }
                .banner-error {
                    background: rgba(231, 76, 60, 0.12);
                    border: 1px solid rgba(231, 76, 60, 0.4);
                    color: #ffc4bd;
                }
                .banner-info {
                    background: rgba(30, 144, 255, 0.12);
                    border: 1px solid rgba(30, 144, 255, 0.4);
                    color: #cfe5ff;
                }
                .banner-icon {
                    font-weight: 700;
                    width: 1.5rem;
                    text-align: center;
                }
                .banner-message {
                    flex: 1;
                }
                .banner-close {
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.4rem;
                    cursor: pointer;
                }
                @keyframes bannerIn {
                    from { transform: translateY(-8px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}
