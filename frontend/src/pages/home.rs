use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::counter::AnimatedCounter;
use crate::components::magnetic_button::MagneticButton;
use crate::components::parallax::Parallax;
use crate::components::reveal::Reveal;
use crate::content::company::{case_studies, industries, partners};
use crate::content::feed::use_blog_posts;
use crate::content::services::services;
use crate::Route;

const LATEST_POSTS: usize = 3;

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();
    let posts = use_blog_posts();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let go_to = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    html! {
        <div class="home-page">
            <section class="home-hero">
                <Parallax speed={0.35} class="home-hero-glow">
                    <div class="glow-orb"></div>
                </Parallax>
                <div class="home-hero-content">
                    <h1>{"Software that ships, models that hold up."}</h1>
                    <p>{"Kaycore is a senior engineering team for AI, cloud and security projects. We design it, build it and stay until it runs itself."}</p>
                    <div class="hero-buttons">
                        <MagneticButton class="primary-button" onclick={go_to(Route::Contact)}>
                            {"Start a project"}
                        </MagneticButton>
                        <MagneticButton class="secondary-button" onclick={go_to(Route::Demos)}>
                            {"Try the demos"}
                        </MagneticButton>
                    </div>
                </div>
            </section>

            <section class="home-stats">
                <AnimatedCounter target={120} suffix="+" label="Projects delivered" />
                <AnimatedCounter target={40} suffix="+" label="Engineers" />
                <AnimatedCounter target={98} suffix="%" label="Client retention" />
                <AnimatedCounter target={12} label="Countries served" />
            </section>

            <section class="page-section">
                <h2>{"What we do"}</h2>
                <div class="card-grid">
                    { for services().into_iter().enumerate().map(|(i, service)| html! {
                        <Reveal delay_ms={(i as u32) * 80}>
                            <Link<Route> to={Route::ServiceDetail { slug: service.slug.clone() }} classes="card">
                                <h3>{&service.title}</h3>
                                <p>{&service.description}</p>
                            </Link<Route>>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="page-section">
                <h2>{"Industries"}</h2>
                <div class="card-grid">
                    { for industries().into_iter().map(|industry| html! {
                        <Reveal>
                            <div class="card industry-card">
                                <span class="industry-icon">{&industry.icon}</span>
                                <h3>{&industry.name}</h3>
                                <p>{&industry.description}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="page-section">
                <h2>{"Recent work"}</h2>
                <div class="card-grid">
                    { for case_studies().into_iter().map(|study| html! {
                        <Reveal>
                            <div class="card case-study">
                                <span class="card-tag">{format!("{} · {}", study.client, study.industry)}</span>
                                <h3>{&study.title}</h3>
                                <p>{&study.summary}</p>
                                <ul>
                                    { for study.outcomes.iter().map(|o| html! { <li>{o}</li> }) }
                                </ul>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="page-section">
                <h2>{"From the blog"}</h2>
                <div class="card-grid">
                    { for posts.iter().take(LATEST_POSTS).map(|post| html! {
                        <Link<Route> to={Route::BlogPost { slug: post.slug.clone() }} classes="card">
                            <span class="card-tag">{&post.category}</span>
                            <h3>{&post.title}</h3>
                            <p>{&post.excerpt}</p>
                        </Link<Route>>
                    }) }
                </div>
            </section>

            <section class="page-section partners">
                <h2>{"Technology partners"}</h2>
                <div class="partner-row">
                    { for partners().into_iter().map(|partner| html! {
                        <a href={partner.url.clone()} target="_blank" rel="noopener noreferrer" class="partner-logo">
                            <img src={partner.logo.clone()} alt={partner.name.clone()} loading="lazy" />
                        </a>
                    }) }
                </div>
            </section>

            <section class="cta-band">
                <h2>{"Have a system that needs to exist by next quarter?"}</h2>
                <Link<Route> to={Route::Contact} classes="primary-button">{"Talk to an engineer"}</Link<Route>>
            </section>

            <style>
                {r#"
                .home-hero {
                    position: relative;
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    text-align: center;
                    padding: 8rem 2rem 4rem;
                }
                .home-hero-glow {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    z-index: -1;
                }
                .glow-orb {
                    position: absolute;
                    top: 10%;
                    left: 50%;
                    width: 600px;
                    height: 600px;
                    transform: translateX(-50%);
                    background: radial-gradient(circle, rgba(30, 144, 255, 0.25), transparent 70%);
                }
                .home-hero-content {
                    max-width: 820px;
                }
                .home-hero h1 {
                    font-size: 4rem;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .home-hero p {
                    font-size: 1.25rem;
                    color: #999;
                    margin-bottom: 2.5rem;
                }
                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .home-stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 2rem;
                    text-align: center;
                }
                .stat-value {
                    display: block;
                    font-size: 2.8rem;
                    font-weight: 700;
                    color: #7EB2FF;
                }
                .stat-label {
                    color: #999;
                }
                .industry-icon {
                    font-size: 2rem;
                }
                .case-study ul {
                    padding-left: 1.2rem;
                    color: #ccc;
                }
                .partner-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 2.5rem;
                    justify-content: center;
                    align-items: center;
                }
                .partner-logo img {
                    height: 36px;
                    opacity: 0.7;
                    filter: grayscale(1);
                    transition: all 0.3s ease;
                }
                .partner-logo:hover img {
                    opacity: 1;
                    filter: none;
                }
                .cta-band {
                    text-align: center;
                    padding: 5rem 2rem;
                    background: rgba(30, 144, 255, 0.06);
                    border-top: 1px solid rgba(30, 144, 255, 0.1);
                }
                .cta-band h2 {
                    margin-bottom: 2rem;
                }
                @media (max-width: 768px) {
                    .home-hero h1 {
                        font-size: 2.6rem;
                    }
                    .home-stats {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
