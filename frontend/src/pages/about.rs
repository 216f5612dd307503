use yew::prelude::*;
use yew_router::components::Link;
use crate::components::counter::AnimatedCounter;
use crate::components::reveal::Reveal;
use crate::content::company::{partners, team};
use crate::Route;

const VALUES: &[(&str, &str)] = &[
    ("Ship small, ship often", "Working software every two weeks beats a perfect slide deck every quarter."),
    ("Leave it better", "Every engagement ends with documentation, runbooks and a team that can run the system without us."),
    ("Say what we see", "If a project shouldn't be built, we'll tell you before you pay for it."),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="about-hero">
                <h1>{"About Kaycore"}</h1>
                <p>{"We started in 2016 as three engineers who were tired of watching good projects die in handover. Today we are a distributed team across Europe and North America, still doing the same thing: building systems and staying until they work."}</p>
            </section>

            <section class="home-stats">
                <AnimatedCounter target={2016} label="Founded" duration_ms={0} />
                <AnimatedCounter target={40} suffix="+" label="Engineers" />
                <AnimatedCounter target={9} label="Nationalities" />
            </section>

            <section class="page-section">
                <h2>{"How we work"}</h2>
                <div class="card-grid">
                    { for VALUES.iter().map(|(title, text)| html! {
                        <Reveal>
                            <div class="card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="page-section">
                <h2>{"Leadership"}</h2>
                <div class="team-grid">
                    { for team().into_iter().map(|member| html! {
                        <Reveal>
                            <div class="team-card">
                                <img src={member.image.clone()} alt={member.name.clone()} loading="lazy" />
                                <h3>{&member.name}</h3>
                                <span class="team-role">{&member.role}</span>
                                <p>{&member.bio}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="page-section">
                <h2>{"Partners"}</h2>
                <div class="partner-row">
                    { for partners().into_iter().map(|partner| html! {
                        <a href={partner.url.clone()} target="_blank" rel="noopener noreferrer">{&partner.name}</a>
                    }) }
                </div>
            </section>

            <section class="cta-band">
                <h2>{"Want to work with us, or for us?"}</h2>
                <div class="hero-buttons">
                    <Link<Route> to={Route::Contact} classes="primary-button">{"Get in touch"}</Link<Route>>
                    <Link<Route> to={Route::Careers} classes="secondary-button">{"Open roles"}</Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .about-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .about-hero {
                    max-width: 820px;
                    margin: 0 auto;
                    text-align: center;
                    padding: 6rem 2rem 3rem;
                }
                .about-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .about-hero p {
                    font-size: 1.2rem;
                    color: #999;
                }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .team-card {
                    text-align: center;
                }
                .team-card img {
                    width: 160px;
                    height: 160px;
                    object-fit: cover;
                    border-radius: 50%;
                    border: 2px solid rgba(30, 144, 255, 0.3);
                }
                .team-role {
                    color: #7EB2FF;
                    font-size: 0.9rem;
                }
                .team-card p {
                    color: #999;
                }
                .partner-row a {
                    color: #ccc;
                    text-decoration: none;
                    font-size: 1.2rem;
                }
                "#}
            </style>
        </div>
    }
}
