use yew::prelude::*;
use yew_router::components::Link;
use crate::components::reveal::Reveal;
use crate::content::company::case_studies;
use crate::content::services::{find_service, services};
use crate::Route;

const SERVICES_STYLE: &str = r#"
.services-page {
    padding-top: 74px;
    min-height: 100vh;
    color: #ffffff;
}
.services-hero {
    text-align: center;
    padding: 6rem 2rem 3rem;
}
.services-hero h1 {
    font-size: 3.5rem;
    margin-bottom: 1.5rem;
    background: linear-gradient(45deg, #fff, #7EB2FF);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.services-hero p {
    font-size: 1.2rem;
    color: #999;
    max-width: 680px;
    margin: 0 auto;
}
.service-card ul {
    padding-left: 1.2rem;
    color: #ccc;
}
.service-detail {
    max-width: 900px;
    margin: 0 auto;
    padding: 2rem;
}
.service-detail img {
    width: 100%;
    border-radius: 12px;
    margin: 2rem 0;
}
.feature-list {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
    list-style: none;
    padding: 0;
}
.feature-list li {
    background: rgba(26, 26, 26, 0.85);
    border: 1px solid rgba(30, 144, 255, 0.1);
    border-radius: 10px;
    padding: 1rem 1.25rem;
}
@media (max-width: 768px) {
    .services-hero h1 {
        font-size: 2.5rem;
    }
    .feature-list {
        grid-template-columns: 1fr;
    }
}
"#;

#[function_component(Services)]
pub fn services_page() -> Html {
    html! {
        <div class="services-page">
            <section class="services-hero">
                <h1>{"Services"}</h1>
                <p>{"Six practices, one team. Pick the one that matches your problem or let us help you figure out which one it is."}</p>
            </section>
            <section class="page-section">
                <div class="card-grid">
                    { for services().into_iter().enumerate().map(|(i, service)| html! {
                        <Reveal delay_ms={(i as u32) * 60}>
                            <div class="card service-card">
                                <h3>{&service.title}</h3>
                                <p>{&service.description}</p>
                                <ul>
                                    { for service.features.iter().take(3).map(|f| html! { <li>{f}</li> }) }
                                </ul>
                                <Link<Route> to={Route::ServiceDetail { slug: service.slug.clone() }} classes="card-link">
                                    {"Learn more →"}
                                </Link<Route>>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>
            <style>{SERVICES_STYLE}</style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let Some(service) = find_service(&props.slug) else {
        return html! {
            <div class="services-page">
                <section class="services-hero">
                    <h1>{"Service not found"}</h1>
                    <p>
                        {"We don't offer that one yet. "}
                        <Link<Route> to={Route::Services}>{"See everything we do."}</Link<Route>>
                    </p>
                </section>
                <style>{SERVICES_STYLE}</style>
            </div>
        };
    };

    html! {
        <div class="services-page">
            <section class="services-hero">
                <h1>{&service.title}</h1>
                <p>{&service.description}</p>
            </section>
            <section class="service-detail">
                <img src={service.image.clone()} alt={service.title.clone()} loading="lazy" />
                <h2>{"What's included"}</h2>
                <ul class="feature-list">
                    { for service.features.iter().map(|f| html! { <li>{f}</li> }) }
                </ul>
                <h2>{"Selected work"}</h2>
                <div class="card-grid">
                    { for case_studies().into_iter().take(2).map(|study| html! {
                        <div class="card">
                            <span class="card-tag">{&study.client}</span>
                            <h3>{&study.title}</h3>
                            <p>{&study.summary}</p>
                        </div>
                    }) }
                </div>
                <div class="cta-inline">
                    <Link<Route> to={Route::Contact} classes="primary-button">{"Discuss your project"}</Link<Route>>
                </div>
            </section>
            <style>{SERVICES_STYLE}</style>
        </div>
    }
}
