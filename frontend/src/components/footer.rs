use yew::prelude::*;
use yew_router::prelude::*;
use crate::config::CONTACT_EMAIL;
use crate::content::services::services;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="nav-logo">{"kaycore"}</Link<Route>>
                    <p>{"Engineering partners for AI, cloud and security work that has to hold up in production."}</p>
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                </div>
                <div class="footer-column">
                    <h4>{"Services"}</h4>
                    { for services().into_iter().map(|s| html! {
                        <Link<Route> to={Route::ServiceDetail { slug: s.slug.clone() }}>{s.title}</Link<Route>>
                    }) }
                </div>
                <div class="footer-column">
                    <h4>{"Company"}</h4>
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Careers}>{"Careers"}</Link<Route>>
                    <Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>>
                    <Link<Route> to={Route::Demos}>{"Demos"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Legal"}</h4>
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                    <Link<Route> to={Route::Cookies}>{"Cookie Policy"}</Link<Route>>
                </div>
            </div>
            <p class="footer-legal">{"© Kaycore Oy. All rights reserved."}</p>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid rgba(30, 144, 255, 0.1);
                    background: rgba(20, 20, 20, 0.95);
                    padding: 4rem 2rem 2rem;
                    color: #999;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2rem;
                }
                .footer-brand p {
                    margin: 1rem 0;
                    max-width: 320px;
                }
                .footer-column {
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }
                .footer-column h4 {
                    color: #fff;
                    margin-bottom: 0.4rem;
                }
                .site-footer a {
                    color: #999;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .site-footer a:hover {
                    color: #7EB2FF;
                }
                .footer-legal {
                    text-align: center;
                    margin-top: 3rem;
                    font-size: 0.85rem;
                    color: #666;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
