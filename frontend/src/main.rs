use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod blog_filter;
mod content {
    pub mod blog_posts;
    pub mod careers;
    pub mod company;
    pub mod feed;
    pub mod services;
}
mod components {
    pub mod counter;
    pub mod footer;
    pub mod magnetic_button;
    pub mod notification;
    pub mod parallax;
    pub mod reveal;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod blog_post;
    pub mod careers;
    pub mod contact;
    pub mod demos;
    pub mod home;
    pub mod not_found;
    pub mod pricing;
    pub mod services;
    pub mod termsprivacy;
}
mod demos {
    pub mod chaos_mesh;
    pub mod cloud_cost;
    pub mod document_pipeline;
    pub mod genomic;
    pub mod kanban;
    pub mod loan_calculator;
    pub mod token_estimator;
}

use components::footer::Footer;
use pages::{
    about::About,
    blog::Blog,
    blog_post::BlogPostPage,
    careers::Careers,
    contact::Contact,
    demos::{DemoPage, DemosIndex},
    home::Home,
    not_found::NotFound,
    pricing::Pricing,
    services::{ServiceDetail, Services},
    termsprivacy::{CookiePolicy, PrivacyPolicy, TermsOfService},
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/services/:slug")]
    ServiceDetail { slug: String },
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/pricing")]
    Pricing,
    #[at("/careers")]
    Careers,
    #[at("/contact")]
    Contact,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[at("/cookies")]
    Cookies,
    #[at("/demos")]
    Demos,
    #[at("/demos/:demo")]
    Demo { demo: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::ServiceDetail { slug } => {
            info!("Rendering Service page for {}", slug);
            html! { <ServiceDetail {slug} /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPost { slug } => {
            info!("Rendering Blog post {}", slug);
            html! { <BlogPostPage {slug} /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Careers => {
            info!("Rendering Careers page");
            html! { <Careers /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::Cookies => {
            info!("Rendering Cookies page");
            html! { <CookiePolicy /> }
        },
        Route::Demos => {
            info!("Rendering Demos page");
            html! { <DemosIndex /> }
        },
        Route::Demo { demo } => {
            info!("Rendering demo {}", demo);
            html! { <DemoPage {demo} /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        },
    }
}

fn nav_links() -> [(&'static str, Route); 6] {
    [
        ("Services", Route::Services),
        ("About", Route::About),
        ("Blog", Route::Blog),
        ("Demos", Route::Demos),
        ("Careers", Route::Careers),
        ("Pricing", Route::Pricing),
    ]
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 40.0);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                scroll_callback
            });

            move || {
                if let (Some(window), Some(listener)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"kaycore"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for nav_links().into_iter().map(|(label, route)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route} classes="nav-link">
                                {label}
                            </Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">
                            {"Contact us"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1rem 2rem;
                    transition: background 0.3s ease, backdrop-filter 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(26, 26, 26, 0.9);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                    letter-spacing: 0.02em;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #ccc;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #7EB2FF;
                }
                .nav-cta {
                    background: #1E90FF;
                    color: #fff;
                    padding: 0.6rem 1.2rem;
                    border-radius: 8px;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                @media (max-width: 900px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background: rgba(26, 26, 26, 0.97);
                        padding: 2rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
