use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"This page wandered off. The rest of the site is still here."}</p>
            <Link<Route> to={Route::Home} classes="primary-button">{"Back to home"}</Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    color: #fff;
                    text-align: center;
                    padding: 2rem;
                }
                .not-found-page h1 {
                    font-size: 6rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .not-found-page p {
                    color: #999;
                }
                "#}
            </style>
        </div>
    }
}
