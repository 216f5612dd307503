use yew::prelude::*;
use yew_router::components::Link;
use kaycore_common::{BlogPost, ContentBlock};
use crate::content::feed::use_blog_posts;
use crate::Route;

fn render_block(block: &ContentBlock) -> Html {
    match block {
        ContentBlock::Paragraph { text } => html! { <p>{text}</p> },
        ContentBlock::Heading { text } => html! { <h2>{text}</h2> },
        ContentBlock::List { items } => html! {
            <ul>{ for items.iter().map(|item| html! { <li>{item}</li> }) }</ul>
        },
        ContentBlock::Quote { text, attribution } => html! {
            <blockquote>
                <p>{text}</p>
                if let Some(who) = attribution {
                    <cite>{format!("— {}", who)}</cite>
                }
            </blockquote>
        },
    }
}

/// Posts from a feed may arrive without a body; the excerpt stands in for it.
fn render_body(post: &BlogPost) -> Html {
    match &post.content {
        Some(blocks) if !blocks.is_empty() => html! { <>{ for blocks.iter().map(render_block) }</> },
        _ => html! { <p>{&post.excerpt}</p> },
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    let posts = use_blog_posts();

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.slug.clone(),
        );
    }

    let Some(post) = posts.iter().find(|p| p.slug == props.slug) else {
        return html! {
            <div class="blog-post-page">
                <div class="blog-post-content">
                    <h1>{"Article not found"}</h1>
                    <p>{"It may have moved or been retired."}</p>
                    <Link<Route> to={Route::Blog}>{"← All articles"}</Link<Route>>
                </div>
            </div>
        };
    };

    let related: Vec<&BlogPost> = posts
        .iter()
        .filter(|p| p.category == post.category && p.slug != post.slug)
        .take(2)
        .collect();

    html! {
        <div class="blog-post-page">
            <article class="blog-post-content">
                <Link<Route> to={Route::Blog} classes="back-link">{"← All articles"}</Link<Route>>
                <span class="blog-category">{&post.category}</span>
                <h1>{&post.title}</h1>
                <div class="blog-meta">
                    <span>{&post.author}</span>
                    <span>{&post.date}</span>
                    <span>{&post.read_time}</span>
                </div>
                <img src={post.image.clone()} alt={post.title.clone()} class="blog-hero-image" />
                <div class="blog-body">
                    { render_body(post) }
                </div>
                if !related.is_empty() {
                    <aside class="related-posts">
                        <h3>{"Related reading"}</h3>
                        { for related.iter().map(|p| html! {
                            <Link<Route> to={Route::BlogPost { slug: p.slug.clone() }}>{&p.title}</Link<Route>>
                        }) }
                    </aside>
                }
            </article>
            <style>
                {r#"
                .blog-post-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .blog-post-content {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .blog-post-content h1 {
                    font-size: 2.8rem;
                    margin: 0.75rem 0 1rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .back-link {
                    display: inline-block;
                    color: #7EB2FF;
                    text-decoration: none;
                    margin-bottom: 2rem;
                }
                .blog-meta {
                    display: flex;
                    gap: 1.5rem;
                    color: #666;
                    font-size: 0.9rem;
                    margin-bottom: 2rem;
                }
                .blog-hero-image {
                    width: 100%;
                    border-radius: 12px;
                    margin-bottom: 2rem;
                }
                .blog-body p, .blog-body li {
                    color: #ccc;
                    line-height: 1.8;
                    font-size: 1.1rem;
                }
                .blog-body h2 {
                    margin: 2.5rem 0 1rem;
                }
                .blog-body blockquote {
                    border-left: 3px solid #1E90FF;
                    margin: 2rem 0;
                    padding: 0.5rem 1.5rem;
                    font-style: italic;
                }
                .blog-body cite {
                    color: #999;
                    font-size: 0.9rem;
                }
                .related-posts {
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(30, 144, 255, 0.1);
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .related-posts a {
                    color: #7EB2FF;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
