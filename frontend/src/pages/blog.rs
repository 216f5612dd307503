use yew::prelude::*;
use yew_router::components::Link;
use web_sys::HtmlInputElement;
use kaycore_common::BlogPost;
use crate::blog_filter::{categories, BlogFilter};
use crate::content::feed::use_blog_posts;
use crate::Route;

#[derive(Properties, PartialEq)]
struct PostCardProps {
    post: BlogPost,
    #[prop_or_default]
    featured: bool,
}

#[function_component(PostCard)]
fn post_card(props: &PostCardProps) -> Html {
    let post = &props.post;
    html! {
        <div class={classes!("blog-post-preview", props.featured.then_some("featured"))}>
            <Link<Route> to={Route::BlogPost { slug: post.slug.clone() }}>
                <img src={post.image.clone()} alt={post.title.clone()} loading="lazy" class="blog-preview-image" />
                <div class="blog-preview-body">
                    <span class="blog-category">{&post.category}</span>
                    <h2>{&post.title}</h2>
                    <p>{&post.excerpt}</p>
                    <span class="blog-date">{format!("{} · {} · {}", post.date, post.author, post.read_time)}</span>
                </div>
            </Link<Route>>
        </div>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let posts = use_blog_posts();
    let filter = use_state(BlogFilter::default);

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

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filter.set(BlogFilter { query: input.value(), ..(*filter).clone() });
        })
    };

    let on_reset = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*filter).clone();
            next.reset();
            filter.set(next);
        })
    };

    let listing = filter.apply(&posts);

    html! {
        <div class="blog-list-page">
            <section class="blog-list-hero">
                <h1>{"Insights"}</h1>
                <p>{"Field notes from our engineers on AI, cloud, security and the data plumbing in between."}</p>
            </section>
            <section class="blog-list-section">
                <div class="blog-controls">
                    <input
                        type="search"
                        class="blog-search"
                        placeholder="Search articles..."
                        value={filter.query.clone()}
                        oninput={on_search}
                    />
                    <div class="category-pills">
                        { for categories(&posts).into_iter().map(|category| {
                            let active = category == filter.category;
                            let onclick = {
                                let filter = filter.clone();
                                let category = category.clone();
                                Callback::from(move |_: MouseEvent| {
                                    filter.set(BlogFilter { category: category.clone(), ..(*filter).clone() });
                                })
                            };
                            html! {
                                <button class={classes!("category-pill", active.then_some("active"))} {onclick}>
                                    {category}
                                </button>
                            }
                        }) }
                    </div>
                </div>

                if listing.is_empty() {
                    <div class="blog-empty">
                        <h3>{"No articles found"}</h3>
                        <p>{"Try a different search term or category."}</p>
                        <button class="secondary-button" onclick={on_reset}>{"Clear filters"}</button>
                    </div>
                } else {
                    <>
                        if let Some(featured) = listing.featured {
                            <PostCard post={featured.clone()} featured={true} />
                        }
                        <div class="blog-grid">
                            { for listing.grid.iter().map(|post| html! {
                                <PostCard key={post.id} post={(*post).clone()} />
                            }) }
                        </div>
                    </>
                }
            </section>
            <style>
                {r#"
                .blog-list-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .blog-list-hero {
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                }
                .blog-list-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .blog-list-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 600px;
                    margin: 0 auto;
                }
                .blog-list-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .blog-controls {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .blog-search {
                    padding: 0.9rem 1.2rem;
                    border-radius: 10px;
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    background: rgba(26, 26, 26, 0.85);
                    color: #fff;
                    font-size: 1rem;
                }
                .category-pills {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .category-pill {
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(30, 144, 255, 0.3);
                    background: transparent;
                    color: #ccc;
                    cursor: pointer;
                }
                .category-pill.active {
                    background: #1E90FF;
                    border-color: #1E90FF;
                    color: #fff;
                }
                .blog-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .blog-post-preview {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }
                .blog-post-preview.featured {
                    margin-bottom: 2rem;
                }
                .blog-post-preview.featured h2 {
                    font-size: 2.2rem;
                }
                .blog-post-preview:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                    transform: translateY(-5px);
                }
                .blog-post-preview a {
                    text-decoration: none;
                    color: inherit;
                    display: block;
                }
                .blog-preview-image {
                    width: 100%;
                    height: auto;
                    display: block;
                }
                .blog-preview-body {
                    padding: 1.5rem;
                }
                .blog-category {
                    color: #7EB2FF;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .blog-post-preview h2 {
                    font-size: 1.5rem;
                    margin: 0.5rem 0;
                }
                .blog-post-preview p {
                    color: #999;
                }
                .blog-date {
                    color: #666;
                    font-size: 0.9rem;
                }
                .blog-empty {
                    text-align: center;
                    padding: 4rem 1rem;
                    color: #999;
                }
                @media (max-width: 768px) {
                    .blog-list-hero h1 {
                        font-size: 2.5rem;
                    }
                    .blog-list-section {
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
