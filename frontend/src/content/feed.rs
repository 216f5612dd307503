use gloo_net::http::Request;
use kaycore_common::BlogPost;
use log::{info, warn};
use yew::prelude::*;

use crate::config;
use crate::content::blog_posts::blog_posts;

/// Remote posts win only when the source actually returned some.
pub fn choose_posts(fetched: Option<Vec<BlogPost>>) -> Vec<BlogPost> {
    match fetched {
        Some(posts) if !posts.is_empty() => posts,
        _ => blog_posts(),
    }
}

async fn fetch_remote_posts() -> Option<Vec<BlogPost>> {
    let response = match Request::get(&format!("{}/api/posts", config::get_backend_url()))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!("Post feed unreachable, using bundled posts: {}", e);
            return None;
        }
    };

    if !response.ok() {
        info!("Post feed answered {}, using bundled posts", response.status());
        return None;
    }

    match response.json::<Vec<BlogPost>>().await {
        Ok(posts) => Some(posts),
        Err(e) => {
            warn!("Post feed returned malformed JSON: {}", e);
            None
        }
    }
}

/// Bundled posts immediately, replaced by the external feed if it answers.
#[hook]
pub fn use_blog_posts() -> Vec<BlogPost> {
    let posts = use_state(blog_posts);

    {
        let posts = posts.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    let fetched = fetch_remote_posts().await;
                    if fetched.as_ref().is_some_and(|p| !p.is_empty()) {
                        posts.set(choose_posts(fetched));
                    }
                });
                || ()
            },
            (),
        );
    }

    (*posts).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_bundled_posts() {
        assert_eq!(choose_posts(None), blog_posts());
        assert_eq!(choose_posts(Some(Vec::new())), blog_posts());
    }

    #[test]
    fn remote_posts_override_bundled() {
        let mut remote = blog_posts();
        remote.truncate(1);
        remote[0].title = "From the CMS".to_string();
        assert_eq!(choose_posts(Some(remote.clone())), remote);
    }
}
