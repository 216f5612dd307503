use kaycore_common::BlogPost;

pub const ALL_CATEGORIES: &str = "All";

/// Search box and category pill state of the blog listing.
#[derive(Clone, Debug, PartialEq)]
pub struct BlogFilter {
    pub query: String,
    pub category: String,
}

impl Default for BlogFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

/// What the listing renders: an optional hero card and the grid below it.
#[derive(Debug, PartialEq)]
pub struct BlogListing<'a> {
    pub featured: Option<&'a BlogPost>,
    pub grid: Vec<&'a BlogPost>,
}

impl BlogListing<'_> {
    pub fn is_empty(&self) -> bool {
        self.featured.is_none() && self.grid.is_empty()
    }

    pub fn len(&self) -> usize {
        self.grid.len() + usize::from(self.featured.is_some())
    }
}

impl BlogFilter {
    fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    fn all_categories(&self) -> bool {
        self.category == ALL_CATEGORIES
    }

    /// True when a search or a category narrows the list.
    pub fn is_active(&self) -> bool {
        self.has_query() || !self.all_categories()
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        let category_ok = self.all_categories() || post.category == self.category;
        if !category_ok {
            return false;
        }
        if !self.has_query() {
            return true;
        }
        let needle = self.query.to_lowercase();
        post.title.to_lowercase().contains(&needle) || post.excerpt.to_lowercase().contains(&needle)
    }

    pub fn apply<'a>(&self, posts: &'a [BlogPost]) -> BlogListing<'a> {
        let mut matching: Vec<&BlogPost> = posts.iter().filter(|p| self.matches(p)).collect();

        if self.is_active() || matching.is_empty() {
            return BlogListing { featured: None, grid: matching };
        }

        let featured = matching.remove(0);
        BlogListing { featured: Some(featured), grid: matching }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// "All" followed by each distinct category in first-appearance order.
pub fn categories(posts: &[BlogPost]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for post in posts {
        if !out.iter().any(|c| c == &post.category) {
            out.push(post.category.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn post(id: u32, title: &str, excerpt: &str, category: &str) -> BlogPost {
        BlogPost {
            id,
            title: title.to_string(),
            slug: format!("post-{id}"),
            excerpt: excerpt.to_string(),
            date: "2025-01-01".to_string(),
            author: "Kaycore Team".to_string(),
            category: category.to_string(),
            read_time: "4 min read".to_string(),
            image: String::new(),
            content: None,
        }
    }

    fn two_posts() -> Vec<BlogPost> {
        vec![
            post(1, "Cloud Trends", "Where hosting is headed", "Cloud Technology"),
            post(2, "Zero Trust Guide", "Never trust, always verify", "Cybersecurity"),
        ]
    }

    fn titles(listing: &BlogListing<'_>) -> Vec<String> {
        listing.grid.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn search_narrows_and_drops_featured() {
        let posts = two_posts();
        let filter = BlogFilter { query: "zero".into(), ..Default::default() };
        let listing = filter.apply(&posts);
        assert!(listing.featured.is_none());
        assert_eq!(titles(&listing), vec!["Zero Trust Guide"]);
    }

    #[test]
    fn unfiltered_listing_features_first_post() {
        let posts = two_posts();
        let listing = BlogFilter::default().apply(&posts);
        assert_eq!(listing.featured.map(|p| p.id), Some(1));
        assert_eq!(titles(&listing), vec!["Zero Trust Guide"]);
        assert_eq!(listing.len(), posts.len());
    }

    #[test]
    fn category_filter_puts_every_match_in_grid() {
        let posts = two_posts();
        let filter = BlogFilter { category: "Cloud Technology".into(), ..Default::default() };
        let listing = filter.apply(&posts);
        assert!(listing.featured.is_none());
        assert_eq!(titles(&listing), vec!["Cloud Trends"]);
    }

    #[test]
    fn excerpt_matches_case_insensitively() {
        let posts = two_posts();
        let filter = BlogFilter { query: "ALWAYS VERIFY".into(), ..Default::default() };
        assert_eq!(titles(&filter.apply(&posts)), vec!["Zero Trust Guide"]);
    }

    #[test]
    fn whitespace_query_counts_as_empty() {
        let posts = two_posts();
        let filter = BlogFilter { query: "   ".into(), ..Default::default() };
        assert!(!filter.is_active());
        assert!(filter.apply(&posts).featured.is_some());
    }

    #[test]
    fn no_match_yields_empty_listing_and_reset_restores_everything() {
        let posts = two_posts();
        let mut filter = BlogFilter {
            query: "xyz123notfound".into(),
            category: "Cybersecurity".into(),
        };
        assert!(filter.apply(&posts).is_empty());

        filter.reset();
        assert_eq!(filter.category, ALL_CATEGORIES);
        assert!(filter.query.is_empty());
        let listing = filter.apply(&posts);
        assert_eq!(listing.len(), posts.len());
        assert!(listing.featured.is_some());
    }

    #[test]
    fn empty_post_list_has_no_featured() {
        let listing = BlogFilter::default().apply(&[]);
        assert!(listing.is_empty());
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let posts = vec![
            post(1, "a", "", "Cybersecurity"),
            post(2, "b", "", "Cloud Technology"),
            post(3, "c", "", "Cybersecurity"),
        ];
        assert_eq!(categories(&posts), vec!["All", "Cybersecurity", "Cloud Technology"]);
    }

    const WORDS: &[&str] = &["cloud", "Zero", "trust", "AI", "data", "Mesh", "edge", "ops"];
    const CATEGORIES: &[&str] = &["Cloud Technology", "Cybersecurity", "AI & Machine Learning"];

    fn random_text(rng: &mut StdRng) -> String {
        let n = rng.gen_range(0..4);
        (0..n)
            .map(|_| *WORDS.choose(&mut *rng).unwrap())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn randomized_listing_matches_predicate() {
        let mut rng = StdRng::seed_from_u64(0x6b61_7963);

        for round in 0..500 {
            let count = rng.gen_range(0..12);
            let posts: Vec<BlogPost> = (0..count)
                .map(|i| {
                    let title = random_text(&mut rng);
                    let excerpt = random_text(&mut rng);
                    let category = *CATEGORIES.choose(&mut rng).unwrap();
                    post(i, &title, &excerpt, category)
                })
                .collect();

            let query = if rng.gen_bool(0.3) {
                String::new()
            } else {
                let word = *WORDS.choose(&mut rng).unwrap();
                let cut = rng.gen_range(1..=word.len());
                if rng.gen_bool(0.5) { word[..cut].to_uppercase() } else { word[..cut].to_string() }
            };
            let category = if rng.gen_bool(0.4) {
                ALL_CATEGORIES.to_string()
            } else {
                CATEGORIES.choose(&mut rng).unwrap().to_string()
            };
            let filter = BlogFilter { query: query.clone(), category: category.clone() };

            let expected: Vec<u32> = posts
                .iter()
                .filter(|p| {
                    (category == ALL_CATEGORIES || p.category == category)
                        && (query.is_empty()
                            || p.title.to_lowercase().contains(&query.to_lowercase())
                            || p.excerpt.to_lowercase().contains(&query.to_lowercase()))
                })
                .map(|p| p.id)
                .collect();

            let listing = filter.apply(&posts);
            let mut shown: Vec<u32> = listing.featured.iter().map(|p| p.id).collect();
            shown.extend(listing.grid.iter().map(|p| p.id));
            assert_eq!(shown, expected, "round {round}: {filter:?}");

            let should_feature =
                query.is_empty() && category == ALL_CATEGORIES && !expected.is_empty();
            assert_eq!(listing.featured.is_some(), should_feature, "round {round}");
        }
    }
}
