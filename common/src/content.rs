use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub slug: String,
    pub image: String,
}

/// One block of a long-form post body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentBlock {
    Paragraph { text: String },
    Heading { text: String },
    List { items: Vec<String> },
    Quote {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attribution: Option<String>,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub date: String,
    pub author: String,
    pub category: String,
    pub read_time: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentBlock>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: u32,
    pub client: String,
    pub industry: String,
    pub title: String,
    pub summary: String,
    pub outcomes: Vec<String>,
    pub slug: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobOpportunity {
    pub id: u32,
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub requirements: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Industry {
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub name: String,
    pub logo: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_post_reads_camel_case_feed() {
        let raw = r#"[{
            "id": 7,
            "title": "Edge AI",
            "slug": "edge-ai",
            "excerpt": "Inference at the edge",
            "date": "2025-03-02",
            "author": "Kaycore Team",
            "category": "AI & Machine Learning",
            "readTime": "6 min read",
            "image": "/assets/blog/edge.webp",
            "content": [
                {"type": "heading", "text": "Why now"},
                {"type": "list", "items": ["latency", "privacy"]},
                {"type": "quote", "text": "Ship it."}
            ]
        }]"#;

        let posts: Vec<BlogPost> = serde_json::from_str(raw).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].read_time, "6 min read");
        let blocks = posts[0].content.as_ref().unwrap();
        assert_eq!(blocks[0], ContentBlock::Heading { text: "Why now".into() });
        assert_eq!(
            blocks[2],
            ContentBlock::Quote { text: "Ship it.".into(), attribution: None }
        );
    }

    #[test]
    fn content_is_optional() {
        let raw = r#"{"id":1,"title":"t","slug":"t","excerpt":"e","date":"d",
            "author":"a","category":"c","readTime":"1 min read","image":"i"}"#;
        let post: BlogPost = serde_json::from_str(raw).unwrap();
        assert!(post.content.is_none());
    }
}
