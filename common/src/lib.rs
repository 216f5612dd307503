pub mod contact;
pub mod content;

pub use contact::{ContactErrors, ContactField, ContactRequest};
pub use content::{
    BlogPost, CaseStudy, ContentBlock, Industry, JobOpportunity, Partner, Service, TeamMember,
};
