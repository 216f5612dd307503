
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // kaycore-backend running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin, the backend serves the built site
}

pub const CONTACT_EMAIL: &str = "hello@kaycore.com";
