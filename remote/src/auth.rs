//! The content API authenticates every request with a static bearer token.

pub fn authorization_header(api_token: &str) -> String {
    format!("Bearer {api_token}")
}
