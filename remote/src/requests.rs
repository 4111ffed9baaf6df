use log::debug;
use url::Url;

use crate::{auth::authorization_header, error::RemoteAccessError};

/// HTTP plumbing for the content API: base URL joining plus the
/// authenticated request builders the operation modules share. Constructed
/// once at startup and handed around explicitly.
#[derive(Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: Url,
    api_token: String,
}

impl RemoteClient {
    pub fn new(base_url: Url, api_token: String) -> Result<Self, RemoteAccessError> {
        let http = reqwest::ClientBuilder::new().use_rustls_tls().build()?;

        Ok(Self {
            http,
            base_url,
            api_token,
        })
    }

    pub fn generate_url(
        &self,
        path_components: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Url, RemoteAccessError> {
        let mut url = self.base_url.join(&path_components.concat())?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    pub(crate) fn get(&self, url: Url) -> reqwest::RequestBuilder {
        debug!("GET {url}");
        self.http
            .get(url)
            .header("Authorization", authorization_header(&self.api_token))
    }

    pub(crate) fn post(&self, url: Url) -> reqwest::RequestBuilder {
        debug!("POST {url}");
        self.http
            .post(url)
            .header("Authorization", authorization_header(&self.api_token))
    }

    pub(crate) fn put(&self, url: Url) -> reqwest::RequestBuilder {
        debug!("PUT {url}");
        self.http
            .put(url)
            .header("Authorization", authorization_header(&self.api_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> RemoteClient {
        let base_url = Url::parse("https://content.example.com").expect("base url should parse");
        RemoteClient::new(base_url, "token".to_string()).expect("client should build")
    }

    #[test]
    fn generates_collection_url_with_query() {
        let client = test_client();
        let url = client
            .generate_url(&["/api/users"], &[("populate", "*")])
            .expect("url should generate");
        assert_eq!(url.as_str(), "https://content.example.com/api/users?populate=*");
    }

    #[test]
    fn concatenates_path_components() {
        let client = test_client();
        let url = client
            .generate_url(&["/api/users", "/", "12"], &[])
            .expect("url should generate");
        assert_eq!(url.as_str(), "https://content.example.com/api/users/12");
    }
}
