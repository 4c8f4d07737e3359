//! HTTP transport abstraction
//!
//! The client only needs "GET this URL, give me the body and the headers".
//! Keeping that behind a trait lets tests serve canned responses.

use crate::{
    config::ClientConfig,
    constants::PRO_API_KEY_HEADER,
    error::ClientError,
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, StatusCode,
};

/// Body and headers of a successful (200 OK) response
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub body: Vec<u8>,
    pub headers: HeaderMap,
}

impl RawResponse {
    /// Body as UTF-8 text, lossy; used in error messages
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Trait for HTTP GET transports
///
/// Implementations return an error for transport failures and for any
/// status other than 200 OK.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET request for a fully-formed URL
    ///
    /// # Arguments
    /// * `url` - Absolute URL including the query string
    ///
    /// # Returns
    /// Response body and headers, or an error
    async fn get(&self, url: &str) -> Result<RawResponse, ClientError>;

    /// Returns the name of this transport
    fn transport_name(&self) -> &'static str;
}

/// Transport backed by `reqwest`
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport from the client configuration
    ///
    /// Timeout, user agent and the API key header are baked into the
    /// underlying client.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut default_headers = HeaderMap::new();
        if let Some(api_key) = &config.api_key {
            let mut value = HeaderValue::from_str(api_key)
                .map_err(|_| ClientError::invalid_params("API key is not a valid header value"))?;
            value.set_sensitive(true);
            default_headers.insert(HeaderName::from_static(PRO_API_KEY_HEADER), value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(default_headers)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, ClientError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();

        // Check for rate limiting
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ClientError::RateLimitExceeded);
        }

        if status != StatusCode::OK {
            return Err(ClientError::api(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(ClientError::Network)?;

        Ok(RawResponse {
            body: body.to_vec(),
            headers,
        })
    }

    fn transport_name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    enum Canned {
        Ok(RawResponse),
        RateLimited,
        Status(u16, String),
    }

    /// Mock transport for testing
    ///
    /// Responses are keyed by a URL fragment such as `/coins/list` or
    /// `page=2`; the longest fragment contained in the requested URL wins.
    pub struct MockTransport {
        responses: Arc<Mutex<HashMap<String, Canned>>>,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl Default for MockTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self {
                responses: Arc::new(Mutex::new(HashMap::new())),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn set_response(&self, fragment: &str, body: &str, headers: &[(&str, &str)]) {
            let mut map = HeaderMap::new();
            for (name, value) in headers {
                map.append(
                    HeaderName::from_bytes(name.as_bytes()).unwrap(),
                    HeaderValue::from_str(value).unwrap(),
                );
            }
            let response = RawResponse {
                body: body.as_bytes().to_vec(),
                headers: map,
            };
            self.responses
                .lock()
                .unwrap()
                .insert(fragment.to_string(), Canned::Ok(response));
        }

        pub fn set_rate_limited(&self, fragment: &str) {
            self.responses
                .lock()
                .unwrap()
                .insert(fragment.to_string(), Canned::RateLimited);
        }

        pub fn set_status(&self, fragment: &str, status: u16, body: &str) {
            self.responses
                .lock()
                .unwrap()
                .insert(fragment.to_string(), Canned::Status(status, body.to_string()));
        }

        /// URLs requested so far, in order
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn get(&self, url: &str) -> Result<RawResponse, ClientError> {
            self.requests.lock().unwrap().push(url.to_string());

            let responses = self.responses.lock().unwrap();
            let canned = responses
                .iter()
                .filter(|(fragment, _)| url.contains(fragment.as_str()))
                .max_by_key(|(fragment, _)| fragment.len())
                .map(|(_, canned)| canned);

            match canned {
                Some(Canned::Ok(response)) => Ok(response.clone()),
                Some(Canned::RateLimited) => Err(ClientError::RateLimitExceeded),
                Some(Canned::Status(status, body)) => Err(ClientError::api(*status, body.clone())),
                None => Err(ClientError::api(404, format!("no mock for {url}"))),
            }
        }

        fn transport_name(&self) -> &'static str {
            "mock"
        }
    }
}
