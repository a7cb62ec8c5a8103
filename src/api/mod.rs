//! REST API Wrappers
//!
//! Thin bindings to the remote JSON API, organized by resource.

mod recipes;
mod posts;
mod comments;
mod todos;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config::config;
use crate::error::ApiError;

// Re-export all public items
pub use recipes::*;
pub use posts::*;
pub use comments::*;
pub use todos::*;

/// Error body the API sends with non-2xx responses
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// `fetch`-backed JSON client rooted at a base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::Get, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let json = serde_json::to_string(body)?;
        self.send(Method::Post, path, Some(json)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let json = serde_json::to_string(body)?;
        self.send(Method::Put, path, Some(json)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("[api] {} {}", method.as_str(), url);

        let init = RequestInit::new();
        init.set_method(method.as_str());
        if let Some(body) = &body {
            init.set_body(&JsValue::from_str(body));
        }
        let request = Request::new_with_str_and_init(&url, &init).map_err(ApiError::from_js)?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(ApiError::from_js)?;
        }

        let window = web_sys::window().ok_or(ApiError::NoWindow)?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(ApiError::from_js)?;
        let response: Response = response.dyn_into().map_err(ApiError::from_js)?;

        let json = JsFuture::from(response.json().map_err(ApiError::from_js)?).await;
        if !response.ok() {
            let message = json
                .ok()
                .and_then(|value| serde_wasm_bindgen::from_value::<ErrorBody>(value).ok())
                .and_then(|body| body.message);
            log::warn!("[api] {} {} -> {}", method.as_str(), url, response.status());
            return Err(ApiError::Status { status: response.status(), message });
        }
        let json = json.map_err(ApiError::from_js)?;
        Ok(serde_wasm_bindgen::from_value(json)?)
    }
}

/// Client for the configured API
pub fn client() -> HttpClient {
    HttpClient::new(config().api_base_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_single_slash() {
        let client = HttpClient::new("https://dummyjson.com/");
        assert_eq!(client.url("/recipes/add"), "https://dummyjson.com/recipes/add");
        assert_eq!(client.url("todos"), "https://dummyjson.com/todos");
    }
}
