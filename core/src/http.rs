//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain owned data. `AssetClient` builds
//! `HttpRequest` values and parses `HttpResponse` values without touching
//! the network; the caller moves the bytes. Every asset operation targets
//! the same path, so `method` and `body` alone distinguish them, and
//! `DELETE` requests carry a JSON body like `POST` and `PUT`.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `AssetClient::build_*` methods.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `AssetClient::parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
