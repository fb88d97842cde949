//! Stateless request builder and response parser for the asset API.
//!
//! `AssetClient` holds only a `base_url`. Each operation has a `build_*`
//! method producing an `HttpRequest` and a `parse_*` method consuming an
//! `HttpResponse`; the caller performs the round-trip in between.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AddNote, Asset, CreateAsset, RemoveAsset};

const ASSETS_PATH: &str = "/api/assets";

/// Synchronous, stateless client for the asset API.
#[derive(Debug, Clone)]
pub struct AssetClient {
    base_url: String,
}

impl AssetClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self) -> String {
        format!("{}{ASSETS_PATH}", self.base_url)
    }

    fn json_request<T: Serialize>(&self, method: HttpMethod, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: self.url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_list_assets(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_asset(&self, input: &CreateAsset) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, input)
    }

    pub fn build_add_note(&self, input: &AddNote) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, input)
    }

    pub fn build_remove_asset(&self, input: &RemoveAsset) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Delete, input)
    }

    pub fn parse_list_assets(&self, response: HttpResponse) -> Result<Vec<Asset>, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_create_asset(&self, response: HttpResponse) -> Result<Asset, ApiError> {
        check_status(&response, 201)?;
        decode(&response)
    }

    pub fn parse_add_note(&self, response: HttpResponse) -> Result<Asset, ApiError> {
        check_status(&response, 202)?;
        decode(&response)
    }

    pub fn parse_remove_asset(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

fn decode<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        s if s == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => Err(ApiError::BadRequest {
            body: response.body.clone(),
        }),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
