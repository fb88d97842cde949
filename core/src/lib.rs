//! Synchronous client core for the asset service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the HTTP round-trip, so the
//! core stays deterministic and testable.
//!
//! # Design
//! - `AssetClient` holds only `base_url`.
//! - Each operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response).
//! - Every operation targets the single `/api/assets` path; the method and
//!   JSON body select the action, so even `DELETE` carries a body.
//! - DTOs are defined independently from the server crate; the integration
//!   test catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::AssetClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{AddNote, Asset, CreateAsset, RemoveAsset};
