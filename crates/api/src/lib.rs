//! HTTP API for the MK Events site: public pages, the gated admin panel,
//! exports and health/metrics endpoints.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
