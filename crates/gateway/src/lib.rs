//! HTTP implementation of the project gateway.
//!
//! [`RestGateway`] speaks JSON to the hosted database's REST endpoint
//! and maps transport and HTTP failures onto the closed
//! [`BoardError`](atelier_core::BoardError) kinds. Connection settings
//! come from the environment via [`GatewayConfig`].

pub mod config;
pub mod rest;

pub use config::GatewayConfig;
pub use rest::RestGateway;
