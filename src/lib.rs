//! Greeter API - a minimal demonstration HTTP service
//!
//! This crate exposes three plain-text endpoints:
//! - `GET /` — configured greeting plus the caller's IP address
//! - `GET /db` — configured database display fields
//! - `GET /healthz` — liveness string with a dynamically resolved suffix

pub mod config;
pub mod ip;
pub mod routes;
pub mod services;
pub mod state;
