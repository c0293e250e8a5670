//! Employee Registry
//!
//! This crate stores employee records for a small organization and turns
//! snapshots of those records into headcount and salary reports, served over
//! a JSON HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod reporting;
pub mod store;
