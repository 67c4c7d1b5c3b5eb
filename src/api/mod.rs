//! HTTP interface
//!
//! A thin warp shell over [`crate::history::IntakeService`]: it parses
//! request bodies, calls the service and serializes what comes back.

pub mod rest;

pub use rest::RestApi;
