//! CLI client library for the GridRoute server.

pub mod client;

pub use client::GridRouteClient;
