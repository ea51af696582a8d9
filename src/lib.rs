//! Campus Server - a small static site responder
//!
//! Serves a fixed set of pages and images, embeds looked-up images as
//! `data:` URIs, and answers everything else with a 404 page naming the
//! client.

pub mod assets;
pub mod config;
pub mod http;
pub mod routes;
pub mod server;
