//! Hotel Concierge - Hotel booking backend and conversational concierge
//!
//! This crate serves the hotel/room/booking HTTP API and drives guests
//! through a conversational booking flow with an optional retrieval-backed
//! AI assistant.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
