//! Application layer: use-case handlers between the HTTP adapters and
//! the domain.

pub mod handlers;
