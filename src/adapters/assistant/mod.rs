//! Assistant bridge adapters.

mod gigachat;

pub use gigachat::{GigaChatBridge, GigaChatConfig};
