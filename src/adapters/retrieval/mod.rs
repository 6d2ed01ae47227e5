//! Knowledge retrieval adapters.

mod chroma;

pub use chroma::{ChromaConfig, ChromaKnowledgeSearch};
