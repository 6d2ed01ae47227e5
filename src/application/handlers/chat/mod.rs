//! Chat event handlers.

mod process_event;

pub use process_event::ProcessChatEventHandler;
