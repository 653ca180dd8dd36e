/// Configuration loading.
pub mod config;

/// Hook notification events.
pub mod event;

/// Symbolic key identities, decoupled from raw virtual-key codes.
pub mod key;

/// File-based logger with size-based rotation.
pub mod log;

/// Process-entry trait and the shared result type.
pub mod process;

pub use event::HookEvent;
pub use key::Key;
pub use process::{ProcessEntry, ShroudResult};
