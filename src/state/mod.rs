//! State management module
//!
//! This module handles client storage, the persisted session record and the
//! per-runtime application context

pub mod context;
pub mod session;
pub mod storage;

// Re-export commonly used state components
pub use context::AppContext;
pub use session::{encode_session, decode_session};
pub use storage::{SessionStore, MemoryStore, FileStore, RedisStore, create_store};
