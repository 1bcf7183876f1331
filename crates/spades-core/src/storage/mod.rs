mod format;
mod kv;
mod save_states;

pub use format::*;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use save_states::SaveStateStore;
