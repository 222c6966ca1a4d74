//! Tool registry: the persisted, ordered name -> description mapping.

mod store;
mod types;

pub use store::RegistryStore;
pub use types::{Registry, ToolEntry};
