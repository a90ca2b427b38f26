pub mod initialize;
pub mod memory;
pub mod migrate;
pub mod pool;
pub mod session;
pub mod store;

pub use memory::MemoryStore;
pub use pool::DbPool;
pub use session::{FileSession, MemorySession, SessionSlot};
pub use store::{Collection, Store};
