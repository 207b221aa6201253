//! Storage module for the API.
//!
//! Provides in-memory, SQLite and PostgreSQL diagram stores.

pub mod error;
pub mod traits;

// Storage backend implementations
pub mod memory;
pub mod postgres;
pub mod sqlite;

pub use error::StorageError;
pub use memory::MemoryDiagramStore;
pub use postgres::PostgresDiagramStore;
pub use sqlite::SqliteDiagramStore;
pub use traits::DiagramStore;
