pub mod models;
pub mod storage;
pub mod checker;

// Re-export commonly used items
pub use models::{ActiveExceptions, Exception, ExceptionsFile};
pub use storage::load_exceptions;
