pub mod denylist;

// Re-export main types
pub use denylist::{load_denylist, parse_denylist, Denylist};
