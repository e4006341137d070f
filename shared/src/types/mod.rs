//! Type definitions shared by repositories and callers
//!
//! - `pagination` - Pagination for list operations

pub mod pagination;

pub use pagination::{PaginatedResponse, Pagination};
