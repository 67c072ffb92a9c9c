pub mod cache_line;
pub mod types;
