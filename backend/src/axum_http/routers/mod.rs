pub mod frontend;
pub mod global_links;
