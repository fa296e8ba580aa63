pub mod global_link;
pub mod message_composer;
pub mod uploader;
