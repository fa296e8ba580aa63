pub mod file_hosting;
pub mod text_generation;
