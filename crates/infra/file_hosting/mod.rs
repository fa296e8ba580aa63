pub mod gofile;
