pub mod config;
pub mod table;
pub mod time;
