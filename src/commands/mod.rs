pub mod config;
pub mod constants;
pub mod date;
pub mod number;
pub mod text;
pub mod validate;
