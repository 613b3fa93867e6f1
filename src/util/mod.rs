pub mod conv;
pub mod serialize;
