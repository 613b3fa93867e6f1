pub mod api;
pub mod cli;
pub mod domain;
pub mod infra;
mod run;
#[cfg(test)]
mod tests;
pub mod util;

pub use self::run::{run, start};
