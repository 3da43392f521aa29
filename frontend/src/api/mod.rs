pub mod client;
mod employees;
mod ratings;
mod tasks;
pub mod types;

pub use client::*;
pub use types::*;
