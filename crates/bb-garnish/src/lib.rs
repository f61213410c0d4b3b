pub mod burgers;
pub mod client;
pub mod config;
pub mod constants;
pub mod dump;
pub mod error;
pub mod hours;
pub mod open;
pub mod records;
pub mod relations;
pub mod restaurants;
pub mod search;
pub mod store;

#[cfg(test)]
mod testing;

pub use client::Client;
pub use store::Store;
