pub mod assistant;
pub mod error;
pub mod filter;
pub mod market;
pub mod model;
pub mod store;
