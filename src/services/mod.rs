// Service exports
pub mod store;

pub use store::{ProfileStore, StoreError};
