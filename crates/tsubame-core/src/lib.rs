//! Local persistence for catalog records.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::RecordStore;
