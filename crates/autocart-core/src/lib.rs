pub mod config;
pub mod logging;

pub mod cart;
pub mod checkout;
pub mod error;
pub mod format;
pub mod storage;

pub use error::CartError;
