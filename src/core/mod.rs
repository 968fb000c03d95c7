pub mod classify;
pub mod handler;

pub use crate::domain::model::{
    AddressResult, ApiAddress, ApiResponse, LookupOutcome, Notices, PostalCode,
};
pub use crate::domain::ports::{ConfigProvider, LookupPort, ProxyRelay, UiPort};
pub use crate::utils::error::Result;
