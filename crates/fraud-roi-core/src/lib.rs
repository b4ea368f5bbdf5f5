pub mod error;
pub mod types;

#[cfg(feature = "roi")]
pub mod roi;

#[cfg(feature = "positioning")]
pub mod positioning;

#[cfg(feature = "content")]
pub mod content;

pub use error::FraudRoiError;
pub use types::*;

/// Standard result type for all fraud-roi operations
pub type FraudRoiResult<T> = Result<T, FraudRoiError>;
