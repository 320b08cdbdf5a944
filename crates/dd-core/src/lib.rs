//! dd-core: shared foundation for datadash.
//!
//! Contains:
//! - numeric (lenient string-to-number coercion used by every chart)
//! - timestamp (ISO-8601 stamps written into submitted records)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod timestamp;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use timestamp::*;
