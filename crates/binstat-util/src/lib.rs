//! binstat-util - Array helpers used alongside binned statistics
//!
//! - **Scales**: evenly spaced points on linear, log and logit axes
//! - **ECDF**: step ECDFs and quantile curves of raw values
//! - **Lookup**: element-wise dictionary lookup keeping array shape
//! - **Hilbert**: square layout of a sequence along a Hilbert curve
//! - **Subnets**: IPv4/IPv6 network values and string coercion
//! - **Rounding**: integer ceil/floor to a multiple

pub mod ecdf;
pub mod error;
pub mod hilbert;
pub mod lookup;
pub mod rounding;
pub mod scale;
pub mod subnet;

pub use ecdf::*;
pub use error::*;
pub use hilbert::*;
pub use lookup::*;
pub use rounding::*;
pub use scale::*;
pub use subnet::*;
