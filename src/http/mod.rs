//! HTTP protocol layer module
//!
//! Protocol-level building blocks shared by the file-serving handler:
//! content-type lookup, conditional requests, byte ranges, and response
//! builders.

pub mod cond;
pub mod mime;
pub mod range;
pub mod response;

pub use range::{ByteRange, RangeOutcome};
pub use response::{method_not_allowed, not_found, not_modified, range_not_satisfiable};
