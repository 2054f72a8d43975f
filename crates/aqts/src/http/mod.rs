//! HTTP layer.
//!
//! This module provides the per-area session used for all AQUARIUS calls.

mod session;

pub use session::{ApiSession, response_or_error};
pub(crate) use session::token_header_value;
