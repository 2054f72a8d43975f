//! Core AQUARIUS addressing types.

mod area;
mod endpoint;
mod target;

pub use area::ApiArea;
pub use endpoint::create_endpoint;
pub use target::Target;
