//! Query system: structured filters over stored records and the
//! natural-language translator that produces them.

pub mod filter;
pub mod translate;

pub use filter::{FilterParams, FilterSpec};
pub use translate::translate;
