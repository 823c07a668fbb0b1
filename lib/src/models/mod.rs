pub mod value;

pub use value::{PrefValue, MAX_NESTING_DEPTH};
