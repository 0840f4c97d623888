//! JSON helpers used by the response assertions.

mod compare;
pub mod path;
mod structure;

pub use compare::{
    canonical_string, contains_fragment, fragment_needles, is_subset, loose_eq, sort_recursive,
};
pub use structure::{EACH_KEY, JsonStructure, StructureNode};
