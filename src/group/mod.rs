//! Grouping stage: canonical letter keys and the letter-group map.

mod groups;
mod key;

pub use groups::{GroupEntry, GroupStats, WordGroups};
pub use key::{sorted_letters, sorted_unique};
