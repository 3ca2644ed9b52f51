pub mod branch;
pub mod record;

pub use branch::{BranchFilter, WalkMode};
pub use record::{composite_id, CommitRecord};
