//! Domain logic - pure rules independent of git and the CI environment

pub mod reference;
pub mod tag;
pub mod version;

pub use reference::TargetRef;
pub use tag::TagSet;
pub use version::{Version, VersionParser};
