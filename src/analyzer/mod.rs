pub mod tag_resolver;
pub mod version_filter;

pub use tag_resolver::{TagResolver, DEFAULT_LATEST_TAG};
pub use version_filter::{FilteredVersions, VersionFilter};
