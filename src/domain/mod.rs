//! Domain types for the version lifecycle

pub mod prerelease;
pub mod version;

pub use prerelease::{PreRelease, Stage};
pub use version::Version;
