//! Domain logic - pure versioning rules independent of git and the filesystem

pub mod branch;
pub mod prerelease;
pub mod record;
pub mod version;

pub use branch::{BranchContext, Channel};
pub use prerelease::{PreRelease, PreReleaseType};
pub use record::{Field, VersionRecord};
pub use version::Version;
