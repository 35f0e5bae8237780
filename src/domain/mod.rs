//! Domain logic - pure versioning rules independent of git operations

pub mod level;
pub mod scheme;
pub mod semantic;
pub mod single_number;
pub mod tag;

pub use level::Level;
pub use scheme::VersioningScheme;
pub use single_number::SingleNumberVersion;
pub use tag::Tag;
