/// Dependency type tags with a built-in filtering policy
///
/// Dependency types are free-form; these are only the ones the default
/// policy registry knows about. Any other tag is passed through unfiltered.
pub const FILE_SHARE: &str = "FileShare";
pub const SOURCE_CONTROL: &str = "SourceControl";
pub const SOURCE_CONTROL_MAPPING: &str = "SourceControlMapping";
pub const BINARY_REPOSITORY: &str = "BinaryRepository";
pub const BUILD_RESULT: &str = "BuildResult";

/// Normalizes a dependency type tag for lookups
pub fn normalize(dependency_type: &str) -> String {
    dependency_type.trim().to_ascii_lowercase()
}
