/// Version ordering adapters
mod maven_version_scheme;

pub use maven_version_scheme::MavenVersionScheme;
