/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod filter_settings;
mod output_type;
mod resolve_request;
mod tree_request;
mod tree_response;

pub use filter_settings::FilterSettings;
pub use output_type::{validate_encoding, OutputType};
pub use resolve_request::ResolveRequest;
pub use tree_request::TreeRequest;
pub use tree_response::TreeResponse;
