/// Data Transfer Objects for application layer
///
/// DTOs carry the request built by the CLI into the use case and the
/// summary back out, keeping the walk core free of CLI concerns.
mod output_format;
mod walk_request;
mod walk_summary;

pub use output_format::OutputFormat;
pub use walk_request::WalkRequest;
pub use walk_summary::WalkSummary;
