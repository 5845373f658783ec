/// Shared kernel - error types, result alias and path helpers
///
/// Everything here is used by more than one layer and has no
/// dependency on ports or adapters.
pub mod error;
pub mod path;
pub mod result;

pub use result::Result;
