/// Process adapters running external inspection utilities
mod otool_prober;

pub use otool_prober::{OtoolProber, DEFAULT_TOOL};
