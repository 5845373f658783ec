/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the walk core talks to the
/// inspection utility, the output renderer and the diagnostics sink
/// through these traits.
pub mod outbound;
