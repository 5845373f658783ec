/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports: the
/// subprocess prober, the output renderers and the stderr reporter.
pub mod outbound;
