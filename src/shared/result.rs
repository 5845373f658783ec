/// Result alias used throughout the application and adapter layers.
/// Domain failures are `TotoolError` values wrapped in `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
