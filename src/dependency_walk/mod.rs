/// Dependency walk core - domain types and pure services
///
/// Nothing in this module spawns processes or writes output directly;
/// both go through the ports in `crate::ports`.
pub mod domain;
pub mod services;
