/// Domain layer - manifest model and the name/version inference engine
///
/// Everything in this layer is pure: no file system, no console, no clock
/// except in `SbomGenerator`, which stamps metadata.
pub mod domain;
pub mod policies;
pub mod services;
