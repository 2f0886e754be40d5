/// Audit domain layer
///
/// Pure business logic: domain models, the severity gate and the
/// correlation of findings with SBOM components. No I/O happens here.
pub mod domain;
pub mod policies;
pub mod services;
