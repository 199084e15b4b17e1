/// Crate-wide Result alias backed by anyhow::Error.
/// Typed errors (e.g. `LookupError`) are used where callers branch on the failure kind.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
