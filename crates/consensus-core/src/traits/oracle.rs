/// Decides whether two extracted answers denote the same value.
///
/// Implementations must treat `None` and empty strings as never equivalent,
/// not even to themselves, and must not propagate predicate failures.
pub trait EquivalenceOracle: Send + Sync {
    fn equivalent(&self, a: Option<&str>, b: Option<&str>) -> bool;
}
