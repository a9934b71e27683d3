/// Minimum number of shared canonical trait pairs for a taxon to qualify as
/// a lookalike, unless the caller overrides it.
pub const DEFAULT_MIN_SHARED: usize = 2;

/// Number of lookalike candidates shown by default in the UI.
pub const DEFAULT_LOOKALIKE_LIMIT: usize = 12;
