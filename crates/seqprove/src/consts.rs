/// Default upper bound on the connectives of a sequent accepted for search.
pub const CONNECTIVE_LIMIT: usize = 64;

/// Deepest parenthesis nesting the parser accepts.
pub const NESTING_LIMIT: usize = 256;
