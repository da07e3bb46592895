/// Common constants used across the scenefold schema tooling.
///
/// The delimiter separates the domain and operation parts of a
/// canonical field name, e.g. `mesh.create`.
pub const DOMAIN_DELIMITER: char = '.';

/// Prefix marking internal fields and types that naming checks skip.
pub const INTERNAL_PREFIX: char = '_';
