//! Migration planning from legacy camelCase names to canonical form
//!
//! Legacy names are assumed to put the operation before the domain
//! (`createObject` -> operation `create`, domain `object`). The snake
//! form is split at its first underscore; anything after that belongs
//! to the domain. For names of more than two words this is a fixed,
//! tested heuristic: `createGeometryNodeGroup` yields operation
//! `create` and domain `geometry_node_group`.

use std::collections::{BTreeSet, HashMap, HashSet};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::DOMAIN_DELIMITER;

use super::case::to_snake;
use super::field_name::{create_field_name, FieldNameRecord};

/// How a field name relates to the canonical convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Canonicalization {
    /// The name already follows `domain.operation`, or is its own
    /// canonical form.
    AlreadyCanonical,
    /// The canonical spelling the field should migrate to.
    Renamed(String),
    /// A single-word legacy name with no operation/domain boundary;
    /// left untouched and flagged for review.
    Unsplittable,
}

/// Compute the canonical form of a field name.
pub fn canonicalize_field_name(field_name: &str) -> Canonicalization {
    if field_name.contains(DOMAIN_DELIMITER) {
        return Canonicalization::AlreadyCanonical;
    }

    let snake = to_snake(field_name);
    let Some((operation, domain)) = snake.split_once('_') else {
        return Canonicalization::Unsplittable;
    };

    let domain = singularize(domain);
    let canonical = create_field_name(&domain, operation);
    if canonical == field_name {
        Canonicalization::AlreadyCanonical
    } else {
        Canonicalization::Renamed(canonical)
    }
}

/// Canonicalize a field name, falling back to the input when it cannot
/// be split.
pub fn standardize_field_name(field_name: &str) -> String {
    match canonicalize_field_name(field_name) {
        Canonicalization::Renamed(canonical) => canonical,
        Canonicalization::AlreadyCanonical => field_name.to_string(),
        Canonicalization::Unsplittable => {
            warn!(
                "Field name '{}' cannot be converted to domain.operation form; keeping it as is",
                field_name
            );
            field_name.to_string()
        }
    }
}

fn singularize(domain: &str) -> String {
    if domain.ends_with('s') && !domain.ends_with("ss") {
        domain[..domain.len() - 1].to_string()
    } else {
        domain.to_string()
    }
}

/// Descriptor that keeps a legacy field callable while steering
/// consumers to its canonical replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecatedFieldDescriptor {
    pub deprecated: bool,
    pub deprecation_reason: String,
    pub forwards_to: String,
}

/// Rename map for fields whose canonical form differs from their
/// current name, plus the names that could not be classified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationPlan {
    /// old name -> canonical name
    pub renames: HashMap<String, String>,
    /// legacy names with no splittable operation/domain boundary
    pub skipped: Vec<String>,
}

impl MigrationPlan {
    pub fn is_empty(&self) -> bool {
        self.renames.is_empty() && self.skipped.is_empty()
    }

    /// Deprecation descriptors for every planned rename, keyed by the
    /// legacy name.
    pub fn deprecated_fields(&self) -> HashMap<String, DeprecatedFieldDescriptor> {
        self.renames
            .iter()
            .map(|(old_name, new_name)| {
                (
                    old_name.clone(),
                    DeprecatedFieldDescriptor {
                        deprecated: true,
                        deprecation_reason: format!(
                            "This field is deprecated. Use `{}` instead.",
                            new_name
                        ),
                        forwards_to: new_name.clone(),
                    },
                )
            })
            .collect()
    }
}

/// Build a migration plan for the given field names.
///
/// Canonical names produce no entry. Unsplittable legacy names are
/// collected in `skipped` and logged, never silently dropped.
pub fn generate_migration_plan<'a, I>(field_names: I) -> MigrationPlan
where
    I: IntoIterator<Item = &'a str>,
{
    let mut plan = MigrationPlan::default();
    for field_name in field_names {
        match canonicalize_field_name(field_name) {
            Canonicalization::Renamed(canonical) => {
                plan.renames.insert(field_name.to_string(), canonical);
            }
            Canonicalization::AlreadyCanonical => {}
            Canonicalization::Unsplittable => {
                warn!(
                    "Field name '{}' cannot be converted to domain.operation form; skipping migration",
                    field_name
                );
                plan.skipped.push(field_name.to_string());
            }
        }
    }
    plan.skipped.sort();
    plan
}

/// Report mutation field pairs whose operation tokens are substrings of
/// each other, in either direction.
///
/// This heuristic deliberately over-approximates; the pairs are meant
/// for human review, not automatic resolution.
pub fn find_potential_duplicates<'a, I>(mutation_names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let names: Vec<&str> = mutation_names.into_iter().collect();
    let mut pairs = BTreeSet::new();

    for (i, name) in names.iter().enumerate() {
        let operation = trailing_token(name);
        for other in names.iter().skip(i + 1) {
            let other_operation = trailing_token(other);
            if operation.contains(other_operation) || other_operation.contains(operation) {
                let (first, second) = if name <= other {
                    (name, other)
                } else {
                    (other, name)
                };
                pairs.insert(format!("similar operations: {} / {}", first, second));
            }
        }
    }

    pairs.into_iter().collect()
}

/// Find domains whose exposed fields mix canonical and legacy
/// spellings, mapped to the legacy names involved.
pub fn find_field_name_inconsistencies<'a, I>(field_names: I) -> HashMap<String, Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut canonical_domains = HashSet::new();
    let mut legacy_by_domain: HashMap<String, Vec<String>> = HashMap::new();

    for field_name in field_names {
        let record = FieldNameRecord::parse(field_name);
        if record.is_canonical() {
            canonical_domains.insert(record.domain);
        } else if let Canonicalization::Renamed(canonical) = canonicalize_field_name(field_name) {
            let domain = FieldNameRecord::parse(&canonical).domain;
            legacy_by_domain
                .entry(domain)
                .or_default()
                .push(field_name.to_string());
        }
    }

    legacy_by_domain.retain(|domain, _| canonical_domains.contains(domain));
    for legacy_names in legacy_by_domain.values_mut() {
        legacy_names.sort();
    }
    legacy_by_domain
}

fn trailing_token(field_name: &str) -> &str {
    field_name
        .rsplit(DOMAIN_DELIMITER)
        .next()
        .unwrap_or(field_name)
}
