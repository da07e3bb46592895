//! Resolver lookup capability
//!
//! The schema core never owns resolver functions; fields carry a
//! resolver identifier and the validator asks a `ResolverProvider`
//! whether a matching callable exists. Which provider backs an audit is
//! explicit caller configuration, including any fallback between a
//! primary and a secondary table.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Answers whether a named resolver exists in a designated module.
pub trait ResolverProvider {
    /// Name of the module the provider represents, used in findings.
    fn module_name(&self) -> &str;

    fn has_resolver(&self, name: &str) -> bool;
}

/// A concrete resolver provider: the set of callable names one module
/// exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverTable {
    module_name: String,
    resolvers: BTreeSet<String>,
}

impl ResolverTable {
    pub fn new<S: Into<String>>(module_name: S) -> Self {
        Self {
            module_name: module_name.into(),
            resolvers: BTreeSet::new(),
        }
    }

    pub fn with_resolver<S: Into<String>>(mut self, name: S) -> Self {
        self.resolvers.insert(name.into());
        self
    }

    pub fn insert<S: Into<String>>(&mut self, name: S) {
        self.resolvers.insert(name.into());
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl ResolverProvider for ResolverTable {
    fn module_name(&self) -> &str {
        &self.module_name
    }

    fn has_resolver(&self, name: &str) -> bool {
        self.resolvers.contains(name)
    }
}

/// Pick the primary provider unless it is empty, in which case the
/// fallback is used. Provider selection stays a configuration decision
/// rather than discovery at audit time.
pub fn select_provider<'a>(
    primary: &'a ResolverTable,
    fallback: &'a ResolverTable,
) -> &'a ResolverTable {
    if primary.is_empty() {
        fallback
    } else {
        primary
    }
}
