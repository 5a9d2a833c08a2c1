//! Record Predicates

use crate::error::QueryError;
use crate::features::EnrichedRecord;
use crate::field::{Field, Level};
use std::collections::BTreeSet;

/// Constraint on a single field
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Level must be one of the allowed set
    OneOf { field: Field, allowed: BTreeSet<Level> },
    /// Value must lie in `[min, max]`
    Between { field: Field, min: f64, max: f64 },
}

impl Predicate {
    pub fn field(&self) -> Field {
        match self {
            Predicate::OneOf { field, .. } | Predicate::Between { field, .. } => *field,
        }
    }

    fn validate(&self) -> Result<(), QueryError> {
        match self {
            Predicate::OneOf { field, .. } => field.require_groupable().map(|_| ()),
            Predicate::Between { field, .. } => field.require_numeric().map(|_| ()),
        }
    }

    pub fn matches(&self, record: &EnrichedRecord) -> bool {
        match self {
            Predicate::OneOf { field, allowed } => field
                .level(record)
                .is_some_and(|level| allowed.contains(&level)),
            Predicate::Between { field, min, max } => field
                .value(record)
                .is_some_and(|value| *min <= value && value <= *max),
        }
    }
}

/// Conjunction of predicates. The empty set matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredicateSet {
    predicates: Vec<Predicate>,
}

impl PredicateSet {
    /// The universal predicate
    pub fn all() -> Self {
        Self::default()
    }

    /// Require `field` to take one of `levels`
    pub fn one_of<I, L>(mut self, field: Field, levels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Level>,
    {
        self.predicates.push(Predicate::OneOf {
            field,
            allowed: levels.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Require `field` to lie in the inclusive range `[min, max]`
    pub fn between(mut self, field: Field, min: f64, max: f64) -> Self {
        self.predicates.push(Predicate::Between { field, min, max });
        self
    }

    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_universal(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Check every predicate against its field's kind
    pub fn validate(&self) -> Result<(), QueryError> {
        self.predicates.iter().try_for_each(Predicate::validate)
    }

    pub fn matches(&self, record: &EnrichedRecord) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }
}
