//! Pattern catalog: red-flag and clause-type definitions
//!
//! A catalog is an ordered, immutable table. Iteration order is observable:
//! the detector reports flags in catalog order and the segmenter picks the
//! first clause type whose trigger matches, so entries are never re-sorted.

use std::collections::HashSet;

use contract_types::RiskLevel;
use regex::{Regex, RegexBuilder};

use crate::builtin::BUILTIN_CATALOG;
use crate::error::CatalogError;

/// Clause type assigned to paragraphs no catalog entry matches
pub const GENERAL_CLAUSE_TYPE: &str = "general";

/// Display title for [`GENERAL_CLAUSE_TYPE`]
pub const GENERAL_CLAUSE_TITLE: &str = "General Terms";

/// Uncompiled red-flag definition
#[derive(Debug, Clone, Copy)]
pub struct RedFlagSpec<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub triggers: &'a [&'a str],
    pub risk_level: RiskLevel,
    pub explanation: &'a str,
    pub learn_more_link: &'a str,
    pub category: &'a str,
}

/// Uncompiled clause-type definition
#[derive(Debug, Clone, Copy)]
pub struct ClauseTypeSpec<'a> {
    pub clause_type: &'a str,
    pub title: &'a str,
    pub triggers: &'a [&'a str],
}

/// A compiled red-flag definition. Triggers are tested in order.
#[derive(Debug, Clone)]
pub struct RedFlagPattern {
    pub id: String,
    pub title: String,
    pub triggers: Vec<Regex>,
    pub risk_level: RiskLevel,
    pub explanation: String,
    pub learn_more_link: String,
    pub category: String,
}

impl RedFlagPattern {
    pub fn compile(spec: &RedFlagSpec<'_>) -> Result<Self, CatalogError> {
        Ok(Self {
            id: spec.id.to_string(),
            title: spec.title.to_string(),
            triggers: compile_triggers(spec.id, spec.triggers)?,
            risk_level: spec.risk_level,
            explanation: spec.explanation.to_string(),
            learn_more_link: spec.learn_more_link.to_string(),
            category: spec.category.to_string(),
        })
    }

    /// The first trigger (in listed order) matching anywhere in `text`
    pub fn first_match<'t>(&self, text: &'t str) -> Option<regex::Match<'t>> {
        self.triggers.iter().find_map(|trigger| trigger.find(text))
    }
}

/// A compiled clause-type definition
#[derive(Debug, Clone)]
pub struct ClauseTypePattern {
    pub clause_type: String,
    pub title: String,
    pub triggers: Vec<Regex>,
}

impl ClauseTypePattern {
    pub fn compile(spec: &ClauseTypeSpec<'_>) -> Result<Self, CatalogError> {
        Ok(Self {
            clause_type: spec.clause_type.to_string(),
            title: spec.title.to_string(),
            triggers: compile_triggers(spec.clause_type, spec.triggers)?,
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|trigger| trigger.is_match(text))
    }
}

/// Ordered, read-only table of red-flag and clause-type patterns
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    red_flags: Vec<RedFlagPattern>,
    clause_types: Vec<ClauseTypePattern>,
}

impl PatternCatalog {
    /// Build a catalog, rejecting duplicate red-flag ids and clause types
    pub fn new(
        red_flags: Vec<RedFlagPattern>,
        clause_types: Vec<ClauseTypePattern>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for pattern in &red_flags {
            if !seen.insert(pattern.id.as_str()) {
                return Err(CatalogError::DuplicateRedFlag(pattern.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for pattern in &clause_types {
            if !seen.insert(pattern.clause_type.as_str()) {
                return Err(CatalogError::DuplicateClauseType(
                    pattern.clause_type.clone(),
                ));
            }
        }

        Ok(Self {
            red_flags,
            clause_types,
        })
    }

    /// Compile a catalog from uncompiled definitions
    pub fn from_specs(
        red_flags: &[RedFlagSpec<'_>],
        clause_types: &[ClauseTypeSpec<'_>],
    ) -> Result<Self, CatalogError> {
        let red_flags = red_flags
            .iter()
            .map(RedFlagPattern::compile)
            .collect::<Result<Vec<_>, _>>()?;
        let clause_types = clause_types
            .iter()
            .map(ClauseTypePattern::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(red_flags, clause_types)
    }

    /// The built-in employment contract catalog, compiled once per process
    pub fn builtin() -> &'static PatternCatalog {
        &BUILTIN_CATALOG
    }

    pub fn red_flags(&self) -> &[RedFlagPattern] {
        &self.red_flags
    }

    pub fn clause_types(&self) -> &[ClauseTypePattern] {
        &self.clause_types
    }

    pub fn red_flag(&self, id: &str) -> Option<&RedFlagPattern> {
        self.red_flags.iter().find(|pattern| pattern.id == id)
    }

    pub fn clause_type(&self, clause_type: &str) -> Option<&ClauseTypePattern> {
        self.clause_types
            .iter()
            .find(|pattern| pattern.clause_type == clause_type)
    }

    /// First clause type, in catalog order, with a trigger matching `paragraph`
    pub fn classify(&self, paragraph: &str) -> Option<&ClauseTypePattern> {
        self.clause_types
            .iter()
            .find(|pattern| pattern.matches(paragraph))
    }
}

fn compile_triggers(owner: &str, expressions: &[&str]) -> Result<Vec<Regex>, CatalogError> {
    expressions
        .iter()
        .map(|expression| {
            RegexBuilder::new(expression)
                .case_insensitive(true)
                .build()
                .map_err(|source| CatalogError::InvalidTrigger {
                    owner: owner.to_string(),
                    expression: expression.to_string(),
                    source,
                })
        })
        .collect()
}
