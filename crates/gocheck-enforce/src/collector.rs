use std::collections::HashSet;

use gocheck_core::types::{Kind, BLANK_IDENT};

use crate::rules::RuleTable;
use crate::types::{Binding, Violation};

/// Append-only violation sink for one traversal pass.
///
/// Global names are evaluated once per pass: a later declaration of an
/// already-seen global is skipped entirely.
#[derive(Debug, Default)]
pub struct ViolationCollector {
    violations: Vec<Violation>,
    seen_globals: HashSet<String>,
}

impl ViolationCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `binding` against `rules` and keep whatever it breaks.
    pub fn record(&mut self, binding: &Binding, rules: &RuleTable) {
        if binding.name == BLANK_IDENT {
            return;
        }
        if binding.kind == Kind::Global && !self.seen_globals.insert(binding.name.clone()) {
            tracing::debug!(
                name = %binding.name,
                line = binding.position.line,
                "global already evaluated, skipping"
            );
            return;
        }
        self.violations.extend(rules.evaluate(binding));
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}
