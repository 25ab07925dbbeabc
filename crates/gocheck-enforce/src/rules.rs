//! The naming rule table: which pattern each kind and shape requires.

use std::collections::HashMap;

use gocheck_core::config::CheckConfig;
use gocheck_core::types::{Kind, Shape};

use crate::types::{Binding, Violation};

/// A required name prefix or suffix. An empty pattern always matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Prefix(String),
    Suffix(String),
}

impl Pattern {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Pattern::Prefix(p) => name.starts_with(p.as_str()),
            Pattern::Suffix(s) => name.ends_with(s.as_str()),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Pattern::Prefix(p) | Pattern::Suffix(p) => p,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Pattern::Prefix(_) => "start with",
            Pattern::Suffix(_) => "end with",
        }
    }
}

/// One rule: the pattern plus the subject used in its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRule {
    pub subject: &'static str,
    pub pattern: Pattern,
}

impl NamingRule {
    pub fn new(subject: &'static str, pattern: Pattern) -> Self {
        Self { subject, pattern }
    }

    /// The violation message for `name`, or `None` if it passes.
    pub fn check(&self, name: &str) -> Option<String> {
        if self.pattern.matches(name) {
            return None;
        }
        Some(format!(
            "{} '{}' should {} '{}'",
            self.subject,
            name,
            self.pattern.verb(),
            self.pattern.text()
        ))
    }
}

/// Kind rules and shape rules, looked up independently.
/// Built once per run, read-only afterwards.
#[derive(Debug, Clone)]
pub struct RuleTable {
    kinds: HashMap<Kind, NamingRule>,
    shapes: HashMap<Shape, NamingRule>,
}

impl RuleTable {
    /// Build the table from configured patterns. Disabled families and empty
    /// patterns produce no rule.
    pub fn from_config(config: &CheckConfig) -> Self {
        let prefixes = &config.prefixes;
        let suffixes = &config.suffixes;
        let enforce = &config.enforce;

        let mut kinds = HashMap::new();
        let kind_rules = [
            (
                enforce.globals,
                Kind::Global,
                "Global variable",
                Pattern::Prefix(prefixes.global.clone()),
            ),
            (
                enforce.locals,
                Kind::Local,
                "Local variable",
                Pattern::Prefix(prefixes.local.clone()),
            ),
            (
                enforce.parameters,
                Kind::Parameter,
                "Function parameter",
                Pattern::Prefix(prefixes.parameter.clone()),
            ),
            (
                enforce.type_names,
                Kind::TypeName,
                "Struct type",
                Pattern::Suffix(suffixes.type_name.clone()),
            ),
        ];
        for (enabled, kind, subject, pattern) in kind_rules {
            if enabled && !pattern.text().is_empty() {
                kinds.insert(kind, NamingRule::new(subject, pattern));
            }
        }

        let mut shapes = HashMap::new();
        if enforce.shapes {
            let shape_rules = [
                (Shape::Sequence, "Array variable", suffixes.sequence.clone()),
                (Shape::Map, "Map variable", suffixes.map.clone()),
                (Shape::Struct, "Struct variable", suffixes.record.clone()),
                (Shape::Channel, "Channel variable", suffixes.channel.clone()),
            ];
            for (shape, subject, suffix) in shape_rules {
                if !suffix.is_empty() {
                    shapes.insert(shape, NamingRule::new(subject, Pattern::Suffix(suffix)));
                }
            }
        }

        Self { kinds, shapes }
    }

    pub fn kind_rule(&self, kind: Kind) -> Option<&NamingRule> {
        self.kinds.get(&kind)
    }

    pub fn shape_rule(&self, shape: Shape) -> Option<&NamingRule> {
        self.shapes.get(&shape)
    }

    /// All violations for one binding: the kind rule first, then the shape
    /// rule. Shape rules only apply to variables.
    pub fn evaluate(&self, binding: &Binding) -> Vec<Violation> {
        let mut violations = Vec::new();
        if let Some(message) = self
            .kind_rule(binding.kind)
            .and_then(|rule| rule.check(&binding.name))
        {
            violations.push(binding.violation(message));
        }
        if binding.kind.is_variable() {
            if let Some(message) = self
                .shape_rule(binding.shape)
                .and_then(|rule| rule.check(&binding.name))
            {
                violations.push(binding.violation(message));
            }
        }
        violations
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::from_config(&CheckConfig::default())
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
