use crate::OutputFormatter;
use gocheck_enforce::types::{AnalyzeResult, Violation};

pub struct HumanFormatter;

fn format_violation_human(file: &str, v: &Violation) -> String {
    format!("{}:{}:{}: {} [{}]\n", file, v.line, v.column, v.message, v.name)
}

impl OutputFormatter for HumanFormatter {
    fn format_violations(&self, result: &AnalyzeResult) -> String {
        if result.violations.is_empty() {
            return String::new(); // Clean file = empty stdout
        }

        let mut out = String::new();
        for v in &result.violations {
            out.push_str(&format_violation_human(&result.file, v));
        }
        out.push_str(&format!(
            "\n{} violation(s) in {}\n",
            result.violations.len(),
            result.file,
        ));
        out
    }
}
