use crate::OutputFormatter;
use gocheck_enforce::types::AnalyzeResult;

/// Writes the bare violation array, `[]` when the file is clean.
#[derive(Debug, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_violations(&self, result: &AnalyzeResult) -> String {
        let body = if self.pretty {
            serde_json::to_string_pretty(&result.violations)
        } else {
            serde_json::to_string(&result.violations)
        };
        let mut out = body.unwrap_or_default();
        out.push('\n');
        out
    }
}
