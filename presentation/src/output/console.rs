//! Console output formatter for tool listings and records

use colored::Colorize;
use scout_domain::{RiskLevel, ToolResult, ToolSpec};
use serde_json::Value;

/// Number of results shown by [`ConsoleFormatter::format_smoke`]
const SMOKE_SAMPLE: usize = 3;

/// Formats tool catalogues and tool records for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Tool names with risk level, description and aliases
    pub fn format_tools(spec: &ToolSpec) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Available Tools"));
        output.push('\n');

        for tool in spec.sorted() {
            let risk = match tool.risk_level {
                RiskLevel::High => tool.risk_level.as_str().red().bold(),
                RiskLevel::Low => tool.risk_level.as_str().green(),
            };
            output.push_str(&format!(
                "\n{} [{}]\n{}\n",
                tool.name.yellow().bold(),
                risk,
                Self::indent(&tool.description, "  ")
            ));

            let params: Vec<String> = tool
                .parameters
                .iter()
                .map(|p| {
                    if p.required {
                        p.name.clone()
                    } else {
                        format!("{}?", p.name)
                    }
                })
                .collect();
            if !params.is_empty() {
                output.push_str(&format!("  {} {}\n", "args:".dimmed(), params.join(", ")));
            }
        }

        let mut aliases: Vec<(&str, &str)> = spec
            .aliases()
            .filter(|(alias, _)| spec.resolve_alias(alias).is_some())
            .collect();
        aliases.sort();
        if !aliases.is_empty() {
            output.push_str(&Self::section_header("Aliases"));
            for (alias, canonical) in aliases {
                output.push_str(&format!("  {} -> {}\n", alias, canonical));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Pretty-printed JSON
    pub fn format_json(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// The tool's record, or the whole result when no record was produced
    /// (unknown tool, invalid arguments)
    pub fn format_result(result: &ToolResult) -> String {
        match result.output_json() {
            Some(record) => Self::format_json(&record),
            None => serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string()),
        }
    }

    /// Summary of a search record: keys, total, count, error, first results
    pub fn format_smoke(query: &str, record: &Value) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} search_google({:?})\n",
            "Running".cyan().bold(),
            query
        ));

        let keys: Vec<&str> = record
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        output.push_str(&format!("{} {:?}\n", "Result keys:".bold(), keys));

        let total = record
            .get("total")
            .map(Value::to_string)
            .unwrap_or_else(|| "n/a".to_string());
        output.push_str(&format!("{} {}\n", "total:".bold(), total));

        let results = record
            .get("results")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        output.push_str(&format!("{} {}\n", "Sample results count:".bold(), results.len()));

        if let Some(error) = record.get("error").and_then(Value::as_str) {
            output.push_str(&format!("{} {}\n", "Error:".red().bold(), error));
        }

        for result in results.iter().take(SMOKE_SAMPLE) {
            output.push_str(&format!(
                "- {} | {}\n",
                str_field(result, "title"),
                str_field(result, "url")
            ));
        }

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn str_field<'a>(value: &'a Value, name: &str) -> &'a str {
    value.get(name).and_then(Value::as_str).unwrap_or("")
}
