//! Console output formatter for dispatch results

use colored::Colorize;
use hwhelper_application::SolveError;
use hwhelper_domain::{
    DispatchReport, EndpointRegistry, FailureKind, ProbeResult, Solution, mask_secret,
};
use serde_json::json;

/// Formats solutions, failures and probe results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a solution with the endpoint that produced it
    pub fn format_solution(solution: &Solution) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Solution"));
        output.push_str("\n\n");
        output.push_str(solution.text());
        output.push('\n');

        if let Some(endpoint) = solution.source_endpoint() {
            output.push_str(&format!("\n{} {}\n", "Answered by:".dimmed(), endpoint));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Same shape as the `POST /solve` success body
    pub fn format_solution_json(solution: &Solution) -> String {
        let value = json!({
            "success": true,
            "solution": solution.text(),
            "endpoint_used": solution.source_endpoint().map(|e| e.url()),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_error(err: &SolveError) -> String {
        match err {
            SolveError::Exhausted(report) => Self::format_report(report),
            other => format!("{} {}\n", "Error:".red().bold(), other),
        }
    }

    pub fn format_error_json(err: &SolveError) -> String {
        let value = match err {
            SolveError::Exhausted(report) => json!({
                "success": false,
                "error": format!(
                    "Could not reach any upstream endpoint. Last error: {}",
                    report.last_error_summary()
                ),
                "tried_endpoints": report.tried_endpoints(),
                "attempts": report.attempts(),
            }),
            other => json!({ "success": false, "error": other.to_string() }),
        };
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Per-attempt breakdown of a failed dispatch
    pub fn format_report(report: &DispatchReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Could not reach any upstream endpoint.".red().bold(),
            format!(
                "({} timeout, {} upstream)",
                report.count_by_kind(FailureKind::Timeout),
                report.count_by_kind(FailureKind::Upstream)
            )
            .dimmed()
        ));

        for (i, attempt) in report.attempts().iter().enumerate() {
            let detail = attempt.failure_detail().unwrap_or("ok");
            output.push_str(&format!(
                "  {} {} {}\n{}\n",
                format!("{}.", i + 1).dimmed(),
                "x".red(),
                attempt.endpoint,
                Self::indent(detail, "       ")
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Last error:".yellow().bold(),
            report.last_error_summary()
        ));
        output
    }

    pub fn format_probe(results: &[ProbeResult]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Endpoint Probe"));
        output.push('\n');

        for result in results {
            let mark = if result.working {
                "v".green()
            } else {
                "x".red()
            };
            let status = match (result.status, result.error.as_deref()) {
                (Some(code), _) => code.to_string(),
                (None, Some(error)) => error.to_string(),
                (None, None) => "error".to_string(),
            };
            output.push_str(&format!(
                "\n{} {}\n    {} {}  {}\n",
                mark,
                result.endpoint,
                "status:".dimmed(),
                status,
                format!("{}ms", result.elapsed_ms).dimmed()
            ));
        }

        let working = results.iter().filter(|r| r.working).count();
        output.push_str(&format!(
            "\n{} {}/{} endpoint(s) working\n",
            "Summary:".cyan().bold(),
            working,
            results.len()
        ));
        output.push_str(&Self::footer());
        output
    }

    pub fn format_probe_json(results: &[ProbeResult]) -> String {
        serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string())
    }

    /// Resolved endpoint list with masked credentials
    pub fn format_endpoints(registry: &EndpointRegistry) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Endpoints (priority order):".cyan().bold()));
        for (i, endpoint) in registry.iter().enumerate() {
            output.push_str(&format!(
                "  {:>2}. [{}] {}  {}\n",
                i + 1,
                endpoint.variant(),
                endpoint,
                format!("token {}", mask_secret(endpoint.credential())).dimmed()
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
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
