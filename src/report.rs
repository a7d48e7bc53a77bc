//! Final run report, as text or JSON on stdout.
use std::io::IsTerminal;

use crossterm::style::Stylize;

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::metrics::RunResult;

const LABEL_WIDTH: usize = 24;

/// Writes the report to stdout. Colors are used only for text output on a
/// terminal and when not disabled.
///
/// # Errors
///
/// Returns an error when the JSON report cannot be serialized.
pub fn print_report(result: &RunResult, format: OutputFormat, no_color: bool) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            let use_color = !no_color && std::io::stdout().is_terminal();
            println!();
            println!("{}", render_text(result, use_color));
        }
        OutputFormat::Json => println!("{}", render_json(result)?),
    }
    Ok(())
}

/// Renders the human-readable report, one statistic per line.
#[must_use]
pub fn render_text(result: &RunResult, use_color: bool) -> String {
    let failed_line = line("Failed requests:", &format!("{}", result.failed));
    let rate_line = line("Success rate:", &format!("{:.2} %", result.success_rate));

    let failed_line = if use_color && result.failed > 0 {
        failed_line.red().bold().to_string()
    } else {
        failed_line
    };
    let rate_line = if !use_color {
        rate_line
    } else if result.failed > 0 {
        rate_line.red().bold().to_string()
    } else {
        rate_line.yellow().bold().to_string()
    };

    [
        line("Total requests:", &format!("{}", result.total)),
        line("Successful requests:", &format!("{}", result.succeeded)),
        failed_line,
        rate_line,
        line("Requests per second:", &format!("{:.2}", result.throughput)),
        line("Longest request:", &format!("{:.3} s", result.longest_secs)),
        line("Shortest request:", &format!("{:.3} s", result.shortest_secs)),
        line("Total elapsed:", &format!("{:.3} s", result.elapsed_secs)),
    ]
    .join("\n")
}

/// Renders the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn render_json(result: &RunResult) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn line(label: &str, value: &str) -> String {
    format!("{:<width$} {}", label, value, width = LABEL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::metrics::AggregateState;
    use crate::metrics::Outcome;
    use crate::args::SuccessPolicy;
    use std::time::Duration;

    fn sample(failures: usize) -> RunResult {
        let mut state = AggregateState::default();
        state.record(&Outcome::response(
            Duration::from_millis(100),
            200,
            SuccessPolicy::Transport,
        ));
        state.record(&Outcome::response(
            Duration::from_millis(400),
            200,
            SuccessPolicy::Transport,
        ));
        for _ in 0..failures {
            state.record(&Outcome::transport_failure(
                Duration::from_millis(250),
                "connection refused".to_owned(),
            ));
        }
        RunResult::from_state(&state, Duration::from_secs(2))
    }

    #[test]
    fn text_report_lists_every_statistic() -> Result<(), String> {
        let text = render_text(&sample(1), false);
        for expected in [
            "Total requests:          3",
            "Successful requests:     2",
            "Failed requests:         1",
            "Success rate:            66.67 %",
            "Requests per second:     1.50",
            "Longest request:         0.400 s",
            "Shortest request:        0.100 s",
            "Total elapsed:           2.000 s",
        ] {
            if !text.contains(expected) {
                return Err(format!("Missing line '{}' in:\n{}", expected, text));
            }
        }
        Ok(())
    }

    #[test]
    fn plain_text_report_has_no_escape_codes() -> Result<(), String> {
        let text = render_text(&sample(2), false);
        if text.contains('\u{1b}') {
            return Err("Plain report should not contain ANSI escapes".to_owned());
        }
        Ok(())
    }

    #[test]
    fn colored_report_highlights_failures() -> Result<(), String> {
        let text = render_text(&sample(1), true);
        if !text.contains('\u{1b}') {
            return Err("Colored report should contain ANSI escapes".to_owned());
        }
        Ok(())
    }

    #[test]
    fn json_report_carries_counts() -> Result<(), AppError> {
        let json = render_json(&sample(0))?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        if value.get("total").and_then(serde_json::Value::as_u64) != Some(2) {
            return Err(AppError::validation(format!("Unexpected JSON: {}", json)));
        }
        if value.get("failed").and_then(serde_json::Value::as_u64) != Some(0) {
            return Err(AppError::validation(format!("Unexpected JSON: {}", json)));
        }
        Ok(())
    }
}
