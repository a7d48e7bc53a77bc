use clap::Parser;
use std::num::NonZeroUsize;
use std::time::Duration;

use super::parsers::{parse_duration_arg, parse_header_list};
use super::types::{HeaderList, OutputFormat, SuccessPolicy};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP load generator - fires N requests at once and reports success rate, throughput and latency extremes."
)]
pub struct TesterArgs {
    /// Number of requests to issue; all of them are dispatched at once
    #[arg(long, short = 'c', default_value_t = 1)]
    pub concurrency: u64,

    /// Target URL (http:// is assumed when no scheme is given)
    #[arg(long, short = 'u', short_alias = 'r')]
    pub url: Option<String>,

    /// HTTP method to use
    #[arg(long, short = 'X', short_alias = 'm', default_value = "GET")]
    pub method: String,

    /// Headers as 'Key:Value' pairs joined by '&' (repeatable)
    #[arg(long = "header", short = 'H', value_parser = parse_header_list)]
    pub headers: Vec<HeaderList>,

    /// Request body, e.g. id=1&name=abc
    #[arg(long, short = 'd', short_alias = 'P', default_value = "")]
    pub data: String,

    /// Log every response body
    #[arg(long = "show-body", short = 's')]
    pub show_body: bool,

    /// How a finished request is classified as succeeded
    #[arg(long = "success", value_enum, default_value_t = SuccessPolicy::Transport)]
    pub success_policy: SuccessPolicy,

    /// Per-request deadline (supports ms/s/m/h); requests never time out when unset
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Cap on simultaneous exchanges; every request runs at once when unset
    #[arg(long = "max-in-flight")]
    pub max_in_flight: Option<NonZeroUsize>,

    /// Report format
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Path to config file (TOML or JSON); volley.toml/volley.json are picked up by default
    #[arg(long)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl TesterArgs {
    /// All header pairs in the order they were given.
    #[must_use]
    pub fn header_pairs(&self) -> Vec<(String, String)> {
        self.headers
            .iter()
            .cloned()
            .flat_map(HeaderList::into_pairs)
            .collect()
    }
}
