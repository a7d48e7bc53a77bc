//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use cli::TesterArgs;
pub use types::{HeaderList, OutputFormat, SuccessPolicy};

pub(crate) use defaults::{DEFAULT_FORM_CONTENT_TYPE, DEFAULT_USER_AGENT};
pub(crate) use parsers::{normalize_url, parse_duration_arg, parse_header_list};
