use std::time::Duration;

use serde::Deserialize;

use crate::args::{OutputFormat, SuccessPolicy, parse_duration_arg};
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(alias = "users")]
    pub concurrency: Option<u64>,
    pub url: Option<String>,
    pub method: Option<String>,
    pub headers: Option<Vec<String>>,
    #[serde(alias = "body")]
    pub data: Option<String>,
    pub show_body: Option<bool>,
    pub success: Option<SuccessPolicy>,
    pub timeout: Option<DurationValue>,
    pub max_in_flight: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

/// Either whole seconds or a string with a ms/s/m/h suffix.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
