use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a finished exchange is classified as succeeded or failed.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuccessPolicy {
    /// Any response counts, whatever its status code.
    #[default]
    Transport,
    /// Only a response with status 200 counts.
    Status,
}

impl SuccessPolicy {
    #[must_use]
    pub const fn classify(self, status: Option<u16>) -> bool {
        match (self, status) {
            (SuccessPolicy::Transport, Some(_)) => true,
            (SuccessPolicy::Status, Some(code)) => code == 200,
            (SuccessPolicy::Transport | SuccessPolicy::Status, None) => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Header pairs parsed from one `-H` value, in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList(pub Vec<(String, String)>);

impl HeaderList {
    pub fn into_pairs(self) -> impl Iterator<Item = (String, String)> {
        self.0.into_iter()
    }
}
