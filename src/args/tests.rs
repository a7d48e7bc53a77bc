use super::*;
use crate::args::parsers::parse_header;
use crate::args::test_support::parse_test_args;
use crate::error::{AppError, AppResult};
use std::time::Duration;

mod headers;
