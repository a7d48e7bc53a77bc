use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{error, info};

use crate::args::TesterArgs;
use crate::config::{DEFAULT_CONFIG_FILES, apply_config, load_config};
use crate::error::{AppResult, ValidationError};
use crate::http::{ExecutionUnit, ReqwestTransport};
use crate::runner::{self, RunPlan};
use crate::shutdown_handlers::{setup_signal_shutdown_handler, shutdown_channel};
use crate::{logger, report};

/// Parses arguments, merges the config file, runs the load test and prints
/// the report.
///
/// # Errors
///
/// Returns an error for invalid arguments or configuration, or when the
/// runtime or HTTP client cannot be built. Failed requests are not errors.
pub fn run() -> AppResult<()> {
    let Some((mut args, matches)) = parse_args()? else {
        return Ok(());
    };

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| ValidationError::RuntimeBuildFailed { source: err })?;

    runtime.block_on(run_async(args))
}

fn parse_args() -> AppResult<Option<(TesterArgs, ArgMatches)>> {
    let mut cmd = TesterArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = TesterArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

async fn run_async(args: TesterArgs) -> AppResult<()> {
    let plan = RunPlan::from_args(&args).inspect_err(|err| {
        error!("Invalid run configuration: {}", err);
    })?;
    let transport = ReqwestTransport::new(args.request_timeout)?;
    let executor = Arc::new(ExecutionUnit::new(
        transport,
        args.success_policy,
        args.show_body,
    ));

    info!(
        concurrency = plan.concurrency().get(),
        method = %plan.spec().method(),
        url = %plan.spec().url(),
        "Starting load test"
    );

    let (shutdown_tx, _shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let outcome = runner::run(&plan, executor, Some(&shutdown_tx)).await;

    drop(shutdown_tx.send(()));
    signal_handle.await?;

    let result = outcome?;
    report::print_report(&result, args.output_format, args.no_color)
}
