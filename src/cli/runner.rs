use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use imglogic::{CombineParams, combine_files, inspect_files};

use super::args::CliArgs;
use super::errors::AppError;

fn required(path: Option<PathBuf>, arg: &str) -> Result<PathBuf, AppError> {
    path.ok_or(AppError::MissingArgument {
        arg: arg.to_string(),
    })
}

/// Config file values first, then explicit flags on top.
pub fn resolve_params(args: &CliArgs) -> Result<CombineParams, AppError> {
    let mut params = match &args.config {
        Some(path) => CombineParams::from_json_file(path)?,
        None => CombineParams::default(),
    };
    if let Some(operation) = args.operation {
        params.operation = operation;
    }
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let params = resolve_params(&args)?;
    let first = required(args.first, "--first")?;
    let second = required(args.second, "--second")?;

    if args.info {
        let report = inspect_files(&first, &second)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    info!(
        "Combining {:?} {} {:?} -> {:?}",
        first, params.operation, second, args.output
    );
    let result = combine_files(&first, &second, &params)?;
    result.save(&args.output)?;

    info!(
        "Successfully wrote {}x{} {} result: {:?}",
        result.info.width, result.info.height, result.operation, args.output
    );
    Ok(())
}
