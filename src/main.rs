use crate::{
    bumper::bump,
    types::{config::BumpConfig, version::Version},
    utils::{
        logger::{LogLevel, Logger},
        path::get_cwd,
        signature::get_signature,
        version::get_version,
    },
};
use anyhow::{Context, anyhow};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::process::ExitCode;

mod bumper;
mod error;
mod manifest;
mod types;
mod utils;

/// Bumps the version in package.json and package-lock.json of the working
/// directory and appends a release stub to CHANGELOG.md.
#[derive(Parser)]
#[command(name = "bump-version")]
#[command(author = "DartRuffian")]
#[command(about = "Advance the LazyArmaDev release version by one step")]
struct Cli {}

fn main() -> ExitCode {
    let version = get_version();
    let signature = get_signature(&version);

    let version_static: &'static str = Box::leak(format!("v{}", version).into_boxed_str());
    let signature_static: &'static str = Box::leak(signature.into_boxed_str());

    let mut cmd = Cli::command();
    cmd = cmd.version(version_static).before_help(signature_static);

    let raw_args: Vec<String> = std::env::args().collect();
    if raw_args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{}", signature_static);
        return ExitCode::SUCCESS;
    }

    let matches = cmd.get_matches();
    if let Err(e) = Cli::from_arg_matches(&matches) {
        e.exit();
    }

    let logger = Logger::new();
    match run(&logger) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            let trace: Vec<String> = e.chain().skip(1).map(|cause| cause.to_string()).collect();
            logger.log_message_with_trace(
                LogLevel::Error,
                &e.to_string(),
                trace.iter().map(String::as_str).collect(),
            );
            ExitCode::FAILURE
        }
    }
}

fn run(logger: &Logger) -> anyhow::Result<Version> {
    let cwd = get_cwd().map_err(|e| anyhow!(e))?;
    let config = BumpConfig::in_dir(&cwd);
    bump(&config, logger).with_context(|| {
        format!(
            "Version bump aborted in {}; inspect the manifests and changelog before retrying",
            cwd.display()
        )
    })
}
