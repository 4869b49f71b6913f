use crate::cli::CliContext;
use crate::core::yes_no::acquire_yes_no;
use anyhow::{Context, Result};
use clap::Args;
use std::process::ExitCode;

#[derive(Args, Debug)]
pub struct ConfirmArgs {
    /// Question to ask
    pub message: String,
}

pub fn run(ctx: &CliContext, args: ConfirmArgs) -> Result<ExitCode> {
    match acquire_yes_no(&args.message, &ctx.options) {
        Ok(true) => {
            println!("yes");
            Ok(ExitCode::SUCCESS)
        }
        Ok(false) => {
            println!("no");
            Ok(ExitCode::from(1))
        }
        Err(err) if err.is_yes_no_not_provided() => {
            eprintln!("{}", err);
            Ok(ExitCode::from(2))
        }
        Err(err) => Err(err).context("read confirmation"),
    }
}
