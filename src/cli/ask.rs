use crate::cli::CliContext;
use crate::core::reader::acquire_input;
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::process::ExitCode;
use zeroize::Zeroizing;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Prompt message (empty for a silent prompt)
    #[arg(default_value = "")]
    pub message: String,

    /// Read the answer without echoing it
    #[arg(long)]
    pub hide: bool,
}

pub fn run(ctx: &CliContext, args: AskArgs) -> Result<ExitCode> {
    let mut options = ctx.options.clone();
    options.hide_input |= args.hide;

    let answer = Zeroizing::new(acquire_input(&args.message, &options).context("read input")?);

    let mut out = io::stdout().lock();
    writeln!(out, "{}", answer.as_str()).context("write answer")?;
    out.flush().context("flush answer")?;
    Ok(ExitCode::SUCCESS)
}
