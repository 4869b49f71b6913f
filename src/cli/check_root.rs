//! Report whether the process has root/Administrator rights.

use crate::cli::CliContext;
use crate::error::UserError;
use crate::util::privilege;
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::process::ExitCode;

#[derive(Args, Debug)]
pub struct CheckRootArgs {
    /// Output format: text|json
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Report {
    privileged: bool,
    not_root: bool,
    check_failed: bool,
    reason: Option<String>,
}

impl Report {
    fn from_check(check: &Result<(), UserError>) -> Self {
        match check {
            Ok(()) => Self {
                privileged: true,
                not_root: false,
                check_failed: false,
                reason: None,
            },
            Err(err) => Self {
                privileged: false,
                not_root: err.is_not_root(),
                check_failed: err.is_check_failed(),
                reason: Some(err.reason().to_string()),
            },
        }
    }

    fn exit_status(&self) -> u8 {
        if self.privileged {
            0
        } else if self.check_failed {
            2
        } else {
            1
        }
    }

    fn line(&self) -> String {
        match (&self.reason, self.check_failed) {
            (None, _) => "  [PASS] running with root/Administrator rights".to_string(),
            (Some(reason), true) => format!("  [WARN] {}", reason),
            (Some(reason), false) => format!("  [FAIL] {}", reason),
        }
    }
}

pub fn run(_ctx: &CliContext, args: CheckRootArgs) -> Result<ExitCode> {
    let report = Report::from_check(&privilege::is_privileged());
    if args.format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize privilege report")?
        );
    } else {
        println!("{}", report.line());
    }
    Ok(ExitCode::from(report.exit_status()))
}
