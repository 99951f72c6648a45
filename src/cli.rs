//! Command-line front end for running text steps.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{Level, info};

use crate::PipelineError;
use crate::text::{TextStep, run_text_steps};

/// Thread text through a chain of named steps.
#[derive(Debug, Clone, Parser)]
#[command(name = "pipe-chain", version, about)]
pub struct Cli {
    /// Initial text
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the initial text from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Steps to apply, in order (trim, upper, lower, reverse, non-empty, number, words)
    #[arg(value_name = "STEP")]
    pub steps: Vec<TextStep>,
}

impl Cli {
    /// Log level requested on the command line, if any.
    pub fn log_level(&self) -> Option<Level> {
        self.verbose.then_some(Level::DEBUG)
    }

    fn input(&self) -> Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
                Ok(content.trim_end_matches(['\r', '\n']).to_string())
            }
            (None, None) => bail!("No input given (use --text or --file)"),
        }
    }
}

/// Run the steps named on the command line and return the final text.
pub fn run(cli: &Cli) -> Result<String> {
    let input = cli.input()?;
    info!("Applying {} steps", cli.steps.len());

    match run_text_steps(input, &cli.steps) {
        Ok(pipeline) => Ok(pipeline.into_output()),
        Err(PipelineError::Step(failure)) => {
            let step = *failure.processor();
            let value = failure.pipeline().output().clone();
            let (_, _, cause) = failure.into_parts();
            Err(cause.context(format!("Step '{step}' failed on input {value:?}")))
        }
        Err(err) => Err(err.into()),
    }
}
