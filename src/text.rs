//! Built-in text processors used by the `pipe-chain` command.
//!
//! Each [`TextStep`] maps a `String` to a `String`. Steps are named in
//! lowercase on the command line (`trim`, `upper`, `non-empty`, ...).

use std::borrow::Cow;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::{Pipeline, PipelineError, Processor};

/// Errors from parsing step names or running text steps.
#[derive(Debug, Error, PartialEq)]
pub enum TextStepError {
    #[error("Unknown step '{0}' (try: {names})", names = TextStep::NAMES.join(", "))]
    UnknownStep(String),

    #[error("Input is empty")]
    EmptyInput,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is out of range")]
    OutOfRange(String),
}

/// A text transformation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStep {
    /// Strip leading and trailing whitespace.
    Trim,
    Upper,
    Lower,
    /// Reverse characters.
    Reverse,
    /// Fail on blank input, otherwise pass through.
    NonEmpty,
    /// Normalize an integer (`"+007"` -> `"7"`); fail if not an integer.
    Number,
    /// Collapse runs of whitespace into single spaces.
    Words,
}

impl TextStep {
    pub const NAMES: [&'static str; 7] = [
        "trim",
        "upper",
        "lower",
        "reverse",
        "non-empty",
        "number",
        "words",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextStep::Trim => "trim",
            TextStep::Upper => "upper",
            TextStep::Lower => "lower",
            TextStep::Reverse => "reverse",
            TextStep::NonEmpty => "non-empty",
            TextStep::Number => "number",
            TextStep::Words => "words",
        }
    }

    fn apply(&self, text: &str) -> Result<String, TextStepError> {
        match self {
            TextStep::Trim => Ok(text.trim().to_string()),
            TextStep::Upper => Ok(text.to_uppercase()),
            TextStep::Lower => Ok(text.to_lowercase()),
            TextStep::Reverse => Ok(text.chars().rev().collect()),
            TextStep::NonEmpty => {
                if text.trim().is_empty() {
                    Err(TextStepError::EmptyInput)
                } else {
                    Ok(text.to_string())
                }
            }
            TextStep::Number => {
                let text = text.trim();
                text.parse::<i64>().map(|n| n.to_string()).map_err(|e| match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        TextStepError::OutOfRange(text.to_string())
                    }
                    _ => TextStepError::NotANumber(text.to_string()),
                })
            }
            TextStep::Words => Ok(text.split_whitespace().collect::<Vec<_>>().join(" ")),
        }
    }
}

impl fmt::Display for TextStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextStep {
    type Err = TextStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trim" => Ok(TextStep::Trim),
            "upper" => Ok(TextStep::Upper),
            "lower" => Ok(TextStep::Lower),
            "reverse" => Ok(TextStep::Reverse),
            "non-empty" | "nonempty" => Ok(TextStep::NonEmpty),
            "number" => Ok(TextStep::Number),
            "words" => Ok(TextStep::Words),
            _ => Err(TextStepError::UnknownStep(s.to_string())),
        }
    }
}

impl Processor<String, String> for TextStep {
    fn process(&self, input: &String) -> anyhow::Result<String> {
        Ok(self.apply(input)?)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// Thread `input` through `steps` in order, stopping at the first failure.
pub fn run_text_steps(
    input: String,
    steps: &[TextStep],
) -> Result<Pipeline<String>, PipelineError<String, TextStep>> {
    debug!("Running {} text steps", steps.len());
    steps
        .iter()
        .try_fold(Pipeline::given(input), |pipeline, step| pipeline.process(*step))
}
