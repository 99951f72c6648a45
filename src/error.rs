//! Failures raised while advancing a pipeline.

use std::fmt;

use thiserror::Error;

use crate::Pipeline;
use crate::processor::Processor;

/// Message carried by [`PipelineError::InvalidProcessor`].
pub const INVALID_PROCESSOR_MESSAGE: &str = "Invalid pipeline processor \"null\"";

/// A processor failed while processing a pipeline value.
///
/// Holds the pipeline as it was before the failing processor ran, the
/// processor itself, and the error it raised.
#[derive(Error)]
#[error("{message}")]
pub struct StepFailure<T, P> {
    pipeline: Pipeline<T>,
    processor: P,
    processor_name: String,
    message: String,
    #[source]
    cause: anyhow::Error,
}

impl<T, P> StepFailure<T, P> {
    pub fn new<U>(pipeline: Pipeline<T>, processor: P, cause: anyhow::Error) -> Self
    where
        P: Processor<T, U>,
    {
        Self {
            pipeline,
            processor_name: processor.name().into_owned(),
            processor,
            message: cause.to_string(),
            cause,
        }
    }

    /// The pipeline snapshot, still holding the last successful value.
    pub fn pipeline(&self) -> &Pipeline<T> {
        &self.pipeline
    }

    /// The processor that failed.
    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error raised by the processor, unchanged.
    pub fn cause(&self) -> &anyhow::Error {
        &self.cause
    }

    /// Name of the failing processor, as reported by [`Processor::name`].
    pub fn processor_name(&self) -> &str {
        &self.processor_name
    }

    /// Split into the snapshot pipeline, the processor, and the cause.
    pub fn into_parts(self) -> (Pipeline<T>, P, anyhow::Error) {
        (self.pipeline, self.processor, self.cause)
    }
}

// Closures are not Debug, so neither the processor nor the held value is
// required to be.
impl<T, P> fmt::Debug for StepFailure<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepFailure")
            .field("processor", &self.processor_name)
            .field("message", &self.message)
            .field("cause", &self.cause)
            .finish_non_exhaustive()
    }
}

/// Error returned by [`Pipeline::process`] and [`Pipeline::try_process`].
#[derive(Error)]
pub enum PipelineError<T, P> {
    /// No processor was supplied. Never wraps anything.
    #[error("Invalid pipeline processor \"null\"")]
    InvalidProcessor,

    /// The processor ran and failed.
    #[error(transparent)]
    Step(#[from] StepFailure<T, P>),
}

impl<T, P> PipelineError<T, P> {
    pub fn is_invalid_processor(&self) -> bool {
        matches!(self, Self::InvalidProcessor)
    }

    pub fn step_failure(&self) -> Option<&StepFailure<T, P>> {
        match self {
            Self::Step(failure) => Some(failure),
            Self::InvalidProcessor => None,
        }
    }

    pub fn into_step_failure(self) -> Option<StepFailure<T, P>> {
        match self {
            Self::Step(failure) => Some(failure),
            Self::InvalidProcessor => None,
        }
    }
}

impl<T, P> fmt::Debug for PipelineError<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProcessor => f.write_str("InvalidProcessor"),
            Self::Step(failure) => f.debug_tuple("Step").field(failure).finish(),
        }
    }
}
