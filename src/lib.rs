//! # chainpipe
//!
//! Immutable, fluent value pipelines.
//!
//! A [`Pipeline`] holds one value. Each call to [`Pipeline::process`] runs a
//! [`Processor`] on that value and returns a new pipeline around its result.
//! When a processor fails, the failure comes back as a [`StepFailure`]
//! carrying the pipeline as it was before the step, the step itself, and
//! the original error, and the chain stops there.
//!
//! ## Example
//!
//! ```
//! use chainpipe::Pipeline;
//!
//! let length = Pipeline::given("Arg Test".to_string())
//!     .process(|s: &String| -> anyhow::Result<String> { Ok(format!("{s} concatenated")) })?
//!     .map(String::len)
//!     .into_output();
//!
//! assert_eq!(length, 21);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod processor;
pub mod text;

pub use error::{INVALID_PROCESSOR_MESSAGE, PipelineError, StepFailure};
pub use pipeline::Pipeline;
pub use processor::{Named, Processor, named};
pub use text::{TextStep, TextStepError, run_text_steps};
