//! Immutable value pipeline.
//!
//! A [`Pipeline`] holds exactly one value. Advancing it with a processor
//! never mutates it: a successful step yields a brand-new pipeline around
//! the processor's output, a failed step hands the untouched pipeline back
//! inside a [`StepFailure`].

use tracing::{debug, trace, warn};

use crate::error::{PipelineError, StepFailure};
use crate::processor::Processor;

/// Immutable holder of the current pipeline value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pipeline<T> {
    output: T,
}

impl Pipeline<()> {
    /// Start a pipeline with no initial data.
    pub fn start_empty() -> Self {
        Self { output: () }
    }
}

impl<T> Pipeline<T> {
    /// Start a pipeline holding `input`.
    pub fn given(input: T) -> Self {
        Self { output: input }
    }

    /// Apply `processor` to the held value.
    ///
    /// Returns a new pipeline wrapping the processor's output. If the
    /// processor fails, the error is wrapped in a [`StepFailure`] together
    /// with this pipeline and the processor, and no new pipeline is made.
    ///
    /// Only `Err` results are wrapped. A processor that panics unwinds
    /// straight through this call and never becomes a [`StepFailure`].
    pub fn process<U, P>(self, processor: P) -> Result<Pipeline<U>, PipelineError<T, P>>
    where
        P: Processor<T, U>,
    {
        self.try_process(Some(processor))
    }

    /// Like [`process`](Self::process), but accepts a missing processor.
    ///
    /// `None` is rejected with [`PipelineError::InvalidProcessor`] before
    /// anything runs.
    pub fn try_process<U, P>(
        self,
        processor: Option<P>,
    ) -> Result<Pipeline<U>, PipelineError<T, P>>
    where
        P: Processor<T, U>,
    {
        let Some(processor) = processor else {
            warn!("Rejected missing pipeline processor");
            return Err(PipelineError::InvalidProcessor);
        };

        match processor.process(&self.output) {
            Ok(output) => {
                trace!("Processor {} completed", processor.name());
                Ok(Pipeline { output })
            }
            Err(cause) => {
                debug!("Processor {} failed: {}", processor.name(), cause);
                Err(StepFailure::new(self, processor, cause).into())
            }
        }
    }

    /// Apply a step that cannot fail.
    pub fn map<U, F>(self, f: F) -> Pipeline<U>
    where
        F: FnOnce(&T) -> U,
    {
        Pipeline {
            output: f(&self.output),
        }
    }

    /// The currently held value.
    pub fn output(&self) -> &T {
        &self.output
    }

    pub fn into_output(self) -> T {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INVALID_PROCESSOR_MESSAGE;
    use crate::processor::named;
    use anyhow::anyhow;
    use std::cell::Cell;

    const ARG: &str = "Arg Test";

    type StringStep = fn(&String) -> anyhow::Result<String>;

    fn given_arg() -> Pipeline<String> {
        Pipeline::given(ARG.to_string())
    }

    #[test]
    fn test_returns_identity_argument() {
        assert_eq!(given_arg().output(), ARG);
        assert_eq!(Pipeline::given(42).into_output(), 42);
    }

    #[test]
    fn test_start_empty_holds_unit() {
        let () = Pipeline::start_empty().into_output();
        assert_eq!(Pipeline::start_empty(), Pipeline::given(()));
    }

    #[test]
    fn test_passes_argument_to_processor() {
        let seen = Cell::new(false);
        given_arg()
            .process(|arg: &String| -> anyhow::Result<()> {
                assert_eq!(arg, ARG);
                seen.set(true);
                Ok(())
            })
            .unwrap();
        assert!(seen.get());
    }

    #[test]
    fn test_maps_to_same_type() {
        let output = given_arg()
            .process(|arg: &String| -> anyhow::Result<String> { Ok(format!("{arg} concatenated")) })
            .unwrap()
            .into_output();
        assert_eq!(output, "Arg Test concatenated");
    }

    #[test]
    fn test_maps_to_other_type() {
        let pipeline = given_arg()
            .process(|arg: &String| -> anyhow::Result<usize> { Ok(arg.len()) })
            .unwrap();
        assert_eq!(*pipeline.output(), 8);
    }

    #[test]
    fn test_map_with_method_reference() {
        assert_eq!(*given_arg().map(String::len).output(), 8);
    }

    #[test]
    fn test_chains_in_order() {
        let output = Pipeline::given(3)
            .process(|n: &i32| -> anyhow::Result<i32> { Ok(n + 1) })
            .unwrap()
            .process(|n: &i32| -> anyhow::Result<i32> { Ok(n * 10) })
            .unwrap()
            .into_output();
        assert_eq!(output, 40);
    }

    #[test]
    fn test_start_empty_then_produce() {
        let output = Pipeline::start_empty()
            .process(|_: &()| -> anyhow::Result<&'static str> { Ok("produced") })
            .unwrap()
            .into_output();
        assert_eq!(output, "produced");
    }

    #[test]
    fn test_wraps_failure_with_snapshot() {
        let err = given_arg()
            .process(named("explode", |_: &String| -> anyhow::Result<String> {
                Err(anyhow!("Runtime exception test"))
            }))
            .unwrap_err();

        let failure = err.step_failure().expect("expected a step failure");
        assert_eq!(failure.pipeline().output(), ARG);
        assert_eq!(failure.message(), "Runtime exception test");
        assert_eq!(failure.cause().to_string(), "Runtime exception test");
        assert_eq!(failure.processor_name(), "explode");
    }

    #[test]
    fn test_stops_on_failure() {
        let ran = Cell::new(false);
        let result = given_arg()
            .process(|_: &String| -> anyhow::Result<String> { Err(anyhow!("stop")) })
            .map(|next| {
                next.process(|_: &String| -> anyhow::Result<String> {
                    ran.set(true);
                    Ok(String::new())
                })
            });
        assert!(result.is_err());
        assert!(!ran.get());
    }

    #[test]
    #[should_panic(expected = "step panicked")]
    fn test_panicking_step_is_not_wrapped() {
        let _ = given_arg().process(|_: &String| -> anyhow::Result<String> { panic!("step panicked") });
    }

    #[test]
    fn test_rejects_missing_processor() {
        let err = given_arg().try_process::<String, StringStep>(None).unwrap_err();
        assert!(err.is_invalid_processor());
        assert_eq!(err.to_string(), INVALID_PROCESSOR_MESSAGE);

        let err = Pipeline::start_empty()
            .try_process::<(), fn(&()) -> anyhow::Result<()>>(None)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid pipeline processor \"null\"");
    }

    #[test]
    fn test_try_process_with_some_runs() {
        fn shout(s: &String) -> anyhow::Result<String> {
            Ok(s.to_uppercase())
        }
        let output = given_arg()
            .try_process(Some(shout as StringStep))
            .unwrap()
            .into_output();
        assert_eq!(output, "ARG TEST");
    }
}
