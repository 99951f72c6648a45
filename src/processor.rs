//! The step contract applied by a [`Pipeline`](crate::Pipeline).
//!
//! A processor receives the value held by the pipeline and produces the
//! value for the next pipeline, or fails. Any closure of the shape
//! `Fn(&T) -> anyhow::Result<U>` is a processor; types that want a
//! meaningful name in failures implement the trait directly or are wrapped
//! with [`named`].

use std::any::type_name;
use std::borrow::Cow;

/// A single unit of transformation from `T` to `U`.
pub trait Processor<T, U> {
    /// Process the current pipeline value, returning the next one.
    fn process(&self, input: &T) -> anyhow::Result<U>;

    /// The display name of this processor, used in logs and failures.
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(type_name::<Self>())
    }
}

impl<T, U, F> Processor<T, U> for F
where
    F: Fn(&T) -> anyhow::Result<U>,
{
    fn process(&self, input: &T) -> anyhow::Result<U> {
        self(input)
    }
}

/// A processor with an explicit display name.
#[derive(Debug, Clone)]
pub struct Named<F> {
    name: Cow<'static, str>,
    inner: F,
}

impl<F> Named<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, inner: F) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }
}

impl<T, U, F> Processor<T, U> for Named<F>
where
    F: Processor<T, U>,
{
    fn process(&self, input: &T) -> anyhow::Result<U> {
        self.inner.process(input)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// Attach a display name to a processor.
pub fn named<F>(name: impl Into<Cow<'static, str>>, processor: F) -> Named<F> {
    Named::new(name, processor)
}
