//! Pipeline orchestrator.
//!
//! Per item: sanitize → select (length filter or predicates) → resolve
//! dimensions → extract digits → populate. Output order follows input
//! order. Items are processed lazily by [`MatrixStream`]; the `to_*`
//! methods collect it and stop at the first error.

use std::sync::Arc;
use std::time::Instant;

use digitgrid_core::config::GridConfig;
use digitgrid_core::errors::{GridErrorCode, PipelineError};
use digitgrid_core::events::{
    BatchCompleteEvent, BatchMode, BatchStartedEvent, ErrorEvent, EventDispatcher,
    GridEventHandler, ItemBuiltEvent, ItemSkippedEvent,
};
use tracing::{debug, info, info_span, warn};

use crate::digits;
use crate::dimensions::{self, DimensionRule, LengthFilter};
use crate::populator::MatrixPopulator;
use crate::sanitizer::Sanitizer;
use crate::types::Matrix;

/// A boolean condition over a sanitized string.
pub type Predicate<'p> = &'p dyn Fn(&str) -> bool;

/// How a batch decides which items survive and which rule they get.
#[derive(Clone, Copy)]
enum Selection<'a> {
    Length(LengthFilter),
    Predicates(&'a [Predicate<'a>]),
}

impl Selection<'_> {
    fn batch_mode(&self) -> BatchMode {
        match self {
            Self::Length(LengthFilter::Unfiltered) => BatchMode::Unfiltered,
            Self::Length(LengthFilter::ExactLength(n)) => BatchMode::ExactLength(*n),
            Self::Length(LengthFilter::SingleRow(n)) => BatchMode::SingleRow(*n),
            Self::Predicates(p) => BatchMode::Predicates(p.len()),
        }
    }
}

/// Turns sequences of optional strings into digit matrices.
#[derive(Debug, Clone)]
pub struct MatrixPipeline {
    sanitizer: Sanitizer,
    populator: MatrixPopulator,
    single_row_threshold: usize,
    events: EventDispatcher,
}

impl MatrixPipeline {
    pub fn new(config: &GridConfig) -> Result<Self, PipelineError> {
        Ok(Self {
            sanitizer: Sanitizer::from_config(&config.sanitizer)?,
            populator: MatrixPopulator::from_config(&config.matrix)?,
            single_row_threshold: config.matrix.effective_single_row_threshold(),
            events: EventDispatcher::new(),
        })
    }

    /// Pipeline with compiled defaults.
    pub fn with_defaults() -> Result<Self, PipelineError> {
        Self::new(&GridConfig::default())
    }

    /// Assemble a pipeline from already-built stages.
    pub fn from_parts(
        sanitizer: Sanitizer,
        populator: MatrixPopulator,
        single_row_threshold: usize,
    ) -> Self {
        Self {
            sanitizer,
            populator,
            single_row_threshold,
            events: EventDispatcher::new(),
        }
    }

    pub fn register_handler(&mut self, handler: Arc<dyn GridEventHandler>) {
        self.events.register(handler);
    }

    pub fn single_row_threshold(&self) -> usize {
        self.single_row_threshold
    }

    /// Classify a caller-supplied length filter against this pipeline's threshold.
    pub fn length_filter(&self, length_filter: i64) -> LengthFilter {
        LengthFilter::from_signed(length_filter, self.single_row_threshold)
    }

    /// One matrix per item whose sanitized length passes `length_filter`.
    ///
    /// `0` keeps every item; a non-zero filter (by absolute value) keeps
    /// only items of that length, laid out in one row when the filter is
    /// above the single-row threshold.
    pub fn to_matrices<I, S>(
        &self,
        items: Option<I>,
        length_filter: i64,
    ) -> Result<Vec<Matrix>, PipelineError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        self.stream_matrices(items, length_filter)?.collect()
    }

    /// One matrix per item; an item matching any predicate gets one row.
    ///
    /// With no predicates this is `to_matrices(items, 0)`.
    pub fn to_matrices_where<'a, I, S>(
        &'a self,
        items: Option<I>,
        predicates: &'a [Predicate<'a>],
    ) -> Result<Vec<Matrix>, PipelineError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        self.stream_matrices_where(items, predicates)?.collect()
    }

    /// Lazy form of [`Self::to_matrices`].
    pub fn stream_matrices<I, S>(
        &self,
        items: Option<I>,
        length_filter: i64,
    ) -> Result<MatrixStream<'_, I::IntoIter>, PipelineError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let selection = Selection::Length(self.length_filter(length_filter));
        self.start(items, selection)
    }

    /// Lazy form of [`Self::to_matrices_where`].
    pub fn stream_matrices_where<'a, I, S>(
        &'a self,
        items: Option<I>,
        predicates: &'a [Predicate<'a>],
    ) -> Result<MatrixStream<'a, I::IntoIter>, PipelineError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let selection = if predicates.is_empty() {
            Selection::Length(LengthFilter::Unfiltered)
        } else {
            Selection::Predicates(predicates)
        };
        self.start(items, selection)
    }

    fn start<'a, I, S>(
        &'a self,
        items: Option<I>,
        selection: Selection<'a>,
    ) -> Result<MatrixStream<'a, I::IntoIter>, PipelineError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let Some(items) = items else {
            let err = PipelineError::InvalidInput("input sequence is absent".to_string());
            self.report_error(None, &err);
            return Err(err);
        };

        let mode = selection.batch_mode();
        let span = info_span!("matrix_batch", ?mode);
        span.in_scope(|| debug!("matrix batch started"));
        self.events.emit_batch_started(&BatchStartedEvent { mode });

        Ok(MatrixStream {
            pipeline: self,
            items: items.into_iter(),
            selection,
            span,
            index: 0,
            built: 0,
            skipped: 0,
            started: Instant::now(),
            done: false,
            completed: false,
        })
    }

    /// Run one item through every stage. `Ok(None)` means it was filtered out.
    fn build_item(
        &self,
        index: usize,
        raw: Option<&str>,
        selection: &Selection<'_>,
    ) -> Result<Option<Matrix>, PipelineError> {
        let sanitized = self.sanitizer.sanitize(raw)?;
        let length = sanitized.chars().count();

        let rule = match selection {
            Selection::Length(filter) => {
                if !filter.admits(length) {
                    let expected_length = filter.expected_length().unwrap_or(length);
                    debug!(index, length, expected_length, "item skipped by length filter");
                    self.events.emit_item_skipped(&ItemSkippedEvent {
                        index,
                        length,
                        expected_length,
                    });
                    return Ok(None);
                }
                filter.rule()
            }
            Selection::Predicates(predicates) => {
                if predicates.iter().any(|p| p(&*sanitized)) {
                    DimensionRule::SingleRow
                } else {
                    DimensionRule::TwoDimensional
                }
            }
        };

        let dims = dimensions::resolve(length, rule)?;
        let supply: Vec<u8> = match dims.cells() {
            Some(cells) => digits::digits(&sanitized).take(cells).collect(),
            None => digits::collect_digits(&sanitized),
        };
        let matrix = self.populator.populate(dims, &supply)?;

        debug!(index, length, ?rule, %dims, filled = matrix.filled_cells(), "item built");
        self.events.emit_item_built(&ItemBuiltEvent {
            index,
            length,
            rows: dims.rows,
            columns: dims.columns,
            filled_cells: matrix.filled_cells(),
        });

        Ok(Some(matrix))
    }

    fn report_error(&self, index: Option<usize>, err: &PipelineError) {
        warn!(?index, code = err.error_code(), error = %err, "matrix pipeline error");
        self.events.emit_error(&ErrorEvent {
            index,
            message: err.to_string(),
            error_code: err.error_code().to_string(),
        });
    }
}

/// Lazily yields one `Result<Matrix, PipelineError>` per surviving item.
///
/// Per-item errors are yielded in place and the stream continues; a fatal
/// error (resource exhaustion) is yielded and ends the stream. The batch
/// summary is emitted once, on exhaustion or when the stream is dropped.
pub struct MatrixStream<'a, I> {
    pipeline: &'a MatrixPipeline,
    items: I,
    selection: Selection<'a>,
    span: tracing::Span,
    index: usize,
    built: usize,
    skipped: usize,
    started: Instant,
    done: bool,
    completed: bool,
}

impl<I> MatrixStream<'_, I> {
    pub fn built(&self) -> usize {
        self.built
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn finish(&mut self) {
        self.done = true;
        if self.completed {
            return;
        }
        self.completed = true;
        let duration_ms = self.started.elapsed().as_millis() as u64;
        info!(
            built = self.built,
            skipped = self.skipped,
            duration_ms,
            "matrix batch complete"
        );
        self.pipeline.events.emit_batch_complete(&BatchCompleteEvent {
            built: self.built,
            skipped: self.skipped,
            duration_ms,
        });
    }
}

impl<I> Drop for MatrixStream<'_, I> {
    fn drop(&mut self) {
        let span = self.span.clone();
        let _enter = span.enter();
        self.finish();
    }
}

impl<I, S> Iterator for MatrixStream<'_, I>
where
    I: Iterator<Item = Option<S>>,
    S: AsRef<str>,
{
    type Item = Result<Matrix, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let span = self.span.clone();
        let _enter = span.enter();

        loop {
            let Some(raw) = self.items.next() else {
                self.finish();
                return None;
            };
            let index = self.index;
            self.index += 1;

            let raw = raw.as_ref().map(|s| <S as AsRef<str>>::as_ref(s));
            match self.pipeline.build_item(index, raw, &self.selection) {
                Ok(Some(matrix)) => {
                    self.built += 1;
                    return Some(Ok(matrix));
                }
                Ok(None) => {
                    self.skipped += 1;
                }
                Err(err) => {
                    self.pipeline.report_error(Some(index), &err);
                    if err.is_fatal() {
                        self.done = true;
                    }
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<I, S> std::iter::FusedIterator for MatrixStream<'_, I>
where
    I: Iterator<Item = Option<S>>,
    S: AsRef<str>,
{
}

/// [`MatrixPipeline::to_matrices`] on a default-configured pipeline.
pub fn to_matrices<I, S>(items: Option<I>, length_filter: i64) -> Result<Vec<Matrix>, PipelineError>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    MatrixPipeline::with_defaults()?.to_matrices(items, length_filter)
}

/// [`MatrixPipeline::to_matrices_where`] on a default-configured pipeline.
pub fn to_matrices_where<I, S>(
    items: Option<I>,
    predicates: &[Predicate<'_>],
) -> Result<Vec<Matrix>, PipelineError>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    MatrixPipeline::with_defaults()?.to_matrices_where(items, predicates)
}
