//! Sequential execution of the boot sequence, with timing diagnostics.
//!
//! `run_all` is one linear pass: every initializer runs to completion, in
//! order, on the calling thread. In trace mode (page loaded with
//! `?_ui_performance_trace=1`) each initializer is individually timed and
//! the slowest entries are reported. In both modes the total wall-clock cost
//! of the pass is checked against [`SLOW_INIT_THRESHOLD_MS`].
//!
//! A failing initializer aborts the pass: later initializers do not run and
//! no diagnostics are emitted for the aborted pass.

use std::time::Instant;

use serde::Serialize;

use crate::error::Result;
use crate::init::Initializer;
use crate::location::Location;

/// Startup budget. A pass that takes strictly longer than this is reported
/// as slow; exactly this long is not.
pub const SLOW_INIT_THRESHOLD_MS: f64 = 500.0;

/// Trace mode reports at most this many entries.
pub const TRACE_REPORT_LIMIT: usize = 20;

// ---------------------------------------------------------------------------
// TraceSample / BootReport
// ---------------------------------------------------------------------------

/// One initializer's measured cost. Durations come from a monotonic clock
/// and are never negative.
#[derive(Debug, Clone, Serialize)]
pub struct TraceSample {
    pub name: String,
    pub duration_ms: f64,
}

/// Outcome of one `run_all` pass. Callers are free to ignore it; the
/// diagnostics have already been emitted by the time it is returned.
#[derive(Debug, Clone, Serialize)]
pub struct BootReport {
    /// Number of initializers executed.
    pub count: usize,
    pub total_ms: f64,
    /// Slowest first, at most [`TRACE_REPORT_LIMIT`]. Empty in plain mode.
    pub samples: Vec<TraceSample>,
}

impl BootReport {
    pub fn is_slow(&self) -> bool {
        self.total_ms > SLOW_INIT_THRESHOLD_MS
    }

    /// Per-initializer diagnostic lines, slowest first.
    pub fn trace_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.samples
            .iter()
            .map(|s| format!("performance trace: {} {:.3}", s.name, s.duration_ms))
    }

    /// The aggregate diagnostic line, present only when the pass was slow.
    pub fn slow_line(&self) -> Option<String> {
        self.is_slow()
            .then(|| format!("slow init functions took {:.3}ms", self.total_ms))
    }
}

// ---------------------------------------------------------------------------
// run_all
// ---------------------------------------------------------------------------

/// Run every initializer in `sequence`, in order, to completion.
///
/// The trace flag is read from `location` once per call; a second call
/// re-derives it. The first failing initializer aborts the pass and the
/// error propagates to the caller.
pub fn run_all(location: &Location, sequence: Vec<Initializer>) -> Result<BootReport> {
    let count = sequence.len();
    let started = Instant::now();

    let samples = if location.performance_trace_enabled() {
        run_traced(sequence)?
    } else {
        run_plain(sequence)?
    };

    let report = BootReport {
        count,
        total_ms: elapsed_ms(started),
        samples: rank(samples),
    };

    for line in report.trace_lines() {
        tracing::info!("{line}");
    }
    if let Some(line) = report.slow_line() {
        tracing::error!("{line}");
    }

    Ok(report)
}

fn run_plain(sequence: Vec<Initializer>) -> Result<Vec<TraceSample>> {
    for init in sequence {
        init.run()?;
    }
    Ok(Vec::new())
}

fn run_traced(sequence: Vec<Initializer>) -> Result<Vec<TraceSample>> {
    let mut samples = Vec::with_capacity(sequence.len());
    for init in sequence {
        let name = init.name().to_owned();
        let started = Instant::now();
        init.run()?;
        samples.push(TraceSample {
            name,
            duration_ms: elapsed_ms(started),
        });
    }
    Ok(samples)
}

/// Sort slowest-first and cap at the report limit. The sort is stable, so
/// equal durations keep execution order.
fn rank(mut samples: Vec<TraceSample>) -> Vec<TraceSample> {
    samples.sort_by(|a, b| b.duration_ms.total_cmp(&a.duration_ms));
    samples.truncate(TRACE_REPORT_LIMIT);
    samples
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
