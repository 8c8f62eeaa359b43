//! Replays of classic out-of-bounds access patterns against the bounded
//! containers.
//!
//! Every scenario drives its container through a [`Recorder`], which counts
//! accepted accesses and records each rejected one. Under
//! [`AccessPolicy::Contain`] a rejection is logged and the scenario carries
//! on; under [`AccessPolicy::Strict`] the first rejection aborts the run.

use std::fmt;

use anyhow::{Context, Result};
use boundsafe_error::Error;
use boundsafe_foundation::{
    BoundedAccess, BoundedArray, BoundedCapacity, Ordinal, RuntimeBoundedArray,
};
use clap::ValueEnum;
use tracing::{debug, info_span};

use crate::scenario_limits as limits;

/// A single replayable scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// `<=` loop bound plus literal indices past the end
    OffByOne,
    /// Runtime-sized buffer written past its size
    RuntimeOverrun,
    /// Write at a caller-supplied index
    UserIndex,
    /// Corrected loop bounded by the container's capacity
    SafeLoop,
}

impl Scenario {
    /// Every scenario, in replay order
    pub const ALL: [Self; 4] = [
        Self::OffByOne,
        Self::RuntimeOverrun,
        Self::UserIndex,
        Self::SafeLoop,
    ];

    /// Name used in logs and reports
    pub const fn name(self) -> &'static str {
        match self {
            Self::OffByOne => "off-by-one",
            Self::RuntimeOverrun => "runtime-overrun",
            Self::UserIndex => "user-index",
            Self::SafeLoop => "safe-loop",
        }
    }
}

/// What to do with a rejected access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Record the rejection and continue
    Contain,
    /// Abort the scenario with the rejection's error
    Strict,
}

/// Inputs that come from outside the program
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Handling of rejected accesses
    pub policy:       AccessPolicy,
    /// Index for the user-index scenario
    pub user_index:   i64,
    /// Requested size of the runtime-overrun buffer
    pub runtime_size: i64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            policy:       AccessPolicy::Contain,
            user_index:   limits::user_index::DEFAULT_INDEX,
            runtime_size: limits::runtime_overrun::DEFAULT_SIZE,
        }
    }
}

/// Kind of access that was attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `get`
    Read,
    /// `set`
    Write,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// An access the bounds check refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    /// Attempted operation
    pub operation: Operation,
    /// Requested index
    pub index:     i128,
    /// Capacity of the container
    pub capacity:  usize,
    /// Error returned by the container
    pub error:     Error,
}

/// Outcome of one scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    /// Scenario that produced the report
    pub scenario:   Scenario,
    /// Accesses that passed the bounds check
    pub accepted:   usize,
    /// Accesses refused by the bounds check, in order
    pub rejections: Vec<Rejection>,
    /// Container contents after the scenario
    pub snapshot:   Vec<i32>,
}

impl ScenarioReport {
    /// Whether any access was refused
    pub fn has_rejections(&self) -> bool {
        !self.rejections.is_empty()
    }
}

/// Counts and records accesses made through the bounded containers
pub struct Recorder {
    scenario:   Scenario,
    policy:     AccessPolicy,
    accepted:   usize,
    rejections: Vec<Rejection>,
}

impl Recorder {
    /// Create a recorder for `scenario`
    pub fn new(scenario: Scenario, policy: AccessPolicy) -> Self {
        Self {
            scenario,
            policy,
            accepted: 0,
            rejections: Vec::new(),
        }
    }

    /// Attempt `storage.set(index, value)`
    ///
    /// # Errors
    ///
    /// The container's error, under [`AccessPolicy::Strict`] only.
    pub fn write<S, I>(&mut self, storage: &mut S, index: I, value: i32) -> Result<()>
    where
        S: BoundedAccess<i32>,
        I: Ordinal,
    {
        match storage.set(index, value) {
            Ok(_) => {
                self.accepted += 1;
                Ok(())
            },
            Err(error) => self.reject(Operation::Write, index, storage.capacity(), error),
        }
    }

    /// Attempt `storage.get(index)`
    ///
    /// # Errors
    ///
    /// The container's error, under [`AccessPolicy::Strict`] only.
    pub fn read<S, I>(&mut self, storage: &S, index: I) -> Result<Option<i32>>
    where
        S: BoundedAccess<i32>,
        I: Ordinal,
    {
        match storage.get(index) {
            Ok(value) => {
                self.accepted += 1;
                Ok(Some(value))
            },
            Err(error) => self
                .reject(Operation::Read, index, storage.capacity(), error)
                .map(|()| None),
        }
    }

    fn reject<I: Ordinal>(
        &mut self,
        operation: Operation,
        index: I,
        capacity: usize,
        error: Error,
    ) -> Result<()> {
        let index = index.widen();
        debug!(
            scenario = self.scenario.name(),
            %operation,
            index = %index,
            capacity,
            "access contained: {}",
            error
        );
        self.rejections.push(Rejection {
            operation,
            index,
            capacity,
            error,
        });

        match self.policy {
            AccessPolicy::Contain => Ok(()),
            AccessPolicy::Strict => Err(error).with_context(|| {
                format!(
                    "{} {} at index {} (capacity {})",
                    self.scenario.name(),
                    operation,
                    index,
                    capacity
                )
            }),
        }
    }

    /// Close the recorder and attach the container's final contents
    pub fn finish(self, snapshot: &[i32]) -> ScenarioReport {
        ScenarioReport {
            scenario:   self.scenario,
            accepted:   self.accepted,
            rejections: self.rejections,
            snapshot:   snapshot.to_vec(),
        }
    }
}

/// Replay `selected`, or every scenario when `None`
///
/// `on_report` sees each report as soon as its scenario finishes, so reports
/// completed before a failure are still delivered.
///
/// # Errors
///
/// Construction failures, and the first rejected access under
/// [`AccessPolicy::Strict`].
pub fn run<F>(
    selected: Option<Scenario>,
    options: &RunOptions,
    mut on_report: F,
) -> Result<Vec<ScenarioReport>>
where
    F: FnMut(&ScenarioReport),
{
    let scenarios = match selected {
        Some(ref single) => std::slice::from_ref(single),
        None => &Scenario::ALL[..],
    };

    let mut reports = Vec::with_capacity(scenarios.len());
    for &scenario in scenarios {
        let _span = info_span!("scenario", name = scenario.name()).entered();
        let report = match scenario {
            Scenario::OffByOne => off_by_one(options.policy),
            Scenario::RuntimeOverrun => runtime_overrun(options.runtime_size, options.policy),
            Scenario::UserIndex => user_index(options.user_index, options.policy),
            Scenario::SafeLoop => safe_loop(options.policy),
        }?;
        on_report(&report);
        reports.push(report);
    }

    Ok(reports)
}

/// Loop with a `<=` bound, then a literal write and read past the end.
pub fn off_by_one(policy: AccessPolicy) -> Result<ScenarioReport> {
    let mut arr = BoundedArray::<i32, { limits::off_by_one::CAPACITY }>::new()?;
    let mut recorder = Recorder::new(Scenario::OffByOne, policy);

    // Deliberate `<=` bound: the final iteration targets index CAPACITY.
    for i in 0..=limits::off_by_one::CAPACITY {
        let value = i32::try_from(i * 2).context("loop value overflow")?;
        recorder.write(&mut arr, i, value)?;
    }

    recorder.write(
        &mut arr,
        limits::off_by_one::FIXED_WRITE_INDEX,
        limits::off_by_one::FIXED_WRITE_VALUE,
    )?;

    if let Some(value) = recorder.read(&arr, limits::off_by_one::FIXED_READ_INDEX)? {
        debug!(value, "literal read");
    }

    Ok(recorder.finish(arr.as_slice()))
}

/// Runtime-sized buffer written by a loop with a larger, separate bound.
pub fn runtime_overrun(size: i64, policy: AccessPolicy) -> Result<ScenarioReport> {
    let mut buffer = limited_size(size)
        .and_then(RuntimeBoundedArray::<i32>::new)
        .with_context(|| format!("runtime buffer of size {size}"))?;
    let mut recorder = Recorder::new(Scenario::RuntimeOverrun, policy);

    for i in 0..limits::runtime_overrun::WRITES {
        recorder.write(&mut buffer, i, i)?;
    }

    Ok(recorder.finish(buffer.as_slice()))
}

/// Refuses caller-chosen sizes above the buffer limit before any storage
/// is reserved.
fn limited_size(size: i64) -> boundsafe_error::Result<i64> {
    if size > limits::runtime_overrun::MAX_SIZE {
        Err(Error::invalid_capacity(
            "Requested size exceeds the runtime buffer limit",
        ))
    } else {
        Ok(size)
    }
}

/// Single write at a caller-controlled index.
pub fn user_index(index: i64, policy: AccessPolicy) -> Result<ScenarioReport> {
    let mut data = BoundedArray::<i32, { limits::user_index::CAPACITY }>::new()?;
    let mut recorder = Recorder::new(Scenario::UserIndex, policy);

    recorder.write(&mut data, index, limits::user_index::VALUE)?;

    Ok(recorder.finish(data.as_slice()))
}

/// Corrected loop: bound taken from the container, then read back.
pub fn safe_loop(policy: AccessPolicy) -> Result<ScenarioReport> {
    let mut arr = BoundedArray::<i32, { limits::safe_loop::CAPACITY }>::new()?;
    let mut recorder = Recorder::new(Scenario::SafeLoop, policy);

    for i in arr.indices() {
        let value = i32::try_from(i * 2).context("loop value overflow")?;
        recorder.write(&mut arr, i, value)?;
    }
    for i in arr.indices() {
        recorder.read(&arr, i)?;
    }

    Ok(recorder.finish(arr.as_slice()))
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use boundsafe_error::codes;
    use tracing::Level;
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[test]
    fn test_off_by_one_contained() -> Result<()> {
        let report = off_by_one(AccessPolicy::Contain)?;

        assert_eq!(report.accepted, 10);
        let indices: Vec<i128> = report.rejections.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![10, 15, 20]);
        assert!(report
            .rejections
            .iter()
            .all(|r| r.error.code == codes::OUT_OF_RANGE && r.capacity == 10));
        assert_eq!(report.rejections[2].operation, Operation::Read);
        assert_eq!(report.snapshot, vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);

        Ok(())
    }

    #[test]
    fn test_off_by_one_strict_stops_at_first_rejection() {
        let err = off_by_one(AccessPolicy::Strict).unwrap_err();
        let cause = err.downcast_ref::<Error>().unwrap();
        assert!(cause.is_out_of_range());
        assert!(err.to_string().contains("index 10"));
    }

    #[test]
    fn test_runtime_overrun_contained() -> Result<()> {
        let report = runtime_overrun(5, AccessPolicy::Contain)?;

        assert_eq!(report.accepted, 5);
        assert_eq!(report.rejections.len(), 5);
        assert!(report.rejections.iter().any(|r| r.index == 9));
        assert_eq!(report.snapshot, vec![0, 1, 2, 3, 4]);

        Ok(())
    }

    #[test]
    fn test_runtime_overrun_invalid_size() {
        for size in [0, -5] {
            let err = runtime_overrun(size, AccessPolicy::Contain).unwrap_err();
            let cause = err.downcast_ref::<Error>().unwrap();
            assert!(cause.is_invalid_capacity());
        }
    }

    #[test]
    fn test_runtime_overrun_oversized_size_refused() -> Result<()> {
        for size in [limits::runtime_overrun::MAX_SIZE + 1, i64::MAX] {
            let err = runtime_overrun(size, AccessPolicy::Contain).unwrap_err();
            let cause = err.downcast_ref::<Error>().unwrap();
            assert!(cause.is_invalid_capacity());
            assert!(err.to_string().contains(&size.to_string()));
        }

        let report = runtime_overrun(limits::runtime_overrun::MAX_SIZE, AccessPolicy::Strict)?;
        assert_eq!(report.accepted, 10);
        assert_eq!(
            report.snapshot.len(),
            usize::try_from(limits::runtime_overrun::MAX_SIZE)?
        );

        Ok(())
    }

    #[test]
    fn test_user_index_out_of_range() -> Result<()> {
        let report = user_index(100, AccessPolicy::Contain)?;

        assert_eq!(report.accepted, 0);
        assert_eq!(report.rejections.len(), 1);
        assert_eq!(report.rejections[0].index, 100);
        assert_eq!(report.rejections[0].capacity, 8);
        assert_eq!(report.snapshot, vec![0; 8]);

        let report = user_index(-1, AccessPolicy::Contain)?;
        assert_eq!(report.rejections[0].index, -1);

        Ok(())
    }

    #[test]
    fn test_user_index_in_range() -> Result<()> {
        let report = user_index(3, AccessPolicy::Strict)?;

        assert!(!report.has_rejections());
        assert_eq!(report.snapshot[3], 42);

        Ok(())
    }

    #[test]
    fn test_safe_loop_has_no_rejections() -> Result<()> {
        let report = safe_loop(AccessPolicy::Strict)?;

        assert!(!report.has_rejections());
        assert_eq!(report.accepted, 20);
        assert_eq!(report.snapshot[9], 18);

        Ok(())
    }

    #[test]
    fn test_run_all_in_order() -> Result<()> {
        let reports = run(None, &RunOptions::default(), |_| {})?;
        let order: Vec<Scenario> = reports.iter().map(|r| r.scenario).collect();
        assert_eq!(
            order,
            vec![
                Scenario::OffByOne,
                Scenario::RuntimeOverrun,
                Scenario::UserIndex,
                Scenario::SafeLoop
            ]
        );
        Ok(())
    }

    #[test]
    fn test_run_strict_all_aborts() {
        let options = RunOptions {
            policy: AccessPolicy::Strict,
            ..RunOptions::default()
        };
        let mut seen = Vec::new();
        assert!(run(None, &options, |report| seen.push(report.scenario)).is_err());
        assert!(seen.is_empty());
    }

    #[test]
    fn test_run_delivers_reports_before_failure() {
        let options = RunOptions {
            runtime_size: 0,
            ..RunOptions::default()
        };
        let mut seen = Vec::new();

        let err = run(None, &options, |report| seen.push(report.clone())).unwrap_err();

        assert!(err.downcast_ref::<Error>().unwrap().is_invalid_capacity());
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].scenario, Scenario::OffByOne);
        assert_eq!(seen[0].rejections.len(), 3);
    }

    #[test]
    fn test_strict_single_scenario_after_success() {
        let options = RunOptions {
            policy: AccessPolicy::Strict,
            ..RunOptions::default()
        };
        let mut seen = Vec::new();

        let reports = run(Some(Scenario::SafeLoop), &options, |report| {
            seen.push(report.scenario);
        })
        .unwrap();

        assert_eq!(seen, vec![Scenario::SafeLoop]);
        assert_eq!(reports.len(), 1);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_rejection_warned_once() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(Level::WARN)
            .with_ansi(false)
            .finish();

        let report = tracing::subscriber::with_default(subscriber, || {
            user_index(100, AccessPolicy::Contain)
        })
        .unwrap();
        assert_eq!(report.rejections.len(), 1);

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.lines().count(), 1, "{output}");
        assert!(output.contains("out-of-range access rejected"));
    }
}
