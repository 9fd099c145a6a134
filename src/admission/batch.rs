use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::blacklist::BlacklistIndex;
use super::domain::{BatchReport, Person, PersonDecision};
use super::evaluation::AdmissionEngine;

const DEFAULT_PROGRESS_EVERY: usize = 500;

/// Cooperative cancellation handle shared between the caller and the batch
/// workers. Cancelling stops workers at the next record boundary; decisions
/// already computed are kept.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Decisions in input order plus the aggregate counters for the run.
#[derive(Debug)]
pub struct BatchOutcome {
    pub decisions: Vec<PersonDecision>,
    pub report: BatchReport,
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("batch worker aborted: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Fans the admission engine out over a roster with a pool of tokio tasks.
///
/// Workers pull indices from a shared cursor and record results into indexed
/// slots, so the published decision sequence always equals the input order
/// no matter how computation interleaves.
pub struct BatchEvaluator {
    engine: Arc<AdmissionEngine>,
    workers: usize,
    progress_every: usize,
}

impl BatchEvaluator {
    pub fn new(engine: AdmissionEngine) -> Self {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        Self {
            engine: Arc::new(engine),
            workers,
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Progress cadence in records; zero disables progress logging.
    pub fn with_progress_every(mut self, progress_every: usize) -> Self {
        self.progress_every = progress_every;
        self
    }

    pub fn engine(&self) -> &AdmissionEngine {
        &self.engine
    }

    /// Evaluate every person against the shared blacklist snapshot.
    ///
    /// On cancellation the longest contiguous prefix of completed decisions
    /// is returned, with `report.incomplete` set whenever any record was
    /// left unevaluated; a run that finishes normally covers the whole
    /// roster.
    pub async fn evaluate_all(
        &self,
        persons: Arc<Vec<Person>>,
        index: Arc<BlacklistIndex>,
        cancel: CancelFlag,
    ) -> Result<BatchOutcome, BatchError> {
        let total = persons.len();
        let today = Utc::now().date_naive();
        let cursor = Arc::new(AtomicUsize::new(0));
        let completed = Arc::new(AtomicUsize::new(0));

        tracing::info!(total, workers = self.workers, "admission batch started");

        let mut handles = Vec::with_capacity(self.workers.min(total.max(1)));
        for _ in 0..self.workers.min(total.max(1)) {
            let engine = Arc::clone(&self.engine);
            let persons = Arc::clone(&persons);
            let index = Arc::clone(&index);
            let cursor = Arc::clone(&cursor);
            let completed = Arc::clone(&completed);
            let cancel = cancel.clone();
            let progress_every = self.progress_every;

            handles.push(tokio::spawn(async move {
                let mut local: Vec<(usize, PersonDecision)> = Vec::new();
                loop {
                    if cancel.is_cancelled() {
                        break;
                    }
                    let idx = cursor.fetch_add(1, Ordering::Relaxed);
                    if idx >= total {
                        break;
                    }

                    let decision = engine.evaluate_on(&persons[idx], &index, today);
                    local.push((idx, decision));

                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    if progress_every > 0 && done % progress_every == 0 {
                        tracing::info!(checked = done, total, "admission batch progress");
                    }
                }
                local
            }));
        }

        let mut slots: Vec<Option<PersonDecision>> = (0..total).map(|_| None).collect();
        for handle in handles {
            for (idx, decision) in handle.await? {
                slots[idx] = Some(decision);
            }
        }

        let mut decisions = Vec::with_capacity(total);
        for slot in slots {
            match slot {
                Some(decision) => decisions.push(decision),
                None => break,
            }
        }

        // A cancellation that lands after the last record is not incomplete.
        let incomplete = decisions.len() < total;
        let mut report = BatchReport::default();
        for decision in &decisions {
            report.absorb(decision);
        }
        report.incomplete = incomplete;

        tracing::info!(
            total = report.total,
            passed = report.pass_count,
            failed = report.fail_count,
            warnings = report.warning_count,
            incomplete = report.incomplete,
            "admission batch finished"
        );

        Ok(BatchOutcome { decisions, report })
    }
}
