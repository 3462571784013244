//! Serialized generation against a shared committed store.
//!
//! Two runs that read availability before either commits can double-book a
//! room or a proctor. The coordinator holds one lock across the whole
//! read → generate → persist sequence, so runs execute one at a time and
//! each sees everything its predecessors committed.
//!
//! A run commits as a unit: its slots become visible in the store all
//! together or not at all.

use log::{info, warn};
use parking_lot::Mutex;

use crate::availability::{CommittedSchedule, SlotSink};
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::models::ExamSchedule;
use crate::request::GenerationRequest;

/// Single-writer gate over a committed schedule store.
#[derive(Debug, Default)]
pub struct ScheduleCoordinator<B> {
    book: Mutex<B>,
    config: SchedulerConfig,
}

impl<B> ScheduleCoordinator<B>
where
    B: CommittedSchedule + SlotSink,
{
    /// Creates a coordinator over `book`.
    pub fn new(book: B) -> Self {
        Self {
            book: Mutex::new(book),
            config: SchedulerConfig::default(),
        }
    }

    /// Sets the configuration used for every run.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Generates a schedule and persists each of its slots, in order.
    ///
    /// Slots are written to a staged copy of the store that replaces it only
    /// once every write succeeded. When generation or any write fails the
    /// store is left exactly as it was and the error is returned.
    pub fn generate(&self, request: &GenerationRequest) -> Result<ExamSchedule>
    where
        B: Clone,
    {
        let mut book = self.book.lock();
        let schedule = request.generate_with(&*book, &self.config)?;

        let mut staged = book.clone();
        for (i, slot) in schedule.slots.iter().enumerate() {
            if let Err(err) = staged.persist(slot) {
                warn!(
                    "persisting slot {} of {} failed, discarding run: {err}",
                    i + 1,
                    schedule.slot_count()
                );
                return Err(err);
            }
        }
        *book = staged;

        info!("committed {} slots", schedule.slot_count());
        Ok(schedule)
    }

    /// Runs `f` with shared access to the store.
    pub fn read<R>(&self, f: impl FnOnce(&B) -> R) -> R {
        let book = self.book.lock();
        f(&*book)
    }

    /// Consumes the coordinator and returns the store.
    pub fn into_inner(self) -> B {
        self.book.into_inner()
    }
}
