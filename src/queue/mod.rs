//! Generation Queue
//!
//! Records the batches submitted from the queue-control bar. Execution of
//! queued items happens outside this application; the queue only tracks
//! what was asked for and what was canceled, until it is cleared.

use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::params::{ParameterSet, ParamsError, PromptParams, BATCH_RANGE};

/// Status of a queued item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueStatus {
    Pending,
    Canceled,
}

/// A single queued generation
#[derive(Debug, Clone)]
pub struct QueueItem {
    pub id: Uuid,
    /// Position within the batch it was submitted with
    pub batch_index: u32,
    /// Prompts after the active style preset was applied
    pub prompts: PromptParams,
    /// Parameters at submission time
    pub params: ParameterSet,
    pub status: QueueStatus,
    pub enqueued_at: Instant,
}

/// Ordered record of submitted items
#[derive(Debug, Default)]
pub struct GenerationQueue {
    items: Vec<QueueItem>,
}

impl GenerationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `batch_count` items built from `params` and the resolved prompts.
    ///
    /// When `randomize_seed` is set each item draws its own seed from
    /// `next_seed`; otherwise every item uses the fixed seed.
    pub fn enqueue(
        &mut self,
        params: &ParameterSet,
        prompts: PromptParams,
        batch_count: u32,
        mut next_seed: impl FnMut() -> u32,
    ) -> Result<Vec<Uuid>, ParamsError> {
        if !BATCH_RANGE.contains(&batch_count) {
            return Err(ParamsError::BatchOutOfRange(batch_count));
        }
        params.validate()?;

        let enqueued_at = Instant::now();
        let mut ids = Vec::with_capacity(batch_count as usize);
        for batch_index in 0..batch_count {
            let mut snapshot = params.clone();
            if snapshot.generation.randomize_seed {
                snapshot.generation.seed = next_seed();
            }
            let item = QueueItem {
                id: Uuid::new_v4(),
                batch_index,
                prompts: prompts.clone(),
                params: snapshot,
                status: QueueStatus::Pending,
                enqueued_at,
            };
            debug!(id = %item.id, seed = item.params.generation.seed, "Queued item");
            ids.push(item.id);
            self.items.push(item);
        }

        info!("Enqueued batch of {} ({} pending)", batch_count, self.pending_count());
        Ok(ids)
    }

    /// Cancel the oldest pending item
    pub fn cancel_next(&mut self) -> Option<Uuid> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.status == QueueStatus::Pending)?;
        item.status = QueueStatus::Canceled;
        info!(id = %item.id, "Canceled queue item");
        Some(item.id)
    }

    /// Cancel every pending item and drop all canceled items from the list.
    /// Returns how many pending items were canceled.
    pub fn cancel_all(&mut self) -> usize {
        let canceled = self.pending_count();
        self.items.clear();
        if canceled > 0 {
            info!("Cleared {} pending queue items", canceled);
        }
        canceled
    }

    pub fn pending_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.status == QueueStatus::Pending)
            .count()
    }

    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }
}
