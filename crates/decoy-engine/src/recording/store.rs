//! CallRecordStore: per-fake, append-only log of completed calls.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use decoy_core::types::{FakeId, RuleId};

use super::completed_call::CompletedCall;
use crate::arguments::ArgumentValueSet;
use crate::behavior::CallOutcome;

struct StoreState {
    calls: Vec<Arc<CompletedCall>>,
    next_sequence: u64,
}

/// Ordered record of every completed call on one fake.
///
/// Sequence numbers are assigned inside the lock, so the stored order is
/// the completion order even when calls start concurrently.
pub struct CallRecordStore {
    fake_id: FakeId,
    fake_name: Arc<str>,
    state: Mutex<StoreState>,
}

impl CallRecordStore {
    /// An empty store for one fake.
    pub fn new(fake_id: FakeId, fake_name: Arc<str>) -> Self {
        Self {
            fake_id,
            fake_name,
            state: Mutex::new(StoreState {
                calls: Vec::new(),
                next_sequence: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // A panic never happens while the guard is held; recover the data.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a completed call. Never fails.
    pub fn append(
        &self,
        arguments: ArgumentValueSet,
        outcome: CallOutcome,
        applied_rule: Option<RuleId>,
    ) -> Arc<CompletedCall> {
        let mut state = self.lock();
        let sequence = state.next_sequence;
        state.next_sequence += 1;
        let call = Arc::new(CompletedCall::new(
            sequence,
            self.fake_id,
            Arc::clone(&self.fake_name),
            arguments,
            outcome,
            applied_rule,
        ));
        state.calls.push(Arc::clone(&call));
        call
    }

    /// Snapshot of every call recorded so far, in completion order.
    pub fn get_all(&self) -> Vec<Arc<CompletedCall>> {
        self.lock().calls.clone()
    }

    /// Remove every record. Returns how many were removed.
    pub fn clear(&self) -> usize {
        let mut state = self.lock();
        let cleared = state.calls.len();
        state.calls.clear();
        cleared
    }

    /// Number of calls currently recorded.
    pub fn len(&self) -> usize {
        self.lock().calls.len()
    }

    /// Returns true if no call is recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().calls.is_empty()
    }
}
