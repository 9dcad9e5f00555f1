use crate::catalog::{self, StepDefinition};
use crate::snapshot::Snapshot;
use crate::types::StepId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Completion {
    pub done: bool,
    pub timestamp: Option<i64>,
}

// ---------------------------------------------------------------------------
// StepProgress
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepProgress {
    pub id: StepId,
    pub completion: Completion,
}

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// Progress through the tutorial: one record per catalog step, in catalog
/// order. This is the only state the engine owns; the arm pose and action
/// list it evaluates belong to outside collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    steps: Vec<StepProgress>,
}

impl Default for Activity {
    fn default() -> Self {
        Self::new()
    }
}

impl Activity {
    pub fn new() -> Self {
        let steps = catalog::catalog()
            .iter()
            .map(|entry| StepProgress {
                id: entry.id,
                completion: Completion::default(),
            })
            .collect();
        Self { steps }
    }

    pub fn steps(&self) -> &[StepProgress] {
        &self.steps
    }

    pub fn is_done(&self, id: StepId) -> bool {
        self.steps[id.index()].completion.done
    }

    pub fn done_count(&self) -> usize {
        self.steps.iter().filter(|s| s.completion.done).count()
    }

    /// First catalog step not yet done, or `None` when the tutorial is
    /// finished.
    pub fn current_step(&self) -> Option<&'static StepDefinition> {
        self.steps
            .iter()
            .find(|s| !s.completion.done)
            .map(|s| catalog::definition(s.id))
    }

    pub fn evaluate(&self, id: StepId, snapshot: &Snapshot) -> bool {
        self.evaluate_at(id, snapshot, Utc::now())
    }

    pub fn evaluate_at(&self, id: StepId, snapshot: &Snapshot, now: DateTime<Utc>) -> bool {
        catalog::definition(id).evaluate_at(snapshot, now)
    }

    /// Mark a step done. Idempotent: re-committing a done step changes
    /// nothing, the original timestamp included.
    pub fn commit(&mut self, id: StepId) {
        self.commit_at(id, Utc::now());
    }

    pub fn commit_at(&mut self, id: StepId, now: DateTime<Utc>) {
        let completion = &mut self.steps[id.index()].completion;
        if completion.done {
            return;
        }
        completion.done = true;
        completion.timestamp = Some(now.timestamp_millis());
    }

    /// Restart the tutorial: every record back to not-done, no timestamp.
    pub fn reset_all(&mut self) {
        for step in &mut self.steps {
            step.completion = Completion::default();
        }
    }

    /// Re-evaluate after a state change: commit the current step while its
    /// predicate holds, since completing one step can immediately satisfy
    /// the next. Returns the newly completed ids, in order.
    pub fn advance(&mut self, snapshot: &Snapshot) -> Vec<StepId> {
        self.advance_at(snapshot, Utc::now())
    }

    pub fn advance_at(&mut self, snapshot: &Snapshot, now: DateTime<Utc>) -> Vec<StepId> {
        let mut completed = Vec::new();
        while let Some(def) = self.current_step() {
            if !def.evaluate_at(snapshot, now) {
                break;
            }
            self.commit_at(def.id, now);
            completed.push(def.id);
        }
        completed
    }

    pub(crate) fn set_completion(&mut self, index: usize, completion: Completion) {
        if let Some(step) = self.steps.get_mut(index) {
            step.completion = completion;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
