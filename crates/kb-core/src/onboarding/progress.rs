//! Session-scoped onboarding progress.
//!
//! This is a UI accelerator only: it remembers which step the user last saw
//! and which pages reported success, plus the in-flight guard used to drop
//! duplicate submissions. Authorization decisions never read it; the profile
//! snapshot is the source of truth.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::OnboardingStep;

/// Onboarding progress for one browser session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProgress {
    pub current_step: OnboardingStep,
    #[serde(default)]
    pub completed_steps: BTreeSet<OnboardingStep>,
    #[serde(default)]
    pub is_navigating: bool,
    #[serde(default)]
    pub is_loading: bool,
    /// Tag of the action that holds the in-flight guard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_action: Option<String>,
}

/// Wizard progress bar figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

impl Default for OnboardingProgress {
    fn default() -> Self {
        Self {
            current_step: OnboardingStep::VerifyEmail,
            completed_steps: BTreeSet::new(),
            is_navigating: false,
            is_loading: false,
            pending_action: None,
        }
    }
}

impl OnboardingProgress {
    pub fn set_current_step(&mut self, step: OnboardingStep) {
        self.current_step = step;
    }

    /// Adding a step that is already present is a no-op.
    pub fn mark_step_completed(&mut self, step: OnboardingStep) {
        self.completed_steps.insert(step);
    }

    pub fn is_step_completed(&self, step: OnboardingStep) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Takes the in-flight guard.
    ///
    /// Returns `false` and leaves state untouched when a transition is
    /// already pending.
    pub fn start_navigation(&mut self, action: Option<&str>) -> bool {
        if self.is_in_flight() {
            return false;
        }
        self.is_navigating = true;
        self.is_loading = true;
        self.pending_action = action.map(str::to_owned);
        true
    }

    pub fn reset_navigation(&mut self) {
        self.is_navigating = false;
        self.is_loading = false;
        self.pending_action = None;
    }

    pub fn is_in_flight(&self) -> bool {
        self.is_navigating || self.is_loading
    }

    /// Back to the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn summary(&self) -> ProgressSummary {
        // Both role-specific final steps occupy the same slot.
        let completed = self
            .completed_steps
            .iter()
            .map(OnboardingStep::position)
            .collect::<BTreeSet<_>>()
            .len();
        let total = OnboardingStep::FLOW_LENGTH;
        ProgressSummary {
            completed,
            total,
            percent: ((completed * 100) / total) as u8,
        }
    }
}
