//! Wizard progress and readiness.

use serde::Serialize;
use strum::{Display, EnumIter};

use super::model::WizardState;

/// Number of segments of the progress bar (one per step).
pub const PROGRESS_SEGMENTS: usize = 3;

/// A required wizard step, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter)]
pub enum WizardStep {
    Intention,
    Persona,
    Channel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepStatus {
    pub step: WizardStep,
    pub done: bool,
}

/// Progress over the three required steps.
///
/// A step is done when its value is non-null; an empty intention still counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardProgress {
    pub steps: [StepStatus; PROGRESS_SEGMENTS],
    pub completed: usize,
    /// Rounded percentage: 0, 33, 67 or 100.
    pub percent: u8,
}

impl WizardProgress {
    pub fn from_state(state: &WizardState) -> Self {
        let steps = [
            StepStatus {
                step: WizardStep::Intention,
                done: state.intention.is_some(),
            },
            StepStatus {
                step: WizardStep::Persona,
                done: state.selected_persona_id.is_some(),
            },
            StepStatus {
                step: WizardStep::Channel,
                done: state.selected_channel.is_some(),
            },
        ];
        let completed = steps.iter().filter(|s| s.done).count();
        let percent = ((completed as f64 / steps.len() as f64) * 100.0).round() as u8;

        Self {
            steps,
            completed,
            percent,
        }
    }

    /// Generation is enabled only at 100%.
    pub fn is_ready(&self) -> bool {
        self.percent == 100
    }

    /// Fill ratio in `[0, 1]` of one progress-bar segment.
    pub fn segment_fill(&self, index: usize) -> f64 {
        let p = f64::from(self.percent).clamp(0.0, 100.0);
        let segment = 100.0 / PROGRESS_SEGMENTS as f64;
        let start = index as f64 * segment;
        ((p - start) / segment).clamp(0.0, 1.0)
    }
}
