// src/state/loading.rs
use std::time::Duration;

pub const STEP_LABELS: [&str; 4] = [
    "Checking current data",
    "Looking up latest SEC filings",
    "Processing new information",
    "Calculating MNAV metrics",
];

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = STEP_LABELS.len() as u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Pending,
}

pub fn step_status(step: u8, current: u8) -> StepStatus {
    if step < current {
        StepStatus::Done
    } else if step == current {
        StepStatus::Current
    } else {
        StepStatus::Pending
    }
}

/// Fixed delays shown as loading progress before the analysis request goes
/// out. The steps are cosmetic: they do not track anything the service does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingSchedule {
    delays: [Duration; 3],
}

impl Default for LoadingSchedule {
    fn default() -> Self {
        Self::new([
            Duration::from_millis(500),
            Duration::from_millis(1000),
            Duration::from_millis(800),
        ])
    }
}

impl LoadingSchedule {
    pub fn new(delays: [Duration; 3]) -> Self {
        Self { delays }
    }

    /// How long `step` lasts before the next one starts. None for the last step,
    /// which lasts until the response arrives.
    pub fn delay(&self, step: u8) -> Option<Duration> {
        if step < FIRST_STEP || step >= LAST_STEP {
            return None;
        }
        self.delays.get(usize::from(step - FIRST_STEP)).copied()
    }
}
