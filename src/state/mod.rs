// src/state/mod.rs
use std::fmt;
use uuid::Uuid;

pub mod loading;
pub mod view;

pub use loading::LoadingSchedule;
pub use view::{transition, Effect, Event, Notice, Transition, ViewState};

/// Tag tying a response to the loading or email context that asked for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}
