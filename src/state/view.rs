// src/state/view.rs
use crate::api::{AnalysisResult, Completion};
use crate::config::find_ticker;
use crate::state::loading::{FIRST_STEP, LAST_STEP};
use crate::state::RequestId;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    TickerSelection,
    Loading {
        ticker: String,
        step: u8,
        request: RequestId,
    },
    Results {
        ticker: String,
        data: AnalysisResult,
    },
    Email {
        ticker: String,
        data: AnalysisResult,
        address: String,
        sending: Option<RequestId>,
    },
    Error {
        message: String,
    },
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::TickerSelection => "ticker-selection",
            ViewState::Loading { .. } => "loading",
            ViewState::Results { .. } => "results",
            ViewState::Email { .. } => "email",
            ViewState::Error { .. } => "error",
        }
    }

    pub fn ticker(&self) -> Option<&str> {
        match self {
            ViewState::Loading { ticker, .. }
            | ViewState::Results { ticker, .. }
            | ViewState::Email { ticker, .. } => Some(ticker),
            ViewState::TickerSelection | ViewState::Error { .. } => None,
        }
    }

    pub fn data(&self) -> Option<&AnalysisResult> {
        match self {
            ViewState::Results { data, .. } | ViewState::Email { data, .. } => Some(data),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SelectTicker { ticker: String, request: RequestId },
    StepElapsed { request: RequestId },
    AnalysisLoaded {
        request: RequestId,
        outcome: Result<AnalysisResult, String>,
    },
    OpenEmail,
    EditAddress(String),
    SendEmail { request: RequestId },
    EmailSent {
        request: RequestId,
        outcome: Result<(), String>,
    },
    CancelEmail,
    Reset,
}

impl Event {
    pub fn select(ticker: impl Into<String>) -> Self {
        Event::SelectTicker {
            ticker: ticker.into(),
            request: RequestId::new(),
        }
    }

    pub fn send_email() -> Self {
        Event::SendEmail {
            request: RequestId::new(),
        }
    }
}

impl From<Completion> for Event {
    fn from(completion: Completion) -> Self {
        match completion {
            Completion::Analysis { request, outcome } => Event::AnalysisLoaded {
                request,
                outcome: outcome.map_err(|e| e.to_string()),
            },
            Completion::Email { request, outcome } => Event::EmailSent {
                request,
                outcome: outcome.map_err(|e| e.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Failure(msg) => msg,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchAnalysis {
        request: RequestId,
        ticker: String,
    },
    SendReport {
        request: RequestId,
        email: String,
        data: AnalysisResult,
    },
    Notify(Notice),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ViewState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(state: ViewState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Applies one event to the current view. Events that do not apply to the
/// current view, or that carry a request tag the view no longer waits on,
/// leave it unchanged.
pub fn transition(state: ViewState, event: Event) -> Transition {
    use ViewState::*;

    match (state, event) {
        (TickerSelection, Event::SelectTicker { ticker, request }) => {
            if find_ticker(&ticker).is_none() {
                tracing::warn!(%ticker, "ignoring unknown ticker");
                return Transition::to(TickerSelection);
            }
            Transition::to(Loading {
                ticker,
                step: FIRST_STEP,
                request,
            })
        }

        (Loading { ticker, step, request }, Event::StepElapsed { request: tag })
            if tag == request && step < LAST_STEP =>
        {
            let step = step + 1;
            let next = Transition::to(Loading {
                ticker: ticker.clone(),
                step,
                request,
            });
            if step == LAST_STEP {
                next.with(Effect::FetchAnalysis { request, ticker })
            } else {
                next
            }
        }

        (Loading { ticker, step, request }, Event::AnalysisLoaded { request: tag, outcome })
            if tag == request && step == LAST_STEP =>
        {
            match outcome {
                Ok(data) => Transition::to(Results { ticker, data }),
                Err(message) => Transition::to(Error { message }),
            }
        }

        (Results { ticker, data }, Event::OpenEmail) => Transition::to(Email {
            ticker,
            data,
            address: String::new(),
            sending: None,
        }),

        (Email { ticker, data, sending: None, .. }, Event::EditAddress(address)) => {
            Transition::to(Email {
                ticker,
                data,
                address,
                sending: None,
            })
        }

        (Email { ticker, data, address, sending: None }, Event::SendEmail { request }) => {
            let email = address.trim().to_string();
            if email.is_empty() {
                return Transition::to(Email {
                    ticker,
                    data,
                    address,
                    sending: None,
                });
            }
            let payload = data.clone();
            Transition::to(Email {
                ticker,
                data,
                address,
                sending: Some(request),
            })
            .with(Effect::SendReport {
                request,
                email,
                data: payload,
            })
        }

        (Email { ticker, data, address, sending: Some(pending) }, Event::EmailSent { request, outcome })
            if request == pending =>
        {
            match outcome {
                Ok(()) => Transition::to(Results { ticker, data })
                    .with(Effect::Notify(Notice::Success("Email sent successfully!".to_string()))),
                Err(message) => Transition::to(Email {
                    ticker,
                    data,
                    address,
                    sending: None,
                })
                .with(Effect::Notify(Notice::Failure(format!(
                    "Failed to send email: {}",
                    message
                )))),
            }
        }

        (Email { ticker, data, sending: None, .. }, Event::CancelEmail) => {
            Transition::to(Results { ticker, data })
        }

        (Results { .. } | Error { .. } | Loading { .. }, Event::Reset) => {
            Transition::to(TickerSelection)
        }

        (state, event) => {
            if is_completion(&event) {
                tracing::debug!(view = state.name(), ?event, "discarding stale response");
            }
            Transition::to(state)
        }
    }
}

fn is_completion(event: &Event) -> bool {
    matches!(
        event,
        Event::StepElapsed { .. } | Event::AnalysisLoaded { .. } | Event::EmailSent { .. }
    )
}
