// src/app.rs
use eframe::egui::{self, RichText};
use rfd::FileDialog;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::{ApiWorker, Job, MnavService};
use crate::file::{Report, ReportHandler, TextReportHandler};
use crate::state::{transition, Effect, Event, LoadingSchedule, Notice, RequestId, Transition, ViewState};
use crate::ui::UiAction;

#[derive(Debug, Clone, Copy)]
struct StepClock {
    request: RequestId,
    step: u8,
    started: Instant,
}

pub struct MnavApp {
    view: ViewState,
    schedule: LoadingSchedule,
    step_clock: Option<StepClock>,
    worker: ApiWorker,
    notice: Option<Notice>,
}

impl MnavApp {
    pub fn new(
        schedule: LoadingSchedule,
        service: Arc<dyn MnavService>,
        repaint: Option<egui::Context>,
    ) -> Self {
        Self {
            view: ViewState::TickerSelection,
            schedule,
            step_clock: None,
            worker: ApiWorker::new(service, repaint),
            notice: None,
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        let from = self.view.name();
        let Transition { state, effects } = transition(std::mem::take(&mut self.view), event);
        if state.name() != from {
            tracing::info!(from, to = state.name(), "view changed");
        }
        self.view = state;

        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::FetchAnalysis { request, ticker } => {
                tracing::info!(%ticker, %request, "issuing analysis request");
                if let Err(e) = self.worker.submit(Job::Analyze { request, ticker }) {
                    self.dispatch(Event::AnalysisLoaded {
                        request,
                        outcome: Err(e.to_string()),
                    });
                }
            }
            Effect::SendReport { request, email, data } => {
                tracing::info!(ticker = data.ticker().unwrap_or_default(), %request, "issuing email request");
                if let Err(e) = self.worker.submit(Job::SendReport { request, email, data }) {
                    self.dispatch(Event::EmailSent {
                        request,
                        outcome: Err(e.to_string()),
                    });
                }
            }
            Effect::Notify(notice) => {
                self.notice = Some(notice);
            }
        }
    }

    /// Feeds finished requests back into the state machine.
    pub fn pump(&mut self) {
        for completion in self.worker.drain() {
            self.dispatch(completion.into());
        }
    }

    /// Advances the loading steps that are due at `now`. Returns how long until
    /// the next step, or None when no step is pending.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        loop {
            let (request, step) = match &self.view {
                ViewState::Loading { request, step, .. } => (*request, *step),
                _ => {
                    self.step_clock = None;
                    return None;
                }
            };

            let clock = match self.step_clock {
                Some(clock) if clock.request == request && clock.step == step => clock,
                _ => {
                    let clock = StepClock {
                        request,
                        step,
                        started: now,
                    };
                    self.step_clock = Some(clock);
                    clock
                }
            };

            let due = clock.started + self.schedule.delay(step)?;
            if now < due {
                return Some(due - now);
            }

            // Next step starts when this one was due, not when we noticed
            self.step_clock = Some(StepClock {
                request,
                step: step + 1,
                started: due,
            });
            self.dispatch(Event::StepElapsed { request });
        }
    }

    fn handle(&mut self, ctx: &egui::Context, action: UiAction) {
        match action {
            UiAction::Dispatch(event) => self.dispatch(event),
            UiAction::CopyReport => {
                if let (Some(ticker), Some(data)) = (self.view.ticker(), self.view.data()) {
                    let report = Report::new(ticker, data);
                    match TextReportHandler.render(&report) {
                        Ok(text) => {
                            ctx.output_mut(|o| o.copied_text = text);
                            self.notice = Some(Notice::Success("Report copied to clipboard".to_string()));
                        }
                        Err(e) => self.notice = Some(Notice::Failure(format!("Failed to copy report: {}", e))),
                    }
                }
            }
            UiAction::ExportReport(handler) => self.export_report(handler),
        }
    }

    fn export_report(&mut self, handler: &dyn ReportHandler) {
        let (Some(ticker), Some(data)) = (self.view.ticker(), self.view.data()) else {
            return;
        };
        let report = Report::new(ticker, data);

        let file_dialog = FileDialog::new()
            .add_filter(handler.label(), &[handler.extension()])
            .set_file_name(format!("{}.{}", report.file_stem(), handler.extension()))
            .set_title("Export Report");

        if let Some(path) = file_dialog.save_file() {
            self.notice = Some(match handler.save(&report, &path) {
                Ok(()) => Notice::Success(format!("Report saved to {}", path.display())),
                Err(e) => Notice::Failure(format!("Failed to export report: {:#}", e)),
            });
        }
    }

    fn show_view(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        match &self.view {
            ViewState::TickerSelection => {
                crate::ui::ticker_select::show_ticker_selection(ui, actions);
            }
            ViewState::Loading { ticker, step, .. } => {
                crate::ui::loading::show_loading(ui, ticker, *step, actions);
            }
            ViewState::Results { ticker, data } => {
                crate::ui::results::show_results(ui, ticker, data, actions);
            }
            ViewState::Email { address, sending, .. } => {
                crate::ui::email::show_email_form(ui, address, sending.is_some(), actions);
            }
            ViewState::Error { message } => {
                crate::ui::error::show_error(ui, message, actions);
            }
        }
    }
}

#[cfg(test)]
impl MnavApp {
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn wait_for_response(&mut self, timeout: Duration) -> bool {
        match self.worker.recv_timeout(timeout) {
            Some(completion) => {
                self.dispatch(completion.into());
                true
            }
            None => false,
        }
    }
}

impl eframe::App for MnavApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump();
        if let Some(wait) = self.tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading(RichText::new("MNAV Analysis Tool").size(28.0).strong());
                ui.label("Real-time Modified Net Asset Value analysis for crypto treasury companies");
                ui.add_space(8.0);
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.small("Powered by SEC EDGAR data and live market prices");
            });
        });

        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_view(ui, &mut actions);
            });
        });

        crate::ui::dialog::show_notice(ctx, &mut self.notice);

        for action in actions {
            self.handle(ctx, action);
        }
    }
}
