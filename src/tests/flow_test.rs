//! End-to-end tests of the app shell with a fake service and an injected clock

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::{sbet_result, Call, FakeService};
use crate::app::MnavApp;
use crate::state::{Event, LoadingSchedule, Notice, ViewState};

const WAIT: Duration = Duration::from_secs(5);

fn app_with(service: Arc<FakeService>) -> MnavApp {
    MnavApp::new(LoadingSchedule::default(), service, None)
}

fn step(app: &MnavApp) -> Option<u8> {
    match app.view() {
        ViewState::Loading { step, .. } => Some(*step),
        _ => None,
    }
}

/// Drives loading to completion and waits for the analysis response.
fn load(app: &mut MnavApp, ticker: &str) {
    let start = Instant::now();
    app.dispatch(Event::select(ticker));
    app.tick(start);
    app.tick(start + Duration::from_secs(3));
    assert!(app.wait_for_response(WAIT), "no analysis response");
}

#[test]
fn test_sbet_scenario_reaches_results() {
    let service = Arc::new(FakeService::ok());
    let mut app = app_with(service.clone());
    let start = Instant::now();

    app.dispatch(Event::select("SBET"));
    assert_eq!(step(&app), Some(1));

    assert_eq!(app.tick(start), Some(Duration::from_millis(500)));
    assert_eq!(app.tick(start + Duration::from_millis(499)), Some(Duration::from_millis(1)));
    assert_eq!(step(&app), Some(1));

    assert_eq!(
        app.tick(start + Duration::from_millis(500)),
        Some(Duration::from_millis(1000))
    );
    assert_eq!(step(&app), Some(2));

    assert!(app.tick(start + Duration::from_millis(1500)).is_some());
    assert_eq!(step(&app), Some(3));
    assert!(service.calls().is_empty(), "request issued before the last step");

    assert_eq!(app.tick(start + Duration::from_millis(2300)), None);
    assert_eq!(step(&app), Some(4));

    assert!(app.wait_for_response(WAIT));
    assert_eq!(service.calls(), vec![Call::Analyze("SBET".to_string())]);
    assert_eq!(
        app.view(),
        &ViewState::Results {
            ticker: "SBET".to_string(),
            data: sbet_result(),
        }
    );

    let data = app.view().data().unwrap();
    assert_eq!(data.ticker(), Some("SBET"));
    assert_eq!(data.crypto_price(), Some(2500.0));
    assert_eq!(data.stock_price(), Some(12.3));
    assert_eq!(data.crypto_holdings(), Some(1000.0));
    assert_eq!(data.diluted_shares(), Some(50_000_000.0));
    assert_eq!(data.treasury_value(), Some(2_500_000.0));
    assert_eq!(data.mnav_per_share(), Some(0.05));
    assert_eq!(data.market_cap(), Some(615_000_000.0));
    assert_eq!(data.mnav_multiple(), Some(246.0));
    assert_eq!(data.last_updated().as_deref(), Some("2024-01-01"));
    assert_eq!(data.filings_processed().as_deref(), Some("3"));
}

#[test]
fn test_late_tick_catches_up_in_order() {
    let service = Arc::new(FakeService::ok());
    let mut app = app_with(service.clone());
    let start = Instant::now();

    app.dispatch(Event::select("MSTR"));
    app.tick(start);
    // One frame after a long stall walks through every remaining step
    assert_eq!(app.tick(start + Duration::from_secs(10)), None);
    assert_eq!(step(&app), Some(4));

    assert!(app.wait_for_response(WAIT));
    assert_eq!(service.calls(), vec![Call::Analyze("MSTR".to_string())]);
}

#[test]
fn test_error_then_try_again() {
    let service = Arc::new(FakeService::failing_analysis(404, "Not Found"));
    let mut app = app_with(service);

    load(&mut app, "SBET");
    assert_eq!(
        app.view(),
        &ViewState::Error {
            message: "Analysis failed: Not Found".to_string()
        }
    );

    app.dispatch(Event::Reset);
    assert_eq!(app.view(), &ViewState::TickerSelection);
    assert_eq!(app.tick(Instant::now()), None);
}

#[test]
fn test_abandoned_analysis_is_ignored() {
    let service = Arc::new(FakeService::ok());
    let mut app = app_with(service.clone());

    load_without_waiting(&mut app, "SBET");
    app.dispatch(Event::Reset);

    // The stale response still arrives but changes nothing
    assert!(app.wait_for_response(WAIT));
    assert_eq!(app.view(), &ViewState::TickerSelection);
    assert_eq!(service.calls().len(), 1);
}

fn load_without_waiting(app: &mut MnavApp, ticker: &str) {
    let start = Instant::now();
    app.dispatch(Event::select(ticker));
    app.tick(start);
    app.tick(start + Duration::from_secs(3));
}

#[test]
fn test_hung_analysis_does_not_delay_next_ticker() {
    let (service, release) = FakeService::holding("SBET");
    let service = Arc::new(service);
    let mut app = app_with(service.clone());

    load_without_waiting(&mut app, "SBET");
    app.dispatch(Event::Reset);
    load_without_waiting(&mut app, "MSTR");

    // SBET is still stuck in the service; MSTR answers anyway
    assert!(app.wait_for_response(WAIT));
    assert!(matches!(app.view(), ViewState::Results { ticker, .. } if ticker == "MSTR"));

    release.send(()).unwrap();
    assert!(app.wait_for_response(WAIT));
    assert!(matches!(app.view(), ViewState::Results { ticker, .. } if ticker == "MSTR"));
    let calls = service.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.contains(&Call::Analyze("SBET".to_string())));
    assert!(calls.contains(&Call::Analyze("MSTR".to_string())));
}

#[test]
fn test_email_success_round_trip() {
    let service = Arc::new(FakeService::ok());
    let mut app = app_with(service.clone());
    load(&mut app, "SBET");
    let before = app.view().clone();

    app.dispatch(Event::OpenEmail);
    app.dispatch(Event::EditAddress("investor@example.com".to_string()));
    app.dispatch(Event::send_email());
    assert!(matches!(app.view(), ViewState::Email { sending: Some(_), .. }));

    assert!(app.wait_for_response(WAIT));
    assert_eq!(app.view(), &before);
    assert_eq!(
        app.notice(),
        Some(&Notice::Success("Email sent successfully!".to_string()))
    );
    assert_eq!(
        service.calls().last(),
        Some(&Call::SendReport("investor@example.com".to_string(), sbet_result()))
    );

    app.dismiss_notice();
    assert!(app.notice().is_none());
}

#[test]
fn test_email_blank_address_never_reaches_service() {
    let service = Arc::new(FakeService::ok());
    let mut app = app_with(service.clone());
    load(&mut app, "SBET");

    app.dispatch(Event::OpenEmail);
    app.dispatch(Event::EditAddress("   ".to_string()));
    app.dispatch(Event::send_email());

    assert!(!app.wait_for_response(Duration::from_millis(200)));
    assert!(matches!(app.view(), ViewState::Email { sending: None, .. }));
    assert_eq!(service.calls(), vec![Call::Analyze("SBET".to_string())]);
}

#[test]
fn test_email_failure_keeps_form_open() {
    let service = Arc::new(FakeService::ok());
    *service.email.lock().unwrap() = Err(crate::api::ApiError::Network("connection reset".to_string()));
    let mut app = app_with(service);
    load(&mut app, "SBET");

    app.dispatch(Event::OpenEmail);
    app.dispatch(Event::EditAddress("a@b.co".to_string()));
    app.dispatch(Event::send_email());
    assert!(app.wait_for_response(WAIT));

    match app.view() {
        ViewState::Email { address, sending, .. } => {
            assert_eq!(address, "a@b.co");
            assert!(sending.is_none());
        }
        other => panic!("expected email view, got {:?}", other),
    }
    assert_eq!(
        app.notice(),
        Some(&Notice::Failure("Failed to send email: connection reset".to_string()))
    );
}
