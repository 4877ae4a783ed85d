use chrono::NaiveTime;
use rand::SeedableRng;
use rand::rngs::StdRng;
use signal_chart::application::{SignalFeed, TickOutcome};
use signal_chart::config::SignalConfig;
use signal_chart::domain::errors::ErrorKind;
use signal_chart::domain::market_data::Asset;
use signal_chart::domain::signal::{MarketEvent, SignalOutcome};
use wasm_bindgen_test::*;

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn always_emitting() -> SignalConfig {
    SignalConfig { emission_probability: 1.0, ..SignalConfig::default() }
}

#[wasm_bindgen_test]
fn closed_market_never_emits() {
    let mut feed = SignalFeed::new(&always_emitting()).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    assert_eq!(feed.tick(at(8, 59), &mut rng), TickOutcome::MarketClosed);
    assert_eq!(feed.tick(at(18, 0), &mut rng), TickOutcome::MarketClosed);
    assert!(feed.history().is_empty());
    assert!(feed.current().is_none());
}

#[wasm_bindgen_test]
fn emitted_signal_is_recorded() {
    let mut feed = SignalFeed::new(&always_emitting()).unwrap();
    feed.set_asset(Asset::from("GBP/USD"));
    feed.set_investment(Some(200.0));
    let mut rng = StdRng::seed_from_u64(2);

    let TickOutcome::Emitted(signal) = feed.tick(at(10, 30), &mut rng) else {
        panic!("expected a signal");
    };
    assert_eq!(signal.asset.name(), "GBP/USD");
    assert!((70..100).contains(&signal.confidence));
    assert!((signal.estimated_profit - 170.0).abs() < 1e-9);

    let record = feed.history().latest().unwrap();
    assert_eq!(record.direction, signal.direction);
    assert_eq!(record.time_label(), "10:30:00");
    assert_eq!(feed.current(), Some(&signal));
}

#[wasm_bindgen_test]
fn zero_probability_is_silent() {
    let config = SignalConfig { emission_probability: 0.0, ..SignalConfig::default() };
    let mut feed = SignalFeed::new(&config).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..100 {
        assert_eq!(feed.tick(at(12, 0), &mut rng), TickOutcome::NoSignal);
    }
}

#[test]
fn history_is_bounded_newest_first() {
    let mut feed = SignalFeed::new(&always_emitting()).unwrap();
    let mut rng = StdRng::seed_from_u64(4);

    for minute in 0..30 {
        feed.tick(at(11, minute), &mut rng);
    }
    let history = feed.history();
    assert_eq!(history.len(), 20);
    assert_eq!(history.latest().unwrap().time_label(), "11:29:00");
    assert_eq!(history.iter().last().unwrap().time_label(), "11:10:00");
}

#[test]
fn default_investment_applies_without_override() {
    let mut feed = SignalFeed::new(&always_emitting()).unwrap();
    feed.set_investment(Some(-5.0));
    let mut rng = StdRng::seed_from_u64(5);

    let TickOutcome::Emitted(signal) = feed.tick(at(9, 0), &mut rng) else {
        panic!("expected a signal");
    };
    assert!((signal.estimated_profit - 85.0).abs() < 1e-9);
}

#[test]
fn settling_updates_win_rate() {
    let mut feed = SignalFeed::new(&always_emitting()).unwrap();
    let mut rng = StdRng::seed_from_u64(6);
    feed.tick(at(13, 0), &mut rng);
    feed.tick(at(13, 1), &mut rng);

    assert!(feed.history_mut().settle(0, SignalOutcome::Win, 85.0));
    assert!(feed.history_mut().settle(1, SignalOutcome::Loss, -100.0));
    assert!(!feed.history_mut().settle(5, SignalOutcome::Win, 1.0));
    assert_eq!(feed.history().win_rate(), Some(0.5));
}

#[test]
fn session_boundaries_announced_on_the_hour() {
    let feed = SignalFeed::new(&SignalConfig::default()).unwrap();

    assert_eq!(feed.market_event(at(9, 0)), Some(MarketEvent::Opened));
    assert_eq!(feed.market_event(at(18, 0)), Some(MarketEvent::Closed));
    assert_eq!(feed.market_event(at(9, 1)), None);
    assert!(feed.is_market_open(at(17, 59)));
    assert!(!feed.is_market_open(at(18, 0)));
}

#[test]
fn invalid_stake_settings_refused() {
    let config = SignalConfig {
        emission_probability: 1.0,
        default_investment: -5.0,
        payout_ratio: -2.0,
        ..SignalConfig::default()
    };
    let err = SignalFeed::new(&config).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
