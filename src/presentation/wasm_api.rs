use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use chrono::NaiveTime;
use gloo_timers::callback::Interval;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

use crate::application::{ChartService, SignalFeed, TickOutcome};
use crate::config::DashboardConfig;
use crate::domain::{
    chart::Theme,
    errors::AppError,
    logging::LogComponent,
    market_data::Asset,
    signal::MarketEvent,
};
use crate::infrastructure::rendering::WebCanvasSurface;
use crate::{log_error, log_info};

fn to_js(error: AppError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn load_config(config_json: Option<String>) -> Result<DashboardConfig, JsValue> {
    match config_json {
        Some(json) => DashboardConfig::from_json(&json).map_err(to_js),
        None => Ok(DashboardConfig::default()),
    }
}

/// Hand `payload` to a host callback; exceptions it throws are logged
fn notify(callback: &js_sys::Function, payload: &str, what: &str) {
    if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(payload)) {
        log_error!(LogComponent::Presentation("SignalTicker"), "❌ {} callback failed: {:?}", what, e);
    }
}

/// Browser local wall-clock time
fn local_now() -> NaiveTime {
    let date = js_sys::Date::new_0();
    NaiveTime::from_hms_opt(date.get_hours(), date.get_minutes(), date.get_seconds()).unwrap_or_default()
}

/// Candlestick chart bound to one `<canvas>`
#[wasm_bindgen]
pub struct ChartWidget {
    service: ChartService,
    surface: WebCanvasSurface,
}

#[wasm_bindgen]
impl ChartWidget {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, device_pixel_ratio: Option<f64>, config_json: Option<String>) -> Result<ChartWidget, JsValue> {
        let config = load_config(config_json)?;
        let scale = device_pixel_ratio.unwrap_or(config.chart.device_pixel_ratio);
        let surface = WebCanvasSurface::attach(canvas_id, scale).map_err(to_js)?;
        let service = ChartService::new(config.chart).map_err(to_js)?;

        log_info!(LogComponent::Presentation("ChartWidget"), "🚀 Chart attached to #{} @ {}x", canvas_id, scale);
        Ok(Self { service, surface })
    }

    /// Switch asset; repaints only when it actually changed
    #[wasm_bindgen(js_name = setAsset)]
    pub fn set_asset(&mut self, asset: &str) -> Result<bool, JsValue> {
        let changed = self.service.set_asset(Asset::from(asset));
        if changed {
            self.render()?;
        }
        Ok(changed)
    }

    /// Switch theme (`"light"` or `"dark"`); repaints only when it changed
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, theme: &str) -> Result<bool, JsValue> {
        let theme = Theme::from_str(theme)
            .map_err(|_| JsValue::from_str(&format!("unknown theme '{}'", theme)))?;
        let changed = self.service.set_theme(theme);
        if changed {
            self.render()?;
        }
        Ok(changed)
    }

    /// Re-read the canvas layout size, then repaint
    pub fn resize(&mut self) -> Result<String, JsValue> {
        self.surface.sync_size();
        self.render()
    }

    /// Run the pipeline; returns the render summary as JSON
    pub fn render(&mut self) -> Result<String, JsValue> {
        let summary = self.service.refresh(&mut self.surface).map_err(to_js)?;
        serde_json::to_string(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        self.service.theme().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn asset(&self) -> String {
        self.service.asset().to_string()
    }
}

/// Timer-driven signal simulation
#[wasm_bindgen]
pub struct SignalTicker {
    feed: Rc<RefCell<SignalFeed>>,
    rng: Rc<RefCell<StdRng>>,
    tick_interval_ms: u32,
    market_check_interval_ms: u32,
    ticker: Option<Interval>,
    market_watch: Option<Interval>,
}

#[wasm_bindgen]
impl SignalTicker {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<SignalTicker, JsValue> {
        let config = load_config(config_json)?;
        let feed = SignalFeed::new(&config.signals).map_err(to_js)?;

        Ok(Self {
            feed: Rc::new(RefCell::new(feed)),
            rng: Rc::new(RefCell::new(StdRng::from_entropy())),
            tick_interval_ms: config.signals.tick_interval_ms,
            market_check_interval_ms: config.signals.market_check_interval_ms,
            ticker: None,
            market_watch: None,
        })
    }

    #[wasm_bindgen(js_name = setAsset)]
    pub fn set_asset(&self, asset: &str) {
        self.feed.borrow_mut().set_asset(Asset::from(asset));
    }

    #[wasm_bindgen(js_name = setInvestment)]
    pub fn set_investment(&self, amount: Option<f64>) {
        self.feed.borrow_mut().set_investment(amount);
    }

    /// Start ticking; `on_signal` receives each new signal as JSON
    pub fn start(&mut self, on_signal: js_sys::Function) {
        let feed = Rc::clone(&self.feed);
        let rng = Rc::clone(&self.rng);

        self.ticker = Some(Interval::new(self.tick_interval_ms, move || {
            let outcome = feed.borrow_mut().tick(local_now(), &mut *rng.borrow_mut());
            if let TickOutcome::Emitted(signal) = outcome {
                match serde_json::to_string(&signal) {
                    Ok(json) => notify(&on_signal, &json, "signal"),
                    Err(e) => log_error!(
                        LogComponent::Presentation("SignalTicker"),
                        "❌ Failed to serialize signal: {}",
                        e
                    ),
                }
            }
        }));
    }

    /// Call `on_event("opened" | "closed")` at session boundaries
    #[wasm_bindgen(js_name = watchMarket)]
    pub fn watch_market(&mut self, on_event: js_sys::Function) {
        let feed = Rc::clone(&self.feed);

        self.market_watch = Some(Interval::new(self.market_check_interval_ms, move || {
            let event = match feed.borrow().market_event(local_now()) {
                Some(MarketEvent::Opened) => "opened",
                Some(MarketEvent::Closed) => "closed",
                None => return,
            };
            notify(&on_event, event, "market event");
        }));
    }

    /// Cancel both timers; dropping an `Interval` clears it
    pub fn stop(&mut self) {
        self.ticker = None;
        self.market_watch = None;
    }

    /// History as a JSON array, newest first
    pub fn history(&self) -> Result<String, JsValue> {
        let feed = self.feed.borrow();
        let records: Vec<_> = feed.history().iter().collect();
        serde_json::to_string(&records).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = isMarketOpen)]
    pub fn is_market_open(&self) -> bool {
        self.feed.borrow().is_market_open(local_now())
    }
}
