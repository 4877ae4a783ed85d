use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::ChartConfig;
use crate::domain::{
    chart::Theme,
    errors::DomainResult,
    logging::{self, LogComponent, LogEntry, LogLevel},
    market_data::{Asset, Price, Series, SeriesGenerator, moving_average},
};
use crate::infrastructure::rendering::{CandlestickRenderer, Surface, ensure_drawable};
use crate::log_info;

/// What one pipeline run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSummary {
    pub asset: Asset,
    pub theme: Theme,
    pub bar_count: usize,
    pub ma_points: usize,
    pub last_close: Price,
}

/// Application service driving `generate → moving_average → render`.
///
/// Holds the two trigger inputs (asset and theme). Every refresh rebuilds
/// the series from scratch; nothing is cached between renders.
pub struct ChartService<R: Rng = StdRng> {
    config: ChartConfig,
    generator: SeriesGenerator,
    renderer: CandlestickRenderer,
    asset: Asset,
    theme: Theme,
    rng: R,
    renders: u64,
}

impl ChartService<StdRng> {
    /// Service drawing from OS entropy
    pub fn new(config: ChartConfig) -> DomainResult<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Reproducible service for tests and demos
    pub fn seeded(config: ChartConfig, seed: u64) -> DomainResult<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ChartService<R> {
    pub fn with_rng(config: ChartConfig, rng: R) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            generator: SeriesGenerator::from_config(&config)?,
            renderer: CandlestickRenderer::from_config(&config),
            config,
            asset: Asset::default(),
            theme: Theme::default(),
            rng,
            renders: 0,
        })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Returns true when the asset changed and a refresh is due
    pub fn set_asset(&mut self, asset: Asset) -> bool {
        if self.asset == asset {
            return false;
        }
        log_info!(LogComponent::Application("ChartService"), "🔄 Asset switched {} -> {}", self.asset, asset);
        self.asset = asset;
        true
    }

    /// Returns true when the theme changed and a refresh is due
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if self.theme == theme {
            return false;
        }
        self.theme = theme;
        true
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Fresh series for the current asset
    pub fn build_series(&mut self) -> DomainResult<Series> {
        let (count, start) = (self.config.bar_count, self.config.start_price);
        if self.config.seed_by_asset {
            let mut rng = StdRng::seed_from_u64(self.asset.seed());
            self.generator.generate(count, start, &mut rng)
        } else {
            self.generator.generate(count, start, &mut self.rng)
        }
    }

    /// Run the whole pipeline onto `surface`.
    ///
    /// An unusable surface is rejected before any random draw or paint.
    pub fn refresh<S: Surface + ?Sized>(&mut self, surface: &mut S) -> DomainResult<RenderSummary> {
        ensure_drawable(surface)?;

        let series = self.build_series()?;
        let ma = moving_average(&series, self.config.ma_window)?;
        self.renderer.render(surface, &series, &ma, self.theme)?;
        self.renders += 1;

        let summary = RenderSummary {
            asset: self.asset.clone(),
            theme: self.theme,
            bar_count: series.len(),
            ma_points: ma.len(),
            last_close: series.latest_price().unwrap_or(Price::from(self.config.start_price)),
        };

        if logging::enabled(LogLevel::Debug) {
            logging::emit(
                LogEntry::new(LogLevel::Debug, LogComponent::Application("ChartService"), "render complete")
                    .field("render", self.renders)
                    .field("asset", &summary.asset)
                    .field("theme", summary.theme)
                    .field("bars", summary.bar_count)
                    .field("ma_points", summary.ma_points)
                    .field("close", summary.last_close.label()),
            );
        }
        Ok(summary)
    }
}
