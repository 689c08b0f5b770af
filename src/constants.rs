//! Flat `pub const` parameter module: every fixed parameter of the
//! pipeline (seed, epoch, geometry, output path). Values transcribed from
//! the spec (`SPEC_FULL.md` §3–§4) / `DESIGN.md` grounding ledger.

/// RNG seed for the single `StdRng` that drives noise generation.
pub const RNG_SEED: u64 = 2025;

/// First month of the series: January 2022.
pub const EPOCH_YEAR: i32 = 2022;
pub const EPOCH_MONTH: u32 = 1;

/// Number of consecutive months in the series.
pub const MONTH_COUNT: usize = 24;

/// Standard deviation of the Gaussian noise term (σ).
pub const NOISE_STD_DEV: f64 = 20.0;

/// Total linear trend rise from the first index to the last.
pub const TREND_TOTAL_RISE: f64 = 80.0;

/// Amplitude of the sinusoidal seasonal component.
pub const SEASONAL_AMPLITUDE: f64 = 50.0;

/// Period of the seasonal cycle, in month indices.
pub const SEASONAL_PERIOD_MONTHS: usize = 12;

/// Output image geometry: 8 in × 8 in at 64 DPI ⇒ 512×512 px.
pub const CANVAS_WIDTH_PX: u32 = 512;
pub const CANVAS_HEIGHT_PX: u32 = 512;

/// Fixed relative output path for the rendered chart.
pub const OUTPUT_PATH: &str = "chart.png";

/// Chart caption and axis labels.
pub const CHART_TITLE: &str = "Seasonal Revenue by Region (Monthly) — 2-Year Period";
pub const X_AXIS_LABEL: &str = "Month";
pub const Y_AXIS_LABEL: &str = "Revenue (USD thousands)";

/// Maximum number of x-axis tick labels.
pub const MAX_X_TICKS: usize = 8;
