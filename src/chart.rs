use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::{FontDesc, FontFamily, FontStyle, FontTransform};
use serde_json::json;

use crate::constants::{
    CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX, CHART_TITLE, MAX_X_TICKS, OUTPUT_PATH, X_AXIS_LABEL,
    Y_AXIS_LABEL,
};
use crate::generator::{self, GeneratorConfig};
use crate::logging;
use crate::table::RevenueTable;

/// Everything visual lives here so a render call carries its own styling
/// instead of mutating process-wide state.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub grid: RGBColor,
    pub annotation: RGBColor,
    pub palette: Vec<RGBColor>,
    pub stroke_width: u32,
    pub marker_size: u32,
    pub title_font_size: f64,
    pub axis_font_size: f64,
    pub tick_font_size: f64,
    pub annotation_font_size: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH_PX,
            height: CANVAS_HEIGHT_PX,
            background: RGBColor(255, 255, 255),
            grid: RGBColor(220, 220, 225),
            annotation: RGBColor(128, 128, 128),
            // Qualitative palette, one entry per region in declaration order.
            palette: vec![
                RGBColor(31, 119, 180),
                RGBColor(255, 127, 14),
                RGBColor(44, 160, 44),
            ],
            stroke_width: 2,
            marker_size: 3,
            title_font_size: 16.0,
            axis_font_size: 12.0,
            tick_font_size: 10.0,
            annotation_font_size: 10.0,
        }
    }
}

impl ChartStyle {
    pub fn series_color(&self, index: usize) -> RGBColor {
        self.palette[index % self.palette.len()]
    }
}

/// Run the whole pipeline: generate observations, assemble the table,
/// render the chart and write it into the process working directory.
pub fn run() -> Result<()> {
    logging::info_simple("pipeline.start", "Generating seasonal revenue dataset");

    let config = GeneratorConfig::default();
    let observations = generator::generate(&config)?;
    let table = RevenueTable::from_observations(observations);
    logging::info(
        "generate.complete",
        "Synthesized revenue observations",
        json!({ "rows": table.len(), "regions": table.regions().len() }),
    );

    if let Some((peak, average)) = table.peak_month() {
        logging::info(
            "table.peak_month",
            "Located month with highest cross-region average revenue",
            json!({ "month": peak.format("%Y-%m").to_string(), "average": average }),
        );
    }

    let style = ChartStyle::default();
    render_to_file(&table, &style, Path::new(OUTPUT_PATH))?;
    logging::info(
        "chart.saved",
        "Revenue chart written",
        json!({ "path": OUTPUT_PATH, "width": style.width, "height": style.height }),
    );

    Ok(())
}

/// Render `table` as an annotated multi-series line chart and write the
/// PNG to `path`. Pure with respect to the table; the drawing surface is
/// scope-owned, so it is released on every exit path.
pub fn render_to_file(table: &RevenueTable, style: &ChartStyle, path: &Path) -> Result<()> {
    if table.is_empty() {
        bail!("observation table is empty; nothing to render");
    }

    let regions = table.regions();
    let (first_month, last_month) = date_bounds(table).context("date bounds of observation table")?;
    let (min_revenue, max_revenue) = table
        .revenue_bounds()
        .context("revenue bounds of observation table")?;
    let (peak_month, peak_average) = table
        .peak_month()
        .context("peak month of observation table")?;

    // Pad the ranges so edge markers and the peak label stay inside the
    // plot area.
    let x_range = (first_month - Duration::days(10))..(last_month + Duration::days(10));
    let y_floor = min_revenue - 20.0;
    let y_ceil = max_revenue + 60.0;

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&style.background)?;

    let title_font = FontDesc::new(
        FontFamily::SansSerif,
        style.title_font_size,
        FontStyle::Bold,
    );
    let axis_font = FontDesc::new(
        FontFamily::SansSerif,
        style.axis_font_size,
        FontStyle::Normal,
    );
    let tick_font = FontDesc::new(
        FontFamily::SansSerif,
        style.tick_font_size,
        FontStyle::Normal,
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, title_font)
        .margin(10)
        .x_label_area_size(56)
        .y_label_area_size(48)
        .build_cartesian_2d(x_range, y_floor..y_ceil)?;

    chart
        .configure_mesh()
        .bold_line_style(style.grid.stroke_width(1))
        .light_line_style(TRANSPARENT)
        .x_labels(MAX_X_TICKS)
        .x_label_formatter(&|date| date.format("%Y-%m").to_string())
        .y_label_formatter(&|revenue| format!("{revenue:.0}"))
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .axis_desc_style(axis_font.clone())
        .label_style(tick_font.clone())
        .x_label_style(tick_font.clone().transform(FontTransform::Rotate90))
        .draw()?;

    // Heading row for the legend box; the region entries follow in
    // declaration order.
    chart
        .draw_series(std::iter::empty::<Circle<(NaiveDate, f64), i32>>())?
        .label("Region")
        .legend(|_| PathElement::new(Vec::new(), TRANSPARENT));

    for (index, &region) in regions.iter().enumerate() {
        let color = style.series_color(index);
        let series = table.series_for(region);
        chart
            .draw_series(
                LineSeries::new(series, color.filled().stroke_width(style.stroke_width))
                    .point_size(style.marker_size),
            )?
            .label(region.to_string())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    // Vertical reference at the peak month with a rotated label beside it.
    chart.draw_series(DashedLineSeries::new(
        vec![(peak_month, y_floor), (peak_month, y_ceil)],
        5,
        4,
        style.annotation.stroke_width(1),
    ))?;
    let annotation_font = FontDesc::new(
        FontFamily::SansSerif,
        style.annotation_font_size,
        FontStyle::Normal,
    )
    .transform(FontTransform::Rotate270)
    .color(&style.annotation);
    chart.draw_series(std::iter::once(Text::new(
        format!("Peak Avg: {}", peak_month.format("%Y-%m")),
        (peak_month, peak_average + 30.0),
        annotation_font,
    )))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(style.background.mix(0.8))
        .border_style(style.annotation)
        .label_font(tick_font)
        .draw()?;

    root.present()
        .with_context(|| format!("failed to write chart to {}", path.display()))?;
    Ok(())
}

fn date_bounds(table: &RevenueTable) -> Option<(NaiveDate, NaiveDate)> {
    let first = table
        .observations()
        .iter()
        .map(|observation| observation.date)
        .min()?;
    let last = table
        .observations()
        .iter()
        .map(|observation| observation.date)
        .max()?;
    Some((first, last))
}
