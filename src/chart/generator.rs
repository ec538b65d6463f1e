//! SVG dashboard generation.
//!
//! The dashboard is written as plain SVG text, one panel per derived
//! series, on a 3x2 grid:
//!
//! | feeds per day      | volume per day + trend |
//! | hour vs day bubble | time between feeds     |
//! | weight for age     | feeds per hour         |
//!
//! Panels with no data render a placeholder instead of failing the chart.

use crate::aggregator::{ordinal_label, Aggregates, COLOR_PALETTE};
use crate::reference::{PercentileTable, MEDIAN_INDEX, PERCENTILE_COLORS, PERCENTILE_LABELS};
use crate::utils::error::ChartError;
use log::{debug, info};

/// Reference lines on the time-between-feeds panel (hours, colour)
const GAP_GUIDES: [(f64, &str); 3] = [(10.0, "red"), (8.0, "blue"), (6.0, "orange")];

/// Show every n-th day label on the per-day panels
const DAY_LABEL_STEP: usize = 5;

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Feeding tracking".to_string(),
            width: 1000,
            height: 1050,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Pixel rectangle of one panel's plotting area
#[derive(Debug, Clone, Copy)]
struct Area {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Area {
    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Data range of one axis
#[derive(Debug, Clone, Copy)]
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    fn new(min: f64, max: f64) -> Self {
        if (max - min).abs() < f64::EPSILON {
            Self { min, max: min + 1.0 }
        } else {
            Self { min, max }
        }
    }

    /// `0..max(values)` with some headroom
    fn from_zero(values: impl Iterator<Item = f64>) -> Self {
        let max = values.fold(0.0, f64::max);
        Self::new(0.0, if max > 0.0 { max * 1.1 } else { 1.0 })
    }

    fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

/// Maps data coordinates into an area
#[derive(Debug, Clone, Copy)]
struct Plot {
    area: Area,
    x: Range,
    y: Range,
}

impl Plot {
    fn px(&self, x: f64) -> f64 {
        self.area.left + self.x.fraction(x) * self.area.width
    }

    fn py(&self, y: f64) -> f64 {
        self.area.bottom() - self.y.fraction(y) * self.area.height
    }
}

/// Generate the SVG dashboard
///
/// **Public** - main entry point for chart rendering
///
/// # Arguments
/// * `aggregates` - Pipeline output
/// * `percentiles` - Optional weight-for-age curves for the growth panel
/// * `config` - Title and canvas size (defaults if `None`)
///
/// # Errors
/// * `ChartError::EmptySeries` - The log has no rows at all
pub fn generate_chart(
    aggregates: &Aggregates,
    percentiles: Option<&PercentileTable>,
    config: Option<&ChartConfig>,
) -> Result<String, ChartError> {
    if aggregates.days.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let config = config.cloned().unwrap_or_default();
    info!("Rendering dashboard for {} days", aggregates.days.len());

    let title_height = 40.0;
    let cell_w = config.width as f64 / 2.0;
    let cell_h = (config.height as f64 - title_height) / 3.0;
    let cell = |row: usize, col: usize| Area {
        left: col as f64 * cell_w + 60.0,
        top: title_height + row as f64 * cell_h + 30.0,
        width: cell_w - 90.0,
        height: cell_h - 110.0,
    };

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = config.width,
        h = config.height
    ));
    svg.push_str(r#"<rect x="0" y="0" width="100%" height="100%" fill="white"/>"#);
    svg.push_str(
        r#"<style>text { font-family: sans-serif; } .tick { font-size: 9px; } .label { font-size: 11px; } .title { font-size: 13px; font-weight: bold; }</style>"#,
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="26" font-size="18" text-anchor="middle" font-weight="bold">{}</text>"#,
        config.width / 2,
        escape_xml(&config.title)
    ));

    render_feeds_per_day(&mut svg, cell(0, 0), aggregates);
    render_daily_volume(&mut svg, cell(0, 1), aggregates);
    render_bubbles(&mut svg, cell(1, 0), aggregates);
    render_gaps(&mut svg, cell(1, 1), aggregates);
    render_growth(&mut svg, cell(2, 0), aggregates, percentiles);
    if let Some(bins) = &aggregates.hourly {
        render_hourly(&mut svg, cell(2, 1), bins);
    }

    svg.push_str("</svg>");

    info!("Dashboard generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

fn render_feeds_per_day(out: &mut String, area: Area, aggregates: &Aggregates) {
    let counts = &aggregates.feeds_per_day;
    let plot = Plot {
        area,
        x: Range::new(0.0, counts.len() as f64),
        y: Range::from_zero(counts.iter().map(|c| *c as f64)),
    };

    render_frame(out, &plot, "Number of feeds per day", None, Some("Number of feeds"));
    render_y_ticks(out, &plot);

    let slot = area.width / counts.len().max(1) as f64;
    for (i, count) in counts.iter().enumerate() {
        let top = plot.py(*count as f64);
        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="steelblue"/>"#,
            plot.px(i as f64) + slot * 0.1,
            top,
            slot * 0.8,
            area.bottom() - top
        ));
    }

    let centers: Vec<f64> = (0..counts.len()).map(|i| plot.px(i as f64) + slot / 2.0).collect();
    render_day_labels(out, &area, &centers, &aggregates.days);
}

fn render_daily_volume(out: &mut String, area: Area, aggregates: &Aggregates) {
    let volumes = aggregates.daily_volumes();
    if volumes.is_empty() {
        render_placeholder(out, area, "Milk intake per day", "No complete day yet");
        return;
    }

    let plot = Plot {
        area,
        x: Range::new(-0.5, volumes.len() as f64 - 0.5),
        y: Range::from_zero(volumes.iter().chain(aggregates.trend.iter()).copied()),
    };

    render_frame(out, &plot, "Milk intake per day", None, Some("Milk [litre]"));
    render_y_ticks(out, &plot);

    for (i, volume) in volumes.iter().enumerate() {
        out.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="3" fill="steelblue"/>"#,
            plot.px(i as f64),
            plot.py(*volume)
        ));
    }

    // Trend values are plotted from index 0, not centred on their window
    let trend: Vec<(f64, f64)> = aggregates
        .trend
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, *v))
        .collect();
    render_polyline(out, &plot, &trend, "red", None);

    let centers: Vec<f64> = (0..volumes.len()).map(|i| plot.px(i as f64)).collect();
    let dates: Vec<String> = aggregates.daily.items.iter().map(|b| b.date.clone()).collect();
    render_day_labels(out, &area, &centers, &dates);

    render_legend(out, area.right() - 120.0, area.top + 8.0, &[("moving average", "red", false)]);
}

fn render_bubbles(out: &mut String, area: Area, aggregates: &Aggregates) {
    let events = &aggregates.events.items;
    if events.is_empty() {
        render_placeholder(out, area, "Feeds: hour vs day", "No feeds logged");
        return;
    }

    // Room on the right for the ordinal legend
    let plot = Plot {
        area,
        x: Range::new(-1.0, 32.0),
        y: Range::new(-1.0, events.len() as f64),
    };

    render_frame(out, &plot, "Feeds: hour vs day", Some("Hour"), None);

    for hour in (0..=24).step_by(2) {
        let x = plot.px(hour as f64);
        let wall = (hour as f64 - aggregates.shift_hours).rem_euclid(24.0);
        out.push_str(&format!(
            r##"<line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="#dddddd"/><text x="{x:.2}" y="{:.2}" class="tick" text-anchor="end" transform="rotate(-45 {x:.2} {:.2})">{:02}:{:02}</text>"##,
            area.top,
            area.bottom(),
            area.bottom() + 12.0,
            area.bottom() + 12.0,
            wall.floor() as u32,
            ((wall.fract() * 60.0).round() as u32).min(59),
            x = x
        ));
    }

    for (i, (event, hour)) in events.iter().zip(&aggregates.shifted_hours).enumerate() {
        out.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="0.8"/>"#,
            plot.px(*hour),
            plot.py(i as f64),
            event.bubble_size().sqrt() / 2.0,
            event.color()
        ));
    }

    // Date label roughly every eighth of the log
    let step = (events.len() / 8).max(1);
    for i in (0..events.len()).step_by(step) {
        let y = plot.py(i as f64);
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" class="tick" text-anchor="end">{}</text>"#,
            area.left - 4.0,
            y + 3.0,
            escape_xml(&events[i].date)
        ));
    }

    let labels: Vec<(String, &str)> = COLOR_PALETTE
        .iter()
        .enumerate()
        .map(|(i, color)| (ordinal_label(i), *color))
        .collect();
    let entries: Vec<(&str, &str, bool)> = labels
        .iter()
        .map(|(label, color)| (label.as_str(), *color, true))
        .collect();
    render_legend(out, plot.px(25.5), area.top + 4.0, &entries);
}

fn render_gaps(out: &mut String, area: Area, aggregates: &Aggregates) {
    let gaps = &aggregates.gaps;
    if gaps.is_empty() {
        render_placeholder(out, area, "Time between feeds", "Fewer than two feeds");
        return;
    }

    let plot = Plot {
        area,
        x: Range::new(0.0, (gaps.len() - 1).max(1) as f64),
        y: Range::from_zero(gaps.iter().copied().chain(std::iter::once(10.0))),
    };

    render_frame(out, &plot, "Time between feeds", None, Some("Time [hours]"));
    render_y_ticks(out, &plot);

    let points: Vec<(f64, f64)> = gaps.iter().enumerate().map(|(i, g)| (i as f64, *g)).collect();
    render_polyline(out, &plot, &points, "steelblue", None);

    let mut legend = Vec::new();
    let guide_labels: Vec<String> = GAP_GUIDES.iter().map(|(h, _)| format!("{} hours", h)).collect();
    for ((hours, color), label) in GAP_GUIDES.iter().zip(&guide_labels) {
        let y = plot.py(*hours);
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}" stroke-dasharray="6,4"/>"#,
            area.left,
            area.right(),
            color,
            y = y
        ));
        legend.push((label.as_str(), *color, false));
    }
    render_legend(out, area.right() - 90.0, area.top + 8.0, &legend);

    // Gap i ends at event i + 1; label with that event's date
    let events = &aggregates.events.items;
    let step = (gaps.len() / 6).max(1);
    for i in (0..gaps.len()).step_by(step) {
        let Some(event) = events.get(i + 1) else {
            break;
        };
        let x = plot.px(i as f64);
        out.push_str(&format!(
            r#"<text x="{x:.2}" y="{:.2}" class="tick" text-anchor="end" transform="rotate(-90 {x:.2} {:.2})">{}</text>"#,
            area.bottom() + 6.0,
            area.bottom() + 6.0,
            escape_xml(&event.date),
            x = x
        ));
    }
}

fn render_growth(
    out: &mut String,
    area: Area,
    aggregates: &Aggregates,
    percentiles: Option<&PercentileTable>,
) {
    let Some(growth) = aggregates.growth.as_ref().filter(|g| !g.is_empty()) else {
        render_placeholder(out, area, "Weight", "No growth records");
        return;
    };

    let (last_age, last_weight) = growth
        .items
        .last()
        .map(|r| (r.age_months, r.weight))
        .unwrap_or((0.0, 0.0));

    let plot = Plot {
        area,
        x: Range::new(-0.02, last_age + 2.0),
        y: Range::new(1.8, last_weight + 3.0),
    };

    render_frame(out, &plot, "Weight", Some("Age [months]"), Some("Weight [kg]"));
    render_y_ticks(out, &plot);
    render_x_ticks(out, &plot);

    let mut legend: Vec<(&str, &str, bool)> = vec![("measured", "red", false)];

    if let Some(table) = percentiles {
        let clip_id = "growth-clip";
        out.push_str(&format!(
            r#"<clipPath id="{}"><rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/></clipPath>"#,
            clip_id, area.left, area.top, area.width, area.height
        ));
        for (index, (label, color)) in PERCENTILE_LABELS.iter().zip(PERCENTILE_COLORS).enumerate() {
            let dash = (index != MEDIAN_INDEX).then_some("5,3");
            out.push_str(&format!(r#"<g clip-path="url(#{})">"#, clip_id));
            render_polyline(out, &plot, &table.curve(index), color, dash);
            out.push_str("</g>");
            legend.push((*label, color, false));
        }
    }

    let points: Vec<(f64, f64)> = growth.items.iter().map(|r| (r.age_months, r.weight)).collect();
    out.push_str(r#"<g stroke-width="3">"#);
    render_polyline(out, &plot, &points, "red", None);
    out.push_str("</g>");
    for (x, y) in &points {
        out.push_str(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="4" fill="red"/>"#,
            plot.px(*x),
            plot.py(*y)
        ));
    }

    render_legend(out, area.left + 8.0, area.top + 8.0, &legend);
}

fn render_hourly(out: &mut String, area: Area, bins: &[u32; 24]) {
    let plot = Plot {
        area,
        x: Range::new(0.0, 24.0),
        y: Range::from_zero(bins.iter().map(|c| *c as f64)),
    };

    render_frame(out, &plot, "Feeds per hour", Some("Hour"), Some("Number of feeds"));
    render_y_ticks(out, &plot);

    let slot = area.width / 24.0;
    for (hour, count) in bins.iter().enumerate() {
        let top = plot.py(*count as f64);
        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="darkorange"/>"#,
            plot.px(hour as f64) + slot * 0.1,
            top,
            slot * 0.8,
            area.bottom() - top
        ));
    }
    for hour in (0..24).step_by(3) {
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" class="tick" text-anchor="middle">{:02}</text>"#,
            plot.px(hour as f64) + slot / 2.0,
            area.bottom() + 12.0,
            hour
        ));
    }
}

/// Axes box, title and axis labels
fn render_frame(out: &mut String, plot: &Plot, title: &str, x_label: Option<&str>, y_label: Option<&str>) {
    let area = plot.area;
    out.push_str(&format!(
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black"/>"#,
        area.left, area.top, area.width, area.height
    ));
    out.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" class="title" text-anchor="middle">{}</text>"#,
        area.left + area.width / 2.0,
        area.top - 8.0,
        escape_xml(title)
    ));
    if let Some(label) = x_label {
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" class="label" text-anchor="middle">{}</text>"#,
            area.left + area.width / 2.0,
            area.bottom() + 44.0,
            escape_xml(label)
        ));
    }
    if let Some(label) = y_label {
        let x = area.left - 42.0;
        let y = area.top + area.height / 2.0;
        out.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" class="label" text-anchor="middle" transform="rotate(-90 {x:.2} {y:.2})">{}</text>"#,
            escape_xml(label),
            x = x,
            y = y
        ));
    }
}

fn render_y_ticks(out: &mut String, plot: &Plot) {
    for value in tick_values(plot.y) {
        let y = plot.py(value);
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="black"/><text x="{:.2}" y="{:.2}" class="tick" text-anchor="end">{}</text>"#,
            plot.area.left - 4.0,
            plot.area.left,
            plot.area.left - 6.0,
            y + 3.0,
            format_tick(value),
            y = y
        ));
    }
}

fn render_x_ticks(out: &mut String, plot: &Plot) {
    for value in tick_values(plot.x) {
        let x = plot.px(value);
        out.push_str(&format!(
            r#"<line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="black"/><text x="{x:.2}" y="{:.2}" class="tick" text-anchor="middle">{}</text>"#,
            plot.area.bottom(),
            plot.area.bottom() + 4.0,
            plot.area.bottom() + 14.0,
            format_tick(value),
            x = x
        ));
    }
}

/// Rotated labels for every `DAY_LABEL_STEP`-th day
fn render_day_labels(out: &mut String, area: &Area, centers: &[f64], dates: &[String]) {
    for (x, date) in centers.iter().zip(dates).step_by(DAY_LABEL_STEP) {
        let y = area.bottom() + 6.0;
        out.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" class="tick" text-anchor="end" transform="rotate(-90 {x:.2} {y:.2})">{}</text>"#,
            escape_xml(date),
            x = x,
            y = y
        ));
    }
}

fn render_polyline(out: &mut String, plot: &Plot, points: &[(f64, f64)], color: &str, dash: Option<&str>) {
    if points.is_empty() {
        return;
    }

    let coords: Vec<String> = points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", plot.px(*x), plot.py(*y)))
        .collect();
    let dash_attr = dash
        .map(|d| format!(r#" stroke-dasharray="{}""#, d))
        .unwrap_or_default();

    out.push_str(&format!(
        r#"<polyline points="{}" fill="none" stroke="{}"{}/>"#,
        coords.join(" "),
        color,
        dash_attr
    ));
}

/// Legend box: swatch (dot or line) and label per entry
fn render_legend(out: &mut String, x: f64, y: f64, entries: &[(&str, &str, bool)]) {
    for (i, (label, color, dot)) in entries.iter().enumerate() {
        let row_y = y + i as f64 * 13.0;
        if *dot {
            out.push_str(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="4" fill="{}"/>"#,
                x + 5.0,
                row_y + 5.0,
                color
            ));
        } else {
            out.push_str(&format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="2"/>"#,
                x,
                row_y + 5.0,
                x + 12.0,
                row_y + 5.0,
                color
            ));
        }
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" class="tick">{}</text>"#,
            x + 16.0,
            row_y + 8.0,
            escape_xml(label)
        ));
    }
}

fn render_placeholder(out: &mut String, area: Area, title: &str, message: &str) {
    debug!("Panel '{}' has no data", title);
    let plot = Plot {
        area,
        x: Range::new(0.0, 1.0),
        y: Range::new(0.0, 1.0),
    };
    render_frame(out, &plot, title, None, None);
    out.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" class="label" text-anchor="middle" fill="gray">{}</text>"#,
        area.left + area.width / 2.0,
        area.top + area.height / 2.0,
        escape_xml(message)
    ));
}

/// Five evenly spaced ticks across a range
fn tick_values(range: Range) -> Vec<f64> {
    let step = (range.max - range.min) / 4.0;
    (0..5).map(|i| range.min + step * i as f64).collect()
}

fn format_tick(value: f64) -> String {
    if value.abs() >= 10.0 || value.fract().abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Escape text content for SVG
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{run_pipeline, PipelineConfig};
    use crate::cache::{ColumnKey, SheetColumns};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn sample(config: &PipelineConfig) -> Aggregates {
        let columns = SheetColumns::new()
            .with(
                ColumnKey::Dates,
                strings(&["01.01", "01.01", "02.01", "02.01", "03.01", "04.01"]),
            )
            .with(
                ColumnKey::FeedHour,
                strings(&["1:00", "7:30", "2:00", "23:00", "6:00", "5:00"]),
            )
            .with(
                ColumnKey::Volume,
                strings(&["0,1", "0,12", "0,1", "0,15", "0,1", "0,2"]),
            )
            .with(ColumnKey::AgeMonths, strings(&["0", "1"]))
            .with(ColumnKey::Weight, strings(&["3,3", "4,1"]));

        run_pipeline(&columns, config).unwrap()
    }

    #[test]
    fn test_generate_chart() {
        let aggregates = sample(&PipelineConfig::default());

        let svg = generate_chart(&aggregates, None, None).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Number of feeds per day"));
        assert!(svg.contains("Time between feeds"));
        assert!(svg.contains("1st"));
        assert!(!svg.contains("Feeds per hour"));
    }

    #[test]
    fn test_hourly_panel_when_enabled() {
        let aggregates = sample(&PipelineConfig::default().with_hourly(true));
        let svg = generate_chart(&aggregates, None, None).unwrap();
        assert!(svg.contains("Feeds per hour"));
    }

    #[test]
    fn test_growth_placeholder() {
        let aggregates = sample(&PipelineConfig::default().with_growth(false));
        let svg = generate_chart(&aggregates, None, None).unwrap();
        assert!(svg.contains("No growth records"));
    }

    #[test]
    fn test_percentile_curves() {
        let table = PercentileTable::from_reader(
            "0,2.5,2.6,2.8,3.0,3.3,3.7,3.9,4.1,4.2\n1,3.4,3.6,3.8,4.1,4.5,4.9,5.1,5.3,5.5\n"
                .as_bytes(),
        )
        .unwrap();
        let aggregates = sample(&PipelineConfig::default());

        let svg = generate_chart(&aggregates, Some(&table), None).unwrap();

        assert!(svg.contains("97th"));
        assert!(svg.contains("darkviolet"));
    }

    #[test]
    fn test_empty_log() {
        let aggregates = run_pipeline(&SheetColumns::new(), &PipelineConfig::default()).unwrap();
        assert!(matches!(
            generate_chart(&aggregates, None, None),
            Err(ChartError::EmptySeries)
        ));
    }

    #[test]
    fn test_title_escaped() {
        let aggregates = sample(&PipelineConfig::default());
        let config = ChartConfig::new().with_title("Tom & Jerry");
        let svg = generate_chart(&aggregates, None, Some(&config)).unwrap();
        assert!(svg.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn test_dashboard_is_well_formed_svg() {
        let aggregates = sample(&PipelineConfig::default().with_hourly(true));
        let svg = generate_chart(&aggregates, None, None).unwrap();

        let png = crate::chart::rasterize_png(&svg).unwrap();

        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
