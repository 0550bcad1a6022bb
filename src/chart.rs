//! Chart drawing surfaces
//!
//! Analytics hands labelled series to a `ChartSurface`; the surface owns
//! layout. `TextSurface` draws horizontal ASCII bars for terminal output.

use crate::analytics::{BarChart, ChartSet, ProportionChart, TrendChart};
use crate::theme::Theme;

/// Width of the longest bar, in characters
pub const DEFAULT_BAR_WIDTH: usize = 30;

/// Something that can draw the three analytics charts
pub trait ChartSurface {
    fn draw_bar(&mut self, chart: &BarChart);
    fn draw_proportion(&mut self, chart: &ProportionChart);
    fn draw_trend(&mut self, chart: &TrendChart);
}

/// Draw every chart in the set, in display order
pub fn draw_all(charts: &ChartSet, surface: &mut dyn ChartSurface) {
    surface.draw_bar(&charts.bar);
    surface.draw_proportion(&charts.proportion);
    surface.draw_trend(&charts.trend);
}

/// Renders charts as text
#[derive(Debug, Clone)]
pub struct TextSurface {
    out: String,
    width: usize,
    theme: Theme,
}

impl TextSurface {
    pub fn new(theme: Theme) -> Self {
        Self {
            out: String::new(),
            width: DEFAULT_BAR_WIDTH,
            theme,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn title(&mut self, title: &str) {
        self.out
            .push_str(&format!("{}\n", self.theme.heading.apply_to(title)));
    }

    fn bar(&self, value: f64, max: f64) -> String {
        if max <= 0.0 || value <= 0.0 {
            return String::new();
        }
        let len = ((value / max) * self.width as f64).round() as usize;
        "█".repeat(len.max(1))
    }
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0)
}

fn max_value(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, f64::max)
}

impl ChartSurface for TextSurface {
    fn draw_bar(&mut self, chart: &BarChart) {
        self.title(&chart.title);

        let pad = label_width(chart.labels.iter().map(String::as_str));
        let max = max_value(chart.series.iter().flat_map(|s| s.values.iter().copied()));

        for (i, label) in chart.labels.iter().enumerate() {
            for (s, series) in chart.series.iter().enumerate() {
                let value = series.values.get(i).copied().unwrap_or(0.0);
                let name = if s == 0 { label.as_str() } else { "" };
                let bar = self.bar(value, max);
                let bar = if s == 0 {
                    self.theme.accent.apply_to(bar).to_string()
                } else {
                    self.theme.low_stock.apply_to(bar).to_string()
                };
                self.out.push_str(&format!(
                    "  {:<pad$}  {:<15} {} {}\n",
                    name,
                    series.label,
                    bar,
                    value,
                    pad = pad
                ));
            }
        }
        self.out.push('\n');
    }

    fn draw_proportion(&mut self, chart: &ProportionChart) {
        self.title(&chart.title);

        let pad = label_width(chart.slices.iter().map(|s| s.label.as_str()));
        for slice in &chart.slices {
            let bar = self.bar(slice.share, 1.0);
            self.out.push_str(&format!(
                "  {:<pad$}  {} {:.1}% ({})\n",
                slice.label,
                self.theme.accent.apply_to(bar),
                slice.share * 100.0,
                slice.value,
                pad = pad
            ));
        }
        self.out.push('\n');
    }

    fn draw_trend(&mut self, chart: &TrendChart) {
        let title = if chart.synthetic {
            format!("{} (synthetic placeholder, no history)", chart.title)
        } else {
            chart.title.clone()
        };
        self.title(&title);

        let max = max_value(chart.values.iter().map(|v| *v as f64));
        for (label, value) in chart.labels.iter().zip(&chart.values) {
            let bar = self.bar(*value as f64, max);
            self.out.push_str(&format!(
                "  {}  {} {}\n",
                label,
                self.theme.muted.apply_to(bar),
                value
            ));
        }
        self.out.push('\n');
    }
}
