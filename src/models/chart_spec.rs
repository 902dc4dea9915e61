use serde::Serialize;

/// Renderable description of one chart: its series plus every layout decision.
///
/// Built fresh by the chart builders on each interaction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpecification {
    pub kind: ChartKind,
    pub title: ChartTitle,
    pub series: Vec<SeriesSpec>,
    pub x_axis: Option<AxisSpec>,
    pub y_axis: Option<AxisSpec>,
    pub show_legend: bool,
    pub legend: LegendSpec,
    pub margin: Margin,
    /// Colors assigned by position to series (or to slices, for donuts)
    pub palette: Vec<&'static str>,
    pub background: &'static str,
}

impl ChartSpecification {
    pub fn series_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }

    /// Inner radius of the ring as a fraction of the outer radius, for donut charts.
    pub fn hole(&self) -> Option<f64> {
        match self.kind {
            ChartKind::Donut { hole } => Some(hole),
            ChartKind::Line | ChartKind::GroupedBar => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    GroupedBar,
    Donut { hole: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTitle {
    pub text: String,
    pub font_size: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSpec {
    pub name: String,
    /// Explicit series color; `None` lets the palette decide.
    pub color: Option<&'static str>,
    pub line_width: Option<f64>,
    pub marker: Option<Marker>,
    pub points: Vec<DataPoint>,
    pub hover: HoverTemplate,
    pub hover_label: HoverLabel,
    pub slice_text: Option<SliceText>,
}

impl SeriesSpec {
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSymbol {
    Circle,
    Diamond,
    Square,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub symbol: MarkerSymbol,
    pub size: f64,
    pub outline_width: f64,
    pub outline_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverLabel {
    pub background: &'static str,
    pub border: Option<&'static str>,
    pub font_size: u32,
}

/// Text drawn next to each donut slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliceText {
    pub show_label: bool,
    pub show_percent: bool,
    pub outside: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub title: String,
    pub show_grid: bool,
    pub grid_color: Option<&'static str>,
    pub grid_width: f64,
    /// Fixed `(min, max)`; `None` autoscales.
    pub range: Option<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum XAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YAnchor {
    Top,
    Middle,
    Bottom,
}

/// Legend placement in paper coordinates: (0, 0) is the bottom-left of the plot
/// area, (1, 1) the top-right. The anchors name the legend edge pinned to `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSpec {
    pub orientation: Orientation,
    pub x: f64,
    pub y: f64,
    pub x_anchor: XAnchor,
    pub y_anchor: YAnchor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

/// How a numeric hover field is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// Rounded to an integer with comma thousands separators: `36,755`
    Grouped,
    /// Two decimal places: `58.38`
    Fixed2,
}

impl ValueFormat {
    #[allow(clippy::cast_possible_truncation)]
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Grouped => group_thousands(value.round() as i64),
            ValueFormat::Fixed2 => format!("{value:.2}"),
        }
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverHeading {
    SeriesName,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverField {
    /// The x category, or the slice label on a donut
    Category,
    Value(ValueFormat),
    /// Share of the series total, 0-100
    Share(ValueFormat),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverRow {
    pub label: &'static str,
    pub field: HoverField,
    pub suffix: &'static str,
}

/// Hover text layout: a bold heading followed by one line per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverTemplate {
    pub heading: HoverHeading,
    pub rows: Vec<HoverRow>,
}

/// Values a hover template can refer to for a single data point.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverPoint<'a> {
    pub series: &'a str,
    pub category: &'a str,
    pub value: f64,
    pub share: f64,
}

impl HoverTemplate {
    pub fn render(&self, point: &HoverPoint<'_>) -> String {
        let heading = match self.heading {
            HoverHeading::SeriesName => point.series,
            HoverHeading::Category => point.category,
        };

        let mut text = format!("<b>{heading}</b>");
        for row in &self.rows {
            let value = match row.field {
                HoverField::Category => point.category.to_string(),
                HoverField::Value(format) => format.format(point.value),
                HoverField::Share(format) => format.format(point.share),
            };
            text.push_str(&format!("<br>{}: {}{}", row.label, value, row.suffix));
        }
        text
    }
}
