//! Chart builders: pure functions turning the dataset plus static styling into chart
//! specifications. None of them keep state between calls or modify their inputs.

use crate::models::chart_spec::{
    AxisSpec, ChartKind, ChartSpecification, ChartTitle, DataPoint, HoverField, HoverHeading,
    HoverLabel, HoverRow, HoverTemplate, LegendSpec, Margin, Marker, MarkerSymbol, Orientation,
    SeriesSpec, SliceText, ValueFormat, XAnchor, YAnchor,
};
use crate::models::dataset::{Dataset, RaceCategory, Region};

/// Look of one live-births line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTrace {
    pub region: Region,
    pub color: &'static str,
    pub width: f64,
    pub symbol: MarkerSymbol,
    pub marker_size: f64,
}

/// Static styling shared by all dashboard charts.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStyle {
    pub title_color: &'static str,
    pub title_size: u32,
    pub background: &'static str,
    pub grid_color: &'static str,
    pub hover_background: &'static str,
    pub hover_font_size: u32,
    pub margin: Margin,
    pub marker_outline: &'static str,
    /// Lines in drawing order
    pub line_traces: Vec<LineTrace>,
    /// Bar groups in drawing order, with their colors
    pub bar_regions: Vec<(Region, &'static str)>,
    /// Slice colors, assigned by position
    pub donut_palette: Vec<&'static str>,
    pub donut_hole: f64,
    pub donut_title_size: u32,
    pub donut_right_margin: u32,
}

impl Default for DashboardStyle {
    fn default() -> Self {
        Self {
            title_color: "#2c3e50",
            title_size: 18,
            background: "rgba(0,0,0,0)",
            grid_color: "rgba(128,128,128,0.2)",
            hover_background: "rgba(255,255,255,0.9)",
            hover_font_size: 12,
            margin: Margin {
                left: 50,
                right: 50,
                top: 80,
                bottom: 50,
            },
            marker_outline: "white",
            line_traces: vec![
                LineTrace {
                    region: Region::City,
                    color: "#1f77b4",
                    width: 3.0,
                    symbol: MarkerSymbol::Circle,
                    marker_size: 8.0,
                },
                LineTrace {
                    region: Region::State,
                    color: "#7f7f7f",
                    width: 2.0,
                    symbol: MarkerSymbol::Diamond,
                    marker_size: 6.0,
                },
                LineTrace {
                    region: Region::Country,
                    color: "#7f7f7f",
                    width: 2.0,
                    symbol: MarkerSymbol::Square,
                    marker_size: 6.0,
                },
            ],
            bar_regions: vec![
                (Region::Country, "#2ca02c"),
                (Region::State, "#d62728"),
                (Region::City, "#1f77b4"),
            ],
            donut_palette: vec!["#8B4513", "#8B0000", "#FF0000", "#FFB6C1"],
            donut_hole: 0.6,
            donut_title_size: 16,
            donut_right_margin: 150,
        }
    }
}

impl DashboardStyle {
    fn title(&self, text: &str, font_size: u32) -> ChartTitle {
        ChartTitle {
            text: text.to_string(),
            font_size,
            color: self.title_color,
        }
    }

    fn hover_label(&self, border: Option<&'static str>) -> HoverLabel {
        HoverLabel {
            background: self.hover_background,
            border,
            font_size: self.hover_font_size,
        }
    }

    fn axis(&self, title: &str, show_grid: bool, range: Option<(f64, f64)>) -> AxisSpec {
        AxisSpec {
            title: title.to_string(),
            show_grid,
            grid_color: show_grid.then_some(self.grid_color),
            grid_width: 1.0,
            range,
        }
    }
}

/// Legend laid out in a row above the plot, flush right.
fn top_right_legend() -> LegendSpec {
    LegendSpec {
        orientation: Orientation::Horizontal,
        x: 1.0,
        y: 1.02,
        x_anchor: XAnchor::Right,
        y_anchor: YAnchor::Bottom,
    }
}

/// Live births per year, one line per region.
pub fn line_chart(data: &Dataset, style: &DashboardStyle) -> ChartSpecification {
    let hover = HoverTemplate {
        heading: HoverHeading::SeriesName,
        rows: vec![
            HoverRow {
                label: "Ano",
                field: HoverField::Category,
                suffix: "",
            },
            HoverRow {
                label: "Nascimentos",
                field: HoverField::Value(ValueFormat::Grouped),
                suffix: "",
            },
        ],
    };

    let series: Vec<SeriesSpec> = style
        .line_traces
        .iter()
        .filter_map(|trace| {
            let births = data.series(trace.region)?;
            Some(SeriesSpec {
                name: trace.region.short_label().to_string(),
                color: Some(trace.color),
                line_width: Some(trace.width),
                marker: Some(Marker {
                    symbol: trace.symbol,
                    size: trace.marker_size,
                    outline_width: 2.0,
                    outline_color: style.marker_outline,
                }),
                points: births
                    .points()
                    .iter()
                    .map(|(year, value)| DataPoint {
                        label: year.to_string(),
                        value: *value as f64,
                    })
                    .collect(),
                hover: hover.clone(),
                hover_label: style.hover_label(Some(trace.color)),
                slice_text: None,
            })
        })
        .collect();

    ChartSpecification {
        kind: ChartKind::Line,
        title: style.title("Nascidos vivos", style.title_size),
        palette: series.iter().filter_map(|s| s.color).collect(),
        series,
        x_axis: Some(style.axis("Ano", true, None)),
        y_axis: Some(style.axis("Nascimentos", true, None)),
        show_legend: true,
        legend: top_right_legend(),
        margin: style.margin,
        background: style.background,
    }
}

/// Infant mortality by race/colour, grouped side by side per region.
pub fn bar_chart(data: &Dataset, style: &DashboardStyle) -> ChartSpecification {
    let hover = HoverTemplate {
        heading: HoverHeading::SeriesName,
        rows: vec![
            HoverRow {
                label: "Raça/Cor",
                field: HoverField::Category,
                suffix: "",
            },
            HoverRow {
                label: "Percentual",
                field: HoverField::Value(ValueFormat::Fixed2),
                suffix: "%",
            },
        ],
    };

    let series: Vec<SeriesSpec> = style
        .bar_regions
        .iter()
        .map(|(region, color)| SeriesSpec {
            name: region.label().to_string(),
            color: Some(*color),
            line_width: None,
            marker: None,
            points: RaceCategory::all()
                .iter()
                .map(|category| DataPoint {
                    label: category.label().to_string(),
                    value: data.mortality.percentage(*region, *category),
                })
                .collect(),
            hover: hover.clone(),
            hover_label: style.hover_label(Some(*color)),
            slice_text: None,
        })
        .collect();

    ChartSpecification {
        kind: ChartKind::GroupedBar,
        title: style.title("Mortalidade infantil - por raça/cor", style.title_size),
        palette: series.iter().filter_map(|s| s.color).collect(),
        series,
        x_axis: Some(style.axis("Raça/Cor", false, None)),
        y_axis: Some(style.axis("Percentual", true, Some((0.0, 80.0)))),
        show_legend: true,
        legend: top_right_legend(),
        margin: style.margin,
        background: style.background,
    }
}

/// Nursery need index (INC) split into its indicator groups.
pub fn donut_chart(data: &Dataset, style: &DashboardStyle) -> ChartSpecification {
    let slices = SeriesSpec {
        name: "INC".to_string(),
        color: None,
        line_width: None,
        marker: None,
        points: data
            .index
            .entries()
            .iter()
            .map(|(group, value)| DataPoint {
                label: group.label().to_string(),
                value: *value,
            })
            .collect(),
        hover: HoverTemplate {
            heading: HoverHeading::Category,
            rows: vec![
                HoverRow {
                    label: "Percentual",
                    field: HoverField::Share(ValueFormat::Fixed2),
                    suffix: "%",
                },
                HoverRow {
                    label: "Valor",
                    field: HoverField::Value(ValueFormat::Fixed2),
                    suffix: "%",
                },
            ],
        },
        hover_label: style.hover_label(None),
        slice_text: Some(SliceText {
            show_label: true,
            show_percent: true,
            outside: true,
        }),
    };

    ChartSpecification {
        kind: ChartKind::Donut {
            hole: style.donut_hole,
        },
        title: style.title(
            "Detalhamento - INC - Índice de Necessidade de Creche Estados e Capitais",
            style.donut_title_size,
        ),
        series: vec![slices],
        x_axis: None,
        y_axis: None,
        show_legend: true,
        legend: LegendSpec {
            orientation: Orientation::Vertical,
            x: 1.02,
            y: 0.5,
            x_anchor: XAnchor::Left,
            y_anchor: YAnchor::Middle,
        },
        margin: Margin {
            right: style.donut_right_margin,
            ..style.margin
        },
        palette: style.donut_palette.clone(),
        background: style.background,
    }
}
