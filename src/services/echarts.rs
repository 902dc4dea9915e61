//! Translation of chart specifications into ECharts options via `charming`.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisType, Color, ItemStyle, JsFunction, Label, LabelPosition, LineStyle, Orient,
        SplitLine, Symbol, TextStyle, Tooltip, Trigger,
    },
    series::{Bar, Line, Pie},
};

use crate::models::chart_spec::{
    AxisSpec, ChartKind, ChartSpecification, HoverField, HoverHeading, HoverTemplate, MarkerSymbol,
    Orientation, SeriesSpec, ValueFormat, XAnchor, YAnchor,
};

/// Outer radius of a donut, as a share of the container
const DONUT_OUTER_RADIUS: f64 = 60.0;

pub fn to_echarts(spec: &ChartSpecification) -> Chart {
    let mut chart = Chart::new()
        .title(
            Title::new()
                .text(spec.title.text.as_str())
                .left("center")
                .text_style(
                    TextStyle::new()
                        .font_size(f64::from(spec.title.font_size))
                        .color(spec.title.color),
                ),
        )
        .tooltip(tooltip())
        .legend(legend(spec))
        .color(spec.palette.iter().map(|c| Color::from(*c)).collect())
        .background_color(spec.background);

    match spec.kind {
        ChartKind::Line | ChartKind::GroupedBar => {
            let categories = spec
                .series
                .first()
                .map(|s| s.labels().into_iter().map(String::from).collect())
                .unwrap_or_default();

            chart = chart
                .grid(
                    Grid::new()
                        .left(f64::from(spec.margin.left))
                        .right(f64::from(spec.margin.right))
                        .top(f64::from(spec.margin.top))
                        .bottom(f64::from(spec.margin.bottom))
                        .contain_label(true),
                )
                .x_axis(axis(spec.x_axis.as_ref(), AxisType::Category).data(categories))
                .y_axis(axis(spec.y_axis.as_ref(), AxisType::Value));

            for series in &spec.series {
                chart = if spec.kind == ChartKind::Line {
                    chart.series(line_series(series))
                } else {
                    chart.series(bar_series(series))
                };
            }
        }
        ChartKind::Donut { hole } => {
            for series in &spec.series {
                chart = chart.series(pie_series(series, hole));
            }
        }
    }

    chart
}

fn axis(spec: Option<&AxisSpec>, type_: AxisType) -> Axis {
    let axis = Axis::new().type_(type_);
    let Some(spec) = spec else {
        return axis;
    };

    let mut split_line = SplitLine::new().show(spec.show_grid);
    if let Some(color) = spec.grid_color {
        split_line = split_line.line_style(LineStyle::new().color(color).width(spec.grid_width));
    }

    let axis = axis.name(spec.title.as_str()).split_line(split_line);
    match spec.range {
        Some((min, max)) => axis.min(min).max(max),
        None => axis,
    }
}

fn legend(spec: &ChartSpecification) -> Legend {
    let placement = &spec.legend;
    let legend = Legend::new().show(spec.show_legend).orient(match placement.orientation {
        Orientation::Horizontal => Orient::Horizontal,
        Orientation::Vertical => Orient::Vertical,
    });

    // Coordinates past the plot edge put the legend in the margin on that side.
    let legend = match placement.x_anchor {
        _ if placement.x > 1.0 => legend.right(8.0),
        XAnchor::Left => legend.left(percent(placement.x).as_str()),
        XAnchor::Center => legend.left("center"),
        XAnchor::Right => legend.right(percent(1.0 - placement.x).as_str()),
    };

    match placement.y_anchor {
        _ if placement.y > 1.0 => legend.top(f64::from(spec.margin.top / 2)),
        YAnchor::Middle => legend.top("middle"),
        YAnchor::Top => legend.top(percent(1.0 - placement.y).as_str()),
        YAnchor::Bottom => legend.bottom(percent(placement.y).as_str()),
    }
}

fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

fn line_series(series: &SeriesSpec) -> Line {
    let mut line = Line::new()
        .name(series.name.as_str())
        .tooltip(series_tooltip(series))
        .data(series.values());

    if let Some(color) = series.color {
        let mut style = LineStyle::new().color(color);
        if let Some(width) = series.line_width {
            style = style.width(width);
        }
        line = line.line_style(style);
    }

    if let Some(marker) = &series.marker {
        let mut item_style = ItemStyle::new()
            .border_color(marker.outline_color)
            .border_width(marker.outline_width);
        if let Some(color) = series.color {
            item_style = item_style.color(color);
        }
        line = line
            .symbol(match marker.symbol {
                MarkerSymbol::Circle => Symbol::Circle,
                MarkerSymbol::Diamond => Symbol::Diamond,
                MarkerSymbol::Square => Symbol::Rect,
            })
            .symbol_size(marker.size)
            .item_style(item_style);
    }

    line
}

fn bar_series(series: &SeriesSpec) -> Bar {
    let bar = Bar::new()
        .name(series.name.as_str())
        .tooltip(series_tooltip(series))
        .data(series.values());
    match series.color {
        Some(color) => bar.item_style(ItemStyle::new().color(color)),
        None => bar,
    }
}

fn pie_series(series: &SeriesSpec, hole: f64) -> Pie {
    let inner = percent(DONUT_OUTER_RADIUS * hole / 100.0);
    let outer = percent(DONUT_OUTER_RADIUS / 100.0);

    let mut pie = Pie::new()
        .name(series.name.as_str())
        .tooltip(series_tooltip(series))
        .radius(vec![inner.as_str(), outer.as_str()])
        .center(vec!["40%", "55%"])
        .data(
            series
                .points
                .iter()
                .map(|p| (p.value, p.label.clone()))
                .collect(),
        );

    if let Some(text) = &series.slice_text {
        let formatter = match (text.show_label, text.show_percent) {
            (true, true) => "{b}\n{d}%",
            (true, false) => "{b}",
            (false, true) => "{d}%",
            (false, false) => "",
        };
        pie = pie.label(
            Label::new()
                .show(text.show_label || text.show_percent)
                .position(if text.outside {
                    LabelPosition::Outside
                } else {
                    LabelPosition::Inside
                })
                .formatter(formatter),
        );
    }

    pie
}

/// Chart-wide tooltip; content and styling come from each series.
fn tooltip() -> Tooltip {
    Tooltip::new().trigger(Trigger::Item)
}

fn series_tooltip(series: &SeriesSpec) -> Tooltip {
    let label = &series.hover_label;
    let tooltip = Tooltip::new()
        .background_color(label.background)
        .formatter(JsFunction::new_with_args(
            "params",
            &format!(
                "const render = {};
                return '<div style=\"font-size: {}px\">' + render(params) + '</div>';",
                hover_js(&series.hover),
                label.font_size
            ),
        ));

    match label.border {
        Some(color) => tooltip.border_color(color),
        None => tooltip,
    }
}

/// JavaScript function equivalent to `HoverTemplate::render` for an ECharts params object.
pub fn hover_js(template: &HoverTemplate) -> String {
    let heading = match template.heading {
        HoverHeading::SeriesName => "p.seriesName",
        HoverHeading::Category => "p.name",
    };

    let rows: String = template
        .rows
        .iter()
        .map(|row| {
            let value = match row.field {
                HoverField::Category => "p.name".to_string(),
                HoverField::Value(format) => format_js("p.value", format),
                HoverField::Share(format) => format_js("p.percent", format),
            };
            format!(
                " + '<br>' + {} + {} + {}",
                js_string(&format!("{}: ", row.label)),
                value,
                js_string(row.suffix)
            )
        })
        .collect();

    format!("function (p) {{ return '<b>' + {heading} + '</b>'{rows}; }}")
}

fn format_js(expr: &str, format: ValueFormat) -> String {
    match format {
        ValueFormat::Grouped => format!("Math.round(Number({expr})).toLocaleString('en-US')"),
        ValueFormat::Fixed2 => format!("Number({expr}).toFixed(2)"),
    }
}

fn js_string(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}
