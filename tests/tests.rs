#[cfg(test)]
mod tests {
    use indicator_dashboard::config::Config;
    use indicator_dashboard::models::{
        chart_spec::{
            ChartKind, HoverPoint, MarkerSymbol, Orientation, ValueFormat, XAnchor, YAnchor,
        },
        dataset::{RaceCategory, Region},
        error::AppError,
        modal::{ModalState, ModalTrigger, ModalVisibility, toggle},
        panel::Panel,
    };
    use indicator_dashboard::services::{
        charts::{DashboardStyle, bar_chart, donut_chart, line_chart},
        controller::{ClickPayload, InteractionController, Trigger, Update},
        echarts::{hover_js, to_echarts},
        generator::{CITY_BIRTHS, generate},
    };
    use std::rc::Rc;

    fn controller() -> InteractionController {
        InteractionController::with_seed(Config::SEED)
    }

    // ECharts accepts both a single component and a list of them
    fn first(value: &serde_json::Value) -> &serde_json::Value {
        value.get(0).unwrap_or(value)
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        let error = AppError::Render("line-chart: missing echarts".to_string());
        assert_eq!(error.to_string(), "Render error: line-chart: missing echarts");

        let error = AppError::MissingElement("window".to_string());
        assert_eq!(error.to_string(), "Missing element: window");
    }

    // ===== Data Generator Tests =====

    #[test]
    fn test_years_cover_2010_to_2023() {
        let data = generate(Config::SEED);
        assert_eq!(data.years.len(), 14);
        assert_eq!(data.years.first(), Some(&2010));
        assert_eq!(data.years.last(), Some(&2023));
        assert!(data.years.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_city_series_starts_with_published_counts() {
        let data = generate(Config::SEED);
        let city = data.series(Region::City).unwrap().values();

        assert_eq!(
            &city[..9],
            &[36755, 37577, 38195, 39512, 37451, 35833, 32376, 29676, 28500]
        );
        assert_eq!(&city[..9], &CITY_BIRTHS);
    }

    #[test]
    fn test_city_series_continuation_declines_within_bounds() {
        let data = generate(Config::SEED);
        let city = data.series(Region::City).unwrap().values();

        for pair in city[8..].windows(2) {
            let decline = pair[0] - pair[1];
            assert!(pair[1] >= Config::BIRTHS_FLOOR);
            assert!(
                pair[1] == Config::BIRTHS_FLOOR || (500..1500).contains(&decline),
                "unexpected decline {decline}"
            );
        }
    }

    #[test]
    fn test_all_series_share_years_and_length() {
        let data = generate(Config::SEED);

        assert_eq!(data.births.len(), 3);
        for series in &data.births {
            assert_eq!(series.len(), 14);
            assert_eq!(series.years(), data.years);
        }
    }

    #[test]
    fn test_state_and_country_stay_within_noise_bounds() {
        for seed in [Config::SEED, 0, 7, 2024] {
            let data = generate(seed);
            let city = data.series(Region::City).unwrap().values();
            let state = data.series(Region::State).unwrap().values();
            let country = data.series(Region::Country).unwrap().values();

            for i in 0..city.len() {
                let base = city[i] as f64;
                assert!((state[i] as f64 - base * 0.8).abs() <= 2000.5);
                assert!((country[i] as f64 - base * 2.5).abs() <= 5000.5);
                assert!(state[i] >= 18_000);
                assert!(country[i] >= 57_500);
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        assert_eq!(generate(Config::SEED), generate(Config::SEED));
        assert_eq!(generate(3), generate(3));
    }

    #[test]
    fn test_mortality_has_six_categories_per_region() {
        let data = generate(Config::SEED);

        assert_eq!(data.mortality.regions().count(), 3);
        for region in Region::all() {
            let categories: Vec<RaceCategory> = data
                .mortality
                .categories(*region)
                .iter()
                .map(|(c, _)| *c)
                .collect();
            assert_eq!(categories, RaceCategory::all());
        }

        assert_eq!(
            data.mortality.percentage(Region::State, RaceCategory::Parda),
            66.44
        );
        assert_eq!(
            data.mortality.percentage(Region::City, RaceCategory::Indigena),
            0.0
        );
    }

    #[test]
    fn test_index_breakdown_has_four_entries() {
        let data = generate(Config::SEED);
        let values: Vec<f64> = data.index.entries().iter().map(|(_, v)| *v).collect();

        assert_eq!(data.index.len(), 4);
        assert_eq!(values, vec![8.75, 4.26, 23.98, 2.00]);
    }

    // ===== Line Builder Tests =====

    #[test]
    fn test_line_chart_has_one_series_per_region() {
        let data = generate(Config::SEED);
        let spec = line_chart(&data, &DashboardStyle::default());

        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.title.text, "Nascidos vivos");
        assert_eq!(spec.series_names(), vec!["Fortaleza - CE", "CE", "Brasil"]);

        for series in &spec.series {
            assert_eq!(series.points.len(), 14);
            assert_eq!(series.labels()[0], "2010");
            assert_eq!(series.labels()[13], "2023");
        }
        assert_eq!(spec.series[0].values()[0], 36755.0);
    }

    #[test]
    fn test_line_chart_styles_each_region() {
        let data = generate(Config::SEED);
        let spec = line_chart(&data, &DashboardStyle::default());

        let symbols: Vec<MarkerSymbol> = spec
            .series
            .iter()
            .map(|s| s.marker.as_ref().unwrap().symbol)
            .collect();
        assert_eq!(
            symbols,
            vec![MarkerSymbol::Circle, MarkerSymbol::Diamond, MarkerSymbol::Square]
        );
        assert_eq!(spec.series[0].color, Some("#1f77b4"));
        assert_eq!(spec.series[0].line_width, Some(3.0));
        assert_eq!(spec.series[1].color, Some("#7f7f7f"));
        assert_eq!(spec.series[2].line_width, Some(2.0));
        assert_eq!(spec.series[0].hover_label.border, Some("#1f77b4"));
    }

    #[test]
    fn test_line_chart_legend_is_horizontal_top_right() {
        let data = generate(Config::SEED);
        let spec = line_chart(&data, &DashboardStyle::default());

        assert_eq!(spec.legend.orientation, Orientation::Horizontal);
        assert_eq!(spec.legend.x_anchor, XAnchor::Right);
        assert_eq!(spec.legend.y_anchor, YAnchor::Bottom);
        assert_eq!(spec.legend.x, 1.0);
        assert_eq!(spec.legend.y, 1.02);
    }

    #[test]
    fn test_line_hover_shows_region_year_and_grouped_value() {
        let data = generate(Config::SEED);
        let spec = line_chart(&data, &DashboardStyle::default());
        let series = &spec.series[0];

        let text = series.hover.render(&HoverPoint {
            series: &series.name,
            category: "2010",
            value: series.values()[0],
            share: 0.0,
        });

        assert_eq!(
            text,
            "<b>Fortaleza - CE</b><br>Ano: 2010<br>Nascimentos: 36,755"
        );
    }

    // ===== Bar Builder Tests =====

    #[test]
    fn test_bar_chart_keeps_category_order_and_colors() {
        let data = generate(Config::SEED);
        let spec = bar_chart(&data, &DashboardStyle::default());

        assert_eq!(spec.kind, ChartKind::GroupedBar);
        assert_eq!(spec.series_names(), vec!["Brasil", "Ceará", "Fortaleza - CE"]);

        let colors: Vec<_> = spec.series.iter().map(|s| s.color).collect();
        assert_eq!(
            colors,
            vec![Some("#2ca02c"), Some("#d62728"), Some("#1f77b4")]
        );
        assert_eq!(spec.palette, vec!["#2ca02c", "#d62728", "#1f77b4"]);

        let expected: Vec<&str> = RaceCategory::all().iter().map(|c| c.label()).collect();
        for series in &spec.series {
            assert_eq!(series.labels(), expected);
        }

        assert_eq!(
            spec.series[0].values(),
            vec![38.06, 3.28, 1.45, 50.01, 2.39, 6.11]
        );
    }

    #[test]
    fn test_bar_chart_fixes_y_range() {
        let data = generate(Config::SEED);
        let spec = bar_chart(&data, &DashboardStyle::default());

        let y_axis = spec.y_axis.as_ref().unwrap();
        assert_eq!(y_axis.range, Some((0.0, 80.0)));
        assert!(y_axis.show_grid);
        assert!(!spec.x_axis.as_ref().unwrap().show_grid);
    }

    #[test]
    fn test_bar_hover_shows_percentage_with_two_decimals() {
        let data = generate(Config::SEED);
        let spec = bar_chart(&data, &DashboardStyle::default());
        let series = &spec.series[1];

        let text = series.hover.render(&HoverPoint {
            series: &series.name,
            category: "Branca",
            value: series.values()[0],
            share: 0.0,
        });

        assert_eq!(text, "<b>Ceará</b><br>Raça/Cor: Branca<br>Percentual: 19.59%");
    }

    // ===== Donut Builder Tests =====

    #[test]
    fn test_donut_chart_has_four_positional_slices() {
        let data = generate(Config::SEED);
        let spec = donut_chart(&data, &DashboardStyle::default());

        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].points.len(), 4);
        assert_eq!(spec.hole(), Some(0.6));
        assert_eq!(
            spec.palette,
            vec!["#8B4513", "#8B0000", "#FF0000", "#FFB6C1"]
        );
        assert_eq!(
            spec.series[0].labels()[0],
            "Crianças em situação de pobreza"
        );

        let text = spec.series[0].slice_text.as_ref().unwrap();
        assert!(text.show_label && text.show_percent && text.outside);
    }

    #[test]
    fn test_donut_legend_is_vertical_right_middle() {
        let data = generate(Config::SEED);
        let spec = donut_chart(&data, &DashboardStyle::default());

        assert_eq!(spec.legend.orientation, Orientation::Vertical);
        assert_eq!(spec.legend.x_anchor, XAnchor::Left);
        assert_eq!(spec.legend.y_anchor, YAnchor::Middle);
        assert_eq!(spec.margin.right, 150);
    }

    #[test]
    fn test_donut_hover_uses_slice_label_heading() {
        let data = generate(Config::SEED);
        let spec = donut_chart(&data, &DashboardStyle::default());
        let series = &spec.series[0];

        let text = series.hover.render(&HoverPoint {
            series: &series.name,
            category: "Crianças com deficiência",
            value: 2.0,
            share: 5.0,
        });

        assert_eq!(
            text,
            "<b>Crianças com deficiência</b><br>Percentual: 5.00%<br>Valor: 2.00%"
        );
    }

    #[test]
    fn test_chart_specification_serializes_layout() {
        let controller = controller();

        let line = serde_json::to_value(controller.chart(Panel::Line, None)).unwrap();
        assert_eq!(line["kind"], "line");
        assert_eq!(line["legend"]["orientation"], "horizontal");
        assert_eq!(line["legend"]["x_anchor"], "right");
        assert_eq!(line["series"][0]["marker"]["symbol"], "circle");
        let mut axis_fields: Vec<&str> = line["x_axis"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        axis_fields.sort_unstable();
        assert_eq!(
            axis_fields,
            vec!["grid_color", "grid_width", "range", "show_grid", "title"]
        );

        let donut = serde_json::to_value(controller.chart(Panel::Donut, None)).unwrap();
        assert_eq!(donut["kind"]["donut"]["hole"].as_f64(), Some(0.6));
        assert_eq!(donut["legend"]["orientation"], "vertical");
        assert!(donut["x_axis"].is_null());
        assert_eq!(
            donut["palette"],
            serde_json::json!(["#8B4513", "#8B0000", "#FF0000", "#FFB6C1"])
        );
    }

    #[test]
    fn test_value_format_groups_thousands() {
        assert_eq!(ValueFormat::Grouped.format(999.0), "999");
        assert_eq!(ValueFormat::Grouped.format(1000.0), "1,000");
        assert_eq!(ValueFormat::Grouped.format(91_887.4), "91,887");
        assert_eq!(ValueFormat::Grouped.format(-1_234_567.0), "-1,234,567");
        assert_eq!(ValueFormat::Fixed2.format(8.75), "8.75");
    }

    #[test]
    fn test_builders_are_idempotent() {
        let data = generate(Config::SEED);
        let style = DashboardStyle::default();

        assert_eq!(line_chart(&data, &style), line_chart(&data, &style));
        assert_eq!(bar_chart(&data, &style), bar_chart(&data, &style));
        assert_eq!(donut_chart(&data, &style), donut_chart(&data, &style));
        assert_eq!(data, generate(Config::SEED));
    }

    // ===== Modal State Tests =====

    #[test]
    fn test_modal_toggle() {
        assert_eq!(toggle(Some(ModalTrigger::Open)), ModalState::Open);
        assert_eq!(toggle(Some(ModalTrigger::Close)), ModalState::Closed);
        assert_eq!(toggle(None), ModalState::Closed);
        assert_eq!(ModalState::default(), ModalState::Closed);
    }

    #[test]
    fn test_modal_visibility_updates_one_panel() {
        let modals = ModalVisibility::default();
        assert!(modals.open_panels().is_empty());

        let opened = modals.with(Panel::Donut, ModalState::Open);
        assert_eq!(opened.open_panels(), vec![Panel::Donut]);
        assert!(!modals.is_open(Panel::Donut));
    }

    // ===== Interaction Controller Tests =====

    #[test]
    fn test_modal_binding_ignores_other_panels() {
        let controller = controller();

        assert_eq!(
            controller.modal(Panel::Line, &Trigger::OpenModal(Panel::Line)),
            ModalState::Open
        );
        assert_eq!(
            controller.modal(Panel::Line, &Trigger::OpenModal(Panel::Bar)),
            ModalState::Closed
        );
        assert_eq!(
            controller.modal(Panel::Line, &Trigger::ChartInteracted(Panel::Line, None)),
            ModalState::Closed
        );
    }

    #[test]
    fn test_chart_binding_ignores_payload() {
        let controller = controller();
        let payload = ClickPayload {
            series_index: Some(1),
            data_index: Some(3),
            label: Some("2013".to_string()),
        };

        for panel in Panel::all() {
            assert_eq!(
                controller.chart(*panel, None),
                controller.chart(*panel, Some(&payload))
            );
        }
    }

    #[test]
    fn test_click_payload_from_event_fields() {
        let payload = ClickPayload::from_parts(Some(2.0), Some(5.0), Some("2015".to_string()));
        assert_eq!(payload.series_index, Some(2));
        assert_eq!(payload.data_index, Some(5));
        assert_eq!(payload.label.as_deref(), Some("2015"));

        let payload = ClickPayload::from_parts(Some(-1.0), Some(1.5), Some(String::new()));
        assert_eq!(payload, ClickPayload::default());

        let payload = ClickPayload::from_parts(Some(f64::NAN), None, None);
        assert_eq!(payload, ClickPayload::default());
    }

    #[test]
    fn test_handle_returns_matching_update() {
        let controller = controller();

        match controller.handle(&Trigger::ChartInteracted(Panel::Bar, None)) {
            Update::Chart(panel, spec) => {
                assert_eq!(panel, Panel::Bar);
                assert_eq!(spec.kind, ChartKind::GroupedBar);
            }
            other => panic!("expected chart update, got {other:?}"),
        }

        assert_eq!(
            controller.handle(&Trigger::CloseModal(Panel::Donut)),
            Update::Modal(Panel::Donut, ModalState::Closed)
        );
    }

    #[test]
    fn test_dashboard_session_scenario() {
        let controller = controller();
        let session = controller.initial_session();

        for panel in Panel::all() {
            assert!(!session.chart(*panel).is_empty());
            assert_eq!(session.modals.get(*panel), ModalState::Closed);
        }

        let session = session.apply(controller.handle(&Trigger::OpenModal(Panel::Bar)));
        assert!(session.modals.is_open(Panel::Bar));
        assert!(!session.modals.is_open(Panel::Line));
        assert!(!session.modals.is_open(Panel::Donut));

        let session = session.apply(controller.handle(&Trigger::CloseModal(Panel::Bar)));
        assert!(session.modals.open_panels().is_empty());
    }

    #[test]
    fn test_session_apply_replaces_chart_and_keeps_previous_session() {
        let controller = controller();
        let before = controller.initial_session();

        let after = before.apply(controller.handle(&Trigger::ChartInteracted(Panel::Line, None)));

        assert!(!Rc::ptr_eq(before.chart(Panel::Line), after.chart(Panel::Line)));
        assert!(Rc::ptr_eq(before.chart(Panel::Bar), after.chart(Panel::Bar)));
        assert_eq!(before.chart(Panel::Line), after.chart(Panel::Line));
    }

    #[test]
    fn test_sessions_are_independent() {
        let controller = controller();
        let first_viewer = controller.initial_session();
        let second_viewer = controller.initial_session();

        let first_viewer = first_viewer.apply(controller.handle(&Trigger::OpenModal(Panel::Line)));

        assert!(first_viewer.modals.is_open(Panel::Line));
        assert!(!second_viewer.modals.is_open(Panel::Line));
    }

    // ===== ECharts Translation Tests =====

    #[test]
    fn test_echarts_line_options() {
        let spec = controller().chart(Panel::Line, None);
        let options = serde_json::to_value(to_echarts(&spec)).unwrap();

        let series = options["series"].as_array().unwrap();
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|s| s["type"] == "line"));
        assert_eq!(series[1]["name"], "CE");
        assert_eq!(first(&options["xAxis"])["data"].as_array().unwrap().len(), 14);
    }

    #[test]
    fn test_echarts_bar_options() {
        let spec = controller().chart(Panel::Bar, None);
        let options = serde_json::to_value(to_echarts(&spec)).unwrap();

        let series = options["series"].as_array().unwrap();
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|s| s["type"] == "bar"));
        assert!(series.iter().all(|s| s.get("stack").is_none()));
        assert_eq!(first(&options["yAxis"])["max"].as_f64(), Some(80.0));
    }

    #[test]
    fn test_echarts_donut_options() {
        let spec = controller().chart(Panel::Donut, None);
        let options = serde_json::to_value(to_echarts(&spec)).unwrap();

        let series = options["series"].as_array().unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0]["type"], "pie");
        assert_eq!(series[0]["data"].as_array().unwrap().len(), 4);
        assert_eq!(series[0]["radius"][0], "36%");
        assert_eq!(series[0]["radius"][1], "60%");
    }

    #[test]
    fn test_echarts_tooltip_is_styled_per_series() {
        let controller = controller();

        for panel in [Panel::Line, Panel::Bar] {
            let spec = controller.chart(panel, None);
            let options = serde_json::to_value(to_echarts(&spec)).unwrap();

            assert_eq!(first(&options["tooltip"])["trigger"], "item");
            assert!(first(&options["tooltip"]).get("formatter").is_none());

            let series = options["series"].as_array().unwrap();
            for (series, expected) in series.iter().zip(&spec.series) {
                let tooltip = &series["tooltip"];
                assert_eq!(tooltip["borderColor"], expected.hover_label.border.unwrap());
                assert_eq!(tooltip["backgroundColor"], "rgba(255,255,255,0.9)");
                assert!(tooltip["formatter"].as_str().unwrap().contains("font-size: 12px"));
            }
        }

        let spec = controller.chart(Panel::Donut, None);
        let options = serde_json::to_value(to_echarts(&spec)).unwrap();
        let tooltip = &options["series"][0]["tooltip"];
        assert!(tooltip.get("borderColor").is_none());
        assert!(tooltip["formatter"].as_str().unwrap().contains("p.percent"));
    }

    #[test]
    fn test_echarts_line_colors_reach_tooltip_border() {
        let spec = controller().chart(Panel::Line, None);
        let options = serde_json::to_value(to_echarts(&spec)).unwrap();
        let borders: Vec<&str> = options["series"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["tooltip"]["borderColor"].as_str().unwrap())
            .collect();

        assert_eq!(borders, vec!["#1f77b4", "#7f7f7f", "#7f7f7f"]);
    }

    #[test]
    fn test_hover_js_matches_template() {
        let spec = controller().chart(Panel::Line, None);
        let js = hover_js(&spec.series[0].hover);

        assert!(js.starts_with("function (p)"));
        assert!(js.contains("p.seriesName"));
        assert!(js.contains("'Nascimentos: '"));
        assert!(js.contains("toLocaleString('en-US')"));
    }
}
