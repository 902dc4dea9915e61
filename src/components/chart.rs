use charming::renderer::{Echarts, WasmRenderer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue, closure::Closure, prelude::wasm_bindgen};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::chart_spec::ChartSpecification;
use crate::models::error::AppError;
use crate::models::panel::Panel;
use crate::services::controller::ClickPayload;
use crate::services::echarts::to_echarts;
use crate::utils::debounce::debounced_resize;

#[wasm_bindgen]
extern "C" {
    /// Event API of a live ECharts instance.
    type ChartEvents;

    #[wasm_bindgen(method)]
    fn on(this: &ChartEvents, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method)]
    fn off(this: &ChartEvents, event: &str);
}

type ClickHandler = Closure<dyn Fn(JsValue)>;

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub panel: Panel,
    pub spec: Rc<ChartSpecification>,
    pub on_click: Callback<(Panel, Option<ClickPayload>)>,
}

#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();
    let chart_id = format!("{}-chart", props.panel.code());

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (
                props.spec.clone(),
                container_ref,
                chart_id.clone(),
                props.panel,
                props.on_click.clone(),
            ),
            |(spec, container_ref, chart_id, panel, on_click)| {
                let panel = *panel;
                let on_click = on_click.clone();
                let handler: Rc<ClickHandler> = Rc::new(Closure::new(move |params: JsValue| {
                    on_click.emit((panel, Some(click_payload(&params))));
                }));
                let bound: Rc<RefCell<Option<Echarts>>> = Rc::default();

                let render = {
                    let spec = spec.clone();
                    let chart_id = chart_id.clone();
                    let handler = handler.clone();
                    let bound = bound.clone();
                    move |container: &HtmlElement| match render_chart(container, &chart_id, &spec) {
                        Ok(Some(echarts)) => {
                            bind_clicks(&echarts, &handler);
                            *bound.borrow_mut() = Some(echarts);
                        }
                        Ok(None) => {}
                        Err(e) => gloo::console::error!(e.to_string()),
                    }
                };

                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render(&container);

                    debounced_resize(Config::RESIZE_DEBOUNCE_MS, move || render(&container))
                        .map_err(|e| gloo::console::error!(e.to_string()))
                        .ok()
                });

                move || {
                    drop(listener);
                    if let Some(echarts) = bound.take() {
                        echarts.unchecked_ref::<ChartEvents>().off("click");
                    }
                    drop(handler);
                }
            },
        );
    }

    let style = format!("height: {}px;", Config::CHART_HEIGHT_PX);

    html! {
        <div class="chart-container" ref={container_ref} {style}>
            <div id={chart_id} />
        </div>
    }
}

/// Renders `spec` into the element `chart_id`. `None` while the container has no size yet.
fn render_chart(
    container: &HtmlElement,
    chart_id: &str,
    spec: &ChartSpecification,
) -> Result<Option<Echarts>, AppError> {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return Ok(None);
    }

    WasmRenderer::new(width, height)
        .render(chart_id, &to_echarts(spec))
        .map(Some)
        .map_err(|e| AppError::Render(format!("{chart_id}: {e:?}")))
}

/// Replaces the click handler of a rendered chart. Re-rendering reuses the same instance,
/// so the previous binding is removed first.
fn bind_clicks(echarts: &Echarts, handler: &ClickHandler) {
    let events = echarts.unchecked_ref::<ChartEvents>();
    events.off("click");
    events.on("click", handler.as_ref().unchecked_ref());
}

fn click_payload(params: &JsValue) -> ClickPayload {
    let field = |name: &str| js_sys::Reflect::get(params, &JsValue::from_str(name)).ok();

    ClickPayload::from_parts(
        field("seriesIndex").and_then(|v| v.as_f64()),
        field("dataIndex").and_then(|v| v.as_f64()),
        field("name").and_then(|v| v.as_string()),
    )
}
