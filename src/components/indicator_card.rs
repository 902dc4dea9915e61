use std::rc::Rc;
use yew::prelude::*;

use crate::components::chart::Chart;
use crate::models::chart_spec::ChartSpecification;
use crate::models::panel::Panel;
use crate::services::controller::ClickPayload;

#[derive(Properties, PartialEq)]
pub struct IndicatorCardProps {
    pub panel: Panel,
    pub spec: Rc<ChartSpecification>,
    pub on_open_notes: Callback<Panel>,
    pub on_chart_click: Callback<(Panel, Option<ClickPayload>)>,
}

/// Card holding one indicator chart, its source and a link to the technical notes
#[function_component(IndicatorCard)]
pub fn indicator_card(props: &IndicatorCardProps) -> Html {
    let panel = props.panel;

    let onclick = {
        let on_open_notes = props.on_open_notes.clone();
        Callback::from(move |_| on_open_notes.emit(panel))
    };

    html! {
        <div class="card">
            <div class="card-header">
                <h5 class="card-title">
                    <span class="card-icon">{panel.icon()}</span>
                    {panel.heading()}
                </h5>
            </div>
            <div class="card-body">
                <Chart
                    {panel}
                    spec={props.spec.clone()}
                    on_click={props.on_chart_click.clone()}
                />
                <div class="card-footer">
                    <span class="card-source">{panel.source()}</span>
                    <button
                        id={format!("open-modal-{}", panel.code())}
                        class="notes-button"
                        {onclick}
                    >
                        {"ⓘ Notas Técnicas"}
                    </button>
                </div>
            </div>
        </div>
    }
}
