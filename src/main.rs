use yew::prelude::*;

use indicator_dashboard::components::{IndicatorCard, NotesModal, RegionCards};
use indicator_dashboard::hooks::use_dashboard::use_dashboard;
use indicator_dashboard::models::panel::Panel;

#[function_component(App)]
fn app() -> Html {
    let dashboard = use_dashboard();
    let session = &dashboard.session;

    let card = |panel: Panel| {
        html! {
            <IndicatorCard
                {panel}
                spec={session.chart(panel).clone()}
                on_open_notes={dashboard.open_modal.clone()}
                on_chart_click={dashboard.chart_clicked.clone()}
            />
        }
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"📈 Dashboard de Indicadores"}</h1>
                <hr />
            </header>

            <main class="app-main">
                <section class="row two-columns">
                    {card(Panel::Line)}
                    {card(Panel::Bar)}
                </section>

                <section class="row">
                    {card(Panel::Donut)}
                </section>

                <section class="row">
                    <RegionCards />
                </section>
            </main>

            {
                Panel::all().iter().map(|&panel| html! {
                    <NotesModal
                        {panel}
                        is_open={session.modals.is_open(panel)}
                        on_close={dashboard.close_modal.clone()}
                    />
                }).collect::<Html>()
            }

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
