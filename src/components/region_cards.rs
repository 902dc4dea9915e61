use yew::prelude::*;

use crate::models::dataset::Region;

#[function_component(RegionCards)]
pub fn region_cards() -> Html {
    html! {
        <div class="region-grid">
            {
                Region::all().iter().map(|region| {
                    let (icon, class) = match region {
                        Region::City => ("🏙️", "region-card city"),
                        Region::State => ("📍", "region-card state"),
                        Region::Country => ("🌎", "region-card country"),
                    };
                    html! {
                        <div class={class}>
                            <div class="region-icon">{icon}</div>
                            <h4>{region.label()}</h4>
                            <p>{region.caption()}</p>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
