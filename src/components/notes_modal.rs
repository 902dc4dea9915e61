use yew::prelude::*;

use crate::models::panel::Panel;

#[derive(Properties, PartialEq)]
pub struct NotesModalProps {
    pub panel: Panel,
    pub is_open: bool,
    pub on_close: Callback<Panel>,
}

/// Technical-notes dialog. Closed by the "Fechar" button or a click on the backdrop.
#[function_component(NotesModal)]
pub fn notes_modal(props: &NotesModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let panel = props.panel;
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(panel))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div
                id={format!("modal-{}", panel.code())}
                class="modal"
                role="dialog"
                aria-modal="true"
                onclick={keep_open}
            >
                <div class="modal-header">
                    <h5 class="modal-title">{panel.notes_title()}</h5>
                </div>
                <div class="modal-body">
                    { for panel.notes().into_iter().map(|text| html! { <p>{text}</p> }) }
                </div>
                <div class="modal-footer">
                    <button id={format!("close-modal-{}", panel.code())} onclick={close}>
                        {"Fechar"}
                    </button>
                </div>
            </div>
        </div>
    }
}
