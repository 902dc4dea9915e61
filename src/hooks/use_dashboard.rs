use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::panel::Panel;
use crate::services::controller::{ClickPayload, DashboardSession, InteractionController, Trigger};

/// Reducer state: the controller shared by every dispatch plus this viewer's session.
#[derive(Clone, PartialEq)]
pub struct DashboardState {
    controller: Rc<InteractionController>,
    pub session: DashboardSession,
}

impl DashboardState {
    pub fn new(controller: Rc<InteractionController>) -> Self {
        let session = controller.initial_session();
        Self {
            controller,
            session,
        }
    }
}

impl Reducible for DashboardState {
    type Action = Trigger;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let update = self.controller.handle(&action);
        Rc::new(Self {
            controller: self.controller.clone(),
            session: self.session.apply(update),
        })
    }
}

/// Handle returned by `use_dashboard` hook
#[derive(Clone, PartialEq)]
pub struct DashboardHandle {
    pub session: DashboardSession,
    pub open_modal: Callback<Panel>,
    pub close_modal: Callback<Panel>,
    pub chart_clicked: Callback<(Panel, Option<ClickPayload>)>,
}

/// Custom hook owning the dashboard session of the mounted app
#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let state = use_reducer(|| {
        let controller = InteractionController::with_seed(Config::SEED);
        gloo::console::log!(format!(
            "Generated dataset for {} years (seed {})",
            controller.dataset().years.len(),
            Config::SEED
        ));
        DashboardState::new(Rc::new(controller))
    });

    let open_modal = {
        let state = state.clone();
        Callback::from(move |panel| state.dispatch(Trigger::OpenModal(panel)))
    };

    let close_modal = {
        let state = state.clone();
        Callback::from(move |panel| state.dispatch(Trigger::CloseModal(panel)))
    };

    let chart_clicked = {
        let state = state.clone();
        Callback::from(move |(panel, payload)| {
            state.dispatch(Trigger::ChartInteracted(panel, payload));
        })
    };

    DashboardHandle {
        session: state.session.clone(),
        open_modal,
        close_modal,
        chart_clicked,
    }
}
