use std::rc::Rc;

use crate::models::chart_spec::ChartSpecification;
use crate::models::dataset::Dataset;
use crate::models::modal::{ModalState, ModalTrigger, ModalVisibility, toggle};
use crate::models::panel::Panel;
use crate::services::charts::{DashboardStyle, bar_chart, donut_chart, line_chart};
use crate::services::generator::generate;

/// Series and data item under a chart click. Charts are rebuilt in full regardless of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClickPayload {
    pub series_index: Option<usize>,
    pub data_index: Option<usize>,
    pub label: Option<String>,
}

impl ClickPayload {
    /// Payload from the raw fields of a chart click event. JavaScript numbers that are not
    /// valid indices and empty labels are dropped.
    pub fn from_parts(
        series_index: Option<f64>,
        data_index: Option<f64>,
        label: Option<String>,
    ) -> Self {
        Self {
            series_index: series_index.and_then(index),
            data_index: data_index.and_then(index),
            label: label.filter(|l| !l.is_empty()),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn index(value: f64) -> Option<usize> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0).then_some(value as usize)
}

/// UI event delivered to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    OpenModal(Panel),
    CloseModal(Panel),
    ChartInteracted(Panel, Option<ClickPayload>),
}

/// Output of a single binding: a replacement chart or a modal state.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Chart(Panel, Rc<ChartSpecification>),
    Modal(Panel, ModalState),
}

/// Maps triggers to chart rebuilds and modal toggles over a shared, read-only dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionController {
    dataset: Rc<Dataset>,
    style: Rc<DashboardStyle>,
}

impl InteractionController {
    pub fn new(dataset: Rc<Dataset>, style: Rc<DashboardStyle>) -> Self {
        Self { dataset, style }
    }

    /// Controller over the seeded synthetic dataset and the default styling.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Rc::new(generate(seed)), Rc::new(DashboardStyle::default()))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Chart regeneration binding. The payload does not influence the result.
    pub fn chart(&self, panel: Panel, _payload: Option<&ClickPayload>) -> ChartSpecification {
        match panel {
            Panel::Line => line_chart(&self.dataset, &self.style),
            Panel::Bar => bar_chart(&self.dataset, &self.style),
            Panel::Donut => donut_chart(&self.dataset, &self.style),
        }
    }

    /// Modal binding for `panel`. Triggers aimed at other panels count as no trigger.
    pub fn modal(&self, panel: Panel, trigger: &Trigger) -> ModalState {
        let fired = match trigger {
            Trigger::OpenModal(target) if *target == panel => Some(ModalTrigger::Open),
            Trigger::CloseModal(target) if *target == panel => Some(ModalTrigger::Close),
            _ => None,
        };
        toggle(fired)
    }

    pub fn handle(&self, trigger: &Trigger) -> Update {
        match trigger {
            Trigger::OpenModal(panel) | Trigger::CloseModal(panel) => {
                Update::Modal(*panel, self.modal(*panel, trigger))
            }
            Trigger::ChartInteracted(panel, payload) => {
                Update::Chart(*panel, Rc::new(self.chart(*panel, payload.as_ref())))
            }
        }
    }

    /// State of a freshly opened dashboard: every chart built, every modal closed.
    pub fn initial_session(&self) -> DashboardSession {
        DashboardSession {
            line: Rc::new(self.chart(Panel::Line, None)),
            bar: Rc::new(self.chart(Panel::Bar, None)),
            donut: Rc::new(self.chart(Panel::Donut, None)),
            modals: ModalVisibility::default(),
        }
    }
}

/// What one viewer currently sees. Never shared between viewers.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSession {
    line: Rc<ChartSpecification>,
    bar: Rc<ChartSpecification>,
    donut: Rc<ChartSpecification>,
    pub modals: ModalVisibility,
}

impl DashboardSession {
    pub fn chart(&self, panel: Panel) -> &Rc<ChartSpecification> {
        match panel {
            Panel::Line => &self.line,
            Panel::Bar => &self.bar,
            Panel::Donut => &self.donut,
        }
    }

    /// Returns the session with `update` applied.
    pub fn apply(&self, update: Update) -> Self {
        let mut next = self.clone();
        match update {
            Update::Chart(Panel::Line, chart) => next.line = chart,
            Update::Chart(Panel::Bar, chart) => next.bar = chart,
            Update::Chart(Panel::Donut, chart) => next.donut = chart,
            Update::Modal(panel, state) => next.modals = self.modals.with(panel, state),
        }
        next
    }
}
