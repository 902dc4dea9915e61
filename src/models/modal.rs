use super::panel::Panel;

/// Visibility of a technical-notes modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open)
    }
}

/// Which of a modal's two buttons fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTrigger {
    Open,
    Close,
}

/// Resolves a modal's state from the trigger that fired. No trigger resolves to closed.
pub fn toggle(trigger: Option<ModalTrigger>) -> ModalState {
    match trigger {
        Some(ModalTrigger::Open) => ModalState::Open,
        Some(ModalTrigger::Close) | None => ModalState::Closed,
    }
}

/// Visibility of all three modals. Updates produce a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalVisibility {
    line: ModalState,
    bar: ModalState,
    donut: ModalState,
}

impl ModalVisibility {
    pub fn get(&self, panel: Panel) -> ModalState {
        match panel {
            Panel::Line => self.line,
            Panel::Bar => self.bar,
            Panel::Donut => self.donut,
        }
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.get(panel).is_open()
    }

    pub fn with(self, panel: Panel, state: ModalState) -> Self {
        match panel {
            Panel::Line => Self { line: state, ..self },
            Panel::Bar => Self { bar: state, ..self },
            Panel::Donut => Self {
                donut: state,
                ..self
            },
        }
    }

    /// Panels whose modal is currently open.
    pub fn open_panels(&self) -> Vec<Panel> {
        Panel::all()
            .iter()
            .copied()
            .filter(|p| self.is_open(*p))
            .collect()
    }
}
