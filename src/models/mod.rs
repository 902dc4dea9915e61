pub mod chart_spec;
pub mod dataset;
pub mod error;
pub mod modal;
pub mod panel;
