pub mod charts;
pub mod controller;
pub mod echarts;
pub mod generator;
