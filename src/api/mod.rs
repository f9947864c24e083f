mod chart;
mod data_controller;
mod grid_controller;
mod json_contract;
mod validation;

pub use chart::SvgChart;
