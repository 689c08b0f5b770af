pub mod chart;
pub mod cli;
pub mod constants;
pub mod generator;
pub mod logging;
pub mod model;
pub mod observation;
pub mod table;
