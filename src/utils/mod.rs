pub mod distance;
pub mod generator;
pub mod plot;
pub mod report;
