pub mod athlete;
pub mod config;
pub mod measurement;
pub mod report;
pub mod scoring;
