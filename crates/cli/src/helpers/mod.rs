pub mod input;
pub mod telemetry;
