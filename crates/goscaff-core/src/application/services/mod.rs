pub mod generator_service;

pub use generator_service::{GenerationReport, GeneratorService};
