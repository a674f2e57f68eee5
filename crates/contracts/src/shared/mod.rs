pub mod envelope;
pub mod public_config;
