pub mod cli;
pub mod compare;
pub mod configuration;
