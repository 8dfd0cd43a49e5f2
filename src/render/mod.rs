pub mod commands;
pub(crate) mod composite;
pub mod cpu;
pub mod pipeline;
pub mod surface;
