// Pipelines driven by the CLI commands.

pub mod build;
