pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::CliArgs;
pub use handlers::{
    handle_scaffold, interrupt_signal, load_config, report_config_error, run_scaffold,
    ScaffoldRequest,
};
pub use output::OutputFormatter;
