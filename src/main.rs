use vladmake::cli::commands::CliArgs;
use vladmake::cli::handlers::{
    handle_scaffold, interrupt_signal, load_config, report_config_error, INTERRUPTED_EXIT_CODE,
};
use vladmake::util::logging::init_logging;
use vladmake::{NAME, VERSION};

use clap::Parser;
use std::process;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => process::exit(report_config_error(&e)),
    };
    init_logging(config.logging_config());

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = tokio::select! {
        code = handle_scaffold(&args, &config) => code,
        _ = interrupt_signal() => {
            println!();
            INTERRUPTED_EXIT_CODE
        }
    };

    process::exit(exit_code);
}
