//! The binary entry point for the Saturn renderer.

use clap::Parser;
use saturn_config::CliArgs;

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = saturn_app::run(args) {
        tracing::error!("{e}");
        eprintln!("saturn: {e}");
        std::process::exit(1);
    }
}
