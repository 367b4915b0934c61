//! resql-conf - effective-configuration inspector.
//!
//! Accepts the same command line as the resql server, resolves the
//! effective configuration from defaults, the INI config file and the
//! given flags, initializes logging from the result, and logs the
//! resolved table. Exit code is 0 on success and on help/version, and
//! non-zero on any usage or validation error.

use std::process;

use clap::{CommandFactory, Parser};
use tracing::info;

use resql_config::{Args, ConfigLoader};

mod logging;

fn main() {
    // Help, version and unknown options are handled by clap before this
    // returns: help/version exit 0, usage errors print usage and exit
    // non-zero.
    let args = Args::parse();

    let config = match ConfigLoader::resolve(&args, true) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("resql: config failed: {e}");
            eprintln!("{}", Args::command().render_usage());
            process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config) {
        eprintln!("resql: {e:#}");
        process::exit(1);
    }

    info!("{}", resql_config::render(&config));
}
