//! Entry point for the `fleetroute` binary.
#![forbid(unsafe_code)]

use fleetroute_cli::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = fleetroute_cli::run() {
        if let CliError::ArgumentParsing(clap_err) = &err {
            // Lets clap print help and version output with its own exit codes.
            clap_err.exit();
        }
        report(&err);
        std::process::exit(1);
    }
}

#[expect(clippy::print_stderr, reason = "fatal errors are reported on stderr")]
fn report(err: &CliError) {
    eprintln!("fleetroute: {err}");
}
