//! refreturn CLI binary
//!
//! Thin adapter: parse arguments, run a scan, map the outcome to an exit code.

use refreturn::report::Reporter;
use refreturn::scan::Scanner;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = refreturn::cli::parse_args();

    // Initialize logger if verbose
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    }

    let reporter = Reporter::new(std::io::stdout());
    let result = cli
        .scan_config()
        .and_then(Scanner::new)
        .and_then(|scanner| scanner.run(&cli.path, &reporter));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
