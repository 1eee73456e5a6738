use clap::Parser;
use extsort::cli::{Cli, exit_code, report_error, run_cli};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = run_cli(cli);

    if let Err(e) = &result {
        report_error(e);
    }
    std::process::exit(exit_code(&result));
}
