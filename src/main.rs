use std::process::ExitCode;

use sigmoid_net::app;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "sigmoid-net".to_string());

    let command = match app::parse_args(args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{}", app::usage(&program));
            return ExitCode::FAILURE;
        }
    };

    match app::run(&command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", app::failure_message(&program, &e));
            ExitCode::FAILURE
        }
    }
}
