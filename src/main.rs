use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::error;

use apfelshader::app;
use apfelshader::config::Config;

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cfg = Config::parse();
    match app::run(cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
