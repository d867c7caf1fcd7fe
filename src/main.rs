#![allow(non_snake_case)]
use RustedPoly::Utils::config_parser::CalcConfig;
use RustedPoly::Utils::logger::init_logger;
use RustedPoly::calculator::calc::Calculator;
use RustedPoly::symbolic::parse_poly::PolyParser;
use log::info;
use std::io;
use std::process::ExitCode;

/// Stack calculator on stdin. The optional first argument is a configuration file.
fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match CalcConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => CalcConfig::default(),
    };
    match init_logger(config.loglevel, config.log_file) {
        Ok(Some(name)) => info!("logging into {}", name),
        Ok(None) => {}
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    }
    info!("calculator started with {:?}", config);

    let mut calc = Calculator::new(PolyParser::new(config.max_depth));
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    match calc.run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
