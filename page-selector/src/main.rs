use std::process::ExitCode;

use page_selector::{SelectorConfig, app};
use simplelog::LevelFilter;

fn main() -> ExitCode {
    if let Err(e) = app::init_logging(LevelFilter::Debug) {
        eprintln!("Warning: logging disabled: {e}");
    }

    match app::run(SelectorConfig::default()) {
        Ok(confirmation) => {
            // Last confirmed labels, one per line, for shell pipelines
            for label in confirmation.iter().flat_map(|c| c.labels()) {
                println!("{label}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
