use std::process::ExitCode;

use backend::Context;
use clap::error::ErrorKind;
use clap::Parser;
use game::assets::Assets;
use game::cli::Cli;
use game::config::Settings;
use game::{frame, GameError};
use log::{error, info};

fn run() -> Result<(), GameError> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("game");
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => return Err(GameError::usage(program, e)),
    };
    let settings = Settings::default().with_size(cli.window_size());
    info!("starting {} with requested size {}", settings.title, settings.size);

    let mut context = Context::new(&settings.title, settings.size.width, settings.size.height)?;
    let mut handles = context.handles();
    let texture_creator = handles.canvas.texture_creator();
    let assets = Assets::load(&handles, &texture_creator, &settings)?;

    frame::run(&mut handles, &texture_creator, &assets, &settings)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let GameError::Backend(ref cause) = e {
                error!("game failure: {cause:?}");
            }
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
