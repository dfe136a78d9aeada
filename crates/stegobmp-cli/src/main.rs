use clap::Parser;
use log::error;

use stegobmp_core::StegoError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};
use commands::Session;

pub type CliResult<T> = Result<T, StegoError>;

fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    if let Err(e) = run(args) {
        error!("{e:?}");
        eprintln!("{}", user_message(&e));
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> CliResult<()> {
    let options = args.codec_options();
    let mut session = Session::new(args.history, args.user);

    match args.command {
        Commands::Synthesize(a) => a.run(options, &mut session),
        Commands::Hide(a) => a.run(options, &mut session),
        Commands::Unveil(a) => a.run(&mut session),
        Commands::UnveilRaw(a) => a.run(),
        Commands::Preview(a) => a.run(options),
        Commands::History(a) => a.run(&session),
    }
}

/// Extraction failures all look the same to a user, the log keeps the details.
fn user_message(e: &StegoError) -> String {
    match e {
        StegoError::CorruptPayload(_) | StegoError::InvalidEncoding(_) => {
            "No hidden message found or file is corrupted".to_string()
        }
        other => other.to_string(),
    }
}
