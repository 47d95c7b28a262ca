mod cli;
mod error;
mod repl;
mod runtime;
mod syntax;

use std::{fs, io, process};

use clap::Parser;
use cli::{Cli, Command, DEFAULT_PROMPT};
use repl::Session;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    let session = Session::new(cli.format, cli.precision.into());
    let command = cli.command.unwrap_or(Command::Repl {
        prompt: DEFAULT_PROMPT.to_string(),
    });

    match command {
        Command::Repl { prompt } => {
            let stdin = io::stdin();
            if let Err(why) = session.run(
                stdin.lock(),
                &mut io::stdout(),
                &mut io::stderr(),
                Some(prompt.as_str()),
            ) {
                eprintln!("{why}");
                process::exit(1);
            }
            println!();
        }
        Command::Eval { expr } => match session.render(&expr) {
            Ok(rendered) => println!("{rendered}"),
            Err(why) => {
                eprintln!("error: {why} in `{expr}`");
                process::exit(1);
            }
        },
        Command::File { file } => {
            let src = match fs::read_to_string(&file) {
                Ok(src) => src,
                Err(why) => {
                    eprintln!("File {file:?} could not be read: {why}");
                    process::exit(1);
                }
            };

            match session.run(src.as_bytes(), &mut io::stdout(), &mut io::stderr(), None) {
                Ok(0) => (),
                Ok(failures) => {
                    log::info!("{failures} lines of {file:?} failed");
                    process::exit(1);
                }
                Err(why) => {
                    eprintln!("{why}");
                    process::exit(1);
                }
            }
        }
    }
}
