use clap::Parser;
use inkfill::cli::{Cli, Commands};
use inkfill::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Fill(args) => {
            inkfill::cli::fill::run(args, &printer)?;
        }
        Commands::Probe(args) => {
            inkfill::cli::probe::run(args, &printer)?;
        }
        Commands::Init(args) => inkfill::cli::init::run(args, &printer)?,
        Commands::Completions(args) => inkfill::cli::completions::run(args)?,
    }

    Ok(())
}
