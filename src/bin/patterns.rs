use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use classroom_patterns::{finish, logging, Exercise, ExerciseConfig, Result, StdoutConsole};

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Run the design-pattern and SOLID classroom exercises")]
struct Cli {
    /// TOML file with output and facade settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every exercise
    List,
    /// Run a single exercise by name
    Run {
        /// Exercise name, e.g. `decorator` or `single-responsibility`
        name: String,
    },
    /// Run every exercise in order
    All,
}

fn banner(exercise: Exercise) {
    println!("{}", format!("=== {} ===", exercise.title()).cyan().bold());
}

fn execute(cli: Cli) -> Result<()> {
    let config = ExerciseConfig::resolve(cli.config.as_deref(), cli.no_color)?;
    config.output.apply();

    match cli.command {
        Commands::List => {
            for exercise in Exercise::ALL {
                println!("{} {}", format!("{:<24}", exercise.name()).green(), exercise.title());
            }
        }
        Commands::Run { name } => Exercise::run_named(&name, &StdoutConsole, &config)?,
        Commands::All => {
            for (i, exercise) in Exercise::ALL.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                banner(exercise);
                exercise.run(&StdoutConsole, &config)?;
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    logging::init_tracing();
    finish(execute(Cli::parse()))
}
