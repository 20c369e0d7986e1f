use clap::Parser;
use form_scenarios::cli::commands::{cmd_count, cmd_generate, cmd_steps};
use form_scenarios::cli::config::{Cli, Commands, load_config};
use form_scenarios::logging::init_logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Generate {
            scenario,
            elements,
            snapshot,
            format,
            output,
            max_scenarios,
            trace,
        } => {
            cmd_generate(
                &scenario,
                elements.as_deref(),
                snapshot.as_deref(),
                format.as_deref(),
                output.as_deref(),
                max_scenarios,
                trace.as_deref(),
                &config.generate,
            )?;
        }
        Commands::Count {
            scenario,
            elements,
            snapshot,
        } => {
            cmd_count(&scenario, elements.as_deref(), snapshot.as_deref())?;
        }
        Commands::Steps => cmd_steps(),
    }

    Ok(())
}
