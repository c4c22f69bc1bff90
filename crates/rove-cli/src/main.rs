//! CLI frontend for the Rove text adventure.

mod campus;

use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use colored::Colorize;

use rove_engine::{Session, SessionConfig};

#[derive(Parser)]
#[command(
    name = "rove",
    about = "Rove — a small weight-and-wander text adventure",
    version
)]
struct Cli {
    /// Starting carrying capacity in kilograms
    #[arg(long, default_value_t = 5.0)]
    capacity: f64,

    /// Print the built-in world as JSON and exit
    #[arg(long)]
    dump_world: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let (world, start) = campus::build().map_err(|e| e.to_string())?;

    if cli.dump_world {
        let json = serde_json::to_string_pretty(&world).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let config = SessionConfig::default().with_capacity(cli.capacity);
    let mut session = Session::new(world, start, config).map_err(|e| e.to_string())?;

    println!();
    println!("Welcome to {}!", session.world().meta.name.bold());
    println!("This is {}.", session.world().meta.description);
    println!("Type '{}' if you need help.", "help".bold());
    println!();
    println!("{}", session.look());

    loop {
        print!("{} ", ">".bold());
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            // End of input counts as walking away.
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let outcome = session.process(input);
        println!("{}", outcome.text);
        if outcome.terminate {
            break;
        }
    }

    Ok(())
}
