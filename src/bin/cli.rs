use anyhow::Result;
use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use framesim::{PageId, PolicyKind, ReferenceOutcome, Simulator};

const HISTORY_FILE: &str = ".fsim_history";

#[derive(Parser)]
#[command(author, version, about = "fsim - page replacement simulator")]
struct Cli {
    /// Number of physical frames
    #[arg(short, long, default_value_t = 4)]
    capacity: usize,

    /// Replacement policy (lru, clock, lfu)
    #[arg(short, long, default_value = "lru")]
    policy: String,

    /// Command to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a reference stream and print the resulting frame state
    Run {
        /// Page numbers to reference, in order
        pages: Vec<PageId>,

        /// Print the frame state after every reference
        #[arg(short, long)]
        trace: bool,
    },

    /// Start an interactive shell
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let policy: PolicyKind = cli.policy.parse()?;
    let mut sim = Simulator::new(cli.capacity, policy)?;

    match cli.command {
        Commands::Run { pages, trace } => run_stream(&mut sim, &pages, trace),
        Commands::Shell => run_shell(&mut sim),
    }
}

fn describe(page: PageId, outcome: ReferenceOutcome) -> String {
    match outcome {
        ReferenceOutcome::Hit => format!("page {page}: hit"),
        ReferenceOutcome::MissInstalled => format!("page {page}: miss, installed"),
        ReferenceOutcome::MissEvicted(victim) => {
            format!("page {page}: miss, evicted page {victim}")
        }
    }
}

fn run_stream(sim: &mut Simulator, pages: &[PageId], trace: bool) -> Result<()> {
    for &page in pages {
        let outcome = sim.reference(page);
        println!("{}", describe(page, outcome));
        if trace {
            println!("{}", sim.snapshot());
        }
    }
    if !trace {
        println!("{}", sim.snapshot());
    }
    Ok(())
}

fn run_shell(sim: &mut Simulator) -> Result<()> {
    println!(
        "framesim shell: {} policy, {} frames. Type 'help' for assistance or 'exit' to quit.",
        sim.policy(),
        sim.capacity()
    );

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        if !err.to_string().contains("No such file or directory") {
            println!("Error loading history: {}", err);
        }
    }

    loop {
        let readline = rl.readline("fsim> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match line.to_lowercase().as_str() {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" => {
                        print_help();
                    }
                    "dump" => {
                        print!("{}", sim.snapshot());
                    }
                    "reset" => {
                        *sim = Simulator::new(sim.capacity(), sim.policy())
                            .expect("capacity already validated");
                        println!("Frames cleared.");
                    }
                    _ => match line.parse::<PageId>() {
                        Ok(page) => {
                            let outcome = sim.reference(page);
                            println!("{}", describe(page, outcome));
                        }
                        Err(_) => {
                            println!("Unrecognized command: {}", line);
                        }
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  <page>   - Reference a page by number");
    println!("  dump     - Print the current frame state");
    println!("  reset    - Clear all frames and policy state");
    println!("  help     - Display this help message");
    println!("  exit     - Exit the shell");
}
