//! Pipeline simulator CLI.
//!
//! This binary loads the three input files, runs the simulator to completion and
//! writes the per-cycle dump. It performs:
//! 1. **Configuration:** Built-in defaults, optionally overlaid by a JSON file, then
//!    by individual path flags.
//! 2. **Logging:** Installs a `tracing` subscriber; `--trace` turns on per-stage events.
//! 3. **Run:** Streams every snapshot to the output file and reports the cycle count.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mipsim_core::Config;
use mipsim_core::Simulator;
use mipsim_core::common::SimError;
use mipsim_core::sim::WriterSink;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Cycle-accurate five-buffer pipeline simulator",
    long_about = "Simulates ADD/SUB/AND/OR/LD programs on an 8-register, 8-word machine and \
                  dumps every buffer after every cycle.\n\nExamples:\n  \
                  mipsim run\n  \
                  mipsim run --instructions prog.txt --output trace.txt --stats\n  \
                  mipsim run --config mipsim.json --trace"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until the pipeline drains.
    Run {
        /// Program file, one <OPCODE,Rd,Rs,Rt> per line.
        #[arg(long)]
        instructions: Option<PathBuf>,

        /// Initial register values, one <Rn,value> per line.
        #[arg(long)]
        registers: Option<PathBuf>,

        /// Initial data memory, one <addr,value> per line.
        #[arg(long)]
        memory: Option<PathBuf>,

        /// Where to write the per-cycle dump.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log every stage action to stderr.
        #[arg(long)]
        trace: bool,

        /// Print the statistics report after the run.
        #[arg(long)]
        stats: bool,
    },
}

/// Options for a single `run` invocation.
#[derive(Debug)]
struct RunArgs {
    instructions: Option<PathBuf>,
    registers: Option<PathBuf>,
    memory: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    trace: bool,
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            instructions,
            registers,
            memory,
            output,
            config,
            trace,
            stats,
        }) => {
            let args = RunArgs {
                instructions,
                registers,
                memory,
                output,
                config,
                trace,
                stats,
            };
            if let Err(e) = cmd_run(args) {
                eprintln!("\n[!] FATAL: {e}");
                process::exit(1);
            }
        }
        None => {
            eprintln!("Pipeline Simulator: pass a subcommand");
            eprintln!();
            eprintln!("  mipsim run                      Run with instructions.txt, registers.txt, datamemory.txt");
            eprintln!("  mipsim run --output trace.txt   Write the dump somewhere else");
            eprintln!();
            eprintln!("  mipsim --help  for full options");
            process::exit(1);
        }
    }
}

/// Installs the global `tracing` subscriber.
///
/// With `trace` set every stage event is shown; otherwise `RUST_LOG` decides,
/// falling back to warnings only (skipped lines, dropped instructions).
fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Builds the configuration, runs the simulation and writes the dump.
///
/// Path flags override the corresponding `io` entries from `--config`.
fn cmd_run(args: RunArgs) -> Result<(), SimError> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(p) = args.instructions {
        config.io.instructions = p;
    }
    if let Some(p) = args.registers {
        config.io.registers = p;
    }
    if let Some(p) = args.memory {
        config.io.data_memory = p;
    }
    if let Some(p) = args.output {
        config.io.output = p;
    }

    init_logging(args.trace || config.general.trace_stages);

    let mut sim = Simulator::from_config(&config)?;
    println!(
        "[*] Loaded {} instructions ({} lines skipped)",
        sim.cpu.queue.len(),
        sim.stats().skipped_lines
    );

    let file = File::create(&config.io.output)?;
    let mut sink = WriterSink::new(BufWriter::new(file));
    let cycles = sim.run(&mut sink)?;
    let _ = sink.into_inner()?;

    println!(
        "[*] Simulation complete: {} steps, {} cycles -> {}",
        cycles + 1,
        cycles,
        config.io.output.display()
    );
    if args.stats {
        sim.stats().print();
    }
    Ok(())
}
