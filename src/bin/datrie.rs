//! Minimal dictionary driver
//!
//! Loads a line-oriented dictionary into a double-array trie, answers
//! membership queries, and optionally writes the persisted array layout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use datrie::io::{load_file, write_arrays_to_file};
use datrie::{DoubleArrayTrie, StatisticsProvider, Trie};

#[derive(Parser, Debug)]
#[command(name = "datrie", version, about = "Double-array trie dictionary lookup")]
struct Args {
    /// Dictionary file, one word per line
    dict: PathBuf,

    /// Words to test for membership
    #[arg(required = true)]
    words: Vec<String>,

    /// Write the BASE/CHECK array layout to this file after loading
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Print construction statistics after loading
    #[arg(long)]
    stats: bool,
}

fn run(args: &Args) -> datrie::Result<()> {
    let mut trie = DoubleArrayTrie::new();
    let report = load_file(&mut trie, &args.dict)?;
    eprintln!(
        "loaded {} words ({} skipped) from {}",
        report.inserted,
        report.skipped,
        args.dict.display()
    );

    if args.stats {
        let stats = trie.stats();
        eprintln!(
            "states={} transitions={} relocations={} capacity={} memory={}B",
            stats.num_states,
            stats.num_transitions,
            stats.num_relocations,
            stats.capacity,
            stats.memory_usage
        );
    }

    for word in &args.words {
        println!("{word}\t{}", trie.contains(word));
    }

    if let Some(path) = &args.dump {
        write_arrays_to_file(&trie, path)?;
        eprintln!("wrote array layout to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("datrie: {err}");
            ExitCode::FAILURE
        }
    }
}
