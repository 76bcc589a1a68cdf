use std::fs::read_to_string;
use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::StructOpt;

use nfa_tools::compile;
use nfa_tools::persist::SavedNfa;
use nfa_tools::suite::{run_suite, SuiteConfig};


/// Convert regular expressions to NFAs and run strings through them.
#[derive(StructOpt)]
enum Cli {
    /// Print the postfix form and the transition listing of a pattern
    Convert {
        pattern: String,
    },
    /// Check whether the NFA of a pattern accepts a string
    Simulate {
        pattern: String,
        input: String,
    },
    /// Run a batch of strings against the NFA of a pattern
    Test {
        pattern: String,
        strings: Vec<String>,
        /// Read more strings from a file, one per line
        #[structopt(short, long, parse(from_os_str))]
        file: Option<PathBuf>,
        /// Keep empty strings instead of skipping them
        #[structopt(long)]
        keep_blank: bool,
        #[structopt(long)]
        sequential: bool,
    },
    /// Save the NFA of a pattern as JSON
    Save {
        pattern: String,
        #[structopt(short, long, parse(from_os_str), default_value = "nfa_data.json")]
        output: PathBuf,
    },
    /// Load a saved NFA, print it and optionally simulate strings against it
    Load {
        #[structopt(parse(from_os_str), default_value = "nfa_data.json")]
        path: PathBuf,
        #[structopt(short, long)]
        simulate: Vec<String>,
    },
}

fn verdict(accepted: bool) -> &'static str {
    if accepted { "accepted" } else { "rejected" }
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::from_args() {
        Cli::Convert { pattern } => {
            let compiled = compile(&pattern)?;
            println!("Postfix: {}\n\nTransitions:\n{}", compiled.postfix, compiled.nfa.transitions());
        }
        Cli::Simulate { pattern, input } => {
            let nfa = compile(&pattern)?.nfa;
            println!("String '{}' is {} by the NFA.", input, verdict(nfa.accepts(&input)));
        }
        Cli::Test { pattern, mut strings, file, keep_blank, sequential } => {
            let nfa = compile(&pattern)?.nfa;
            if let Some(file) = file {
                let contents = read_to_string(&file)
                    .with_context(|| format!("could not read test strings from {:?}", file))?;
                strings.extend(contents.lines().map(str::to_string));
            }
            let config = SuiteConfig::builder()
                .skip_blank(!keep_blank)
                .parallel(!sequential)
                .build();
            for v in run_suite(&nfa, strings.iter().map(String::as_str), &config) {
                println!("{}\t{}", v.input, v.outcome);
            }
        }
        Cli::Save { pattern, output } => {
            let compiled = compile(&pattern)?;
            SavedNfa::from(&compiled).save(&output)
                .with_context(|| format!("could not save NFA to {:?}", output))?;
            println!("NFA saved to {:?}", output);
        }
        Cli::Load { path, simulate } => {
            let saved = SavedNfa::load(&path)
                .with_context(|| format!("could not load NFA from {:?}", path))?;
            let nfa = saved.nfa().context("saved transitions are invalid")?;
            println!("Postfix: {}\n\nTransitions:\n{}", saved.postfix, saved.transitions);
            for input in simulate {
                println!("String '{}' is {} by the NFA.", input, verdict(nfa.accepts(&input)));
            }
        }
    }
    Ok(())
}
