use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use en_wordtools::{
    engine::{default_engine, InflectionEngine},
    noun::Noun,
    search,
    term::Term,
};
use log::debug;
use std::io::{self, BufRead, Write};

#[derive(Debug, Parser)]
#[clap(name = "wordtools")]
#[clap(about = "Converts English nouns between singular and plural")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
    #[clap(short, long)]
    #[clap(help = "Log every rule considered while inflecting.")]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[clap(about = "Prints the plural of each word.")]
    Plural(Words),
    #[clap(about = "Prints the singular of each word.")]
    Singular(Words),
    #[clap(about = "Prints whether each word is singular, plural, or both.")]
    Classify(Words),
    #[clap(about = "Prints every form of each word a search should match.")]
    Forms(Words),
}

#[derive(Debug, clap::Args)]
struct Words {
    #[clap(short, long)]
    #[clap(help = "Give each result the same casing as its input word.")]
    preserve_case: bool,
    #[clap(help = "The words to inflect. Read from stdin, one per line, when none are given.")]
    words: Vec<String>,
}

impl Command {
    fn words(&self) -> &Words {
        match self {
            Command::Plural(w)
            | Command::Singular(w)
            | Command::Classify(w)
            | Command::Forms(w) => w,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = if cli.verbose { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let words = cli.command.words();
    let input = if words.words.is_empty() {
        debug!("reading words from stdin");
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<String>, io::Error>>()
            .context("Could not read words from stdin")?
    } else {
        words.words.clone()
    };

    let engine = default_engine();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for word in input.iter().filter(|w| !w.trim().is_empty()) {
        writeln!(out, "{}", process(engine, &cli.command, word))
            .context("Could not write to stdout")?;
    }

    Ok(())
}

fn process(engine: &InflectionEngine, command: &Command, word: &str) -> String {
    let preserve_case = command.words().preserve_case;
    let noun = Noun::with_engine(word, engine);
    match command {
        Command::Plural(_) if preserve_case => noun.plural().into_owned(),
        Command::Plural(_) => engine.to_plural(word),
        Command::Singular(_) if preserve_case => noun.singular().into_owned(),
        Command::Singular(_) => engine.to_singular(word),
        Command::Classify(_) => {
            let class = match (noun.is_singular(), noun.is_plural()) {
                (true, true) => "both",
                (true, false) => "singular",
                _ => "plural",
            };
            format!("{}\t{}", word.trim(), class)
        }
        Command::Forms(_) => search::search_forms(engine, word).join(" "),
    }
}
