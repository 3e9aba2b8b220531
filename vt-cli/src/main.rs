//! Vocabulary Transfer CLI
//!
//! Compares a Bing Dict vocabulary export against a Youdao Dict export and
//! reports the words missing from Youdao. The list can be written to a file
//! and/or replayed into Youdao's "add word" dialog as simulated keyboard
//! input.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use voca_transfer::{
    constants, diff, replay, Key, ReplayConfig, ReplayOrder, SourceSchema, SystemKeyboard,
    VocabSource,
};

/// Transfer the Bing Dict vocabulary into Youdao Dict
#[derive(Parser)]
#[command(name = "vt")]
#[command(version)]
#[command(about = "Transfer the Bing Dict vocabulary into Youdao Dict", long_about = None)]
struct Cli {
    /// Print the words present in both vocabularies
    #[arg(short = 'd', long)]
    duplicate: bool,

    /// Write the sorted word list into a file
    #[arg(short = 'w', long)]
    write: bool,

    /// Execute the keyboard-input simulation in the target application
    #[arg(short = 'x', long)]
    execute: bool,

    /// Bing Dict vocabulary export
    #[arg(long, default_value = constants::DEFAULT_BING_FILE)]
    bing_file: String,

    /// Youdao Dict vocabulary export
    #[arg(long, default_value = constants::DEFAULT_YOUDAO_FILE)]
    youdao_file: String,

    /// Output file for --write
    #[arg(short = 'o', long, default_value = constants::DEFAULT_WORDLIST_FILE)]
    output: String,

    /// Key that starts the simulation once the target input field is focused
    #[arg(long, default_value = constants::DEFAULT_TRIGGER)]
    trigger: String,

    /// Hotkey that saves a typed word in the target application
    #[arg(long, default_value = constants::SAVE_HOTKEY)]
    save_hotkey: String,

    /// Order in which missing words are replayed
    #[arg(long, value_enum, default_value_t = OrderArg::Descending)]
    order: OrderArg,
}

#[derive(Copy, Clone, ValueEnum)]
enum OrderArg {
    Ascending,
    Descending,
}

impl From<OrderArg> for ReplayOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Ascending => ReplayOrder::Ascending,
            OrderArg::Descending => ReplayOrder::Descending,
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = VocabSource::new(&cli.bing_file, SourceSchema::bing());
    let target = VocabSource::new(&cli.youdao_file, SourceSchema::youdao());

    let words = if cli.duplicate {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let words = diff(&source, &target, Some(&mut out))?;
        writeln!(out)?;
        words
    } else {
        diff(&source, &target, None)?
    };

    eprintln!("{} words missing from the Youdao vocabulary.", words.len());

    if cli.write {
        voca_transfer::write_wordlist(&words, &cli.output)?;
        eprintln!("Word list written to {}", cli.output);
    }

    if cli.execute {
        let config = ReplayConfig {
            trigger: Key::parse(&cli.trigger)?,
            save_combo: Key::parse_combo(&cli.save_hotkey)?,
            order: cli.order.into(),
            ..ReplayConfig::default()
        };
        let mut keyboard = SystemKeyboard::new()?;
        eprintln!(
            "Focus the target input field and press '{}' to start the replay...",
            cli.trigger
        );
        replay(&mut keyboard, &words, &config)?;
        eprintln!("Replay complete.");
    }

    Ok(())
}
