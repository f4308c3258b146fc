use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use ccap_cli::commands::{config_ops, corpus_ops, text_ops, vocab_ops};
use ccap_engine::api;
use ccap_engine::trace_init::{finish_tracing, init_tracing};

#[derive(Parser)]
#[command(name = "ccaptool", about = "Japanese orthography/phoneme/mora corpus tool")]
struct Cli {
    /// Custom settings TOML (defaults are embedded)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory for the JSON trace log
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize text (stdin lines when no argument is given)
    Normalize {
        /// Text to normalize
        texts: Vec<String>,
    },
    /// Convert kana readings to Julius phonemes
    Phonemes {
        /// Kana readings
        readings: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Split readings into morae and expand long vowels
    Mora {
        /// Kana readings
        readings: Vec<String>,
        /// Vocabulary file to load and update (optional)
        #[arg(long)]
        vocab: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Assemble a train/test corpus
    Build {
        /// Frequency list (psylex format)
        freq_file: String,
        /// Output corpus JSON file
        output_file: String,
        /// Test word list, one entry per line
        #[arg(long)]
        test: Option<String>,
        /// Word list of the embedding vocabulary (all words accepted when absent)
        #[arg(long)]
        embeddings: Option<String>,
        /// Vocabulary file to load and update (optional)
        #[arg(long)]
        vocab: Option<String>,
        /// Number of training words (overrides corpus.train_size)
        #[arg(long)]
        train_size: Option<usize>,
    },
    /// Inspect or convert a vocabulary file
    Vocab {
        #[command(subcommand)]
        action: VocabAction,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Subcommand)]
enum VocabAction {
    /// Show the size of each vocabulary
    Info {
        /// Vocabulary file (.ccvr or .json)
        file: String,
    },
    /// List the tokens of one vocabulary with their ids
    List {
        /// Vocabulary file (.ccvr or .json)
        file: String,
        /// ortho, phone, mora or mora_phone
        kind: String,
    },
    /// Re-encode a vocabulary file (format chosen by extension)
    Convert {
        /// Input file
        input: String,
        /// Output file
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        init_tracing(Path::new(dir));
    }
    if let Some(file) = &cli.settings {
        if let Err(e) = api::settings_load_config(Path::new(file)) {
            eprintln!("Error loading settings: {e}");
            finish_tracing();
            process::exit(1);
        }
    }

    match cli.command {
        Command::Normalize { texts } => text_ops::normalize_cmd(&texts),
        Command::Phonemes { readings, json } => text_ops::phonemes_cmd(&readings, json),
        Command::Mora {
            readings,
            vocab,
            json,
        } => text_ops::mora_cmd(&readings, vocab.as_deref(), json),
        Command::Build {
            freq_file,
            output_file,
            test,
            embeddings,
            vocab,
            train_size,
        } => {
            let opts = corpus_ops::BuildOptions {
                freq_file: &freq_file,
                test_file: test.as_deref(),
                embeddings_file: embeddings.as_deref(),
                vocab_file: vocab.as_deref(),
                output_file: &output_file,
                train_size,
            };
            corpus_ops::build(&opts);
        }
        Command::Vocab { action } => match action {
            VocabAction::Info { file } => vocab_ops::vocab_info(&file),
            VocabAction::List { file, kind } => vocab_ops::vocab_list(&file, &kind),
            VocabAction::Convert { input, output } => vocab_ops::vocab_convert(&input, &output),
        },
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }

    finish_tracing();
}
