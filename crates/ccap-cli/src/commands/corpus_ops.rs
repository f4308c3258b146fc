use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use ccap_engine::api::Engine;
use ccap_engine::dataset::{
    AcceptAll, AssemblyOptions, DatasetAssembler, EmbeddingLookup, FrequencyList, SourceError,
    Split, WordSet,
};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            ccap_engine::trace_init::finish_tracing();
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("{path}: {source}")]
    Source { path: PathBuf, source: SourceError },
}

pub struct BuildOptions<'a> {
    pub freq_file: &'a str,
    pub test_file: Option<&'a str>,
    pub embeddings_file: Option<&'a str>,
    pub vocab_file: Option<&'a str>,
    pub output_file: &'a str,
    pub train_size: Option<usize>,
}

fn read_test_entries(path: &Path) -> Result<Vec<String>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

fn open_frequency_list(path: &Path) -> Result<FrequencyList, InputError> {
    FrequencyList::open(path).map_err(|source| InputError::Source {
        path: path.to_path_buf(),
        source,
    })
}

fn open_word_set(path: &Path) -> Result<WordSet, InputError> {
    WordSet::open(path).map_err(|source| InputError::Source {
        path: path.to_path_buf(),
        source,
    })
}

pub fn build(opts: &BuildOptions) {
    let freq = die!(open_frequency_list(Path::new(opts.freq_file)), "Error: {}");
    let test_entries = match opts.test_file {
        Some(f) => die!(read_test_entries(Path::new(f)), "Error: {}"),
        None => Vec::new(),
    };
    let word_set = opts
        .embeddings_file
        .map(|f| die!(open_word_set(Path::new(f)), "Error: {}"));
    let embeddings: &dyn EmbeddingLookup = match &word_set {
        Some(set) => set,
        None => &AcceptAll,
    };

    let mut options = AssemblyOptions::default();
    if let Some(n) = opts.train_size {
        options.train_size = n;
    }

    let engine = match opts.vocab_file {
        Some(path) if Path::new(path).exists() => {
            die!(Engine::open(Path::new(path)), "Error opening {path}: {}")
        }
        _ => Engine::new(),
    };

    let assembler = DatasetAssembler::new(&freq, embeddings).with_options(options);
    let corpus = die!(
        engine.assemble(&assembler, &freq.words(), &test_entries),
        "Error: {}"
    );

    let json = die!(corpus.to_json(), "Error serializing corpus: {}");
    die!(
        fs::write(opts.output_file, json),
        "Error writing {}: {}",
        opts.output_file
    );
    if let Some(path) = opts.vocab_file {
        die!(engine.save(Path::new(path)), "Error saving {path}: {}");
    }

    let m = &corpus.max_lengths;
    eprintln!(
        "train: {}, test: {}, excluded: {} (train {}, test {})",
        corpus.train.len(),
        corpus.test.len(),
        corpus.excluded.len(),
        corpus.excluded_in(Split::Train).count(),
        corpus.excluded_in(Split::Test).count(),
    );
    eprintln!(
        "max lengths: ortho {}, phone {}, mora {}, mora_phone {}",
        m.ortho, m.phone, m.mora, m.mora_phone
    );
    eprintln!("Wrote {}", opts.output_file);
}
