use std::path::Path;
use std::process;

use ccap_engine::vocab::{VocabKind, VocabRegistry};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            ccap_engine::trace_init::finish_tracing();
            process::exit(1);
        })
    };
}

pub fn vocab_info(file: &str) {
    let reg = die!(VocabRegistry::load(Path::new(file)), "Error opening {file}: {}");
    for (kind, size) in reg.sizes() {
        println!("{:<12}{size}", kind.as_str());
    }
}

pub fn vocab_list(file: &str, kind: &str) {
    let kind: VocabKind = die!(kind.parse(), "Error: {}");
    let reg = die!(VocabRegistry::load(Path::new(file)), "Error opening {file}: {}");
    for (id, token) in reg.get(kind).tokens().iter().enumerate() {
        println!("{id:>6}  {token}");
    }
}

/// Re-encode a registry in the format picked by `output`'s extension.
pub fn vocab_convert(input: &str, output: &str) {
    let reg = die!(VocabRegistry::load(Path::new(input)), "Error opening {input}: {}");
    die!(reg.save(Path::new(output)), "Error writing {output}: {}");
    eprintln!("Wrote {output}");
}
