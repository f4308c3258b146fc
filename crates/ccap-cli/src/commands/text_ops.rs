use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use ccap_engine::api::{Engine, EngineError};
use ccap_engine::mora::MoraExpansion;
use ccap_engine::normalize::normalize;
use ccap_engine::phoneme::convert;
use ccap_engine::unicode::katakana_to_hiragana;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            ccap_engine::trace_init::finish_tracing();
            process::exit(1);
        })
    };
}

/// Arguments, or stdin lines when no argument is given.
fn inputs(args: &[String]) -> Vec<String> {
    if !args.is_empty() {
        return args.to_vec();
    }
    let stdin = io::stdin();
    stdin
        .lock()
        .lines()
        .map(|l| die!(l, "Error reading stdin: {}"))
        .collect()
}

pub fn normalize_cmd(texts: &[String]) {
    for text in inputs(texts) {
        println!("{}", normalize(&text));
    }
}

pub fn phonemes_cmd(readings: &[String], json: bool) {
    for reading in inputs(readings) {
        let conv = convert(&katakana_to_hiragana(&reading));
        if json {
            println!("{}", die!(serde_json::to_string(&conv), "Error: {}"));
            continue;
        }
        println!("{}", conv.phonemes);
        if !conv.is_clean() {
            let chars: String = conv.unmapped.iter().collect();
            eprintln!("warning: {reading}: no rule for {chars:?}");
        }
    }
}

/// Expand each reading in order. A failed reading does not stop the rest.
pub fn expand_all(
    engine: &Engine,
    readings: &[String],
) -> Vec<(String, Result<MoraExpansion, EngineError>)> {
    readings
        .iter()
        .map(|r| (r.clone(), engine.expand(r)))
        .collect()
}

pub fn mora_cmd(readings: &[String], vocab: Option<&str>, json: bool) {
    let engine = match vocab {
        Some(path) if Path::new(path).exists() => {
            die!(Engine::open(Path::new(path)), "Error opening {path}: {}")
        }
        _ => Engine::new(),
    };

    let mut failed = 0usize;
    for (reading, result) in expand_all(&engine, &inputs(readings)) {
        let e = match result {
            Ok(e) => e,
            Err(err) => {
                eprintln!("error: {reading}: {err}");
                failed += 1;
                continue;
            }
        };
        if !e.dropped.is_empty() {
            let chars: String = e.dropped.iter().collect();
            eprintln!("warning: {reading}: skipped {chars:?}");
        }
        if json {
            println!("{}", die!(serde_json::to_string(&e), "Error: {}"));
            continue;
        }
        println!("mora:      {}", e.raw.join(" "));
        println!("resolved:  {}", e.resolved.join(" "));
        println!("reversed:  {}", e.reversed.join(" "));
        println!("ids:       {:?}", e.mora_ids);
        println!("mora_p:    {}", e.mora_phonemes.join(" "));
        println!("mora_p_r:  {}", e.reversed_mora_phonemes.join(" "));
        println!("phonemes:  {}", e.phonemes.join(" "));
    }

    if let Some(path) = vocab {
        die!(engine.save(Path::new(path)), "Error saving {path}: {}");
    }
    if failed > 0 {
        eprintln!("{failed} reading(s) failed");
        ccap_engine::trace_init::finish_tracing();
        process::exit(1);
    }
}
