use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            ccap_engine::trace_init::finish_tracing();
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", ccap_engine::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        ccap_engine::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: corpus.train_size={}, filter.substitutions={}, normalize.max_passes={}",
        s.corpus.train_size,
        s.filter.substitutions.len(),
        s.normalize.max_passes
    );
}
