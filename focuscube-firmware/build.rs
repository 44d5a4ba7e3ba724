//! Build script for focuscube-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates cube.toml and turns it into constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    setup_linker(&out_dir);
    let config = load_config();
    write_config(&out_dir, &config);
}

/// Values read from cube.toml
struct CubeToml {
    top_threshold: f64,
    bottom_threshold: f64,
    commit_ticks: i64,
    tick_period_ms: i64,
    button_debounce_ms: i64,
    telemetry_enabled: bool,
    telemetry_baud_rate: i64,
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).expect("create memory.x");
    f.write_all(memory_x).expect("write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Print a boxed error and stop the build
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|line| format!("║  • {:<62} ║", fit_line(line)))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Shorten a message to the box width, counting chars so multi-byte text
/// such as `±` is never split
fn fit_line(line: &str) -> String {
    if line.chars().count() > 62 {
        format!("{}...", line.chars().take(59).collect::<String>())
    } else {
        line.to_string()
    }
}

/// Read and validate cube.toml
fn load_config() -> CubeToml {
    println!("cargo:rerun-if-changed=cube.toml");

    let path = Path::new("cube.toml");
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail(
            "cube.toml could not be read",
            &[
                e.to_string(),
                "Create cube.toml in the focuscube-firmware directory".into(),
            ],
        ),
    };

    let value: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in cube.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();

    let config = CubeToml {
        top_threshold: float(&value, "orientation", "top_threshold", &mut errors),
        bottom_threshold: float(&value, "orientation", "bottom_threshold", &mut errors),
        commit_ticks: integer(&value, "orientation", "commit_ticks", &mut errors),
        tick_period_ms: integer(&value, "timing", "tick_period_ms", &mut errors),
        button_debounce_ms: integer(&value, "timing", "button_debounce_ms", &mut errors),
        telemetry_enabled: boolean(&value, "telemetry", "enabled", &mut errors),
        telemetry_baud_rate: integer(&value, "telemetry", "baud_rate", &mut errors),
    };

    if !errors.is_empty() {
        fail("Missing or mistyped keys in cube.toml", &errors);
    }

    validate(&config, &mut errors);
    if !errors.is_empty() {
        fail("Invalid values in cube.toml", &errors);
    }

    println!("cargo:warning=cube.toml validated successfully");
    config
}

fn lookup<'a>(value: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    value.get(section).and_then(|s| s.get(key))
}

fn float(value: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> f64 {
    match lookup(value, section, key) {
        Some(toml::Value::Float(f)) => *f,
        Some(toml::Value::Integer(i)) => *i as f64,
        Some(_) => {
            errors.push(format!("[{}] {} must be a number", section, key));
            0.0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0.0
        }
    }
}

fn integer(value: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> i64 {
    match lookup(value, section, key) {
        Some(toml::Value::Integer(i)) => *i,
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
}

fn boolean(value: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> bool {
    match lookup(value, section, key) {
        Some(toml::Value::Boolean(b)) => *b,
        Some(_) => {
            errors.push(format!("[{}] {} must be true or false", section, key));
            false
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            false
        }
    }
}

fn validate(config: &CubeToml, errors: &mut Vec<String>) {
    for (key, v) in [
        ("top_threshold", config.top_threshold),
        ("bottom_threshold", config.bottom_threshold),
    ] {
        if !(-2.0..=2.0).contains(&v) {
            errors.push(format!("[orientation] {} must be within ±2.0 g", key));
        }
    }
    if config.top_threshold <= config.bottom_threshold {
        errors.push("[orientation] top_threshold must be above bottom_threshold".into());
    }
    if !(1..=1000).contains(&config.commit_ticks) {
        errors.push("[orientation] commit_ticks must be 1-1000".into());
    }
    if !(10..=10_000).contains(&config.tick_period_ms) {
        errors.push("[timing] tick_period_ms must be 10-10000".into());
    }
    if !(0..=1000).contains(&config.button_debounce_ms) {
        errors.push("[timing] button_debounce_ms must be 0-1000".into());
    }
    if !(1200..=1_000_000).contains(&config.telemetry_baud_rate) {
        errors.push("[telemetry] baud_rate must be 1200-1000000".into());
    }
}

/// Write cube_config.rs into OUT_DIR
fn write_config(out_dir: &Path, config: &CubeToml) {
    let generated = format!(
        "// Generated by build.rs from cube.toml\n\
         \n\
         pub const CUBE_CONFIG: FocusConfig = FocusConfig {{\n\
         \x20   classifier: ClassifierConfig {{\n\
         \x20       top_threshold: {:?}_f32,\n\
         \x20       bottom_threshold: {:?}_f32,\n\
         \x20   }},\n\
         \x20   commit_ticks: {},\n\
         \x20   tick_period_ms: {},\n\
         \x20   button_debounce_ms: {},\n\
         }};\n\
         \n\
         pub const TELEMETRY_ENABLED: bool = {};\n\
         pub const TELEMETRY_BAUD_RATE: u32 = {};\n",
        config.top_threshold,
        config.bottom_threshold,
        config.commit_ticks,
        config.tick_period_ms,
        config.button_debounce_ms,
        config.telemetry_enabled,
        config.telemetry_baud_rate,
    );

    fs::write(out_dir.join("cube_config.rs"), generated).expect("write cube_config.rs");
}
