mod fields;
mod logging;
mod settings;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gimei_core::{Renderable, Script};
use gimei_generate::{Corpus, GenerationError, Gimei};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::info;

use fields::{FieldSpec, build_record};
use settings::{Settings, SettingsError, load_settings};

const DEFAULT_SEPARATOR: &str = ", ";
const DEFAULT_FIELD: &str = "name:name";

#[derive(Debug, Error)]
enum CliError {
    #[error("corpus error: {0}")]
    Generation(#[from] GenerationError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("{0}")]
    Usage(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "gimei",
    version,
    about = "Random Japanese names, addresses and postal codes",
    args_conflicts_with_subcommands = true,
    after_help = "Example:\n  $ gimei -n 3 name:name name:hiragana address:name postal:name"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    generate: GenerateArgs,
    /// TOML settings file with defaults and corpus overrides.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Write logs to stderr as JSON.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look a rendered name or address back up in the corpus.
    Find(FindArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of records to print.
    #[arg(short = 'n', long = "records", value_name = "N")]
    records: Option<usize>,
    /// Separator placed between fields.
    #[arg(long)]
    sep: Option<String>,
    /// Print the row count of every corpus table and exit.
    #[arg(long, default_value_t = false)]
    count: bool,
    /// Print records as a JSON array.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Seed the random source for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Fields as `kind[:field]`, e.g. `male:romaji` or `address:city-kanji`.
    #[arg(value_name = "ARGS")]
    fields: Vec<String>,
}

#[derive(Args, Debug)]
struct FindArgs {
    #[arg(value_enum)]
    target: FindTarget,
    /// Full rendering to decompose.
    text: String,
    #[arg(long, value_enum, default_value_t = ScriptArg::Kanji)]
    script: ScriptArg,
    /// Print the match as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FindTarget {
    Name,
    Address,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScriptArg {
    Kanji,
    Hiragana,
    Katakana,
    Romaji,
}

impl From<ScriptArg> for Script {
    fn from(value: ScriptArg) -> Self {
        match value {
            ScriptArg::Kanji => Script::Kanji,
            ScriptArg::Hiragana => Script::Hiragana,
            ScriptArg::Katakana => Script::Katakana,
            ScriptArg::Romaji => Script::Romaji,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("gimei: {err}");
            exit_code(&err)
        }
    }
}

fn exit_code(err: &CliError) -> ExitCode {
    match err {
        CliError::Usage(_) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    logging::init_logging(cli.log_json)?;

    let settings = load_settings(cli.config.as_deref())?;
    let gimei = build_gimei(&settings, cli.generate.seed)?;

    match cli.command {
        Some(Command::Find(args)) => run_find(&gimei, args),
        None => run_generate(&gimei, cli.generate, &settings),
    }
}

fn build_gimei(settings: &Settings, seed: Option<u64>) -> Result<Gimei, CliError> {
    let corpus = if settings.corpus.is_empty() {
        Corpus::embedded()
    } else {
        info!(corpus = ?settings.corpus, "loading corpus overrides");
        settings.corpus.build_corpus()?
    };

    let gimei = Gimei::with_corpus(corpus);
    if let Some(seed) = seed.or(settings.seed) {
        gimei.reseed(seed);
        info!(seed, "random source seeded");
    }
    Ok(gimei)
}

/// Output options after merging flags over the settings file.
#[derive(Debug, PartialEq, Eq)]
struct OutputOptions {
    records: usize,
    separator: String,
    json: bool,
    fields: Vec<String>,
}

impl OutputOptions {
    fn resolve(args: GenerateArgs, settings: &Settings) -> Self {
        let fields = if args.fields.is_empty() {
            vec![DEFAULT_FIELD.to_string()]
        } else {
            args.fields
        };
        Self {
            records: args.records.or(settings.records).unwrap_or(1),
            separator: args
                .sep
                .or_else(|| settings.separator.clone())
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
            json: args.json || settings.json.unwrap_or(false),
            fields,
        }
    }
}

fn run_generate(
    gimei: &Gimei,
    args: GenerateArgs,
    settings: &Settings,
) -> Result<ExitCode, CliError> {
    let count = args.count;
    let OutputOptions {
        records,
        separator,
        json,
        fields,
    } = OutputOptions::resolve(args, settings);
    let mut out = io::stdout().lock();

    if count {
        let counts = gimei.count_data();
        if json {
            writeln!(out, "{}", serde_json::to_string(&counts)?)?;
        } else {
            writeln!(out, "{counts}")?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let specs = fields
        .iter()
        .map(|arg| FieldSpec::parse(arg))
        .collect::<Result<Vec<_>, _>>()?;

    info!(records, fields = specs.len(), json, "generating records");

    if json {
        let rows: Vec<Map<String, Value>> = (0..records)
            .map(|_| {
                build_record(gimei, &specs)
                    .into_iter()
                    .map(|(label, value)| (label, Value::String(value)))
                    .collect()
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string(&rows)?)?;
    } else {
        for _ in 0..records {
            let values: Vec<String> = build_record(gimei, &specs)
                .into_iter()
                .map(|(_, value)| value)
                .collect();
            writeln!(out, "{}", values.join(&separator))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run_find(gimei: &Gimei, args: FindArgs) -> Result<ExitCode, CliError> {
    let script = Script::from(args.script);
    info!(lookup = ?args.target, script = %script, "lookup requested");

    match args.target {
        FindTarget::Name => {
            let found = gimei.find_name(&args.text, script);
            let extra = found
                .as_ref()
                .map(|name| vec![("sex", name.sex.to_string())])
                .unwrap_or_default();
            print_found(found.as_ref(), &Script::ALL, &extra, args.json)
        }
        FindTarget::Address => {
            let found = gimei.find_address(&args.text, script);
            let scripts = [Script::Kanji, Script::Hiragana, Script::Katakana];
            print_found(found.as_ref(), &scripts, &[], args.json)
        }
    }
}

fn print_found<T: Renderable + Serialize>(
    found: Option<&T>,
    scripts: &[Script],
    extra: &[(&str, String)],
    json: bool,
) -> Result<ExitCode, CliError> {
    let Some(found) = found else {
        eprintln!("not found");
        return Ok(ExitCode::FAILURE);
    };

    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string(found)?)?;
    } else {
        for script in scripts {
            writeln!(out, "{script}: {}", found.render(*script))?;
        }
        for (key, value) in extra {
            writeln!(out, "{key}: {value}")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gimei_core::Name;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("parse arguments")
    }

    #[test]
    fn seed_flag_wins_over_settings() {
        let settings = Settings {
            seed: Some(1),
            ..Settings::default()
        };
        let gimei = build_gimei(&settings, Some(2)).expect("build");
        let expected = Gimei::seeded(2);
        for _ in 0..5 {
            assert_eq!(gimei.name(), expected.name());
        }

        let from_settings = build_gimei(&settings, None).expect("build");
        let expected = Gimei::seeded(1);
        for _ in 0..5 {
            assert_eq!(from_settings.name(), expected.name());
        }
    }

    #[test]
    fn output_flags_win_over_settings() {
        let settings = Settings {
            separator: Some(" | ".to_string()),
            records: Some(4),
            json: Some(true),
            ..Settings::default()
        };

        let cli = parse(&["gimei", "-n", "2", "--sep", ";", "male"]);
        let options = OutputOptions::resolve(cli.generate, &settings);
        assert_eq!(options.records, 2);
        assert_eq!(options.separator, ";");
        assert!(options.json);
        assert_eq!(options.fields, vec!["male".to_string()]);

        let cli = parse(&["gimei"]);
        let options = OutputOptions::resolve(cli.generate, &Settings::default());
        assert_eq!(
            options,
            OutputOptions {
                records: 1,
                separator: DEFAULT_SEPARATOR.to_string(),
                json: false,
                fields: vec![DEFAULT_FIELD.to_string()],
            }
        );
    }

    #[test]
    fn lookup_miss_exits_with_failure() {
        assert_eq!(
            print_found::<Name>(None, &Script::ALL, &[], false).expect("print"),
            ExitCode::FAILURE
        );

        let cli = parse(&["gimei", "find", "name", "nobody"]);
        let Some(Command::Find(args)) = cli.command else {
            panic!("expected find subcommand");
        };
        let gimei = Gimei::seeded(3);
        assert_eq!(run_find(&gimei, args).expect("find"), ExitCode::FAILURE);
    }

    #[test]
    fn lookup_hit_exits_with_success() {
        let gimei = Gimei::seeded(3);
        let hiragana = gimei.male().hiragana();
        let cli = parse(&["gimei", "find", "name", "--script", "hiragana", hiragana.as_str()]);
        let Some(Command::Find(args)) = cli.command else {
            panic!("expected find subcommand");
        };
        assert_eq!(run_find(&gimei, args).expect("find"), ExitCode::SUCCESS);
    }

    #[test]
    fn unknown_kind_or_field_exits_with_usage_code() {
        let err = FieldSpec::parse("robot").expect_err("unknown kind");
        assert_eq!(exit_code(&err), ExitCode::from(2));

        let err = FieldSpec::parse("name:middle").expect_err("unknown field");
        assert_eq!(exit_code(&err), ExitCode::from(2));

        let err = CliError::Logging("subscriber already set".to_string());
        assert_eq!(exit_code(&err), ExitCode::FAILURE);
    }
}
