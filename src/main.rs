// SPDX-License-Identifier: PMPL-1.0-or-later

//! upways: translation and display helpers for the Upways upgrade calculator
//!
//! Looks up UI text in any shipped language, renders costs and durations the
//! way the calculator shows them, and checks strategy result files.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use upways::config::Settings;
use upways::diagnostics::{self, ConsoleSink};
use upways::format;
use upways::i18n::{
    ElementBinding, LanguagePersistence, LocalizationResolver, MemoryPersistence,
};
use upways::types::LocalizedItem;

#[derive(Parser)]
#[command(name = "upways")]
#[command(version)]
#[command(about = "Translation lookup, value formatting and strategy diagnostics")]
#[command(long_about = None)]
struct Cli {
    /// Settings file (YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Use this language for one invocation without remembering it
    #[arg(short, long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate one or more keys
    Translate {
        #[arg(value_name = "KEY", required = true)]
        keys: Vec<String>,
    },

    /// Translate a key and fill its {placeholders}
    Format {
        #[arg(value_name = "KEY")]
        key: String,

        /// Placeholder value as name=value (repeatable)
        #[arg(short, long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },

    /// Pick the singular or plural form of a key
    Plural {
        #[arg(value_name = "KEY")]
        key: String,

        #[arg(value_name = "COUNT", allow_negative_numbers = true)]
        count: i64,

        /// Extra placeholder value as name=value (repeatable)
        #[arg(short, long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },

    /// Translate a key in a given context (key_context)
    Context {
        #[arg(value_name = "KEY")]
        key: String,

        #[arg(value_name = "CONTEXT")]
        context: String,
    },

    /// Resolve the display name of an item given as JSON or plain text
    Name {
        #[arg(value_name = "ITEM")]
        item: String,

        /// Preferred language for this name only
        #[arg(short, long)]
        target: Option<String>,
    },

    /// List available languages
    Languages,

    /// Switch and remember the interface language
    SetLanguage {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Resolve a JSON list of {element, attribute, key} bindings
    Resolve {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Format a value the way the calculator displays it
    Value {
        #[arg(value_enum)]
        kind: ValueKind,

        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        value: f64,
    },

    /// Validate a strategy result file
    Validate {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Also check analysis panel and chart compatibility
        #[arg(long)]
        ui: bool,

        /// Dump waypoints and path as tables
        #[arg(long)]
        debug: bool,
    },

    /// Compare a legacy strategy result with a new one
    Compare {
        #[arg(value_name = "OLD")]
        old: PathBuf,

        #[arg(value_name = "NEW")]
        new: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ValueKind {
    Cost,
    Number,
    Compact,
    Duration,
    Percent,
    Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    upways::logging::init(&settings.log_level);

    let catalog = Arc::new(settings.build_catalog()?);
    let persistence: Arc<dyn LanguagePersistence> = match &cli.lang {
        Some(code) => Arc::new(MemoryPersistence::with_stored(code.clone())),
        None => Arc::new(settings.persistence()),
    };
    let resolver = LocalizationResolver::with_policy(catalog, persistence, settings.policy());

    if let Some(code) = &cli.lang {
        if !resolver.is_language_available(code) {
            eprintln!(
                "{} language '{}' is not available, using '{}'",
                "warning:".yellow(),
                code,
                resolver.language()
            );
        }
    }

    match cli.command {
        Commands::Translate { keys } => {
            for key in &keys {
                println!("{}", resolver.translate(key));
            }
        }

        Commands::Format { key, vars } => {
            let pairs = vars
                .iter()
                .map(|var| parse_var(var))
                .collect::<Result<Vec<_>>>()?;
            println!("{}", resolver.format(&key, pairs));
        }

        Commands::Plural { key, count, vars } => {
            let pairs = vars
                .iter()
                .map(|var| parse_var(var))
                .collect::<Result<Vec<_>>>()?;
            println!("{}", resolver.plural_format(&key, count, pairs));
        }

        Commands::Context { key, context } => {
            println!("{}", resolver.translate_with_context(&key, &context));
        }

        Commands::Name { item, target } => {
            let item = match serde_json::from_str::<Value>(&item) {
                Ok(value) => LocalizedItem::from(&value),
                Err(_) => LocalizedItem::from(item),
            };
            println!("{}", resolver.localized_name(&item, target.as_deref()));
        }

        Commands::Languages => {
            let current = resolver.language();
            for code in resolver.available_languages() {
                let marker = if code == current { "*" } else { " " };
                println!(
                    "{} {} {:4} {}",
                    marker,
                    resolver.language_flag(code),
                    code,
                    resolver.language_display_name(code)
                );
            }
        }

        Commands::SetLanguage { code } => {
            resolver.set_language(&code).map_err(|err| {
                anyhow!(
                    "{} (available: {})",
                    err,
                    resolver.available_languages().join(", ")
                )
            })?;
            println!(
                "Language set to {} {}",
                resolver.language_display_name(&code).bold(),
                resolver.language_flag(&code)
            );
        }

        Commands::Resolve { file } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let bindings: Vec<ElementBinding<String>> = serde_json::from_str(&content)
                .with_context(|| format!("parsing bindings in {}", file.display()))?;
            let resolved = resolver.refresh_bindings(&bindings);
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }

        Commands::Value { kind, value } => {
            let formatters = format::Formatters::new(&resolver);
            let text = match kind {
                ValueKind::Cost => formatters.format_cost(value),
                ValueKind::Number => formatters.format_number(value),
                ValueKind::Compact => formatters.format_quantity(value),
                ValueKind::Duration => format::format_duration(value),
                ValueKind::Percent => formatters.format_percentage(value, 1),
                ValueKind::Level => formatters.format_level(value.trunc() as i64),
            };
            println!("{}", text);
        }

        Commands::Validate { file, ui, debug } => {
            let strategy = read_json(&file)?;
            let mut sink = ConsoleSink::new();
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Strategy".to_string());

            let mut ok = diagnostics::validate_structure(&strategy, &name, &mut sink);
            if ui {
                ok &= diagnostics::check_ui_compatibility(&strategy, &mut sink).all_passed();
            }
            if debug {
                diagnostics::debug_strategy(&strategy, &mut sink);
            }
            if !ok {
                return Err(anyhow!("{} failed validation", file.display()));
            }
        }

        Commands::Compare { old, new } => {
            let old = read_json(&old)?;
            let new = read_json(&new)?;
            diagnostics::compare_strategies(&old, &new, &mut ConsoleSink::new());
        }
    }

    Ok(())
}

fn parse_var(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{}'", raw))?;
    if name.is_empty() {
        return Err(anyhow!("empty placeholder name in '{}'", raw));
    }
    Ok((name.to_string(), value.to_string()))
}

fn read_json(path: &Path) -> Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}
