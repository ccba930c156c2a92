use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use diffgrid_diff::{
    create_csv_diff_table, diff_texts, export_diff_lines_to_text, export_diff_table_to_csv,
};
use diffgrid_types::{DiffConfig, DiffMode, DiffOutput};
use tracing::debug;

use crate::cli::*;
use crate::render;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let base = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Diff(args) => cmd_diff(&base, args),
        Command::Export(args) => cmd_export(&base, args),
    }
}

/// Load the `--config` file, or defaults when none was given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DiffConfig> {
    let Some(path) = path else {
        return Ok(DiffConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = DiffConfig::from_toml_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Apply command-line flags on top of the base configuration.
///
/// Without `--mode`, a `.csv` or `.tsv` path selects CSV mode; a `.tsv`
/// path on either side also selects a tab delimiter when `--delimiter` is
/// absent.
pub fn apply_options(base: &DiffConfig, options: &DiffOptions) -> anyhow::Result<DiffConfig> {
    let mut config = base.clone();
    match options.mode {
        Some(ModeArg::Text) => config.mode = DiffMode::Text,
        Some(ModeArg::Csv) => config.mode = DiffMode::Csv,
        None if looks_delimited(&options.before) || looks_delimited(&options.after) => {
            config.mode = DiffMode::Csv;
            let tab_separated =
                has_extension(&options.before, "tsv") || has_extension(&options.after, "tsv");
            if tab_separated && options.delimiter.is_none() {
                config.delimiter = '\t';
            }
        }
        None => {}
    }
    config.hide_unchanged_rows |= options.hide_unchanged;
    config.before_after_column |= options.before_after_columns;
    config.first_row_is_header |= options.header;
    if let Some(delimiter) = options.delimiter {
        config.delimiter = delimiter;
    }
    config.validate()?;
    Ok(config)
}

fn looks_delimited(path: &Path) -> bool {
    has_extension(path, "csv") || has_extension(path, "tsv")
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn read_inputs(options: &DiffOptions) -> anyhow::Result<(String, String)> {
    let before = fs::read_to_string(&options.before)
        .with_context(|| format!("reading {}", options.before.display()))?;
    let after = fs::read_to_string(&options.after)
        .with_context(|| format!("reading {}", options.after.display()))?;
    Ok((before, after))
}

fn cmd_diff(base: &DiffConfig, args: DiffArgs) -> anyhow::Result<()> {
    let config = apply_options(base, &args.options)?;
    let (before, after) = read_inputs(&args.options)?;
    let output = diff_texts(&before, &after, &config);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Patch => match &output {
            DiffOutput::Lines(lines) => println!("{}", export_diff_lines_to_text(lines)),
            DiffOutput::Table(table) => println!("{}", export_diff_table_to_csv(table, &config)),
        },
        OutputFormat::Pretty => {
            match &output {
                DiffOutput::Lines(lines) => print!("{}", render::render_lines(lines)),
                DiffOutput::Table(table) => print!("{}", render::render_table(table, &config)),
            }
            println!("{}", render::render_stats(&output.stats()));
        }
    }
    Ok(())
}

fn cmd_export(base: &DiffConfig, args: ExportArgs) -> anyhow::Result<()> {
    let mut config = apply_options(base, &args.options)?;
    if config.mode != DiffMode::Csv {
        if args.options.mode == Some(ModeArg::Text) {
            bail!("export writes CSV and requires csv mode");
        }
        config.mode = DiffMode::Csv;
    }

    let (before, after) = read_inputs(&args.options)?;
    let table = create_csv_diff_table(&before, &after, &config);
    let csv = export_diff_table_to_csv(&table, &config);

    match &args.output {
        Some(path) => {
            fs::write(path, &csv).with_context(|| format!("writing {}", path.display()))?;
            println!("{} Wrote {}", "✓".green().bold(), path.display().to_string().bold());
        }
        None => println!("{csv}"),
    }
    Ok(())
}
