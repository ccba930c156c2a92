use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "diffgrid",
    about = "Line and cell level diffs for text and CSV files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with default diff settings; flags override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    Text,
    Csv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
    Patch,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the differences between two files
    Diff(DiffArgs),
    /// Write a CSV diff table as quoted CSV
    Export(ExportArgs),
}

/// Settings shared by every command.
#[derive(Args, Clone, Debug, Default)]
pub struct DiffOptions {
    pub before: PathBuf,
    pub after: PathBuf,
    #[arg(short, long)]
    pub mode: Option<ModeArg>,
    /// Leave unchanged lines and rows out of the output
    #[arg(long)]
    pub hide_unchanged: bool,
    /// Show separate before/after columns for columns that change (CSV)
    #[arg(long)]
    pub before_after_columns: bool,
    /// Treat the first row of each file as column labels (CSV)
    #[arg(long)]
    pub header: bool,
    #[arg(short, long)]
    pub delimiter: Option<char>,
}

#[derive(Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub options: DiffOptions,
    #[arg(short, long, default_value = "pretty")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub options: DiffOptions,
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_diff() {
        let cli = Cli::try_parse_from(["diffgrid", "diff", "a.txt", "b.txt"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.options.before, PathBuf::from("a.txt"));
            assert_eq!(args.options.after, PathBuf::from("b.txt"));
            assert_eq!(args.format, OutputFormat::Pretty);
            assert!(args.options.mode.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_diff_csv_flags() {
        let cli = Cli::try_parse_from([
            "diffgrid", "diff", "a.csv", "b.csv", "--mode", "csv", "--header",
            "--before-after-columns", "--hide-unchanged", "-d", ";", "--format", "json",
        ]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.options.mode, Some(ModeArg::Csv));
            assert!(args.options.header);
            assert!(args.options.before_after_columns);
            assert!(args.options.hide_unchanged);
            assert_eq!(args.options.delimiter, Some(';'));
            assert_eq!(args.format, OutputFormat::Json);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_export_output() {
        let cli = Cli::try_parse_from(["diffgrid", "export", "a.csv", "b.csv", "-o", "out.csv"]).unwrap();
        if let Command::Export(args) = cli.command {
            assert_eq!(args.output, Some(PathBuf::from("out.csv")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from(["diffgrid", "diff", "a", "b", "-v", "--config", "d.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("d.toml")));
    }

    #[test]
    fn missing_paths_rejected() {
        assert!(Cli::try_parse_from(["diffgrid", "diff", "only-one"]).is_err());
    }
}
