use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use iconset_modernizer::EXIT_FAILURE;
use iconset_modernizer::app::{self, RunReport};
use iconset_modernizer::config::MigrationConfig;
use iconset_modernizer::migration::{ConsoleProgress, NullProgress, ProgressSink};

/// Rename legacy KDE icons to freedesktop names, leaving links behind.
#[derive(Debug, Parser)]
#[command(name = "iconset-modernizer", version)]
struct Cli {
    /// Theme root directory (must contain index.theme)
    #[arg(value_name = "THEME_DIR", default_value = ".")]
    theme_dir: PathBuf,

    /// Log file, relative to the theme root unless absolute
    #[arg(long, value_name = "PATH", default_value = "conversion.log")]
    log_file: PathBuf,

    /// Extension to try per icon; repeat for several (default: png, svg, svgz)
    #[arg(long = "extension", value_name = "EXT")]
    extensions: Vec<String>,

    /// Suppress the banner and per-icon progress
    #[arg(short, long)]
    quiet: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> MigrationConfig {
        MigrationConfig::new()
            .theme_root(&self.theme_dir)
            .log_file(&self.log_file)
            .extensions(self.extensions.iter().cloned())
            .show_progress(!self.quiet)
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_banner(config: &MigrationConfig) {
    println!("Icon theme modernizer");
    println!("  theme:      {}", config.theme_root.display());
    println!("  extensions: {}", config.extensions.join(", "));
    println!("  log:        {}", config.log_path().display());
    println!();
}

fn report_text(report: &RunReport) -> String {
    let mut text = format!("{}: {}\n", report.theme_name, report.log.summary());
    if !report.inherits.is_empty() {
        text.push_str(&format!("Inherits: {}\n", report.inherits.join(", ")));
    }
    text.push_str(&format!("Log written to {}\n", report.log_path.display()));
    text
}

/// Exit status for a command line clap rejected.
///
/// Status 2 is reserved for a missing theme descriptor, so usage errors
/// report the generic failure status. `--help` and `--version` succeed.
fn usage_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_FAILURE as u8
    } else {
        0
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(usage_exit_code(&err));
        }
    };
    init_logging(cli.verbose);

    let config = cli.config();
    let mut console;
    let mut null = NullProgress;
    let progress: &mut dyn ProgressSink = if config.show_progress {
        print_banner(&config);
        console = ConsoleProgress::stdout();
        &mut console
    } else {
        &mut null
    };

    match app::run(&config, progress) {
        Ok(report) => {
            if config.show_progress {
                println!();
                print!("{}", report_text(&report));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use iconset_modernizer::EXIT_NOT_A_THEME;
    use iconset_modernizer::migration::MigrationLog;

    use super::*;

    #[test]
    fn test_usage_error_does_not_collide_with_missing_theme() {
        let err = Cli::try_parse_from(["iconset-modernizer", "--no-such-flag"]).unwrap_err();
        let code = usage_exit_code(&err);
        assert_eq!(code, 1);
        assert_ne!(i32::from(code), EXIT_NOT_A_THEME);
    }

    #[test]
    fn test_help_exits_successfully() {
        let err = Cli::try_parse_from(["iconset-modernizer", "--help"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), 0);
    }

    #[test]
    fn test_cli_maps_onto_config() {
        let cli = Cli::try_parse_from([
            "iconset-modernizer",
            "theme",
            "--extension",
            "svgz",
            "--extension",
            "png",
            "-q",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);

        let config = cli.config();
        assert_eq!(config.theme_root, PathBuf::from("theme"));
        assert_eq!(config.extensions, vec!["svgz", "png"]);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_report_lists_inherited_themes() {
        let report = RunReport {
            theme_name: "Crystal SVG".to_string(),
            inherits: vec!["hicolor".to_string(), "default".to_string()],
            log_path: PathBuf::from("/icons/crystalsvg/conversion.log"),
            log: MigrationLog::new(),
        };
        assert_eq!(
            report_text(&report),
            "Crystal SVG: 0 renamed, 0 already present, 0 already linked, 0 absent\n\
             Inherits: hicolor, default\n\
             Log written to /icons/crystalsvg/conversion.log\n"
        );

        let report = RunReport {
            inherits: Vec::new(),
            ..report
        };
        assert!(!report_text(&report).contains("Inherits"));
    }
}
