//! pizzaform - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Terminal pizza-order configurator.
#[derive(Parser, Debug)]
#[command(name = "pizzaform")]
#[command(version)]
#[command(about = "Configure a pizza order in a terminal form")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to the log file for tracing output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

/// Resolve configuration, set up logging, and run the TUI.
fn run(args: Args) -> Result<(), pizzaform::model::AppError> {
    // Load configuration with full precedence chain:
    // Defaults -> Config File -> Env Vars -> CLI Args
    let config = {
        let config_file = pizzaform::config::load_config_with_precedence(args.config)?;
        let merged = pizzaform::config::merge_config(config_file);
        let with_env = pizzaform::config::apply_env_overrides(merged);
        pizzaform::config::apply_cli_overrides(with_env, args.no_color, args.log_file)
    };

    pizzaform::logging::init(&config.log_file_path)?;

    info!(config = ?config, "configuration loaded and resolved");

    let mut app = pizzaform::view::TuiApp::new(&config)?;
    app.run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn help_does_not_error() {
        let result = Args::try_parse_from(["pizzaform", "--help"]);
        // Help returns Err with DisplayHelp, which is success
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn version_does_not_error() {
        let result = Args::try_parse_from(["pizzaform", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn no_args_defaults() {
        let args = Args::parse_from(["pizzaform"]);
        assert_eq!(args.config, None);
        assert!(!args.no_color);
        assert_eq!(args.log_file, None);
    }

    #[test]
    fn no_color_flag() {
        let args = Args::parse_from(["pizzaform", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn config_path_flag() {
        let args = Args::parse_from(["pizzaform", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn log_file_flag() {
        let args = Args::parse_from(["pizzaform", "--log-file", "/tmp/pf.log"]);
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/pf.log")));
    }

    #[test]
    fn unexpected_positional_is_rejected() {
        let result = Args::try_parse_from(["pizzaform", "extra"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_flags_flow_through_config_precedence_chain() {
        use pizzaform::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            color: Some(true),
            log_file_path: None,
            keybindings: None,
        };
        let merged = merge_config(Some(config_file));
        assert!(merged.color, "config file should set color");

        let with_cli = apply_cli_overrides(merged, true, None);
        assert!(!with_cli.color, "CLI --no-color should override all other sources");
    }
}
