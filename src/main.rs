//! passgen - random password generator with strength feedback
//!
//! Options come from flags, `PASSGEN_*` environment variables, a JSON config
//! file, or interactive prompts.

use clap::Parser;
use passgen::{
    config::PassgenConfig,
    ui::{display, prompt},
    Options, PassgenError, Result,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Generate a random password and rate its strength
#[derive(Parser, Debug)]
#[command(name = "passgen", version, about)]
struct Cli {
    /// Password length
    #[arg(short = 'l', long)]
    length: Option<usize>,

    /// Include uppercase letters (A-Z)
    #[arg(short = 'U', long)]
    uppercase: bool,

    /// Include lowercase letters (a-z)
    #[arg(short = 'L', long)]
    lowercase: bool,

    /// Include numbers (0-9)
    #[arg(short = 'n', long)]
    numbers: bool,

    /// Include symbols (!@#$%^&*()_+[]{}<>?)
    #[arg(short = 's', long)]
    symbols: bool,

    /// Include every character type
    #[arg(short = 'a', long)]
    all: bool,

    /// Choose options with interactive prompts
    #[arg(
        short = 'i',
        long,
        conflicts_with_all = ["length", "uppercase", "lowercase", "numbers", "symbols", "all"]
    )]
    interactive: bool,

    /// Copy the password to the clipboard
    #[arg(short = 'c', long)]
    copy: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Load defaults from a JSON config file instead of PASSGEN_* variables
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Merge flags over the configured defaults
    fn options(&self, config: &PassgenConfig) -> Options {
        let length = self.length.unwrap_or(config.options.length);

        if self.all {
            return Options::all(length);
        }

        if !(self.uppercase || self.lowercase || self.numbers || self.symbols) {
            return Options {
                length,
                ..config.options
            };
        }

        Options {
            length,
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            numbers: self.numbers,
            symbols: self.symbols,
        }
    }
}

fn main() {
    // Load .env before the log filter reads RUST_LOG
    if let Err(e) = passgen::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "passgen=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        if !e.is_user_input() {
            tracing::debug!(error = %e, "Run failed");
        }
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => PassgenConfig::load(path)?,
        None => PassgenConfig::from_env()?,
    };
    let validator = config.validator()?;

    let options = if cli.interactive {
        prompt::prompt_options(&config)?
    } else {
        cli.options(&config)
    };
    validator.validate(&options)?;

    let generated = passgen::generate(&options);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
    } else {
        print!(
            "{}",
            display::render_report(&generated, validator.min_length(), validator.max_length())
        );
    }

    let copy = if cli.copy {
        true
    } else if cli.interactive {
        prompt::prompt_copy(config.copy_to_clipboard)?
    } else {
        config.copy_to_clipboard
    };

    if copy {
        copy_password(&generated.password, cli.json);
    }

    Ok(())
}

/// Copy and report; a failed copy never fails the run
fn copy_password(password: &str, quiet: bool) {
    let copied = passgen::ui::copy_to_system_clipboard(password);

    let notice = if copied {
        "📋 Copied to clipboard".to_string()
    } else {
        PassgenError::clipboard("the system clipboard could not be reached").user_message()
    };

    if quiet {
        eprintln!("{}", notice);
    } else {
        println!("{}", notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("passgen").chain(args.iter().copied()))
    }

    #[test]
    fn test_flags_override_config_classes() {
        let config = PassgenConfig::default();
        let options = parse(&["-l", "20", "-s"]).options(&config);
        assert_eq!(options, Options::with_classes(20, &[passgen::CharacterClass::Symbols]));
    }

    #[test]
    fn test_no_class_flags_use_config() {
        let config = PassgenConfig::default();
        let options = parse(&["--length", "14"]).options(&config);
        assert_eq!(options.length, 14);
        assert_eq!(options.classes(), config.options.classes());

        assert_eq!(parse(&[]).options(&config), config.options);
    }

    #[test]
    fn test_interactive_conflicts_with_option_flags() {
        for flag in ["-l", "-U", "-L", "-n", "-s", "-a"] {
            let mut args = vec!["passgen", "-i", flag];
            if flag == "-l" {
                args.push("12");
            }
            assert!(Cli::try_parse_from(args.iter().copied()).is_err(), "{} accepted with -i", flag);
        }

        let cli = Cli::try_parse_from(["passgen", "-i", "--copy", "--json"]).unwrap();
        assert!(cli.interactive && cli.copy && cli.json);
    }

    #[test]
    fn test_all_flag() {
        let options = parse(&["-a", "-U"]).options(&PassgenConfig::default());
        assert_eq!(options, Options::all(10));
    }
}
