use clap::Parser;
use ensure_default_collection::ss::{DEFAULT_ALIAS, DEFAULT_LABEL};
use ensure_default_collection::EnsureOptions;

/// Make sure the secret service has a collection for an alias, creating it when missing.
#[derive(Parser, Debug)]
#[command(name = "ensure-default-collection", version)]
pub struct Cli {
    /// Alias that must resolve to a collection.
    #[arg(
        long,
        default_value = DEFAULT_ALIAS,
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub alias: String,

    /// Label for the collection if it has to be created.
    #[arg(long, default_value = DEFAULT_LABEL)]
    pub label: String,

    /// Only report whether the collection is missing.
    #[arg(long)]
    pub dry_run: bool,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Options for [ensure_default_collection::ensure_collection].
    pub fn options(&self) -> EnsureOptions {
        EnsureOptions {
            alias: self.alias.clone(),
            label: self.label.clone(),
            dry_run: self.dry_run,
        }
    }

    /// Log filter used when RUST_LOG is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_default_alias_without_arguments() {
        let cli = Cli::try_parse_from(["ensure-default-collection"]).expect("parse should succeed");
        assert_eq!(cli.options(), EnsureOptions::default());
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn parses_alias_and_label() {
        let cli = Cli::try_parse_from([
            "ensure-default-collection",
            "--alias",
            "work",
            "--label",
            "Work",
            "--dry-run",
        ])
        .expect("parse should succeed");
        assert_eq!(
            cli.options(),
            EnsureOptions {
                alias: "work".to_owned(),
                label: "Work".to_owned(),
                dry_run: true,
            }
        );
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["ensure-default-collection", "-v"]).expect("parse");
        assert_eq!(cli.log_level(), "info");
        let cli = Cli::try_parse_from(["ensure-default-collection", "-vvv"]).expect("parse");
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn rejects_empty_alias() {
        let err = Cli::try_parse_from(["ensure-default-collection", "--alias", ""])
            .expect_err("empty alias should be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["ensure-default-collection", "default"]).is_err());
    }
}
