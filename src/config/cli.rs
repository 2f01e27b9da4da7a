use crate::config::toml_config::TomlConfig;
use crate::config::CheckSettings;
use crate::domain::model::FieldPair;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{parse_field_pair, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ecchecker", version)]
#[command(about = "Compare two columns of a result file against a reference answer file")]
pub struct CheckerConfig {
    /// Result file to verify (put `--` first if the name starts with `-`)
    pub work_file: PathBuf,

    /// Reference answer file [default: correct.txt]
    #[arg(short, long, env = "ECCHECKER_REFERENCE")]
    pub reference: Option<PathBuf>,

    /// Two 1-based token positions to compare, e.g. "3,8" [default: 3,8]
    #[arg(short, long, value_parser = parse_field_pair)]
    pub fields: Option<FieldPair>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CheckerConfig {
    /// Merges command-line values over the TOML file over built-in defaults.
    pub fn resolve(&self) -> Result<CheckSettings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let mut settings = CheckSettings::new(self.work_file.clone());

        if let Some(reference) = self
            .reference
            .clone()
            .or_else(|| file_config.reference_path().map(PathBuf::from))
        {
            settings = settings.with_reference(reference);
        }

        if let Some(fields) = self.fields.or(file_config.fields()?) {
            settings = settings.with_fields(fields);
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> std::result::Result<CheckerConfig, clap::Error> {
        CheckerConfig::try_parse_from(std::iter::once("ecchecker").chain(args.iter().copied()))
    }

    #[test]
    fn test_single_argument() {
        let settings = parse(&["out.txt"]).unwrap().resolve().unwrap();
        assert_eq!(settings.work_path(), Path::new("out.txt"));
        assert_eq!(settings.fields(), FieldPair::new(3, 8));
    }

    #[test]
    fn test_argument_count_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["out.txt", "correct.txt"]).is_err());
    }

    #[test]
    fn test_fields_flag() {
        let config = parse(&["out.txt", "--fields", "1,2"]).unwrap();
        assert_eq!(config.fields, Some(FieldPair::new(1, 2)));
        assert!(parse(&["out.txt", "--fields", "0,2"]).is_err());
    }

    #[test]
    fn test_cli_overrides_toml() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            "[reference]\npath = \"from_file.txt\"\n\n[fields]\npositions = [1, 2]\n",
        )
        .unwrap();
        let config_path = file.path().to_str().unwrap();

        let from_file = parse(&["out.txt", "-c", config_path])
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(from_file.reference_path(), Path::new("from_file.txt"));
        assert_eq!(from_file.fields(), FieldPair::new(1, 2));

        let overridden = parse(&["out.txt", "-c", config_path, "-r", "cli.txt", "-f", "4,5"])
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(overridden.reference_path(), Path::new("cli.txt"));
        assert_eq!(overridden.fields(), FieldPair::new(4, 5));
    }
}
