//! Config command - read and change configuration values

use crate::{
    BookFinderError,
    cli::{ConfigCommands, parse_setting},
    config::{BookFinderConfig, KEYS},
    ui::OutputWriter,
};
use std::io::Write;
use std::path::Path;
use tracing::debug;

type Result<T> = std::result::Result<T, BookFinderError>;

/// Execute a config subcommand against the file at `path`
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed `KEY=VALUE`, `ConfigError` for
/// unknown keys, rejected values or a file that cannot be written.
pub fn execute(
    command: &ConfigCommands,
    config: &mut BookFinderConfig,
    path: &Path,
    out: &mut impl Write,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting).map_err(BookFinderError::InvalidInput)?;
            config.set(key, value)?;
            config.save_to(path)?;
            debug!(key, path = %path.display(), "configuration saved");
            output.success(&format!("{key} = {}", config.get(key)?));
        }
        ConfigCommands::Get { key: Some(key) } => {
            writeln!(out, "{}", config.get(key)?)?;
        }
        ConfigCommands::Get { key: None } => {
            for key in KEYS {
                writeln!(out, "{key} = {}", config.get(key)?)?;
            }
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingWriter;
    use crate::ui::MessageLevel;
    use tempfile::TempDir;

    fn run(command: ConfigCommands, config: &mut BookFinderConfig, path: &Path) -> (Result<()>, String) {
        let mut out = Vec::new();
        let writer = RecordingWriter::default();
        let result = execute(&command, config, path, &mut out, &writer);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_set_persists_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = BookFinderConfig::default();

        let (result, _) = run(
            ConfigCommands::Set {
                setting: "limit=40".to_string(),
            },
            &mut config,
            &path,
        );

        assert!(result.is_ok());
        assert_eq!(config.limit, 40);
        assert_eq!(BookFinderConfig::load_from(&path).unwrap().limit, 40);
    }

    #[test]
    fn test_set_reports_normalised_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = BookFinderConfig::default();
        let writer = RecordingWriter::default();

        execute(
            &ConfigCommands::Set {
                setting: "source_host=https://example.org/".to_string(),
            },
            &mut config,
            &path,
            &mut Vec::new(),
            &writer,
        )
        .unwrap();

        assert_eq!(
            writer.messages(),
            vec![(MessageLevel::Success, "source_host = https://example.org".to_string())]
        );
    }

    #[test]
    fn test_set_rejects_malformed_setting() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = BookFinderConfig::default();

        let (result, _) = run(
            ConfigCommands::Set {
                setting: "limit".to_string(),
            },
            &mut config,
            &path,
        );

        assert!(matches!(result, Err(BookFinderError::InvalidInput(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_get_single_and_all() {
        let path = Path::new("/unused/config.toml");
        let mut config = BookFinderConfig::default();

        let (_, single) = run(
            ConfigCommands::Get {
                key: Some("default_field".to_string()),
            },
            &mut config,
            path,
        );
        assert_eq!(single.trim(), "title");

        let (_, all) = run(ConfigCommands::Get { key: None }, &mut config, path);
        assert_eq!(all.lines().count(), KEYS.len());
        assert!(all.contains("limit = 20"));
    }

    #[test]
    fn test_get_unknown_key() {
        let mut config = BookFinderConfig::default();
        let (result, _) = run(
            ConfigCommands::Get {
                key: Some("colour".to_string()),
            },
            &mut config,
            Path::new("/unused/config.toml"),
        );
        assert!(matches!(result, Err(BookFinderError::ConfigError(_))));
    }

    #[test]
    fn test_path_prints_location() {
        let mut config = BookFinderConfig::default();
        let (_, out) = run(ConfigCommands::Path, &mut config, Path::new("/tmp/bf/config.toml"));
        assert_eq!(out.trim(), "/tmp/bf/config.toml");
    }
}
