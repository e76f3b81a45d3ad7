//! Implementation of `dailycode generate` (and the bare `dailycode` run).
//!
//! 1. Applies CLI overrides on top of the loaded config
//! 2. Resolves the date stamp (flag, or today's local date)
//! 3. Renders the document with a seeded or entropy-backed selector
//! 4. Writes it atomically into the output directory, or prints it

use super::stdout_error;
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{DailyCodeError, Result};
use crate::fs::atomic_write_file;
use crate::generator::{Document, Generator, RandomSelector, date_stamp};
use chrono::Local;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

/// Execute the generate command, printing `Generated <path>` on success.
pub fn cmd_generate(config: Config, args: GenerateArgs) -> Result<()> {
    let to_stdout = args.stdout;
    let document = run_generate(config.clone(), &args)?;

    if to_stdout {
        io::stdout()
            .lock()
            .write_all(document.content.as_bytes())
            .map_err(stdout_error)?;
        return Ok(());
    }

    let output_dir = args.output_dir.as_deref().unwrap_or(config.output_dir.as_path());
    let path = write_document(output_dir, &document)?;
    println!("Generated {}", path.display());
    Ok(())
}

/// Build the document for `args` without touching the filesystem.
pub fn run_generate(mut config: Config, args: &GenerateArgs) -> Result<Document> {
    if let Some(count) = args.count {
        config.snippets_per_file = count;
    }
    config.validate()?;

    let stamp = match &args.date {
        Some(date) => date.clone(),
        None => date_stamp(&Local::now().naive_local(), &config.date_format)?,
    };

    let selector = match args.seed {
        Some(seed) => RandomSelector::seeded(seed),
        None => RandomSelector::from_entropy(),
    };
    Generator::new(config, selector).generate(&stamp)
}

/// Write `document` into `output_dir`, replacing any same-named file.
///
/// The file name must be a single plain path component, so a date stamp
/// containing separators or `..` cannot move the file elsewhere.
pub fn write_document(output_dir: &Path, document: &Document) -> Result<PathBuf> {
    check_file_name(&document.file_name)?;
    let path = output_dir.join(&document.file_name);
    atomic_write_file(&path, &document.content)?;
    log::info!("wrote {} ({} bytes)", path.display(), document.content.len());
    Ok(path)
}

fn check_file_name(file_name: &str) -> Result<()> {
    let mut components = Path::new(file_name).components();
    let single_plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_plain || file_name.contains(['/', '\\']) {
        return Err(DailyCodeError::InvalidOutputPath(format!(
            "'{}' must be a plain file name without path separators",
            file_name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::CATALOG;
    use tempfile::TempDir;

    fn args(date: &str, seed: u64) -> GenerateArgs {
        GenerateArgs {
            date: Some(date.to_string()),
            seed: Some(seed),
            ..GenerateArgs::default()
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let first = run_generate(Config::default(), &args("2025_07_31", 11)).unwrap();
        let second = run_generate(Config::default(), &args("2025_07_31", 11)).unwrap();
        assert_eq!(first.content, second.content);
    }

    #[test]
    fn test_today_is_used_without_date_flag() {
        let today = date_stamp(&Local::now().naive_local(), "%Y_%m_%d").unwrap();
        let doc = run_generate(Config::default(), &GenerateArgs::default()).unwrap();
        // Tolerate a run that straddles midnight.
        let after = date_stamp(&Local::now().naive_local(), "%Y_%m_%d").unwrap();
        assert!(
            doc.file_name == format!("daily_code_{}.rs", today)
                || doc.file_name == format!("daily_code_{}.rs", after)
        );
    }

    #[test]
    fn test_count_flag_overrides_config() {
        let mut run_args = args("2025_07_31", 5);
        run_args.count = Some(4);
        let doc = run_generate(Config::default(), &run_args).unwrap();
        assert_eq!(doc.templates.len(), 4);
    }

    #[test]
    fn test_count_flag_is_validated() {
        let mut run_args = args("2025_07_31", 5);
        run_args.count = Some(CATALOG.len() + 1);
        let err = run_generate(Config::default(), &run_args).unwrap_err();
        assert!(matches!(err, DailyCodeError::Config(_)));
    }

    #[test]
    fn test_write_document_names_file_after_date() {
        let temp_dir = TempDir::new().unwrap();
        let doc = run_generate(Config::default(), &args("2025_07_31", 1)).unwrap();

        let path = write_document(temp_dir.path(), &doc).unwrap();

        assert_eq!(path, temp_dir.path().join("daily_code_2025_07_31.rs"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), doc.content);
    }

    #[test]
    fn test_stamp_with_path_separators_is_not_written() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("out");

        for stamp in ["../escape", "nested/2025", "a\\b"] {
            let doc = run_generate(Config::default(), &args(stamp, 1)).unwrap();
            let err = write_document(&out_dir, &doc).unwrap_err();
            assert!(
                matches!(err, DailyCodeError::InvalidOutputPath(_)),
                "{} should be rejected",
                stamp
            );
        }
        assert!(!temp_dir.path().join("escape.rs").exists());
        assert!(!out_dir.exists());
    }

    #[test]
    fn test_cmd_generate_overwrites_same_day_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("daily_code_2025_07_31.rs");
        std::fs::write(&target, "stale").unwrap();

        let mut run_args = args("2025_07_31", 2);
        run_args.output_dir = Some(temp_dir.path().to_path_buf());
        cmd_generate(Config::default(), run_args.clone()).unwrap();

        let expected = run_generate(Config::default(), &run_args).unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), expected.content);
    }

    #[test]
    fn test_cmd_generate_uses_config_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            output_dir: temp_dir.path().join("daily"),
            ..Config::default()
        };

        cmd_generate(config, args("2025_08_01", 3)).unwrap();

        assert!(temp_dir.path().join("daily").join("daily_code_2025_08_01.rs").exists());
    }
}
