use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::{
    app::{load_config, load_config_file, Config},
    calculator::Calculator,
    cli::{handle_command, Cli, Commands, OutputFormat},
    gallery::{load_manifest, sample_items, Filter, Gallery, GalleryItem},
    runtime::NonInteractiveRunner,
    tui::{run_ui, CalcApp, GalleryApp, Theme},
};

/// Main runtime orchestrator
pub struct Orchestrator {
    cli: Cli,
    config: Config,
}

impl Orchestrator {
    /// Create a new orchestrator from CLI args
    pub fn new(cli: Cli) -> Result<Self> {
        let config = if let Some(config_path) = &cli.config {
            load_config_file(config_path)?
        } else {
            match load_config() {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("⚠️  Failed to load config: {}. Using defaults.", e);
                    Config::default()
                }
            }
        };

        Ok(Self { cli, config })
    }

    /// Run the orchestrator
    pub async fn run(self) -> Result<()> {
        let command = self.cli.command.clone().unwrap_or(Commands::Calc {
            keys: None,
            output_format: OutputFormat::Text,
        });

        if handle_command(&command)? {
            return Ok(());
        }

        match command {
            Commands::Calc {
                keys: Some(keys),
                output_format,
            } => {
                let runner = NonInteractiveRunner::new(self.config.clone());
                let result = runner.run_calculator(&keys);
                println!("{}", runner.format_calc_result(&result, output_format));
                Ok(())
            }
            Commands::Calc { keys: None, .. } => {
                let calculator = Calculator::new(self.config.calculator.settings());
                run_ui(CalcApp::new(calculator, self.theme()), self.tick()).await
            }
            Commands::Gallery {
                manifest,
                filter,
                list,
                output_format,
            } => {
                let items = self.load_gallery_items(manifest.as_deref())?;
                if list {
                    let runner = NonInteractiveRunner::new(self.config.clone());
                    let listing = runner.list_gallery(items, &filter);
                    print!("{}", runner.format_listing(&listing, output_format));
                    return Ok(());
                }

                let mut gallery = Gallery::with_crossfade(items, self.config.gallery.crossfade());
                gallery.apply_filter(Filter::from_tag(&filter));
                run_ui(GalleryApp::new(gallery, self.theme()), self.tick()).await
            }
            Commands::Init | Commands::Version => Ok(()),
        }
    }

    /// Items from the CLI manifest, else the configured one, else the samples
    fn load_gallery_items(&self, manifest_override: Option<&Path>) -> Result<Vec<GalleryItem>> {
        let manifest: Option<PathBuf> = manifest_override
            .map(Path::to_path_buf)
            .or_else(|| self.config.gallery.manifest.clone());

        match manifest {
            Some(path) => load_manifest(&path)
                .with_context(|| format!("Failed to load gallery manifest {}", path.display())),
            None => Ok(sample_items()),
        }
    }

    fn theme(&self) -> Theme {
        Theme::from_name(&self.config.ui.theme).unwrap_or_else(|| {
            warn!(theme = %self.config.ui.theme, "unknown theme, using dark");
            Theme::dark()
        })
    }

    fn tick(&self) -> Duration {
        Duration::from_millis(self.config.ui.tick_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    /// CLI pointed at an empty config file, so the run never reads user config
    fn cli_with_config(temp_dir: &TempDir, args: &[&str]) -> Cli {
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        let mut argv = vec!["benchtop", "--config", config_path.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[tokio::test]
    async fn test_run_calc_keys_without_terminal() {
        let temp_dir = TempDir::new().unwrap();
        let cli = cli_with_config(&temp_dir, &["calc", "--keys", "5+3="]);

        let orchestrator = Orchestrator::new(cli).unwrap();
        assert!(orchestrator.run().await.is_ok());
    }

    #[tokio::test]
    async fn test_run_version() {
        let temp_dir = TempDir::new().unwrap();
        let cli = cli_with_config(&temp_dir, &["version"]);

        assert!(Orchestrator::new(cli).unwrap().run().await.is_ok());
    }

    #[tokio::test]
    async fn test_run_gallery_list_with_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("gallery.toml");
        fs::write(
            &manifest,
            "[[items]]\ncategory = \"city\"\nsrc = \"a.jpg\"\ncaption = \"A\"\n",
        )
        .unwrap();

        let cli = cli_with_config(
            &temp_dir,
            &["gallery", "--manifest", manifest.to_str().unwrap(), "--list"],
        );
        assert!(Orchestrator::new(cli).unwrap().run().await.is_ok());
    }

    #[tokio::test]
    async fn test_run_gallery_missing_manifest_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let cli = cli_with_config(
            &temp_dir,
            &["gallery", "--manifest", missing.to_str().unwrap(), "--list"],
        );

        let err = Orchestrator::new(cli).unwrap().run().await.unwrap_err();
        assert!(err.to_string().contains("Failed to load gallery manifest"));
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.toml");
        fs::write(&config_path, "[ui]\ntick_ms = 0\n").unwrap();

        let cli = Cli::parse_from([
            "benchtop",
            "--config",
            config_path.to_str().unwrap(),
            "version",
        ]);
        assert!(Orchestrator::new(cli).is_err());
    }
}
