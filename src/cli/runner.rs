use std::io::IsTerminal;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use spritecrop::{
    CategoryOutcome, PipelineConfig, analyze_categories, trim_categories, trim_individually,
    trim_selected_categories,
};

use super::args::{CliArgs, Command, CommonArgs};
use super::errors::AppError;

fn init_logging(debug: bool) -> Result<(), AppError> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Merge the optional config file with command-line overrides.
pub fn resolve_config(args: &CommonArgs) -> Result<PipelineConfig, AppError> {
    let mut config = match &args.config {
        Some(path) if !path.is_file() => {
            return Err(AppError::MissingConfig { path: path.clone() });
        }
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };

    if let Some(input_dir) = &args.input_dir {
        config.input_dir = input_dir.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        config = config.with_output_root(output_dir);
    }
    if let Some(coordinates) = &args.coordinates {
        config.coordinates_file = coordinates.clone();
    }
    if !args.categories.is_empty() {
        config.categories = args.categories.clone();
    }
    if args.center_horizontally {
        config.center_horizontally = true;
    }

    config.validate()?;
    Ok(config)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    let config = resolve_config(args.command.common())?;

    if let Command::ShowConfig(_) = args.command {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    init_logging(args.log)?;
    info!("Input directory: {:?}", config.input_dir);

    match args.command {
        Command::Analyze(_) => {
            info!("Output directory: {:?}", config.analyze_dir);
            let report = analyze_categories(&config)?;
            let missing = report
                .outcomes
                .iter()
                .filter(|(_, o)| matches!(o, CategoryOutcome::NotFound))
                .count();
            let failed = report
                .outcomes
                .iter()
                .filter(|(_, o)| matches!(o, CategoryOutcome::Failed(_)))
                .count();
            if failed > 0 {
                warn!("Failed categories: {}", failed);
            }
            info!(
                "Recorded: {}, missing: {}, failed: {}",
                report.table.len(),
                missing,
                failed
            );
        }
        Command::Trim(ref common) => {
            info!("Output directory: {:?}", config.trim_dir);
            let report = if common.categories.is_empty() {
                trim_categories(&config)?
            } else {
                trim_selected_categories(&config, &common.categories)?
            };
            info!(
                "Processed: {}, skipped: {}, errors: {}",
                report.processed, report.skipped, report.errors
            );
        }
        Command::IndividualTrim(_) => {
            info!("Output directory: {:?}", config.individual_dir);
            let report = trim_individually(&config)?;
            info!(
                "Processed: {}, skipped: {}, errors: {}",
                report.processed, report.skipped, report.errors
            );
        }
        Command::ShowConfig(_) => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_flags_override_defaults() {
        let args = CommonArgs {
            input_dir: Some(PathBuf::from("/data/in")),
            output_dir: Some(PathBuf::from("/data/out")),
            categories: vec!["hair".to_string(), "eye".to_string()],
            center_horizontally: true,
            ..CommonArgs::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.input_dir, Path::new("/data/in"));
        assert_eq!(config.trim_dir, Path::new("/data/out/trim"));
        assert_eq!(
            config.coordinates_file,
            Path::new("/data/out/analyze/coordinates.json")
        );
        assert_eq!(config.categories, vec!["hair", "eye"]);
        assert!(config.center_horizontally);
    }

    #[test]
    fn test_explicit_coordinates_win_over_output_root() {
        let args = CommonArgs {
            output_dir: Some(PathBuf::from("/data/out")),
            coordinates: Some(PathBuf::from("/elsewhere/coords.json")),
            ..CommonArgs::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.coordinates_file, Path::new("/elsewhere/coords.json"));
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"input_dir": "/from/file", "categories": ["tops"], "outline": {"color": [0, 0, 255, 255], "width": 3}}"#,
        )
        .unwrap();

        let args = CommonArgs {
            config: Some(path),
            input_dir: Some(PathBuf::from("/from/flag")),
            ..CommonArgs::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.input_dir, Path::new("/from/flag"));
        assert_eq!(config.categories, vec!["tops"]);
        assert_eq!(config.outline.width, 3);
    }

    #[test]
    fn test_missing_config_file() {
        let args = CommonArgs {
            config: Some(PathBuf::from("/definitely/not/here.json")),
            ..CommonArgs::default()
        };
        assert!(matches!(
            resolve_config(&args),
            Err(AppError::MissingConfig { .. })
        ));
    }
}
