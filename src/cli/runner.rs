use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cardframe::{FrameAssetSet, LayoutConfig, frame_file_to_path, process_directory_to_path};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_layout(args: &CliArgs) -> Result<LayoutConfig, AppError> {
    let layout = match &args.config {
        Some(path) => {
            info!("Loading layout from {:?}", path);
            LayoutConfig::from_json_file(path)?
        }
        None => LayoutConfig::default(),
    };
    layout.validate()?;
    Ok(layout)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let layout = load_layout(&args)?;
    let batch_mode = args.captures.is_some() || args.output_dir.is_some();

    if batch_mode {
        let captures = args.captures.clone().ok_or(AppError::MissingArgument {
            arg: "--captures".to_string(),
        })?;
        let output_dir = args.output_dir.clone().ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Generating framed cards from {:?}", captures);
        info!("Output directory: {:?}", output_dir);

        let report = process_directory_to_path(
            &captures,
            &output_dir,
            &args.frames,
            &args.frame_set,
            &layout,
            args.collections.clone(),
        )
        .map_err(AppError::from)?;

        for failure in &report.failures {
            warn!("{}: {}", failure.job, failure.error);
        }
        info!("Batch framing complete!");
        info!("Processed: {}", report.processed);
        info!("Errors: {}", report.errors());

        if !report.is_success() {
            return Err(AppError::BatchFailed {
                failed: report.errors(),
                total: report.total(),
            }
            .into());
        }
    } else {
        let input = args.input.clone().ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.clone().ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        let frame = FrameAssetSet::load(&args.frames, &args.frame_set, &layout)
            .map_err(AppError::from)?;
        frame_file_to_path(&input, &output, &frame, &layout).map_err(AppError::from)?;
        info!("Successfully framed: {:?} -> {:?}", input, output);
    }

    Ok(())
}
