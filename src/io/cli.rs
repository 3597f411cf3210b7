//! Command-line interface for rendering generated pictures to PNG files

use crate::algorithm::generator::PictureGenerator;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_LINE_RANGE, DEFAULT_WIDTH};
use crate::io::error::Result;
use crate::io::image::export_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use rand::Rng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mondrigen")]
#[command(
    author,
    version,
    about = "Generate random Mondrian-style pictures as PNG files"
)]
/// Command-line arguments for the picture generation tool
pub struct Cli {
    /// Output PNG file (batch runs number the file stem)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Canvas width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,

    /// Number of visible lines (drawn from the default range when omitted)
    #[arg(short, long)]
    pub lines: Option<usize>,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of pictures to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.count > 1
    }
}

/// Orchestrates batch generation and export with progress tracking
pub struct OutputProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl OutputProcessor {
    /// Create a processor from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.count));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export the requested pictures
    ///
    /// Each picture of a batch gets its own seed derived from the base
    /// seed, so a seeded batch is reproducible picture by picture.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails for the given canvas and line
    /// parameters, or if a picture cannot be written to disk.
    pub fn process(&mut self) -> Result<()> {
        let base_seed = self.cli.seed.unwrap_or_else(|| rand::rng().random());

        for index in 0..self.cli.count {
            let seed = base_seed.wrapping_add(index as u64);
            let mut generator = PictureGenerator::new(seed);

            let line_count = self
                .cli
                .lines
                .unwrap_or_else(|| generator.line_count_in(DEFAULT_LINE_RANGE));

            let picture = generator.generate_picture(self.cli.width, self.cli.height, line_count)?;

            let output_path = self.output_path_for(index);
            export_png(&picture, self.cli.width, self.cli.height, &output_path)?;

            if let Some(ref pm) = self.progress_manager {
                pm.advance(&output_path.display().to_string());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn output_path_for(&self, index: usize) -> PathBuf {
        if self.cli.count <= 1 {
            return self.cli.output.clone();
        }

        let stem = self.cli.output.file_stem().unwrap_or_default();
        let extension = self.cli.output.extension().unwrap_or_default();
        let numbered = if extension.is_empty() {
            format!("{}_{}", stem.to_string_lossy(), index + 1)
        } else {
            format!(
                "{}_{}.{}",
                stem.to_string_lossy(),
                index + 1,
                extension.to_string_lossy()
            )
        };

        self.cli
            .output
            .parent()
            .map_or_else(|| PathBuf::from(&numbered), |parent: &Path| parent.join(&numbered))
    }
}
