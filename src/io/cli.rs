//! Command-line interface for batch generation from JSON pattern files

use crate::algorithm::executor::{GenerationConfig, StepOutcome, WaveFunctionCollapse};
use crate::algorithm::propagation::PropagationPolicy;
use crate::analysis::patterns::ExamplePattern;
use crate::io::configuration::{
    DEFAULT_CELL_PIXELS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_RETRIES, DEFAULT_SEED,
    GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX, SUMMARY_SUFFIX, VISUALIZATION_SUFFIX,
};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::io::image::{export_grid_as_png, validate_cell_pixels};
use crate::io::pattern::PatternFile;
use crate::io::progress::ProgressManager;
use crate::io::summary::LayoutSummary;
use crate::spatial::tiles::TileCatalog;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "tilewave")]
#[command(
    author,
    version,
    about = "Generate grid layouts from example patterns with wave function collapse"
)]
/// Command-line arguments for the layout generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// JSON pattern file or directory of pattern files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output grid width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Output grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// Edge length of one cell in exported images
    #[arg(short, long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub cell_pixels: u32,

    /// Extra seeds to try after a contradiction
    #[arg(short, long, default_value_t = DEFAULT_RETRIES)]
    pub retries: u32,

    /// Also export the collapse order as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Re-queue every narrowed cell during propagation
    #[arg(short, long)]
    pub exhaustive: bool,

    /// Log generation milestones
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine configuration for the first attempt
    pub const fn generation_config(&self) -> GenerationConfig {
        let policy = if self.exhaustive {
            PropagationPolicy::Exhaustive
        } else {
            PropagationPolicy::VisitOnce
        };
        GenerationConfig {
            width: self.width,
            height: self.height,
            seed: self.seed,
            policy,
        }
    }
}

/// Orchestrates batch generation with retries and progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate a layout for every pattern file the target names
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target is neither a JSON file nor a directory
    /// - The grid size or cell size is invalid
    /// - A pattern file is invalid, or every attempt ends in a contradiction
    /// - Writing an output fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.generation_config().validate()?;
        validate_cell_pixels(self.cli.cell_pixels)?;

        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(());
        }

        if let Some(pm) = &mut self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(pm) = &self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_pattern_file(target) {
                Ok(self.should_process_file(target).then(|| target.clone()).into_iter().collect())
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"Target file must be a JSON pattern file",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(target).map_err(|e| AlgorithmError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            for entry in entries {
                let path = entry?.path();
                if is_pattern_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"Target must be a JSON pattern file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if output_path(input_path, OUTPUT_SUFFIX, "png").exists() {
            warn!(file = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let (example, catalog) = PatternFile::load(input_path)?.into_parts()?;

        let engine = self.generate_with_retries(input_path, index, &example, &catalog)?;

        export_grid_as_png(
            engine.grid(),
            &engine.colors(),
            self.cli.cell_pixels,
            &output_path(input_path, OUTPUT_SUFFIX, "png"),
        )?;
        LayoutSummary::from_engine(&engine).save(&output_path(input_path, SUMMARY_SUFFIX, "json"))?;

        if self.cli.visualize {
            engine.export_visualization(
                &output_path(input_path, VISUALIZATION_SUFFIX, "gif"),
                GIF_FRAME_DELAY_MS,
                self.cli.cell_pixels,
            )?;
        }

        if let Some(pm) = &mut self.progress_manager {
            pm.complete_file(index);
        }

        info!(
            file = %input_path.display(),
            seed = engine.config().seed,
            steps = engine.iteration(),
            "layout written"
        );
        Ok(())
    }

    /// Run attempts with seeds `seed`, `seed + 1`, ... until one completes
    fn generate_with_retries(
        &mut self,
        input_path: &Path,
        index: usize,
        example: &ExamplePattern,
        catalog: &TileCatalog,
    ) -> Result<WaveFunctionCollapse> {
        let base = self.cli.generation_config();
        let mut attempt = 0;
        loop {
            let config = base.with_seed(base.seed.wrapping_add(u64::from(attempt)));
            match self.generate(input_path, index, example, catalog, config) {
                Err(e) if e.is_contradiction() && attempt < self.cli.retries => {
                    warn!(
                        file = %input_path.display(),
                        seed = config.seed,
                        error = %e,
                        "retrying with next seed"
                    );
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    fn generate(
        &mut self,
        input_path: &Path,
        index: usize,
        example: &ExamplePattern,
        catalog: &TileCatalog,
        config: GenerationConfig,
    ) -> Result<WaveFunctionCollapse> {
        let mut engine = WaveFunctionCollapse::new(example, catalog, config)?;
        if self.cli.visualize {
            engine.enable_visualization();
        }

        if let Some(pm) = &mut self.progress_manager {
            pm.start_file(index, input_path, engine.grid().cell_count());
        }

        loop {
            let outcome = engine.step()?;
            if let Some(pm) = &mut self.progress_manager {
                pm.update_cells(index, engine.grid().collapsed_count());
            }
            if !matches!(outcome, StepOutcome::Collapsed { .. }) {
                return Ok(engine);
            }
        }
    }
}

/// JSON files that are not layout summaries written by an earlier run
fn is_pattern_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("json")
        && !path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(SUMMARY_SUFFIX))
}

/// Sibling of `input_path` named `<stem><suffix>.<extension>`
pub fn output_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());
    input_path
        .parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}
