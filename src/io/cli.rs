//! Command-line interface for batch mosaic generation
//!
//! Sources are either image files (processed singly or as a sorted
//! directory batch) or a generated noise field. Every source runs the same
//! pipeline: load or generate, render one pass, export the raster mosaic as
//! PNG and the vector mosaic as SVG, optionally with a letterboxed preview.

use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

use crate::display::compositor::composite;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_MAX_HEIGHT, DEFAULT_MIN_HEIGHT, DEFAULT_NOISE_CONTRAST,
    DEFAULT_NOISE_SCALE, DEFAULT_TILE_COLOR, DEFAULT_TILES_X, DEFAULT_TILES_Y,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, NOISE_OUTPUT_STEM, OUTPUT_SUFFIX,
    PREVIEW_SUFFIX, RANDOM_SOURCE_MAX, RANDOM_SOURCE_MIN,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_raster_as_png, export_svg_document, load_raster};
use crate::io::progress::ProgressManager;
use crate::raster::noise_field::{self, NoiseParams};
use crate::raster::source::Raster;
use crate::render::color::Rgb;
use crate::render::mosaic::render_pass;
use crate::render::params::{Direction, GridSpec, StyleParams};

#[derive(Parser)]
#[command(name = "barmosaic")]
#[command(
    author,
    version,
    about = "Generate halftone bar mosaics as PNG and SVG"
)]
/// Command-line arguments for the mosaic generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process (omit with --noise)
    #[arg(value_name = "TARGET", required_unless_present = "noise")]
    pub target: Option<PathBuf>,

    /// Generate a procedural noise field instead of loading an image
    #[arg(short, long)]
    pub noise: bool,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_TILES_X)]
    pub tiles_x: u32,

    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_TILES_Y)]
    pub tiles_y: u32,

    /// Minimum bar length in source pixels
    #[arg(long, default_value_t = DEFAULT_MIN_HEIGHT)]
    pub min_height: f64,

    /// Maximum bar length in source pixels (clamps the minimum down)
    #[arg(long, default_value_t = DEFAULT_MAX_HEIGHT)]
    pub max_height: f64,

    /// Axis along which bar length varies
    #[arg(short, long, default_value_t = Direction::Horizontal)]
    pub direction: Direction,

    /// Bar fill color in #RRGGBB notation
    #[arg(long, default_value_t = DEFAULT_TILE_COLOR)]
    pub tile_color: Rgb,

    /// Fill each bar with its sampled source pixel color (image sources only)
    #[arg(short = 'c', long)]
    pub use_source_color: bool,

    /// Background color in #RRGGBB notation
    #[arg(long, default_value_t = DEFAULT_BACKGROUND)]
    pub background: Rgb,

    /// Leave the background transparent instead of filling it
    #[arg(short = 't', long)]
    pub transparent_background: bool,

    /// Swap which brightness extreme produces the longer bar
    #[arg(short, long)]
    pub invert: bool,

    /// Also write a letterboxed preview PNG sized to the viewport
    #[arg(short, long)]
    pub preview: bool,

    /// Preview the raw source instead of the mosaic
    #[arg(long)]
    pub show_source: bool,

    /// Viewport width for the letterboxed preview
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub viewport_width: u32,

    /// Viewport height for the letterboxed preview
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    pub viewport_height: u32,

    /// Seed for the noise field (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Spatial frequency divisor for the noise field
    #[arg(long, default_value_t = DEFAULT_NOISE_SCALE)]
    pub noise_scale: f64,

    /// Contrast multiplier for the noise field (>= 1)
    #[arg(long, default_value_t = DEFAULT_NOISE_CONTRAST)]
    pub contrast: f64,

    /// Horizontal noise-domain offset
    #[arg(long, default_value_t = 0.0)]
    pub offset_x: f64,

    /// Vertical noise-domain offset
    #[arg(long, default_value_t = 0.0)]
    pub offset_y: f64,

    /// Noise field width (seed-derived random in [1000, 2000) when omitted)
    #[arg(long)]
    pub noise_width: Option<u32>,

    /// Noise field height (seed-derived random in [1000, 2000) when omitted)
    #[arg(long)]
    pub noise_height: Option<u32>,

    /// Output stem override (defaults to the input stem, or 'noise')
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process sources even if output exists
    #[arg(long)]
    pub no_skip: bool,
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
}

/// Orchestrates mosaic generation for one or many sources
pub struct SourceProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SourceProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process sources according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, parameter validation, source
    /// loading or generation, or export fails.
    pub fn process(&mut self) -> Result<()> {
        if self.cli.noise {
            return self.process_noise();
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let Some(ref target) = self.cli.target else {
            return Err(invalid_parameter(
                "target",
                &"<missing>",
                &"an input path is required unless --noise is given",
            ));
        };

        if target.is_file() {
            if is_supported_image(target) {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a PNG or JPEG image",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if is_supported_image(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let mosaic_path = with_suffix(&self.stem_for(input_path), OUTPUT_SUFFIX, "png");
        if mosaic_path.exists() {
            // Allow print for user feedback for skip messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let display_name = input_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_source(index, &display_name);
        }

        let source = load_raster(input_path)?;
        let stem = self.stem_for(input_path);
        self.run_pipeline(&source, &stem, index, true)
    }

    fn process_noise(&mut self) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(1);
            pm.start_source(0, NOISE_OUTPUT_STEM);
        }

        let seed = self.cli.seed.unwrap_or_else(|| rand::rng().random());
        let params = NoiseParams {
            seed,
            spatial_scale: self.cli.noise_scale,
            contrast: self.cli.contrast,
            offset_x: self.cli.offset_x,
            offset_y: self.cli.offset_y,
        };

        // Unspecified extents are reproducible for a fixed seed
        let mut rng = StdRng::seed_from_u64(u64::from(seed));
        let width = self
            .cli
            .noise_width
            .unwrap_or_else(|| rng.random_range(RANDOM_SOURCE_MIN..RANDOM_SOURCE_MAX));
        let height = self
            .cli
            .noise_height
            .unwrap_or_else(|| rng.random_range(RANDOM_SOURCE_MIN..RANDOM_SOURCE_MAX));

        let source = noise_field::generate(width, height, &params)?;
        let stem = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(NOISE_OUTPUT_STEM));

        // The noise variant never offers per-cell source coloring
        let result = self.run_pipeline(&source, &stem, 0, false);

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        result
    }

    fn run_pipeline(
        &mut self,
        source: &Raster,
        stem: &Path,
        index: usize,
        allow_source_color: bool,
    ) -> Result<()> {
        let grid = GridSpec::new(self.cli.tiles_x, self.cli.tiles_y)?;
        let style = self.build_style(allow_source_color)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.advance_stage(index, "rendering");
        }

        let (raster_sink, vector_sink) = render_pass(source, &grid, &style)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.advance_stage(index, "exporting");
        }

        export_raster_as_png(raster_sink.raster(), with_suffix(stem, OUTPUT_SUFFIX, "png"))?;
        export_svg_document(&vector_sink.to_svg(), with_suffix(stem, OUTPUT_SUFFIX, "svg"))?;

        if self.cli.preview {
            let shown = if self.cli.show_source {
                source
            } else {
                raster_sink.raster()
            };
            let viewport = composite(shown, self.cli.viewport_width, self.cli.viewport_height)?;
            export_raster_as_png(&viewport, with_suffix(stem, PREVIEW_SUFFIX, "png"))?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_source(index);
        }

        Ok(())
    }

    fn build_style(&self, allow_source_color: bool) -> Result<StyleParams> {
        let mut style = StyleParams::with_heights(self.cli.min_height, self.cli.max_height)?;
        style.direction = self.cli.direction;
        style.tile_color = self.cli.tile_color;
        style.use_source_color = self.cli.use_source_color && allow_source_color;
        style.background = self.cli.background;
        style.transparent_background = self.cli.transparent_background;
        style.invert = self.cli.invert;
        Ok(style)
    }

    fn stem_for(&self, input_path: &Path) -> PathBuf {
        // The stem override only applies to single-source runs; batch outputs
        // would otherwise collide on one path
        let single_source = self.cli.target.as_ref().is_some_and(|t| t.is_file());
        if let Some(ref output) = self.cli.output {
            if single_source {
                return output.clone();
            }
        }

        let stem = input_path.file_stem().unwrap_or_default();
        input_path
            .parent()
            .map_or_else(|| PathBuf::from(stem), |parent| parent.join(stem))
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg")
        })
}

/// Append a suffix to a path's final component and set its extension
fn with_suffix(stem: &Path, suffix: &str, extension: &str) -> PathBuf {
    let name = format!(
        "{}{}.{}",
        stem.file_name().unwrap_or_default().to_string_lossy(),
        suffix,
        extension
    );
    stem.with_file_name(name)
}

/// Derived output paths for a given stem (exposed for tests)
pub fn output_paths(stem: &Path) -> (PathBuf, PathBuf) {
    (
        with_suffix(stem, OUTPUT_SUFFIX, "png"),
        with_suffix(stem, OUTPUT_SUFFIX, "svg"),
    )
}
