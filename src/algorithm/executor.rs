use crate::{
    algorithm::bitset::TileBitset,
    algorithm::collapse::{CollapseOutcome, collapse_cell, force_collapse_cell, materialize},
    algorithm::propagation::{PropagationPolicy, PropagationReport, propagate},
    algorithm::selection::{cell_entropy, select_min_entropy},
    analysis::patterns::ExamplePattern,
    analysis::rules::{RuleSet, extract},
    analysis::weights::WeightTable,
    io::configuration::{
        DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_SEED, MAX_GRID_DIMENSION,
    },
    io::error::{AlgorithmError, Result, WithContext, invalid_parameter, invalid_source},
    io::image::tile_colors,
    io::visualization::VisualizationCapture,
    math::probability::RandomSelector,
    spatial::tiles::{TileAlphabet, TileCatalog, TileId, TileSpec},
    spatial::{Layout, SuperpositionGrid},
};
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Output grid size, seed and propagation behavior of one run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Output grid width in cells
    pub width: usize,
    /// Output grid height in cells
    pub height: usize,
    /// Seed of the run's random selector
    pub seed: u64,
    /// Re-queueing policy of constraint propagation
    pub policy: PropagationPolicy,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            seed: DEFAULT_SEED,
            policy: PropagationPolicy::default(),
        }
    }
}

impl GenerationConfig {
    /// Config for a `width` x `height` grid with the given seed
    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            ..Self::default()
        }
    }

    /// Same config with another seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Same config with another propagation policy
    #[must_use]
    pub const fn with_policy(mut self, policy: PropagationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check the grid dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a dimension is 0 or above `MAX_GRID_DIMENSION`
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}

/// What one call to [`WaveFunctionCollapse::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The lowest-entropy cell was collapsed and its constraints propagated
    Collapsed {
        /// Grid position (row, col) of the collapsed cell
        position: [usize; 2],
        /// Tile it collapsed to
        tile: TileId,
        /// Propagation counters
        report: PropagationReport,
    },
    /// Nothing was left to select; the completion sweep ran and the grid is done
    Completed {
        /// Cells fixed by the sweep instead of a regular collapse
        swept: usize,
    },
    /// The grid was already complete
    Idle,
}

/// Step-driven simple tiled wave function collapse
///
/// Owns the superposition grid, the rules and weights learned from the
/// example, the seeded random selector and the materialized layout. Each
/// [`step`](Self::step) performs at most one select, collapse, propagate cycle
/// so a host loop can draw between steps.
#[derive(Debug, Clone)]
pub struct WaveFunctionCollapse {
    grid: SuperpositionGrid,
    rules: RuleSet,
    weights: WeightTable,
    alphabet: TileAlphabet,
    /// Catalog entries resolved per tile id
    specs: Vec<TileSpec>,
    layout: Layout,
    random_selector: RandomSelector,
    config: GenerationConfig,
    /// Number of steps that collapsed a cell
    iteration: usize,
    /// Set once the completion sweep ran
    complete: bool,
    /// First cell propagation tried to empty
    contradiction: Option<[usize; 2]>,
    visualization: Option<VisualizationCapture>,
}

impl WaveFunctionCollapse {
    /// Learn rules and weights from `example` and seed a grid in full superposition
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid dimensions are invalid
    /// - The example has no tiles
    /// - An example symbol has no catalog entry
    /// - A symbol of the candidate universe has no weight
    pub fn new(
        example: &ExamplePattern,
        catalog: &TileCatalog,
        config: GenerationConfig,
    ) -> Result<Self> {
        config.validate()?;

        let alphabet = example.alphabet().clone();
        if alphabet.is_empty() {
            return Err(invalid_source(&"Example pattern has no tiles"));
        }
        let specs = catalog.resolve(&alphabet)?;

        let (rules, weights) = extract(example);
        let universe = alphabet.len();
        if let Some(tile) = weights.first_missing(universe) {
            return Err(AlgorithmError::MissingWeight {
                symbol: alphabet.symbol(tile).unwrap_or("?").to_string(),
            });
        }

        debug!(
            tiles = universe,
            rules = rules.len(),
            width = config.width,
            height = config.height,
            seed = config.seed,
            "initialized superposition grid"
        );

        Ok(Self {
            grid: SuperpositionGrid::new(config.width, config.height, universe),
            rules,
            weights,
            alphabet,
            specs,
            layout: Layout::new(),
            random_selector: RandomSelector::new(config.seed),
            config,
            iteration: 0,
            complete: false,
            contradiction: None,
            visualization: None,
        })
    }

    /// Weighted Shannon entropy of a candidate set under this run's weights
    pub fn entropy(&self, candidates: &TileBitset) -> f64 {
        cell_entropy(candidates, &self.weights)
    }

    /// Uncollapsed cell with the lowest entropy, `None` once every cell is collapsed
    pub fn select_next(&self) -> Option<[usize; 2]> {
        select_min_entropy(&self.grid, &self.weights)
    }

    /// Collapse one cell to a weighted-random candidate and materialize it
    ///
    /// A cell that is already collapsed keeps its tile and nothing is emitted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `pos` lies outside the grid
    /// - The run already hit a contradiction, or the cell has no candidate
    pub fn collapse(&mut self, pos: [usize; 2]) -> Result<TileId> {
        self.check_position(pos)?;
        self.check_contradiction()?;

        match collapse_cell(&mut self.grid, pos, &self.weights, &mut self.random_selector) {
            CollapseOutcome::Fixed(tile) => {
                self.emit(pos, tile);
                Ok(tile)
            }
            CollapseOutcome::AlreadyCollapsed(tile) => Ok(tile),
            CollapseOutcome::Ambiguous(_) | CollapseOutcome::Empty => Err(self.fail_at(pos)),
        }
    }

    /// Propagate the constraints of `pos` through the grid
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `pos` lies outside the grid
    /// - A cell would lose its last candidate; the run is then stuck on that
    ///   contradiction and every later step reports it again
    pub fn propagate(&mut self, pos: [usize; 2]) -> Result<PropagationReport> {
        self.check_position(pos)?;
        self.check_contradiction()?;

        match propagate(&mut self.grid, &self.rules, pos, self.config.policy) {
            Ok(report) => {
                trace!(
                    row = pos[0],
                    col = pos[1],
                    visits = report.visits,
                    removals = report.removals,
                    "propagation converged"
                );
                Ok(report)
            }
            Err(AlgorithmError::Contradiction { position, .. }) => Err(self.fail_at(position)),
            Err(other) => Err(other),
        }
    }

    /// Fix every remaining uncollapsed cell to its single candidate
    ///
    /// No random draw and no propagation is involved. Returns the number of
    /// cells fixed.
    ///
    /// # Errors
    ///
    /// Returns an error if a remaining cell still has several candidates or none
    pub fn complete_remaining(&mut self) -> Result<usize> {
        self.check_contradiction()?;

        let mut swept = 0;
        for pos in self.grid.positions() {
            match force_collapse_cell(&mut self.grid, pos) {
                CollapseOutcome::Fixed(tile) => {
                    self.emit(pos, tile);
                    swept += 1;
                }
                CollapseOutcome::AlreadyCollapsed(_) => {}
                CollapseOutcome::Ambiguous(remaining) => {
                    return Err(invalid_parameter(
                        "position",
                        &format!("({}, {})", pos[0], pos[1]),
                        &format!("cell still has {remaining} candidates"),
                    ));
                }
                CollapseOutcome::Empty => return Err(self.fail_at(pos)),
            }
        }

        if swept > 0 {
            debug!(swept, "completion sweep fixed remaining cells");
        }
        Ok(swept)
    }

    /// Run one select, collapse, propagate cycle
    ///
    /// # Errors
    ///
    /// Returns `Contradiction` once propagation tried to empty a cell, on this
    /// and on every later call
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.complete {
            return Ok(StepOutcome::Idle);
        }
        self.check_contradiction()?;

        let Some(pos) = self.select_next() else {
            let swept = self.complete_remaining()?;
            self.complete = true;
            info!(
                steps = self.iteration,
                walls = self.layout.walls.len(),
                open = self.layout.open.len(),
                "generation complete"
            );
            return Ok(StepOutcome::Completed { swept });
        };

        self.iteration += 1;
        let tile = self.collapse(pos)?;
        let report = self.propagate(pos)?;

        Ok(StepOutcome::Collapsed {
            position: pos,
            tile,
            report,
        })
    }

    /// Step until the grid is complete, returning the number of collapse steps
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`step`](Self::step)
    pub fn run(&mut self) -> Result<usize> {
        while !self.complete {
            self.step()?;
        }
        Ok(self.iteration)
    }

    /// Record a capture of every materialization from now on
    pub fn enable_visualization(&mut self) {
        self.visualization = Some(VisualizationCapture::new(
            self.grid.rows(),
            self.grid.cols(),
            self.colors(),
        ));
    }

    /// Export visualization as GIF if enabled
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Visualization was not enabled
    /// - GIF export fails
    pub fn export_visualization(
        &self,
        output_path: &Path,
        frame_delay_ms: u32,
        cell_pixels: u32,
    ) -> Result<()> {
        self.visualization.as_ref().map_or_else(
            || {
                Err(invalid_parameter(
                    "visualization",
                    &"disabled",
                    &"Visualization was not enabled for this run",
                ))
            },
            |viz| viz.export_gif(output_path, frame_delay_ms, cell_pixels),
        )
    }

    /// Whether every cell is collapsed and the completion sweep ran
    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    /// Cell propagation tried to empty, if any
    pub const fn contradiction(&self) -> Option<[usize; 2]> {
        self.contradiction
    }

    /// Number of steps that collapsed a cell
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Configuration of this run
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Access the superposition grid
    pub const fn grid(&self) -> &SuperpositionGrid {
        &self.grid
    }

    /// Adjacency rules learned from the example
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Tile weights learned from the example
    pub const fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Symbols of the run, indexed by tile id
    pub const fn alphabet(&self) -> &TileAlphabet {
        &self.alphabet
    }

    /// Catalog entries, indexed by tile id
    pub fn tile_specs(&self) -> &[TileSpec] {
        &self.specs
    }

    /// Export colors, indexed by tile id
    pub fn colors(&self) -> Vec<[u8; 4]> {
        tile_colors(&self.specs)
    }

    /// Entities materialized so far
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Consume the engine, keeping only its layout
    pub fn into_layout(self) -> Layout {
        self.layout
    }

    /// Optional visualization capture
    pub const fn visualization(&self) -> Option<&VisualizationCapture> {
        self.visualization.as_ref()
    }

    /// Symbol a cell collapsed to
    pub fn symbol_at(&self, pos: [usize; 2]) -> Option<&str> {
        self.grid
            .tile_at(pos)
            .and_then(|tile| self.alphabet.symbol(tile))
    }

    fn emit(&mut self, pos: [usize; 2], tile: TileId) {
        let kind = materialize(&mut self.layout, pos, tile, &self.specs);
        if let Some(viz) = &mut self.visualization {
            viz.record_placement(pos[0], pos[1], tile, self.iteration);
        }
        debug!(
            row = pos[0],
            col = pos[1],
            tile = self.alphabet.symbol(tile).unwrap_or("?"),
            kind = ?kind,
            iteration = self.iteration,
            "collapsed cell"
        );
    }

    fn check_position(&self, pos: [usize; 2]) -> Result<()> {
        if pos[0] >= self.grid.rows() || pos[1] >= self.grid.cols() {
            return Err(invalid_parameter(
                "position",
                &format!("({}, {})", pos[0], pos[1]),
                &format!(
                    "outside the {}x{} grid",
                    self.grid.rows(),
                    self.grid.cols()
                ),
            ));
        }
        Ok(())
    }

    fn check_contradiction(&self) -> Result<()> {
        match self.contradiction {
            Some(position) => Err(AlgorithmError::Contradiction {
                position,
                iteration: 0,
            })
            .with_iteration(self.iteration),
            None => Ok(()),
        }
    }

    fn fail_at(&mut self, position: [usize; 2]) -> AlgorithmError {
        warn!(
            row = position[0],
            col = position[1],
            iteration = self.iteration,
            seed = self.config.seed,
            "contradiction: cell has no candidates left"
        );
        self.contradiction = Some(position);
        AlgorithmError::Contradiction {
            position,
            iteration: self.iteration,
        }
    }
}
