//! Tests for the step-driven engine: construction, stepping and failure modes

#[cfg(test)]
mod tests {
    use tilewave::algorithm::executor::{GenerationConfig, StepOutcome, WaveFunctionCollapse};
    use tilewave::algorithm::propagation::PropagationPolicy;
    use tilewave::analysis::patterns::ExamplePattern;
    use tilewave::io::configuration::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_SEED};
    use tilewave::spatial::tiles::{TileCatalog, TileSpec};
    use tilewave::AlgorithmError;

    fn wall_space_catalog() -> TileCatalog {
        let mut catalog = TileCatalog::new();
        catalog.insert("Q", TileSpec::new("wall_0.png", true));
        catalog.insert("Y", TileSpec::new("space_0.png", false));
        catalog
    }

    fn wall_space_example() -> ExamplePattern {
        ExamplePattern::from_char_rows(&["QYQQ", "QQYQ"]).expect("valid example")
    }

    // Tests the default config matches the default window grid
    // Verified by swapping width and height in Default
    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.width, DEFAULT_GRID_WIDTH);
        assert_eq!(config.height, DEFAULT_GRID_HEIGHT);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.policy, PropagationPolicy::VisitOnce);
    }

    // Tests zero-sized grids are rejected at construction
    // Verified by removing the dimension validation
    #[test]
    fn test_zero_dimension_rejected() {
        let result = WaveFunctionCollapse::new(
            &wall_space_example(),
            &wall_space_catalog(),
            GenerationConfig::new(0, 5, 1),
        );
        assert!(matches!(
            result,
            Err(AlgorithmError::InvalidParameter {
                parameter: "width",
                ..
            })
        ));
    }

    // Tests a symbol missing from the catalog fails construction
    // Verified by skipping catalog resolution
    #[test]
    fn test_unknown_tile_rejected() {
        let mut catalog = TileCatalog::new();
        catalog.insert("Q", TileSpec::new("wall_0.png", true));

        let result = WaveFunctionCollapse::new(
            &wall_space_example(),
            &catalog,
            GenerationConfig::new(3, 3, 1),
        );
        match result {
            Err(AlgorithmError::UnknownTile { symbol }) => assert_eq!(symbol, "Y"),
            other => panic!("expected UnknownTile, got {other:?}"),
        }
    }

    // Tests a fresh engine has every cell in full superposition and shows placeholders
    // Verified by initializing cells with an empty candidate set
    #[test]
    fn test_fresh_engine_state() {
        let engine = WaveFunctionCollapse::new(
            &wall_space_example(),
            &wall_space_catalog(),
            GenerationConfig::new(4, 3, 1),
        )
        .expect("valid engine");

        assert_eq!(engine.grid().rows(), 3);
        assert_eq!(engine.grid().cols(), 4);
        assert_eq!(engine.grid().placeholder_count(), 12);
        assert!(engine.layout().is_empty());
        assert!(!engine.is_complete());
        assert_eq!(engine.iteration(), 0);
        assert_eq!(engine.alphabet().len(), 2);
    }

    // Tests collapsing a position materializes exactly one entity
    // Verified by materializing on AlreadyCollapsed as well
    #[test]
    fn test_collapse_materializes_once() {
        let mut engine = WaveFunctionCollapse::new(
            &wall_space_example(),
            &wall_space_catalog(),
            GenerationConfig::new(10, 10, 4),
        )
        .expect("valid engine");

        let tile = engine.collapse([1, 0]).expect("collapse succeeds");
        assert_eq!(engine.collapse([1, 0]).expect("stable"), tile);
        assert_eq!(engine.layout().len(), 1);
        assert_eq!(engine.grid().placeholder_count(), 99);
        assert!(engine.symbol_at([1, 0]).is_some());
    }

    // Tests positions outside the grid are rejected
    // Verified by removing the bounds check before collapse
    #[test]
    fn test_collapse_out_of_bounds() {
        let mut engine = WaveFunctionCollapse::new(
            &wall_space_example(),
            &wall_space_catalog(),
            GenerationConfig::new(2, 2, 4),
        )
        .expect("valid engine");
        assert!(matches!(
            engine.collapse([2, 0]),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
    }

    // Tests stepping collapses one cell per step and ends with Completed then Idle
    // Verified by never raising the completion flag
    #[test]
    fn test_step_lifecycle() {
        let example = ExamplePattern::from_char_rows(&["LS", "SL"]).expect("valid example");
        let mut catalog = TileCatalog::new();
        catalog.insert("L", TileSpec::new("wall_3.png", true));
        catalog.insert("S", TileSpec::new("space_6.png", false));
        let mut engine =
            WaveFunctionCollapse::new(&example, &catalog, GenerationConfig::new(3, 2, 8))
                .expect("valid engine");

        let mut collapsed_steps = 0;
        loop {
            match engine.step().expect("checkerboard never contradicts") {
                StepOutcome::Collapsed { .. } => collapsed_steps += 1,
                StepOutcome::Completed { swept } => {
                    assert_eq!(swept, 0);
                    break;
                }
                StepOutcome::Idle => panic!("idle before completion"),
            }
            assert!(collapsed_steps <= 6);
        }

        assert!(engine.is_complete());
        assert_eq!(engine.iteration(), collapsed_steps);
        assert_eq!(engine.step().expect("complete"), StepOutcome::Idle);
        assert_eq!(engine.layout().len(), 6);
        assert_eq!(engine.grid().placeholder_count(), 0);
    }

    // Tests a contradiction poisons every later step with the same position
    // Verified by clearing the recorded contradiction after reporting it
    #[test]
    fn test_contradiction_is_sticky() {
        // Nothing may follow "B", and "A" must be followed by "B", so any row
        // wider than two cells runs out of candidates
        let example = ExamplePattern::from_char_rows(&["AB"]).expect("valid example");
        let mut catalog = TileCatalog::new();
        catalog.insert("A", TileSpec::new("a.png", false));
        catalog.insert("B", TileSpec::new("b.png", true));
        let mut engine =
            WaveFunctionCollapse::new(&example, &catalog, GenerationConfig::new(3, 1, 0))
                .expect("valid engine");

        let first = engine.run().expect_err("a 3-wide row always contradicts");

        let AlgorithmError::Contradiction { position, .. } = first else {
            panic!("expected contradiction, got {first:?}");
        };
        assert_eq!(engine.contradiction(), Some(position));
        match engine.step() {
            Err(AlgorithmError::Contradiction { position: again, .. }) => {
                assert_eq!(again, position);
            }
            other => panic!("expected sticky contradiction, got {other:?}"),
        }
    }

    // Tests exporting a visualization requires enabling it first
    // Verified by exporting an empty capture when disabled
    #[test]
    fn test_visualization_requires_enable() {
        let engine = WaveFunctionCollapse::new(
            &wall_space_example(),
            &wall_space_catalog(),
            GenerationConfig::new(2, 2, 1),
        )
        .expect("valid engine");
        let dir = tempfile::tempdir().expect("temp dir");

        assert!(engine.visualization().is_none());
        assert!(
            engine
                .export_visualization(&dir.path().join("viz.gif"), 50, 4)
                .is_err()
        );
    }

    // Tests the capture records one placement per materialized cell
    // Verified by recording placements only for walls
    #[test]
    fn test_visualization_records_placements() {
        let example = ExamplePattern::from_char_rows(&["LS", "SL"]).expect("valid example");
        let mut catalog = TileCatalog::new();
        catalog.insert("L", TileSpec::new("wall_3.png", true));
        catalog.insert("S", TileSpec::new("space_6.png", false));
        let mut engine =
            WaveFunctionCollapse::new(&example, &catalog, GenerationConfig::new(4, 4, 2))
                .expect("valid engine");
        engine.enable_visualization();
        engine.run().expect("checkerboard never contradicts");

        assert_eq!(
            engine.visualization().map(|viz| viz.placement_count()),
            Some(16)
        );
    }
}
