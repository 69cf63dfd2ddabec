//! Tests for JSON pattern file loading, saving and validation

#[cfg(test)]
mod tests {
    use tilewave::AlgorithmError;
    use tilewave::io::pattern::{ExampleRows, PatternFile};

    // Tests saving then loading keeps the labyrinth intact
    // Verified by writing the example with a row missing
    #[test]
    fn test_labyrinth_save_and_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("maze.json");

        PatternFile::labyrinth().save(&path).expect("save succeeds");
        let loaded = PatternFile::load(&path).expect("load succeeds");

        assert_eq!(loaded, PatternFile::labyrinth());
        assert_eq!(loaded.tiles.len(), 3);
    }

    // Tests both row encodings parse into the same pattern
    // Verified by splitting compact rows on whitespace
    #[test]
    fn test_row_encodings() {
        let compact: PatternFile = serde_json::from_str(
            r#"{"tiles": {"A": {"asset": "a.png", "wall": true}, "B": {"asset": "b.png", "wall": false}},
                "example": ["AB", "BA"]}"#,
        )
        .expect("compact rows parse");
        let cells: PatternFile = serde_json::from_str(
            r#"{"tiles": {"A": {"asset": "a.png", "wall": true}, "B": {"asset": "b.png", "wall": false}},
                "example": [["A", "B"], ["B", "A"]]}"#,
        )
        .expect("cell rows parse");

        assert!(matches!(compact.example, ExampleRows::Compact(_)));
        assert!(matches!(cells.example, ExampleRows::Cells(_)));
        let (a, _) = compact.into_parts().expect("valid");
        let (b, _) = cells.into_parts().expect("valid");
        assert_eq!(a, b);
    }

    // Tests loading rejects examples using symbols the catalog lacks
    // Verified by skipping validation on load
    #[test]
    fn test_load_rejects_uncataloged_symbol() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"tiles": {"A": {"asset": "a.png", "wall": true}}, "example": ["AZ"]}"#,
        )
        .expect("write file");

        match PatternFile::load(&path) {
            Err(AlgorithmError::UnknownTile { symbol }) => assert_eq!(symbol, "Z"),
            other => panic!("expected UnknownTile, got {other:?}"),
        }
    }

    // Tests malformed JSON reports the file it came from
    // Verified by dropping the path context
    #[test]
    fn test_load_reports_parse_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"tiles\": ").expect("write file");

        match PatternFile::load(&path) {
            Err(AlgorithmError::PatternParse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected PatternParse, got {other:?}"),
        }
    }

    // Tests missing files surface as file system errors
    // Verified by mapping read failures to parse errors
    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(matches!(
            PatternFile::load(&dir.path().join("absent.json")),
            Err(AlgorithmError::FileSystem { .. })
        ));
    }

    // Tests ragged examples fail validation
    // Verified by validating only the catalog
    #[test]
    fn test_validate_ragged() {
        let mut pattern = PatternFile::labyrinth();
        pattern.example = ExampleRows::Compact(vec!["LS".to_string(), "L".to_string()]);
        assert!(matches!(
            pattern.validate(),
            Err(AlgorithmError::InvalidSourceData { .. })
        ));
    }
}
