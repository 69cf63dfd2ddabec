//! Tests for materialized wall and open entities

#[cfg(test)]
mod tests {
    use tilewave::spatial::Layout;
    use tilewave::spatial::tiles::{TileKind, TileSpec};

    // Tests walls are recorded with (column, row) positions
    // Verified by keeping grid (row, column) order
    #[test]
    fn test_record_wall() {
        let mut layout = Layout::new();
        let kind = layout.record([9, 2], 0, &TileSpec::new("wall_0.png", true));

        assert_eq!(kind, TileKind::Wall);
        assert_eq!(layout.wall_positions, vec![[2, 9]]);
        assert_eq!(layout.walls.first().map(|wall| wall.position), Some([2, 9]));
        assert_eq!(layout.walls.first().map(|wall| wall.asset.as_str()), Some("wall_0.png"));
    }

    // Tests open tiles do not appear in the wall positions
    // Verified by pushing every position into wall_positions
    #[test]
    fn test_record_open() {
        let mut layout = Layout::new();
        layout.record([0, 0], 1, &TileSpec::new("space_0.png", false));

        assert_eq!(layout.open.len(), 1);
        assert!(layout.walls.is_empty());
        assert!(layout.wall_positions.is_empty());
    }

    // Tests iteration covers walls then open tiles
    // Verified by iterating only walls
    #[test]
    fn test_tiles_iteration() {
        let mut layout = Layout::new();
        assert!(layout.is_empty());
        layout.record([0, 0], 1, &TileSpec::new("space_0.png", false));
        layout.record([0, 1], 0, &TileSpec::new("wall_0.png", true));

        let kinds: Vec<TileKind> = layout.tiles().map(|tile| tile.kind).collect();
        assert_eq!(kinds, vec![TileKind::Wall, TileKind::Open]);
        assert_eq!(layout.len(), 2);
    }

    // Tests the serialized layout uses lowercase kinds
    // Verified by removing the serde rename
    #[test]
    fn test_serialized_kind() {
        let mut layout = Layout::new();
        layout.record([1, 1], 0, &TileSpec::new("wall_0.png", true));
        let json = serde_json::to_value(&layout).expect("serializable");
        assert_eq!(json["walls"][0]["kind"], "wall");
    }
}
