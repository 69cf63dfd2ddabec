//! Frame capture and GIF generation for collapse-order visualization

use crate::io::configuration::{PLACEHOLDER_COLOR, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{AlgorithmError, Result, invalid_source};
use crate::io::image::{ensure_parent_dir, fill_cell, validate_cell_pixels};
use crate::spatial::tiles::TileId;
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// A single cell materialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlacement {
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
    /// Tile the cell collapsed to
    pub tile: TileId,
    /// Generation step that materialized it
    pub iteration: usize,
}

/// Captures materializations for visualization
///
/// Replays the host's progressive view offline: the first frame shows every
/// cell as a placeholder and each placement reveals one tile.
#[derive(Debug, Clone)]
pub struct VisualizationCapture {
    placements: Vec<TilePlacement>,
    dims: (usize, usize),
    colors: Vec<[u8; 4]>,
}

impl VisualizationCapture {
    /// Create a capture for a `rows` x `cols` grid
    pub fn new(rows: usize, cols: usize, colors: Vec<[u8; 4]>) -> Self {
        Self {
            placements: Vec::with_capacity(rows * cols),
            dims: (rows, cols),
            colors,
        }
    }

    /// Records a tile placement at the given position
    pub fn record_placement(&mut self, row: usize, col: usize, tile: TileId, iteration: usize) {
        self.placements.push(TilePlacement {
            row,
            col,
            tile,
            iteration,
        });
    }

    /// Returns all recorded placement events
    pub fn get_placements(&self) -> &[TilePlacement] {
        &self.placements
    }

    /// Returns the total number of placement events
    pub const fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Export the captured placements as a GIF with automatic frame skipping
    ///
    /// If `frame_delay_ms` is below what viewers display reliably, every
    /// n-th frame is kept so the apparent speed stays the same.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No placements were captured
    /// - `cell_pixels` is out of range
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32, cell_pixels: u32) -> Result<()> {
        if self.placements.is_empty() {
            return Err(invalid_source(
                &"No tile placements captured for visualization",
            ));
        }
        validate_cell_pixels(cell_pixels)?;

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms)
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor as usize, cell_pixels)?;

        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| AlgorithmError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgorithmError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(
        &self,
        delay_ms: u32,
        skip_factor: usize,
        cell_pixels: u32,
    ) -> Result<Vec<Frame>> {
        let (rows, cols) = self.dims;
        let mut cells: Vec<Option<TileId>> = vec![None; rows * cols];
        let mut frames = vec![self.render_frame(&cells, delay_ms, cell_pixels)?];

        let mut frame_count = 0;
        for placement in &self.placements {
            if placement.row >= rows || placement.col >= cols {
                continue;
            }
            if let Some(cell) = cells.get_mut(placement.row * cols + placement.col) {
                *cell = Some(placement.tile);
            }

            frame_count += 1;
            if frame_count % skip_factor == 0 {
                frames.push(self.render_frame(&cells, delay_ms, cell_pixels)?);
            }
        }

        if frame_count % skip_factor != 0 {
            frames.push(self.render_frame(&cells, delay_ms, cell_pixels)?);
        }

        // Final frame displays longer for better visibility
        if let Some(last_frame_img) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last_frame_img,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms * 25, 1),
            ));
        }

        Ok(frames)
    }

    fn render_frame(
        &self,
        cells: &[Option<TileId>],
        delay_ms: u32,
        cell_pixels: u32,
    ) -> Result<Frame> {
        let (rows, cols) = self.dims;
        let mut img = RgbaImage::new(cols as u32 * cell_pixels, rows as u32 * cell_pixels);

        for (index, cell) in cells.iter().enumerate() {
            let color = match cell {
                None => PLACEHOLDER_COLOR,
                Some(tile) => self.colors.get(*tile).copied().ok_or_else(|| {
                    invalid_source(&format!(
                        "Tile {tile} is out of bounds for {} colors",
                        self.colors.len()
                    ))
                })?,
            };
            fill_cell(&mut img, index / cols, index % cols, cell_pixels, color);
        }

        Ok(Frame::from_parts(
            img,
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        ))
    }
}
