use serde::Deserialize;
use serde::Serialize;

use crate::aspect_ratio::AspectRatio;
use crate::error::LayoutError;
use crate::options::GridOptions;
use crate::options::LastRowAlignment;
use crate::rect::Rect;

/// Two candidate partitions whose tile areas differ by less than this are
/// considered equal, and the one with fewer columns wins.
pub const AREA_EPSILON: f64 = 1e-6;

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// A container's available drawing area in pixels
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Pixel coordinates of one tile's top-left corner
pub struct Position {
    pub top: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Everything the solver needs for one computation
pub struct LayoutParams {
    pub container: Dimensions,
    pub count: usize,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default)]
    pub gap: f64,
    #[serde(default)]
    pub options: GridOptions,
}

/// The chosen partition and tile size for one set of inputs.
///
/// A layout is a plain value recomputed fresh on every input change; nothing
/// is cached across computations. `columns = rows = 0` with zero-size tiles
/// marks the degenerate case (zero count, zero-size container, or a container
/// too small for any partition at the requested gap).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub tile_width: f64,
    pub tile_height: f64,
    pub count: usize,
    pub gap: f64,
    pub last_row_alignment: LastRowAlignment,
}

impl GridLayout {
    const fn degenerate(count: usize, gap: f64, options: GridOptions) -> Self {
        Self {
            columns: 0,
            rows: 0,
            tile_width: 0.0,
            tile_height: 0.0,
            count,
            gap,
            last_row_alignment: options.last_row_alignment,
        }
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.columns == 0 || self.tile_width <= 0.0 || self.tile_height <= 0.0
    }

    /// Top-left corner of the tile at `index`, row-major. None for indices
    /// outside `[0, count)` and for degenerate layouts.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Position> {
        if index >= self.count || self.is_degenerate() {
            return None;
        }

        let col = index % self.columns;
        let row = index / self.columns;

        let mut left = col as f64 * (self.tile_width + self.gap);
        let top = row as f64 * (self.tile_height + self.gap);

        if matches!(self.last_row_alignment, LastRowAlignment::Center) && row == self.rows - 1 {
            let remainder = self.count % self.columns;
            if remainder != 0 {
                left += (self.columns - remainder) as f64 * (self.tile_width + self.gap) / 2.0;
            }
        }

        Some(Position { top, left })
    }

    /// The full rectangle of the tile at `index`.
    #[must_use]
    pub fn rect(&self, index: usize) -> Option<Rect> {
        self.position(index).map(|position| Rect {
            left: position.left,
            top: position.top,
            width: self.tile_width,
            height: self.tile_height,
        })
    }

    /// Rectangles for every tile, in index order. Empty for degenerate
    /// layouts.
    #[must_use]
    pub fn rects(&self) -> Vec<Rect> {
        (0..self.count).filter_map(|i| self.rect(i)).collect()
    }

    #[must_use]
    pub fn tile_area(&self) -> f64 {
        self.tile_width * self.tile_height
    }
}

/// Computes the area-maximizing grid layout for `count` tiles of the given
/// aspect ratio inside `container`, with `gap` pixels between adjacent tiles.
pub fn solve(
    container: &Dimensions,
    count: usize,
    aspect_ratio: &AspectRatio,
    gap: f64,
) -> Result<GridLayout, LayoutError> {
    solve_with_options(container, count, aspect_ratio, gap, GridOptions::default())
}

pub fn solve_with_options(
    container: &Dimensions,
    count: usize,
    aspect_ratio: &AspectRatio,
    gap: f64,
    options: GridOptions,
) -> Result<GridLayout, LayoutError> {
    validate_dimension("width", container.width)?;
    validate_dimension("height", container.height)?;

    if !gap.is_finite() || gap < 0.0 {
        return Err(LayoutError::NegativeGap { value: gap });
    }

    if count == 0 || container.width == 0.0 || container.height == 0.0 {
        return Ok(GridLayout::degenerate(count, gap, options));
    }

    let ratio = aspect_ratio.ratio();
    let mut best: Option<GridLayout> = None;

    for columns in 1..=count {
        let rows = count.div_ceil(columns);

        let avail_width = container.width - gap * (columns - 1) as f64;
        let avail_height = container.height - gap * (rows - 1) as f64;

        let width_bound = avail_width / columns as f64;
        let height_bound = avail_height / rows as f64;

        // The binding constraint is whichever axis produces the smaller tile
        let tile_width = width_bound.min(height_bound * ratio);
        let tile_height = tile_width / ratio;

        if tile_width <= 0.0 || tile_height <= 0.0 {
            tracing::debug!(
                "rejecting {columns} columns x {rows} rows: no positive tile fits at gap {gap}"
            );
            continue;
        }

        let area = tile_width * tile_height;
        tracing::debug!("candidate {columns} columns x {rows} rows: tile area {area}");

        // Strictly-greater with tolerance: ties resolve to fewer columns
        // because candidates are scanned in ascending column order
        if best.is_none_or(|b| area > b.tile_area() + AREA_EPSILON) {
            best = Some(GridLayout {
                columns,
                rows,
                tile_width,
                tile_height,
                count,
                gap,
                last_row_alignment: options.last_row_alignment,
            });
        }
    }

    Ok(best.unwrap_or_else(|| GridLayout::degenerate(count, gap, options)))
}

/// The single-call façade over the solver.
pub fn compute_layout(params: &LayoutParams) -> Result<GridLayout, LayoutError> {
    solve_with_options(
        &params.container,
        params.count,
        &params.aspect_ratio,
        params.gap,
        params.options,
    )
}

fn validate_dimension(axis: &'static str, value: f64) -> Result<(), LayoutError> {
    if !value.is_finite() || value < 0.0 {
        return Err(LayoutError::NegativeDimension { axis, value });
    }

    Ok(())
}
