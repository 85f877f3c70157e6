//! Virtual scroll window calculator.
//!
//! Maps a scroll offset and viewport size onto the contiguous row range the
//! presentation layer must materialize, plus the spacer sizes that stand in
//! for everything outside it. All rows share one estimated height; there is
//! no dynamic measurement feedback. Render cost is O(viewport + overscan),
//! independent of the total row count.

use std::ops::Range;

/// Inputs for one window computation; produced on every scroll or resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowParams {
    pub total_rows: usize,
    /// Scroll offset in pixels from the top of the content.
    pub scroll_offset: f64,
    /// Visible height of the scrolling container in pixels.
    pub viewport_height: f64,
    /// Uniform estimated row height in pixels.
    pub row_height: f64,
    /// Extra rows rendered beyond each edge of the viewport.
    pub overscan: usize,
}

/// The row range to materialize and the pixel spacers around it.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualWindow {
    /// Half-open index range of rows to render; the inclusive last index is
    /// `rows.end - 1` when non-empty.
    pub rows: Range<usize>,
    /// Height reserved above the rendered rows.
    pub leading_px: f64,
    /// Height reserved below the rendered rows.
    pub trailing_px: f64,
}

impl VirtualWindow {
    const EMPTY: VirtualWindow = VirtualWindow {
        rows: 0..0,
        leading_px: 0.0,
        trailing_px: 0.0,
    };

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows to render.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// First rendered index, when any row is rendered.
    pub fn first_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.rows.start)
    }

    /// Last rendered index (inclusive), when any row is rendered.
    pub fn last_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.rows.end - 1)
    }
}

/// Compute the render window for the current scroll state.
///
/// Total over its input domain: a zero row count yields an empty window,
/// negative or non-finite scroll offsets read as zero, and a degenerate row
/// height reads as one pixel. An offset past the end of the content clamps
/// to the final row rather than an out-of-range index.
///
/// # Returns
/// The index range to render plus leading/trailing spacer heights.
pub fn compute_window(params: &WindowParams) -> VirtualWindow {
    let total = params.total_rows;
    if total == 0 {
        return VirtualWindow::EMPTY;
    }

    let row_height = if params.row_height.is_finite() && params.row_height > 0.0 {
        params.row_height
    } else {
        1.0
    };
    let offset = if params.scroll_offset.is_finite() {
        params.scroll_offset.max(0.0)
    } else {
        0.0
    };
    let viewport = if params.viewport_height.is_finite() {
        params.viewport_height.max(0.0)
    } else {
        0.0
    };

    let first_visible = (offset / row_height).floor() as usize;
    // Exclusive end: ceil converts the bottom edge to the row count needed
    // to cover it.
    let end_visible = ((offset + viewport) / row_height).ceil() as usize;

    let first = first_visible.saturating_sub(params.overscan).min(total - 1);
    let end = end_visible
        .saturating_add(params.overscan)
        .min(total)
        .max(first + 1);

    VirtualWindow {
        rows: first..end,
        leading_px: first as f64 * row_height,
        trailing_px: (total - end) as f64 * row_height,
    }
}
