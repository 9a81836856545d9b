//! Places children at fixed row/column cells of equal size.

use vellum_core::{
    draw::DrawableRef,
    error::DrawError,
    geometry::{Point, Rect, Size},
};

use crate::layout::Layout;

/// Lays out children row-major on a grid of equally sized cells.
///
/// The content area is divided into `rows x cols` cells. A child never
/// exceeds its cell: its bounds are the smaller of its preferred size and
/// the cell size, positioned inside the cell by its alignment hints.
/// When more children are added than the grid holds, rows grow to fit.
#[derive(Debug, Clone)]
pub struct GridLayout {
    rows: usize,
    cols: usize,
    gap: f32,
}

impl GridLayout {
    /// Creates a grid with the given row and column counts, each clamped
    /// to at least 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
            gap: 0.0,
        }
    }

    /// Sets the gap between adjacent cells (builder style).
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    /// Returns the configured row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the configured column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row count actually used: the configured rows, grown when more
    /// children are present than the grid holds.
    fn effective_rows(&self, children_len: usize) -> usize {
        self.rows.max(children_len.div_ceil(self.cols))
    }
}

impl Layout for GridLayout {
    fn arrange(&self, content_area: Rect, children: &[DrawableRef]) -> Result<(), DrawError> {
        if children.is_empty() {
            return Ok(());
        }

        let rows = self.effective_rows(children.len());
        let cols = self.cols;
        let cell_width =
            ((content_area.width() - self.gap * (cols - 1) as f32) / cols as f32).max(0.0);
        let cell_height =
            ((content_area.height() - self.gap * (rows - 1) as f32) / rows as f32).max(0.0);
        let cell = Size::new(cell_width, cell_height);

        for (index, child) in children.iter().enumerate() {
            let row = index / cols;
            let col = index % cols;
            let cell_origin = Point::new(
                content_area.x() + col as f32 * (cell_width + self.gap),
                content_area.y() + row as f32 * (cell_height + self.gap),
            );

            let size = child.preferred_size().min(cell);
            let slack_x = cell_width - size.width();
            let slack_y = cell_height - size.height();
            let origin = Point::new(
                cell_origin.x() + slack_x * child.alignment_x().clamp(0.0, 1.0),
                cell_origin.y() + slack_y * child.alignment_y().clamp(0.0, 1.0),
            );
            child.set_bounds(Rect::from_origin_size(origin, size)?)?;
        }
        Ok(())
    }

    fn preferred_size(&self, children: &[DrawableRef]) -> Size {
        if children.is_empty() {
            return Size::default();
        }

        let max_cell = children
            .iter()
            .map(|child| child.preferred_size())
            .reduce(Size::max)
            .unwrap_or_default();

        let rows = self.effective_rows(children.len());
        Size::new(
            self.cols as f32 * max_cell.width() + self.gap * (self.cols - 1) as f32,
            rows as f32 * max_cell.height() + self.gap * (rows - 1) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use float_cmp::assert_approx_eq;

    use vellum_core::draw::Drawable;

    use super::*;
    use crate::test_support::TestBox;

    fn boxes(count: usize, width: f32, height: f32) -> Vec<DrawableRef> {
        (0..count)
            .map(|_| Rc::new(TestBox::new(width, height)) as DrawableRef)
            .collect()
    }

    #[test]
    fn test_grid_places_row_major() {
        let children = boxes(4, 50.0, 50.0);
        let layout = GridLayout::new(2, 2);
        let content = Rect::new(0.0, 0.0, 100.0, 100.0).unwrap();

        layout.arrange(content, &children).unwrap();

        let origins: Vec<(f32, f32)> = children
            .iter()
            .map(|c| (c.bounds().x(), c.bounds().y()))
            .collect();
        assert_eq!(
            origins,
            vec![(0.0, 0.0), (50.0, 0.0), (0.0, 50.0), (50.0, 50.0)]
        );
    }

    #[test]
    fn test_oversized_child_clamped_to_cell() {
        let children = boxes(1, 500.0, 500.0);
        let layout = GridLayout::new(2, 2);
        let content = Rect::new(0.0, 0.0, 100.0, 100.0).unwrap();

        layout.arrange(content, &children).unwrap();

        let bounds = children[0].bounds();
        assert_eq!(bounds.width(), 50.0);
        assert_eq!(bounds.height(), 50.0);
        assert!(content.contains(bounds));
    }

    #[test]
    fn test_small_child_aligned_within_cell() {
        let child: DrawableRef = Rc::new(TestBox::new(10.0, 10.0).with_alignment(1.0, 0.0));
        let layout = GridLayout::new(1, 1);
        let content = Rect::new(0.0, 0.0, 100.0, 100.0).unwrap();

        layout.arrange(content, std::slice::from_ref(&child)).unwrap();

        assert_approx_eq!(f32, child.bounds().x(), 90.0);
        assert_approx_eq!(f32, child.bounds().y(), 0.0);
    }

    #[test]
    fn test_extra_children_grow_rows() {
        let children = boxes(5, 10.0, 10.0);
        let layout = GridLayout::new(1, 2);
        let content = Rect::new(0.0, 0.0, 100.0, 90.0).unwrap();

        layout.arrange(content, &children).unwrap();

        // Five children over two columns need three rows.
        let last = children[4].bounds();
        assert_approx_eq!(f32, last.y(), 70.0);

        let preferred = layout.preferred_size(&children);
        assert_eq!(preferred.width(), 20.0);
        assert_eq!(preferred.height(), 30.0);
    }

    #[test]
    fn test_grid_preferred_size() {
        let children = vec![
            Rc::new(TestBox::new(30.0, 10.0)) as DrawableRef,
            Rc::new(TestBox::new(10.0, 20.0)) as DrawableRef,
        ];
        let layout = GridLayout::new(2, 2).with_gap(4.0);

        let preferred = layout.preferred_size(&children);
        assert_eq!(preferred.width(), 2.0 * 30.0 + 4.0);
        assert_eq!(preferred.height(), 2.0 * 20.0 + 4.0);
    }

    #[test]
    fn test_empty_grid() {
        let layout = GridLayout::new(3, 3);
        let content = Rect::new(0.0, 0.0, 10.0, 10.0).unwrap();
        layout.arrange(content, &[]).unwrap();
        assert!(layout.preferred_size(&[]).is_zero());
    }

    #[test]
    fn test_zero_counts_clamped() {
        let layout = GridLayout::new(0, 0);
        assert_eq!(layout.rows(), 1);
        assert_eq!(layout.cols(), 1);
    }
}
