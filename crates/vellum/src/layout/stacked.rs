//! Stacks children along one axis in insertion order.

use vellum_core::{
    draw::DrawableRef,
    error::DrawError,
    geometry::{Rect, Size},
};

use crate::layout::{Layout, Orientation};

/// Lays out children in a single row or column.
///
/// Along the stacking axis each child receives its preferred extent; across
/// the axis it receives the content extent, or its preferred extent when
/// that is smaller, positioned by its alignment hint. Stacked content may
/// overflow the content area; it is not clipped. Callers wanting a tight
/// fit query the container's preferred size before assigning bounds.
#[derive(Debug, Clone)]
pub struct StackedLayout {
    orientation: Orientation,
    gap: f32,
}

impl StackedLayout {
    /// Creates a stacked layout along the given orientation with no gap.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            gap: 0.0,
        }
    }

    /// Sets the gap inserted between successive children (builder style).
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    /// Returns the stacking orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the gap between successive children.
    pub fn gap(&self) -> f32 {
        self.gap
    }

    fn total_gap(&self, children_len: usize) -> f32 {
        self.gap * children_len.saturating_sub(1) as f32
    }
}

impl Layout for StackedLayout {
    fn arrange(&self, content_area: Rect, children: &[DrawableRef]) -> Result<(), DrawError> {
        match self.orientation {
            Orientation::Vertical => {
                let mut y = content_area.y();
                for child in children {
                    let preferred = child.preferred_size();
                    let width = preferred.width().min(content_area.width());
                    let slack = content_area.width() - width;
                    let x = content_area.x() + slack * child.alignment_x().clamp(0.0, 1.0);
                    child.set_bounds(Rect::new(x, y, width, preferred.height())?)?;
                    y += preferred.height() + self.gap;
                }
            }
            Orientation::Horizontal => {
                let mut x = content_area.x();
                for child in children {
                    let preferred = child.preferred_size();
                    let height = preferred.height().min(content_area.height());
                    let slack = content_area.height() - height;
                    let y = content_area.y() + slack * child.alignment_y().clamp(0.0, 1.0);
                    child.set_bounds(Rect::new(x, y, preferred.width(), height)?)?;
                    x += preferred.width() + self.gap;
                }
            }
        }
        Ok(())
    }

    fn preferred_size(&self, children: &[DrawableRef]) -> Size {
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        match self.orientation {
            Orientation::Vertical => {
                for child in children {
                    let preferred = child.preferred_size();
                    width = width.max(preferred.width());
                    height += preferred.height();
                }
                height += self.total_gap(children.len());
            }
            Orientation::Horizontal => {
                for child in children {
                    let preferred = child.preferred_size();
                    width += preferred.width();
                    height = height.max(preferred.height());
                }
                width += self.total_gap(children.len());
            }
        }
        Size::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use vellum_core::draw::Drawable;

    use super::*;
    use crate::test_support::TestBox;

    fn boxes(sizes: &[(f32, f32)]) -> Vec<DrawableRef> {
        sizes
            .iter()
            .map(|&(w, h)| Rc::new(TestBox::new(w, h)) as DrawableRef)
            .collect()
    }

    #[test]
    fn test_vertical_stacking_offsets() {
        let children = boxes(&[(10.0, 10.0), (10.0, 20.0), (10.0, 30.0)]);
        let layout = StackedLayout::new(Orientation::Vertical);
        let content = Rect::new(0.0, 0.0, 100.0, 100.0).unwrap();

        layout.arrange(content, &children).unwrap();

        let ys: Vec<f32> = children.iter().map(|c| c.bounds().y()).collect();
        assert_eq!(ys, vec![0.0, 10.0, 30.0]);

        let preferred = layout.preferred_size(&children);
        assert_eq!(preferred.height(), 60.0);
        assert_eq!(preferred.width(), 10.0);
    }

    #[test]
    fn test_vertical_child_width_capped_at_content() {
        let children = boxes(&[(500.0, 10.0)]);
        let layout = StackedLayout::new(Orientation::Vertical);
        let content = Rect::new(0.0, 0.0, 100.0, 100.0).unwrap();

        layout.arrange(content, &children).unwrap();
        assert_eq!(children[0].bounds().width(), 100.0);
    }

    #[test]
    fn test_vertical_alignment_positions_narrow_child() {
        let left: DrawableRef = Rc::new(TestBox::new(20.0, 10.0).with_alignment(0.0, 0.5));
        let center: DrawableRef = Rc::new(TestBox::new(20.0, 10.0).with_alignment(0.5, 0.5));
        let right: DrawableRef = Rc::new(TestBox::new(20.0, 10.0).with_alignment(1.0, 0.5));
        let children = vec![left, center, right];

        let layout = StackedLayout::new(Orientation::Vertical);
        let content = Rect::new(0.0, 0.0, 100.0, 100.0).unwrap();
        layout.arrange(content, &children).unwrap();

        assert_approx_eq!(f32, children[0].bounds().x(), 0.0);
        assert_approx_eq!(f32, children[1].bounds().x(), 40.0);
        assert_approx_eq!(f32, children[2].bounds().x(), 80.0);
    }

    #[test]
    fn test_horizontal_stacking_transposed() {
        let children = boxes(&[(10.0, 10.0), (20.0, 10.0), (30.0, 10.0)]);
        let layout = StackedLayout::new(Orientation::Horizontal);
        let content = Rect::new(0.0, 0.0, 100.0, 50.0).unwrap();

        layout.arrange(content, &children).unwrap();

        let xs: Vec<f32> = children.iter().map(|c| c.bounds().x()).collect();
        assert_eq!(xs, vec![0.0, 10.0, 30.0]);

        let preferred = layout.preferred_size(&children);
        assert_eq!(preferred.width(), 60.0);
        assert_eq!(preferred.height(), 10.0);
    }

    #[test]
    fn test_gap_spreads_children() {
        let children = boxes(&[(10.0, 10.0), (10.0, 10.0), (10.0, 10.0)]);
        let layout = StackedLayout::new(Orientation::Vertical).with_gap(5.0);
        let content = Rect::new(0.0, 0.0, 100.0, 100.0).unwrap();

        layout.arrange(content, &children).unwrap();
        let ys: Vec<f32> = children.iter().map(|c| c.bounds().y()).collect();
        assert_eq!(ys, vec![0.0, 15.0, 30.0]);

        assert_eq!(layout.preferred_size(&children).height(), 40.0);
    }

    #[test]
    fn test_overflow_is_permitted() {
        // Content shorter than the stack: children still get their full
        // preferred heights, extending past the content area.
        let children = boxes(&[(10.0, 40.0), (10.0, 40.0)]);
        let layout = StackedLayout::new(Orientation::Vertical);
        let content = Rect::new(0.0, 0.0, 100.0, 50.0).unwrap();

        layout.arrange(content, &children).unwrap();
        assert_eq!(children[1].bounds().bottom(), 80.0);
    }

    #[test]
    fn test_empty_children() {
        let layout = StackedLayout::new(Orientation::Vertical).with_gap(7.0);
        let content = Rect::new(0.0, 0.0, 10.0, 10.0).unwrap();
        layout.arrange(content, &[]).unwrap();
        assert!(layout.preferred_size(&[]).is_zero());
    }

    proptest! {
        #[test]
        fn prop_vertical_preferred_height_is_sum(
            heights in proptest::collection::vec(0.0f32..100.0, 0..8)
        ) {
            let children: Vec<DrawableRef> = heights
                .iter()
                .map(|&h| Rc::new(TestBox::new(10.0, h)) as DrawableRef)
                .collect();
            let layout = StackedLayout::new(Orientation::Vertical);
            let expected: f32 = heights.iter().sum();
            let preferred = layout.preferred_size(&children);
            prop_assert!((preferred.height() - expected).abs() < 1e-3);
        }
    }
}
