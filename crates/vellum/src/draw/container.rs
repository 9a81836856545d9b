//! A drawable that owns an ordered collection of child drawables.

use std::cell::{Cell, RefCell};

use log::{trace, warn};

use vellum_core::{
    color::Color,
    draw::{Drawable, DrawableRef, DrawingContext, StrokeDefinition},
    error::DrawError,
    geometry::{Insets, Rect, Size},
};

use crate::layout::Layout;

/// A drawable composed of ordered children, an optional [`Layout`], and
/// [`Insets`].
///
/// Insertion order is layout order and paint order (back to front).
/// Assigning bounds runs the layout pass immediately when a layout is
/// present: the content area is the bounds shrunk by the insets, and the
/// layout partitions it among the children.
///
/// Structural mutation while one of the container's own layout or render
/// passes is running is rejected with [`DrawError::ConcurrentMutation`].
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use vellum::draw::{Drawable, DrawableContainer, Label};
/// use vellum::layout::{Orientation, StackedLayout};
/// use vellum_core::geometry::{Insets, Rect};
///
/// let container = DrawableContainer::with_layout(
///     Box::new(StackedLayout::new(Orientation::Vertical)),
/// );
/// container.add(Rc::new(Label::new("first"))).unwrap();
/// container.add(Rc::new(Label::new("second"))).unwrap();
/// container.set_bounds(Rect::new(0.0, 0.0, 200.0, 100.0).unwrap()).unwrap();
/// ```
pub struct DrawableContainer {
    bounds: Cell<Rect>,
    // True once a caller has assigned bounds; layout is deferred until then.
    bounds_assigned: Cell<bool>,
    insets: Cell<Insets>,
    layout: RefCell<Option<Box<dyn Layout>>>,
    children: RefCell<Vec<DrawableRef>>,
    background: Cell<Option<Color>>,
    border: RefCell<Option<StrokeDefinition>>,
    alignment_x: Cell<f32>,
    alignment_y: Cell<f32>,
    // True while a layout or render pass of this container is running.
    in_pass: Cell<bool>,
}

/// Marks a layout/render pass as active for its lifetime.
struct PassGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> PassGuard<'a> {
    fn begin(flag: &'a Cell<bool>) -> Result<Self, DrawError> {
        if flag.replace(true) {
            return Err(DrawError::ConcurrentMutation);
        }
        Ok(Self { flag })
    }
}

impl Drop for PassGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl DrawableContainer {
    /// Creates an empty container without a layout. Children keep whatever
    /// bounds the caller assigns them directly.
    pub fn new() -> Self {
        Self {
            bounds: Cell::new(Rect::default()),
            bounds_assigned: Cell::new(false),
            insets: Cell::new(Insets::default()),
            layout: RefCell::new(None),
            children: RefCell::new(Vec::new()),
            background: Cell::new(None),
            border: RefCell::new(None),
            alignment_x: Cell::new(0.5),
            alignment_y: Cell::new(0.5),
            in_pass: Cell::new(false),
        }
    }

    /// Creates an empty container managed by the given layout.
    pub fn with_layout(layout: Box<dyn Layout>) -> Self {
        let container = Self::new();
        *container.layout.borrow_mut() = Some(layout);
        container
    }

    /// Appends a child. Paint and layout order follow insertion order.
    ///
    /// A child must not be shared between two containers; reparenting is
    /// remove-then-add.
    pub fn add(&self, child: DrawableRef) -> Result<(), DrawError> {
        if self.in_pass.get() {
            return Err(DrawError::ConcurrentMutation);
        }
        self.children.borrow_mut().push(child);
        Ok(())
    }

    /// Removes a child by handle identity. Returns whether it was present.
    pub fn remove(&self, child: &DrawableRef) -> Result<bool, DrawError> {
        if self.in_pass.get() {
            return Err(DrawError::ConcurrentMutation);
        }
        let mut children = self.children.borrow_mut();
        let before = children.len();
        children.retain(|existing| !DrawableRef::ptr_eq(existing, child));
        Ok(children.len() < before)
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    /// Returns true if the container has no children.
    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }

    /// Returns the current insets.
    pub fn insets(&self) -> Insets {
        self.insets.get()
    }

    /// Replaces the insets and re-runs the layout pass against the current
    /// bounds.
    pub fn set_insets(&self, insets: Insets) -> Result<(), DrawError> {
        if self.in_pass.get() {
            return Err(DrawError::ConcurrentMutation);
        }
        self.insets.set(insets);
        self.layout_children()
    }

    /// Replaces the layout policy and re-runs the layout pass.
    pub fn set_layout(&self, layout: Option<Box<dyn Layout>>) -> Result<(), DrawError> {
        if self.in_pass.get() {
            return Err(DrawError::ConcurrentMutation);
        }
        *self.layout.borrow_mut() = layout;
        self.layout_children()
    }

    /// Sets the background fill painted behind the children.
    pub fn set_background(&self, color: Option<Color>) {
        self.background.set(color);
    }

    /// Sets the border stroked around the container bounds, on top of the
    /// children.
    pub fn set_border(&self, stroke: Option<StrokeDefinition>) {
        *self.border.borrow_mut() = stroke;
    }

    /// Sets the horizontal alignment hint, clamped to `[0, 1]`.
    pub fn set_alignment_x(&self, alignment: f32) {
        self.alignment_x.set(alignment.clamp(0.0, 1.0));
    }

    /// Sets the vertical alignment hint, clamped to `[0, 1]`.
    pub fn set_alignment_y(&self, alignment: f32) {
        self.alignment_y.set(alignment.clamp(0.0, 1.0));
    }

    /// Runs the layout pass against the current bounds.
    ///
    /// Called automatically by [`set_bounds`](Drawable::set_bounds); exposed
    /// for callers that change child content without changing bounds.
    pub fn layout_children(&self) -> Result<(), DrawError> {
        let layout = self.layout.borrow();
        let Some(layout) = layout.as_ref() else {
            return Ok(());
        };

        // Changing insets or layout before any bounds were assigned must not
        // fail the shrink check; the pass runs once bounds arrive. Explicitly
        // assigned bounds, even zero-sized ones, are always checked.
        if !self.bounds_assigned.get() {
            return Ok(());
        }

        let bounds = self.bounds.get();
        let guard = PassGuard::begin(&self.in_pass)?;
        let content_area = bounds.shrink(self.insets.get())?;
        let children = self.children.borrow().clone();
        trace!(children_len = children.len(); "Arranging container children");
        layout.arrange(content_area, &children)?;
        drop(guard);
        Ok(())
    }
}

impl Default for DrawableContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for DrawableContainer {
    fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), DrawError> {
        self.bounds.set(bounds);
        self.bounds_assigned.set(true);
        self.layout_children()
    }

    fn preferred_size(&self) -> Size {
        let insets = self.insets.get();
        // A container reachable from its own children would otherwise recurse
        // without bound. Measurement cannot fail, so the inner occurrence
        // reports its insets-only size and the cycle is logged.
        let Ok(_guard) = PassGuard::begin(&self.in_pass) else {
            warn!("Containment cycle detected while measuring; reporting insets-only size");
            return Size::default().add_padding(insets);
        };
        let children = self.children.borrow();

        let layout = self.layout.borrow();
        let content_size = match layout.as_ref() {
            Some(layout) => layout.preferred_size(&children),
            // Without a layout the children are positioned by the caller;
            // the preferred extent is the union of their assigned bounds.
            None => children
                .iter()
                .map(|child| child.bounds())
                .reduce(|acc, bounds| acc.union(bounds))
                .map(Rect::size)
                .unwrap_or_default(),
        };
        content_size.add_padding(insets)
    }

    fn alignment_x(&self) -> f32 {
        self.alignment_x.get()
    }

    fn alignment_y(&self) -> f32 {
        self.alignment_y.get()
    }

    fn draw(&self, context: &mut DrawingContext) -> Result<(), DrawError> {
        let guard = PassGuard::begin(&self.in_pass)?;
        let bounds = self.bounds.get();

        if let Some(background) = self.background.get() {
            context.fill_rect(bounds, background);
        }

        let children = self.children.borrow().clone();
        for child in &children {
            child.draw(context)?;
        }

        if let Some(border) = self.border.borrow().as_ref() {
            context.stroke_rect(bounds, border.clone());
        }

        drop(guard);
        Ok(())
    }
}
