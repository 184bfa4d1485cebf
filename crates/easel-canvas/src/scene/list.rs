use super::Shape;

/// The current drawing.
///
/// An ordered, append-only list of shapes (append order = draw order = paint
/// layering), plus at most one transient preview shape. The preview is drawn
/// on top of everything but is never part of the persisted sequence: undo
/// and clear leave it alone, and it disappears only via
/// [`clear_preview`](Scene::clear_preview).
///
/// Existing shapes are never mutated in place; the sequence changes only by
/// appending, popping the tail, or clearing.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    preview: Option<Shape>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted shapes. The preview does not count.
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The persisted sequence in append order.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Appends a shape. Later shapes draw on top of earlier ones.
    #[inline]
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Appends a whole batch in iteration order.
    #[inline]
    pub fn extend(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }

    /// Removes and returns the most recently appended shape.
    ///
    /// A no-op returning `None` on an empty scene.
    #[inline]
    pub fn pop(&mut self) -> Option<Shape> {
        self.shapes.pop()
    }

    /// Drops every persisted shape. The preview is untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Replaces the transient preview shape.
    #[inline]
    pub fn set_preview(&mut self, shape: Shape) {
        self.preview = Some(shape);
    }

    /// Drops the preview shape, if any.
    #[inline]
    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    #[inline]
    pub fn preview(&self) -> Option<&Shape> {
        self.preview.as_ref()
    }

    /// Iterates every drawable shape in paint order: the persisted sequence
    /// in append order, then the preview (always on top).
    pub fn iter_in_paint_order(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().chain(self.preview.as_ref())
    }
}
