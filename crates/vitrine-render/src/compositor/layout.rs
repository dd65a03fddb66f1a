//! Viewport bookkeeping for the compositor, kept free of GPU state so the
//! placement rules are testable on their own.

use vitrine_common::types::{FracRect, Rect, ViewId};

use crate::gpu::RendererError;

/// One registered view's placement within the window.
#[derive(Debug, Clone)]
pub struct ViewSlot {
    pub id: ViewId,
    pub viewport: FracRect,
    /// Spinning views rotate about their viewport center over time.
    pub spin: bool,
}

/// Ordered registry of view placements.
///
/// Views draw in registration order. Every placement is validated on the
/// way in: a rejected rectangle leaves the previous placement untouched.
#[derive(Debug, Default)]
pub struct ViewLayout {
    slots: Vec<ViewSlot>,
}

impl ViewLayout {
    /// Register a view at the given viewport, appended to the draw order.
    pub fn add(&mut self, id: ViewId, viewport: FracRect, spin: bool) -> Result<(), RendererError> {
        if self.slots.iter().any(|s| s.id == id) {
            return Err(RendererError::InvalidViewport(format!(
                "{id} is already registered"
            )));
        }
        self.validate(id, &viewport)?;
        self.slots.push(ViewSlot { id, viewport, spin });
        Ok(())
    }

    /// Move or resize a registered view. The previous viewport is kept when
    /// the new one fails validation.
    pub fn set_viewport(&mut self, id: ViewId, viewport: FracRect) -> Result<(), RendererError> {
        let index = match self.slots.iter().position(|s| s.id == id) {
            Some(i) => i,
            None => return Err(RendererError::ViewNotFound(id)),
        };
        self.validate(id, &viewport)?;
        self.slots[index].viewport = viewport;
        Ok(())
    }

    /// Drop a view from the layout. Returns whether it was registered.
    pub fn remove(&mut self, id: ViewId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.id != id);
        self.slots.len() != before
    }

    pub fn viewport(&self, id: ViewId) -> Option<FracRect> {
        self.slots.iter().find(|s| s.id == id).map(|s| s.viewport)
    }

    /// Slots in draw order (registration order).
    pub fn slots(&self) -> &[ViewSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Map a window position to the view drawn there, along with that
    /// view's pixel rectangle. Viewports never overlap, so at most one
    /// view can claim a position.
    pub fn hit_test(&self, x: f64, y: f64, width: u32, height: u32) -> Option<(ViewId, Rect)> {
        self.slots.iter().find_map(|slot| {
            let rect = slot.viewport.to_pixels(width, height);
            rect.contains(x, y).then_some((slot.id, rect))
        })
    }

    fn validate(&self, id: ViewId, viewport: &FracRect) -> Result<(), RendererError> {
        if !viewport.is_valid() {
            tracing::warn!(%id, ?viewport, "rejecting viewport outside the unit square");
            return Err(RendererError::InvalidViewport(format!(
                "viewport for {id} must lie inside the unit square with positive size"
            )));
        }
        if let Some(other) = self
            .slots
            .iter()
            .find(|s| s.id != id && s.viewport.overlaps(viewport))
        {
            tracing::warn!(%id, ?viewport, other = %other.id, "rejecting overlapping viewport");
            return Err(RendererError::InvalidViewport(format!(
                "viewport for {id} overlaps {}",
                other.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halves() -> ViewLayout {
        let mut layout = ViewLayout::default();
        layout
            .add(ViewId(1), FracRect::new(0.0, 0.0, 0.5, 1.0), false)
            .unwrap();
        layout
            .add(ViewId(2), FracRect::new(0.5, 0.0, 0.5, 1.0), false)
            .unwrap();
        layout
    }

    #[test]
    fn side_by_side_halves_are_accepted() {
        let layout = halves();
        assert_eq!(layout.len(), 2);
    }

    #[test]
    fn viewport_past_the_far_edge_is_rejected() {
        let mut layout = ViewLayout::default();
        let err = layout
            .add(ViewId(1), FracRect::new(0.6, 0.0, 0.5, 1.0), false)
            .unwrap_err();
        assert!(matches!(err, RendererError::InvalidViewport(_)));
        assert!(layout.is_empty());
    }

    #[test]
    fn overlapping_registration_is_rejected() {
        let mut layout = ViewLayout::default();
        layout
            .add(ViewId(1), FracRect::new(0.0, 0.0, 0.6, 1.0), false)
            .unwrap();
        let err = layout
            .add(ViewId(2), FracRect::new(0.5, 0.0, 0.5, 1.0), false)
            .unwrap_err();
        assert!(matches!(err, RendererError::InvalidViewport(_)));
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn shared_edges_are_not_an_overlap() {
        let mut layout = ViewLayout::default();
        layout
            .add(ViewId(1), FracRect::new(0.0, 0.0, 1.0, 0.5), false)
            .unwrap();
        layout
            .add(ViewId(2), FracRect::new(0.0, 0.5, 1.0, 0.5), false)
            .unwrap();
        assert_eq!(layout.len(), 2);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut layout = ViewLayout::default();
        layout
            .add(ViewId(1), FracRect::new(0.0, 0.0, 0.5, 0.5), false)
            .unwrap();
        assert!(layout
            .add(ViewId(1), FracRect::new(0.5, 0.5, 0.5, 0.5), false)
            .is_err());
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn rejected_update_keeps_the_previous_viewport() {
        let mut layout = halves();
        let previous = layout.viewport(ViewId(2)).unwrap();

        // Off the right edge of the window
        assert!(layout
            .set_viewport(ViewId(2), FracRect::new(0.6, 0.0, 0.5, 1.0))
            .is_err());
        assert_eq!(layout.viewport(ViewId(2)), Some(previous));
    }

    #[test]
    fn update_to_an_overlapping_viewport_is_rejected() {
        let mut layout = halves();
        let previous = layout.viewport(ViewId(2)).unwrap();

        assert!(layout
            .set_viewport(ViewId(2), FracRect::new(0.25, 0.0, 0.5, 1.0))
            .is_err());
        assert_eq!(layout.viewport(ViewId(2)), Some(previous));
    }

    #[test]
    fn shrinking_within_bounds_is_accepted() {
        let mut layout = halves();
        layout
            .set_viewport(ViewId(1), FracRect::new(0.0, 0.0, 0.25, 1.0))
            .unwrap();
        assert_eq!(layout.viewport(ViewId(1)).unwrap().width, 0.25);
    }

    #[test]
    fn a_view_may_be_moved_into_space_it_already_occupies() {
        let mut layout = ViewLayout::default();
        layout.add(ViewId(1), FracRect::FULL, false).unwrap();
        // Overlaps only itself, which does not count
        layout
            .set_viewport(ViewId(1), FracRect::new(0.25, 0.25, 0.5, 0.5))
            .unwrap();
    }

    #[test]
    fn update_for_an_unknown_view_fails() {
        let mut layout = ViewLayout::default();
        let err = layout
            .set_viewport(ViewId(9), FracRect::FULL)
            .unwrap_err();
        assert!(matches!(err, RendererError::ViewNotFound(ViewId(9))));
    }

    #[test]
    fn draw_order_follows_registration() {
        let mut layout = ViewLayout::default();
        layout
            .add(ViewId(3), FracRect::new(0.0, 0.0, 0.25, 1.0), false)
            .unwrap();
        layout
            .add(ViewId(1), FracRect::new(0.25, 0.0, 0.25, 1.0), false)
            .unwrap();
        layout
            .add(ViewId(2), FracRect::new(0.5, 0.0, 0.25, 1.0), true)
            .unwrap();

        let order: Vec<ViewId> = layout.slots().iter().map(|s| s.id).collect();
        assert_eq!(order, vec![ViewId(3), ViewId(1), ViewId(2)]);
    }

    #[test]
    fn removal_preserves_the_order_of_the_rest() {
        let mut layout = ViewLayout::default();
        layout
            .add(ViewId(1), FracRect::new(0.0, 0.0, 0.25, 1.0), false)
            .unwrap();
        layout
            .add(ViewId(2), FracRect::new(0.25, 0.0, 0.25, 1.0), false)
            .unwrap();
        layout
            .add(ViewId(3), FracRect::new(0.5, 0.0, 0.25, 1.0), false)
            .unwrap();

        assert!(layout.remove(ViewId(2)));
        assert!(!layout.remove(ViewId(2)));

        let order: Vec<ViewId> = layout.slots().iter().map(|s| s.id).collect();
        assert_eq!(order, vec![ViewId(1), ViewId(3)]);
    }

    #[test]
    fn hit_test_maps_positions_to_views() {
        let layout = halves();

        let (id, rect) = layout.hit_test(100.0, 300.0, 800, 600).unwrap();
        assert_eq!(id, ViewId(1));
        assert_eq!(rect.x, 0.0);

        let (id, rect) = layout.hit_test(500.0, 300.0, 800, 600).unwrap();
        assert_eq!(id, ViewId(2));
        assert_eq!(rect.x, 400.0);
    }

    #[test]
    fn hit_test_misses_uncovered_positions() {
        let mut layout = ViewLayout::default();
        layout
            .add(ViewId(1), FracRect::new(0.0, 0.0, 0.5, 0.5), false)
            .unwrap();
        assert!(layout.hit_test(600.0, 500.0, 800, 600).is_none());
    }
}
