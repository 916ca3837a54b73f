//! Mouse hit testing for form controls.
//!
//! During rendering every interactive row registers its screen rect
//! together with its coordinate, stored as an encoded tag. A mouse click
//! is resolved by scanning the registered areas and decoding the tag of
//! the first hit. The registry is cleared and rebuilt on every frame, so
//! areas never outlive the layout that produced them.

use crate::model::{decode_tag, encode_tag, Coordinate};
use ratatui::layout::{Position, Rect};

/// One clickable region and the tag of the row it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HitArea {
    rect: Rect,
    tag: i32,
}

/// Registry of clickable regions for the current frame.
#[derive(Debug, Clone, Default)]
pub struct HitRegistry {
    areas: Vec<HitArea>,
}

impl HitRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all registered areas; called at the start of each frame.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a clickable region for a row.
    pub fn register(&mut self, rect: Rect, coordinate: Coordinate) {
        self.areas.push(HitArea {
            rect,
            tag: encode_tag(Some(coordinate)),
        });
    }

    /// Resolve a click position to the coordinate of the row under it.
    ///
    /// Later registrations win on overlap, matching paint order. A tag
    /// that decodes to nothing (the unset sentinel) is skipped.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Coordinate> {
        let position = Position::new(column, row);
        self.areas
            .iter()
            .rev()
            .find(|area| area.rect.contains(position))
            .and_then(|area| decode_tag(area.tag))
    }

    /// Number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether no areas are registered.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    #[test]
    fn hit_inside_registered_rect_decodes_coordinate() {
        let mut registry = HitRegistry::new();
        registry.register(rect(0, 2, 40, 1), Coordinate::new(0, 1));
        assert_eq!(registry.hit_test(5, 2), Some(Coordinate::new(0, 1)));
    }

    #[test]
    fn miss_outside_all_rects_is_none() {
        let mut registry = HitRegistry::new();
        registry.register(rect(0, 2, 40, 1), Coordinate::new(0, 1));
        assert_eq!(registry.hit_test(5, 3), None);
        assert_eq!(registry.hit_test(41, 2), None);
    }

    #[test]
    fn later_registration_wins_on_overlap() {
        let mut registry = HitRegistry::new();
        registry.register(rect(0, 0, 40, 10), Coordinate::new(0, 0));
        registry.register(rect(0, 4, 40, 2), Coordinate::new(1, 2));
        assert_eq!(registry.hit_test(10, 5), Some(Coordinate::new(1, 2)));
        assert_eq!(registry.hit_test(10, 1), Some(Coordinate::new(0, 0)));
    }

    #[test]
    fn clear_empties_the_registry() {
        let mut registry = HitRegistry::new();
        registry.register(rect(0, 0, 10, 1), Coordinate::new(0, 0));
        assert_eq!(registry.len(), 1);
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.hit_test(0, 0), None);
    }

    #[test]
    fn tags_round_trip_through_the_registry() {
        let mut registry = HitRegistry::new();
        for (index, coordinate) in crate::state::all_coordinates().iter().enumerate() {
            registry.register(rect(0, index as u16, 20, 1), *coordinate);
        }
        for (index, coordinate) in crate::state::all_coordinates().iter().enumerate() {
            assert_eq!(registry.hit_test(3, index as u16), Some(*coordinate));
        }
    }
}
