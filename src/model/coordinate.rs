//! Form coordinates and the control-tag codec.
//!
//! Every interactive control on screen belongs to exactly one form row,
//! identified by a (section, row) pair. When a control region is registered
//! for mouse hit testing it carries a single integer tag; the codec here
//! packs a coordinate into that tag and recovers it when a click fires.

/// Multiplier separating the section component inside an encoded tag.
///
/// The row component occupies `tag % TAG_BASE`, so any section holding
/// `TAG_BASE` rows or more would silently collide with the next section.
/// That is an accepted design limit for a form of this size, not a
/// condition the codec checks for.
pub const TAG_BASE: i32 = 1000;

/// A (section index, row index) pair identifying one form row.
///
/// Constructed when a control region is configured for a row and consumed
/// when an event on that region fires; never persisted beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Zero-based index into [`SectionId::ALL`](crate::model::SectionId::ALL).
    pub section: usize,
    /// Zero-based index into the owning section's row list.
    pub row: usize,
}

impl Coordinate {
    /// Create a coordinate from section and row indices.
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Pack this coordinate into an integer tag.
    ///
    /// The section index is shifted by one so that the all-zero coordinate
    /// still produces a non-zero tag, leaving 0 free as the "unset" sentinel.
    pub fn encode(self) -> i32 {
        (self.section as i32 + 1) * TAG_BASE + self.row as i32
    }

    /// Recover a coordinate from an integer tag.
    ///
    /// Zero and negative tags carry no coordinate and decode to `None`.
    pub fn decode(tag: i32) -> Option<Self> {
        if tag > 0 {
            Some(Self {
                section: (tag / TAG_BASE - 1) as usize,
                row: (tag % TAG_BASE) as usize,
            })
        } else {
            None
        }
    }
}

/// Encode an optional coordinate, mapping `None` to the unset sentinel 0.
pub fn encode_tag(coordinate: Option<Coordinate>) -> i32 {
    coordinate.map_or(0, Coordinate::encode)
}

/// Decode a control tag back to a coordinate, if it carries one.
pub fn decode_tag(tag: i32) -> Option<Coordinate> {
    Coordinate::decode(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_shifts_section_past_sentinel() {
        assert_eq!(Coordinate::new(0, 0).encode(), TAG_BASE);
        assert_eq!(Coordinate::new(1, 4).encode(), 2 * TAG_BASE + 4);
    }

    #[test]
    fn decode_inverts_encode_for_valid_coordinates() {
        for section in 0..4 {
            for row in 0..8 {
                let coordinate = Coordinate::new(section, row);
                assert_eq!(Coordinate::decode(coordinate.encode()), Some(coordinate));
            }
        }
    }

    #[test]
    fn zero_tag_decodes_to_none() {
        assert_eq!(decode_tag(0), None);
    }

    #[test]
    fn negative_tag_decodes_to_none() {
        assert_eq!(decode_tag(-5), None);
    }

    #[test]
    fn none_encodes_to_sentinel_zero() {
        assert_eq!(encode_tag(None), 0);
    }

    #[test]
    fn some_encodes_through_coordinate() {
        let coordinate = Coordinate::new(1, 2);
        assert_eq!(encode_tag(Some(coordinate)), coordinate.encode());
    }
}
