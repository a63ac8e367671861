//! Cube/face addressing onto the flat pixel buffer.
//!
//! A lamp is a row of cubes, each owning [`FACES_PER_CUBE`] consecutive buffer
//! slots. Four of those slots are individually addressable side faces; the
//! remaining two form the center column and are only reachable through
//! whole-cube fills.

use core::fmt;

use crate::frame::MAX_LED_COUNT;

/// Buffer slots owned by one cube.
pub const FACES_PER_CUBE: usize = 6;

/// Individually addressable side faces per cube.
pub const SIDES_PER_CUBE: usize = 4;

/// Buffer offsets of the four side faces within a cube's slot range.
pub const SIDE_OFFSETS: [usize; SIDES_PER_CUBE] = [1, 2, 3, 5];

/// Validated cube arrangement; the single source of pixel-index math.
///
/// Construction enforces the bounds, so every index this type hands out is in
/// range for a [`crate::Frame`] built from the same layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeLayout {
    cube_count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// A lamp needs at least one cube.
    Empty,
    /// The pixel buffer cannot hold this many cubes.
    TooManyCubes { cube_count: usize, max: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cube count must be at least 1"),
            Self::TooManyCubes { cube_count, max } => {
                write!(f, "{cube_count} cubes requested, at most {max} fit the pixel buffer")
            }
        }
    }
}

impl core::error::Error for LayoutError {}

impl CubeLayout {
    pub const MAX_CUBE_COUNT: usize = MAX_LED_COUNT / FACES_PER_CUBE;

    pub const fn new(cube_count: usize) -> Result<Self, LayoutError> {
        if cube_count == 0 {
            return Err(LayoutError::Empty);
        }
        if cube_count > Self::MAX_CUBE_COUNT {
            return Err(LayoutError::TooManyCubes {
                cube_count,
                max: Self::MAX_CUBE_COUNT,
            });
        }
        Ok(Self { cube_count })
    }

    pub const fn cube_count(&self) -> usize {
        self.cube_count
    }

    /// Total pixel count of the lamp.
    pub const fn led_count(&self) -> usize {
        self.cube_count * FACES_PER_CUBE
    }

    /// First buffer slot of `cube`. Panics on an out-of-range cube index.
    pub const fn cube_base(&self, cube: usize) -> usize {
        assert!(cube < self.cube_count);
        cube * FACES_PER_CUBE
    }

    /// Absolute buffer index of one side face.
    ///
    /// Panics on an out-of-range cube or side index; callers hold the bounds.
    pub const fn side_index(&self, cube: usize, side: usize) -> usize {
        assert!(side < SIDES_PER_CUBE);
        self.cube_base(cube) + SIDE_OFFSETS[side]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn rejects_zero_cubes() {
        assert_eq!(CubeLayout::new(0), Err(LayoutError::Empty));
    }

    #[test]
    fn rejects_layouts_past_the_buffer_cap() {
        let over = CubeLayout::MAX_CUBE_COUNT + 1;
        assert_eq!(
            CubeLayout::new(over),
            Err(LayoutError::TooManyCubes {
                cube_count: over,
                max: CubeLayout::MAX_CUBE_COUNT,
            })
        );
        assert!(CubeLayout::new(CubeLayout::MAX_CUBE_COUNT).is_ok());
    }

    #[test]
    fn led_count_is_cubes_times_faces() {
        let layout = CubeLayout::new(4).unwrap();
        assert_eq!(layout.led_count(), 24);
    }

    #[rstest]
    #[case(0, 0, 1)]
    #[case(0, 1, 2)]
    #[case(0, 2, 3)]
    #[case(0, 3, 5)]
    #[case(2, 0, 13)]
    #[case(3, 3, 23)]
    fn side_index_follows_the_offset_table(
        #[case] cube: usize,
        #[case] side: usize,
        #[case] expected: usize,
    ) {
        let layout = CubeLayout::new(4).unwrap();
        assert_eq!(layout.side_index(cube, side), expected);
    }

    #[test]
    fn side_indices_stay_inside_their_cube_and_are_distinct() {
        let layout = CubeLayout::new(5).unwrap();
        for cube in 0..layout.cube_count() {
            let base = layout.cube_base(cube);
            let mut seen = std::vec::Vec::new();
            for side in 0..SIDES_PER_CUBE {
                let idx = layout.side_index(cube, side);
                assert!(idx >= base && idx < base + FACES_PER_CUBE);
                assert!(!seen.contains(&idx));
                seen.push(idx);
            }
        }
    }

    #[test]
    #[should_panic(expected = "side < SIDES_PER_CUBE")]
    fn out_of_range_side_is_a_programmer_error() {
        let layout = CubeLayout::new(1).unwrap();
        let _ = layout.side_index(0, 4);
    }

    #[test]
    #[should_panic(expected = "cube < self.cube_count")]
    fn out_of_range_cube_is_a_programmer_error() {
        let layout = CubeLayout::new(2).unwrap();
        let _ = layout.cube_base(2);
    }
}
