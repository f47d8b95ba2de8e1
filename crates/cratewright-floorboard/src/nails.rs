//! Nail pattern derivation for floorboard fastening.
//!
//! A board is nailed to every skid it crosses. Row count follows board
//! width, except over wide skid faces where three rows are always
//! driven; rows are held back from the board edges to avoid splitting.

use cratewright_lumber::MIN_EDGE_DISTANCE;
use serde::{Deserialize, Serialize};

/// Skid faces at least this wide take three nail rows regardless of
/// board width.
const WIDE_SKID_FACE: f64 = 8.0;

/// Boards at least this wide take a second nail row.
const DOUBLE_ROW_WIDTH: f64 = 5.5;

/// Boards at least this wide take a third nail row.
const TRIPLE_ROW_WIDTH: f64 = 9.25;

/// Fastening pattern for one floorboard across the skid run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NailPattern {
    /// Nail rows along the board, 1 to 3.
    pub rows: u32,
    /// Nails driven at each board/skid intersection, equal to `rows`.
    pub nails_per_skid: u32,
    /// Nails for this board across all skids.
    pub total_nails: u32,
    /// Row spacing in inches; the centerline offset for a single row.
    pub spacing: f64,
    /// Hold-back from each board edge to the outer rows, in inches.
    pub edge_distance: f64,
}

/// Derive the nail pattern for a board `board_width` inches wide,
/// fastened to `skid_count` skids whose faces are `skid_face_width`
/// inches across.
///
/// Total over all inputs: a zero skid count simply yields zero total
/// nails.
pub fn nail_pattern(board_width: f64, skid_face_width: f64, skid_count: usize) -> NailPattern {
    let rows: u32 = if skid_face_width >= WIDE_SKID_FACE {
        3
    } else if board_width < DOUBLE_ROW_WIDTH {
        1
    } else if board_width < TRIPLE_ROW_WIDTH {
        2
    } else {
        3
    };

    let spacing = if rows == 1 {
        board_width / 2.0
    } else {
        (board_width - 2.0 * MIN_EDGE_DISTANCE) / (rows - 1) as f64
    };

    NailPattern {
        rows,
        nails_per_skid: rows,
        total_nails: rows * skid_count as u32,
        spacing,
        edge_distance: MIN_EDGE_DISTANCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_row_pattern() {
        let pattern = nail_pattern(7.0, 4.0, 3);
        assert_eq!(pattern.rows, 2);
        assert_eq!(pattern.nails_per_skid, 2);
        assert_eq!(pattern.total_nails, 6);
        assert_relative_eq!(pattern.spacing, 5.5);
        assert_relative_eq!(pattern.edge_distance, 0.75);
    }

    #[test]
    fn test_single_row_centers_on_board() {
        let pattern = nail_pattern(3.5, 4.0, 2);
        assert_eq!(pattern.rows, 1);
        assert_eq!(pattern.total_nails, 2);
        assert_relative_eq!(pattern.spacing, 1.75);
    }

    #[test]
    fn test_row_count_boundaries() {
        assert_eq!(nail_pattern(5.499, 4.0, 1).rows, 1);
        assert_eq!(nail_pattern(5.5, 4.0, 1).rows, 2);
        assert_eq!(nail_pattern(9.249, 4.0, 1).rows, 2);
        assert_eq!(nail_pattern(9.25, 4.0, 1).rows, 3);
        assert_eq!(nail_pattern(11.25, 4.0, 1).rows, 3);
    }

    #[test]
    fn test_wide_skid_face_forces_three_rows() {
        for board_width in [2.0, 3.5, 5.5, 9.25, 11.25] {
            assert_eq!(nail_pattern(board_width, 8.0, 2).rows, 3);
        }
        // Just under the wide-face threshold the width rules apply again.
        assert_eq!(nail_pattern(3.5, 7.999, 2).rows, 1);
    }

    #[test]
    fn test_zero_skids() {
        let pattern = nail_pattern(5.5, 4.0, 0);
        assert_eq!(pattern.rows, 2);
        assert_eq!(pattern.total_nails, 0);
    }

    #[test]
    fn test_nail_count_invariant() {
        for skid_count in 0..6 {
            for board_width in [2.25, 3.5, 5.5, 7.25, 9.25, 11.25] {
                let pattern = nail_pattern(board_width, 6.0, skid_count);
                assert_eq!(pattern.total_nails, pattern.rows * skid_count as u32);
            }
        }
    }

    #[test]
    fn test_three_row_spacing() {
        // 11.25" board: rows sit 0.75 from each edge, 9.75 between them.
        let pattern = nail_pattern(11.25, 4.0, 1);
        assert_eq!(pattern.rows, 3);
        assert_relative_eq!(pattern.spacing, 4.875);
    }
}
