//! Backtracking board layout solver.
//!
//! Tiles a crate's interior width with catalog boards, widest first.
//! Exact catalog tilings are preferred; when none exists the layout
//! closes with a single rip-cut board, which is never allowed below the
//! 2" manufacturing floor.

use cratewright_lumber::{Board, MIN_NARROW_WIDTH, STANDARD_BOARDS, WIDTH_EPSILON};

use crate::error::{LayoutError, Result};

/// Tile `total_width` inches with floorboards.
///
/// Boards come back in placement order, numbered 0..n-1 from the left
/// edge, and their widths sum to `total_width`. The search is
/// deterministic: identical inputs produce identical layouts.
///
/// A non-positive width yields an empty layout. When every
/// decomposition strands a remainder below 2", the requested width is
/// unsatisfiable and an error citing it is returned.
pub fn solve(total_width: f64) -> Result<Vec<Board>> {
    if total_width <= 0.0 {
        return Ok(Vec::new());
    }

    let mut boards = Vec::new();

    // First pass: catalog boards only. An exact tiling beats any layout
    // that needs a rip cut, so the custom closeout is not offered until
    // the whole catalog-only tree has been exhausted.
    if fit(total_width, false, &mut boards) {
        return Ok(boards);
    }
    if fit(total_width, true, &mut boards) {
        return Ok(boards);
    }

    Err(LayoutError::UnusableRemainder(total_width))
}

/// Depth-first search over catalog widths, widest first.
///
/// Places boards into `boards`, backtracking on dead ends; on failure
/// the vec is left as it was found. With `allow_custom` set, a branch
/// whose remainder fits no catalog board closes with one rip-cut board,
/// provided the remainder is at least [`MIN_NARROW_WIDTH`].
fn fit(remaining: f64, allow_custom: bool, boards: &mut Vec<Board>) -> bool {
    if remaining.abs() <= WIDTH_EPSILON {
        return true;
    }

    for &(nominal, width) in STANDARD_BOARDS.iter() {
        if width <= remaining + WIDTH_EPSILON {
            boards.push(Board::standard(nominal, width, boards.len()));
            if fit(remaining - width, allow_custom, boards) {
                return true;
            }
            boards.pop();
        }
    }

    if allow_custom && remaining >= MIN_NARROW_WIDTH {
        boards.push(Board::custom(remaining, boards.len()));
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cratewright_lumber::NominalSize;

    fn total_width(boards: &[Board]) -> f64 {
        boards.iter().map(|b| b.width).sum()
    }

    #[test]
    fn test_two_2x6_for_eleven_inches() {
        let boards = solve(11.0).unwrap();
        assert_eq!(boards.len(), 2);
        for board in &boards {
            assert_eq!(board.width, 5.5);
            assert_eq!(board.nominal, NominalSize::TwoBySix);
            assert!(!board.is_narrow);
        }
    }

    #[test]
    fn test_largest_board_first() {
        let boards = solve(14.75).unwrap();
        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].nominal, NominalSize::TwoByTwelve);
        assert_eq!(boards[0].width, 11.25);
        assert_eq!(boards[1].nominal, NominalSize::TwoByFour);
        assert_eq!(boards[1].width, 3.5);
    }

    #[test]
    fn test_single_board_exact_fit() {
        let boards = solve(11.25).unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].nominal, NominalSize::TwoByTwelve);
    }

    #[test]
    fn test_narrow_closeout_board() {
        let boards = solve(13.5).unwrap();
        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].width, 11.25);
        assert_eq!(boards[1].width, 2.25);
        assert!(boards[1].is_narrow);
        assert_eq!(boards[1].nominal, NominalSize::CustomNarrow);
    }

    #[test]
    fn test_unsatisfiable_width() {
        let err = solve(1.5).unwrap_err();
        assert_eq!(err, LayoutError::UnusableRemainder(1.5));
        let message = err.to_string();
        assert!(message.contains("1.5"));
        assert!(message.contains("minimum 2"));
    }

    #[test]
    fn test_zero_and_negative_widths() {
        assert!(solve(0.0).unwrap().is_empty());
        assert!(solve(-5.0).unwrap().is_empty());
    }

    #[test]
    fn test_minimum_narrow_board() {
        let boards = solve(2.0).unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].width, 2.0);
        assert!(boards[0].is_narrow);
    }

    #[test]
    fn test_custom_board_just_above_threshold() {
        let boards = solve(2.51).unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].width, 2.51);
        assert!(!boards[0].is_narrow);
        assert_eq!(boards[0].nominal, NominalSize::Custom);
    }

    #[test]
    fn test_three_2x12() {
        let boards = solve(33.75).unwrap();
        assert_eq!(boards.len(), 3);
        for board in &boards {
            assert_eq!(board.nominal, NominalSize::TwoByTwelve);
        }
    }

    #[test]
    fn test_positions_in_placement_order() {
        let boards = solve(22.0).unwrap();
        for (index, board) in boards.iter().enumerate() {
            assert_eq!(board.position, index);
        }
        assert_relative_eq!(total_width(&boards), 22.0, epsilon = 1e-6);
    }

    #[test]
    fn test_width_sum_invariant() {
        for width in [11.0, 13.5, 14.75, 16.0, 22.0, 48.0, 100.0] {
            let boards = solve(width).unwrap();
            assert_relative_eq!(total_width(&boards), width, epsilon = 1e-6);
            for board in &boards {
                assert!(board.width >= MIN_NARROW_WIDTH);
                assert_eq!(board.is_narrow, board.width < 2.5);
            }
        }
    }

    #[test]
    fn test_at_most_one_custom_board() {
        for width in [13.5, 16.0, 27.4, 48.6, 100.0] {
            let boards = solve(width).unwrap();
            let customs = boards
                .iter()
                .filter(|b| b.nominal.actual_width().is_none())
                .count();
            assert!(customs <= 1, "width {width} produced {customs} rip cuts");
        }
    }

    #[test]
    fn test_deterministic_output() {
        let first = solve(37.25).unwrap();
        for _ in 0..10 {
            assert_eq!(solve(37.25).unwrap(), first);
        }
    }

    #[test]
    fn test_backtracks_past_unusable_remainder() {
        // Greedy 11.25 leaves 1.65, below the narrow floor; the solver
        // must retreat to 9.25 and close with a 3.65 rip cut.
        let boards = solve(12.9).unwrap();
        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].width, 9.25);
        assert_relative_eq!(boards[1].width, 3.65, epsilon = 1e-6);
        assert_eq!(boards[1].nominal, NominalSize::Custom);
    }
}
