//! Shared ray walk used by every non-pawn generator.
//!
//! A ray is an ordered list of offsets from the piece's cell. The walk stops
//! at the board edge, stops before a friendly piece and stops on (including)
//! an enemy piece. Stepping pieces use rays of length one.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::coordinates::{Coordinate, Offset};
use crate::moves::move_descriptions::MoveCandidate;

/// Longest slide on an 8x8 board.
pub const SLIDE_LENGTH: usize = 7;

/// Build a sliding ray `(d_file, d_rank) * 1..=7`.
pub const fn slide_ray(d_file: i8, d_rank: i8) -> [Offset; SLIDE_LENGTH] {
    let mut ray = [Offset::new(0, 0); SLIDE_LENGTH];
    let mut step = 0usize;

    while step < SLIDE_LENGTH {
        let distance = (step + 1) as i8;
        ray[step] = Offset::new(d_file * distance, d_rank * distance);
        step += 1;
    }

    ray
}

/// Wrap single offsets into length-one rays.
pub const fn step_rays<const N: usize>(steps: [Offset; N]) -> [[Offset; 1]; N] {
    let mut rays = [[Offset::new(0, 0); 1]; N];
    let mut idx = 0usize;

    while idx < N {
        rays[idx] = [steps[idx]];
        idx += 1;
    }

    rays
}

/// Cells reachable along one ray for a piece of `color`.
pub fn walk_ray(board: &Board, from: Coordinate, color: Color, ray: &[Offset]) -> Vec<Coordinate> {
    let mut reachable = Vec::with_capacity(ray.len());

    for offset in ray {
        // Off board: the ray ends here.
        let Some(cell) = board.cell_at_offset(from, *offset) else {
            break;
        };

        match cell.occupant() {
            None => reachable.push(cell.coordinate()),
            Some(piece) if piece.color == color => break,
            Some(_) => {
                reachable.push(cell.coordinate());
                break;
            }
        }
    }

    reachable
}

/// Append plain candidates for every ray in `rays`.
pub fn push_ray_moves<R: AsRef<[Offset]>>(
    board: &Board,
    from: Coordinate,
    color: Color,
    rays: &[R],
    out: &mut Vec<MoveCandidate>,
) {
    for ray in rays {
        out.extend(
            walk_ray(board, from, color, ray.as_ref())
                .into_iter()
                .map(|to| MoveCandidate::new(from, to)),
        );
    }
}
