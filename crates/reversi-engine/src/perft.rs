//! Move-tree node counting from the initial position.
//!
//! Passes do not consume depth; a position where neither side can move
//! counts as one leaf.

use crate::board::Board;
use crate::disc::Player;
use crate::move_list::MoveList;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total node count the search visits from the initial position.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::new(), Player::Black, depth)
}

/// Counts the leaves of the move tree below `board` with `player` to move.
pub fn perft(board: &Board, player: Player, depth: u32) -> u64 {
    let move_list = MoveList::new(board, player);

    if move_list.is_empty() {
        return if board.has_legal_moves(player.opponent()) {
            perft(board, player.opponent(), depth)
        } else {
            1
        };
    }

    if depth <= 1 {
        return move_list.count() as u64;
    }

    move_list
        .iter()
        .map(|m| {
            let next = board.make_move_with_flipped(m.sq, m.flipped, player);
            perft(&next, player.opponent(), depth - 1)
        })
        .sum()
}
