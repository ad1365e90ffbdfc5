//! Crate root module declarations for the cell_chess rules engine.
//!
//! Exposes the board model, per-piece move generation, the legality filter,
//! the game controller state machine, the packed wire codec and the remote
//! room bridge so the console binary, benches and host applications share
//! stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod cell;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod coordinates;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod move_rays;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod console {
    pub mod console_top;
}

pub mod controller {
    pub mod game_condition;
    pub mod game_controller;
}

pub mod remote {
    pub mod online_session;
    pub mod room;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_codec;
    pub mod board_diagram;
    pub mod render_game_state;
}
