//! Online game session.
//!
//! Binds one `GameController` to a remote room through an injected
//! `RoomTransport`. Local clicks are forwarded only on the local player's
//! turn; once a local move hands the turn to the opponent the encoded board
//! is submitted. Remote updates replace the local state through the
//! controller's snapshot synchronization.

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::controller::game_controller::{GameController, LocalPlayer};
use crate::errors::SyncError;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::coordinates::Coordinate;
use crate::game_state::game_state::GameState;
use crate::remote::room::{MoveRequest, RemoteRoom};
use crate::utils::board_codec::compress_board;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Calls into the room service. Retries and delivery of update events
/// belong to the implementor.
pub trait RoomTransport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn fetch_room(&mut self, room_uid: &str) -> Result<RemoteRoom, Self::Error>;

    /// Finished rooms move to an archive; used when `fetch_room` fails.
    fn fetch_archived_room(&mut self, room_uid: &str) -> Result<RemoteRoom, Self::Error>;

    fn submit_move(&mut self, request: &MoveRequest) -> Result<(), Self::Error>;

    fn give_up(&mut self, room_uid: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("room transport failed: {0}")]
    Transport(#[source] BoxError),

    #[error(transparent)]
    Sync(#[from] SyncError),
}

impl SessionError {
    fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SessionError::Transport(Box::new(err))
    }
}

pub struct OnlineSession<T: RoomTransport> {
    transport: T,
    controller: GameController,
    room_uid: String,
    local: LocalPlayer,
}

impl<T: RoomTransport> OnlineSession<T> {
    /// Join `room` as the user `user_uid` and apply its current snapshot.
    pub fn start(transport: T, room: &RemoteRoom, user_uid: &str) -> Result<Self, SessionError> {
        let local = LocalPlayer::new(user_uid, room.players.color_of(user_uid));
        info!(room = %room.uid, color = ?local.color, "joining room");

        let mut session = Self {
            transport,
            controller: GameController::new(),
            room_uid: room.uid.clone(),
            local,
        };
        session.apply_room(room)?;
        Ok(session)
    }

    #[inline]
    pub fn state(&self) -> Arc<GameState> {
        self.controller.state()
    }

    #[inline]
    pub fn local_player(&self) -> &LocalPlayer {
        &self.local
    }

    pub fn subscribe(&mut self) -> Receiver<Arc<GameState>> {
        self.controller.subscribe()
    }

    /// Forward a click while it is the local player's turn.
    pub fn on_cell_click(&mut self, coordinate: Coordinate) -> Result<bool, SessionError> {
        if self.state().turn != self.local.color {
            return Ok(false);
        }
        let accepted = self.controller.on_cell_click(coordinate);
        if accepted {
            self.submit_if_turn_passed()?;
        }
        Ok(accepted)
    }

    pub fn on_promotion_selected(
        &mut self,
        cell: Coordinate,
        kind: PieceKind,
    ) -> Result<bool, SessionError> {
        let accepted = self.controller.on_promotion_selected(cell, kind);
        if accepted {
            self.submit_if_turn_passed()?;
        }
        Ok(accepted)
    }

    /// Fetch the room after an update event and adopt its state.
    pub fn on_remote_update(&mut self) -> Result<(), SessionError> {
        let room = match self.transport.fetch_room(&self.room_uid) {
            Ok(room) => room,
            Err(err) => {
                debug!(error = %err, "live room unavailable, trying the archive");
                self.transport
                    .fetch_archived_room(&self.room_uid)
                    .map_err(SessionError::transport)?
            }
        };
        self.apply_room(&room)
    }

    pub fn give_up(&mut self) -> Result<(), SessionError> {
        info!(room = %self.room_uid, "giving up");
        self.transport
            .give_up(&self.room_uid)
            .map_err(SessionError::transport)
    }

    /// True once the game reached Mate or Stalemate.
    pub fn is_finished(&self) -> bool {
        self.state().condition.is_terminal()
    }

    fn apply_room(&mut self, room: &RemoteRoom) -> Result<(), SessionError> {
        let remote = &room.game_state;
        if remote.winner.is_some() {
            info!(room = %room.uid, winner = ?remote.winner, "room reports a winner");
        }
        self.controller
            .apply_compressed_snapshot(&remote.board, &remote.turn, &self.local, remote.moves_count)?;
        Ok(())
    }

    fn submit_if_turn_passed(&mut self) -> Result<(), SessionError> {
        let state = self.state();
        if state.turn == self.local.color || state.move_count == 0 {
            return Ok(());
        }

        let request = MoveRequest {
            room_uid: self.room_uid.clone(),
            board: compress_board(&state.board),
        };
        debug!(room = %self.room_uid, move_count = state.move_count, "submitting move");
        self.transport
            .submit_move(&request)
            .map_err(SessionError::transport)
    }
}
