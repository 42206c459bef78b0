//! Noughts - a tic-tac-toe session engine.
//!
//! The crate is the turn/state core of a two-player tic-tac-toe game with
//! an optional naive computer opponent. Presentation (rendering, input
//! capture) lives outside: callers submit cell indices and re-render from
//! the [`SessionView`] snapshot returned by every accepted call.
//!
//! # Architecture
//!
//! - **Board**: nine cells, never overwritten once marked
//! - **Rules**: pure win/draw evaluation over a board snapshot
//! - **Game**: the single authoritative move path
//! - **Bot**: win-if-possible, block-if-necessary, else random
//! - **Session**: mode selection, restart, and the auto-playing opponent
//!
//! # Example
//!
//! ```
//! use noughts::{Mode, Session};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), noughts::MoveError> {
//! let mut session = Session::new(Mode::HumanVsHeuristic);
//! let view = session.submit_human_move(4).await?;
//! println!("{}", view.board);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod bot;
mod game;
mod session;
mod types;

pub mod rules;

// Crate-level exports - opponent selector
pub use bot::choose_move;

// Crate-level exports - move engine
pub use game::{Game, MoveError};

// Crate-level exports - session management
pub use session::{Mode, Session, SessionView};

// Crate-level exports - domain types
pub use types::{Board, Cell, GameStatus, Line, Mark};
