//! Game rules for Tic-Hect-4.
//!
//! Pure functions over a [`Board`](super::Board). Rules are separated from
//! the turn state machine so they can be queried by renderers and
//! contracts without touching game state.

pub mod attack;
pub mod draw;
pub mod win;

pub use attack::{EdgePolicy, attack_targets};
pub use draw::{is_draw, is_full};
pub use win::{Region, WIN_THRESHOLD, check_winner, connected_regions, winning_region};
