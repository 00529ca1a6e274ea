//! Game simulation
//!
//! Actors, pools and the per-frame update. No rendering or platform code:
//! - Variable timestep driven by the frame timer
//! - Seeded RNG only
//! - Stable iteration order (pool index)

pub mod actor;
pub mod bullet;
pub mod enemy;
pub mod player;
pub mod ringbuffer;
pub mod state;
pub mod tick;

pub use actor::{Actor, Behavior, FrameContext};
pub use bullet::Bullet;
pub use enemy::Enemy;
pub use player::Player;
pub use ringbuffer::Ringbuffer;
pub use state::{GameEvent, GameState};
pub use tick::tick;
