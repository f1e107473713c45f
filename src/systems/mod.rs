pub mod collision;
pub mod input;
pub mod movement;
pub mod players;
pub mod respawn;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use players::*;
pub use respawn::*;
