pub mod positions;
pub mod scheduler;
pub mod tile_set;
pub mod wrap;

pub use positions::{direction_for, initialize_positions};
pub use scheduler::{FrameScheduler, StopToken, TickSource};
pub use tile_set::TileSetBuilder;
pub use wrap::{wrap_axis, WrapEngine};
