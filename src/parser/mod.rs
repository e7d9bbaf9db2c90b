mod common;
mod ts_prune;
mod vulture;

pub use common::{to_forward_slashes, PathScope};
pub use ts_prune::{TsPruneParser, TS_PRUNE_LINE};
pub use vulture::{VultureParser, VULTURE_MESSAGE};
