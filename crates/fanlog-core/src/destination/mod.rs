//! Output destinations and their registry

mod dest;
mod registry;
pub(crate) mod rotation;

pub use dest::{Destination, DestinationKind, DestinationProperty};
pub use registry::{DestinationId, DestinationRegistry};
