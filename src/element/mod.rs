//! Determined elements, their kinds and the connections they expose

/// Element kinds and per-kind weights
pub mod category;
/// Connection groups used to derive the paths graph
pub mod connection;
/// Concrete determined elements and their neighbour outcomes
pub mod kinds;

pub use category::{CategoryWeights, ElementCategory};
pub use connection::{Connection, ConnectionGroup, ConnectionKind, VertexKind};
pub use kinds::{EdgeRole, Element, TeleporterDirection};
