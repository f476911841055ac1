mod lazy_graph;
mod neighbour_generator;
mod state_hasher;

pub use lazy_graph::LazyGraph;
pub use neighbour_generator::NeighbourGenerator;
pub use state_hasher::{FnHasher, SerdeHasher, StateHash, StateHasher};
