pub mod adjacency_file;
pub mod contraction;
pub mod edge;
pub mod karger;
pub mod multigraph;

pub use adjacency_file::{load_adjacency_file, parse_adjacency_list};
pub use contraction::Contraction;
pub use edge::{Edge, EdgeKind};
pub use karger::{
    karger_min_cut, minimum_cut, minimum_cut_with_rng, recommended_iterations, run_trial,
    KargerConfig, MinCut,
};
pub use multigraph::{EdgeId, Graph, Vertex, VertexId};
