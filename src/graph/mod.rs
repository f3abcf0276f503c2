// Co-occurrence graph — pair counting, the weighted graph, centrality ranking,
// top-N selection and visual weights.

pub mod centrality;
pub mod cooccurrence;
pub mod model;
pub mod subgraph;
pub mod traits;
pub mod visual;
