pub mod components;
pub mod cuts;
pub mod partition;
pub mod pathmatching;
pub mod paths;
pub mod subsets;
