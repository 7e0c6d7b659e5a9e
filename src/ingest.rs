pub mod edgelist;
pub mod synthetic;
