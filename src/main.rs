use crate::analysis::components::is_connected;
use crate::analysis::cuts::{number_of_cuts, number_of_rcuts, number_of_rforest};
use crate::analysis::partition::{number_of_3partition, number_of_partition};
use crate::analysis::pathmatching::number_of_pathmatching;
use crate::analysis::paths::simple_paths;
use crate::core::ids::NodeId;
use crate::ingest::edgelist::write_edge_list;
use crate::ingest::synthetic::gnp_random_graph;
use rand::Rng;
use std::fs::File;

pub mod analysis;
pub mod core;
pub mod ingest;

fn main() -> anyhow::Result<()> {
    let mut rng = rand::rng();

    for i in 0..3u64 {
        let g = gnp_random_graph(8, 0.2 + i as f64 * 0.2, i + 1);
        let r1 = 0;
        let r2 = (g.node_count() - 1) as NodeId;

        println!("{:?}", g.edges());
        println!(
            "is_connected = {}, # of cuts = {}",
            is_connected(&g),
            number_of_cuts(&g)
        );
        println!("# of rcuts = {}", number_of_rcuts(&g, r1, r2)?);
        println!("# of rforest = {}", number_of_rforest(&g, r1, r2)?);
        println!("# of pathmatching = {}", number_of_pathmatching(&g));
        println!("# of partition = {}", number_of_partition(&g));
        println!("# of 3partition = {}", number_of_3partition(&g));

        let s = rng.random_range(0..g.node_count() as NodeId);
        let mut t = s;
        while t == s {
            t = rng.random_range(0..g.node_count() as NodeId);
        }
        println!(
            "# of {}-{} paths = {}",
            s + 1,
            t + 1,
            simple_paths(&g, s, t).len()
        );

        let file = File::create(format!("random_graph{}.txt", i + 1))?;
        write_edge_list(&g, file)?;
    }

    anyhow::Ok(())
}
