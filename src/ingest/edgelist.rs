use crate::core::graph::{Graph, GraphBuilder};
use crate::core::ids::NodeId;
use anyhow::{Context, bail};
use std::io::{BufReader, BufWriter};

// edge-list text format: first line is the vertex count, every following
// line is one edge as two space-separated 1-based vertex indices, in the
// graph's native edge order

pub fn write_edge_list<W: std::io::Write>(graph: &Graph, writer: W) -> anyhow::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_writer(BufWriter::new(writer));

    csv_writer.write_record([graph.node_count().to_string()])?;
    for (u, v) in graph.edges() {
        csv_writer.write_record([(u + 1).to_string(), (v + 1).to_string()])?;
    }
    csv_writer.flush()?;

    anyhow::Ok(())
}

pub fn read_edge_list<R: std::io::Read>(reader: R) -> anyhow::Result<Graph> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(reader));

    let mut records = csv_reader.records();
    let header = match records.next() {
        Some(record) => record?,
        None => bail!("edge list is empty, expected a vertex count line"),
    };
    if header.len() != 1 {
        bail!("expected a single vertex count on the first line");
    }
    let node_count = header[0]
        .parse::<usize>()
        .context("vertex count is not a number")?;

    let mut builder = GraphBuilder::new(node_count);
    for (line, maybe_record) in records.enumerate() {
        let record = maybe_record?;
        if record.len() != 2 {
            bail!("edge line {} does not hold exactly two indices", line + 2);
        }
        let u = parse_endpoint(&record[0], node_count, line)?;
        let v = parse_endpoint(&record[1], node_count, line)?;
        if u == v {
            bail!("edge line {} is a self-loop", line + 2);
        }
        builder.add_edge(u, v);
    }

    anyhow::Ok(builder.freeze())
}

fn parse_endpoint(field: &str, node_count: usize, line: usize) -> anyhow::Result<NodeId> {
    let one_based = field
        .parse::<usize>()
        .with_context(|| format!("bad vertex index on edge line {}", line + 2))?;
    if one_based == 0 || one_based > node_count {
        bail!(
            "vertex index {} on edge line {} is out of range 1..={}",
            one_based,
            line + 2,
            node_count
        );
    }
    anyhow::Ok(one_based as NodeId - 1)
}
