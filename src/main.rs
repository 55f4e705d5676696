use std::path::PathBuf;

use crate::exec::SystemRunner;
use crate::plan::{GenerationPlan, GraphKind};

pub mod exec;
pub mod pipeline;
pub mod plan;

fn main() -> anyhow::Result<()> {
    let plan = GenerationPlan {
        vertex_counts: vec![10_000_000],
        kinds: GraphKind::ALL.to_vec(),
        output_dir: PathBuf::from("data/graphs"),
    };

    pipeline::run(&plan, &mut SystemRunner)
}
