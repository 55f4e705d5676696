use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::exec::{CommandRunner, Invocation};
use crate::plan::GenerationPlan;

/// Resolves the repository root, builds the generator binaries, then invokes
/// one generator per (vertex count, kind) pair. The first failing step aborts
/// the whole run; graphs written by earlier invocations stay on disk.
pub fn run(plan: &GenerationPlan, runner: &mut impl CommandRunner) -> anyhow::Result<()> {
    let root = repo_root(runner)?;
    build(runner)?;
    generate(plan, &root.join("bin"), runner)
}

fn repo_root(runner: &mut impl CommandRunner) -> anyhow::Result<PathBuf> {
    let stdout = runner
        .capture(&Invocation::new("git").arg("rev-parse").arg("--show-toplevel"))
        .context("could not resolve the repository root")?;
    Ok(PathBuf::from(stdout.trim_end_matches('\n')))
}

fn build(runner: &mut impl CommandRunner) -> anyhow::Result<()> {
    runner
        .run(&Invocation::new("make"))
        .context("building the generator binaries failed")
}

fn generate(
    plan: &GenerationPlan,
    bin_dir: &Path,
    runner: &mut impl CommandRunner,
) -> anyhow::Result<()> {
    for &n in &plan.vertex_counts {
        for &kind in &plan.kinds {
            let binary = kind.generator_binary(bin_dir);
            let output = kind.output_file(&plan.output_dir, n);
            println!("{} {}", binary.display(), output.display());
            let invocation = Invocation::new(binary)
                .arg(n.to_string())
                .arg(output.display().to_string());
            runner
                .run(&invocation)
                .with_context(|| format!("generating {} graph with {} vertices", kind.name(), n))?;
            println!("generated {} {}", kind.name(), n);
        }
    }
    Ok(())
}
