use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    BinaryTree,
    Path,
    RecursiveTree,
    Star,
}

impl GraphKind {
    pub const ALL: [GraphKind; 4] = [
        GraphKind::BinaryTree,
        GraphKind::Path,
        GraphKind::RecursiveTree,
        GraphKind::Star,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GraphKind::BinaryTree => "binary_tree",
            GraphKind::Path => "path",
            GraphKind::RecursiveTree => "recursive_tree",
            GraphKind::Star => "star",
        }
    }

    pub fn generator_binary(self, bin_dir: &Path) -> PathBuf {
        bin_dir.join(format!("generate_{}_graph", self.name()))
    }

    pub fn output_file(self, output_dir: &Path, vertex_count: u64) -> PathBuf {
        output_dir.join(format!("{}_{}", self.name(), vertex_count))
    }
}

pub struct GenerationPlan {
    pub vertex_counts: Vec<u64>,
    pub kinds: Vec<GraphKind>,
    pub output_dir: PathBuf,
}
