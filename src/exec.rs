use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: vec![],
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

pub trait CommandRunner {
    /// Spawns the program with inherited stdio, waits, succeeds on exit 0.
    fn run(&mut self, invocation: &Invocation) -> anyhow::Result<()>;

    /// Like `run`, but returns the child's stdout; stderr stays inherited.
    fn capture(&mut self, invocation: &Invocation) -> anyhow::Result<String>;
}

pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> anyhow::Result<()> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .with_context(|| format!("failed to start {}", invocation.program.display()))?;
        if !status.success() {
            bail!("{} exited with {}", invocation.program.display(), status);
        }
        Ok(())
    }

    fn capture(&mut self, invocation: &Invocation) -> anyhow::Result<String> {
        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| format!("failed to start {}", invocation.program.display()))?;
        if !output.status.success() {
            bail!("{} exited with {}", invocation.program.display(), output.status);
        }
        String::from_utf8(output.stdout).with_context(|| {
            format!("{} wrote non-utf8 output", invocation.program.display())
        })
    }
}
