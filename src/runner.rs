use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::report;
use crate::utils::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<String>, cwd: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.as_ref().to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

pub trait Runner {
    fn run(&mut self, invocation: &Invocation) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct Shell;

impl Runner for Shell {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        report::running(invocation);
        debug!(cwd = %invocation.cwd.display(), command = %invocation, "spawning");
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .status()
            .map_err(|source| Error::Spawn {
                command: invocation.to_string(),
                source,
            })?;
        debug!(%status, command = %invocation, "finished");
        if !status.success() {
            return Err(Error::CommandFailed {
                command: invocation.to_string(),
                status,
            });
        }
        Ok(())
    }
}
