use std::fmt::Display;
use std::path::{Path, PathBuf};

use regex::{NoExpand, Regex};

use crate::utils::{self, Result};

#[derive(Debug, Clone)]
pub enum EditOp {
    Overwrite(String),
    /// Replaces the first match only.
    RegexReplace { pattern: Regex, replacement: String },
    /// Left out when the file already has an identical line.
    PrependLine(String),
    RemoveMatchingLines(Regex),
}

impl EditOp {
    pub fn apply(&self, input: &str) -> String {
        match self {
            Self::Overwrite(contents) => contents.clone(),
            Self::RegexReplace {
                pattern,
                replacement,
            } => pattern
                .replacen(input, 1, NoExpand(replacement))
                .into_owned(),
            Self::PrependLine(line) => {
                if input.lines().any(|existing| existing.trim() == line.trim()) {
                    input.to_string()
                } else {
                    format!("{line}\n{input}")
                }
            }
            Self::RemoveMatchingLines(pattern) => input
                .split_inclusive('\n')
                .filter(|line| !pattern.is_match(line.trim_end_matches(['\r', '\n'])))
                .collect(),
        }
    }

    fn reads_input(&self) -> bool {
        !matches!(self, Self::Overwrite(_))
    }
}

impl Display for EditOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overwrite(_) => write!(f, "overwrite"),
            Self::RegexReplace { pattern, .. } => write!(f, "replace `{}`", pattern.as_str()),
            Self::PrependLine(line) => write!(f, "prepend `{line}`"),
            Self::RemoveMatchingLines(pattern) => {
                write!(f, "remove lines matching `{}`", pattern.as_str())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileEdit {
    pub path: PathBuf,
    pub op: EditOp,
}

impl FileEdit {
    pub fn new(path: impl Into<PathBuf>, op: EditOp) -> Self {
        Self {
            path: path.into(),
            op,
        }
    }

    pub fn apply(&self, project: &Path) -> Result<()> {
        let path = project.join(&self.path);
        let output = if self.op.reads_input() {
            self.op.apply(&utils::read(&path)?)
        } else {
            self.op.apply("")
        };
        utils::write_atomic(&path, &output)
    }
}
