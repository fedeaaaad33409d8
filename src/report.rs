use std::fmt::Display;
use std::path::Path;

use console::style;
use tracing::warn;
use walkdir::WalkDir;

use crate::runner::Invocation;
use crate::transform::{Applied, Change};
use crate::utils::{io_error, Result};

pub fn running(invocation: &Invocation) {
    println!();
    println!("{} {}", style("📦 Running:").bold(), invocation);
}

pub fn applied(steps: &[Applied]) {
    println!();
    for step in steps {
        let marker = match step.change {
            Change::Created => style("+").green().bold(),
            Change::Modified => style("~").yellow().bold(),
            Change::Removed => style("-").red().bold(),
        };
        println!("  {}  {}", marker, style(step.path.display()).dim());
    }
}

pub fn complete(project_name: &str, project: &Path) {
    println!();
    println!("{}", style("✅ Setup complete!").green().bold());
    println!();
    for line in listing(project) {
        println!("{line}");
    }
    println!();
    println!("Next steps:");
    println!("  cd {project_name}");
    println!("  npm run dev");
}

fn listing(project: &Path) -> Vec<String> {
    tree(project.join("src")).unwrap_or_else(|err| {
        warn!(error = %err, "failed to list generated sources");
        Vec::new()
    })
}

pub fn failure(err: impl Display) {
    eprintln!("{} {err}", style("✖ error:").red().bold());
}

pub fn tree(root: impl AsRef<Path>) -> Result<Vec<String>> {
    let root = root.as_ref();
    let mut lines = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            let source = err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
            io_error("list", path)(source)
        })?;
        let indent = " ".repeat(entry.depth() * 4);
        lines.push(format!("│ {}{}", indent, entry.file_name().to_string_lossy()));
    }
    Ok(lines)
}
