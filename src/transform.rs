use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use indexmap::map::Entry;
use indexmap::IndexMap;
use regex::Regex;
use tracing::{debug, info};

use crate::choice::{ChoiceSet, Package};
use crate::edit::{EditOp, FileEdit};
use crate::render;
use crate::utils::{self, io_error, Result};

pub const ROOT_STYLESHEET: &str = "src/index.css";
pub const COMPONENT_STYLESHEET: &str = "src/App.css";
pub const DOCUMENT: &str = "index.html";
pub const API_CLIENT: &str = "src/utils/axiosInstance.js";
pub const STANDARD_DIRS: [&str; 6] = ["components", "pages", "hooks", "store", "utils", "assets"];

pub fn stylesheet_imports() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^\s*import\s+['"]\./(index|App)\.css['"];?\s*$"#).unwrap()
    })
}

fn plugins_list() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"plugins:\s*\[").unwrap())
}

fn head_tag() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<head>").unwrap())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub build_config: PathBuf,
    pub entry_point: PathBuf,
    pub root_component: PathBuf,
}

impl Layout {
    pub fn resolve(project: &Path) -> Self {
        Self {
            build_config: first_existing(project, ["vite.config.js", "vite.config.ts"]),
            entry_point: first_existing(project, ["src/main.jsx", "src/main.tsx"]),
            root_component: first_existing(project, ["src/App.jsx", "src/App.tsx"]),
        }
    }
}

fn first_existing(project: &Path, [preferred, fallback]: [&str; 2]) -> PathBuf {
    if project.join(preferred).exists() {
        PathBuf::from(preferred)
    } else {
        PathBuf::from(fallback)
    }
}

#[derive(Debug, Clone)]
pub enum Step {
    Edit(FileEdit),
    /// Missing files are skipped.
    Remove(PathBuf),
    CreateDir(PathBuf),
}

impl Step {
    fn edit(path: impl Into<PathBuf>, op: EditOp) -> Self {
        Self::Edit(FileEdit::new(path, op))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Edit(edit) => &edit.path,
            Self::Remove(path) | Self::CreateDir(path) => path,
        }
    }

    fn apply(&self, project: &Path) -> Result<Option<Change>> {
        let path = project.join(self.path());
        match self {
            Self::Edit(edit) => {
                let existed = path.exists();
                edit.apply(project)?;
                Ok(Some(if existed {
                    Change::Modified
                } else {
                    Change::Created
                }))
            }
            Self::Remove(_) => Ok(utils::remove_if_exists(&path)?.then_some(Change::Removed)),
            Self::CreateDir(_) => {
                if path.is_dir() {
                    return Ok(None);
                }
                fs::create_dir_all(&path).map_err(io_error("create directory", &path))?;
                Ok(Some(Change::Created))
            }
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Edit(edit) => write!(f, "{} {}", edit.op, edit.path.display()),
            Self::Remove(path) => write!(f, "remove {}", path.display()),
            Self::CreateDir(path) => write!(f, "create directory {}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Created,
    Modified,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub change: Change,
    pub path: PathBuf,
}

pub fn plan(choices: &ChoiceSet, layout: &Layout) -> Result<Vec<Step>> {
    let profile = choices.css_framework().profile();
    let mut steps = Vec::new();

    if let Some(plugin) = profile.build_plugin {
        steps.push(Step::edit(
            &layout.build_config,
            EditOp::PrependLine(plugin.import.to_string()),
        ));
        steps.push(Step::edit(
            &layout.build_config,
            EditOp::RegexReplace {
                pattern: plugins_list().clone(),
                replacement: format!("plugins: [\n    {},", plugin.call),
            },
        ));
    }
    if let Some(stylesheet) = profile.stylesheet {
        steps.push(Step::edit(
            ROOT_STYLESHEET,
            EditOp::Overwrite(stylesheet.to_string()),
        ));
    }
    if let Some(head) = profile.head {
        steps.push(Step::edit(
            DOCUMENT,
            EditOp::RegexReplace {
                pattern: head_tag().clone(),
                replacement: format!("<head>\n{head}"),
            },
        ));
    }
    if profile.strip_stylesheet_imports {
        steps.push(Step::edit(
            &layout.entry_point,
            EditOp::RemoveMatchingLines(stylesheet_imports().clone()),
        ));
    }
    if let Some(import) = profile.stylesheet_import {
        steps.push(Step::edit(
            &layout.entry_point,
            EditOp::PrependLine(import.to_string()),
        ));
    }

    steps.push(Step::Remove(PathBuf::from(COMPONENT_STYLESHEET)));
    if !profile.keeps_root_stylesheet {
        steps.push(Step::Remove(PathBuf::from(ROOT_STYLESHEET)));
    }
    steps.push(Step::edit(
        &layout.root_component,
        EditOp::Overwrite(render::welcome(profile.welcome, choices.project_name())?),
    ));
    for dir in STANDARD_DIRS {
        steps.push(Step::CreateDir(Path::new("src").join(dir)));
    }
    if choices.has(Package::Axios) {
        steps.push(Step::edit(API_CLIENT, EditOp::Overwrite(render::api_client()?)));
    }
    let typescript = layout
        .entry_point
        .extension()
        .is_some_and(|extension| extension == "tsx");
    steps.push(Step::edit(
        &layout.entry_point,
        EditOp::Overwrite(render::entry_point(profile.stylesheet_import, typescript)?),
    ));

    Ok(steps)
}

pub fn apply(project: &Path, steps: &[Step]) -> Result<Vec<Applied>> {
    let mut changes: IndexMap<PathBuf, Change> = IndexMap::new();
    for step in steps {
        debug!(%step, "applying");
        let Some(change) = step.apply(project)? else {
            continue;
        };
        match changes.entry(step.path().to_path_buf()) {
            Entry::Occupied(mut entry) => {
                if change == Change::Removed {
                    entry.insert(change);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(change);
            }
        }
    }
    Ok(changes
        .into_iter()
        .map(|(path, change)| Applied { change, path })
        .collect())
}

pub fn run(project: &Path, choices: &ChoiceSet) -> Result<Vec<Applied>> {
    let layout = Layout::resolve(project);
    info!(
        project = %project.display(),
        framework = choices.css_framework().id(),
        entry_point = %layout.entry_point.display(),
        "transforming generated files"
    );
    let steps = plan(choices, &layout)?;
    apply(project, &steps)
}
