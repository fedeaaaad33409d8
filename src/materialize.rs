use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use tracing::info;

use crate::choice::ChoiceSet;
use crate::runner::{Invocation, Runner};
use crate::utils::Result;

pub const TEMPLATE: &str = "react";
pub const ROUTER: &str = "react-router-dom";

pub fn dependency_list(choices: &ChoiceSet) -> IndexSet<&'static str> {
    install_batches(choices).into_iter().flatten().collect()
}

pub fn install_batches(choices: &ChoiceSet) -> Vec<Vec<&'static str>> {
    let mut batches = Vec::new();
    let framework = choices.css_framework().profile().dependencies;
    if !framework.is_empty() {
        batches.push(framework.to_vec());
    }
    let mut common = vec![ROUTER];
    common.extend(choices.packages().map(|package| package.id()));
    batches.push(common);
    batches
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materializer {
    pub package_manager: String,
    pub generator: String,
}

impl Default for Materializer {
    fn default() -> Self {
        Self {
            package_manager: String::from("npm"),
            generator: String::from("vite@latest"),
        }
    }
}

impl Materializer {
    pub fn project_path(cwd: &Path, choices: &ChoiceSet) -> PathBuf {
        cwd.join(choices.project_name())
    }

    pub fn invocations(&self, cwd: &Path, choices: &ChoiceSet) -> Vec<Invocation> {
        let project = Self::project_path(cwd, choices);
        let create = Invocation::new(&self.package_manager, cwd)
            .arg("create")
            .arg(&self.generator)
            .arg(choices.project_name())
            .args(["--", "--template", TEMPLATE]);
        let installs = install_batches(choices).into_iter().map(|batch| {
            Invocation::new(&self.package_manager, &project)
                .arg("install")
                .args(batch)
        });
        std::iter::once(create).chain(installs).collect()
    }

    pub fn materialize(
        &self,
        runner: &mut impl Runner,
        cwd: &Path,
        choices: &ChoiceSet,
    ) -> Result<PathBuf> {
        let project = Self::project_path(cwd, choices);
        info!(
            project = %project.display(),
            generator = %self.generator,
            package_manager = %self.package_manager,
            "materializing project"
        );
        for invocation in self.invocations(cwd, choices) {
            runner.run(&invocation)?;
        }
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::{CssFramework, Package};

    #[test]
    fn dependency_list_starts_with_framework_packages() {
        let choices = ChoiceSet::new(
            "demo",
            CssFramework::Mui,
            [Package::Axios, Package::Moment],
        );
        assert_eq!(
            dependency_list(&choices).into_iter().collect::<Vec<_>>(),
            [
                "@mui/material",
                "@emotion/react",
                "@emotion/styled",
                ROUTER,
                "axios",
                "moment"
            ]
        );
    }

    #[test]
    fn router_is_installed_without_optional_packages() {
        let choices = ChoiceSet::new("demo", CssFramework::BootstrapCdn, []);
        assert_eq!(install_batches(&choices), [vec![ROUTER]]);
    }

    #[test]
    fn generator_runs_in_cwd_and_installs_in_project() {
        let choices = ChoiceSet::new("demo", CssFramework::Tailwind, []);
        let invocations = Materializer::default().invocations(Path::new("/work"), &choices);

        assert_eq!(invocations.len(), 3);
        assert_eq!(
            invocations[0].to_string(),
            "npm create vite@latest demo -- --template react"
        );
        assert_eq!(invocations[0].cwd, Path::new("/work"));
        assert_eq!(
            invocations[1].to_string(),
            "npm install tailwindcss @tailwindcss/vite"
        );
        assert_eq!(invocations[2].to_string(), "npm install react-router-dom");
        assert!(invocations[1..]
            .iter()
            .all(|invocation| invocation.cwd == Path::new("/work/demo")));
    }
}
