use std::env;

use anyhow::{Context as _, Result};
use tracing::info;

use reactgen::choice::{ChoiceSet, CssFramework, Package};
use reactgen::report;
use reactgen::runner::Shell;
use reactgen::transform;

use crate::prompt;
use crate::App;

impl App {
    pub(crate) fn generate(&self) -> Result<()> {
        let choices = self.collect_choices()?;
        info!(?choices, "collected choices");

        let cwd = env::current_dir().context("failed to locate current directory")?;
        let project = self
            .config
            .materializer()
            .materialize(&mut Shell, &cwd, &choices)
            .context("failed to materialize project")?;

        let applied = transform::run(&project, &choices)
            .context("failed to transform generated files")?;
        report::applied(&applied);

        report::complete(choices.project_name(), &project);
        Ok(())
    }

    fn collect_choices(&self) -> Result<ChoiceSet> {
        let defaults = &self.config.defaults;
        if let Some(name) = &self.cli.name {
            return Ok(ChoiceSet::new(
                name.clone(),
                defaults.css_framework,
                defaults.packages.iter().copied(),
            ));
        }

        let project_name =
            prompt::input("Enter project name").context("failed to read project name")?;
        let css_framework = prompt::select(
            "Choose a CSS framework",
            &CssFramework::ALL,
            Some(defaults.css_framework),
        )
        .context("failed to read css framework")?;
        let packages = prompt::multi_select(
            "Select optional packages",
            &Package::ALL,
            &defaults.packages,
        )
        .context("failed to read optional packages")?;

        Ok(ChoiceSet::new(project_name, css_framework, packages))
    }
}
