use std::fmt::Display;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::utils::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssFramework {
    Tailwind,
    BootstrapCdn,
    ReactBootstrap,
    Mui,
    None,
}

impl CssFramework {
    pub const ALL: [Self; 5] = [
        Self::Tailwind,
        Self::BootstrapCdn,
        Self::ReactBootstrap,
        Self::Mui,
        Self::None,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::BootstrapCdn => "bootstrap-cdn",
            Self::ReactBootstrap => "react-bootstrap",
            Self::Mui => "mui",
            Self::None => "none",
        }
    }
}

impl Display for CssFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tailwind => write!(f, "Tailwind"),
            Self::BootstrapCdn => write!(f, "Bootstrap (CDN)"),
            Self::ReactBootstrap => write!(f, "React Bootstrap"),
            Self::Mui => write!(f, "MUI"),
            Self::None => write!(f, "None"),
        }
    }
}

impl FromStr for CssFramework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|framework| framework.id() == s)
            .ok_or_else(|| Error::UnknownChoice {
                kind: "css framework",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Package {
    Axios,
    ReactIcons,
    ReactHookForm,
    Yup,
    Formik,
    Moment,
}

impl Package {
    pub const ALL: [Self; 6] = [
        Self::Axios,
        Self::ReactIcons,
        Self::ReactHookForm,
        Self::Yup,
        Self::Formik,
        Self::Moment,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Axios => "axios",
            Self::ReactIcons => "react-icons",
            Self::ReactHookForm => "react-hook-form",
            Self::Yup => "yup",
            Self::Formik => "formik",
            Self::Moment => "moment",
        }
    }
}

impl Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Axios => write!(f, "Axios"),
            Self::ReactIcons => write!(f, "React Icons"),
            Self::ReactHookForm => write!(f, "React Hook Form"),
            Self::Yup => write!(f, "Yup"),
            Self::Formik => write!(f, "Formik"),
            Self::Moment => write!(f, "Moment.js"),
        }
    }
}

impl FromStr for Package {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|package| package.id() == s)
            .ok_or_else(|| Error::UnknownChoice {
                kind: "package",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSet {
    project_name: String,
    css_framework: CssFramework,
    packages: IndexSet<Package>,
}

impl ChoiceSet {
    pub fn new(
        project_name: impl Into<String>,
        css_framework: CssFramework,
        packages: impl IntoIterator<Item = Package>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            css_framework,
            packages: packages.into_iter().collect(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn css_framework(&self) -> CssFramework {
        self.css_framework
    }

    pub fn packages(&self) -> impl Iterator<Item = Package> + '_ {
        self.packages.iter().copied()
    }

    pub fn has(&self, package: Package) -> bool {
        self.packages.contains(&package)
    }
}
