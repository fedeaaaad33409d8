use crate::choice::CssFramework;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildPlugin {
    pub import: &'static str,
    pub call: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeStyle {
    Inline,
    Utility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub dependencies: &'static [&'static str],
    pub build_plugin: Option<BuildPlugin>,
    pub stylesheet: Option<&'static str>,
    pub head: Option<&'static str>,
    pub strip_stylesheet_imports: bool,
    /// First line of the entry point, both while patching and after the
    /// entry point is rewritten.
    pub stylesheet_import: Option<&'static str>,
    pub keeps_root_stylesheet: bool,
    pub welcome: WelcomeStyle,
}

const BOOTSTRAP_CDN_HEAD: &str = concat!(
    "    <link href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css\" ",
    "rel=\"stylesheet\" ",
    "integrity=\"sha384-QWTKZyjpPEjISv5WaRU9OFeRpok6YctnYmDr5pNlyT2bRjXh0JMhjY6hW+ALEwIH\" ",
    "crossorigin=\"anonymous\">\n",
    "    <script src=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js\" ",
    "integrity=\"sha384-YvpcrYf0tY3lHB60NNkmXc5s9fDVZLESaAA55NDzOxhy9GkcIdslK1eN7N6jIeHz\" ",
    "crossorigin=\"anonymous\"></script>",
);

const TAILWIND: Profile = Profile {
    dependencies: &["tailwindcss", "@tailwindcss/vite"],
    build_plugin: Some(BuildPlugin {
        import: "import tailwindcss from '@tailwindcss/vite'",
        call: "tailwindcss()",
    }),
    stylesheet: Some("@import \"tailwindcss\";\n"),
    head: None,
    strip_stylesheet_imports: true,
    stylesheet_import: Some("import './index.css';"),
    keeps_root_stylesheet: true,
    welcome: WelcomeStyle::Utility,
};

const BOOTSTRAP_CDN: Profile = Profile {
    dependencies: &[],
    build_plugin: None,
    stylesheet: None,
    head: Some(BOOTSTRAP_CDN_HEAD),
    strip_stylesheet_imports: false,
    stylesheet_import: None,
    keeps_root_stylesheet: false,
    welcome: WelcomeStyle::Inline,
};

const REACT_BOOTSTRAP: Profile = Profile {
    dependencies: &["react-bootstrap", "bootstrap"],
    build_plugin: None,
    stylesheet: None,
    head: None,
    strip_stylesheet_imports: true,
    stylesheet_import: Some("import 'bootstrap/dist/css/bootstrap.min.css';"),
    keeps_root_stylesheet: false,
    welcome: WelcomeStyle::Inline,
};

const MUI: Profile = Profile {
    dependencies: &["@mui/material", "@emotion/react", "@emotion/styled"],
    build_plugin: None,
    stylesheet: None,
    head: None,
    strip_stylesheet_imports: true,
    stylesheet_import: None,
    keeps_root_stylesheet: false,
    welcome: WelcomeStyle::Inline,
};

const PLAIN: Profile = Profile {
    dependencies: &[],
    build_plugin: None,
    stylesheet: None,
    head: None,
    strip_stylesheet_imports: false,
    stylesheet_import: None,
    keeps_root_stylesheet: false,
    welcome: WelcomeStyle::Inline,
};

impl CssFramework {
    pub fn profile(self) -> &'static Profile {
        match self {
            Self::Tailwind => &TAILWIND,
            Self::BootstrapCdn => &BOOTSTRAP_CDN,
            Self::ReactBootstrap => &REACT_BOOTSTRAP,
            Self::Mui => &MUI,
            Self::None => &PLAIN,
        }
    }
}
