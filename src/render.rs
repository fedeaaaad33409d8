//! Templates use `[[ ... ]]` and `[% ... %]` delimiters so that JSX object
//! literals (`style={{ ... }}`) pass through untouched.

use minijinja::syntax::SyntaxConfig;
use minijinja::{context, AutoEscape, Environment};

use crate::framework::WelcomeStyle;
use crate::utils::Result;

pub const API_BASE_URL: &str = "http://localhost:5000";
pub const API_TIMEOUT_MS: u32 = 10000;

const ENTRY_POINT: &str = "main.jsx";
const WELCOME_INLINE: &str = "App.inline.jsx";
const WELCOME_UTILITY: &str = "App.utility.jsx";
const API_CLIENT: &str = "axiosInstance.js";

fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_syntax(
        SyntaxConfig::builder()
            .block_delimiters("[%", "%]")
            .variable_delimiters("[[", "]]")
            .comment_delimiters("[#", "#]")
            .build()?,
    );
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.add_template(ENTRY_POINT, include_str!("templates/main.jsx"))?;
    env.add_template(WELCOME_INLINE, include_str!("templates/App.inline.jsx"))?;
    env.add_template(WELCOME_UTILITY, include_str!("templates/App.utility.jsx"))?;
    env.add_template(API_CLIENT, include_str!("templates/axiosInstance.js"))?;
    Ok(env)
}

pub fn welcome(style: WelcomeStyle, project_name: &str) -> Result<String> {
    let name = match style {
        WelcomeStyle::Inline => WELCOME_INLINE,
        WelcomeStyle::Utility => WELCOME_UTILITY,
    };
    let env = environment()?;
    Ok(env
        .get_template(name)?
        .render(context! { project_name => project_name })?)
}

pub fn entry_point(stylesheet_import: Option<&str>, typescript: bool) -> Result<String> {
    let env = environment()?;
    Ok(env.get_template(ENTRY_POINT)?.render(context! {
        stylesheet_import => stylesheet_import,
        typescript => typescript,
    })?)
}

pub fn api_client() -> Result<String> {
    let env = environment()?;
    Ok(env.get_template(API_CLIENT)?.render(context! {
        base_url => API_BASE_URL,
        timeout => API_TIMEOUT_MS,
    })?)
}
