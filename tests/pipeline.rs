mod common;

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use reactgen::choice::{ChoiceSet, CssFramework, Package};
use reactgen::edit::EditOp;
use reactgen::transform::{self, Change, API_CLIENT, STANDARD_DIRS};

fn generated_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    common::copy_fixture(dir.path());
    dir
}

fn read(project: &Path, path: &str) -> String {
    fs::read_to_string(project.join(path)).unwrap()
}

#[test]
fn tailwind_demo_project() {
    let dir = generated_project();
    let project = dir.path();
    let choices = ChoiceSet::new("demo", CssFramework::Tailwind, []);

    transform::run(project, &choices).unwrap();

    assert!(read(project, "src/App.jsx").contains("demo"));
    assert_eq!(read(project, "src/index.css"), "@import \"tailwindcss\";\n");
    for dir in STANDARD_DIRS {
        assert!(project.join("src").join(dir).is_dir(), "{dir}");
    }

    let config = read(project, "vite.config.js");
    assert!(config.starts_with("import tailwindcss from '@tailwindcss/vite'\n"));
    assert!(config.contains("plugins: [\n    tailwindcss(),react()],"));

    let entry = read(project, "src/main.jsx");
    assert!(entry.starts_with("import './index.css';\n"));
    assert_eq!(entry.matches("import './index.css'").count(), 1);
    assert!(!project.join("src/App.css").exists());
}

#[test]
fn every_framework_gets_one_router_and_no_leftover_stylesheets() {
    for framework in CssFramework::ALL {
        let dir = generated_project();
        let project = dir.path();

        transform::run(project, &ChoiceSet::new("demo", framework, [])).unwrap();

        let entry = read(project, "src/main.jsx");
        assert_eq!(entry.matches("<BrowserRouter>").count(), 1, "{framework}");
        assert_eq!(
            entry.matches("<Route path=\"/*\" element={<App />} />").count(),
            1,
            "{framework}"
        );

        let component = project.join("src/App.css").exists();
        let root = project.join("src/index.css").exists();
        assert!(!(component && root), "{framework}");
        assert!(!component, "{framework}");
        assert_eq!(root, framework == CssFramework::Tailwind, "{framework}");
    }
}

#[test]
fn bootstrap_cdn_links_stylesheet_in_head() {
    let dir = generated_project();
    let project = dir.path();

    transform::run(project, &ChoiceSet::new("demo", CssFramework::BootstrapCdn, [])).unwrap();

    let html = read(project, "index.html");
    assert!(html.contains("<head>\n    <link href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3"));
    assert_eq!(html.matches("bootstrap.bundle.min.js").count(), 1);
    assert!(read(project, "src/main.jsx").starts_with("import React from 'react';\n"));
    assert!(read(project, "src/App.jsx").contains("style={{"));
    assert_eq!(read(project, "vite.config.js"), read(&common::fixture(), "vite.config.js"));
}

#[test]
fn react_bootstrap_imports_bundled_stylesheet() {
    let dir = generated_project();
    let project = dir.path();

    transform::run(project, &ChoiceSet::new("demo", CssFramework::ReactBootstrap, [])).unwrap();

    let entry = read(project, "src/main.jsx");
    assert!(entry.starts_with("import 'bootstrap/dist/css/bootstrap.min.css';\n"));
    assert!(!entry.contains("./index.css"));
}

#[test]
fn mui_entry_point_has_no_stylesheet_import() {
    let dir = generated_project();
    let project = dir.path();

    transform::run(project, &ChoiceSet::new("demo", CssFramework::Mui, [])).unwrap();

    let entry = read(project, "src/main.jsx");
    assert!(!entry.contains(".css"));
}

#[test]
fn api_client_follows_axios_choice() {
    let dir = generated_project();
    let project = dir.path();
    transform::run(
        project,
        &ChoiceSet::new("demo", CssFramework::None, [Package::Formik]),
    )
    .unwrap();
    assert!(!project.join(API_CLIENT).exists());
    assert_eq!(fs::read_dir(project.join("src/utils")).unwrap().count(), 0);

    let dir = generated_project();
    let project = dir.path();
    let applied = transform::run(
        project,
        &ChoiceSet::new("demo", CssFramework::None, [Package::Axios]),
    )
    .unwrap();
    let client = read(project, API_CLIENT);
    assert!(client.contains("http://localhost:5000"));
    assert!(client.contains("10000"));
    assert_eq!(
        applied
            .iter()
            .filter(|step| step.path == Path::new(API_CLIENT))
            .map(|step| step.change)
            .collect::<Vec<_>>(),
        [Change::Created]
    );
}

#[test]
fn typescript_entry_point_is_used_when_jsx_is_absent() {
    let dir = generated_project();
    let project = dir.path();
    fs::rename(project.join("src/main.jsx"), project.join("src/main.tsx")).unwrap();
    fs::rename(project.join("src/App.jsx"), project.join("src/App.tsx")).unwrap();

    transform::run(project, &ChoiceSet::new("demo", CssFramework::Tailwind, [])).unwrap();

    assert!(!project.join("src/main.jsx").exists());
    assert!(!project.join("src/App.jsx").exists());
    assert!(read(project, "src/main.tsx").contains("<BrowserRouter>"));
    assert!(read(project, "src/App.tsx").contains("demo"));
}

#[test]
fn missing_build_config_aborts_pipeline() {
    let dir = generated_project();
    let project = dir.path();
    fs::remove_file(project.join("vite.config.js")).unwrap();

    let err = transform::run(project, &ChoiceSet::new("demo", CssFramework::Tailwind, []))
        .unwrap_err();

    assert!(err.to_string().contains("vite.config.ts"));
}

#[test]
fn stylesheet_import_stripping_is_idempotent_on_generated_entry_point() {
    let strip = EditOp::RemoveMatchingLines(transform::stylesheet_imports().clone());
    let generated = read(&common::fixture(), "src/main.jsx");
    let once = strip.apply(&generated);
    assert_ne!(once, generated);
    assert_eq!(strip.apply(&once), once);
}

#[cfg(unix)]
#[test]
fn rewritten_files_keep_generator_permissions() {
    use std::os::unix::fs::PermissionsExt as _;

    let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;

    let dir = generated_project();
    let project = dir.path();
    let rewritten = ["vite.config.js", "src/main.jsx", "src/App.jsx", "src/index.css"];
    for path in rewritten {
        fs::set_permissions(project.join(path), fs::Permissions::from_mode(0o644)).unwrap();
    }
    let fresh = project.join("fresh.js");
    fs::write(&fresh, "").unwrap();

    transform::run(
        project,
        &ChoiceSet::new("demo", CssFramework::Tailwind, [Package::Axios]),
    )
    .unwrap();

    for path in rewritten {
        assert_eq!(mode(&project.join(path)), 0o644, "{path}");
    }
    assert_eq!(mode(&project.join(API_CLIENT)), mode(&fresh) & 0o644);
}

#[test]
fn typescript_entry_point_asserts_root_element() {
    let dir = generated_project();
    let project = dir.path();
    fs::rename(project.join("src/main.jsx"), project.join("src/main.tsx")).unwrap();

    transform::run(project, &ChoiceSet::new("demo", CssFramework::None, [])).unwrap();

    assert!(read(project, "src/main.tsx")
        .contains("ReactDOM.createRoot(document.getElementById('root')!).render("));
}
