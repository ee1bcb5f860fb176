//! Integration tests for goscaff-core through its public API.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use goscaff_core::{
    application::ApplicationError,
    domain::{ConfigField, DomainError, RenderContext},
    prelude::*,
};

/// Records every call and keeps written files in memory.
#[derive(Clone, Default)]
struct RecordingFs {
    state: Arc<Mutex<FsState>>,
}

#[derive(Default)]
struct FsState {
    dirs: Vec<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    removed: Vec<PathBuf>,
    fail_on: Option<PathBuf>,
}

impl RecordingFs {
    fn failing_on(path: &str) -> Self {
        let fs = Self::default();
        fs.state.lock().unwrap().fail_on = Some(PathBuf::from(path));
        fs
    }

    fn file(&self, path: &str) -> Option<String> {
        self.state.lock().unwrap().files.get(Path::new(path)).cloned()
    }
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> GoscaffResult<()> {
        self.state.lock().unwrap().dirs.push(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> GoscaffResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_on.as_deref() == Some(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into());
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.dirs.iter().any(|d| d == path) || state.files.contains_key(path)
    }

    fn remove_dir_all(&self, path: &Path) -> GoscaffResult<()> {
        let mut state = self.state.lock().unwrap();
        state.removed.push(path.to_path_buf());
        state.files.retain(|p, _| !p.starts_with(path));
        state.dirs.retain(|p| !p.starts_with(path));
        Ok(())
    }
}

/// Renders one Go file per catalog field through the context.
struct FieldProbeRenderer;

impl ProjectRenderer for FieldProbeRenderer {
    fn render(&self, config: &ProjectConfig, root: &Path) -> GoscaffResult<ProjectStructure> {
        let ctx = RenderContext::for_project(config);
        let mut structure = ProjectStructure::new(root).with_directory("probe");
        structure.add_file(
            "probe/port.go",
            ctx.render("package probe\n\nvar _ = {{CFG_PORT}}\n"),
        );
        structure.add_file(
            "probe/postgres.go",
            ctx.render("package probe\n\nvar _ = {{CFG_POSTGRES_URL}} // {{PROJECT_NAME}}\n"),
        );
        Ok(structure)
    }
}

fn service(fs: &RecordingFs) -> GeneratorService {
    GeneratorService::new(Box::new(FieldProbeRenderer), Box::new(fs.clone()))
}

#[test]
fn resolution_follows_the_configured_format() {
    for (format, port, url) in [
        (ConfigFormat::Env, "cfg.Port", "cfg.PostgresURL"),
        (ConfigFormat::Yaml, "cfg.GetPort()", "cfg.GetPostgresURL()"),
        (ConfigFormat::Json, "cfg.GetPort()", "cfg.GetPostgresURL()"),
        (ConfigFormat::Toml, "cfg.GetPort()", "cfg.GetPostgresURL()"),
    ] {
        let fs = RecordingFs::default();
        let config = ProjectConfig::builder("ledger")
            .config_format(format)
            .database(Database::Postgres)
            .build()
            .unwrap();

        service(&fs).generate(&config, Path::new("/work"), false).unwrap();

        assert_eq!(
            fs.file("/work/ledger/probe/port.go").unwrap(),
            format!("package probe\n\nvar _ = {port}\n")
        );
        assert!(fs
            .file("/work/ledger/probe/postgres.go")
            .unwrap()
            .contains(&format!("var _ = {url} // ledger")));
    }
}

#[test]
fn resolver_agrees_with_the_free_function() {
    for format in ConfigFormat::ALL {
        let resolver = FieldResolver::new(format);
        for field in ConfigField::ALL {
            assert_eq!(resolver.field(field), resolve(field.name(), format));
        }
        assert_eq!(resolver.resolve("CustomFlag"), "cfg.CustomFlag");
    }
}

#[test]
fn strict_resolver_rejects_unknown_fields() {
    let err = FieldResolver::strict(ConfigFormat::Yaml)
        .try_resolve("Nope")
        .unwrap_err();
    assert!(matches!(err, DomainError::UnknownConfigField { .. }));
}

#[test]
fn plan_does_not_touch_the_filesystem() {
    let fs = RecordingFs::default();
    let config = ProjectConfig::builder("ledger").build().unwrap();

    let structure = service(&fs).plan(&config, Path::new("/work")).unwrap();

    assert_eq!(structure.root(), Path::new("/work/ledger"));
    assert!(structure.contains_file("probe/port.go"));
    assert!(fs.state.lock().unwrap().dirs.is_empty());
}

#[test]
fn write_failure_removes_the_created_root() {
    let fs = RecordingFs::failing_on("/work/ledger/probe/postgres.go");
    let config = ProjectConfig::builder("ledger").build().unwrap();

    let err = service(&fs)
        .generate(&config, Path::new("/work"), false)
        .unwrap_err();

    assert!(matches!(
        err,
        GoscaffError::Application(ApplicationError::FilesystemError { .. })
    ));
    let state = fs.state.lock().unwrap();
    assert_eq!(state.removed, [PathBuf::from("/work/ledger")]);
    assert!(state.files.is_empty());
}

#[test]
fn invalid_project_names_never_reach_the_renderer() {
    assert!(ProjectConfig::builder("").build().is_err());
    assert!(ProjectConfig::builder("has space").build().is_err());
}
