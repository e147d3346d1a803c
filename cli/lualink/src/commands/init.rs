//! `lualink init` — project scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use lualink_targets::parse::generate_template;

use crate::manifest::LualinkManifest;

/// Create a new lualink project at the given path.
///
/// `name` is the project name. The directory `name` is created relative to cwd.
pub fn run(name: &str) -> Result<()> {
    let project_dir = Path::new(name);
    create_project(project_dir, name)
}

pub(crate) fn create_project(project_dir: &Path, name: &str) -> Result<()> {
    if project_dir.exists() {
        bail!("directory '{}' already exists", project_dir.display());
    }

    fs::create_dir_all(project_dir.join("targets")).context("creating targets/ directory")?;

    let manifest_content = LualinkManifest::template(name);
    fs::write(project_dir.join("lualink.toml"), &manifest_content)
        .context("writing lualink.toml")?;

    let descriptor = generate_template().context("generating default target descriptor")?;
    fs::write(
        project_dir.join("targets").join("win64-game.target.toml"),
        &descriptor,
    )
    .context("writing targets/win64-game.target.toml")?;

    println!("Created project '{name}'");
    println!("  {name}/lualink.toml");
    println!("  {name}/targets/win64-game.target.toml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use lualink_targets::parse::load_descriptor_toml;

    #[test]
    fn init_creates_project_structure() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("test-init-project");

        create_project(&project_path, "test-init-project").unwrap();

        assert!(project_path.join("lualink.toml").is_file());
        assert!(project_path.join("targets/win64-game.target.toml").is_file());
    }

    #[test]
    fn init_generates_loadable_files() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("loadable");

        create_project(&project_path, "loadable").unwrap();

        let (manifest, _) = LualinkManifest::find_and_load(&project_path)
            .unwrap()
            .unwrap();
        assert_eq!(manifest.project.name, "loadable");

        let descriptor =
            load_descriptor_toml(&project_path.join("targets/win64-game.target.toml")).unwrap();
        assert_eq!(descriptor.platform, lualink_targets::platform::Platform::Win64);
    }

    #[test]
    fn init_refuses_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(create_project(dir.path(), "exists").is_err());
    }
}
