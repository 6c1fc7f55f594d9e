//! New project generation.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use djsuite_templates::{all_output_paths, get_manifest, Platform, RenderContext, Renderer};

use crate::config::{ProjectConfig, CONFIG_FILE_NAME};
use crate::error::{CoreError, CoreResult};
use crate::DJSUITE_VERSION;

/// Write one rendered file, creating parent directories and applying the
/// executable-bit rule for shell scripts.
pub(crate) fn write_rendered_file(
    project_path: &Path,
    output_path: &str,
    content: &str,
) -> CoreResult<()> {
    let full_path = project_path.join(output_path);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&full_path, content)?;
    if output_path.ends_with(".sh") {
        make_executable(&full_path)?;
    }
    Ok(())
}

/// Add owner/group/other execute bits to the file's existing mode.
#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o111);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Generate a new project under `output_dir/<project_name>`.
///
/// Fails before writing anything if the target directory already exists. On
/// success the full merged manifest is rendered and written, a config
/// snapshot is persisted, and `pdm lock` is attempted best-effort.
pub fn generate(
    context: &RenderContext,
    output_dir: &Path,
    platform: Platform,
) -> CoreResult<PathBuf> {
    let project_path = output_dir.join(&context.project_name);
    if project_path.exists() {
        return Err(CoreError::ProjectExists(project_path));
    }

    info!(
        "Generating project {} for platform {}",
        context.project_name,
        platform.as_str()
    );

    // Render everything before touching disk, so a template failure never
    // leaves a half-written project
    let manifest = get_manifest(platform)?;
    let renderer = Renderer::new();
    let rendered = renderer.render_all(&manifest, context)?;

    for (output_path, content) in &rendered {
        write_rendered_file(&project_path, output_path, content)?;
        println!("  created {output_path}");
    }

    let config = ProjectConfig::from_context(DJSUITE_VERSION, context);
    config.save(&project_path)?;
    println!("  created {CONFIG_FILE_NAME}");

    run_pdm_lock(&project_path);

    println!(
        "\nProject {} created at {}",
        context.project_name,
        project_path.display()
    );
    println!("\nNext steps:");
    println!("  cd {}", context.project_name);
    println!("  pdm install");
    println!("  cp .env .env.local  # edit with your settings");
    println!("  pdm run migrate");
    println!("  pdm run startdev 8000");

    Ok(project_path)
}

/// List what `generate` would create, writing nothing.
///
/// Returns the sorted output paths; the printed listing appends the config
/// snapshot filename and a total count.
pub fn dry_run(
    context: &RenderContext,
    output_dir: &Path,
    platform: Platform,
) -> CoreResult<Vec<String>> {
    let project_path = output_dir.join(&context.project_name);
    let paths = all_output_paths(platform)?;

    println!("Would create project at: {}\n", project_path.display());
    println!("Files that would be generated:");
    for path in &paths {
        println!("  {path}");
    }
    println!("  {CONFIG_FILE_NAME}");
    println!("\nTotal: {} files", paths.len() + 1);

    Ok(paths)
}

/// Check whether `pdm` can be invoked at all.
fn pdm_available() -> bool {
    Command::new("pdm")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Best-effort dependency pinning: reported, never fatal.
fn run_pdm_lock(project_path: &Path) {
    if !pdm_available() {
        println!("\nNote: pdm not found - run 'pdm lock' after installing PDM to pin dependencies.");
        return;
    }

    println!("\nRunning pdm lock to pin dependencies...");
    let result = Command::new("pdm")
        .arg("lock")
        .current_dir(project_path)
        .output();

    match result {
        Ok(output) if output.status.success() => {
            println!("  pdm.lock created");
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            println!(
                "  pdm lock failed (you can run it manually): {}",
                stderr.trim()
            );
        }
        Err(err) => {
            debug!("pdm lock could not be spawned: {err}");
            println!("  pdm lock failed (you can run it manually): {err}");
        }
    }
}
