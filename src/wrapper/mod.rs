//! Gradle wrapper prerequisite
//!
//! Service builds always go through the project's own wrapper so the global
//! Gradle install (if any) never decides the build tool version.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::context::{HostContext, HostOs};
use crate::runner::{CommandRunner, CommandSpec};


/// What [`ensure_wrapper`] had to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperStatus {
    Present,
    Generated,
}

/// Wrapper files missing from the project root
pub fn missing_files(context: &HostContext) -> Vec<PathBuf> {
    [context.wrapper_path(), context.wrapper_jar_path()]
        .into_iter()
        .filter(|path| !path.exists())
        .collect()
}

/// Make sure the Gradle wrapper exists and is executable.
///
/// A missing launcher or jar is regenerated with the global `gradle`. Fails
/// when there is no global Gradle or generation exits non-zero.
pub fn ensure_wrapper(
    context: &HostContext,
    runner: &dyn CommandRunner,
    gradle_version: &str,
) -> Result<WrapperStatus> {
    let missing = missing_files(context);

    let status = if missing.is_empty() {
        debug!("Gradle wrapper present at {}", context.wrapper_path().display());
        WrapperStatus::Present
    } else {
        let names: Vec<String> = missing
            .iter()
            .map(|path| relative_name(path, &context.project_dir))
            .collect();
        println!("[INFO] Wrapper missing ({}). Generating Gradle wrapper…", names.join(", "));

        let Some(gradle) = &context.gradle else {
            anyhow::bail!(
                "gradlew/gradle-wrapper not found and no global 'gradle' is available"
            );
        };

        let spec = CommandSpec::new(gradle)
            .args(["wrapper", "--gradle-version", gradle_version])
            .current_dir(&context.project_dir);
        let code = runner.run(&spec)?;
        if code != 0 {
            anyhow::bail!(
                "Could not generate the wrapper with 'gradle wrapper' (exit code {})",
                code
            );
        }
        info!("Generated Gradle {} wrapper", gradle_version);
        WrapperStatus::Generated
    };

    if context.os == HostOs::Unix {
        make_executable(&context.wrapper_path())?;
    }

    Ok(status)
}

fn relative_name(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use anyhow::Context;
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .with_context(|| format!("Gradle wrapper not found at {}", path.display()))?
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms)
        .with_context(|| format!("Failed to make {} executable", path.display()))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
