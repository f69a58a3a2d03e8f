//! The bundle command: one full assembly run.

use crate::bundler::{AppBundler, SettingsBuilder};
use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;

/// Archive names the version can be read from, e.g.
/// `logbook-kai-3.5.2.jar` or `logbook-kai_3.5.2.zip`. Anchored at the
/// start only; non-conforming names leave the version unset so descriptor
/// defaults apply.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^logbook-kai[-_]([0-9.]+)[-.](?:jar|zip)").expect("version pattern is valid")
});

/// Runs one bundling build from the parsed arguments.
pub async fn execute(args: &Args, runtime_config: &RuntimeConfig) -> Result<()> {
    let version = resolve_version(args, runtime_config)?;

    let settings = SettingsBuilder::new()
        .archive(&args.archive)
        .template(&args.template)
        .destination(&args.destination)
        .app_name(&args.app_name)
        .bundle_name(&args.bundle_name)
        .bundle_identifier(&args.bundle_identifier)
        .icon(args.icon.clone())
        .version(version)
        .build()?;

    runtime_config.progress(&format!(
        "Bundling {} into {}",
        settings.archive().display(),
        settings.destination().join(settings.app_name()).display()
    ))?;

    let bundler = AppBundler::new(settings);
    let artifact = bundler.bundle().await?;

    runtime_config.success(&format!("Created {}", artifact.path.display()))?;
    runtime_config.indent(&format!("Size:   {} bytes", artifact.size))?;
    runtime_config.indent(&format!("SHA256: {}", artifact.checksum))?;
    Ok(())
}

/// Resolves the bundle version: the explicit flag wins, then filename
/// inference; otherwise the version stays unset.
fn resolve_version(args: &Args, runtime_config: &RuntimeConfig) -> Result<Option<String>> {
    if let Some(version) = &args.version {
        return Ok(Some(version.clone()));
    }

    let inferred = args
        .archive
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(infer_version);

    match &inferred {
        Some(version) => {
            runtime_config.verbose_println(&format!(
                "Inferred version {} from the archive name",
                version
            ))?;
        }
        None => {
            runtime_config.warn(
                "No version given and none inferred from the archive name; \
                 descriptor defaults apply",
            )?;
        }
    }
    Ok(inferred)
}

/// Extracts the version from an archive file name, if it conforms.
fn infer_version(file_name: &str) -> Option<String> {
    VERSION_PATTERN
        .captures(file_name)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_read_from_jar_names() {
        assert_eq!(infer_version("logbook-kai-3.5.2.jar").as_deref(), Some("3.5.2"));
        assert_eq!(infer_version("logbook-kai-20.1.zip").as_deref(), Some("20.1"));
    }

    #[test]
    fn underscore_separator_also_conforms() {
        assert_eq!(infer_version("logbook-kai_1.0.jar").as_deref(), Some("1.0"));
    }

    #[test]
    fn non_conforming_names_leave_the_version_unset() {
        assert_eq!(infer_version("logbook-kai.jar"), None);
        assert_eq!(infer_version("logbook-kai-.jar"), None);
        assert_eq!(infer_version("mylog-3.5.2.jar"), None);
        assert_eq!(infer_version("logbook-kai-3.5.2.tar.gz"), None);
    }

    #[test]
    fn match_is_anchored_at_the_start_only() {
        // Trailing text after the extension does not disqualify a name
        assert_eq!(
            infer_version("logbook-kai-3.5.2.jar.bak").as_deref(),
            Some("3.5.2")
        );
        assert_eq!(infer_version("v2-logbook-kai-3.5.2.jar"), None);
    }
}
