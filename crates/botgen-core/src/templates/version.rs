//! Version comparison for CLI and template compatibility

use super::manifest::TemplateManifest;
use semver::Version;

/// Parse a version string, accepting an optional leading `v`
pub fn parse_version(version: &str) -> Option<Version> {
    let cleaned = version.trim();
    Version::parse(cleaned.strip_prefix('v').unwrap_or(cleaned)).ok()
}

/// Warning text when the template expects a newer CLI than the one running
///
/// Unparseable versions are not compared.
pub fn check_compatibility(
    cli_version: &str,
    manifest: &TemplateManifest,
    upgrade_command: &str,
) -> Option<String> {
    let cli = parse_version(cli_version)?;
    let template = parse_version(&manifest.version)?;

    (cli < template).then(|| {
        format!(
            "Template '{}' targets version {} but this is {}. Consider updating: {}",
            manifest.name, template, cli, upgrade_command
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPGRADE: &str = "cargo install botgen-java --force";

    fn manifest(version: &str) -> TemplateManifest {
        TemplateManifest {
            name: "echo".to_string(),
            description: String::new(),
            version: version.to_string(),
        }
    }

    #[test]
    fn test_cli_older_than_template() {
        let warning = check_compatibility("0.1.0", &manifest("0.2.0"), UPGRADE).unwrap();
        assert!(warning.contains("0.2.0"));
        assert!(warning.contains(UPGRADE));
    }

    #[test]
    fn test_cli_same_or_newer() {
        assert!(check_compatibility("0.1.0", &manifest("0.1.0"), UPGRADE).is_none());
        assert!(check_compatibility("0.2.0", &manifest("v0.1.0"), UPGRADE).is_none());
    }

    #[test]
    fn test_invalid_versions_are_skipped() {
        assert!(check_compatibility("invalid", &manifest("0.1.0"), UPGRADE).is_none());
        assert!(check_compatibility("0.1.0", &manifest("latest"), UPGRADE).is_none());
    }

    #[test]
    fn test_parse_version_strips_prefix() {
        assert_eq!(parse_version("v1.2.3"), Some(Version::new(1, 2, 3)));
        assert_eq!(parse_version("nope"), None);
    }
}
