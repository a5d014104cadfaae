//! Runtime detection for Java and Maven

use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
    /// Where to get the runtime when it is missing
    pub install_hint: &'static str,
}

/// Run `program args` and return the first non-empty output line on success
///
/// `java -version` reports on stderr, so stderr is used when stdout is empty.
fn probe(program: &str, args: &[&str]) -> Option<String> {
    let out = Command::new(program).args(args).output().ok()?;
    if !out.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    let first_line = stdout
        .lines()
        .chain(stderr.lines())
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("unknown");
    Some(first_line.to_string())
}

fn runtime(name: &'static str, install_hint: &'static str, version: Option<String>) -> RuntimeInfo {
    RuntimeInfo {
        name,
        available: version.is_some(),
        version,
        install_hint,
    }
}

/// Check if a Java runtime is available
pub fn check_java() -> RuntimeInfo {
    runtime(
        "Java",
        "install a JDK (1.8 or newer) from https://adoptium.net",
        probe("java", &["-version"]),
    )
}

/// Check if Maven is available
pub fn check_maven() -> RuntimeInfo {
    runtime(
        "Maven",
        "install from https://maven.apache.org",
        probe("mvn", &["-v"]),
    )
}

/// Check everything needed to build and run a generated bot
pub fn check_runtimes() -> Vec<RuntimeInfo> {
    vec![check_java(), check_maven()]
}

/// Install hints for runtimes that were not found
pub fn missing_hints(runtimes: &[RuntimeInfo]) -> Vec<String> {
    runtimes
        .iter()
        .filter(|r| !r.available)
        .map(|r| format!("{} ({})", r.name, r.install_hint))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_runtimes_reports_java_and_maven() {
        let runtimes = check_runtimes();
        let names: Vec<_> = runtimes.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Java", "Maven"]);
        for r in &runtimes {
            assert_eq!(r.available, r.version.is_some());
        }
    }

    #[test]
    fn test_probe_missing_program() {
        assert!(probe("botgen-definitely-not-installed", &["--version"]).is_none());
    }

    #[test]
    fn test_missing_hints_only_lists_unavailable() {
        let runtimes = vec![
            runtime("Java", "get java", Some("openjdk 17".to_string())),
            runtime("Maven", "get maven", None),
        ];
        assert_eq!(missing_hints(&runtimes), vec!["Maven (get maven)".to_string()]);
    }
}
