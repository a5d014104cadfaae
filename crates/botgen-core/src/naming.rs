//! Names derived from the collected answers

use heck::ToKebabCase;
use std::path::{Component, Path, PathBuf};

/// Project directory name for a bot (`"My Bot"` -> `"my-bot"`)
pub fn directory_name(bot_name: &str) -> String {
    bot_name.to_kebab_case()
}

pub fn normalized_package_name(package_name: &str) -> String {
    package_name.to_lowercase()
}

/// Nested directories mirroring a dotted package (`"Com.Example.Bot"` -> `com/example/bot`)
///
/// Empty tokens (`"com..bot"`, leading or trailing dots) add no segment. Only
/// plain name components of a token are kept, so the result is always relative
/// and never climbs out of the directory it is joined onto.
pub fn package_path(package_name: &str) -> PathBuf {
    normalized_package_name(package_name)
        .split('.')
        .flat_map(|token| {
            Path::new(token)
                .components()
                .filter_map(|component| match component {
                    Component::Normal(part) => Some(part.to_os_string()),
                    _ => None,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_name_kebab_cases_bot_name() {
        assert_eq!(directory_name("My Bot"), "my-bot");
        assert_eq!(directory_name("MyBot"), "my-bot");
        assert_eq!(directory_name("my_bot"), "my-bot");
        assert_eq!(directory_name("echo"), "echo");
    }

    #[test]
    fn test_directory_name_is_idempotent() {
        for name in ["my-bot", "echo", "weather-bot-v2"] {
            assert_eq!(directory_name(name), name);
            assert_eq!(directory_name(&directory_name(name)), directory_name(name));
        }
    }

    #[test]
    fn test_package_path_one_segment_per_token() {
        let path = package_path("Com.Example.Bot");
        assert_eq!(path, Path::new("com").join("example").join("bot"));
        assert_eq!(path.components().count(), 3);
        assert!(!path.to_string_lossy().contains('.'));
    }

    #[test]
    fn test_package_path_without_dots() {
        assert_eq!(package_path("echo"), PathBuf::from("echo"));
    }

    #[test]
    fn test_package_path_skips_empty_tokens() {
        assert_eq!(
            package_path(".com..bot."),
            Path::new("com").join("bot")
        );
    }

    #[test]
    fn test_package_path_stays_relative() {
        for package in ["com./tmp/.Evil", "/abs.bot", "com.a/../../b", "..", "./."] {
            let path = package_path(package);
            assert!(path.is_relative(), "{package} -> {}", path.display());
            assert!(
                path.components().all(|c| matches!(c, Component::Normal(_))),
                "{package} -> {}",
                path.display()
            );
        }
        assert_eq!(
            package_path("com./tmp/.Evil"),
            Path::new("com").join("tmp").join("evil")
        );
    }

    #[test]
    fn test_normalized_package_name_lowercases() {
        assert_eq!(normalized_package_name("Com.Example.Bot"), "com.example.bot");
    }
}
