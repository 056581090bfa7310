use std::fmt::Display;

/// CI systems recognised from their environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CiSystem {
    GithubActions,
    TravisCi,
    CircleCi,
    Jenkins,
}

enum Marker {
    /// Variable is set to `true`, case-insensitively.
    True(&'static str),
    /// Variable is set to anything.
    Present(&'static str),
}

// checked in order, first match wins
const DETECTION: [(CiSystem, Marker); 4] = [
    (CiSystem::GithubActions, Marker::True("GITHUB_ACTIONS")),
    (CiSystem::TravisCi, Marker::True("TRAVIS")),
    (CiSystem::CircleCi, Marker::True("CIRCLECI")),
    (CiSystem::Jenkins, Marker::Present("JENKINS_HOME")),
];

impl CiSystem {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GithubActions => "GitHub Actions",
            Self::TravisCi => "Travis CI",
            Self::CircleCi => "CircleCI",
            Self::Jenkins => "Jenkins",
        }
    }

    /// Variable holding the commit SHA being built, if the system exports one.
    #[must_use]
    pub const fn sha_var(&self) -> Option<&'static str> {
        match self {
            Self::GithubActions => Some("GITHUB_SHA"),
            Self::TravisCi => Some("TRAVIS_COMMIT"),
            Self::CircleCi => Some("CIRCLE_SHA1"),
            Self::Jenkins => None,
        }
    }

    /// Variable holding the full ref being built, if the system exports one.
    #[must_use]
    pub const fn ref_var(&self) -> Option<&'static str> {
        match self {
            Self::GithubActions => Some("GITHUB_REF"),
            _ => None,
        }
    }
}

impl Display for CiSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Detect the CI system from environment lookups.
pub fn detect_ci(env: impl Fn(&str) -> Option<String>) -> Option<CiSystem> {
    DETECTION.iter().find_map(|(system, marker)| {
        let matched = match marker {
            Marker::True(var) => env(var).is_some_and(|v| v.eq_ignore_ascii_case("true")),
            Marker::Present(var) => env(var).is_some(),
        };
        matched.then_some(*system)
    })
}

/// Process environment lookup for [`detect_ci`], [`crate::get_sha`] and [`crate::get_ref`].
pub fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[rstest]
    #[case(&[("GITHUB_ACTIONS", "true")], Some(CiSystem::GithubActions))]
    #[case(&[("TRAVIS", "TRUE")], Some(CiSystem::TravisCi))]
    #[case(&[("CIRCLECI", "true")], Some(CiSystem::CircleCi))]
    #[case(&[("JENKINS_HOME", "/var/jenkins")], Some(CiSystem::Jenkins))]
    #[case(&[("JENKINS_HOME", "")], Some(CiSystem::Jenkins))]
    #[case(&[("GITHUB_ACTIONS", "false")], None)]
    #[case(&[("TRAVIS", "1")], None)]
    #[case(&[], None)]
    fn test_detect_ci(#[case] vars: &[(&str, &str)], #[case] expected: Option<CiSystem>) {
        assert_eq!(detect_ci(env(vars)), expected);
    }

    #[test]
    fn test_detect_ci_first_match_wins() {
        let vars = [
            ("JENKINS_HOME", "/var/jenkins"),
            ("CIRCLECI", "true"),
            ("GITHUB_ACTIONS", "true"),
        ];
        assert_eq!(detect_ci(env(&vars)), Some(CiSystem::GithubActions));
    }

    #[test]
    fn test_ci_system_vars() {
        assert_eq!(CiSystem::TravisCi.sha_var(), Some("TRAVIS_COMMIT"));
        assert_eq!(CiSystem::Jenkins.sha_var(), None);
        assert_eq!(CiSystem::GithubActions.ref_var(), Some("GITHUB_REF"));
        assert_eq!(CiSystem::CircleCi.ref_var(), None);
        assert_eq!(CiSystem::CircleCi.to_string(), "CircleCI");
    }
}
