use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::prerelease::{PreRelease, Stage};
use crate::error::{MdtVersionError, Result};

/// Semantic version with an optional pre-release label
///
/// A stable version carries no pre-release; a pre-release version is always
/// staged and optionally numbered. The grammar admits any lowercase
/// alphabetic stage kind; whether a kind may transition is decided by the
/// transition table, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre_release: Option<PreRelease>,
}

fn version_grammar() -> &'static Regex {
    static VERSION_RE: OnceLock<Regex> = OnceLock::new();
    VERSION_RE.get_or_init(|| {
        Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:-([a-z]+)(?:\.(\d+))?)?$")
            .expect("version grammar pattern is valid")
    })
}

impl Version {
    /// Create a new stable version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
        }
    }

    /// Create a pre-release version
    pub fn with_pre_release(major: u32, minor: u32, patch: u32, pre: PreRelease) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: Some(pre),
        }
    }

    /// Whether this version is stable (no pre-release label)
    pub fn is_stable(&self) -> bool {
        self.pre_release.is_none()
    }

    /// The lifecycle stage name, "release" when stable
    ///
    /// Used in error reporting to name the state a rejected action found.
    pub fn stage_name(&self) -> String {
        match &self.pre_release {
            Some(pre) => pre.stage.to_string(),
            None => "release".to_string(),
        }
    }

    /// Parse a version string against the accepted grammar
    ///
    /// Accepts `X.Y.Z`, `X.Y.Z-kind` and `X.Y.Z-kind.N`, where the kind is
    /// any lowercase alphabetic token. Kinds outside the ladder parse as
    /// `Stage::Custom`; the transition table is what rejects them later.
    /// The bare `-kind` form parses with no iteration number and is distinct
    /// from `-kind.0`.
    ///
    /// # Returns
    /// * `Ok(Version)` - Parsed version
    /// * `Err(InvalidVersionFormat)` - With the offending string, for anything
    ///   outside the grammar (including `v` prefixes)
    pub fn parse(s: &str) -> Result<Self> {
        let caps = version_grammar()
            .captures(s)
            .ok_or_else(|| MdtVersionError::invalid_format(s))?;

        let number = |i: usize| -> Result<u32> {
            caps.get(i)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .ok_or_else(|| MdtVersionError::invalid_format(s))
        };

        let major = number(1)?;
        let minor = number(2)?;
        let patch = number(3)?;

        let pre_release = match caps.get(4) {
            Some(kind) => {
                let stage = kind
                    .as_str()
                    .parse::<Stage>()
                    .map_err(|_| MdtVersionError::invalid_format(s))?;
                let iteration = match caps.get(5) {
                    Some(n) => Some(
                        n.as_str()
                            .parse::<u32>()
                            .map_err(|_| MdtVersionError::invalid_format(s))?,
                    ),
                    None => None,
                };
                Some(PreRelease::new(stage, iteration))
            }
            None => None,
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre_release,
        })
    }
}

impl FromStr for Version {
    type Err = MdtVersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Semver ordering extended with the stage ladder: for an equal X.Y.Z triple,
// a stable version sorts above every pre-release, and pre-releases sort by
// stage then iteration (dev < alpha < beta < rc < release). Kinds outside
// the ladder sort between rc and stable.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre_release, &other.pre_release) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}
