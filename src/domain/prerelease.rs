//! Pre-release stage handling for the version lifecycle
//!
//! Supports the ordered pre-release ladder (dev, alpha, beta, rc) with optional
//! iteration numbers, where a release (no pre-release) sits above every stage.
//! Stage kinds outside the ladder are representable so the grammar can accept
//! them; only the transition table decides what they may do.

use std::fmt;
use std::str::FromStr;

use crate::error::{MdtVersionError, Result};

/// Pre-release lifecycle stage
///
/// Ladder stages are totally ordered by release readiness:
/// `Dev < Alpha < Beta < Rc`, and a stable version (no stage at all)
/// compares above all of them. A `Custom` kind is grammatically valid but
/// sits outside the ladder; the derived ordering places it after `Rc`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Development pre-release
    Dev,
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    Rc,
    /// A kind the grammar accepts but the ladder does not know
    Custom(String),
}

impl Stage {
    /// The ladder stages in lifecycle order, from least to most release-ready
    pub const LADDER: [Stage; 4] = [Stage::Dev, Stage::Alpha, Stage::Beta, Stage::Rc];

    /// Whether this is one of the four ladder stages
    pub fn is_known(&self) -> bool {
        !matches!(self, Stage::Custom(_))
    }
}

impl FromStr for Stage {
    type Err = MdtVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dev" => Ok(Stage::Dev),
            "alpha" => Ok(Stage::Alpha),
            "beta" => Ok(Stage::Beta),
            "rc" => Ok(Stage::Rc),
            other => {
                if !other.is_empty() && other.chars().all(|c| c.is_ascii_lowercase()) {
                    Ok(Stage::Custom(other.to_string()))
                } else {
                    Err(MdtVersionError::invalid_format(format!(
                        "invalid pre-release stage '{}'",
                        other
                    )))
                }
            }
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Dev => write!(f, "dev"),
            Stage::Alpha => write!(f, "alpha"),
            Stage::Beta => write!(f, "beta"),
            Stage::Rc => write!(f, "rc"),
            Stage::Custom(s) => write!(f, "{}", s),
        }
    }
}

/// Pre-release label with optional iteration number
///
/// The bare stage ("beta") and the numbered forms ("beta.1") are distinct
/// states: a bare stage is iteration zero of that stage, and the first
/// increment within a stage produces ".1", never ".0".
///
/// # Examples
/// - "dev" -> PreRelease { stage: Dev, iteration: None }
/// - "beta.1" -> PreRelease { stage: Beta, iteration: Some(1) }
/// - "rc.3" -> PreRelease { stage: Rc, iteration: Some(3) }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    /// The lifecycle stage (dev, alpha, beta, rc, or an unknown kind)
    pub stage: Stage,
    /// Optional iteration number within the stage
    pub iteration: Option<u32>,
}

impl PreRelease {
    /// Create a new pre-release label
    pub fn new(stage: Stage, iteration: Option<u32>) -> Self {
        PreRelease { stage, iteration }
    }

    /// Enter a stage at iteration zero (the bare, unnumbered form)
    pub fn entering(stage: Stage) -> Self {
        PreRelease {
            stage,
            iteration: None,
        }
    }

    /// Increment the iteration number within the current stage
    ///
    /// A bare stage increments to `.1`; a numbered stage increments by one.
    /// Returns `None` when the iteration is already at the numeric ceiling.
    ///
    /// # Examples
    /// ```ignore
    /// let pr = PreRelease::entering(Stage::Beta);
    /// assert_eq!(pr.increment_iteration().unwrap().iteration, Some(1));
    /// ```
    pub fn increment_iteration(&self) -> Option<Self> {
        let next = self.iteration.unwrap_or(0).checked_add(1)?;
        Some(PreRelease {
            stage: self.stage.clone(),
            iteration: Some(next),
        })
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stage)?;
        if let Some(iter) = self.iteration {
            write!(f, ".{}", iter)?;
        }
        Ok(())
    }
}

// Iteration ordering: a bare stage is iteration zero, so "beta" < "beta.1".
// The final Option comparison puts the bare form just below the explicit ".0"
// and keeps the ordering consistent with equality.
impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.stage
            .cmp(&other.stage)
            .then(self.iteration.unwrap_or(0).cmp(&other.iteration.unwrap_or(0)))
            .then(self.iteration.cmp(&other.iteration))
    }
}
