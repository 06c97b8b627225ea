//! The version transition table
//!
//! Maps a requested action against the current lifecycle state to the next
//! version, or rejects it. Transitions only move forward through the ladder
//! (dev -> alpha -> beta -> rc -> release); the sole reset is release -> dev,
//! which opens the next minor's cycle. Stable minor/patch bumps are legal only
//! when no pre-release is in flight. Pre-release kinds outside the ladder are
//! grammar-valid but have no transitions at all; this table is what enforces
//! the known set.

use std::fmt;
use std::str::FromStr;

use crate::domain::{PreRelease, Stage, Version};
use crate::error::{MdtVersionError, Result};

/// Requested version action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start a new dev cycle, or iterate within dev
    Dev,
    /// Promote to alpha, or iterate within alpha
    Alpha,
    /// Promote to beta, or iterate within beta
    Beta,
    /// Promote to rc, or iterate within rc
    Rc,
    /// Finalize the pre-release as stable
    Release,
    /// Stable minor bump
    Minor,
    /// Stable patch bump
    Patch,
}

impl Action {
    /// All recognized actions, in the order they are documented
    pub const ALL: [Action; 7] = [
        Action::Dev,
        Action::Alpha,
        Action::Beta,
        Action::Rc,
        Action::Release,
        Action::Minor,
        Action::Patch,
    ];
}

impl FromStr for Action {
    type Err = MdtVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dev" => Ok(Action::Dev),
            "alpha" => Ok(Action::Alpha),
            "beta" => Ok(Action::Beta),
            "rc" => Ok(Action::Rc),
            "release" => Ok(Action::Release),
            "minor" => Ok(Action::Minor),
            "patch" => Ok(Action::Patch),
            other => Err(MdtVersionError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Dev => write!(f, "dev"),
            Action::Alpha => write!(f, "alpha"),
            Action::Beta => write!(f, "beta"),
            Action::Rc => write!(f, "rc"),
            Action::Release => write!(f, "release"),
            Action::Minor => write!(f, "minor"),
            Action::Patch => write!(f, "patch"),
        }
    }
}

/// Compute the next version for the requested action
///
/// Pure function over the current version; callers persist the result only
/// after it returns Ok, so a rejected transition never reaches the manifest.
/// A component already at the numeric ceiling also rejects rather than wrap.
///
/// # Returns
/// * `Ok(Version)` - The next version
/// * `Err(IllegalTransition)` - Naming the current stage and rejected action
pub fn apply(current: &Version, action: Action) -> Result<Version> {
    let reject = || MdtVersionError::illegal_transition(current.stage_name(), action.to_string());

    match action {
        Action::Dev => match &current.pre_release {
            // A stable version opens the next minor's dev cycle.
            None => {
                let minor = current.minor.checked_add(1).ok_or_else(reject)?;
                Ok(Version::with_pre_release(
                    current.major,
                    minor,
                    0,
                    PreRelease::entering(Stage::Dev),
                ))
            }
            Some(pre) if pre.stage == Stage::Dev => pre
                .increment_iteration()
                .map(|pre| with_pre(current, pre))
                .ok_or_else(reject),
            Some(_) => Err(reject()),
        },
        Action::Alpha => promote_or_iterate(current, Stage::Alpha, reject),
        Action::Beta => promote_or_iterate(current, Stage::Beta, reject),
        Action::Rc => promote_or_iterate(current, Stage::Rc, reject),
        Action::Release => match &current.pre_release {
            Some(pre) if pre.stage.is_known() => {
                Ok(Version::new(current.major, current.minor, current.patch))
            }
            _ => Err(reject()),
        },
        Action::Minor => match &current.pre_release {
            None => {
                let minor = current.minor.checked_add(1).ok_or_else(reject)?;
                Ok(Version::new(current.major, minor, 0))
            }
            Some(_) => Err(reject()),
        },
        Action::Patch => match &current.pre_release {
            None => {
                let patch = current.patch.checked_add(1).ok_or_else(reject)?;
                Ok(Version::new(current.major, current.minor, patch))
            }
            Some(_) => Err(reject()),
        },
    }
}

/// Promotion rule shared by alpha/beta/rc: a pre-release at an earlier ladder
/// stage enters the target stage bare; the same stage iterates; anything
/// later, unknown, or stable is rejected.
fn promote_or_iterate(
    current: &Version,
    target: Stage,
    reject: impl Fn() -> MdtVersionError,
) -> Result<Version> {
    match &current.pre_release {
        Some(pre) if pre.stage == target => pre
            .increment_iteration()
            .map(|pre| with_pre(current, pre))
            .ok_or_else(reject),
        Some(pre) if pre.stage.is_known() && pre.stage < target => {
            Ok(with_pre(current, PreRelease::entering(target)))
        }
        _ => Err(reject()),
    }
}

fn with_pre(current: &Version, pre: PreRelease) -> Version {
    Version::with_pre_release(current.major, current.minor, current.patch, pre)
}
