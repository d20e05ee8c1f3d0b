use crate::error::{DotverError, Result};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// One of the three numeric components of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Component {
    /// All components, most significant first
    pub const ALL: [Component; 3] = [Component::Major, Component::Minor, Component::Patch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = DotverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(Component::Major),
            "minor" => Ok(Component::Minor),
            "patch" => Ok(Component::Patch),
            _ => Err(DotverError::UnknownComponent(s.to_string())),
        }
    }
}

/// Three-part version identifier `major.minor.patch`.
///
/// Immutable once built: every bump or arithmetic operation returns a new
/// value. Ordering is lexicographic over `(major, minor, patch)`, which the
/// derived `Ord` gives us from the field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    /// Create a new version
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from its dotted form (e.g., "2024.6.1").
    ///
    /// Exactly three tokens separated by `.` are accepted, each made only of
    /// ASCII digits. Leading zeros are accepted and dropped, so `"01.2.3"`
    /// becomes `1.2.3`. Whitespace, signs and prefixes such as `v` are
    /// rejected with [`DotverError::IncorrectVersion`].
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.split('.');
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            tracing::trace!(input, "rejected version: expected three components");
            return Err(DotverError::incorrect_version(input));
        };

        match (
            parse_component(major),
            parse_component(minor),
            parse_component(patch),
        ) {
            (Some(major), Some(minor), Some(patch)) => Ok(Version::new(major, minor, patch)),
            _ => {
                tracing::trace!(input, "rejected version: non-numeric component");
                Err(DotverError::incorrect_version(input))
            }
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// Value of a single component
    pub fn component(&self, component: Component) -> u32 {
        match component {
            Component::Major => self.major,
            Component::Minor => self.minor,
            Component::Patch => self.patch,
        }
    }

    pub fn major_next(&self) -> Result<u32> {
        self.bumped(Component::Major, true).map(|v| v.major)
    }

    pub fn major_prev(&self) -> Result<u32> {
        self.bumped(Component::Major, false).map(|v| v.major)
    }

    pub fn patch_next(&self) -> Result<u32> {
        self.bumped(Component::Patch, true).map(|v| v.patch)
    }

    pub fn patch_prev(&self) -> Result<u32> {
        self.bumped(Component::Patch, false).map(|v| v.patch)
    }

    /// Canonical string form `"{major}.{minor}.{patch}"`
    pub fn version(&self) -> String {
        self.to_string()
    }

    /// Canonical form of the next patch release
    pub fn version_next(&self) -> Result<String> {
        self.patch_incremented()
    }

    /// Canonical form of the previous patch release
    pub fn version_prev(&self) -> Result<String> {
        self.patch_decremented()
    }

    pub fn major_incremented(&self) -> Result<String> {
        self.bumped_string(Component::Major, true)
    }

    pub fn major_decremented(&self) -> Result<String> {
        self.bumped_string(Component::Major, false)
    }

    pub fn minor_incremented(&self) -> Result<String> {
        self.bumped_string(Component::Minor, true)
    }

    pub fn minor_decremented(&self) -> Result<String> {
        self.bumped_string(Component::Minor, false)
    }

    pub fn patch_incremented(&self) -> Result<String> {
        self.bumped_string(Component::Patch, true)
    }

    pub fn patch_decremented(&self) -> Result<String> {
        self.bumped_string(Component::Patch, false)
    }

    /// Bumping "the version" bumps the patch component only
    pub fn version_incremented(&self) -> Result<String> {
        self.patch_incremented()
    }

    pub fn version_decremented(&self) -> Result<String> {
        self.patch_decremented()
    }

    /// Bump one component up or down by one, leaving the others unchanged.
    ///
    /// # Errors
    /// [`DotverError::OutOfRange`] when the component would drop below zero
    /// or exceed `u32::MAX`.
    pub fn bumped(&self, component: Component, up: bool) -> Result<Version> {
        self.adjusted(component, if up { 1 } else { -1 })
    }

    /// Add `n` to the patch component
    pub fn checked_add_patch(&self, n: u32) -> Result<Version> {
        self.adjusted(Component::Patch, i64::from(n))
    }

    /// Subtract `n` from the patch component
    pub fn checked_sub_patch(&self, n: u32) -> Result<Version> {
        self.adjusted(Component::Patch, -i64::from(n))
    }

    fn bumped_string(&self, component: Component, up: bool) -> Result<String> {
        self.bumped(component, up).map(|v| v.to_string())
    }

    fn adjusted(&self, component: Component, delta: i64) -> Result<Version> {
        let value = i64::from(self.component(component))
            .checked_add(delta)
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| DotverError::OutOfRange {
                component,
                version: self.to_string(),
                delta,
            })?;

        let mut next = *self;
        match component {
            Component::Major => next.major = value,
            Component::Minor => next.minor = value,
            Component::Patch => next.patch = value,
        }
        Ok(next)
    }
}

/// Digits only; `str::parse` alone would let a leading `+` through.
fn parse_component(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<u32>().ok()
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = DotverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = DotverError;

    fn try_from(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl Add<u32> for Version {
    type Output = Result<Version>;

    fn add(self, rhs: u32) -> Result<Version> {
        self.checked_add_patch(rhs)
    }
}

impl Add<u32> for &Version {
    type Output = Result<Version>;

    fn add(self, rhs: u32) -> Result<Version> {
        self.checked_add_patch(rhs)
    }
}

impl Sub<u32> for Version {
    type Output = Result<Version>;

    fn sub(self, rhs: u32) -> Result<Version> {
        self.checked_sub_patch(rhs)
    }
}

impl Sub<u32> for &Version {
    type Output = Result<Version>;

    fn sub(self, rhs: u32) -> Result<Version> {
        self.checked_sub_patch(rhs)
    }
}

impl From<Version> for semver::Version {
    fn from(v: Version) -> Self {
        semver::Version::new(u64::from(v.major), u64::from(v.minor), u64::from(v.patch))
    }
}

impl TryFrom<&semver::Version> for Version {
    type Error = DotverError;

    /// Only plain `major.minor.patch` versions convert; pre-release and
    /// build metadata are rejected.
    fn try_from(v: &semver::Version) -> Result<Self> {
        if !v.pre.is_empty() || !v.build.is_empty() {
            return Err(DotverError::incorrect_version(v.to_string()));
        }
        let narrow =
            |n: u64| u32::try_from(n).map_err(|_| DotverError::incorrect_version(v.to_string()));
        Ok(Version::new(
            narrow(v.major)?,
            narrow(v.minor)?,
            narrow(v.patch)?,
        ))
    }
}
