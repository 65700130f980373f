use std::fmt;

/// Dropdown value meaning "all launch sites".
pub const ALL_SITES: &str = "ALL";

/// Dropdown label for the [`ALL_SITES`] option.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// The value held by the site selector.
///
/// Anything that is not a known site name resolves to [`SiteToken::All`],
/// so an unset or stale selection still produces a chart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteToken {
    #[default]
    All,
    Site(String),
}

impl SiteToken {
    /// Resolve a raw selector value against the sites present in the dataset.
    pub fn resolve<S: AsRef<str>>(raw: Option<&str>, known_sites: &[S]) -> SiteToken {
        let Some(raw) = raw else {
            return SiteToken::All;
        };
        if raw == ALL_SITES {
            return SiteToken::All;
        }
        if known_sites.iter().any(|s| s.as_ref() == raw) {
            SiteToken::Site(raw.to_string())
        } else {
            log::warn!("Unrecognized site '{}', showing all sites", raw);
            SiteToken::All
        }
    }

    /// The selected site name, or None for all sites.
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteToken::All => None,
            SiteToken::Site(name) => Some(name.as_str()),
        }
    }

    /// The dropdown value for this token.
    pub fn as_value(&self) -> &str {
        self.site().unwrap_or(ALL_SITES)
    }
}

impl fmt::Display for SiteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_value())
    }
}
