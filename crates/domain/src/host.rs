/// Build host detected from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildHost {
    ReadTheDocs,
    Local,
}

impl BuildHost {
    /// Classifies the raw `READTHEDOCS` variable value.
    ///
    /// Only the exact string `"True"` selects the hosted builder; any other
    /// value, including case variants, counts as a local build.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("True") => Self::ReadTheDocs,
            _ => Self::Local,
        }
    }

    /// Marker line emitted to the build log before resolution starts.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::ReadTheDocs => "READ_THE_DOCS_BUILD",
            Self::Local => "NON-READ_THE_DOCS_BUILD",
        }
    }
}
