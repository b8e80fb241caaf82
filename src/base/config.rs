/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    /// Path of the spreadsheet to roll up. A path given on the command line
    /// takes precedence.
    pub ledger: Option<std::path::PathBuf>,
}

impl Config {
    /// Reads the config from disk. A missing file is not an error and loads
    /// as the default config.
    pub fn load(path: &std::path::Path) -> Result<Self, LoadError> {
        match std::fs::read_to_string(path) {
            Ok(s) => s.parse().map_err(LoadError::Json),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(Self::default()),
                _ => Err(LoadError::Io(e)),
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
