pub mod config {
    use std::path::{Path, PathBuf};

    use serde::{Deserialize, Serialize, de::DeserializeOwned};

    #[derive(Debug)]
    /// An error that can occur when reading a config file.
    pub enum ConfigError {
        /// The file exists but could not be read.
        Io(std::io::Error),
        /// The file is not valid TOML for the expected type.
        Parse(toml::de::Error),
    }
    impl std::fmt::Display for ConfigError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                ConfigError::Io(e) => write!(f, "I/O error: {e}"),
                ConfigError::Parse(e) => write!(f, "Parse error: {e}"),
            }
        }
    }
    impl std::error::Error for ConfigError {}
    impl From<std::io::Error> for ConfigError {
        fn from(e: std::io::Error) -> Self {
            ConfigError::Io(e)
        }
    }
    impl From<toml::de::Error> for ConfigError {
        fn from(e: toml::de::Error) -> Self {
            ConfigError::Parse(e)
        }
    }

    /// Load a TOML config file, returning `T::default()` if the file doesn't exist.
    pub fn load_config<T: Default + DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no config file found, using defaults");
                Ok(T::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Config {
        pub data: Data,
        pub logging: Logging,
    }
    impl Config {
        pub const FILENAME: &str = "songbook.toml";

        pub fn load(path: &Path) -> Result<Self, ConfigError> {
            load_config(path)
        }
    }

    /// Where the music document lives.
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Data {
        pub path: PathBuf,
    }
    impl Default for Data {
        fn default() -> Self {
            Self {
                path: PathBuf::from("music_data.json"),
            }
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Logging {
        /// An `EnvFilter` directive, used when `RUST_LOG` is not set.
        pub filter: String,
    }
    impl Default for Logging {
        fn default() -> Self {
            Self {
                filter: "songbook=info".to_string(),
            }
        }
    }

}
