use std::path::PathBuf;
use thiserror::Error;

/// Central error type for all progen operations.
///
/// Every failure surfaced to the user maps to one of these variants. No
/// variant is retried automatically; each aborts the subcommand that
/// produced it. The single exception is [`ProgenError::InstallFailed`],
/// which is advisory: it occurs after the project directory already exists.
#[derive(Error, Debug)]
pub enum ProgenError {
    /// The requested template key is not in the registry
    #[error("template '{key}' does not exist")]
    TemplateNotFound {
        /// The unknown template key
        key: String,
    },

    /// Tag listing or another network round-trip failed
    #[error("network operation failed: {message}")]
    NetworkError {
        /// Human-readable failure description
        message: String,
        /// The URL that was being fetched, if known
        url: Option<String>,
        /// Underlying transport error
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The interactive input stream was closed before an answer arrived
    #[error("prompt cancelled")]
    PromptCancelled {
        /// Underlying prompt error
        #[source]
        source: Option<dialoguer::Error>,
    },

    /// The target project name collides with an existing directory entry
    #[error("'{name}' already exists in {dir}")]
    AlreadyExists {
        /// The requested project name
        name: String,
        /// The directory that already contains an entry with that name
        dir: PathBuf,
    },

    /// Template clone/download failed, including partial transfers
    #[error("template download failed: {message}")]
    DownloadFailed {
        /// Human-readable failure description
        message: String,
        /// The repository URL being downloaded, if known
        url: Option<String>,
        /// Underlying process or I/O error
        #[source]
        source: Option<std::io::Error>,
    },

    /// The downloaded project's manifest file could not be read
    #[error("failed to read manifest: {message}")]
    ManifestRead {
        /// Human-readable failure description
        message: String,
        /// Path to the manifest file
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: Option<std::io::Error>,
    },

    /// The manifest file exists but is not valid JSON
    #[error("failed to parse manifest: {message}")]
    ManifestParse {
        /// Human-readable failure description
        message: String,
        /// Path to the manifest file
        path: Option<PathBuf>,
        /// Underlying parse error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The patched manifest could not be written back
    #[error("failed to write manifest: {message}")]
    ManifestWrite {
        /// Human-readable failure description
        message: String,
        /// Path to the manifest file
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: Option<std::io::Error>,
    },

    /// The dependency install child process failed (advisory only)
    #[error("dependency installation failed: {message}")]
    InstallFailed {
        /// Human-readable failure description
        message: String,
        /// Exit code of the package-manager process, if it ran
        exit_code: Option<i32>,
    },

    /// A user-supplied value failed validation
    #[error("validation error: {field} - {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Why validation failed
        message: String,
        /// The offending value, if safe to echo
        value: Option<String>,
    },

    /// A local file system operation failed
    #[error("file system operation failed: {message}")]
    FileSystemError {
        /// Human-readable failure description
        message: String,
        /// The path involved, if known
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: Option<std::io::Error>,
    },

    /// A failure that does not fit any other category
    #[error("internal error: {message}")]
    InternalError {
        /// Human-readable failure description
        message: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ProgenError {
    /// Create a template-not-found error
    pub fn template_not_found(key: impl Into<String>) -> Self {
        Self::TemplateNotFound { key: key.into() }
    }

    /// Create a network error
    pub fn network_error(message: impl Into<String>, url: Option<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
            url,
            source: None,
        }
    }

    /// Create a network error wrapping a transport failure
    pub fn network_error_with_source(
        message: impl Into<String>,
        url: Option<String>,
        source: reqwest::Error,
    ) -> Self {
        Self::NetworkError {
            message: message.into(),
            url,
            source: Some(source),
        }
    }

    /// Create a prompt-cancelled error
    pub fn prompt_cancelled() -> Self {
        Self::PromptCancelled { source: None }
    }

    /// Create an already-exists error
    pub fn already_exists(name: impl Into<String>, dir: PathBuf) -> Self {
        Self::AlreadyExists {
            name: name.into(),
            dir,
        }
    }

    /// Create a download-failed error
    pub fn download_failed(message: impl Into<String>, url: Option<String>) -> Self {
        Self::DownloadFailed {
            message: message.into(),
            url,
            source: None,
        }
    }

    /// Create a download-failed error wrapping an I/O failure
    pub fn download_failed_with_source(
        message: impl Into<String>,
        url: Option<String>,
        source: std::io::Error,
    ) -> Self {
        Self::DownloadFailed {
            message: message.into(),
            url,
            source: Some(source),
        }
    }

    /// Create a manifest-read error
    pub fn manifest_read(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: Option<std::io::Error>,
    ) -> Self {
        Self::ManifestRead {
            message: message.into(),
            path,
            source,
        }
    }

    /// Create a manifest-parse error
    pub fn manifest_parse(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::ManifestParse {
            message: message.into(),
            path,
            source,
        }
    }

    /// Create a manifest-write error
    pub fn manifest_write(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: Option<std::io::Error>,
    ) -> Self {
        Self::ManifestWrite {
            message: message.into(),
            path,
            source,
        }
    }

    /// Create an install-failed error
    pub fn install_failed(message: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::InstallFailed {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a validation error
    pub fn validation_error(
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
            value,
        }
    }

    /// Create a file system error
    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a file system error wrapping an I/O failure
    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error wrapping another error
    pub fn internal_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InternalError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error leaves the overall operation successful.
    ///
    /// Install failures happen after the project directory is fully
    /// materialized, so they are reported as warnings instead of failing
    /// the scaffold.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::InstallFailed { .. })
    }
}

impl From<std::io::Error> for ProgenError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("File system operation failed", None, error)
    }
}

impl From<reqwest::Error> for ProgenError {
    fn from(error: reqwest::Error) -> Self {
        Self::network_error_with_source("Network request failed", None, error)
    }
}

impl From<dialoguer::Error> for ProgenError {
    fn from(error: dialoguer::Error) -> Self {
        Self::PromptCancelled {
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for ProgenError {
    fn from(error: serde_json::Error) -> Self {
        Self::manifest_parse("JSON deserialization failed", None, Some(error))
    }
}
