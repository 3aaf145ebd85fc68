//! Persistence of the bearer token.
//!
//! The session token lives in one of three tiers, checked in order: the OS
//! keychain, the `NEXUS_AUTH__TOKEN` environment variable, then a `0600`
//! credentials file at `~/.nexus/credentials`. Writes go to the keychain and
//! fall back to the file when no keychain is available.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AuthError;

pub const TOKEN_ENV_VAR: &str = "NEXUS_AUTH__TOKEN";

const DEFAULT_KEYRING_SERVICE: &str = "nexus-cli";
const KEYRING_USER: &str = "session-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Where a loaded token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
    Memory,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
            Self::Memory => "memory",
        })
    }
}

/// Storage for the single session token.
pub trait TokenStore: Send + Sync {
    /// The persisted token, if any. Empty values count as absent.
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStoreError`] if nothing could be written.
    fn store(&self, token: &str) -> Result<(), AuthError>;

    /// Forget the token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStoreError`] if the token could not be removed.
    fn delete(&self) -> Result<(), AuthError>;

    /// Tier the current token would be loaded from.
    fn source(&self) -> Option<TokenSource>;
}

// ---------------------------------------------------------------------------
// File tier
// ---------------------------------------------------------------------------

/// A plain file holding the token, created with `0600` permissions.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.nexus/credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStoreError`] when no home directory is known.
    pub fn default_location() -> Result<Self, AuthError> {
        dirs::home_dir()
            .map(|home| Self::new(home.join(".nexus").join(CREDENTIALS_FILE_NAME)))
            .ok_or_else(|| {
                AuthError::TokenStoreError(
                    "home directory not found, cannot store credentials".into(),
                )
            })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn store(&self, token: &str) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(&self.path, token).map_err(|e| {
            AuthError::TokenStoreError(format!("write {}: {e}", self.path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::TokenStoreError(format!("chmod {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }

    fn delete(&self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                AuthError::TokenStoreError(format!("failed to delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }

    fn source(&self) -> Option<TokenSource> {
        self.load().map(|_| TokenSource::File)
    }
}

// ---------------------------------------------------------------------------
// Keyring + env + file
// ---------------------------------------------------------------------------

/// The tiered store used by the command-line client.
#[derive(Debug, Clone)]
pub struct SystemTokenStore {
    service: String,
    file: FileTokenStore,
}

impl SystemTokenStore {
    /// Store under the default keychain service and `~/.nexus/credentials`.
    ///
    /// The keychain service can be overridden with `NEXUS_KEYRING_SERVICE`
    /// so test runs do not touch real credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStoreError`] when no home directory is known.
    pub fn new() -> Result<Self, AuthError> {
        let service = std::env::var("NEXUS_KEYRING_SERVICE")
            .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string());
        Ok(Self::with_parts(service, FileTokenStore::default_location()?))
    }

    #[must_use]
    pub const fn with_parts(service: String, file: FileTokenStore) -> Self {
        Self { service, file }
    }

    fn entry(&self) -> Option<keyring::Entry> {
        keyring::Entry::new(&self.service, KEYRING_USER).ok()
    }

    fn load_keyring(&self) -> Option<String> {
        self.entry()
            .and_then(|entry| entry.get_password().ok())
            .filter(|token| !token.is_empty())
    }

    fn load_env() -> Option<String> {
        std::env::var(TOKEN_ENV_VAR).ok().filter(|token| !token.is_empty())
    }
}

impl TokenStore for SystemTokenStore {
    fn load(&self) -> Option<String> {
        self.load_keyring()
            .or_else(Self::load_env)
            .or_else(|| self.file.load())
    }

    fn store(&self, token: &str) -> Result<(), AuthError> {
        match keyring::Entry::new(&self.service, KEYRING_USER) {
            Ok(entry) => match entry.set_password(token) {
                Ok(()) => Ok(()),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                    self.file.store(token)
                }
            },
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                self.file.store(token)
            }
        }
    }

    fn delete(&self) -> Result<(), AuthError> {
        if let Some(entry) = self.entry() {
            let _ = entry.delete_credential();
        }
        if Self::load_env().is_some() {
            tracing::warn!("{TOKEN_ENV_VAR} is set; unset it to fully log out");
        }
        self.file.delete()
    }

    fn source(&self) -> Option<TokenSource> {
        if self.load_keyring().is_some() {
            Some(TokenSource::Keyring)
        } else if Self::load_env().is_some() {
            Some(TokenSource::Env)
        } else {
            self.file.source()
        }
    }
}

// ---------------------------------------------------------------------------
// Memory
// ---------------------------------------------------------------------------

/// Process-local store, for tests and one-shot sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot().clone().filter(|token| !token.is_empty())
    }

    fn store(&self, token: &str) -> Result<(), AuthError> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn delete(&self) -> Result<(), AuthError> {
        *self.slot() = None;
        Ok(())
    }

    fn source(&self) -> Option<TokenSource> {
        self.load().map(|_| TokenSource::Memory)
    }
}
