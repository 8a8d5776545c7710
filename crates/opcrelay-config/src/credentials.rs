// ── Credential resolution ──
//
// Username/password material for endpoints that authenticate. The chain
// is environment → OS keyring → the values embedded in the entry
// itself. Whatever is found stays opaque: entries may carry
// hub-encrypted strings that only the downstream credential store can
// decrypt.

use secrecy::SecretString;

use crate::ConfigError;
use crate::entry::{EndpointEntry, OpcAuthMode};

const USERNAME_ENV: &str = "OPCRELAY_AUTH_USERNAME";
const PASSWORD_ENV: &str = "OPCRELAY_AUTH_PASSWORD";
const KEYRING_SERVICE: &str = "opcrelay";

/// Credential material attached to a publishing config.
#[derive(Debug, Clone)]
pub enum EndpointCredentials {
    Anonymous,
    UsernamePassword {
        username: String,
        password: SecretString,
    },
}

impl EndpointCredentials {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

/// Resolve the credentials for one endpoint entry.
///
/// Anonymous endpoints short-circuit; `UsernamePassword` endpoints walk
/// the chain and fail with [`ConfigError::NoCredentials`] when every
/// source comes up empty.
pub fn resolve_credentials(entry: &EndpointEntry) -> Result<EndpointCredentials, ConfigError> {
    match entry.opc_authentication_mode {
        OpcAuthMode::Anonymous => Ok(EndpointCredentials::Anonymous),
        OpcAuthMode::UsernamePassword => {
            let username = resolve_username(entry)?;
            let password = resolve_password(entry, &username)?;
            Ok(EndpointCredentials::UsernamePassword { username, password })
        }
    }
}

fn resolve_username(entry: &EndpointEntry) -> Result<String, ConfigError> {
    // 1. Environment
    if let Ok(name) = std::env::var(USERNAME_ENV) {
        return Ok(name);
    }

    // 2. Entry value
    if let Some(ref name) = entry.encrypted_auth_username {
        return Ok(name.clone());
    }

    Err(ConfigError::NoCredentials {
        endpoint: entry.label(),
    })
}

fn resolve_password(entry: &EndpointEntry, username: &str) -> Result<SecretString, ConfigError> {
    // 1. Environment
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        return Ok(SecretString::from(password));
    }

    // 2. OS keyring, keyed by endpoint URL and username
    let account = format!("{}/{username}", entry.endpoint_url);
    if let Ok(keyring_entry) = keyring::Entry::new(KEYRING_SERVICE, &account) {
        if let Ok(password) = keyring_entry.get_password() {
            return Ok(SecretString::from(password));
        }
    }

    // 3. Entry value
    if let Some(ref password) = entry.encrypted_auth_password {
        return Ok(SecretString::from(password.clone()));
    }

    Err(ConfigError::NoCredentials {
        endpoint: entry.label(),
    })
}
