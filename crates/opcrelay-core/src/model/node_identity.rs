// ── Node identity ──
//
// Published-nodes configuration carries node identifiers in two
// syntaxes: the legacy namespace-index form ("ns=2;i=1234") and the
// namespace-URI form ("nsu=http://vendor.example/ua/;i=1234"). The URI
// form survives server restarts that renumber the namespace table, so
// new configurations should prefer it; the index form is accepted for
// backward compatibility.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

const NAMESPACE_URI_PREFIX: &str = "nsu=";
const NAMESPACE_INDEX_PREFIX: &str = "ns=";

/// A resolved node identifier.
///
/// Exactly one syntax per configured node. The configured string is
/// retained verbatim so diagnostics and re-serialization can echo it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeIdentity {
    /// Legacy "ns=" syntax, qualified by a numeric namespace index.
    NumericNamespace { raw: String },
    /// "nsu=" syntax, qualified by a namespace URI.
    NamespaceUri { raw: String },
}

impl NodeIdentity {
    /// Resolve a configured identifier string into its identity form.
    ///
    /// Leading/trailing whitespace is ignored. Anything that carries
    /// neither prefix is rejected.
    pub fn resolve(raw: &str) -> Result<Self, ResolveError> {
        let trimmed = raw.trim();
        if trimmed.starts_with(NAMESPACE_URI_PREFIX) {
            Ok(Self::NamespaceUri {
                raw: trimmed.to_owned(),
            })
        } else if trimmed.starts_with(NAMESPACE_INDEX_PREFIX) {
            Ok(Self::NumericNamespace {
                raw: trimmed.to_owned(),
            })
        } else {
            Err(ResolveError::InvalidNodeIdentitySyntax {
                raw: raw.to_owned(),
            })
        }
    }

    /// The identifier exactly as it was configured.
    pub fn as_str(&self) -> &str {
        match self {
            Self::NumericNamespace { raw } | Self::NamespaceUri { raw } => raw,
        }
    }

    pub fn is_namespace_uri(&self) -> bool {
        matches!(self, Self::NamespaceUri { .. })
    }
}

impl fmt::Display for NodeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeIdentity {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}
