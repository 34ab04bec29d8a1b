//! Kinds of catalog entries a game associates with.

use std::fmt;

use crate::server::i18n::MessageKey;

/// Catalog entry kinds that form a many-to-many association with games.
///
/// Each kind maps to one catalog table and one join table; the join row is the single source
/// of truth for both directions of the association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociationKind {
    Genre,
    Platform,
    Publisher,
    Developer,
}

impl AssociationKind {
    pub const ALL: [AssociationKind; 4] = [
        AssociationKind::Genre,
        AssociationKind::Platform,
        AssociationKind::Publisher,
        AssociationKind::Developer,
    ];

    /// Singular name, e.g. `genre`.
    pub fn as_str(self) -> &'static str {
        match self {
            AssociationKind::Genre => "genre",
            AssociationKind::Platform => "platform",
            AssociationKind::Publisher => "publisher",
            AssociationKind::Developer => "developer",
        }
    }

    /// Collection path segment, e.g. `genres`.
    pub fn path(self) -> &'static str {
        match self {
            AssociationKind::Genre => "genres",
            AssociationKind::Platform => "platforms",
            AssociationKind::Publisher => "publishers",
            AssociationKind::Developer => "developers",
        }
    }

    /// Resolves a collection path segment back to its kind.
    pub fn from_path(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.path() == segment)
    }

    /// Message used when an entry of this kind cannot be found.
    pub fn not_found_key(self) -> MessageKey {
        match self {
            AssociationKind::Genre => MessageKey::GenreNotFound,
            AssociationKind::Platform => MessageKey::PlatformNotFound,
            AssociationKind::Publisher => MessageKey::PublisherNotFound,
            AssociationKind::Developer => MessageKey::DeveloperNotFound,
        }
    }
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
