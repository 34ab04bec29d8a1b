//! Composable game query filter.

use crate::server::model::association::AssociationKind;

/// Criteria narrowing a game query. Set criteria combine with AND; an empty filter matches
/// every game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameFilter {
    pub genre_id: Option<i32>,
    pub platform_id: Option<i32>,
    pub publisher_id: Option<i32>,
    pub developer_id: Option<i32>,
    pub franchise_id: Option<i32>,
}

impl GameFilter {
    /// Filter matching every game.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter matching games associated with one catalog entry.
    pub fn by_association(kind: AssociationKind, id: i32) -> Self {
        Self::all().with_association(kind, id)
    }

    /// Filter matching games in one franchise.
    pub fn by_franchise(id: i32) -> Self {
        Self {
            franchise_id: Some(id),
            ..Self::default()
        }
    }

    /// Adds an association criterion.
    pub fn with_association(mut self, kind: AssociationKind, id: i32) -> Self {
        match kind {
            AssociationKind::Genre => self.genre_id = Some(id),
            AssociationKind::Platform => self.platform_id = Some(id),
            AssociationKind::Publisher => self.publisher_id = Some(id),
            AssociationKind::Developer => self.developer_id = Some(id),
        }
        self
    }

    /// Association criteria that are set, as `(kind, id)` pairs.
    pub fn associations(&self) -> Vec<(AssociationKind, i32)> {
        AssociationKind::ALL
            .into_iter()
            .filter_map(|kind| self.association(kind).map(|id| (kind, id)))
            .collect()
    }

    pub fn association(&self, kind: AssociationKind) -> Option<i32> {
        match kind {
            AssociationKind::Genre => self.genre_id,
            AssociationKind::Platform => self.platform_id,
            AssociationKind::Publisher => self.publisher_id,
            AssociationKind::Developer => self.developer_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
