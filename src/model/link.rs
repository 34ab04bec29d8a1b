use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Hypermedia link to a related resource.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct LinkDto {
    pub href: String,
}

/// Links keyed by relation name, serialized under `_links`.
pub type Links = BTreeMap<String, LinkDto>;

/// Builds a link map from `(relation, href)` pairs.
pub fn links<I, R>(pairs: I) -> Links
where
    I: IntoIterator<Item = (R, String)>,
    R: Into<String>,
{
    pairs
        .into_iter()
        .map(|(rel, href)| (rel.into(), LinkDto { href }))
        .collect()
}
