use crate::types::CandidateId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    // Servers may send null for candidates uploaded without an image.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_path: String,
}

impl Candidate {
    pub fn new(id: CandidateId, name: impl Into<String>, image_path: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_path: image_path.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
