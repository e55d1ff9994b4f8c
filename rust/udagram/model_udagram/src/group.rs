use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A group of images as stored in the groups table.
///
/// Only `id` is guaranteed. Rows written by older clients may lack a name or description, and
/// any other attribute is kept in `extra` so it survives a read and a write.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Unique id of the group, minted on creation and never changed
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Free text description
    #[serde(default)]
    pub description: String,
    /// Attributes the api does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The body of a `POST /groups` request
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
    /// Display name
    pub name: String,
    /// Free text description
    pub description: String,
    /// Any other field of the body, stored as is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewGroup {
    /// Attaches an id to the request producing the record to store
    pub fn into_group(self, id: String) -> Group {
        let mut extra = self.extra;
        // the minted id wins over one sent in the body
        extra.remove("id");

        Group {
            id,
            name: self.name,
            description: self.description,
            extra,
        }
    }
}

/// Key of the groups table
#[derive(Serialize, Debug)]
pub struct GroupTableKey<'a> {
    /// The group id
    pub id: &'a str,
}
