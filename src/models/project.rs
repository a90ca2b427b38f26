use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl Project {
    /// Projects installed when the collection has never been written.
    pub fn seed() -> Vec<Project> {
        [
            ("1", "Site North", "New residential complex"),
            ("2", "Site South", "Refurbishment of an old building"),
            ("3", "Site East", "Business park"),
            ("4", "Office/Administration", "Administrative work"),
        ]
        .into_iter()
        .map(|(id, name, description)| Project {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            is_active: true,
        })
        .collect()
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }
}
