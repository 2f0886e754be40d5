use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// Dependency-Track project. The `uuid` is assigned by the service and never
/// changes once issued.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl Project {
    /// Payload for creating a project; the service assigns the UUID.
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            ..Default::default()
        }
    }

    /// Case-insensitive name comparison; project names are labels, not keys.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Outcome of a lookup-or-create.
///
/// `version_different` is set when the project was only found by name and
/// the caller still has to push the requested version onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSearchResult {
    pub project: Project,
    pub version_different: bool,
}

impl ProjectSearchResult {
    pub fn exact(project: Project) -> Self {
        Self {
            project,
            version_different: false,
        }
    }

    pub fn by_name(project: Project) -> Self {
        Self {
            project,
            version_different: true,
        }
    }
}
