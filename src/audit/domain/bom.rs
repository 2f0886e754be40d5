use super::Finding;
use crate::shared::Result;
use serde::Deserialize;

/// A component listed in the audited SBOM.
///
/// `findings` is empty after parsing and is filled in by
/// [`FindingCorrelator`](crate::audit::services::FindingCorrelator).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BomComponent {
    pub component_type: String,
    pub name: String,
    pub version: String,
    pub purl: String,
    pub findings: Vec<Finding>,
}

impl BomComponent {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            component_type: "library".to_string(),
            name: name.to_string(),
            version: version.to_string(),
            ..Default::default()
        }
    }

    /// `name@version`, the test name used in CI reports.
    pub fn coordinate(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    /// Case-insensitive (name, version) match.
    pub fn matches(&self, name: &str, version: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
            && self.version.to_lowercase() == version.to_lowercase()
    }

    pub fn is_vulnerable(&self) -> bool {
        !self.findings.is_empty()
    }
}

/// Parsed CycloneDX document, reduced to its top-level component list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bom {
    components: Vec<BomComponent>,
}

impl Bom {
    pub fn new(components: Vec<BomComponent>) -> Self {
        Self { components }
    }

    /// Parses a CycloneDX document, detecting JSON by a leading `{`.
    pub fn parse(content: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(content)
            .map_err(|e| anyhow::anyhow!("SBOM is not valid UTF-8: {}", e))?;
        let text = text.trim_start_matches('\u{feff}');

        if text.trim_start().starts_with('{') {
            Self::from_json(text)
        } else {
            Self::from_xml(text)
        }
    }

    pub fn from_xml(xml: &str) -> Result<Self> {
        let raw: XmlBom = quick_xml::de::from_str(xml)
            .map_err(|e| anyhow::anyhow!("Invalid CycloneDX XML: {}", e))?;
        Ok(Self::new(
            raw.components
                .component
                .into_iter()
                .map(RawComponent::into_component)
                .collect(),
        ))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: JsonBom = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Invalid CycloneDX JSON: {}", e))?;
        Ok(Self::new(
            raw.components
                .into_iter()
                .map(RawComponent::into_component)
                .collect(),
        ))
    }

    pub fn components(&self) -> &[BomComponent] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [BomComponent] {
        &mut self.components
    }

    /// Index of the first component matching (name, version), ignoring case.
    pub fn position_of(&self, name: &str, version: &str) -> Option<usize> {
        self.components.iter().position(|c| c.matches(name, version))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

// CycloneDX wire structures

#[derive(Debug, Deserialize)]
struct XmlBom {
    #[serde(default)]
    components: XmlComponents,
}

#[derive(Debug, Default, Deserialize)]
struct XmlComponents {
    #[serde(default)]
    component: Vec<RawComponent>,
}

#[derive(Debug, Deserialize)]
struct JsonBom {
    #[serde(default)]
    components: Vec<RawComponent>,
}

#[derive(Debug, Deserialize)]
struct RawComponent {
    #[serde(rename = "@type", alias = "type", default)]
    component_type: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    purl: String,
}

impl RawComponent {
    fn into_component(self) -> BomComponent {
        BomComponent {
            component_type: self.component_type,
            name: self.name,
            version: self.version,
            purl: self.purl,
            findings: Vec::new(),
        }
    }
}
