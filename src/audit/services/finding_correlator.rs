use crate::audit::domain::{Bom, BomComponent, Finding};

/// Per-component outcome in CI reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentVerdict {
    Pass,
    Fail,
}

impl ComponentVerdict {
    pub fn of(component: &BomComponent) -> Self {
        if component.is_vulnerable() {
            ComponentVerdict::Fail
        } else {
            ComponentVerdict::Pass
        }
    }

    pub fn as_action(self) -> &'static str {
        match self {
            ComponentVerdict::Pass => "pass",
            ComponentVerdict::Fail => "fail",
        }
    }
}

/// Attaches findings to the SBOM components they were reported against.
///
/// The annotation is a projection rebuilt on every run; the findings list
/// stays the source of truth.
pub struct FindingCorrelator;

impl FindingCorrelator {
    /// Annotates `bom` in place and returns how many findings matched no
    /// component.
    ///
    /// Matching is on (name, version), ignoring case. A finding is attached to
    /// the first matching component only, so each finding lands at most once.
    pub fn annotate(bom: &mut Bom, findings: &[Finding]) -> usize {
        for component in bom.components_mut() {
            component.findings.clear();
        }

        let mut unmatched = 0;
        for finding in findings {
            match bom.position_of(&finding.component.name, &finding.component.version) {
                Some(index) => bom.components_mut()[index].findings.push(finding.clone()),
                None => unmatched += 1,
            }
        }
        unmatched
    }

    pub fn verdicts(bom: &Bom) -> Vec<(&BomComponent, ComponentVerdict)> {
        bom.components()
            .iter()
            .map(|c| (c, ComponentVerdict::of(c)))
            .collect()
    }
}
