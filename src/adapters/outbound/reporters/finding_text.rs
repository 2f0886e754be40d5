use crate::audit::domain::Finding;

/// Link to the Dependency-Track page of a vulnerability.
///
/// Both query values are percent-encoded, so IDs such as `GHSA-…` or
/// sources with spaces survive unchanged.
pub fn vuln_view_url(api_url: &str, source: &str, vuln_id: &str) -> String {
    format!(
        "{}/vulnerability/?source={}&vulnId={}",
        api_url,
        urlencoding::encode(source),
        urlencoding::encode(vuln_id)
    )
}

/// Text block for one finding, shared by the human and TeamCity reports.
pub fn format_finding(api_url: &str, finding: &Finding) -> String {
    let vulnerability = &finding.vulnerability;
    format!(
        " > {}: {}\n   Component: {} {}\n   More info: {}\n\n",
        vulnerability.severity,
        vulnerability.vuln_id,
        finding.component.name,
        finding.component.version,
        vuln_view_url(api_url, &vulnerability.source, &vulnerability.vuln_id)
    )
}

pub fn format_findings(api_url: &str, findings: &[Finding]) -> String {
    findings
        .iter()
        .map(|f| format_finding(api_url, f))
        .collect()
}
