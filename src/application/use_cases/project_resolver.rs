use crate::audit::domain::{Project, ProjectSearchResult};
use crate::ports::outbound::DtrackApi;
use crate::shared::error::AuditError;
use crate::shared::Result;

/// Canonical project identifier for an audit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProject {
    pub project_id: String,
    /// The project was matched by name only and still carries another version
    pub version_different: bool,
}

/// ProjectResolver - turns a project ID or a (name, version) pair into a
/// project UUID, creating the project when allowed.
pub struct ProjectResolver<'a, A: DtrackApi> {
    api: &'a A,
}

impl<'a, A: DtrackApi> ProjectResolver<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Resolves the project to upload to
    ///
    /// A non-empty `identifier` is returned as-is, without asking the
    /// service. Otherwise lookup-or-create runs, which requires `auto_create`.
    ///
    /// # Errors
    /// - [`AuditError::MissingProjectError`] without identifier and auto-creation
    /// - [`AuditError::MissingProjectName`] when auto-creating without a name
    /// - Any failure of the lookup/create calls
    pub fn resolve(
        &self,
        identifier: &str,
        name: &str,
        version: &str,
        auto_create: bool,
    ) -> Result<ResolvedProject> {
        if !identifier.is_empty() {
            return Ok(ResolvedProject {
                project_id: identifier.to_string(),
                version_different: false,
            });
        }

        if !auto_create {
            return Err(AuditError::MissingProjectError.into());
        }

        let result = self.lookup_or_create(name, version)?;
        Ok(ResolvedProject {
            project_id: result.project.uuid,
            version_different: result.version_different,
        })
    }

    /// Finds a project by (name, version), then by name alone, and creates
    /// it when neither lookup matches.
    pub fn lookup_or_create(&self, name: &str, version: &str) -> Result<ProjectSearchResult> {
        if name.is_empty() {
            return Err(AuditError::MissingProjectName.into());
        }

        if !version.is_empty() {
            if let Some(project) = self.api.lookup_project(name, version)? {
                if !project.uuid.is_empty() {
                    return Ok(ProjectSearchResult::exact(project));
                }
            }
        }

        if let Some(project) = self.find_by_name(name)? {
            return Ok(ProjectSearchResult::by_name(project));
        }

        let created = self.api.create_project(name, version)?;
        if created.uuid.is_empty() {
            return Err(AuditError::ProjectNotCreated {
                name: name.to_string(),
            }
            .into());
        }

        Ok(ProjectSearchResult::exact(Project {
            name: name.to_string(),
            version: version.to_string(),
            ..created
        }))
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Project>> {
        Ok(self
            .api
            .list_active_projects()?
            .into_iter()
            .find(|p| p.name_matches(name) && !p.uuid.is_empty()))
    }
}
