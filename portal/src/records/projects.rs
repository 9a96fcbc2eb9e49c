//! Project approval board
//!
//! New projects start `Pending`. A pending project can be approved or
//! rejected exactly once; every other status is terminal here.

use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Project, ProjectCreate, ProjectDecision, ProjectStats, ProjectStatus};
use shared::types::RecordId;
use thiserror::Error;

use super::IdSequence;
use crate::utils::validation::validate_required_fields;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(RecordId),

    #[error("Project {id} is {} and can no longer be reviewed", .status.label())]
    NotPending { id: RecordId, status: ProjectStatus },
}

impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(id) => {
                AppError::new(ErrorCode::ProjectNotFound).with_detail("id", id)
            }
            ProjectError::NotPending { id, status } => {
                AppError::invalid_transition(format!("Project is already {}", status.label()))
                    .with_detail("id", id)
                    .with_detail("status", status.label())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectBoard {
    projects: Vec<Project>,
    ids: IdSequence,
    /// Names a new project may list; empty accepts anyone
    roster: Vec<String>,
}

impl ProjectBoard {
    pub fn new(projects: Vec<Project>) -> Self {
        let ids = IdSequence::after(projects.iter().map(|p| p.id));
        Self {
            projects,
            ids,
            roster: Vec::new(),
        }
    }

    /// Restrict new project members to `roster`
    pub fn with_roster(mut self, roster: Vec<String>) -> Self {
        self.roster = roster;
        self
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: RecordId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects still offering approve/reject
    pub fn actionable(&self) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Pending)
    }

    pub fn stats(&self) -> ProjectStats {
        let count = |status: ProjectStatus| {
            self.projects
                .iter()
                .filter(|p| p.status == status)
                .count()
        };
        ProjectStats {
            total: self.projects.len(),
            pending: count(ProjectStatus::Pending),
            approved: count(ProjectStatus::Approved),
            in_progress: count(ProjectStatus::InProgress),
        }
    }

    pub fn create(
        &mut self,
        form: ProjectCreate,
        created_by: &str,
        today: NaiveDate,
    ) -> AppResult<Project> {
        validate_required_fields(&[
            ("name", form.name.as_str()),
            ("milestone", form.milestone.as_str()),
            ("duration", form.duration.as_str()),
        ])?;

        let mut members: Vec<String> = Vec::with_capacity(form.members.len());
        for member in form.members {
            let member = member.trim();
            if member.is_empty() || members.iter().any(|m| m == member) {
                continue;
            }
            if !self.roster.is_empty() && !self.roster.iter().any(|r| r == member) {
                return Err(
                    AppError::new(ErrorCode::UnknownTeamMember).with_detail("member", member)
                );
            }
            members.push(member.to_string());
        }
        if members.is_empty() {
            return Err(AppError::new(ErrorCode::ProjectMembersRequired));
        }

        let project = Project {
            id: self.ids.next_id(),
            name: form.name,
            members,
            milestone: form.milestone,
            duration: form.duration,
            status: ProjectStatus::Pending,
            created_date: today,
            created_by: created_by.to_string(),
        };
        tracing::info!(project_id = project.id, name = %project.name, "Project created");
        self.projects.insert(0, project.clone());
        Ok(project)
    }

    pub fn decide(
        &mut self,
        id: RecordId,
        decision: ProjectDecision,
    ) -> Result<Project, ProjectError> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectError::NotFound(id))?;

        if project.status != ProjectStatus::Pending {
            tracing::warn!(
                project_id = id,
                status = project.status.label(),
                "Review rejected: not pending"
            );
            return Err(ProjectError::NotPending {
                id,
                status: project.status,
            });
        }

        project.status = decision.resulting_status();
        tracing::info!(project_id = id, status = project.status.label(), "Project reviewed");
        Ok(project.clone())
    }

    pub fn approve(&mut self, id: RecordId) -> Result<Project, ProjectError> {
        self.decide(id, ProjectDecision::Approve)
    }

    pub fn reject(&mut self, id: RecordId) -> Result<Project, ProjectError> {
        self.decide(id, ProjectDecision::Reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()
    }

    fn form(members: &[&str]) -> ProjectCreate {
        ProjectCreate {
            name: "Benefits Portal".to_string(),
            milestone: "Kickoff".to_string(),
            duration: "2 months".to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_create_starts_pending_at_head() {
        let mut board = ProjectBoard::new(vec![]);
        board.create(form(&["David Kim"]), "John Doe", today()).unwrap();
        let p = board
            .create(form(&["Sarah Johnson", "Sarah Johnson", "Michael Chen"]), "John Doe", today())
            .unwrap();

        assert_eq!(p.status, ProjectStatus::Pending);
        assert_eq!(p.members, vec!["Sarah Johnson", "Michael Chen"]);
        assert_eq!(p.created_by, "John Doe");
        assert_eq!(board.all()[0].id, p.id);
    }

    #[test]
    fn test_create_validation() {
        let mut board = ProjectBoard::new(vec![]);
        let mut missing = form(&["David Kim"]);
        missing.duration.clear();
        assert_eq!(
            board.create(missing, "John Doe", today()).unwrap_err().code,
            ErrorCode::RequiredField
        );
        assert_eq!(
            board.create(form(&[]), "John Doe", today()).unwrap_err().code,
            ErrorCode::ProjectMembersRequired
        );
        assert!(board.all().is_empty());
    }

    #[test]
    fn test_roster_limits_members() {
        let roster = vec!["David Kim".to_string(), "Lisa Anderson".to_string()];
        let mut board = ProjectBoard::new(vec![]).with_roster(roster);

        let err = board
            .create(form(&["David Kim", "Tom Baker"]), "John Doe", today())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownTeamMember);
        assert_eq!(err.detail("member").unwrap(), "Tom Baker");
        assert!(board.all().is_empty());

        let p = board
            .create(form(&[" Lisa Anderson ", "David Kim"]), "John Doe", today())
            .unwrap();
        assert_eq!(p.members, vec!["Lisa Anderson", "David Kim"]);
    }

    #[test]
    fn test_reject_is_terminal() {
        let mut board = ProjectBoard::new(vec![]);
        let id = board.create(form(&["David Kim"]), "John Doe", today()).unwrap().id;
        assert_eq!(board.actionable().count(), 1);

        let p = board.reject(id).unwrap();
        assert_eq!(p.status, ProjectStatus::Rejected);
        assert_eq!(board.actionable().count(), 0);

        assert_eq!(
            board.approve(id).unwrap_err(),
            ProjectError::NotPending {
                id,
                status: ProjectStatus::Rejected
            }
        );
        assert_eq!(board.get(id).unwrap().status, ProjectStatus::Rejected);
    }

    #[test]
    fn test_in_progress_cannot_be_reviewed() {
        let mut board = ProjectBoard::new(vec![Project {
            id: 2,
            name: "HR Analytics Dashboard".to_string(),
            members: vec!["David Kim".to_string()],
            milestone: "Data Collection".to_string(),
            duration: "2 months".to_string(),
            status: ProjectStatus::InProgress,
            created_date: today(),
            created_by: "Sarah Johnson".to_string(),
        }]);
        let err: AppError = board.approve(2).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::InvalidProjectTransition);
        assert_eq!(board.reject(9).unwrap_err(), ProjectError::NotFound(9));
    }

    #[test]
    fn test_stats() {
        let mut board = ProjectBoard::new(vec![]);
        let a = board.create(form(&["A"]), "John Doe", today()).unwrap().id;
        board.create(form(&["B"]), "John Doe", today()).unwrap();
        board.approve(a).unwrap();
        let stats = board.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.in_progress, 0);
    }
}
