//! Portal state root
//!
//! `PortalState` owns every in-memory list of the session plus the single
//! points ledger. Leaf stores never see the ledger directly; the methods
//! here hand it over for exactly the calls that need it, so the balance
//! only changes through `credit` / `debit`.
//!
//! # Notifications
//!
//! Each mutating action pushes one status message to the feed (more when an
//! upload also unlocks an achievement). Failed actions push the error
//! message and return the error; their state is left untouched.

use rand::Rng;
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    AchievementTrigger, CategoryFilter, Document, DocumentUpload, Employee, EmployeeInput,
    MarketplaceItem, PointsReason, Project, ProjectCreate, ProjectDecision, Purchase,
};
use shared::types::{Points, RecordId};
use shared::util::today;

use super::config::Config;
use crate::marketplace::{Catalog, Offer, PurchaseHistory, confirm_purchase};
use crate::notify::NotificationFeed;
use crate::records::{DocumentLibrary, EmployeeDirectory, ProjectBoard, UploadRewards};
use crate::rewards::{AchievementTracker, Peer, PointsLedger, TierStatus, TierTable, Unlocked};
use crate::seed;

/// Result of a successful document upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadOutcome {
    pub document: Document,
    pub unlocked: Vec<Unlocked>,
    /// Balance after the upload reward and any achievement bonus
    pub balance: Points,
}

#[derive(Debug, Clone)]
pub struct PortalState {
    config: Config,
    ledger: PointsLedger,
    tiers: TierTable,
    catalog: Catalog,
    purchases: PurchaseHistory,
    achievements: AchievementTracker,
    documents: DocumentLibrary,
    employees: EmployeeDirectory,
    projects: ProjectBoard,
    peers: Vec<Peer>,
    notifications: NotificationFeed,
}

impl PortalState {
    /// Start a session over the seed data
    pub fn new(config: Config) -> AppResult<Self> {
        config.validate()?;
        Ok(Self::seeded(config))
    }

    fn seeded(config: Config) -> Self {
        tracing::info!(
            initial_points = config.initial_points,
            user = %config.current_user,
            stock_policy = ?config.stock_policy,
            "Portal session started"
        );
        Self {
            ledger: PointsLedger::new(config.initial_points),
            tiers: TierTable::standard(),
            catalog: Catalog::new(seed::catalog()),
            purchases: PurchaseHistory::new(seed::purchases()),
            achievements: AchievementTracker::new(seed::achievements()),
            documents: DocumentLibrary::new(seed::documents()),
            employees: EmployeeDirectory::new(seed::employees()),
            projects: ProjectBoard::new(seed::projects()).with_roster(seed::team_members()),
            peers: seed::peers(),
            notifications: NotificationFeed::new(config.notification_capacity),
            config,
        }
    }

    /// Push the error to the feed and hand the result back
    fn report<T>(&mut self, result: AppResult<T>) -> AppResult<T> {
        if let Err(err) = &result {
            self.notifications.push(err.into());
        }
        result
    }

    // ==================== Read access ====================

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ledger(&self) -> &PointsLedger {
        &self.ledger
    }

    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn purchases(&self) -> &PurchaseHistory {
        &self.purchases
    }

    pub fn achievements(&self) -> &AchievementTracker {
        &self.achievements
    }

    pub fn documents(&self) -> &DocumentLibrary {
        &self.documents
    }

    pub fn employees(&self) -> &EmployeeDirectory {
        &self.employees
    }

    pub fn projects(&self) -> &ProjectBoard {
        &self.projects
    }

    pub fn peers(&self) -> &[Peer] {
        &self.peers
    }

    pub fn notifications(&self) -> &NotificationFeed {
        &self.notifications
    }

    // ==================== Economy ====================

    pub fn balance(&self) -> Points {
        self.ledger.balance()
    }

    pub fn tier_status(&self) -> TierStatus {
        self.tiers.status(self.ledger.balance())
    }

    /// Credit entry point for the rest of the app
    pub fn report_points_earned(&mut self, amount: Points) -> Points {
        let balance = self.ledger.credit(amount, PointsReason::Manual);
        self.notifications.success(format!("+{} points earned", amount));
        balance
    }

    /// Debit entry point for the rest of the app.
    ///
    /// Returns `false` and leaves the balance alone when it does not cover `cost`.
    pub fn attempt_purchase(&mut self, cost: Points) -> bool {
        let result = self
            .ledger
            .debit(cost, PointsReason::Redemption)
            .map_err(AppError::from);
        match self.report(result) {
            Ok(_) => {
                self.notifications.success(format!("Redeemed {} points", cost));
                true
            }
            Err(_) => false,
        }
    }

    pub fn items(&self, filter: CategoryFilter) -> Vec<&MarketplaceItem> {
        self.catalog.items(filter).collect()
    }

    pub fn offer(&self, item_id: RecordId) -> Option<Offer> {
        self.catalog.offer(item_id, self.ledger.balance())
    }

    /// Confirm a marketplace purchase
    pub fn purchase_item(&mut self, item_id: RecordId) -> AppResult<Purchase> {
        let result = confirm_purchase(
            &mut self.catalog,
            &mut self.purchases,
            &mut self.ledger,
            item_id,
            self.config.stock_policy,
            today(),
        )
        .map_err(AppError::from);
        let purchase = self.report(result)?;
        self.notifications
            .success(format!("Successfully purchased {}!", purchase.item_name));
        Ok(purchase)
    }

    // ==================== Documents ====================

    pub fn upload_document(&mut self, form: DocumentUpload) -> AppResult<UploadOutcome> {
        self.upload_document_with(form, &mut rand::thread_rng())
    }

    /// Upload with a caller-supplied reward source
    pub fn upload_document_with<R: Rng + ?Sized>(
        &mut self,
        form: DocumentUpload,
        rng: &mut R,
    ) -> AppResult<UploadOutcome> {
        let rewards = UploadRewards {
            min: self.config.upload_reward_min,
            max: self.config.upload_reward_max,
        };
        let result = self.documents.upload(
            form,
            &self.config.current_user,
            today(),
            || rewards.roll(rng),
        );
        let document = self.report(result)?;

        self.ledger.credit(
            document.points_earned,
            PointsReason::DocumentUploaded {
                document_name: document.name.clone(),
            },
        );
        let unlocked = self
            .achievements
            .record(AchievementTrigger::DocumentUploaded, &mut self.ledger);

        for u in &unlocked {
            self.notifications.success(format!(
                "Achievement Unlocked: {}! +{} points",
                u.title, u.points
            ));
        }
        self.notifications.success(format!(
            "Document uploaded successfully! +{} points earned",
            document.points_earned
        ));

        Ok(UploadOutcome {
            document,
            unlocked,
            balance: self.ledger.balance(),
        })
    }

    pub fn download_document(&mut self, id: RecordId) -> AppResult<Points> {
        let result = self.documents.get(id).map(|d| d.name.clone());
        let name = self.report(result)?;
        let reward = self.config.download_reward;
        let balance = self.ledger.credit(
            reward,
            PointsReason::DocumentDownloaded {
                document_name: name.clone(),
            },
        );
        self.notifications
            .success(format!("Downloaded {}! +{} points", name, reward));
        Ok(balance)
    }

    pub fn view_document(&mut self, id: RecordId) -> AppResult<Document> {
        let result = self.documents.get(id).cloned();
        let document = self.report(result)?;
        self.notifications.info(format!("Viewing {}", document.name));
        Ok(document)
    }

    /// Points earned for the document are not revoked
    pub fn delete_document(&mut self, id: RecordId) -> AppResult<Document> {
        let result = self.documents.delete(id);
        let document = self.report(result)?;
        self.notifications.success(format!("Deleted {}", document.name));
        Ok(document)
    }

    // ==================== Employees ====================

    pub fn search_employees(&self, query: &str) -> Vec<&Employee> {
        self.employees.search(query)
    }

    pub fn add_employee(&mut self, input: EmployeeInput) -> AppResult<Employee> {
        let result = self.employees.add(input, today());
        let employee = self.report(result)?;
        self.notifications.success("Employee added successfully!");
        Ok(employee)
    }

    pub fn update_employee(&mut self, id: RecordId, input: EmployeeInput) -> AppResult<Employee> {
        let result = self.employees.update(id, input);
        let employee = self.report(result)?;
        self.notifications.success("Employee updated successfully!");
        Ok(employee)
    }

    pub fn delete_employee(&mut self, id: RecordId) -> AppResult<Employee> {
        let result = self.employees.delete(id);
        let employee = self.report(result)?;
        self.notifications.success(format!("Deleted {}", employee.name));
        Ok(employee)
    }

    pub fn view_employee(&mut self, id: RecordId) -> AppResult<Employee> {
        let result = self.find_employee(id);
        let employee = self.report(result)?;
        self.notifications
            .info(format!("Viewing details for {}", employee.name));
        Ok(employee)
    }

    /// Returns the attachment name; there is no file body to hand out
    pub fn download_attachment(&mut self, id: RecordId) -> AppResult<Option<String>> {
        let result = self.find_employee(id);
        let attachment = self.report(result)?.attachment;
        if let Some(name) = &attachment {
            self.notifications.success(format!("Downloading {}", name));
        }
        Ok(attachment)
    }

    fn find_employee(&self, id: RecordId) -> AppResult<Employee> {
        self.employees
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", id))
    }

    // ==================== Projects ====================

    pub fn create_project(&mut self, form: ProjectCreate) -> AppResult<Project> {
        let result = self
            .projects
            .create(form, &self.config.current_user, today());
        let project = self.report(result)?;
        self.notifications
            .success("Project created successfully! Pending approval.");
        Ok(project)
    }

    pub fn review_project(
        &mut self,
        id: RecordId,
        decision: ProjectDecision,
    ) -> AppResult<Project> {
        let result = self.projects.decide(id, decision).map_err(AppError::from);
        let project = self.report(result)?;
        self.notifications
            .success(format!("Project {}!", project.status.label()));
        Ok(project)
    }

    pub fn approve_project(&mut self, id: RecordId) -> AppResult<Project> {
        self.review_project(id, ProjectDecision::Approve)
    }

    pub fn reject_project(&mut self, id: RecordId) -> AppResult<Project> {
        self.review_project(id, ProjectDecision::Reject)
    }
}

impl Default for PortalState {
    fn default() -> Self {
        Self::seeded(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use shared::message::NotificationLevel;
    use shared::models::DocumentCategory;

    fn fixed_reward(points: Points) -> PortalState {
        PortalState::new(Config {
            upload_reward_min: points,
            upload_reward_max: points,
            ..Config::default()
        })
        .unwrap()
    }

    fn upload_form(name: &str) -> DocumentUpload {
        DocumentUpload {
            name: name.to_string(),
            category: Some(DocumentCategory::Policy),
            file: None,
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = PortalState::new(Config {
            upload_reward_min: 30,
            upload_reward_max: 10,
            ..Config::default()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_entry_points() {
        let mut state = PortalState::default();
        assert_eq!(state.report_points_earned(15), 465);
        assert!(!state.attempt_purchase(500));
        assert_eq!(state.balance(), 465);
        assert!(state.attempt_purchase(465));
        assert_eq!(state.balance(), 0);
    }

    #[test]
    fn test_entry_points_notify() {
        let mut state = PortalState::default();

        state.report_points_earned(15);
        let latest = state.notifications().latest().unwrap();
        assert_eq!(latest.level, NotificationLevel::Success);
        assert_eq!(latest.message, "+15 points earned");

        assert!(!state.attempt_purchase(500));
        let latest = state.notifications().latest().unwrap();
        assert_eq!(latest.level, NotificationLevel::Error);
        assert_eq!(latest.message, "Insufficient points!");

        assert!(state.attempt_purchase(65));
        let latest = state.notifications().latest().unwrap();
        assert_eq!(latest.level, NotificationLevel::Success);
        assert_eq!(latest.message, "Redeemed 65 points");
        assert_eq!(state.notifications().len(), 3);
    }

    #[test]
    fn test_upload_credits_and_notifies() {
        let mut state = fixed_reward(15);
        let outcome = state
            .upload_document_with(upload_form("Policy.pdf"), &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(outcome.balance, 465);
        assert!(outcome.unlocked.is_empty());
        assert_eq!(state.documents().all()[0].uploaded_by, "John Doe");
        assert_eq!(
            state.notifications().latest().unwrap().message,
            "Document uploaded successfully! +15 points earned"
        );
    }

    #[test]
    fn test_failed_upload_reports_error_only() {
        let mut state = PortalState::default();
        let before = state.documents().all().len();
        let err = state
            .upload_document(DocumentUpload {
                name: "Unfiled.pdf".to_string(),
                ..DocumentUpload::default()
            })
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(state.balance(), 450);
        assert_eq!(state.documents().all().len(), before);
        let latest = state.notifications().latest().unwrap();
        assert_eq!(latest.level, NotificationLevel::Error);
        assert_eq!(latest.message, "Please fill in all required fields");
    }

    #[test]
    fn test_download_view_delete() {
        let mut state = PortalState::default();
        assert_eq!(state.download_document(1).unwrap(), 455);
        assert_eq!(
            state.notifications().latest().unwrap().message,
            "Downloaded Employee Handbook 2024.pdf! +5 points"
        );

        state.view_document(2).unwrap();
        assert_eq!(state.notifications().latest().unwrap().level, NotificationLevel::Info);

        state.delete_document(1).unwrap();
        assert_eq!(state.balance(), 455);
        assert_eq!(
            state.download_document(1).unwrap_err().code,
            ErrorCode::DocumentNotFound
        );
        assert_eq!(state.balance(), 455);
    }

    #[test]
    fn test_employee_view_and_attachment() {
        let mut state = PortalState::default();
        state.view_employee(1).unwrap();
        assert_eq!(
            state.notifications().latest().unwrap().message,
            "Viewing details for Sarah Johnson"
        );
        assert_eq!(
            state.download_attachment(1).unwrap().as_deref(),
            Some("benefits_sarah.pdf")
        );
        assert_eq!(state.download_attachment(3).unwrap(), None);
        assert_eq!(
            state.view_employee(99).unwrap_err().code,
            ErrorCode::EmployeeNotFound
        );
    }
}
