//! Document library

use chrono::NaiveDate;
use rand::Rng;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Document, DocumentUpload};
use shared::types::{Points, RecordId};
use shared::util::format_megabytes;

use super::IdSequence;
use crate::utils::validation::{validate_required, validate_required_text};

/// Size shown when the form carries no file metadata
const DEFAULT_SIZE: &str = "1.5 MB";

/// Inclusive range an upload reward is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadRewards {
    pub min: Points,
    pub max: Points,
}

impl UploadRewards {
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Points {
        rng.gen_range(self.min..=self.max)
    }
}

fn not_found(id: RecordId) -> AppError {
    AppError::new(ErrorCode::DocumentNotFound).with_detail("id", id)
}

#[derive(Debug, Clone)]
pub struct DocumentLibrary {
    documents: Vec<Document>,
    ids: IdSequence,
}

impl DocumentLibrary {
    pub fn new(documents: Vec<Document>) -> Self {
        let ids = IdSequence::after(documents.iter().map(|d| d.id));
        Self { documents, ids }
    }

    pub fn all(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: RecordId) -> AppResult<&Document> {
        self.documents
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Sum of points recorded on the listed documents
    pub fn total_points(&self) -> Points {
        self.documents.iter().map(|d| d.points_earned).sum()
    }

    /// Validate the form, then store the document at the head of the list.
    ///
    /// `reward` is only drawn once the form is valid.
    pub fn upload(
        &mut self,
        form: DocumentUpload,
        uploaded_by: &str,
        today: NaiveDate,
        reward: impl FnOnce() -> Points,
    ) -> AppResult<Document> {
        validate_required_text(&form.name, "name")?;
        let category = validate_required(form.category, "category")?;

        let document = Document {
            id: self.ids.next_id(),
            name: form.name,
            category,
            uploaded_by: uploaded_by.to_string(),
            upload_date: today,
            size: form
                .file
                .map(|f| format_megabytes(f.size_bytes))
                .unwrap_or_else(|| DEFAULT_SIZE.to_string()),
            points_earned: reward(),
        };
        tracing::info!(
            document_id = document.id,
            name = %document.name,
            category = category.name(),
            points = document.points_earned,
            "Document uploaded"
        );
        self.documents.insert(0, document.clone());
        Ok(document)
    }

    /// Remove a document. Points already earned for it stay on the ledger.
    pub fn delete(&mut self, id: RecordId) -> AppResult<Document> {
        let pos = self
            .documents
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| not_found(id))?;
        let removed = self.documents.remove(pos);
        tracing::info!(document_id = id, name = %removed.name, "Document deleted");
        Ok(removed)
    }
}
