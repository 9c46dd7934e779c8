//! `/findings` endpoints, evidence files and comments.

use attest_core::entities::{Comment, CommentCreate, Evidence, Finding, FindingCreate, FindingUpdate};
use reqwest::Method;
use reqwest::multipart::{Form, Part};

use crate::{ApiClient, ClientError, Query, push_opt};

/// Server-side filters for the findings list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindingQuery {
    pub audit_id: Option<i64>,
    pub assigned_to_user_id: Option<i64>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn list_findings(&self, filter: FindingQuery) -> Result<Vec<Finding>, ClientError> {
        let mut query = Query::new();
        push_opt(&mut query, "audit_id", filter.audit_id);
        push_opt(&mut query, "assigned_to_user_id", filter.assigned_to_user_id);
        self.get("/findings", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn get_finding(&self, id: i64) -> Result<Finding, ClientError> {
        self.get(&format!("/findings/{id}"), &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn create_finding(&self, data: &FindingCreate) -> Result<Finding, ClientError> {
        self.post("/findings", data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn update_finding(&self, id: i64, data: &FindingUpdate) -> Result<Finding, ClientError> {
        self.put(&format!("/findings/{id}"), data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or status failure.
    pub async fn delete_finding(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/findings/{id}")).await
    }

    /// Attach a file to a finding as multipart `file` (+ optional
    /// `description`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn upload_evidence(
        &self,
        finding_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
        description: Option<&str>,
    ) -> Result<Evidence, ClientError> {
        let mut form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_string()));
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            form = form.text("description", description.to_string());
        }
        let builder = self
            .request(Method::POST, &format!("/findings/{finding_id}/evidences"))
            .multipart(form);
        self.fetch(builder).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or status failure.
    pub async fn delete_evidence(&self, evidence_id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/findings/evidences/{evidence_id}")).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn list_comments(&self, finding_id: i64) -> Result<Vec<Comment>, ClientError> {
        self.get(&format!("/findings/{finding_id}/comments"), &Query::new())
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn create_comment(&self, finding_id: i64, comment: &str) -> Result<Comment, ClientError> {
        let body = CommentCreate {
            comment: comment.to_string(),
        };
        self.post(&format!("/findings/{finding_id}/comments"), &body)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or status failure.
    pub async fn delete_comment(&self, comment_id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/findings/comments/{comment_id}")).await
    }
}
