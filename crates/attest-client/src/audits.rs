//! `/audits` endpoints and the Word report download.

use attest_core::entities::{Audit, AuditCreate, AuditUpdate};
use reqwest::Method;
use reqwest::header::CONTENT_DISPOSITION;

use crate::http::content_disposition_filename;
use crate::{ApiClient, ClientError, Query, push_opt};

/// A downloaded report. The bytes are opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ApiClient {
    /// Audits, optionally restricted to one project.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn list_audits(&self, project_id: Option<i64>) -> Result<Vec<Audit>, ClientError> {
        let mut query = Query::new();
        push_opt(&mut query, "project_id", project_id);
        self.get("/audits", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn get_audit(&self, id: i64) -> Result<Audit, ClientError> {
        self.get(&format!("/audits/{id}"), &Query::new()).await
    }

    /// Create an audit. With `template_id` set the backend seeds findings
    /// from the template in `language`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn create_audit(&self, data: &AuditCreate) -> Result<Audit, ClientError> {
        self.post("/audits", data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn update_audit(&self, id: i64, data: &AuditUpdate) -> Result<Audit, ClientError> {
        self.put(&format!("/audits/{id}"), data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or status failure.
    pub async fn delete_audit(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/audits/{id}")).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn copy_audit(&self, id: i64, new_name: &str) -> Result<Audit, ClientError> {
        let builder = self
            .request(Method::POST, &format!("/audits/{id}/copy"))
            .query(&[("new_name", new_name)]);
        self.fetch(builder).await
    }

    /// Download the Word report for an audit.
    ///
    /// The file name comes from `Content-Disposition`, falling back to
    /// `denetim_raporu_{id}.docx`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or status failure.
    pub async fn export_audit_word(&self, id: i64) -> Result<ReportFile, ClientError> {
        let resp = self
            .send(self.request(Method::GET, &format!("/reports/audit/{id}/word")))
            .await?;
        let filename = resp
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(content_disposition_filename)
            .unwrap_or_else(|| format!("denetim_raporu_{id}.docx"));
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| crate::http::transport_error(e, self.locale))?;
        Ok(ReportFile {
            filename,
            bytes: bytes.to_vec(),
        })
    }
}
