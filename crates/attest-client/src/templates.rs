//! `/templates` endpoints.

use attest_core::Locale;
use attest_core::entities::{Template, TemplateCopy, TemplateCreate, TemplateItem, TemplateItemInput, TemplateUpdate};

use crate::{ApiClient, ClientError, Query, push_opt};

impl ApiClient {
    /// Templates visible to the caller, item texts in `lang`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn list_templates(
        &self,
        organization_id: Option<i64>,
        lang: Option<Locale>,
    ) -> Result<Vec<Template>, ClientError> {
        let mut query = Query::new();
        push_opt(&mut query, "organization_id", organization_id);
        push_opt(&mut query, "lang", lang);
        self.get("/templates", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn get_template(&self, id: i64, lang: Option<Locale>) -> Result<Template, ClientError> {
        let mut query = Query::new();
        push_opt(&mut query, "lang", lang);
        self.get(&format!("/templates/{id}"), &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn create_template(&self, data: &TemplateCreate) -> Result<Template, ClientError> {
        self.post("/templates", data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn update_template(&self, id: i64, data: &TemplateUpdate) -> Result<Template, ClientError> {
        self.put(&format!("/templates/{id}"), data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or status failure.
    pub async fn delete_template(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/templates/{id}")).await
    }

    /// Copy a template (system templates included) into an organization.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn copy_template(&self, id: i64, data: &TemplateCopy) -> Result<Template, ClientError> {
        self.post(&format!("/templates/{id}/copy"), data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn create_template_item(
        &self,
        template_id: i64,
        data: &TemplateItemInput,
    ) -> Result<TemplateItem, ClientError> {
        self.post(&format!("/templates/{template_id}/items"), data)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn update_template_item(
        &self,
        item_id: i64,
        data: &TemplateItemInput,
    ) -> Result<TemplateItem, ClientError> {
        self.put(&format!("/templates/items/{item_id}"), data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or status failure.
    pub async fn delete_template_item(&self, item_id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/templates/items/{item_id}")).await
    }
}
