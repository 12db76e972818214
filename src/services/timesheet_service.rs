// ============================================================================
// TIMESHEET SERVICE - CRUD + refetch
// ============================================================================
// Every mutation that got an answer from the backend is followed by a full
// refetch; the store is never patched locally.
// ============================================================================

use std::rc::Rc;

use super::http::HttpResponse;
use super::ApiClient;
use crate::error::{AppError, AppResult};
use crate::models::{EntityId, Timesheet};
use crate::stores::TimesheetStore;
use crate::utils::browser::Dialogs;

#[derive(Clone)]
pub struct TimesheetService {
    api: ApiClient,
    store: TimesheetStore,
    dialogs: Rc<dyn Dialogs>,
}

impl TimesheetService {
    pub fn new(api: ApiClient, store: TimesheetStore, dialogs: Rc<dyn Dialogs>) -> Self {
        Self { api, store, dialogs }
    }

    /// Parses whatever the backend answered, whatever the status
    pub async fn fetch_timesheets(&self) -> AppResult<Vec<Timesheet>> {
        let response = self.api.get("/timesheets").await?;
        let timesheets: Vec<Timesheet> = response.json().map_err(|e| {
            log::error!("❌ Unreadable timesheets (HTTP {}): {}", response.status, e);
            e
        })?;
        log::info!("📋 {} timesheets loaded", timesheets.len());
        self.store.set(timesheets.clone());
        Ok(timesheets)
    }

    pub async fn add_timesheet(&self, entry: &Timesheet) -> AppResult<()> {
        self.check_hours(entry)?;
        let response = self.api.post_json("/timesheets", entry).await?;
        self.refetch_after(response).await
    }

    pub async fn update_timesheet(&self, id: &EntityId, entry: &Timesheet) -> AppResult<()> {
        self.check_hours(entry)?;
        let response = self.api.put_json(&format!("/timesheets/{}", id), entry).await?;
        self.refetch_after(response).await
    }

    pub async fn delete_timesheet(&self, id: &EntityId) -> AppResult<()> {
        let response = self.api.delete(&format!("/timesheets/{}", id)).await?;
        self.refetch_after(response).await
    }

    pub fn store(&self) -> &TimesheetStore {
        &self.store
    }

    fn check_hours(&self, entry: &Timesheet) -> AppResult<()> {
        if let Err(e) = entry.validate_hours() {
            log::warn!("⚠️ Rejected timesheet with hours '{}'", entry.hours);
            self.dialogs.alert(&e.to_string());
            return Err(e);
        }
        Ok(())
    }

    /// Refetch even when the mutation was refused, then report the refusal
    async fn refetch_after(&self, mutation: HttpResponse) -> AppResult<()> {
        let refetched = self.fetch_timesheets().await;
        if !mutation.ok() {
            return Err(AppError::http(mutation.status, mutation.status_text));
        }
        refetched.map(|_| ())
    }
}
