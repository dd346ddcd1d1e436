// ABOUTME: Approval queue backed by a poller, with approve/reject followed by a refresh
// ABOUTME: Action failures go back to the caller; refresh failures land in the poller state

use anyhow::Result;
use sitepulse_core::{fetcher, PollOptions, PollState, Poller};
use std::time::Duration;

use crate::api::ApiClient;
use crate::types::ApprovalRequest;

pub struct ApprovalDesk {
    client: ApiClient,
    poller: Poller<Vec<ApprovalRequest>>,
}

impl ApprovalDesk {
    /// Start polling the approval queue; fetches once immediately
    pub fn open(client: ApiClient, refresh_interval: Option<Duration>) -> Self {
        let source = client.clone();
        let poller = Poller::spawn(
            fetcher(move || {
                let client = source.clone();
                async move { client.approvals().await }
            }),
            PollOptions { refresh_interval },
        );
        Self { client, poller }
    }

    pub fn poller(&self) -> &Poller<Vec<ApprovalRequest>> {
        &self.poller
    }

    pub fn state(&self) -> PollState<Vec<ApprovalRequest>> {
        self.poller.state()
    }

    /// Wait until no fetch is in flight and return the settled state
    pub async fn settled(&self) -> PollState<Vec<ApprovalRequest>> {
        let mut rx = self.poller.subscribe();
        let settled = match rx.wait_for(|s| !s.loading).await {
            Ok(state) => state.clone(),
            Err(_) => self.poller.state(),
        };
        settled
    }

    /// Every known request, empty when nothing has been fetched yet
    pub fn approvals(&self) -> Vec<ApprovalRequest> {
        self.poller.state().data_or_default()
    }

    pub fn pending(&self) -> Vec<ApprovalRequest> {
        self.approvals()
            .into_iter()
            .filter(ApprovalRequest::is_pending)
            .collect()
    }

    pub async fn approve(&self, id: &str, notes: &str) -> Result<ApprovalRequest> {
        let updated = self.client.approve(id, notes).await?;
        tracing::info!(%id, "Approval request approved");
        self.poller.refresh().await;
        Ok(updated)
    }

    pub async fn reject(&self, id: &str, notes: &str) -> Result<ApprovalRequest> {
        let updated = self.client.reject(id, notes).await?;
        tracing::info!(%id, "Approval request rejected");
        self.poller.refresh().await;
        Ok(updated)
    }
}
