//! Webhook delivery
//!
//! This module performs the single outbound POST of a notification.

use super::context::CallContext;
use super::destination::{Destination, serialize_for_destination};
use super::manager::WebhookNotifier;
use super::types::NotificationPayload;
use crate::config::WebhookSettings;
use crate::utils::error::{NotifierError, Result};
use reqwest::header::CONTENT_TYPE;
use std::future::Future;
use tracing::debug;
use uuid::Uuid;

impl WebhookNotifier {
    /// Shape, encode and POST `payload` to the configured destination
    pub(super) async fn deliver(
        &self,
        settings: &WebhookSettings,
        payload: NotificationPayload,
        ctx: &CallContext,
    ) -> Result<()> {
        let delivery_id = Uuid::new_v4();
        let url = settings.url.trim();
        let destination = Destination::resolve(url, settings.style);
        let body = serialize_for_destination(url, settings.style, payload)?;

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()?;

        if ctx.is_cancelled() {
            return Err(NotifierError::Cancelled);
        }

        debug!(
            %delivery_id,
            destination = destination.as_str(),
            "Sending webhook"
        );

        let response = within_context(self.client.execute(request), ctx).await?;
        let status = response.status();

        if !status.is_success() {
            debug!(%delivery_id, status = status.as_u16(), "Webhook rejected");
            return Err(NotifierError::Status {
                status: status.as_u16(),
            });
        }

        debug!(%delivery_id, status = status.as_u16(), "Webhook delivered");
        Ok(())
    }
}

/// Drive `exchange` to completion unless the context's deadline or cancellation fires first
async fn within_context<F, T>(exchange: F, ctx: &CallContext) -> Result<T>
where
    F: Future<Output = reqwest::Result<T>>,
{
    let bounded = async {
        match ctx.timeout {
            Some(limit) => match tokio::time::timeout(limit, exchange).await {
                Ok(result) => result.map_err(NotifierError::from),
                Err(_) => Err(NotifierError::Timeout(limit)),
            },
            None => exchange.await.map_err(NotifierError::from),
        }
    };

    match ctx.cancel.clone() {
        Some(mut signal) => tokio::select! {
            result = bounded => result,
            _ = signal.cancelled() => Err(NotifierError::Cancelled),
        },
        None => bounded.await,
    }
}
