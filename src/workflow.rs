//! Caller-side order workflows
//!
//! Nothing here is part of [`SymantecClient`](crate::SymantecClient): these
//! helpers drive the client from the outside, the way an integration or a
//! test harness would. They work against any [`OrderApi`].

use crate::api::OrderApi;
use crate::error::{SymantecError, SymantecResult};
use crate::logging::{log_debug, log_warn};
use crate::models::{OrderDetail, OrderQueryOptions};
use crate::order::{ModifyOperation, ProductCode};

use std::time::Duration;
use tokio::time::{sleep, Instant};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Polls an order until the vendor reports it complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionPoller {
    /// Sleep between two status queries
    pub interval: Duration,
    /// Give up once this much time has passed since the first query
    pub timeout: Duration,
}

impl Default for CompletionPoller {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_POLL_TIMEOUT,
        }
    }
}

impl CompletionPoller {
    /// Query the order until `OrderStatusMajor` is complete
    ///
    /// # Errors
    ///
    /// Returns [`SymantecError::ApprovalTimedOut`] once the timeout elapses,
    /// or the first error returned by a status query.
    pub async fn wait_for_completion<A: OrderApi + ?Sized>(
        &self,
        api: &A,
        partner_order_id: &str,
        options: OrderQueryOptions,
    ) -> SymantecResult<OrderDetail> {
        let start = Instant::now();

        loop {
            let detail = api
                .get_order_by_partner_order_id(partner_order_id, options)
                .await?;
            if detail.order_info.is_complete() {
                return Ok(detail);
            }

            let waited = start.elapsed();
            if waited > self.timeout {
                return Err(SymantecError::approval_timed_out(
                    partner_order_id,
                    waited.as_secs(),
                ));
            }

            log_debug!(
                partner_order_id = %partner_order_id,
                status = ?detail.order_info.order_status_major,
                waited_seconds = waited.as_secs(),
                "Order not complete yet, polling again"
            );
            sleep(self.interval).await;
        }
    }
}

/// Approve an order, forcing its state forward if the vendor refuses.
///
/// The vendor sandbox rejects approval of freshly placed orders that fail
/// its security review; `PUSH_ORDER_STATE` moves them on regardless. This
/// is sandbox behaviour, not something the client does on its own.
pub async fn approve_or_push_state<A: OrderApi + ?Sized>(
    api: &A,
    partner_order_id: &str,
    product_code: ProductCode,
) -> SymantecResult<()> {
    match api
        .modify_order(partner_order_id, product_code, ModifyOperation::Approve)
        .await
    {
        Err(SymantecError::ApiFault { message, .. }) => {
            log_warn!(
                partner_order_id = %partner_order_id,
                fault = %message,
                "Approval refused, pushing order state"
            );
            api.modify_order(partner_order_id, product_code, ModifyOperation::PushState)
                .await
        }
        other => other,
    }
}

/// Bring an order to the complete state and return its detail.
///
/// Returns immediately if it is already complete; otherwise approves (or
/// pushes) it and polls with `poller`.
pub async fn ensure_order_completed<A: OrderApi + ?Sized>(
    api: &A,
    poller: &CompletionPoller,
    partner_order_id: &str,
    product_code: ProductCode,
    options: OrderQueryOptions,
) -> SymantecResult<OrderDetail> {
    let detail = api
        .get_order_by_partner_order_id(partner_order_id, options)
        .await?;
    if detail.order_info.is_complete() {
        return Ok(detail);
    }

    approve_or_push_state(api, partner_order_id, product_code).await?;
    poller
        .wait_for_completion(api, partner_order_id, options)
        .await
}
