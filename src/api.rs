//! The `OrderApi` trait: one async method per vendor operation.
//!
//! [`SymantecClient`](crate::SymantecClient) is the real implementation.
//! Caller-side orchestration (see [`workflow`](crate::workflow)) is written
//! against this trait so it can run against any implementation.

use crate::error::SymantecResult;
use crate::models::{
    Approver, OrderDetail, OrderInfo, OrderParameters, OrderQueryOptions, OrderResponse,
    OrderValidation, ReissueRequest,
};
use crate::order::{ModifyOperation, ProductCode, ResendEmailType};
use chrono::NaiveDate;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait OrderApi: Send + Sync {
    /// Place an order (`QuickOrder`).
    async fn order(&self, params: &OrderParameters) -> SymantecResult<OrderResponse>;

    /// Apply a `ModifyOrder` operation such as cancel or approve.
    async fn modify_order(
        &self,
        partner_order_id: &str,
        product_code: ProductCode,
        operation: ModifyOperation,
    ) -> SymantecResult<()>;

    /// Reissue the certificate of a completed order.
    async fn reissue(&self, request: &ReissueRequest) -> SymantecResult<OrderResponse>;

    async fn get_order_by_partner_order_id(
        &self,
        partner_order_id: &str,
        options: OrderQueryOptions,
    ) -> SymantecResult<OrderDetail>;

    /// Summaries of orders placed within the inclusive date window.
    async fn get_orders_by_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> SymantecResult<Vec<OrderInfo>>;

    /// Orders modified within the inclusive date window, with their events.
    async fn get_modified_orders(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> SymantecResult<Vec<OrderDetail>>;

    async fn get_quick_approver_list(&self, domain: &str) -> SymantecResult<Vec<Approver>>;

    async fn change_approver_email(
        &self,
        partner_order_id: &str,
        approver_email: &str,
    ) -> SymantecResult<()>;

    /// Check order parameters without placing an order.
    async fn validate_order_parameters(
        &self,
        params: &OrderParameters,
    ) -> SymantecResult<OrderValidation>;

    async fn resend_email(
        &self,
        partner_order_id: &str,
        email_type: ResendEmailType,
    ) -> SymantecResult<()>;
}
