use crate::api::OrderApi;
use crate::config::SymantecConfig;
use crate::error::SymantecResult;
use crate::logging::{log_debug, log_info};
use crate::models::{
    Approver, OrderDetail, OrderInfo, OrderParameters, OrderQueryOptions, OrderResponse,
    OrderValidation, ReissueRequest,
};
use crate::order::{ModifyOperation, ProductCode, ResendEmailType};
use crate::response_parser::ResponseParser;
use crate::soap::{Envelope, RequestBuilder};
use crate::transport::SoapTransport;
use crate::xml::Element;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Instant;

/// Client for the partner ordering API
///
/// Holds the partner configuration; every call is a single, stateless
/// request/response exchange with the vendor.
#[derive(Debug)]
pub struct SymantecClient {
    config: SymantecConfig,
    transport: SoapTransport,
}

impl SymantecClient {
    /// Create a client from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`SymantecError::ConfigurationError`](crate::SymantecError::ConfigurationError)
    /// if the configuration is incomplete or the HTTP client cannot be built.
    pub fn new(config: SymantecConfig) -> SymantecResult<Self> {
        config.validate()?;
        let transport = SoapTransport::new(config.base_url.clone(), config.retry_policy.clone())?;

        log_debug!(
            partner_code = %config.partner_code,
            base_url = %config.base_url,
            max_attempts = config.retry_policy.max_attempts,
            "Partner API client initialized"
        );

        Ok(Self { config, transport })
    }

    /// Create a client from `SYMANTEC_*` environment variables
    pub fn from_env() -> SymantecResult<Self> {
        Self::new(SymantecConfig::from_env()?)
    }

    pub fn partner_code(&self) -> &str {
        &self.config.partner_code
    }

    pub fn config(&self) -> &SymantecConfig {
        &self.config
    }

    fn requests(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(&self.config)
    }

    /// Send an envelope and return the checked `<Operation>Result` element
    async fn execute(&self, envelope: Envelope) -> SymantecResult<Element> {
        let start_time = Instant::now();
        let raw = self.transport.call(&envelope).await?;
        let result = ResponseParser::parse_result(envelope.operation, &raw)?;

        log_debug!(
            operation = %envelope.operation,
            duration_ms = start_time.elapsed().as_millis(),
            "Partner API call succeeded"
        );

        Ok(result)
    }
}

#[async_trait]
impl OrderApi for SymantecClient {
    async fn order(&self, params: &OrderParameters) -> SymantecResult<OrderResponse> {
        let result = self.execute(self.requests().quick_order(params)?).await?;
        let response = ResponseParser::order_response(&result)?;

        log_info!(
            partner_order_id = %response.partner_order_id,
            geotrust_order_id = %response.geotrust_order_id,
            product_code = %params.product_code,
            "Order placed"
        );

        Ok(response)
    }

    async fn modify_order(
        &self,
        partner_order_id: &str,
        product_code: ProductCode,
        operation: ModifyOperation,
    ) -> SymantecResult<()> {
        self.execute(
            self.requests()
                .modify_order(partner_order_id, product_code, operation)?,
        )
        .await?;

        log_info!(
            partner_order_id = %partner_order_id,
            modify_operation = %operation,
            "Order modified"
        );

        Ok(())
    }

    async fn reissue(&self, request: &ReissueRequest) -> SymantecResult<OrderResponse> {
        let result = self.execute(self.requests().reissue(request)?).await?;
        let response = ResponseParser::order_response(&result)?;

        log_info!(
            partner_order_id = %response.partner_order_id,
            "Certificate reissue requested"
        );

        Ok(response)
    }

    async fn get_order_by_partner_order_id(
        &self,
        partner_order_id: &str,
        options: OrderQueryOptions,
    ) -> SymantecResult<OrderDetail> {
        let result = self
            .execute(
                self.requests()
                    .get_order_by_partner_order_id(partner_order_id, &options)?,
            )
            .await?;
        ResponseParser::order_detail(&result)
    }

    async fn get_orders_by_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> SymantecResult<Vec<OrderInfo>> {
        let result = self
            .execute(self.requests().get_orders_by_date_range(from, to)?)
            .await?;
        ResponseParser::order_summaries(&result)
    }

    async fn get_modified_orders(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> SymantecResult<Vec<OrderDetail>> {
        let result = self
            .execute(self.requests().get_modified_orders(from, to)?)
            .await?;
        ResponseParser::modified_orders(&result)
    }

    async fn get_quick_approver_list(&self, domain: &str) -> SymantecResult<Vec<Approver>> {
        let result = self
            .execute(self.requests().get_quick_approver_list(domain)?)
            .await?;
        ResponseParser::approvers(&result)
    }

    async fn change_approver_email(
        &self,
        partner_order_id: &str,
        approver_email: &str,
    ) -> SymantecResult<()> {
        self.execute(
            self.requests()
                .change_approver_email(partner_order_id, approver_email)?,
        )
        .await?;

        log_info!(
            partner_order_id = %partner_order_id,
            "Approver email changed"
        );

        Ok(())
    }

    async fn validate_order_parameters(
        &self,
        params: &OrderParameters,
    ) -> SymantecResult<OrderValidation> {
        let result = self
            .execute(self.requests().validate_order_parameters(params)?)
            .await?;
        ResponseParser::validation(&result)
    }

    async fn resend_email(
        &self,
        partner_order_id: &str,
        email_type: ResendEmailType,
    ) -> SymantecResult<()> {
        self.execute(self.requests().resend_email(partner_order_id, email_type)?)
            .await?;

        log_info!(
            partner_order_id = %partner_order_id,
            email_type = %email_type,
            "Vendor email resent"
        );

        Ok(())
    }
}
