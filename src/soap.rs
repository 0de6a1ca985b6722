//! SOAP request envelopes for the partner API.
//!
//! Each operation is wrapped as
//! `Envelope/Body/<Operation xmlns="..."><Request>...</Request></Operation>`.
//! Order operations live in the `webtrust/order` namespace, lookups in
//! `webtrust/query`. Optional parameters are omitted when unset.

use crate::config::SymantecConfig;
use crate::error::{SymantecError, SymantecResult};
use crate::models::{Contact, OrderParameters, OrderQueryOptions, ReissueRequest};
use crate::order::{ModifyOperation, ProductCode, ResendEmailType};
use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;
use std::fmt;
use std::io;

pub const SOAP_ENVELOPE_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const ORDER_NAMESPACE: &str = "http://api.geotrust.com/webtrust/order";
pub const QUERY_NAMESPACE: &str = "http://api.geotrust.com/webtrust/query";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Vendor operations, named exactly as the vendor names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    QuickOrder,
    ModifyOrder,
    Reissue,
    ChangeApproverEmail,
    ValidateOrderParameters,
    ResendEmail,
    GetOrderByPartnerOrderID,
    GetOrdersByDateRange,
    GetModifiedOrders,
    GetQuickApproverList,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::QuickOrder => "QuickOrder",
            Self::ModifyOrder => "ModifyOrder",
            Self::Reissue => "Reissue",
            Self::ChangeApproverEmail => "ChangeApproverEmail",
            Self::ValidateOrderParameters => "ValidateOrderParameters",
            Self::ResendEmail => "ResendEmail",
            Self::GetOrderByPartnerOrderID => "GetOrderByPartnerOrderID",
            Self::GetOrdersByDateRange => "GetOrdersByDateRange",
            Self::GetModifiedOrders => "GetModifiedOrders",
            Self::GetQuickApproverList => "GetQuickApproverList",
        }
    }

    pub fn is_query(&self) -> bool {
        matches!(
            self,
            Self::GetOrderByPartnerOrderID
                | Self::GetOrdersByDateRange
                | Self::GetModifiedOrders
                | Self::GetQuickApproverList
        )
    }

    pub fn namespace(&self) -> &'static str {
        if self.is_query() {
            QUERY_NAMESPACE
        } else {
            ORDER_NAMESPACE
        }
    }

    pub fn soap_action(&self) -> String {
        format!("{}/{}", self.namespace(), self.name())
    }

    /// `<Operation>Response` element name.
    pub fn response_element(&self) -> String {
        format!("{}Response", self.name())
    }

    /// `<Operation>Result` element name.
    pub fn result_element(&self) -> String {
        format!("{}Result", self.name())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A serialized request, ready to POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub operation: Operation,
    pub body: String,
}

type XmlWriter = Writer<Vec<u8>>;

fn element(
    w: &mut XmlWriter,
    name: &str,
    children: impl FnOnce(&mut XmlWriter) -> io::Result<()>,
) -> io::Result<()> {
    w.create_element(name).write_inner_content(children)?;
    Ok(())
}

fn leaf(w: &mut XmlWriter, name: &str, text: &str) -> io::Result<()> {
    w.create_element(name)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

fn optional_leaf(w: &mut XmlWriter, name: &str, text: Option<&str>) -> io::Result<()> {
    match text {
        Some(text) => leaf(w, name, text),
        None => Ok(()),
    }
}

fn flag(w: &mut XmlWriter, name: &str, value: bool) -> io::Result<()> {
    leaf(w, name, if value { "true" } else { "false" })
}

/// Builds envelopes carrying the configured partner credentials.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    config: &'a SymantecConfig,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(config: &'a SymantecConfig) -> Self {
        Self { config }
    }

    pub fn quick_order(&self, params: &OrderParameters) -> SymantecResult<Envelope> {
        self.envelope(Operation::QuickOrder, |w| self.order_request(w, params))
    }

    pub fn validate_order_parameters(&self, params: &OrderParameters) -> SymantecResult<Envelope> {
        self.envelope(Operation::ValidateOrderParameters, |w| {
            self.order_request(w, params)
        })
    }

    pub fn modify_order(
        &self,
        partner_order_id: &str,
        product_code: ProductCode,
        operation: ModifyOperation,
    ) -> SymantecResult<Envelope> {
        self.envelope(Operation::ModifyOrder, |w| {
            self.order_header(w, Some(product_code), Some(partner_order_id), None)?;
            leaf(w, "ModifyOrderOperation", operation.as_str())
        })
    }

    pub fn reissue(&self, request: &ReissueRequest) -> SymantecResult<Envelope> {
        self.envelope(Operation::Reissue, |w| {
            self.order_header(
                w,
                Some(request.product_code),
                Some(&request.partner_order_id),
                None,
            )?;
            leaf(w, "ReissueEmail", &request.reissue_email)?;
            leaf(w, "CSR", &request.csr)
        })
    }

    pub fn change_approver_email(
        &self,
        partner_order_id: &str,
        approver_email: &str,
    ) -> SymantecResult<Envelope> {
        self.envelope(Operation::ChangeApproverEmail, |w| {
            self.order_header(w, None, Some(partner_order_id), None)?;
            leaf(w, "ApproverEmail", approver_email)
        })
    }

    pub fn resend_email(
        &self,
        partner_order_id: &str,
        email_type: ResendEmailType,
    ) -> SymantecResult<Envelope> {
        self.envelope(Operation::ResendEmail, |w| {
            self.order_header(w, None, Some(partner_order_id), None)?;
            leaf(w, "ResendEmailType", email_type.as_str())
        })
    }

    pub fn get_order_by_partner_order_id(
        &self,
        partner_order_id: &str,
        options: &OrderQueryOptions,
    ) -> SymantecResult<Envelope> {
        self.envelope(Operation::GetOrderByPartnerOrderID, |w| {
            self.query_header(w)?;
            leaf(w, "PartnerOrderID", partner_order_id)?;
            element(w, "OrderQueryOptions", |w| {
                for (name, value) in options.flags() {
                    flag(w, name, value)?;
                }
                Ok(())
            })
        })
    }

    pub fn get_orders_by_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> SymantecResult<Envelope> {
        self.date_range(Operation::GetOrdersByDateRange, from, to)
    }

    pub fn get_modified_orders(&self, from: NaiveDate, to: NaiveDate) -> SymantecResult<Envelope> {
        self.date_range(Operation::GetModifiedOrders, from, to)
    }

    pub fn get_quick_approver_list(&self, domain: &str) -> SymantecResult<Envelope> {
        self.envelope(Operation::GetQuickApproverList, |w| {
            self.query_header(w)?;
            leaf(w, "Domain", domain)
        })
    }

    fn date_range(
        &self,
        operation: Operation,
        from: NaiveDate,
        to: NaiveDate,
    ) -> SymantecResult<Envelope> {
        self.envelope(operation, |w| {
            self.query_header(w)?;
            leaf(w, "FromDate", &from.format(DATE_FORMAT).to_string())?;
            leaf(w, "ToDate", &to.format(DATE_FORMAT).to_string())
        })
    }

    fn envelope(
        &self,
        operation: Operation,
        request: impl FnOnce(&mut XmlWriter) -> io::Result<()>,
    ) -> SymantecResult<Envelope> {
        let serialization_failed = |e: io::Error| {
            SymantecError::request_failed(
                format!("Failed to serialize {operation} request"),
                Some(Box::new(e)),
            )
        };

        let mut w = Writer::new(Vec::new());
        w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(serialization_failed)?;
        w.create_element("soapenv:Envelope")
            .with_attribute(("xmlns:soapenv", SOAP_ENVELOPE_NAMESPACE))
            .write_inner_content(|w| {
                element(w, "soapenv:Body", |w| {
                    w.create_element(operation.name())
                        .with_attribute(("xmlns", operation.namespace()))
                        .write_inner_content(|w| element(w, "Request", request))?;
                    Ok(())
                })
            })
            .map_err(serialization_failed)?;

        let body = String::from_utf8(w.into_inner()).map_err(|e| {
            SymantecError::request_failed(
                format!("{operation} request is not valid UTF-8"),
                Some(Box::new(e)),
            )
        })?;

        Ok(Envelope { operation, body })
    }

    fn auth_token(&self, w: &mut XmlWriter) -> io::Result<()> {
        element(w, "AuthToken", |w| {
            leaf(w, "UserName", &self.config.username)?;
            leaf(w, "Password", &self.config.password)
        })
    }

    fn order_header(
        &self,
        w: &mut XmlWriter,
        product_code: Option<ProductCode>,
        partner_order_id: Option<&str>,
        validity_period: Option<u32>,
    ) -> io::Result<()> {
        element(w, "OrderRequestHeader", |w| {
            leaf(w, "PartnerCode", &self.config.partner_code)?;
            self.auth_token(w)?;
            optional_leaf(w, "ProductCode", product_code.map(|p| p.as_str()))?;
            optional_leaf(w, "PartnerOrderID", partner_order_id)?;
            optional_leaf(
                w,
                "ValidityPeriod",
                validity_period.map(|v| v.to_string()).as_deref(),
            )
        })
    }

    fn query_header(&self, w: &mut XmlWriter) -> io::Result<()> {
        element(w, "QueryRequestHeader", |w| {
            leaf(w, "PartnerCode", &self.config.partner_code)?;
            self.auth_token(w)
        })
    }

    fn order_request(&self, w: &mut XmlWriter, params: &OrderParameters) -> io::Result<()> {
        self.order_header(
            w,
            Some(params.product_code),
            Some(&params.partner_order_id),
            Some(params.validity_period),
        )?;

        let organization = &params.organization;
        element(w, "OrganizationInfo", |w| {
            leaf(w, "OrganizationName", &organization.organization_name)?;
            let address = &organization.address;
            element(w, "OrganizationAddress", |w| {
                leaf(w, "AddressLine1", &address.address_line1)?;
                optional_leaf(w, "AddressLine2", address.address_line2.as_deref())?;
                leaf(w, "City", &address.city)?;
                leaf(w, "Region", &address.region)?;
                leaf(w, "PostalCode", &address.postal_code)?;
                leaf(w, "Country", &address.country)?;
                leaf(w, "Phone", &address.phone)
            })
        })?;

        element(w, "OrderParameters", |w| {
            leaf(w, "CSR", &params.csr)?;
            optional_leaf(w, "DomainName", params.domain_name.as_deref())?;
            if let Some(renewal) = params.renewal_indicator {
                flag(w, "RenewalIndicator", renewal)?;
            }
            leaf(w, "ServerCount", &params.server_count.to_string())?;
            leaf(w, "ValidityPeriod", &params.validity_period.to_string())?;
            leaf(w, "WebServerType", &params.web_server_type)
        })?;

        contact(w, "AdminContact", &params.admin_contact)?;

        flag(w, "TechSameAsAdmin", params.tech_same_as_admin)?;
        if !params.tech_same_as_admin {
            if let Some(tech) = &params.tech_contact {
                contact(w, "TechContact", tech)?;
            }
        }

        flag(w, "BillSameAsTech", params.bill_same_as_tech)?;
        if !params.bill_same_as_tech {
            if let Some(billing) = &params.billing_contact {
                contact(w, "BillingContact", billing)?;
            }
        }

        leaf(w, "ApproverEmail", &params.approver_email)
    }
}

fn contact(w: &mut XmlWriter, name: &str, contact: &Contact) -> io::Result<()> {
    element(w, name, |w| {
        leaf(w, "FirstName", &contact.first_name)?;
        leaf(w, "LastName", &contact.last_name)?;
        leaf(w, "Phone", &contact.phone)?;
        leaf(w, "Email", &contact.email)?;
        leaf(w, "Title", &contact.title)?;
        optional_leaf(w, "OrganizationName", contact.organization_name.as_deref())?;
        leaf(w, "AddressLine1", &contact.address_line1)?;
        optional_leaf(w, "AddressLine2", contact.address_line2.as_deref())?;
        leaf(w, "City", &contact.city)?;
        leaf(w, "Region", &contact.region)?;
        leaf(w, "PostalCode", &contact.postal_code)?;
        leaf(w, "Country", &contact.country)
    })
}
