//! Response envelope parsing
//!
//! Turns vendor SOAP responses into typed records. Two kinds of vendor fault
//! are recognized, both surfaced as [`SymantecError::ApiFault`]:
//!
//! 1. A SOAP `Fault` element in the body (`faultstring` is the message)
//! 2. A negative `SuccessCode` in the order/query response header (the
//!    `ErrorMessage` of each reported error is the message)

use crate::error::{SymantecError, SymantecResult};
use crate::logging::log_debug;
use crate::models::{Approver, OrderDetail, OrderInfo, OrderResponse, OrderValidation};
use crate::soap::Operation;
use crate::xml::{self, Element};

use serde::de::DeserializeOwned;
use serde_json::Value;

const RESPONSE_HEADERS: [&str; 2] = ["OrderResponseHeader", "QueryResponseHeader"];

/// Response parser for partner API envelopes
pub struct ResponseParser;

impl ResponseParser {
    /// Parse an envelope and return its `<Operation>Result` element.
    ///
    /// Fails with [`SymantecError::ApiFault`] when the vendor reported a
    /// fault, and with [`SymantecError::ResponseParsingError`] when the
    /// envelope does not have the expected shape.
    pub fn parse_result(operation: Operation, raw: &str) -> SymantecResult<Element> {
        log_debug!(
            operation = %operation,
            content_length = raw.len(),
            "Parsing partner API response"
        );

        let body = Self::parse_body(raw)?;
        Self::check_soap_fault(operation, &body)?;

        let response_name = operation.response_element();
        let result_name = operation.result_element();
        let result = body
            .descendant(&[response_name.as_str(), result_name.as_str()])
            .cloned()
            .ok_or_else(|| {
                SymantecError::response_parsing_error(format!(
                    "{operation} response is missing {result_name}"
                ))
            })?;

        Self::check_header(operation, &result)?;
        Ok(result)
    }

    /// Extract the vendor fault from an envelope, if it contains one.
    ///
    /// Used for non-2xx HTTP responses, which carry SOAP faults.
    pub fn fault_in(operation: Operation, raw: &str) -> Option<SymantecError> {
        let body = Self::parse_body(raw).ok()?;
        Self::check_soap_fault(operation, &body).err()
    }

    pub fn order_response(result: &Element) -> SymantecResult<OrderResponse> {
        let geotrust_order_id = result.child_text("GeoTrustOrderID").ok_or_else(|| {
            SymantecError::response_parsing_error("Order response is missing GeoTrustOrderID")
        })?;
        let partner_order_id = Self::header(result)
            .and_then(|header| header.child_text("PartnerOrderID"))
            .or_else(|| result.child_text("PartnerOrderID"))
            .ok_or_else(|| {
                SymantecError::response_parsing_error("Order response is missing PartnerOrderID")
            })?;

        Ok(OrderResponse {
            geotrust_order_id,
            partner_order_id,
        })
    }

    pub fn order_detail(result: &Element) -> SymantecResult<OrderDetail> {
        let detail = result.child("OrderDetail").ok_or_else(|| {
            SymantecError::response_parsing_error("Order lookup response is missing OrderDetail")
        })?;
        Self::decode(detail.to_value())
    }

    /// Order summaries (`OrderInfo` of each listed order), in vendor order.
    pub fn order_summaries(result: &Element) -> SymantecResult<Vec<OrderInfo>> {
        Self::order_details(result)
            .map(|detail| {
                let info = detail.child("OrderInfo").ok_or_else(|| {
                    SymantecError::response_parsing_error("Listed order is missing OrderInfo")
                })?;
                Self::decode(info.to_value())
            })
            .collect()
    }

    pub fn modified_orders(result: &Element) -> SymantecResult<Vec<OrderDetail>> {
        Self::order_details(result)
            .map(|detail| Self::decode(detail.to_value()))
            .collect()
    }

    pub fn approvers(result: &Element) -> SymantecResult<Vec<Approver>> {
        let Some(list) = result.child("ApproverList") else {
            return Ok(Vec::new());
        };
        list.child_elements()
            .map(|approver| Self::decode(approver.to_value()))
            .collect()
    }

    pub fn validation(result: &Element) -> SymantecResult<OrderValidation> {
        let mut value = result.to_value();
        if let Value::Object(map) = &mut value {
            for header in RESPONSE_HEADERS {
                map.remove(header);
            }
        }
        Self::decode(value)
    }

    fn parse_body(raw: &str) -> SymantecResult<Element> {
        let document = xml::parse(raw)?;
        let root = document.root_element;
        if root.name != "Envelope" {
            return Err(SymantecError::response_parsing_error(format!(
                "Expected a SOAP Envelope, found <{}>",
                root.name
            )));
        }
        root.child("Body").cloned().ok_or_else(|| {
            SymantecError::response_parsing_error("SOAP Envelope is missing its Body")
        })
    }

    fn check_soap_fault(operation: Operation, body: &Element) -> SymantecResult<()> {
        let Some(fault) = body.child("Fault") else {
            return Ok(());
        };

        // SOAP 1.1 uses faultstring, SOAP 1.2 uses Reason/Text
        let message = fault
            .child_text("faultstring")
            .or_else(|| fault.descendant(&["Reason", "Text"]).map(Element::text))
            .unwrap_or_else(|| "Unknown SOAP fault".to_string());

        Err(SymantecError::api_fault(operation.name(), message))
    }

    fn header(result: &Element) -> Option<&Element> {
        RESPONSE_HEADERS.iter().find_map(|name| result.child(name))
    }

    fn check_header(operation: Operation, result: &Element) -> SymantecResult<()> {
        let Some(header) = Self::header(result) else {
            return Ok(());
        };
        let Some(code) = header.child_text("SuccessCode") else {
            return Ok(());
        };
        let code: i64 = code.trim().parse().map_err(|_| {
            SymantecError::response_parsing_error(format!(
                "{operation} response has a non-numeric SuccessCode '{code}'"
            ))
        })?;

        if code >= 0 {
            return Ok(());
        }

        let messages: Vec<String> = header
            .child("Errors")
            .into_iter()
            .flat_map(Element::child_elements)
            .filter_map(|error| error.child_text("ErrorMessage"))
            .filter(|message| !message.is_empty())
            .collect();

        let message = if messages.is_empty() {
            format!("SuccessCode {code}")
        } else {
            messages.join("; ")
        };

        Err(SymantecError::api_fault(operation.name(), message))
    }

    fn order_details(result: &Element) -> impl Iterator<Item = &Element> {
        result
            .child("OrderDetails")
            .into_iter()
            .flat_map(Element::child_elements)
    }

    fn decode<T: DeserializeOwned>(value: Value) -> SymantecResult<T> {
        serde_json::from_value(value).map_err(|e| {
            SymantecError::response_parsing_error(format!("Unexpected response structure: {e}"))
        })
    }
}
