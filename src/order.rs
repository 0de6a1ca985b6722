//! Closed vendor vocabularies.
//!
//! Only codes the vendor accepts are representable. Parsing any other string
//! fails locally with [`UnknownCode`] instead of being sent to the vendor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A string that is not part of a vendor vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{code}' is not a recognized {vocabulary} code")]
pub struct UnknownCode {
    pub vocabulary: &'static str,
    pub code: String,
}

macro_rules! vendor_codes {
    (
        $(#[$meta:meta])*
        $name:ident, $vocabulary:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Every code in the vocabulary, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The exact string the vendor expects on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok($name::$variant),)+
                    _ => Err(UnknownCode {
                        vocabulary: $vocabulary,
                        code: s.to_string(),
                    }),
                }
            }
        }
    };
}

vendor_codes! {
    /// Certificate products orderable through the partner API.
    ProductCode, "product" {
        QuickSSLPremium => "QuickSSLPremium",
        QuickSSLPremiumMD => "QuickSSLPremiumMD",
        RapidSSL => "RapidSSL",
        RapidSSLWildcard => "RapidSSLWildcard",
        FreeSSL => "FreeSSL",
        SSL123 => "SSL123",
        SSLWebServer => "SSLWebServer",
        SSLWebServerEV => "SSLWebServerEV",
        SSLWebServerWildcard => "SSLWebServerWildcard",
        SecureSite => "SecureSite",
        SecureSitePro => "SecureSitePro",
        SecureSiteEV => "SecureSiteEV",
        SecureSiteProEV => "SecureSiteProEV",
        TrueBizID => "TrueBizID",
        TrueBizIDEV => "TrueBizIDEV",
        TrueBizIDMD => "TrueBizIDMD",
        TrueBizIDMDEV => "TrueBizIDMDEV",
        TrueBizIDWildcard => "TrueBizIDWildcard",
        SGCSuperCerts => "SGCSuperCerts",
    }
}

vendor_codes! {
    /// Operations accepted by `ModifyOrder`.
    ModifyOperation, "modify operation" {
        Approve => "APPROVE",
        ApproveEssl => "APPROVE_ESSL",
        Reject => "REJECT",
        Cancel => "CANCEL",
        Deactivate => "DEACTIVATE",
        RequestOnDemandScan => "REQUEST_ON_DEMAND_SCAN",
        RequestVulnerabilityScan => "REQUEST_VULNERABILITY_SCAN",
        UpdateSealPreferences => "UPDATE_SEAL_PREFERENCES",
        UpdatePostStatus => "UPDATE_POST_STATUS",
        /// Sandbox only: forces the order into its next state.
        PushState => "PUSH_ORDER_STATE",
    }
}

vendor_codes! {
    /// Emails the vendor can be asked to send again.
    ResendEmailType, "resend email" {
        ApproverEmail => "ApproverEmail",
        PickUpEmail => "PickUpEmail",
        FulfillmentEmail => "FulfillmentEmail",
    }
}
