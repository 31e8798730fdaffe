//! Payment options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CommerceError;

/// Longest formatted card number: 16 digits plus 3 separators.
const CARD_DISPLAY_MAX: usize = 19;

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Credit or debit card.
    #[default]
    Card,
    /// UPI virtual payment address.
    Upi,
    /// Third-party wallet.
    Wallet,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Wallet => "wallet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Wallet => "Wallet",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "upi" => Ok(PaymentMethod::Upi),
            "wallet" => Ok(PaymentMethod::Wallet),
            _ => Err(CommerceError::UnknownPaymentOption(s.to_string())),
        }
    }
}

/// Supported wallets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wallet {
    PayPal,
    ApplePay,
    GooglePay,
}

impl Wallet {
    pub const ALL: [Wallet; 3] = [Wallet::PayPal, Wallet::ApplePay, Wallet::GooglePay];

    pub fn as_str(&self) -> &'static str {
        match self {
            Wallet::PayPal => "paypal",
            Wallet::ApplePay => "applepay",
            Wallet::GooglePay => "googlepay",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Wallet::PayPal => "PayPal",
            Wallet::ApplePay => "Apple Pay",
            Wallet::GooglePay => "Google Pay",
        }
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Wallet {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        Wallet::ALL
            .into_iter()
            .find(|w| w.as_str() == wanted)
            .ok_or_else(|| CommerceError::UnknownPaymentOption(s.to_string()))
    }
}

/// Group card digits in fours for display, e.g. "4242 4242 4242 4242".
///
/// Existing whitespace is dropped first. A space follows every run of four
/// consecutive ASCII digits; other characters pass through and restart the
/// run. The result is capped at 19 characters.
pub fn format_card_number(input: &str) -> String {
    let mut grouped = String::with_capacity(input.len() + 4);
    let mut run = 0;
    for c in input.chars().filter(|c| !c.is_whitespace()) {
        grouped.push(c);
        if c.is_ascii_digit() {
            run += 1;
            if run == 4 {
                grouped.push(' ');
                run = 0;
            }
        } else {
            run = 0;
        }
    }
    grouped.trim_end().chars().take(CARD_DISPLAY_MAX).collect()
}
