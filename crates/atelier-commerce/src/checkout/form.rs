//! Checkout form and its validation.

use serde::{Deserialize, Serialize};

use crate::checkout::{PaymentMethod, Wallet};
use crate::validation::FieldErrors;

/// Contact, shipping and payment details entered at checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub payment_method: PaymentMethod,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub upi_id: String,
    pub wallet: Option<Wallet>,
}

impl CheckoutForm {
    /// Check required fields.
    ///
    /// Contact and shipping fields are always required; payment fields only
    /// for the selected method.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.require("email", &self.email, "Email is required");
        errors.require("first_name", &self.first_name, "First name is required");
        errors.require("last_name", &self.last_name, "Last name is required");
        errors.require("address", &self.address, "Address is required");
        errors.require("city", &self.city, "City is required");
        errors.require("zip", &self.zip, "ZIP code is required");

        match self.payment_method {
            PaymentMethod::Card => {
                errors.require("card_number", &self.card_number, "Card number is required");
                if self.expiry.is_empty() {
                    errors.add("expiry", "Expiry date is required");
                }
                if self.cvv.is_empty() {
                    errors.add("cvv", "CVV is required");
                }
            }
            PaymentMethod::Upi => {
                errors.require("upi_id", &self.upi_id, "UPI ID is required");
            }
            PaymentMethod::Wallet => {
                if self.wallet.is_none() {
                    errors.add("wallet", "Please select a wallet");
                }
            }
        }

        errors.into_result()
    }

    /// Customer name for the confirmation.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CheckoutForm {
        CheckoutForm {
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            address: "12 Analytical Row".into(),
            city: "London".into(),
            zip: "N1 9GU".into(),
            payment_method: PaymentMethod::Card,
            card_number: "4242 4242 4242 4242".into(),
            expiry: "12/28".into(),
            cvv: "123".into(),
            ..CheckoutForm::default()
        }
    }

    #[test]
    fn test_complete_card_form_is_valid() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_empty_form_reports_contact_and_card_fields() {
        let errors = CheckoutForm::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "email",
                "first_name",
                "last_name",
                "address",
                "city",
                "zip",
                "card_number",
                "expiry",
                "cvv"
            ]
        );
        assert_eq!(errors.get("zip"), Some("ZIP code is required"));
    }

    #[test]
    fn test_whitespace_card_number_is_missing() {
        let mut form = filled();
        form.card_number = "    ".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("card_number"), Some("Card number is required"));
    }

    #[test]
    fn test_upi_ignores_card_fields() {
        let mut form = filled();
        form.payment_method = PaymentMethod::Upi;
        form.card_number.clear();
        form.cvv.clear();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("upi_id"), Some("UPI ID is required"));

        form.upi_id = "ada@upi".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_wallet_requires_selection() {
        let mut form = filled();
        form.payment_method = PaymentMethod::Wallet;
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("wallet"), Some("Please select a wallet"));

        form.wallet = Some(Wallet::ApplePay);
        assert!(form.validate().is_ok());
    }
}
