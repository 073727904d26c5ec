//! Card details collected by the payment form.

use super::error::CheckoutError;

/// Card fields as typed by the shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentDetails {
    pub card_number: String,
    pub card_holder: String,
    /// `MM/AA` as typed; not parsed.
    pub expiry: String,
    pub cvv: String,
}

impl PaymentDetails {
    /// Completeness check: every field must be non-blank.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let missing: Vec<&'static str> = [
            ("card_number", &self.card_number),
            ("card_holder", &self.card_holder),
            ("expiry", &self.expiry),
            ("cvv", &self.cvv),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CheckoutError::MissingFields(missing))
        }
    }

    /// Last four digits of the card number, ignoring spaces and dashes.
    pub fn last4(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(char::is_ascii_digit).collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].iter().collect()
    }
}
