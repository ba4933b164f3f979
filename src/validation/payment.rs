//! Checks for the payment form.

use super::{all, ensure, Checked, ValidationError};
use crate::wizard::PaymentDetails;

const MIN_PHONE_DIGITS: usize = 7;

/// Validate a payment submission, reporting every problem found.
pub fn check_payment(details: &PaymentDetails) -> Checked<()> {
    let customer = &details.customer;
    let mut checks = vec![
        ensure(
            !customer.name.trim().is_empty(),
            ValidationError::MissingField("name"),
        ),
        ensure(
            !customer.address.trim().is_empty(),
            ValidationError::MissingField("address"),
        ),
    ];

    if customer.email.trim().is_empty() {
        checks.push(ensure(false, ValidationError::MissingField("email")));
    } else {
        checks.push(check_email(&customer.email));
    }

    if customer.phone.trim().is_empty() {
        checks.push(ensure(false, ValidationError::MissingField("phone")));
    } else {
        checks.push(check_phone(&customer.phone));
    }

    all(checks)
}

/// `local@domain.tld`, with no whitespace.
pub fn check_email(email: &str) -> Checked<()> {
    let email = email.trim();
    let well_formed = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    ensure(well_formed, ValidationError::InvalidEmail(email.to_string()))
}

/// Digits with optional `+`, spaces and dashes; at least seven digits.
pub fn check_phone(phone: &str) -> Checked<()> {
    let phone = phone.trim();
    let allowed = phone
        .chars()
        .enumerate()
        .all(|(i, c)| c.is_ascii_digit() || c == ' ' || c == '-' || (c == '+' && i == 0));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    ensure(
        allowed && digits >= MIN_PHONE_DIGITS,
        ValidationError::InvalidPhone(phone.to_string()),
    )
}
