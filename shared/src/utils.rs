//! # Shared Utility Functions
//!
//! Display helpers used when showing or logging account identifiers.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::mask_account_number;
//!
//! assert_eq!(mask_account_number("0123456789", 4), "******6789");
//! ```

/// Mask all but the last `visible` characters of an account number.
///
/// Values no longer than `visible` are returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_account_number;
///
/// assert_eq!(mask_account_number("0123456789", 4), "******6789");
/// assert_eq!(mask_account_number("12", 4), "12");
/// ```
pub fn mask_account_number(value: &str, visible: usize) -> String {
    let len = value.chars().count();
    if len <= visible {
        return value.to_string();
    }

    let hidden = len - visible;
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { '*' } else { c })
        .collect()
}

/// Mask with the default of four visible characters.
pub fn mask(value: &str) -> String {
    mask_account_number(value, 4)
}
