use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating Philippine mobile contact numbers
    /// Accepts the local 0-prefixed form and the +63 international form
    /// - Valid: "09171234567", "+639171234567"
    /// - Invalid: "9171234567", "0917123456", "02-1234567"
    pub static ref CONTACT_NUMBER_REGEX: Regex = Regex::new(r"^(?:\+63|0)9\d{9}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_number_regex_valid() {
        assert!(CONTACT_NUMBER_REGEX.is_match("09171234567"));
        assert!(CONTACT_NUMBER_REGEX.is_match("+639171234567"));
        assert!(CONTACT_NUMBER_REGEX.is_match("09998887777"));
    }

    #[test]
    fn test_contact_number_regex_invalid() {
        assert!(!CONTACT_NUMBER_REGEX.is_match("9171234567")); // missing prefix
        assert!(!CONTACT_NUMBER_REGEX.is_match("0917123456")); // too short
        assert!(!CONTACT_NUMBER_REGEX.is_match("091712345678")); // too long
        assert!(!CONTACT_NUMBER_REGEX.is_match("+449171234567")); // wrong country code
        assert!(!CONTACT_NUMBER_REGEX.is_match("02-1234567")); // landline
        assert!(!CONTACT_NUMBER_REGEX.is_match("")); // empty
    }
}
