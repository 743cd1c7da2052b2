use serde::{Deserialize, Serialize};

/// One employee record. Field names are renamed to the column headers of the
/// backing file, which are a compatibility contract:
/// `ID,Name,Position,Salary,Email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Salary")]
    pub salary: f64,
    #[serde(rename = "Email")]
    pub email: String,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: position.into(),
            salary,
            email: email.into(),
        }
    }
}

/// Minimal address shape: `local-part@domain.tld`. At least one `@`, a
/// non-empty part before it, and at least one `.` after it with non-empty
/// segments on both sides of the last dot.
pub fn email_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Parse a raw salary string. Accepts any finite, non-negative decimal
/// number; everything else (including negatives) is rejected.
pub fn parse_salary(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert!(email_is_valid("ann@co.com"));
        assert!(email_is_valid("a.b@mail.example.org"));
    }

    #[test]
    fn rejects_missing_at_or_dot() {
        assert!(!email_is_valid("not-an-email"));
        assert!(!email_is_valid("ann@company"));
        assert!(!email_is_valid("ann.co.com"));
    }

    #[test]
    fn rejects_empty_segments() {
        assert!(!email_is_valid("@co.com"));
        assert!(!email_is_valid("ann@.com"));
        assert!(!email_is_valid("ann@co."));
    }

    #[test]
    fn second_at_lands_in_the_domain() {
        // Only the first @ splits local from domain; the rest just needs a dot.
        assert!(email_is_valid("a@b@co.com"));
    }

    #[test]
    fn parses_plain_and_decimal_salaries() {
        assert_eq!(parse_salary("75000"), Some(75000.0));
        assert_eq!(parse_salary(" 82000.50 "), Some(82000.5));
        assert_eq!(parse_salary("0"), Some(0.0));
    }

    #[test]
    fn rejects_non_numeric_and_negative_salaries() {
        assert_eq!(parse_salary("lots"), None);
        assert_eq!(parse_salary(""), None);
        assert_eq!(parse_salary("-5"), None);
        assert_eq!(parse_salary("NaN"), None);
        assert_eq!(parse_salary("inf"), None);
    }
}
