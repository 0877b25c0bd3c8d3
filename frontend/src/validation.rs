use validator::ValidateEmail;

/// One declarative rule: a field name, a predicate over the whole form
/// snapshot, and the failure message the predicate returns.
pub struct FieldRule<T> {
    pub field: &'static str,
    pub check: fn(&T) -> Result<(), String>,
}

/// Outcome of evaluating a rule set against a form snapshot. Holds the
/// failure message per field, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    errors: Vec<(&'static str, String)>,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn failed_fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(|(name, _)| *name).collect()
    }
}

/// Runs every rule independently; a failing rule never short-circuits the
/// rules after it.
pub fn evaluate<T>(rules: &[FieldRule<T>], values: &T) -> Verdict {
    let mut errors = Vec::new();
    for rule in rules {
        if let Err(message) = (rule.check)(values) {
            errors.push((rule.field, message));
        }
    }
    Verdict { errors }
}

pub fn is_valid_email(value: &str) -> bool {
    value.validate_email()
}

/// Brazilian national phone shape: DDD plus an 8-digit landline or a
/// 9-digit mobile starting with 9. Mask characters are ignored.
pub fn is_valid_br_phone(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 10 && digits.len() != 11 {
        return false;
    }
    let bytes = digits.as_bytes();
    // DDD ranges from 11 to 99; neither digit may be zero.
    if bytes[0] == b'0' || bytes[1] == b'0' {
        return false;
    }
    if digits.len() == 11 && bytes[2] != b'9' {
        return false;
    }
    true
}
