//! Client-side checks run before a submission leaves the browser. The server
//! re-checks field presence; email shape is only enforced here.

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    MissingRequiredField,
    InvalidEmailFormat,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredField => "Please fill in all required fields.",
            ValidationError::InvalidEmailFormat => "Please enter a valid email address.",
        }
    }
}

pub fn validate_contact_form(
    name: &str,
    email: &str,
    phone: &str,
    company: &str,
) -> Result<(), ValidationError> {
    if [name, email, phone, company]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(ValidationError::MissingRequiredField);
    }
    if !is_valid_email(email.trim()) {
        return Err(ValidationError::InvalidEmailFormat);
    }
    Ok(())
}

/// `local@domain.tld`: exactly one `@` with a non-empty local part, at least
/// one `.` after it with non-empty segments around it, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
