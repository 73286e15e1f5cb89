//! Client-side form validation.
//!
//! Each field reports only its first failing rule. Errors never reach the
//! network layer: forms stay unsubmittable until every field passes.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const TITLE_MIN: usize = 5;
pub const TITLE_MAX: usize = 200;
pub const CONTENT_MIN: usize = 50;
pub const CONTENT_MAX: usize = 10_000;
const PASSWORD_MIN: usize = 8;
const NAME_MIN: usize = 2;

pub type FieldError = Option<&'static str>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignInErrors {
    pub email: FieldError,
    pub password: FieldError,
}

impl SignInErrors {
    pub fn is_valid(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SignUpErrors {
    pub name: FieldError,
    pub email: FieldError,
    pub password: FieldError,
    pub confirm_password: FieldError,
}

impl SignUpErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DraftErrors {
    pub title: FieldError,
    pub content: FieldError,
}

impl DraftErrors {
    pub fn is_valid(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

pub fn validate_sign_in(email: &str, password: &str) -> SignInErrors {
    SignInErrors { email: check_email(email), password: check_password(password) }
}

pub fn validate_sign_up(name: &str, email: &str, password: &str, confirm_password: &str) -> SignUpErrors {
    SignUpErrors {
        name: check_name(name),
        email: check_email(email),
        password: check_password(password),
        confirm_password: check_confirm_password(password, confirm_password),
    }
}

pub fn validate_draft(title: &str, content: &str) -> DraftErrors {
    DraftErrors { title: check_title(title), content: check_content(content) }
}

/// The error to display for a field: only once the user has left it.
pub fn visible_error(touched: bool, error: FieldError) -> FieldError {
    if touched { error } else { None }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn check_email(email: &str) -> FieldError {
    if is_email(email) { None } else { Some("Invalid email format") }
}

/// `local@domain.tld` with no whitespace and a dot inside the domain.
fn is_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !host.starts_with('.') && tld.chars().count() >= 2
}

fn check_password(password: &str) -> FieldError {
    if char_len(password) < PASSWORD_MIN {
        Some("Password must be at least 8 characters")
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        Some("Password must contain at least one uppercase letter")
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some("Password must contain at least one number")
    } else if !password.chars().any(|c| c == '_' || !c.is_ascii_alphanumeric()) {
        Some("Password must contain at least one special character")
    } else {
        None
    }
}

fn check_name(name: &str) -> FieldError {
    if char_len(name) < NAME_MIN {
        Some("Name must be at least 2 characters")
    } else if !name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
        Some("Name should not contain numbers or special characters")
    } else {
        None
    }
}

fn check_confirm_password(password: &str, confirm_password: &str) -> FieldError {
    if char_len(confirm_password) < PASSWORD_MIN {
        Some("Confirm Password must be at least 8 characters")
    } else if password != confirm_password {
        Some("Passwords must match")
    } else {
        None
    }
}

fn check_title(title: &str) -> FieldError {
    let len = char_len(title.trim());
    if len == 0 {
        Some("Please enter article title")
    } else if len < TITLE_MIN {
        Some("Title must be at least 5 characters")
    } else if len > TITLE_MAX {
        Some("Title must not exceed 200 characters")
    } else {
        None
    }
}

fn check_content(content: &str) -> FieldError {
    let len = char_len(content.trim());
    if len == 0 {
        Some("Please enter article content")
    } else if len < CONTENT_MIN {
        Some("Content must be at least 50 characters")
    } else if len > CONTENT_MAX {
        Some("Content must not exceed 10000 characters")
    } else {
        None
    }
}
