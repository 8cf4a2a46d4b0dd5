//! Registration form validation
//!
//! All rules run at submit time. Within a field the rules are checked in
//! order and the first failure wins; across fields every field reports its
//! own message.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Characters accepted as the "special character" of a password.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*";

const USERNAME_MIN_LEN: usize = 3;
const USERNAME_MAX_LEN: usize = 20;
const PASSWORD_MIN_LEN: usize = 8;

/// Values collected by the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Field-level validation messages for the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationErrors {
    pub email: Option<&'static str>,
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl RegistrationErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

pub fn validate_email(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Email is required!");
    }
    if !EMAIL_REGEX.is_match(value) {
        return Err("Please enter a valid email address!");
    }
    Ok(())
}

pub fn validate_username(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Username is required.");
    }
    if value.chars().count() < USERNAME_MIN_LEN {
        return Err("Username must be at least 3 characters long.");
    }
    if value.chars().count() > USERNAME_MAX_LEN {
        return Err("Username cannot exceed 20 characters.");
    }
    if !USERNAME_REGEX.is_match(value) {
        return Err("Username can only contain letters, numbers, underscores, and hyphens!");
    }
    Ok(())
}

/// Composite password policy. Rules are independent; the first failing
/// rule's message is returned.
pub fn validate_password(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Password is required.");
    }
    if value.chars().count() < PASSWORD_MIN_LEN {
        return Err("Password must be at least 8 characters long");
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one number");
    }
    if !value.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        return Err("Password must contain at least one special character (!@#$%^&*)");
    }
    Ok(())
}

/// Validate the whole form. The confirm-password equality check only runs
/// once the password itself is valid.
pub fn validate_registration(input: &RegistrationInput) -> Result<(), RegistrationErrors> {
    let password_result = validate_password(&input.password);

    let confirm_password = if input.confirm_password.is_empty() {
        Some("Please confirm your password.")
    } else if password_result.is_ok() && input.confirm_password != input.password {
        Some("The two passwords do not match.")
    } else {
        None
    };

    let errors = RegistrationErrors {
        email: validate_email(&input.email).err(),
        username: validate_username(&input.username).err(),
        password: password_result.err(),
        confirm_password,
    };

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RegistrationInput {
        RegistrationInput {
            email: "user@example.com".to_string(),
            username: "user_name-1".to_string(),
            password: "Passw0rd!".to_string(),
            confirm_password: "Passw0rd!".to_string(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert_eq!(validate_registration(&valid_input()), Ok(()));
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user.name+tag@sub.example.co").is_ok());
        assert_eq!(validate_email(""), Err("Email is required!"));
        assert_eq!(
            validate_email("not-an-email"),
            Err("Please enter a valid email address!")
        );
        assert_eq!(
            validate_email("user@example"),
            Err("Please enter a valid email address!")
        );
        assert_eq!(
            validate_email("user@@example.com"),
            Err("Please enter a valid email address!")
        );
    }

    #[test]
    fn test_username_length_bounds() {
        assert_eq!(
            validate_username("ab"),
            Err("Username must be at least 3 characters long.")
        );
        assert!(validate_username("abc").is_ok());
        assert!(validate_username(&"a".repeat(20)).is_ok());
        assert_eq!(
            validate_username(&"a".repeat(21)),
            Err("Username cannot exceed 20 characters.")
        );
        assert_eq!(validate_username(""), Err("Username is required."));
    }

    #[test]
    fn test_username_charset() {
        assert!(validate_username("user_name-1").is_ok());
        assert_eq!(
            validate_username("bad name"),
            Err("Username can only contain letters, numbers, underscores, and hyphens!")
        );
        assert_eq!(
            validate_username("bad!name"),
            Err("Username can only contain letters, numbers, underscores, and hyphens!")
        );
    }

    #[test]
    fn test_password_policy_conjunction() {
        // Passes iff length >= 8 and all four character classes are present.
        assert!(validate_password("Passw0rd!").is_ok());
        assert!(validate_password("Aa1!aaaa").is_ok());

        assert!(validate_password("Aa1!aaa").is_err()); // 7 chars
        assert!(validate_password("aa1!aaaa").is_err()); // no uppercase
        assert!(validate_password("AA1!AAAA").is_err()); // no lowercase
        assert!(validate_password("Aaa!aaaa").is_err()); // no digit
        assert!(validate_password("Aa1aaaaa").is_err()); // no special
    }

    #[test]
    fn test_password_first_failing_rule_wins() {
        assert_eq!(validate_password(""), Err("Password is required."));
        // Too short *and* missing classes: the length message surfaces.
        assert_eq!(
            validate_password("a1!"),
            Err("Password must be at least 8 characters long")
        );
        // Long enough, missing uppercase and digit: uppercase comes first.
        assert_eq!(
            validate_password("aaaa!aaaa"),
            Err("Password must contain at least one uppercase letter")
        );
        assert_eq!(
            validate_password("AAAA!AAAA"),
            Err("Password must contain at least one lowercase letter")
        );
        assert_eq!(
            validate_password("Aaaa!aaaa"),
            Err("Password must contain at least one number")
        );
        assert_eq!(
            validate_password("Aaaa1aaaa"),
            Err("Password must contain at least one special character (!@#$%^&*)")
        );
    }

    #[test]
    fn test_confirm_password_must_match() {
        let mut input = valid_input();
        input.confirm_password = "Passw0rd?".to_string();

        let errors = validate_registration(&input).unwrap_err();
        assert_eq!(
            errors.confirm_password,
            Some("The two passwords do not match.")
        );
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_confirm_password_required() {
        let mut input = valid_input();
        input.confirm_password = String::new();

        let errors = validate_registration(&input).unwrap_err();
        assert_eq!(errors.confirm_password, Some("Please confirm your password."));
    }

    #[test]
    fn test_mismatch_not_reported_while_password_invalid() {
        let mut input = valid_input();
        input.password = "short".to_string();
        input.confirm_password = "different".to_string();

        let errors = validate_registration(&input).unwrap_err();
        assert!(errors.password.is_some());
        assert!(errors.confirm_password.is_none());
    }

    #[test]
    fn test_all_fields_report_independently() {
        let input = RegistrationInput::default();
        let errors = validate_registration(&input).unwrap_err();

        assert_eq!(errors.email, Some("Email is required!"));
        assert_eq!(errors.username, Some("Username is required."));
        assert_eq!(errors.password, Some("Password is required."));
        assert_eq!(errors.confirm_password, Some("Please confirm your password."));
    }
}
