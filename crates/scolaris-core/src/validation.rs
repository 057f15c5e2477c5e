//! Declarative form validation.
//!
//! Field-level validators plus a form-level state manager. Failures are
//! inline message strings surfaced next to the field; they never escape as
//! errors. Messages are French, matching the deployment language.

use std::collections::HashMap;
use std::fmt;

/// Validation result for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Validation passed.
    Valid,
    /// Validation failed with an error message.
    Invalid(String),
}

impl ValidationResult {
    /// Check if validation passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Get the error message if invalid.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Invalid(msg) => Some(msg),
            Self::Valid => None,
        }
    }
}

/// A validator over a string-typed form value.
pub trait Validator: Send + Sync {
    /// Validate the given value.
    fn validate(&self, value: &str) -> ValidationResult;

    /// Validator name, for debugging.
    fn name(&self) -> &str;
}

/// Required field validator.
#[derive(Debug, Clone)]
pub struct Required {
    message: String,
}

impl Required {
    /// Create with a field-specific message.
    #[must_use]
    pub fn with_message(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::with_message("Ce champ est obligatoire")
    }
}

impl Validator for Required {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.trim().is_empty() {
            ValidationResult::Invalid(self.message.clone())
        } else {
            ValidationResult::Valid
        }
    }

    fn name(&self) -> &'static str {
        "required"
    }
}

/// Minimum length validator. Skips empty values (those belong to `Required`).
#[derive(Debug, Clone)]
pub struct MinLength {
    min: usize,
    message: String,
}

impl MinLength {
    /// Create a min length validator.
    #[must_use]
    pub fn new(min: usize, message: &str) -> Self {
        Self {
            min,
            message: message.to_string(),
        }
    }
}

impl Validator for MinLength {
    fn validate(&self, value: &str) -> ValidationResult {
        if !value.is_empty() && value.chars().count() < self.min {
            ValidationResult::Invalid(self.message.clone())
        } else {
            ValidationResult::Valid
        }
    }

    fn name(&self) -> &'static str {
        "minLength"
    }
}

/// Email shape validator: one `@`, non-empty local part, dotted domain.
#[derive(Debug, Clone)]
pub struct Email {
    message: String,
}

impl Default for Email {
    fn default() -> Self {
        Self {
            message: "Adresse email invalide".to_string(),
        }
    }
}

impl Email {
    /// Create with the default French message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for Email {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.is_empty() {
            return ValidationResult::Valid;
        }
        let mut parts = value.split('@');
        let well_formed = matches!((parts.next(), parts.next(), parts.next()), (Some(local), Some(domain), None)
            if !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.'));
        if well_formed {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(self.message.clone())
        }
    }

    fn name(&self) -> &'static str {
        "email"
    }
}

/// Positive amount validator (amount must parse and exceed zero).
#[derive(Debug, Clone)]
pub struct PositiveAmount {
    message: String,
}

impl Default for PositiveAmount {
    fn default() -> Self {
        Self {
            message: "Le montant doit être supérieur à 0".to_string(),
        }
    }
}

impl PositiveAmount {
    /// Create with a field-specific message.
    #[must_use]
    pub fn with_message(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Validator for PositiveAmount {
    fn validate(&self, value: &str) -> ValidationResult {
        match value.trim().parse::<u64>() {
            Ok(n) if n > 0 => ValidationResult::Valid,
            _ => ValidationResult::Invalid(self.message.clone()),
        }
    }

    fn name(&self) -> &'static str {
        "positiveAmount"
    }
}

/// Validators attached to one named field.
#[derive(Default)]
pub struct FieldConfig {
    validators: Vec<Box<dyn Validator>>,
}

impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field("validator_count", &self.validators.len())
            .finish()
    }
}

impl FieldConfig {
    /// Create an empty config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validator.
    #[must_use]
    pub fn add<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Require the field with a custom message.
    #[must_use]
    pub fn required(self, message: &str) -> Self {
        self.add(Required::with_message(message))
    }

    /// Run all validators, collecting error messages.
    #[must_use]
    pub fn validate(&self, value: &str) -> Vec<String> {
        self.validators
            .iter()
            .filter_map(|v| v.validate(value).error().map(str::to_string))
            .collect()
    }
}

/// Cross-field rule: inspects all values, may fail one target field.
type FormRule = Box<dyn Fn(&HashMap<String, String>) -> Option<(String, String)> + Send + Sync>;

/// Form-level validation state manager.
#[derive(Default)]
pub struct FormValidator {
    configs: Vec<(String, FieldConfig)>,
    rules: Vec<FormRule>,
    values: HashMap<String, String>,
}

impl fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValidator")
            .field("fields", &self.configs.len())
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl FormValidator {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field with its validators.
    #[must_use]
    pub fn field(mut self, name: &str, config: FieldConfig) -> Self {
        self.values.insert(name.to_string(), String::new());
        self.configs.push((name.to_string(), config));
        self
    }

    /// Register a cross-field rule.
    #[must_use]
    pub fn rule<F>(mut self, rule: F) -> Self
    where
        F: Fn(&HashMap<String, String>) -> Option<(String, String)> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Set a field's current value.
    pub fn set_value(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    /// Get a field's current value.
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Validate every field and rule. Returns field → first error message.
    #[must_use]
    pub fn validate(&self) -> HashMap<String, String> {
        let mut errors = HashMap::new();
        for (name, config) in &self.configs {
            let field_errors = config.validate(self.value(name));
            if let Some(first) = field_errors.into_iter().next() {
                errors.insert(name.clone(), first);
            }
        }
        for rule in &self.rules {
            if let Some((field, message)) = rule(&self.values) {
                errors.entry(field).or_insert(message);
            }
        }
        errors
    }

    /// True when every field and rule passes.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Login form: required well-formed email, password of at least 6 chars.
#[must_use]
pub fn login_form() -> FormValidator {
    FormValidator::new()
        .field(
            "email",
            FieldConfig::new()
                .required("L'adresse email est obligatoire")
                .add(Email::new()),
        )
        .field(
            "password",
            FieldConfig::new()
                .required("Le mot de passe est obligatoire")
                .add(MinLength::new(
                    6,
                    "Le mot de passe doit contenir au moins 6 caractères",
                )),
        )
}

/// Registration form, including the password confirmation rule.
#[must_use]
pub fn register_form() -> FormValidator {
    FormValidator::new()
        .field(
            "firstName",
            FieldConfig::new().required("Le prénom est obligatoire"),
        )
        .field(
            "lastName",
            FieldConfig::new().required("Le nom est obligatoire"),
        )
        .field(
            "email",
            FieldConfig::new()
                .required("L'adresse email est obligatoire")
                .add(Email::new()),
        )
        .field(
            "phone",
            FieldConfig::new().required("Le numéro de téléphone est obligatoire"),
        )
        .field(
            "schoolName",
            FieldConfig::new().required("Le nom de l'établissement est obligatoire"),
        )
        .field(
            "password",
            FieldConfig::new()
                .required("Le mot de passe est obligatoire")
                .add(MinLength::new(
                    8,
                    "Le mot de passe doit contenir au moins 8 caractères",
                )),
        )
        .field(
            "confirmPassword",
            FieldConfig::new().required("Veuillez confirmer le mot de passe"),
        )
        .rule(|values| {
            let password = values.get("password").map_or("", String::as_str);
            let confirm = values.get("confirmPassword").map_or("", String::as_str);
            (!confirm.is_empty() && password != confirm).then(|| {
                (
                    "confirmPassword".to_string(),
                    "Les mots de passe ne correspondent pas".to_string(),
                )
            })
        })
}

/// New-student form.
#[must_use]
pub fn student_form() -> FormValidator {
    FormValidator::new()
        .field(
            "firstName",
            FieldConfig::new().required("Le prénom est obligatoire"),
        )
        .field(
            "lastName",
            FieldConfig::new().required("Le nom est obligatoire"),
        )
        .field(
            "dateOfBirth",
            FieldConfig::new().required("La date de naissance est obligatoire"),
        )
        .field(
            "classId",
            FieldConfig::new().required("La classe est obligatoire"),
        )
        .field(
            "parentName",
            FieldConfig::new().required("Le nom du parent est obligatoire"),
        )
        .field(
            "parentPhone",
            FieldConfig::new().required("Le téléphone du parent est obligatoire"),
        )
}

/// New-payment form.
#[must_use]
pub fn payment_form() -> FormValidator {
    FormValidator::new()
        .field(
            "studentId",
            FieldConfig::new().required("L'élève est obligatoire"),
        )
        .field(
            "installmentName",
            FieldConfig::new().required("La tranche est obligatoire"),
        )
        .field("amount", FieldConfig::new().add(PositiveAmount::default()))
        .field(
            "method",
            FieldConfig::new().required("Le mode de paiement est obligatoire"),
        )
}

/// Grade-entry form header (the per-student score rows are validated by
/// the entry widget against the declared maximum).
#[must_use]
pub fn grade_form() -> FormValidator {
    FormValidator::new()
        .field(
            "evaluationTitle",
            FieldConfig::new().required("Le titre de l'évaluation est obligatoire"),
        )
        .field(
            "evaluationType",
            FieldConfig::new().required("Le type d'évaluation est obligatoire"),
        )
        .field(
            "subjectId",
            FieldConfig::new().required("La matière est obligatoire"),
        )
        .field(
            "classId",
            FieldConfig::new().required("La classe est obligatoire"),
        )
        .field(
            "maxScore",
            FieldConfig::new()
                .required("La note maximale est obligatoire")
                .add(PositiveAmount::with_message("La note maximale est obligatoire")),
        )
}

/// New-message form.
#[must_use]
pub fn message_form() -> FormValidator {
    FormValidator::new()
        .field(
            "receiverId",
            FieldConfig::new().required("Le destinataire est obligatoire"),
        )
        .field(
            "content",
            FieldConfig::new().required("Le message ne peut pas être vide"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Validator Tests =====

    #[test]
    fn test_required_rejects_blank() {
        let v = Required::default();
        assert!(!v.validate("   ").is_valid());
        assert!(v.validate("ok").is_valid());
    }

    #[test]
    fn test_min_length_skips_empty() {
        let v = MinLength::new(6, "trop court");
        assert!(v.validate("").is_valid());
        assert!(!v.validate("abc").is_valid());
        assert!(v.validate("abcdef").is_valid());
    }

    #[test]
    fn test_email_shapes() {
        let v = Email::new();
        assert!(v.validate("fatou.ndiaye@edusaas.sn").is_valid());
        assert!(v.validate("").is_valid());
        assert!(!v.validate("pas-un-email").is_valid());
        assert!(!v.validate("a@b").is_valid());
        assert!(!v.validate("a@.sn").is_valid());
        assert!(!v.validate("a@b@c.sn").is_valid());
    }

    #[test]
    fn test_positive_amount() {
        let v = PositiveAmount::default();
        assert!(v.validate("25000").is_valid());
        assert!(!v.validate("0").is_valid());
        assert!(!v.validate("-5").is_valid());
        assert!(!v.validate("beaucoup").is_valid());
    }

    // ===== Form Tests =====

    #[test]
    fn test_login_form_empty_reports_both_fields() {
        let form = login_form();
        let errors = form.validate();
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("L'adresse email est obligatoire")
        );
        assert!(errors.contains_key("password"));
    }

    #[test]
    fn test_login_form_valid() {
        let mut form = login_form();
        form.set_value("email", "amadou.diallo@edusaas.sn");
        form.set_value("password", "secret123");
        assert!(form.is_valid());
    }

    #[test]
    fn test_login_form_short_password() {
        let mut form = login_form();
        form.set_value("email", "amadou.diallo@edusaas.sn");
        form.set_value("password", "abc");
        let errors = form.validate();
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Le mot de passe doit contenir au moins 6 caractères")
        );
    }

    #[test]
    fn test_register_form_password_mismatch() {
        let mut form = register_form();
        form.set_value("firstName", "Awa");
        form.set_value("lastName", "Ba");
        form.set_value("email", "awa.ba@edusaas.sn");
        form.set_value("phone", "+221 77 123 45 67");
        form.set_value("schoolName", "Les Manguiers");
        form.set_value("password", "motdepasse");
        form.set_value("confirmPassword", "autrechose");
        let errors = form.validate();
        assert_eq!(
            errors.get("confirmPassword").map(String::as_str),
            Some("Les mots de passe ne correspondent pas")
        );
    }

    #[test]
    fn test_register_form_matching_passwords() {
        let mut form = register_form();
        form.set_value("firstName", "Awa");
        form.set_value("lastName", "Ba");
        form.set_value("email", "awa.ba@edusaas.sn");
        form.set_value("phone", "+221 77 123 45 67");
        form.set_value("schoolName", "Les Manguiers");
        form.set_value("password", "motdepasse");
        form.set_value("confirmPassword", "motdepasse");
        assert!(form.is_valid());
    }

    #[test]
    fn test_field_required_error_does_not_mask_rule() {
        // Required fires on the empty confirm field; the mismatch rule
        // must not overwrite it.
        let mut form = register_form();
        form.set_value("password", "motdepasse");
        let errors = form.validate();
        assert_eq!(
            errors.get("confirmPassword").map(String::as_str),
            Some("Veuillez confirmer le mot de passe")
        );
    }

    #[test]
    fn test_payment_form_amount() {
        let mut form = payment_form();
        form.set_value("studentId", "std-1");
        form.set_value("installmentName", "Tranche 1");
        form.set_value("amount", "0");
        form.set_value("method", "CASH");
        let errors = form.validate();
        assert_eq!(
            errors.get("amount").map(String::as_str),
            Some("Le montant doit être supérieur à 0")
        );
    }

    #[test]
    fn test_grade_form_requires_header_fields() {
        let form = grade_form();
        let errors = form.validate();
        assert_eq!(
            errors.get("evaluationTitle").map(String::as_str),
            Some("Le titre de l'évaluation est obligatoire")
        );
        assert!(errors.contains_key("maxScore"));
    }

    #[test]
    fn test_grade_form_valid() {
        let mut form = grade_form();
        form.set_value("evaluationTitle", "Devoir n°2");
        form.set_value("evaluationType", "CLASS_TEST");
        form.set_value("subjectId", "sub-1");
        form.set_value("classId", "cls-1");
        form.set_value("maxScore", "20");
        assert!(form.is_valid());
    }

    #[test]
    fn test_message_form() {
        let mut form = message_form();
        form.set_value("receiverId", "u-3");
        form.set_value("content", "Bonjour");
        assert!(form.is_valid());
    }
}
