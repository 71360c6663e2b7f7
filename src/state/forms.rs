//! Form models, local validation, and backend error classification.
//!
//! ERROR HANDLING
//! ==============
//! Views receive raw `ApiError`s and turn them into display text here:
//! 401 on login gets a fixed credentials message, `details` maps to per-field
//! text (first message wins), a bare `error` becomes the banner, and anything
//! else falls back to a per-form message. Local checks run before any request.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;

use crate::net::error::ApiError;
use crate::net::types::{FieldMessages, LoginRequest, RegisterRequest};

pub const INVALID_CREDENTIALS: &str = "Неверное имя пользователя или пароль";
pub const LOGIN_FAILED: &str = "Произошла ошибка при входе";
pub const REGISTER_FAILED: &str = "Произошла ошибка при регистрации";
pub const FIELD_REQUIRED: &str = "Обязательное поле";

pub const POST_MAX_CHARS: usize = 5000;
pub const COMMENT_MAX_CHARS: usize = 2000;
pub const BIO_MAX_CHARS: usize = 500;

pub const POST_EMPTY: &str = "Введите содержимое поста";
pub const POST_TOO_LONG: &str = "Пост слишком длинный (максимум 5000 символов)";
pub const COMMENT_EMPTY: &str = "Введите текст комментария";
pub const COMMENT_TOO_LONG: &str = "Комментарий слишком длинный (максимум 2000 символов)";
pub const BIO_TOO_LONG: &str = "Биография не должна превышать 500 символов";

/// Backend key for errors not tied to a single field.
const NON_FIELD_KEY: &str = "non_field_errors";

/// Banner text plus per-field messages for one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub general: Option<String>,
    fields: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn general(message: impl Into<String>) -> Self {
        Self { general: Some(message.into()), fields: BTreeMap::new() }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn set_field(&mut self, name: &str, message: impl Into<String>) {
        self.fields.insert(name.to_owned(), message.into());
    }

    /// Editing a field clears its error.
    pub fn clear_field(&mut self, name: &str) {
        self.fields.remove(name);
    }

    pub fn is_empty(&self) -> bool {
        self.general.is_none() && self.fields.is_empty()
    }

    fn from_details(details: &BTreeMap<String, FieldMessages>) -> Self {
        let mut errors = Self::default();
        for (name, messages) in details {
            let Some(first) = messages.first() else {
                continue;
            };
            if name == NON_FIELD_KEY {
                errors.general = Some(first.to_owned());
            } else {
                errors.set_field(name, first);
            }
        }
        errors
    }
}

/// Map a failed login onto the form.
pub fn classify_login_error(err: &ApiError) -> FormErrors {
    if err.is_unauthorized() {
        return FormErrors::general(INVALID_CREDENTIALS);
    }
    classify(err, LOGIN_FAILED)
}

/// Map a failed registration onto the form.
pub fn classify_register_error(err: &ApiError) -> FormErrors {
    classify(err, REGISTER_FAILED)
}

fn classify(err: &ApiError, fallback: &str) -> FormErrors {
    if let Some(body) = err.body()
        && !body.details.is_empty()
    {
        let errors = FormErrors::from_details(&body.details);
        if !errors.is_empty() {
            return errors;
        }
    }
    FormErrors::general(err.server_message().unwrap_or(fallback))
}

/// Banner text for a failed non-form action: the server's message or `fallback`.
pub fn action_message(err: &ApiError, fallback: &str) -> String {
    err.server_message().unwrap_or(fallback).to_owned()
}

/// How a view reacts to a failed backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureResponse {
    /// Session is gone; send the user to `/login`.
    Login,
    /// Show this message (banner or alert, depending on the view).
    Show(String),
}

/// 401 always means "log in again"; everything else is displayed.
pub fn respond_to_failure(err: &ApiError, fallback: &str) -> FailureResponse {
    if err.is_unauthorized() {
        FailureResponse::Login
    } else {
        FailureResponse::Show(action_message(err, fallback))
    }
}

// =============================================================
// Forms
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Required-field check; returns the request body when complete.
    pub fn validate(&self) -> Result<LoginRequest, FormErrors> {
        let mut errors = FormErrors::default();
        require(&mut errors, "username", &self.username);
        require(&mut errors, "password", &self.password);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginRequest { username: self.username.trim().to_owned(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl RegisterForm {
    /// Required-field check only; password rules are the backend's call.
    pub fn validate(&self) -> Result<RegisterRequest, FormErrors> {
        let mut errors = FormErrors::default();
        require(&mut errors, "username", &self.username);
        require(&mut errors, "email", &self.email);
        require(&mut errors, "password", &self.password);
        require(&mut errors, "password_confirm", &self.password_confirm);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RegisterRequest {
            username: self.username.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            password_confirm: self.password_confirm.clone(),
        })
    }
}

fn require(errors: &mut FormErrors, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.set_field(name, FIELD_REQUIRED);
    }
}

// =============================================================
// Content limits
// =============================================================

/// Character count as shown in the "n / max" counters.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

pub fn validate_post_content(text: &str) -> Result<String, &'static str> {
    validate_content(text, POST_MAX_CHARS, POST_EMPTY, POST_TOO_LONG)
}

pub fn validate_comment_content(text: &str) -> Result<String, &'static str> {
    validate_content(text, COMMENT_MAX_CHARS, COMMENT_EMPTY, COMMENT_TOO_LONG)
}

/// Bio may be empty; only the length is limited.
pub fn validate_bio(text: &str) -> Result<String, &'static str> {
    if char_count(text) > BIO_MAX_CHARS {
        return Err(BIO_TOO_LONG);
    }
    Ok(text.to_owned())
}

fn validate_content(
    text: &str,
    max_chars: usize,
    empty: &'static str,
    too_long: &'static str,
) -> Result<String, &'static str> {
    if text.trim().is_empty() {
        return Err(empty);
    }
    if char_count(text) > max_chars {
        return Err(too_long);
    }
    Ok(text.to_owned())
}
