// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Identity providers. Only a local mock exists: it checks that the form is
//! filled in and never verifies a credential.

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::models::UserProfile;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

pub trait IdentityProvider {
    fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, ValidationError>;
    fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, ValidationError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MockIdentityProvider;

impl IdentityProvider for MockIdentityProvider {
    fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, ValidationError> {
        let email = check_email(email)?;
        require("password", password)?;
        let name = email.split('@').next().unwrap_or_default().to_string();
        Ok(profile(name, email))
    }

    fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, ValidationError> {
        let name = require("name", name)?;
        let email = check_email(email)?;
        require("password", password)?;
        Ok(profile(name.to_string(), email))
    }
}

fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let v = value.trim();
    if v.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(v)
    }
}

fn check_email(email: &str) -> Result<String, ValidationError> {
    let email = require("email", email)?;
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(email.to_string())
}

fn profile(name: String, email: String) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4().simple().to_string(),
        name,
        email,
    }
}

/// First word of the user's name, for greetings.
pub fn first_name(user: &UserProfile) -> &str {
    user.name.split_whitespace().next().unwrap_or(&user.name)
}
