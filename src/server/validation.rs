//! Request payload schemas checked at the API boundary.
//!
//! Each endpoint that accepts a body declares a `PayloadSchema` listing its fields with a
//! type and a required flag. Controllers validate the raw JSON against the schema, then
//! deserialize it into a DTO whose `Validate` derive enforces lengths and ranges. Both
//! steps surface as a 400 with a message naming the offending field. Unknown fields are
//! ignored.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::server::error::AppError;

/// Expected JSON type of a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    String,
    Integer,
    Boolean,
    /// A string restricted to the listed values.
    OneOf(&'static [&'static str]),
}

/// Rule for a single field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// JSON field name as sent by clients.
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
}

impl FieldRule {
    const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: true,
        }
    }

    const fn optional(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
        }
    }

    fn check(&self, value: &Value) -> Result<(), String> {
        match self.field_type {
            FieldType::String => {
                if value.is_string() {
                    Ok(())
                } else {
                    Err(format!("{} must be a string", self.name))
                }
            }
            FieldType::Integer => match value.as_i64() {
                Some(number) if i32::try_from(number).is_ok() => Ok(()),
                _ => Err(format!("{} must be an integer", self.name)),
            },
            FieldType::Boolean => {
                if value.is_boolean() {
                    Ok(())
                } else {
                    Err(format!("{} must be a boolean", self.name))
                }
            }
            FieldType::OneOf(allowed) => match value.as_str() {
                Some(text) if allowed.contains(&text) => Ok(()),
                _ => Err(format!("{} must be one of: {}", self.name, allowed.join(", "))),
            },
        }
    }
}

/// Declarative description of an endpoint's request body.
#[derive(Debug, Clone, Copy)]
pub struct PayloadSchema {
    pub fields: &'static [FieldRule],
}

impl PayloadSchema {
    /// Validates a full payload: required fields must be present and non-null.
    pub fn validate(&self, payload: &Value) -> Result<(), AppError> {
        self.validate_fields(payload, true)
    }

    /// Validates a partial payload: every field is optional, present ones must be valid.
    pub fn validate_partial(&self, payload: &Value) -> Result<(), AppError> {
        self.validate_fields(payload, false)
    }

    /// Validates a full payload, deserializes it, and checks the DTO's bounds.
    pub fn parse<T: DeserializeOwned + Validate>(&self, payload: Value) -> Result<T, AppError> {
        self.validate(&payload)?;
        Self::deserialize(payload)
    }

    /// Validates a partial payload, deserializes it, and checks the DTO's bounds.
    pub fn parse_partial<T: DeserializeOwned + Validate>(
        &self,
        payload: Value,
    ) -> Result<T, AppError> {
        self.validate_partial(&payload)?;
        Self::deserialize(payload)
    }

    fn validate_fields(&self, payload: &Value, enforce_required: bool) -> Result<(), AppError> {
        let Some(object) = payload.as_object() else {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".to_string(),
            ));
        };

        for rule in self.fields {
            match object.get(rule.name) {
                None | Some(Value::Null) => {
                    if enforce_required && rule.required {
                        return Err(AppError::BadRequest(format!("{} is required", rule.name)));
                    }
                }
                Some(value) => rule.check(value).map_err(AppError::BadRequest)?,
            }
        }

        Ok(())
    }

    fn deserialize<T: DeserializeOwned + Validate>(payload: Value) -> Result<T, AppError> {
        let dto: T = serde_json::from_value(payload)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

        dto.validate()
            .map_err(|errors| AppError::BadRequest(describe(&errors)))?;

        Ok(dto)
    }
}

/// Renders field errors as `<field> <what> must be between <min> and <max>`, sorted by
/// field so the message is stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut problems: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let what = match &*error.code {
                    "length" => "length",
                    _ => "value",
                };
                match (error.params.get("min"), error.params.get("max")) {
                    (Some(min), Some(max)) => {
                        format!("{} {} must be between {} and {}", field, what, min, max)
                    }
                    (Some(min), None) => format!("{} {} must be at least {}", field, what, min),
                    (None, Some(max)) => format!("{} {} must be at most {}", field, what, max),
                    (None, None) => format!("{} is invalid", field),
                }
            })
        })
        .collect();

    problems.sort();
    problems.join("; ")
}

pub const CREDENTIALS: PayloadSchema = PayloadSchema {
    fields: &[
        FieldRule::required("username", FieldType::String),
        FieldRule::required("password", FieldType::String),
    ],
};

/// Character sheet fields. Used whole for creation and partially for updates.
pub const CHARACTER: PayloadSchema = PayloadSchema {
    fields: &[
        FieldRule::required("name", FieldType::String),
        FieldRule::required("position", FieldType::String),
        FieldRule::optional("age", FieldType::Integer),
        FieldRule::optional("height", FieldType::Integer),
        FieldRule::optional("bio", FieldType::String),
        FieldRule::optional("class", FieldType::String),
        FieldRule::optional("subclass", FieldType::String),
        FieldRule::optional("weapon", FieldType::String),
        FieldRule::optional("motivation", FieldType::String),
        FieldRule::optional("origin", FieldType::String),
        FieldRule::optional("avatar", FieldType::String),
        FieldRule::optional("speed", FieldType::Integer),
        FieldRule::optional("strength", FieldType::Integer),
        FieldRule::optional("stamina", FieldType::Integer),
        FieldRule::optional("shooting", FieldType::Integer),
        FieldRule::optional("passing", FieldType::Integer),
        FieldRule::optional("dribbling", FieldType::Integer),
    ],
};

pub const INVITE: PayloadSchema = PayloadSchema {
    fields: &[FieldRule::required("userId", FieldType::Integer)],
};

pub const RESPOND_INVITATION: PayloadSchema = PayloadSchema {
    fields: &[FieldRule::required("accept", FieldType::Boolean)],
};

pub const CREATE_MATCH: PayloadSchema = PayloadSchema {
    fields: &[
        FieldRule::optional("teamVName", FieldType::String),
        FieldRule::optional("teamZName", FieldType::String),
    ],
};

pub const RECORD_GOAL: PayloadSchema = PayloadSchema {
    fields: &[
        FieldRule::required("userId", FieldType::Integer),
        FieldRule::required("team", FieldType::OneOf(&["V", "Z"])),
        FieldRule::required("minute", FieldType::Integer),
    ],
};
