use thiserror::Error;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Param carried by schema-level validation errors to name the offending wire field.
pub(crate) const FIELD_PARAM: &str = "field";

const SCHEMA_KEY: &str = "__all__";

/// Builds a schema-level validation error attributed to a single wire field.
pub(crate) fn field_violation(field: &'static str, code: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.add_param(FIELD_PARAM.into(), &field);
    err
}

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Field `{field}` violates constraint `{constraint}`")]
    Validation { field: String, constraint: String },
    #[error(transparent)]
    ParseError(#[from] serde_json::Error),
    #[error(transparent)]
    ConfigError(#[from] serde_yaml::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<ValidationErrors> for RequestError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations = Vec::new();
        collect_violations(&errors, &mut violations);
        violations.sort();

        let (field, constraint) = violations
            .into_iter()
            .next()
            .unwrap_or_else(|| (SCHEMA_KEY.to_string(), "invalid".to_string()));

        tracing::debug!(field = %field, constraint = %constraint, "Image request failed validation");
        RequestError::Validation { field, constraint }
    }
}

// Flattened structs report their fields under the parent key on the validator side,
// but on the wire they sit at the top level, so nested errors keep their own field name.
fn collect_violations(errors: &ValidationErrors, out: &mut Vec<(String, String)>) {
    for (key, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    let field = if *key == SCHEMA_KEY {
                        err.params
                            .get(FIELD_PARAM)
                            .and_then(|v| v.as_str())
                            .unwrap_or(SCHEMA_KEY)
                            .to_string()
                    } else {
                        key.to_string()
                    };
                    out.push((field, err.code.to_string()));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_violations(inner, out),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    collect_violations(inner, out);
                }
            }
        }
    }
}
