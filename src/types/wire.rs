use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::{error::RequestError, RequestResult};

/// Path, relative to the API base, that image requests are posted to.
pub const IMAGE_GENERATIONS_PATH: &str = "/images/generations";

/// A request body that can be handed to an HTTP transport as a JSON object.
///
/// Unset optional fields never appear in the wire form, so the server applies its own
/// defaults for them.
pub trait WireRequest: Serialize + DeserializeOwned + Validate {
    /// Every wire name this request can emit.
    const WIRE_FIELDS: &'static [&'static str];

    fn to_wire_form(&self) -> RequestResult<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => {
                tracing::debug!(fields = map.len(), "Serialized image request");
                Ok(map)
            }
            other => Err(RequestError::ParseError(
                <serde_json::Error as serde::ser::Error>::custom(format!(
                    "Expected a JSON object, got {other}"
                )),
            )),
        }
    }

    fn from_wire_form(map: Map<String, Value>) -> RequestResult<Self> {
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    fn to_json(&self) -> RequestResult<String> {
        Ok(serde_json::to_string(&self.to_wire_form()?)?)
    }

    /// Runs local validation, handing the request back when it passes.
    fn validated(self) -> RequestResult<Self> {
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::image::ImageRequest;

    #[test]
    fn generations_path_joins_onto_api_base() {
        let api_base = "https://api.openai.com/v1";
        assert_eq!(
            format!("{}{}", api_base, IMAGE_GENERATIONS_PATH),
            "https://api.openai.com/v1/images/generations"
        );
    }

    #[test]
    fn to_json_matches_wire_form() {
        let request = ImageRequest::new("a cat").with_n(2);
        let body: Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
        assert_eq!(body, Value::Object(request.to_wire_form().unwrap()));
    }
}
