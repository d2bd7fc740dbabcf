use serde_json::Value;

/// Body of create and update requests. Presence is checked by the use cases.
///
/// Decoding never fails: an empty or malformed body reads as `{}`, and each
/// field keeps its text only when the JSON value is truthy.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UserPayloadDto {
    pub name: Option<String>,
    pub bio: Option<String>,
}

impl UserPayloadDto {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let Ok(Value::Object(body)) = serde_json::from_slice::<Value>(bytes) else {
            return Self::default();
        };
        Self {
            name: body.get("name").and_then(truthy_text),
            bio: body.get("bio").and_then(truthy_text),
        }
    }
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_string_fields() {
        let payload = UserPayloadDto::from_bytes(br#"{"name":"Ann","bio":"x","extra":1}"#);
        assert_eq!(payload.name.as_deref(), Some("Ann"));
        assert_eq!(payload.bio.as_deref(), Some("x"));
    }

    #[test]
    fn empty_or_malformed_bodies_read_as_empty_object() {
        for body in [&b""[..], b"{not json", b"[1,2]", b"\"Ann\""] {
            assert_eq!(UserPayloadDto::from_bytes(body), UserPayloadDto::default());
        }
    }

    #[test]
    fn falsy_values_are_dropped() {
        for value in ["null", "false", "0", "0.0", "\"\""] {
            let body = format!(r#"{{"name":{value},"bio":"x"}}"#);
            assert_eq!(UserPayloadDto::from_bytes(body.as_bytes()).name, None, "{value}");
        }
    }

    #[test]
    fn truthy_non_strings_keep_their_json_text() {
        let payload = UserPayloadDto::from_bytes(br#"{"name":5,"bio":true}"#);
        assert_eq!(payload.name.as_deref(), Some("5"));
        assert_eq!(payload.bio.as_deref(), Some("true"));
    }
}
