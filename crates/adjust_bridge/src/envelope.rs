//! The message envelope posted across the bridge and its JSON wire form.
//!
//! On the wire an envelope is a flat object: `action` plus the fields its [`PayloadShape`]
//! defines. Fields an action does not define are omitted entirely, never sent as `null`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::action::{Action, PayloadShape};
use crate::error::EnvelopeError;

/// Operation-specific payload carried next to the action tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No payload fields.
    None,
    /// Single `data` payload (object, string, or any JSON value).
    Data(Value),
    /// Parameter key only.
    Key(String),
    /// Parameter key and value.
    KeyValue {
        /// Parameter key.
        key: String,
        /// Parameter value.
        value: Value,
    },
}

impl Payload {
    /// Returns the shape of this payload.
    pub const fn shape(&self) -> PayloadShape {
        match self {
            Self::None => PayloadShape::None,
            Self::Data(_) => PayloadShape::Data,
            Self::Key(_) => PayloadShape::Key,
            Self::KeyValue { .. } => PayloadShape::KeyValue,
        }
    }
}

/// One message for the native handler: an action and exactly the payload that action defines.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    action: Action,
    payload: Payload,
}

impl Envelope {
    /// Builds an envelope, rejecting payloads whose shape differs from the action's.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::ShapeMismatch`] when `payload` does not match [`Action::shape`].
    pub fn new(action: Action, payload: Payload) -> Result<Self, EnvelopeError> {
        if action.shape() != payload.shape() {
            return Err(EnvelopeError::ShapeMismatch {
                action,
                expected: action.shape(),
                actual: payload.shape(),
            });
        }
        Ok(Self { action, payload })
    }

    /// Builds an envelope whose shape the caller already guarantees.
    pub(crate) fn from_parts(action: Action, payload: Payload) -> Self {
        debug_assert_eq!(action.shape(), payload.shape());
        Self { action, payload }
    }

    /// Action this envelope requests.
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Payload carried by this envelope.
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The `data` field, if this action carries one.
    pub fn data(&self) -> Option<&Value> {
        match &self.payload {
            Payload::Data(data) => Some(data),
            _ => None,
        }
    }

    /// The `key` field, if this action carries one.
    pub fn key(&self) -> Option<&str> {
        match &self.payload {
            Payload::Key(key) | Payload::KeyValue { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The `value` field, if this action carries one.
    pub fn value(&self) -> Option<&Value> {
        match &self.payload {
            Payload::KeyValue { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Consumes the envelope, returning its action and payload.
    pub fn into_parts(self) -> (Action, Payload) {
        (self.action, self.payload)
    }

    /// Renders the wire object as a JSON value.
    pub fn to_value(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("action".to_string(), Value::from(self.action.tag()));
        match &self.payload {
            Payload::None => {}
            Payload::Data(data) => {
                fields.insert("data".to_string(), data.clone());
            }
            Payload::Key(key) => {
                fields.insert("key".to_string(), Value::from(key.as_str()));
            }
            Payload::KeyValue { key, value } => {
                fields.insert("key".to_string(), Value::from(key.as_str()));
                fields.insert("value".to_string(), value.clone());
            }
        }
        Value::Object(fields)
    }

    /// Decodes a received wire object, requiring exactly the fields its action defines.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvelopeError`] for non-objects, unknown actions, missing fields, mistyped
    /// keys, or fields the action does not define.
    pub fn from_wire(value: Value) -> Result<Self, EnvelopeError> {
        let Value::Object(mut fields) = value else {
            return Err(EnvelopeError::NotAnObject);
        };
        let tag = match fields.remove("action") {
            Some(Value::String(tag)) => tag,
            _ => return Err(EnvelopeError::MissingAction),
        };
        let action = Action::from_tag(&tag).ok_or(EnvelopeError::UnknownAction(tag))?;

        let payload = match action.shape() {
            PayloadShape::None => Payload::None,
            PayloadShape::Data => Payload::Data(take_field(&mut fields, action, "data")?),
            PayloadShape::Key => Payload::Key(take_key(&mut fields, action)?),
            PayloadShape::KeyValue => {
                let key = take_key(&mut fields, action)?;
                let value = take_field(&mut fields, action, "value")?;
                Payload::KeyValue { key, value }
            }
        };

        if let Some(field) = fields.keys().next() {
            return Err(EnvelopeError::UnexpectedField {
                action,
                field: field.clone(),
            });
        }
        Ok(Self { action, payload })
    }
}

fn take_field(
    fields: &mut Map<String, Value>,
    action: Action,
    field: &'static str,
) -> Result<Value, EnvelopeError> {
    fields
        .remove(field)
        .ok_or(EnvelopeError::MissingField { action, field })
}

fn take_key(fields: &mut Map<String, Value>, action: Action) -> Result<String, EnvelopeError> {
    match take_field(fields, action, "key")? {
        Value::String(key) => Ok(key),
        other => Err(EnvelopeError::InvalidField {
            action,
            field: "key",
            reason: format!("expected a string, got {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Serialize)]
struct WireEnvelope<'a> {
    action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a Value>,
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireEnvelope {
            action: self.action.tag(),
            data: self.data(),
            key: self.key(),
            value: self.value(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Envelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_wire(value).map_err(de::Error::custom)
    }
}
