use super::status::Status;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// Carries the outcome of a domain operation up to the presentation layer.
///
/// Every slot starts out empty and can be overwritten at any time; the last
/// write wins. No relationship between slots is enforced: storing
/// `NOT_VALID` without any messages is as legal as storing messages with
/// `SUCCESS`.
///
/// The four data slots default to `serde_json::Value` so that any shape of
/// data fits, but callers can fix concrete types, e.g.
/// `Payload<PostId, Post, Messages, Value>`.
///
/// Serialized form: an empty slot is left out, a slot holding `null` is
/// written as `null`, so both survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    deserialize = "I: Deserialize<'de>, O: Deserialize<'de>, M: Deserialize<'de>, E: Deserialize<'de>"
))]
pub struct Payload<I = Value, O = Value, M = Value, E = Value> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    input: Option<I>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    output: Option<O>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    messages: Option<M>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    extras: Option<E>,
}

/// A key that is present always fills the slot, even when its value is
/// `null`. Missing keys fall back to `None` through `#[serde(default)]`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// All slots of a `Payload`, moved out by [`Payload::into_parts`].
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadParts<I = Value, O = Value, M = Value, E = Value> {
    pub status: Option<String>,
    pub input: Option<I>,
    pub output: Option<O>,
    pub messages: Option<M>,
    pub extras: Option<E>,
}

impl<I, O, M, E> Default for Payload<I, O, M, E> {
    fn default() -> Self {
        Self {
            status: None,
            input: None,
            output: None,
            messages: None,
            extras: None,
        }
    }
}

impl<I, O, M, E> Payload<I, O, M, E> {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the status. Tokens outside [`Status`] are kept as given.
    pub fn set_status(&mut self, status: impl Into<String>) -> &mut Self {
        let status = status.into();
        if !Status::ALL.iter().any(|s| s.as_str() == status) {
            debug!(status = %status, "Assigning a status that is not a well-known token");
        }
        self.status = Some(status);
        self
    }

    /// Stores the input the domain layer received. The remaining setters
    /// behave the same way for their slot: overwrite, then return `self`.
    pub fn set_input(&mut self, input: I) -> &mut Self {
        self.input = Some(input);
        self
    }

    pub fn set_output(&mut self, output: O) -> &mut Self {
        self.output = Some(output);
        self
    }

    pub fn set_messages(&mut self, messages: M) -> &mut Self {
        self.messages = Some(messages);
        self
    }

    pub fn set_extras(&mut self, extras: E) -> &mut Self {
        self.extras = Some(extras);
        self
    }

    /// Consuming variant of [`Payload::set_status`], handy when the payload
    /// is built and returned in one expression.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.set_status(status);
        self
    }

    /// Consuming variant of [`Payload::set_input`]; the other `with_*`
    /// methods mirror their setters likewise.
    pub fn with_input(mut self, input: I) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_output(mut self, output: O) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_messages(mut self, messages: M) -> Self {
        self.messages = Some(messages);
        self
    }

    pub fn with_extras(mut self, extras: E) -> Self {
        self.extras = Some(extras);
        self
    }

    /// Returns the stored status, or `None` if it was never set. The other
    /// getters follow the same rule for their slot.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn input(&self) -> Option<&I> {
        self.input.as_ref()
    }

    pub fn output(&self) -> Option<&O> {
        self.output.as_ref()
    }

    pub fn messages(&self) -> Option<&M> {
        self.messages.as_ref()
    }

    pub fn extras(&self) -> Option<&E> {
        self.extras.as_ref()
    }

    /// The stored status as a well-known token.
    ///
    /// Returns `None` both when no status was set and when the stored text
    /// is not one of the [`Status`] tokens.
    pub fn status_token(&self) -> Option<Status> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn has_status(&self, status: Status) -> bool {
        self.status.as_deref() == Some(status.as_str())
    }

    pub fn into_parts(self) -> PayloadParts<I, O, M, E> {
        PayloadParts {
            status: self.status,
            input: self.input,
            output: self.output,
            messages: self.messages,
            extras: self.extras,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_payload_is_empty() {
        let payload: Payload = Payload::new();
        assert_eq!(payload.status(), None);
        assert_eq!(payload.input(), None);
        assert_eq!(payload.output(), None);
        assert_eq!(payload.messages(), None);
        assert_eq!(payload.extras(), None);
        assert_eq!(payload.status_token(), None);
    }

    #[test]
    fn test_setters_round_trip() {
        let mut payload: Payload = Payload::new();
        payload
            .set_status(Status::Found)
            .set_input(json!({"id": 1}))
            .set_output(json!({"id": 1, "title": "x"}))
            .set_messages(json!({"title": ["too short"]}))
            .set_extras(json!({"took_ms": 3}));

        assert_eq!(payload.status(), Some("FOUND"));
        assert_eq!(payload.input(), Some(&json!({"id": 1})));
        assert_eq!(payload.output(), Some(&json!({"id": 1, "title": "x"})));
        assert_eq!(payload.messages(), Some(&json!({"title": ["too short"]})));
        assert_eq!(payload.extras(), Some(&json!({"took_ms": 3})));
    }

    #[test]
    fn test_setter_returns_same_instance() {
        let mut payload: Payload = Payload::new();
        let returned: *const Payload = payload.set_status("CREATED");
        assert!(std::ptr::eq(returned, &payload));

        let returned: *const Payload = payload.set_status("CREATED").set_output(json!(1));
        assert!(std::ptr::eq(returned, &payload));
    }

    #[test]
    fn test_last_write_wins() {
        let mut payload: Payload = Payload::new();
        payload.set_status(Status::Processing);
        payload.set_output(json!("first"));
        payload.set_status(Status::Success).set_output(json!("second"));

        assert_eq!(payload.status(), Some("SUCCESS"));
        assert_eq!(payload.output(), Some(&json!("second")));
    }

    #[test]
    fn test_unknown_status_is_stored_verbatim() {
        let mut payload: Payload = Payload::new();
        payload.set_status("I_AM_A_TEAPOT");

        assert_eq!(payload.status(), Some("I_AM_A_TEAPOT"));
        assert_eq!(payload.status_token(), None);
        assert!(!payload.has_status(Status::Error));
    }

    #[test]
    fn test_status_token_and_has_status() {
        let payload: Payload = Payload::new().with_status(Status::NotValid);
        assert_eq!(payload.status_token(), Some(Status::NotValid));
        assert!(payload.has_status(Status::NotValid));
        assert!(!payload.has_status(Status::Valid));
    }

    #[test]
    fn test_builder_matches_setters() {
        let built: Payload = Payload::new()
            .with_status("CREATED")
            .with_input(json!({"title": "x"}))
            .with_output(json!({"id": 1, "title": "x"}))
            .with_messages(json!({}))
            .with_extras(json!(null))
            .with_status("UPDATED");

        let mut set: Payload = Payload::new();
        set.set_status("UPDATED")
            .set_input(json!({"title": "x"}))
            .set_output(json!({"id": 1, "title": "x"}))
            .set_messages(json!({}))
            .set_extras(json!(null));

        assert_eq!(built, set);
    }

    #[test]
    fn test_concrete_slot_types() {
        #[derive(Debug, PartialEq)]
        struct Post {
            id: u32,
        }

        let mut payload: Payload<u32, Post, Vec<String>, ()> = Payload::new();
        payload.set_input(7).set_output(Post { id: 7 });

        assert_eq!(payload.input(), Some(&7));
        assert_eq!(payload.output(), Some(&Post { id: 7 }));
        assert_eq!(payload.messages(), None);
    }

    #[test]
    fn test_null_slot_survives_serde_round_trip() {
        let mut payload: Payload = Payload::new();
        payload.set_status(Status::Success).set_output(json!(null));

        let serialized = serde_json::to_string(&payload).unwrap();
        assert_eq!(serialized, r#"{"status":"SUCCESS","output":null}"#);

        let restored: Payload = serde_json::from_str(&serialized).unwrap();
        assert_eq!(restored.output(), Some(&Value::Null));
        assert_eq!(restored.input(), None);
        assert_eq!(restored, payload);
    }

    #[test]
    fn test_nested_option_slot_round_trips() {
        let mut payload: Payload<Option<u32>, Value, Value, Value> = Payload::new();
        payload.set_input(None);

        let serialized = serde_json::to_string(&payload).unwrap();
        assert_eq!(serialized, r#"{"input":null}"#);

        let restored: Payload<Option<u32>, Value, Value, Value> =
            serde_json::from_str(&serialized).unwrap();
        assert_eq!(restored.input(), Some(&None));
    }

    #[test]
    fn test_empty_payload_serializes_to_empty_object() {
        let payload: Payload = Payload::new();
        assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");

        let restored: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(restored, payload);
    }

    #[test]
    fn test_into_parts_moves_every_slot() {
        let payload: Payload = Payload::new()
            .with_status(Status::Deleted)
            .with_input(json!(9));

        let parts = payload.into_parts();
        assert_eq!(parts.status.as_deref(), Some("DELETED"));
        assert_eq!(parts.input, Some(json!(9)));
        assert_eq!(parts.output, None);
        assert_eq!(parts.messages, None);
        assert_eq!(parts.extras, None);
    }
}
