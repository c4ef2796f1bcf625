/// Trait shared by every decoded event record the ledger understands.
///
/// Lets log collaborators store or forward events generically as
/// `event_type` + `serde_json::Value`, without matching on variants.
pub trait Eventlike: std::fmt::Debug + Send + Sync {
    /// The snake_case event type string (e.g. `add_deposit`).
    fn event_type(&self) -> &'static str;

    /// Serialize this event to the `{ event, args }` JSON shape.
    fn to_payload(&self) -> serde_json::Value;
}
