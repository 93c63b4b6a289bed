//! Assertions on posted webhook bodies

use serde_json::Value;

pub trait WebhookBodyAssertions {
    /// Assert the body uses `key` ("embeds" or "attachments") and not the other one
    fn assert_shape(&self, key: &str) -> &Value;

    /// Value of the field called `name` in the single notification under `key`
    fn field_value(&self, key: &str, name: &str) -> Option<String>;
}

impl WebhookBodyAssertions for Value {
    fn assert_shape(&self, key: &str) -> &Value {
        let other = if key == "embeds" { "attachments" } else { "embeds" };
        assert!(self.get(other).is_none(), "unexpected {:?} key in {}", other, self);
        assert!(self.get("content").is_none(), "unexpected content in {}", self);

        let items = self[key]
            .as_array()
            .unwrap_or_else(|| panic!("expected {:?} array in {}", key, self));
        assert_eq!(items.len(), 1, "expected exactly one notification");
        &items[0]
    }

    fn field_value(&self, key: &str, name: &str) -> Option<String> {
        self[key][0]["fields"]
            .as_array()?
            .iter()
            .find(|field| field["name"] == name)
            .and_then(|field| field["value"].as_str())
            .map(str::to_string)
    }
}
