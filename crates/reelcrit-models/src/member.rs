use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The user record resolved from a login token. Only the nickname is
/// interpreted; everything else the backend attaches is kept opaquely so it
/// survives a persistence round-trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(default)]
    pub nick_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_round_trip() {
        let json = r#"{"nickName": "mina", "email": "mina@example.com", "grade": 3}"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.nick_name, "mina");
        assert_eq!(member.extra["email"], "mina@example.com");

        let back = serde_json::to_value(&member).unwrap();
        assert_eq!(back["grade"], 3);
    }
}
