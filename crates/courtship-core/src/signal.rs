//! External events injected into a running sequence.

use std::fmt;

/// A named event delivered to the active beat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// The player picked an option in the choice panel.
    ChoiceMade,
    /// The player dismissed the story panel.
    StoryContinue,
    /// The player used an interaction trigger, optionally identified.
    Interaction {
        /// Trigger identifier, if the host knows it.
        id: Option<String>,
    },
    /// A prompted key was pressed (`key_<id>` on the wire).
    Key(String),
    /// Anything else. No beat reacts to it.
    Other(String),
}

impl Signal {
    /// Parses a wire event name and its JSON payload.
    ///
    /// `interaction` reads an optional string `id` from the payload. Unknown
    /// names become [`Signal::Other`].
    #[must_use]
    pub fn from_event(name: &str, payload: &serde_json::Value) -> Self {
        match name {
            "choice_made" => Self::ChoiceMade,
            "story_continue" => Self::StoryContinue,
            "interaction" => Self::Interaction {
                id: payload
                    .get("id")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned),
            },
            _ => match name.strip_prefix("key_") {
                Some(key) if !key.is_empty() => Self::Key(key.to_owned()),
                _ => Self::Other(name.to_owned()),
            },
        }
    }

    /// The wire event name.
    #[must_use]
    pub fn event_name(&self) -> String {
        match self {
            Self::ChoiceMade => "choice_made".to_owned(),
            Self::StoryContinue => "story_continue".to_owned(),
            Self::Interaction { .. } => "interaction".to_owned(),
            Self::Key(key) => format!("key_{key}"),
            Self::Other(name) => name.clone(),
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interaction { id: Some(id) } => write!(f, "interaction({id})"),
            other => f.write_str(&other.event_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_event_parses_vocabulary() {
        let none = serde_json::Value::Null;

        assert_eq!(Signal::from_event("choice_made", &none), Signal::ChoiceMade);
        assert_eq!(
            Signal::from_event("story_continue", &none),
            Signal::StoryContinue
        );
        assert_eq!(Signal::from_event("key_a", &none), Signal::Key("a".into()));
        assert_eq!(Signal::from_event("key_b", &none), Signal::Key("b".into()));
    }

    #[test]
    fn test_from_event_reads_interaction_id() {
        let signal = Signal::from_event("interaction", &json!({ "id": "bench" }));
        assert_eq!(
            signal,
            Signal::Interaction {
                id: Some("bench".into())
            }
        );

        let anonymous = Signal::from_event("interaction", &json!({}));
        assert_eq!(anonymous, Signal::Interaction { id: None });
    }

    #[test]
    fn test_from_event_keeps_unknown_names() {
        let none = serde_json::Value::Null;
        assert_eq!(
            Signal::from_event("key_", &none),
            Signal::Other("key_".into())
        );
        assert_eq!(
            Signal::from_event("sneeze", &none),
            Signal::Other("sneeze".into())
        );
    }

    #[test]
    fn test_event_name_matches_wire_name() {
        assert_eq!(Signal::Key("a".into()).event_name(), "key_a");
        assert_eq!(Signal::Interaction { id: None }.event_name(), "interaction");
        assert_eq!(
            Signal::Interaction {
                id: Some("door".into())
            }
            .to_string(),
            "interaction(door)"
        );
    }
}
