//! Beat descriptors: the immutable, declarative form of a sequence.
//!
//! Descriptors are authored as YAML or JSON records tagged by `type`. Every
//! field besides the tag has a default, so `{ type: wait }` is a complete
//! one-second wait.

use std::fmt;

use courtship_core::level::OverlayAction;
use courtship_core::presenter::{EnterAnimation, LabelStyle};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::easing::Easing;

/// One beat of a sequence, before it is instantiated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BeatDescriptor {
    /// Glide the camera between two points.
    CameraMove(CameraMoveSpec),
    /// Do nothing for a while.
    Wait(WaitSpec),
    /// Show a dialogue bubble above the player.
    TextBubble(TextBubbleSpec),
    /// Pop an emote sprite above the player.
    Reaction(ReactionSpec),
    /// Open the choice panel and wait for `choice_made`.
    ShowChoice,
    /// Open the story panel and wait for `story_continue`.
    ShowStory,
    /// Fade the screen in or out.
    Fade(FadeSpec),
    /// Let the player walk until they reach a spot or interact.
    FreeRoam(FreeRoamSpec),
    /// Switch the level to another phase.
    SceneSwap(SceneSwapSpec),
    /// Arm an interaction trigger and wait for the player to use it.
    Interaction(InteractionSpec),
    /// Show or hide a level overlay.
    Overlay(OverlaySpec),
    /// Invoke a named level callback.
    CustomCallback(CustomCallbackSpec),
    /// Prompt for a key and wait for it.
    KeyPrompt(KeyPromptSpec),
}

impl BeatDescriptor {
    /// A zero-length wait, used in place of beats that could not be decoded.
    #[must_use]
    pub fn noop() -> Self {
        Self::Wait(WaitSpec { duration: 0.0 })
    }

    /// The kind of beat this descriptor produces.
    #[must_use]
    pub fn kind(&self) -> BeatKind {
        match self {
            Self::CameraMove(_) => BeatKind::CameraMove,
            Self::Wait(_) => BeatKind::Wait,
            Self::TextBubble(_) => BeatKind::TextBubble,
            Self::Reaction(_) => BeatKind::Reaction,
            Self::ShowChoice => BeatKind::ShowChoice,
            Self::ShowStory => BeatKind::ShowStory,
            Self::Fade(_) => BeatKind::Fade,
            Self::FreeRoam(_) => BeatKind::FreeRoam,
            Self::SceneSwap(_) => BeatKind::SceneSwap,
            Self::Interaction(_) => BeatKind::Interaction,
            Self::Overlay(_) => BeatKind::Overlay,
            Self::CustomCallback(_) => BeatKind::CustomCallback,
            Self::KeyPrompt(_) => BeatKind::KeyPrompt,
        }
    }
}

/// Discriminant of [`BeatDescriptor`], for logging and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeatKind {
    CameraMove,
    Wait,
    TextBubble,
    Reaction,
    ShowChoice,
    ShowStory,
    Fade,
    FreeRoam,
    SceneSwap,
    Interaction,
    Overlay,
    CustomCallback,
    KeyPrompt,
}

impl BeatKind {
    /// Every type tag the schema knows.
    pub const ALL: [Self; 13] = [
        Self::CameraMove,
        Self::Wait,
        Self::TextBubble,
        Self::Reaction,
        Self::ShowChoice,
        Self::ShowStory,
        Self::Fade,
        Self::FreeRoam,
        Self::SceneSwap,
        Self::Interaction,
        Self::Overlay,
        Self::CustomCallback,
        Self::KeyPrompt,
    ];

    /// The `type` tag used in authored content.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::CameraMove => "camera_move",
            Self::Wait => "wait",
            Self::TextBubble => "text_bubble",
            Self::Reaction => "reaction",
            Self::ShowChoice => "show_choice",
            Self::ShowStory => "show_story",
            Self::Fade => "fade",
            Self::FreeRoam => "free_roam",
            Self::SceneSwap => "scene_swap",
            Self::Interaction => "interaction",
            Self::Overlay => "overlay",
            Self::CustomCallback => "custom_callback",
            Self::KeyPrompt => "key_prompt",
        }
    }

    /// Looks a kind up by its `type` tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for BeatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Clamps authored durations: negative and non-finite values become zero.
#[must_use]
pub(crate) fn sanitize_duration(seconds: f32) -> f32 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

/// `camera_move` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraMoveSpec {
    /// Start position. Absent means wherever the camera is when the beat starts.
    pub from: Option<Vec3>,
    /// End position.
    pub to: Vec3,
    /// Point the camera faces throughout.
    pub look_at: Vec3,
    /// Seconds.
    pub duration: f32,
    /// Easing applied to the time fraction.
    pub easing: Easing,
}

impl Default for CameraMoveSpec {
    fn default() -> Self {
        Self {
            from: None,
            to: Vec3::ZERO,
            look_at: Vec3::ZERO,
            duration: 2.0,
            easing: Easing::CubicInOut,
        }
    }
}

/// `wait` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaitSpec {
    /// Seconds. Zero completes on the first update.
    pub duration: f32,
}

impl Default for WaitSpec {
    fn default() -> Self {
        Self { duration: 1.0 }
    }
}

/// `text_bubble` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextBubbleSpec {
    /// Dialogue text.
    pub text: String,
    /// Bubble style.
    pub style: LabelStyle,
    /// Seconds on screen, including the trailing fade.
    pub duration: f32,
    /// Height of the anchor above the player's feet, in world units.
    pub offset_y: f32,
    /// Entry animation.
    pub enter_animation: EnterAnimation,
}

impl Default for TextBubbleSpec {
    fn default() -> Self {
        Self {
            text: String::new(),
            style: LabelStyle::Speech,
            duration: 3.0,
            offset_y: 2.0,
            enter_animation: EnterAnimation::Pop,
        }
    }
}

/// `reaction` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReactionSpec {
    /// Emote sprite kind, e.g. `heart` or `exclamation`.
    pub kind: String,
    /// Seconds.
    pub duration: f32,
}

impl Default for ReactionSpec {
    fn default() -> Self {
        Self {
            kind: "heart".to_owned(),
            duration: 1.5,
        }
    }
}

/// Fade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeDirection {
    /// Opacity 0 → 1: the overlay covers the screen.
    #[default]
    In,
    /// Opacity 1 → 0: the overlay uncovers the screen.
    Out,
}

/// `fade` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FadeSpec {
    /// Which way to fade.
    pub direction: FadeDirection,
    /// Seconds.
    pub duration: f32,
    /// Overlay color override, as the presenter understands it (e.g. `#ffffff`).
    pub color: Option<String>,
}

impl Default for FadeSpec {
    fn default() -> Self {
        Self {
            direction: FadeDirection::In,
            duration: 1.0,
            color: None,
        }
    }
}

/// What ends a free-roam beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    /// The player walks within `radius` of `targetPosition`.
    #[default]
    Proximity,
    /// The player interacts (an `interaction` signal or the interact button).
    Interact,
}

/// `free_roam` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FreeRoamSpec {
    /// What ends the beat.
    pub trigger_type: TriggerType,
    /// For `interact`: only an interaction with this id counts. Absent accepts any.
    pub target_id: Option<String>,
    /// For `proximity`: the spot to reach.
    pub target_position: Vec3,
    /// For `proximity`: how close counts as arrived, in world units.
    pub radius: f32,
}

impl Default for FreeRoamSpec {
    fn default() -> Self {
        Self {
            trigger_type: TriggerType::Proximity,
            target_id: None,
            target_position: Vec3::ZERO,
            radius: 1.5,
        }
    }
}

/// `scene_swap` fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneSwapSpec {
    /// Name of the level phase to switch to.
    pub target_phase: String,
}

/// `interaction` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InteractionSpec {
    /// Interaction trigger to arm.
    pub target_id: String,
    /// Prompt shown near the trigger.
    pub prompt_text: String,
}

impl Default for InteractionSpec {
    fn default() -> Self {
        Self {
            target_id: String::new(),
            prompt_text: "Press E to interact".to_owned(),
        }
    }
}

/// `overlay` fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlaySpec {
    /// Level overlay identifier.
    pub overlay_id: String,
    /// Show or hide.
    pub action: OverlayAction,
}

/// `custom_callback` fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomCallbackSpec {
    /// Name in the level's callback table.
    pub callback_name: String,
    /// Seconds to hold after invoking. Zero completes on the first update.
    pub duration: f32,
}

/// `key_prompt` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyPromptSpec {
    /// Key identifier; the beat waits for `key_<key>`.
    pub key: String,
    /// Prompt text. Empty shows a generic "Press <KEY>".
    pub prompt_text: String,
}

impl Default for KeyPromptSpec {
    fn default() -> Self {
        Self {
            key: "a".to_owned(),
            prompt_text: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_fields_default_when_absent() {
        let descriptor: BeatDescriptor = serde_json::from_value(json!({ "type": "wait" })).unwrap();
        assert_eq!(descriptor, BeatDescriptor::Wait(WaitSpec { duration: 1.0 }));

        let descriptor: BeatDescriptor =
            serde_json::from_value(json!({ "type": "reaction" })).unwrap();
        assert_eq!(descriptor, BeatDescriptor::Reaction(ReactionSpec::default()));
    }

    #[test]
    fn test_descriptor_reads_camel_case_fields() {
        let descriptor: BeatDescriptor = serde_json::from_value(json!({
            "type": "camera_move",
            "from": [0.0, 1.0, 2.0],
            "to": [3.0, 4.0, 5.0],
            "lookAt": [0.0, 1.5, 0.0],
            "duration": 4.0,
            "easing": "back_out"
        }))
        .unwrap();

        assert_eq!(
            descriptor,
            BeatDescriptor::CameraMove(CameraMoveSpec {
                from: Some(Vec3::new(0.0, 1.0, 2.0)),
                to: Vec3::new(3.0, 4.0, 5.0),
                look_at: Vec3::new(0.0, 1.5, 0.0),
                duration: 4.0,
                easing: Easing::BackOut,
            })
        );
    }

    #[test]
    fn test_unit_variants_accept_bare_tag() {
        let descriptor: BeatDescriptor =
            serde_json::from_value(json!({ "type": "show_choice" })).unwrap();
        assert_eq!(descriptor, BeatDescriptor::ShowChoice);
        assert_eq!(descriptor.kind(), BeatKind::ShowChoice);
    }

    #[test]
    fn test_free_roam_enums_parse() {
        let descriptor: BeatDescriptor = serde_json::from_value(json!({
            "type": "free_roam",
            "triggerType": "interact",
            "targetId": "fountain"
        }))
        .unwrap();

        match descriptor {
            BeatDescriptor::FreeRoam(spec) => {
                assert_eq!(spec.trigger_type, TriggerType::Interact);
                assert_eq!(spec.target_id.as_deref(), Some("fountain"));
                assert!((spec.radius - 1.5).abs() < f32::EPSILON);
            }
            other => panic!("expected FreeRoam, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected_by_schema() {
        let result = serde_json::from_value::<BeatDescriptor>(json!({ "type": "bogus" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_kind_tags_round_trip() {
        for kind in BeatKind::ALL {
            assert_eq!(BeatKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(BeatKind::from_tag("bogus"), None);
    }

    #[test]
    fn test_sanitize_duration_clamps_bad_values() {
        assert!((sanitize_duration(1.25) - 1.25).abs() < f32::EPSILON);
        assert!(sanitize_duration(-3.0).abs() < f32::EPSILON);
        assert!(sanitize_duration(f32::NAN).abs() < f32::EPSILON);
        assert!(sanitize_duration(f32::INFINITY).abs() < f32::EPSILON);
    }
}
