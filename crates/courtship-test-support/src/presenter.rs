//! Test presenter: records every overlay and label operation.

use std::collections::BTreeMap;

use courtship_core::presenter::{EnterAnimation, LabelId, LabelSpec, LabelStyle, Presenter};
use glam::Vec2;

/// Fade overlay state as last set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FadeState {
    /// Whether the overlay is shown.
    pub visible: bool,
    /// Last opacity set.
    pub opacity: f32,
    /// Color override passed to `show_fade`.
    pub color: Option<String>,
}

/// A label currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRecord {
    /// The spec it was created from.
    pub spec: LabelSpec,
    /// Last screen position, if placed.
    pub position: Option<Vec2>,
    /// Last opacity set.
    pub opacity: f32,
}

/// A presenter that keeps labels in a map and can simulate a missing container.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    labels: BTreeMap<LabelId, LabelRecord>,
    next_label: u32,
    fade: FadeState,
    no_container: bool,
    clear_calls: usize,
}

impl RecordingPresenter {
    /// Creates an empty presenter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `create_label` fail, as if the UI container were absent.
    pub fn without_container(&mut self) {
        self.no_container = true;
    }

    /// Labels currently on screen.
    #[must_use]
    pub fn labels(&self) -> &BTreeMap<LabelId, LabelRecord> {
        &self.labels
    }

    /// Looks up one label.
    #[must_use]
    pub fn label(&self, id: LabelId) -> Option<&LabelRecord> {
        self.labels.get(&id)
    }

    /// The fade overlay state.
    #[must_use]
    pub fn fade(&self) -> &FadeState {
        &self.fade
    }

    /// How many times `clear_labels` was called.
    #[must_use]
    pub fn clear_calls(&self) -> usize {
        self.clear_calls
    }

    /// Creates a label that no beat knows about, as a leaked element would be.
    pub fn inject_stray_label(&mut self, text: &str) -> LabelId {
        self.next_label += 1;
        let id = LabelId(self.next_label);
        self.labels.insert(
            id,
            LabelRecord {
                spec: LabelSpec {
                    text: text.to_owned(),
                    style: LabelStyle::Speech,
                    enter: EnterAnimation::None,
                },
                position: None,
                opacity: 1.0,
            },
        );
        id
    }
}

impl Presenter for RecordingPresenter {
    fn show_fade(&mut self, color: Option<&str>) {
        self.fade.visible = true;
        self.fade.color = color.map(str::to_owned);
    }

    fn set_fade_opacity(&mut self, opacity: f32) {
        self.fade.opacity = opacity;
    }

    fn hide_fade(&mut self) {
        self.fade.visible = false;
    }

    fn create_label(&mut self, spec: &LabelSpec) -> Option<LabelId> {
        if self.no_container {
            return None;
        }
        self.next_label += 1;
        let id = LabelId(self.next_label);
        self.labels.insert(
            id,
            LabelRecord {
                spec: spec.clone(),
                position: None,
                opacity: 1.0,
            },
        );
        Some(id)
    }

    fn place_label(&mut self, label: LabelId, screen: Vec2) {
        if let Some(record) = self.labels.get_mut(&label) {
            record.position = Some(screen);
        }
    }

    fn set_label_opacity(&mut self, label: LabelId, opacity: f32) {
        if let Some(record) = self.labels.get_mut(&label) {
            record.opacity = opacity;
        }
    }

    fn remove_label(&mut self, label: LabelId) {
        self.labels.remove(&label);
    }

    fn clear_labels(&mut self) {
        self.clear_calls += 1;
        self.labels.clear();
    }
}
