//! A bundle of recording collaborators that lends out a `Context`.

use courtship_core::context::Context;
use courtship_core::stage::{CameraId, PhaseBinding, SceneId, Stage};
use glam::Vec3;

use crate::host::RecordingHost;
use crate::level::RecordingLevel;
use crate::presenter::RecordingPresenter;
use crate::stage::FakeStage;

/// Owns one of each fake collaborator.
///
/// ```ignore
/// let mut harness = Harness::new();
/// runner.update(0.5, &mut harness.ctx());
/// assert!(harness.presenter.labels().is_empty());
/// ```
#[derive(Debug)]
pub struct Harness {
    /// Scene/camera binding handed to the context.
    pub binding: PhaseBinding,
    /// The stage.
    pub stage: FakeStage,
    /// The presenter.
    pub presenter: RecordingPresenter,
    /// The level.
    pub level: RecordingLevel,
    /// The host.
    pub host: RecordingHost,
}

impl Harness {
    /// Scene bound at construction.
    pub const SCENE: SceneId = SceneId(1);
    /// Camera bound at construction.
    pub const CAMERA: CameraId = CameraId(1);

    /// Creates a harness bound to [`Harness::SCENE`] and [`Harness::CAMERA`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            binding: PhaseBinding {
                scene: Self::SCENE,
                camera: Self::CAMERA,
            },
            stage: FakeStage::new(Self::CAMERA),
            presenter: RecordingPresenter::new(),
            level: RecordingLevel::new(),
            host: RecordingHost::new(),
        }
    }

    /// Borrows every collaborator into a fresh context.
    pub fn ctx(&mut self) -> Context<'_> {
        Context {
            binding: &mut self.binding,
            stage: &mut self.stage,
            presenter: &mut self.presenter,
            level: &mut self.level,
            host: &mut self.host,
        }
    }

    /// Position of the currently bound camera.
    #[must_use]
    pub fn camera_position(&self) -> Option<Vec3> {
        self.stage.camera_position(self.binding.camera)
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
