//! `camera_move`: eased glide between two points.

use courtship_core::context::Context;
use glam::Vec3;

use super::timer::Timer;
use super::{Beat, BeatStatus};
use crate::domain::descriptors::CameraMoveSpec;
use crate::domain::easing::Easing;

/// Interpolates the bound camera from `from` to `to`, facing `look_at` every frame.
#[derive(Debug)]
pub struct CameraMoveBeat {
    from: Option<Vec3>,
    to: Vec3,
    look_at: Vec3,
    easing: Easing,
    timer: Timer,
}

impl CameraMoveBeat {
    /// Creates the beat from its descriptor fields.
    #[must_use]
    pub fn new(spec: &CameraMoveSpec) -> Self {
        Self {
            from: spec.from,
            to: spec.to,
            look_at: spec.look_at,
            easing: spec.easing,
            timer: Timer::new(spec.duration),
        }
    }

    fn position_at(&self, from: Vec3) -> Vec3 {
        from.lerp(self.to, self.easing.apply(self.timer.fraction()))
    }
}

impl Beat for CameraMoveBeat {
    fn start(&mut self, ctx: &mut Context<'_>) {
        let camera = ctx.binding.camera;
        // Without an explicit start point, glide from wherever the camera is.
        let from = self
            .from
            .or_else(|| ctx.stage.camera_position(camera))
            .unwrap_or(self.to);
        self.from = Some(from);
        ctx.stage.set_camera_pose(camera, from, self.look_at);
    }

    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> BeatStatus {
        self.timer.advance(dt);
        let position = self.position_at(self.from.unwrap_or(self.to));
        ctx.stage
            .set_camera_pose(ctx.binding.camera, position, self.look_at);
        BeatStatus::from_done(self.timer.fraction() >= 1.0)
    }

    fn finish(&mut self, _ctx: &mut Context<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtship_test_support::Harness;

    fn linear_move(duration: f32) -> CameraMoveSpec {
        CameraMoveSpec {
            from: Some(Vec3::ZERO),
            to: Vec3::new(0.0, 0.0, 10.0),
            look_at: Vec3::new(0.0, 1.0, 0.0),
            duration,
            easing: Easing::Linear,
        }
    }

    #[test]
    fn test_start_snaps_camera_to_from() {
        // Arrange
        let mut harness = Harness::new();
        harness.stage.add_camera(Harness::CAMERA, Vec3::new(9.0, 9.0, 9.0));
        let mut beat = CameraMoveBeat::new(&linear_move(2.0));

        // Act
        beat.start(&mut harness.ctx());

        // Assert
        assert_eq!(harness.camera_position(), Some(Vec3::ZERO));
        assert_eq!(
            harness.stage.camera_look_at(Harness::CAMERA),
            Some(Vec3::new(0.0, 1.0, 0.0))
        );
    }

    #[test]
    fn test_linear_move_reaches_midpoint_then_target() {
        let mut harness = Harness::new();
        let mut beat = CameraMoveBeat::new(&linear_move(2.0));
        beat.start(&mut harness.ctx());

        assert_eq!(beat.update(1.0, &mut harness.ctx()), BeatStatus::Running);
        let z = harness.camera_position().unwrap().z;
        assert!((z - 5.0).abs() < 1e-4, "z = {z}");

        assert_eq!(beat.update(1.0, &mut harness.ctx()), BeatStatus::Done);
        assert_eq!(harness.camera_position(), Some(Vec3::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn test_missing_from_uses_current_camera_position() {
        let mut harness = Harness::new();
        harness
            .stage
            .add_camera(Harness::CAMERA, Vec3::new(0.0, 0.0, 4.0));
        let mut spec = linear_move(1.0);
        spec.from = None;
        let mut beat = CameraMoveBeat::new(&spec);
        beat.start(&mut harness.ctx());

        beat.update(0.5, &mut harness.ctx());

        let z = harness.camera_position().unwrap().z;
        assert!((z - 7.0).abs() < 1e-4, "z = {z}");
    }

    #[test]
    fn test_zero_duration_lands_on_first_update() {
        let mut harness = Harness::new();
        let mut beat = CameraMoveBeat::new(&linear_move(0.0));
        beat.start(&mut harness.ctx());

        assert_eq!(beat.update(0.016, &mut harness.ctx()), BeatStatus::Done);
        assert_eq!(harness.camera_position(), Some(Vec3::new(0.0, 0.0, 10.0)));
    }
}
