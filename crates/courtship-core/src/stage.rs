//! The 3D stage a sequence plays on.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Identifies a scene owned by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneId(pub u32);

/// Identifies a camera owned by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CameraId(pub u32);

/// Identifies a sprite created through [`Stage::spawn_sprite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

/// The scene and camera a sequence currently drives.
///
/// Scene swaps replace both at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseBinding {
    /// Scene that receives spawned sprites.
    pub scene: SceneId,
    /// Camera moved by camera beats and used for screen projection.
    pub camera: CameraId,
}

/// Host-side access to cameras, the player, and transient sprites.
///
/// The sequencer never owns anything behind this trait except the sprites it
/// spawns itself, which it always removes again.
pub trait Stage {
    /// Moves a camera and re-orients it toward `look_at`.
    fn set_camera_pose(&mut self, camera: CameraId, position: Vec3, look_at: Vec3);

    /// Current world position of a camera, if it exists.
    fn camera_position(&self, camera: CameraId) -> Option<Vec3>;

    /// Projects a world position to screen pixels through `camera`.
    ///
    /// Returns `None` when the point is behind the camera or the camera is unknown.
    fn project(&self, camera: CameraId, world: Vec3) -> Option<Vec2>;

    /// The player's world position, or `None` when the phase has no player.
    fn player_position(&self) -> Option<Vec3>;

    /// Adds a camera-facing sprite of the given kind to `scene`.
    ///
    /// Returns `None` when the kind has no texture.
    fn spawn_sprite(&mut self, scene: SceneId, kind: &str, position: Vec3) -> Option<SpriteId>;

    /// Updates a sprite's position and uniform scale.
    fn set_sprite_transform(&mut self, sprite: SpriteId, position: Vec3, scale: f32);

    /// Removes a sprite from whatever scene holds it.
    fn remove_sprite(&mut self, sprite: SpriteId);
}
