//! Test stage: an in-memory `Stage` with a flat projection.

use std::collections::HashMap;

use courtship_core::stage::{CameraId, SceneId, SpriteId, Stage};
use glam::{Vec2, Vec3};

/// Pixels per world unit used by [`FakeStage::project`].
const PIXELS_PER_UNIT: f32 = 100.0;

/// A sprite currently held by a [`FakeStage`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteRecord {
    /// Scene the sprite was spawned into.
    pub scene: SceneId,
    /// Sprite kind (texture name).
    pub kind: String,
    /// Last position set.
    pub position: Vec3,
    /// Last uniform scale set.
    pub scale: f32,
}

/// A stage that keeps cameras and sprites in maps.
///
/// Projection is a flat orthographic mapping centred on the camera:
/// `x` grows to the right, `y` grows upward in the world and downward on
/// screen, with the camera at `(400, 300)`.
#[derive(Debug, Default)]
pub struct FakeStage {
    cameras: HashMap<CameraId, (Vec3, Vec3)>,
    sprites: HashMap<SpriteId, SpriteRecord>,
    next_sprite: u32,
    player: Option<Vec3>,
    sprite_kinds_missing: bool,
    removed_sprites: Vec<SpriteId>,
}

impl FakeStage {
    /// Creates a stage with one camera at the origin and the player at the origin.
    #[must_use]
    pub fn new(camera: CameraId) -> Self {
        let mut stage = Self {
            player: Some(Vec3::ZERO),
            ..Self::default()
        };
        stage.add_camera(camera, Vec3::ZERO);
        stage
    }

    /// Adds (or moves) a camera looking at the origin.
    pub fn add_camera(&mut self, camera: CameraId, position: Vec3) {
        self.cameras.insert(camera, (position, Vec3::ZERO));
    }

    /// Moves the player. `None` removes the player from the phase.
    pub fn set_player(&mut self, position: Option<Vec3>) {
        self.player = position;
    }

    /// Makes every subsequent `spawn_sprite` fail, as if textures were missing.
    pub fn without_sprite_textures(&mut self) {
        self.sprite_kinds_missing = true;
    }

    /// Current look-at target of a camera.
    #[must_use]
    pub fn camera_look_at(&self, camera: CameraId) -> Option<Vec3> {
        self.cameras.get(&camera).map(|(_, look_at)| *look_at)
    }

    /// Sprites still alive.
    #[must_use]
    pub fn sprites(&self) -> &HashMap<SpriteId, SpriteRecord> {
        &self.sprites
    }

    /// Sprites removed so far, in removal order.
    #[must_use]
    pub fn removed_sprites(&self) -> &[SpriteId] {
        &self.removed_sprites
    }
}

impl Stage for FakeStage {
    fn set_camera_pose(&mut self, camera: CameraId, position: Vec3, look_at: Vec3) {
        self.cameras.insert(camera, (position, look_at));
    }

    fn camera_position(&self, camera: CameraId) -> Option<Vec3> {
        self.cameras.get(&camera).map(|(position, _)| *position)
    }

    fn project(&self, camera: CameraId, world: Vec3) -> Option<Vec2> {
        let (position, _) = self.cameras.get(&camera)?;
        let offset = world - *position;
        Some(Vec2::new(
            400.0 + offset.x * PIXELS_PER_UNIT,
            300.0 - offset.y * PIXELS_PER_UNIT,
        ))
    }

    fn player_position(&self) -> Option<Vec3> {
        self.player
    }

    fn spawn_sprite(&mut self, scene: SceneId, kind: &str, position: Vec3) -> Option<SpriteId> {
        if self.sprite_kinds_missing {
            return None;
        }
        self.next_sprite += 1;
        let id = SpriteId(self.next_sprite);
        self.sprites.insert(
            id,
            SpriteRecord {
                scene,
                kind: kind.to_owned(),
                position,
                scale: 0.0,
            },
        );
        Some(id)
    }

    fn set_sprite_transform(&mut self, sprite: SpriteId, position: Vec3, scale: f32) {
        if let Some(record) = self.sprites.get_mut(&sprite) {
            record.position = position;
            record.scale = scale;
        }
    }

    fn remove_sprite(&mut self, sprite: SpriteId) {
        if self.sprites.remove(&sprite).is_some() {
            self.removed_sprites.push(sprite);
        }
    }
}
