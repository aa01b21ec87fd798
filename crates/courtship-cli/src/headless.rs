//! A world with no renderer: every collaborator keeps just enough state to
//! answer the sequencer's queries and logs what it was asked to do.

use std::collections::{BTreeMap, HashMap};

use courtship_core::completion::CompletionToken;
use courtship_core::context::Context;
use courtship_core::host::{GameState, Host, InputSnapshot};
use courtship_core::level::{CallbackTable, Level, LevelCallback, OverlayAction};
use courtship_core::presenter::{LabelId, LabelSpec, Presenter};
use courtship_core::stage::{CameraId, PhaseBinding, SceneId, SpriteId, Stage};
use glam::{Mat4, Vec2, Vec3};
use tracing::{debug, info};

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
const FOV_Y_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

#[derive(Debug, Clone, Copy)]
struct CameraPose {
    position: Vec3,
    look_at: Vec3,
}

/// Cameras, a stationary player, and a sprite table.
#[derive(Debug)]
pub struct HeadlessStage {
    cameras: HashMap<CameraId, CameraPose>,
    player: Option<Vec3>,
    sprites: HashMap<SpriteId, String>,
    next_sprite: u32,
    sprites_spawned: usize,
}

impl HeadlessStage {
    /// A stage with the player standing at the origin and no cameras posed yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cameras: HashMap::new(),
            player: Some(Vec3::ZERO),
            sprites: HashMap::new(),
            next_sprite: 1,
            sprites_spawned: 0,
        }
    }

    /// Moves the player, or removes it with `None`.
    pub fn set_player(&mut self, position: Option<Vec3>) {
        self.player = position;
    }

    /// Sprites currently alive.
    #[must_use]
    pub fn live_sprites(&self) -> usize {
        self.sprites.len()
    }

    /// Sprites created over the whole playthrough.
    #[must_use]
    pub fn sprites_spawned(&self) -> usize {
        self.sprites_spawned
    }
}

impl Default for HeadlessStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for HeadlessStage {
    fn set_camera_pose(&mut self, camera: CameraId, position: Vec3, look_at: Vec3) {
        self.cameras.insert(camera, CameraPose { position, look_at });
    }

    fn camera_position(&self, camera: CameraId) -> Option<Vec3> {
        self.cameras.get(&camera).map(|pose| pose.position)
    }

    fn project(&self, camera: CameraId, world: Vec3) -> Option<Vec2> {
        let pose = self.cameras.get(&camera)?;
        if pose.position == pose.look_at {
            return None;
        }
        let view = Mat4::look_at_rh(pose.position, pose.look_at, Vec3::Y);
        let projection =
            Mat4::perspective_rh(FOV_Y_RADIANS, VIEWPORT.x / VIEWPORT.y, NEAR, FAR);
        let clip = projection * view * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * VIEWPORT.x,
            (1.0 - ndc.y) * 0.5 * VIEWPORT.y,
        ))
    }

    fn player_position(&self) -> Option<Vec3> {
        self.player
    }

    fn spawn_sprite(&mut self, scene: SceneId, kind: &str, position: Vec3) -> Option<SpriteId> {
        let id = SpriteId(self.next_sprite);
        self.next_sprite += 1;
        self.sprites_spawned += 1;
        self.sprites.insert(id, kind.to_owned());
        debug!(scene = scene.0, sprite = id.0, kind, ?position, "sprite spawned");
        Some(id)
    }

    fn set_sprite_transform(&mut self, _sprite: SpriteId, _position: Vec3, _scale: f32) {}

    fn remove_sprite(&mut self, sprite: SpriteId) {
        if let Some(kind) = self.sprites.remove(&sprite) {
            debug!(sprite = sprite.0, %kind, "sprite removed");
        }
    }
}

/// Label and fade bookkeeping.
#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    labels: BTreeMap<LabelId, String>,
    next_label: u32,
    labels_created: usize,
    fade_visible: bool,
}

impl HeadlessPresenter {
    /// An empty overlay layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the labels currently on screen.
    #[must_use]
    pub fn visible_labels(&self) -> Vec<String> {
        self.labels.values().cloned().collect()
    }

    /// Labels created over the whole playthrough.
    #[must_use]
    pub fn labels_created(&self) -> usize {
        self.labels_created
    }

    /// Whether the fade overlay is showing.
    #[must_use]
    pub fn fade_visible(&self) -> bool {
        self.fade_visible
    }
}

impl Presenter for HeadlessPresenter {
    fn show_fade(&mut self, color: Option<&str>) {
        self.fade_visible = true;
        debug!(color = color.unwrap_or("black"), "fade shown");
    }

    fn set_fade_opacity(&mut self, _opacity: f32) {}

    fn hide_fade(&mut self) {
        self.fade_visible = false;
        debug!("fade hidden");
    }

    fn create_label(&mut self, spec: &LabelSpec) -> Option<LabelId> {
        self.next_label += 1;
        let id = LabelId(self.next_label);
        self.labels_created += 1;
        self.labels.insert(id, spec.text.clone());
        info!(label = id.0, style = ?spec.style, text = %spec.text, "label shown");
        Some(id)
    }

    fn place_label(&mut self, _label: LabelId, _screen: Vec2) {}

    fn set_label_opacity(&mut self, _label: LabelId, _opacity: f32) {}

    fn remove_label(&mut self, label: LabelId) {
        self.labels.remove(&label);
    }

    fn clear_labels(&mut self) {
        self.labels.clear();
    }
}

/// Phases, overlays, interaction triggers, and callbacks.
///
/// Every phase name is accepted; the first request for a name allocates a
/// fresh scene and camera for it.
#[derive(Debug)]
pub struct HeadlessLevel {
    phases: HashMap<String, PhaseBinding>,
    phase_history: Vec<String>,
    free_roam: bool,
    interactions: BTreeMap<String, CompletionToken>,
    overlays: BTreeMap<String, bool>,
    callbacks: CallbackTable,
}

impl HeadlessLevel {
    /// A level with no phases visited and no callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phases: HashMap::new(),
            phase_history: Vec::new(),
            free_roam: false,
            interactions: BTreeMap::new(),
            overlays: BTreeMap::new(),
            callbacks: CallbackTable::new(),
        }
    }

    /// Callbacks reachable from `custom_callback` beats.
    pub fn callbacks_mut(&mut self) -> &mut CallbackTable {
        &mut self.callbacks
    }

    /// Phase names in the order they were entered.
    #[must_use]
    pub fn phase_history(&self) -> &[String] {
        &self.phase_history
    }

    /// Whether the player controller is enabled.
    #[must_use]
    pub fn free_roam_enabled(&self) -> bool {
        self.free_roam
    }

    /// Targets with an armed interaction trigger.
    #[must_use]
    pub fn armed_interactions(&self) -> Vec<String> {
        self.interactions.keys().cloned().collect()
    }

    /// Fires an armed trigger the way a player using it would.
    pub fn use_interaction(&mut self, target: &str) -> bool {
        match self.interactions.get(target) {
            Some(token) => {
                token.complete();
                true
            }
            None => false,
        }
    }

    /// Overlays currently shown.
    #[must_use]
    pub fn visible_overlays(&self) -> Vec<String> {
        self.overlays
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn binding_for(&mut self, phase: &str) -> PhaseBinding {
        let next = u32::try_from(self.phases.len()).map_or(u32::MAX, |n| n + 2);
        *self
            .phases
            .entry(phase.to_owned())
            .or_insert(PhaseBinding {
                scene: SceneId(next),
                camera: CameraId(next),
            })
    }
}

impl Default for HeadlessLevel {
    fn default() -> Self {
        Self::new()
    }
}

impl Level for HeadlessLevel {
    fn enable_free_roam(&mut self) {
        self.free_roam = true;
        debug!("free roam enabled");
    }

    fn disable_free_roam(&mut self) {
        self.free_roam = false;
        debug!("free roam disabled");
    }

    fn enable_interaction(&mut self, target: &str, prompt: &str, token: CompletionToken) {
        info!(target_id = target, prompt, "interaction armed");
        self.interactions.insert(target.to_owned(), token);
    }

    fn disable_interaction(&mut self, target: &str) {
        self.interactions.remove(target);
    }

    fn control_overlay(&mut self, overlay: &str, action: OverlayAction) {
        let visible = action == OverlayAction::Show;
        info!(overlay, visible, "overlay toggled");
        self.overlays.insert(overlay.to_owned(), visible);
    }

    fn set_phase(&mut self, phase: &str) -> Option<PhaseBinding> {
        let binding = self.binding_for(phase);
        info!(phase, scene = binding.scene.0, "phase entered");
        self.phase_history.push(phase.to_owned());
        Some(binding)
    }

    fn callback(&self, name: &str) -> Option<LevelCallback> {
        self.callbacks.get(name)
    }
}

/// Game-state tracking and scripted input.
#[derive(Debug)]
pub struct HeadlessHost {
    state: GameState,
    state_changes: usize,
    input: InputSnapshot,
    panels_opened: Vec<&'static str>,
}

impl HeadlessHost {
    /// A host in cutscene state with no input.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::Cutscene,
            state_changes: 0,
            input: InputSnapshot::default(),
            panels_opened: Vec::new(),
        }
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of game-state switches.
    #[must_use]
    pub fn state_changes(&self) -> usize {
        self.state_changes
    }

    /// Input reported for the coming frame.
    pub fn set_input(&mut self, input: InputSnapshot) {
        self.input = input;
    }

    /// Panels opened, in order (`choice` or `story`).
    #[must_use]
    pub fn panels_opened(&self) -> &[&'static str] {
        &self.panels_opened
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for HeadlessHost {
    fn set_game_state(&mut self, state: GameState) {
        if state != self.state {
            self.state_changes += 1;
            debug!(?state, "game state changed");
        }
        self.state = state;
    }

    fn input(&self) -> InputSnapshot {
        self.input
    }

    fn on_show_choice(&mut self) {
        info!("choice panel opened");
        self.panels_opened.push("choice");
    }

    fn on_show_story(&mut self) {
        info!("story panel opened");
        self.panels_opened.push("story");
    }
}

/// One of each headless collaborator plus the current binding.
#[derive(Debug)]
pub struct HeadlessWorld {
    /// Scene/camera the sequence drives.
    pub binding: PhaseBinding,
    /// The stage.
    pub stage: HeadlessStage,
    /// The overlay layer.
    pub presenter: HeadlessPresenter,
    /// The level.
    pub level: HeadlessLevel,
    /// The host.
    pub host: HeadlessHost,
}

impl HeadlessWorld {
    /// Binding in effect before any scene swap.
    pub const INITIAL_BINDING: PhaseBinding = PhaseBinding {
        scene: SceneId(1),
        camera: CameraId(1),
    };

    /// A fresh world with the initial camera looking at the player.
    #[must_use]
    pub fn new() -> Self {
        let mut stage = HeadlessStage::new();
        stage.set_camera_pose(
            Self::INITIAL_BINDING.camera,
            Vec3::new(0.0, 2.0, 8.0),
            Vec3::ZERO,
        );
        Self {
            binding: Self::INITIAL_BINDING,
            stage,
            presenter: HeadlessPresenter::new(),
            level: HeadlessLevel::new(),
            host: HeadlessHost::new(),
        }
    }

    /// Borrows every collaborator into a context for one runner call.
    pub fn ctx(&mut self) -> Context<'_> {
        Context {
            binding: &mut self.binding,
            stage: &mut self.stage,
            presenter: &mut self.presenter,
            level: &mut self.level,
            host: &mut self.host,
        }
    }
}

impl Default for HeadlessWorld {
    fn default() -> Self {
        Self::new()
    }
}
