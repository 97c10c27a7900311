//! Recording fakes for the external collaborators. Every fake writes to one shared [`CallLog`],
//! so tests can assert on the order calls happened in across all of them.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use glam::{Affine3A, Vec3};
use hecs::World;

use crate::{
    components::{Hologram, Visible},
    config::{HoloplaceConfig, SplashOptions},
    contexts::{
        hologram_context::{
            HologramEventSender, HologramMeshData, HologramMeshHandle, HologramRequest,
            HologramSubMesh, LoopMode, VideoElement,
        },
        tracking_context::{BackgroundTexture, Camera},
        HologramContext, HologramPlayer, HologramSource, Renderer, TrackingProvider, UiEvent,
        UiSurface,
    },
    Engine, EngineBuilder, HoloplaceResult,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    // Tracking
    StartTracking,
    UpdateFrame,
    AnchorPose(Vec3),
    // Hologram
    CreateHologram(HologramRequest),
    Play(bool),
    Pause,
    UpdateHologram,
    SetQuality(u32),
    SetHologramTime(f32),
    DisposeData,
    Mute,
    Unmute,
    // Rendering
    Render { holograms: usize },
    SetSize(u32, u32, f32),
    // UI
    ShowSplash(String),
    DestroySplash,
    RequestCameraPermission,
    ShowPermissionDenied,
    ShowBrowserIncompatible,
    SetPlaceButtonVisible(bool),
    SetPlaceButtonLabel(String),
    SetLoadingIndicatorVisible(bool),
}

#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn contains(&self, call: &Call) -> bool {
        self.0.borrow().contains(call)
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.0.borrow().iter().filter(|c| predicate(c)).count()
    }
}

#[derive(Clone)]
pub struct FakeTracking {
    log: CallLog,
    pub supported: bool,
    camera: Rc<Cell<Affine3A>>,
    fail_updates: Rc<Cell<bool>>,
}

impl FakeTracking {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            supported: true,
            camera: Rc::new(Cell::new(Affine3A::IDENTITY)),
            fail_updates: Default::default(),
        }
    }

    pub fn move_camera(&self, global_from_view: Affine3A) {
        self.camera.set(global_from_view);
    }

    pub fn fail_updates(&self) {
        self.fail_updates.set(true);
    }
}

impl TrackingProvider for FakeTracking {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn start(&mut self) -> HoloplaceResult<()> {
        self.log.push(Call::StartTracking);
        Ok(())
    }

    fn update_frame(&mut self) -> HoloplaceResult<()> {
        self.log.push(Call::UpdateFrame);
        if self.fail_updates.get() {
            return Err(anyhow::anyhow!("Tracking lost the camera").into());
        }
        Ok(())
    }

    fn anchor_pose_from_camera_offset(&mut self, offset: Vec3) -> HoloplaceResult<Affine3A> {
        self.log.push(Call::AnchorPose(offset));
        Ok(self.camera.get() * Affine3A::from_translation(offset))
    }

    fn camera(&self) -> Camera {
        Camera {
            global_from_view: self.camera.get(),
            background: BackgroundTexture(1),
        }
    }
}

#[derive(Clone)]
pub struct FakeHologramSource {
    log: CallLog,
    events: Rc<RefCell<Option<HologramEventSender>>>,
    mesh_available: Rc<Cell<bool>>,
}

impl FakeHologramSource {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            events: Default::default(),
            mesh_available: Default::default(),
        }
    }

    /// The sender handed to the player
    pub fn events(&self) -> HologramEventSender {
        self.events
            .borrow()
            .clone()
            .expect("create_hologram has not been called")
    }

    /// Make the mesh available and report Created
    pub fn create_mesh(&self) {
        self.mesh_available.set(true);
        self.events().created();
    }

    /// Report Playable
    pub fn make_playable(&self) {
        self.events().playable();
    }
}

impl HologramSource for FakeHologramSource {
    fn create_hologram(
        &mut self,
        request: HologramRequest,
        events: HologramEventSender,
    ) -> HoloplaceResult<Box<dyn HologramPlayer>> {
        self.log.push(Call::CreateHologram(request));
        *self.events.borrow_mut() = Some(events);
        Ok(Box::new(FakeHologramPlayer {
            log: self.log.clone(),
            mesh_available: self.mesh_available.clone(),
        }))
    }
}

pub struct FakeHologramPlayer {
    log: CallLog,
    mesh_available: Rc<Cell<bool>>,
}

impl HologramPlayer for FakeHologramPlayer {
    fn play_hologram(&mut self, user_interaction: bool) {
        self.log.push(Call::Play(user_interaction));
    }

    fn pause_hologram(&mut self) {
        self.log.push(Call::Pause);
    }

    fn mesh(&self) -> Option<HologramMeshData> {
        self.mesh_available.get().then(|| HologramMeshData {
            root: HologramMeshHandle(100),
            sub_meshes: vec![HologramSubMesh {
                handle: HologramMeshHandle(101),
                name: "Performer".into(),
            }],
        })
    }

    fn update_hologram(&mut self) {
        self.log.push(Call::UpdateHologram);
    }

    fn set_quality(&mut self, quality: u32) {
        self.log.push(Call::SetQuality(quality));
    }

    fn set_hologram_time(&mut self, seconds: f32) {
        self.log.push(Call::SetHologramTime(seconds));
    }

    fn video_element(&self) -> Option<VideoElement> {
        self.mesh_available.get().then_some(VideoElement(5))
    }

    fn dispose_data(&mut self) {
        self.log.push(Call::DisposeData);
    }

    fn mute(&mut self) {
        self.log.push(Call::Mute);
    }

    fn unmute(&mut self) {
        self.log.push(Call::Unmute);
    }
}

pub fn hologram_context(log: CallLog) -> (HologramContext, FakeHologramSource) {
    let mut source = FakeHologramSource::new(log.clone());
    let context = HologramContext::new(
        &mut source,
        HologramRequest {
            url: "hologram.sxrweb".into(),
            loop_mode: LoopMode::Loop,
            texture_override_url: None,
        },
        None,
    )
    .unwrap();
    log.clear();
    (context, source)
}

#[derive(Clone)]
pub struct FakeRenderer {
    log: CallLog,
    fail_next: Rc<Cell<bool>>,
}

impl FakeRenderer {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_next: Default::default(),
        }
    }

    pub fn fail_next_render(&self) {
        self.fail_next.set(true);
    }
}

impl Renderer for FakeRenderer {
    fn render(&mut self, world: &World, _camera: &Camera) -> HoloplaceResult<()> {
        if self.fail_next.replace(false) {
            return Err(anyhow::anyhow!("Device lost").into());
        }
        let holograms = world
            .query::<&Hologram>()
            .with::<&Visible>()
            .iter()
            .count();
        self.log.push(Call::Render { holograms });
        Ok(())
    }

    fn set_size(&mut self, width: u32, height: u32, pixel_ratio: f32) {
        self.log.push(Call::SetSize(width, height, pixel_ratio));
    }
}

#[derive(Clone)]
pub struct FakeUi {
    log: CallLog,
    pub grant_permission: bool,
    events: Rc<RefCell<Vec<UiEvent>>>,
}

impl FakeUi {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            grant_permission: true,
            events: Default::default(),
        }
    }

    pub fn push_event(&self, event: UiEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl UiSurface for FakeUi {
    fn show_splash(&mut self, splash: &SplashOptions) {
        self.log.push(Call::ShowSplash(splash.title.clone()));
    }

    fn destroy_splash(&mut self) {
        self.log.push(Call::DestroySplash);
    }

    fn request_camera_permission(&mut self) -> bool {
        self.log.push(Call::RequestCameraPermission);
        self.grant_permission
    }

    fn show_permission_denied(&mut self) {
        self.log.push(Call::ShowPermissionDenied);
    }

    fn show_browser_incompatible(&mut self) {
        self.log.push(Call::ShowBrowserIncompatible);
    }

    fn set_place_button_visible(&mut self, visible: bool) {
        self.log.push(Call::SetPlaceButtonVisible(visible));
    }

    fn set_place_button_label(&mut self, label: &str) {
        self.log.push(Call::SetPlaceButtonLabel(label.to_string()));
    }

    fn set_loading_indicator_visible(&mut self, visible: bool) {
        self.log.push(Call::SetLoadingIndicatorVisible(visible));
    }

    fn poll_events(&mut self) -> Vec<UiEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

/// An engine wired to fakes, plus handles to drive them.
pub struct Harness {
    pub engine: Engine,
    pub log: CallLog,
    pub tracking: FakeTracking,
    pub source: FakeHologramSource,
    pub renderer: FakeRenderer,
    pub ui: FakeUi,
}

impl Harness {
    pub fn new(config: HoloplaceConfig) -> HoloplaceResult<Self> {
        Self::with_fakes(config, |_, _| {})
    }

    pub fn with_fakes(
        config: HoloplaceConfig,
        adjust: impl FnOnce(&mut FakeTracking, &mut FakeUi),
    ) -> HoloplaceResult<Self> {
        let log = CallLog::default();
        let mut tracking = FakeTracking::new(log.clone());
        let source = FakeHologramSource::new(log.clone());
        let renderer = FakeRenderer::new(log.clone());
        let mut ui = FakeUi::new(log.clone());
        adjust(&mut tracking, &mut ui);

        let engine = EngineBuilder::new(config)
            .tracking_provider(Box::new(tracking.clone()))
            .hologram_source(Box::new(source.clone()))
            .renderer(Box::new(renderer.clone()))
            .ui_surface(Box::new(ui.clone()))
            .build()?;

        Ok(Self {
            engine,
            log,
            tracking,
            source,
            renderer,
            ui,
        })
    }

    /// Tap through the splash screen and start the frame loop
    pub fn started() -> Self {
        let mut harness = Self::new(HoloplaceConfig::default()).unwrap();
        harness.ui.push_event(UiEvent::StartTapped);
        harness.engine.update().unwrap();
        harness.log.clear();
        harness
    }

    /// Update, then run one frame
    pub fn frame(&mut self) {
        self.engine.update().unwrap();
        assert!(self.engine.tick().unwrap());
    }
}
