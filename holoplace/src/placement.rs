use log::info;

/// Is the hologram following the camera, or locked in the room?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementState {
    /// The anchor follows the camera at a fixed offset
    #[default]
    Unplaced,
    /// The anchor is frozen where the user put it
    Placed,
}

/// Whether the hologram should be playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Start (or resume) playback
    Play,
    /// Pause playback
    Pause,
}

/// Whether the hologram's audio should be heard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audio {
    /// Audio on
    Unmuted,
    /// Audio off
    Muted,
}

/// The visible consequences of a placement transition.
///
/// The controller never touches the scene or the player itself; `placement_system` applies these.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementEffects {
    /// The state we've just entered
    pub state: PlacementState,
    /// What the hologram player should do
    pub playback: Playback,
    /// What the hologram's audio should do
    pub audio: Audio,
    /// New opacity of the placement hotspot decal
    pub hotspot_opacity: f32,
    /// New label for the place / pick up button
    pub label: String,
}

/// Two-state place / pick up toggle, driven by taps on a single button.
#[derive(Debug, Clone)]
pub struct PlacementController {
    state: PlacementState,
    place_label: String,
    pick_up_label: String,
}

impl PlacementController {
    /// Start unplaced, with the given button labels
    pub fn new(place_label: impl Into<String>, pick_up_label: impl Into<String>) -> Self {
        Self {
            state: PlacementState::Unplaced,
            place_label: place_label.into(),
            pick_up_label: pick_up_label.into(),
        }
    }

    /// The current state
    pub fn state(&self) -> PlacementState {
        self.state
    }

    /// Has the hologram been placed?
    pub fn is_placed(&self) -> bool {
        self.state == PlacementState::Placed
    }

    /// The label the button should show right now
    pub fn label(&self) -> &str {
        match self.state {
            PlacementState::Unplaced => &self.place_label,
            PlacementState::Placed => &self.pick_up_label,
        }
    }

    /// Flip between placed and unplaced. Always succeeds.
    pub fn toggle(&mut self) -> PlacementEffects {
        self.state = match self.state {
            PlacementState::Unplaced => PlacementState::Placed,
            PlacementState::Placed => PlacementState::Unplaced,
        };
        info!("[HOLOPLACE_PLACEMENT] Now {:?}", self.state);
        self.effects()
    }

    /// What the world should look like in the current state
    pub fn effects(&self) -> PlacementEffects {
        match self.state {
            PlacementState::Placed => PlacementEffects {
                state: self.state,
                playback: Playback::Play,
                audio: Audio::Unmuted,
                hotspot_opacity: 0.0,
                label: self.pick_up_label.clone(),
            },
            PlacementState::Unplaced => PlacementEffects {
                state: self.state,
                playback: Playback::Pause,
                audio: Audio::Muted,
                hotspot_opacity: 1.0,
                label: self.place_label.clone(),
            },
        }
    }
}
