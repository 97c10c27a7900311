use crate::config::SplashOptions;

/// Things the user can do to the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// The start button on the splash screen was tapped
    StartTapped,
    /// The place / pick up button was tapped
    PlaceTapped,
    /// The window changed size
    Resized {
        /// New width in CSS pixels
        width: u32,
        /// New height in CSS pixels
        height: u32,
        /// Device pixel ratio of the display
        device_pixel_ratio: f32,
    },
    /// The user wants out
    Quit,
}

/// The handful of UI elements the experience needs.
pub trait UiSurface {
    /// Show the consent screen
    fn show_splash(&mut self, splash: &SplashOptions);
    /// Remove the consent screen
    fn destroy_splash(&mut self);
    /// Ask the user for camera access. Returns true if granted.
    fn request_camera_permission(&mut self) -> bool;
    /// Blocking message: camera access was denied
    fn show_permission_denied(&mut self);
    /// Blocking message: this environment can't run the experience
    fn show_browser_incompatible(&mut self);
    /// Show or hide the place / pick up button
    fn set_place_button_visible(&mut self, visible: bool);
    /// Change the label of the place / pick up button
    fn set_place_button_label(&mut self, label: &str);
    /// Show or hide the loading indicator
    fn set_loading_indicator_visible(&mut self, visible: bool);
    /// Everything the user has done since the last call
    fn poll_events(&mut self) -> Vec<UiEvent>;
}

/// Wrapper around the [`UiSurface`]. Remembers what it last told the surface, so the rest of
/// the engine can ask.
pub struct UiContext {
    surface: Box<dyn UiSurface>,
    place_button_label: String,
    place_button_visible: bool,
    loading_indicator_visible: bool,
}

impl UiContext {
    /// Wrap a surface
    pub fn new(surface: Box<dyn UiSurface>) -> Self {
        Self {
            surface,
            place_button_label: String::new(),
            place_button_visible: false,
            loading_indicator_visible: false,
        }
    }

    /// Access the underlying surface
    pub fn surface(&mut self) -> &mut dyn UiSurface {
        self.surface.as_mut()
    }

    /// Everything the user has done since the last call
    pub fn poll_events(&mut self) -> Vec<UiEvent> {
        self.surface.poll_events()
    }

    /// Show or hide the place button
    pub fn set_place_button_visible(&mut self, visible: bool) {
        self.place_button_visible = visible;
        self.surface.set_place_button_visible(visible);
    }

    /// Relabel the place button
    pub fn set_place_button_label(&mut self, label: &str) {
        self.place_button_label = label.to_string();
        self.surface.set_place_button_label(label);
    }

    /// Show or hide the loading indicator
    pub fn set_loading_indicator_visible(&mut self, visible: bool) {
        self.loading_indicator_visible = visible;
        self.surface.set_loading_indicator_visible(visible);
    }

    /// The place button's current label
    pub fn place_button_label(&self) -> &str {
        &self.place_button_label
    }

    /// Is the place button showing?
    pub fn place_button_visible(&self) -> bool {
        self.place_button_visible
    }

    /// Is the loading indicator showing?
    pub fn loading_indicator_visible(&self) -> bool {
        self.loading_indicator_visible
    }
}
