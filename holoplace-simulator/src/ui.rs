use std::{
    io::BufRead,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc, Arc,
    },
};

use holoplace::{config::SplashOptions, contexts::UiEvent, contexts::UiSurface, HoloplaceResult};
use log::{debug, error, info, warn};

/// Turn a line typed at the console into a UI event.
///
/// ```
/// use holoplace::contexts::UiEvent;
/// use holoplace_simulator::ui::parse_command;
///
/// assert_eq!(parse_command("place"), Some(UiEvent::PlaceTapped));
/// assert_eq!(
///     parse_command("resize 800 600"),
///     Some(UiEvent::Resized { width: 800, height: 600, device_pixel_ratio: 1.0 })
/// );
/// assert_eq!(parse_command("dance"), None);
/// ```
pub fn parse_command(line: &str) -> Option<UiEvent> {
    let mut words = line.split_whitespace();
    match words.next()? {
        "start" | "s" => Some(UiEvent::StartTapped),
        "place" | "p" => Some(UiEvent::PlaceTapped),
        "quit" | "q" => Some(UiEvent::Quit),
        "resize" | "r" => {
            let width = words.next()?.parse().ok()?;
            let height = words.next()?.parse().ok()?;
            let device_pixel_ratio = match words.next() {
                Some(ratio) => ratio.parse().ok()?,
                None => 1.0,
            };
            Some(UiEvent::Resized {
                width,
                height,
                device_pixel_ratio,
            })
        }
        _ => None,
    }
}

/// A UI made of log lines and stdin. Type `start`, `place`, `resize W H [RATIO]` or `quit`.
pub struct ConsoleUi {
    /// Answer to the camera permission prompt
    pub grant_permission: bool,
    commands: mpsc::Receiver<UiEvent>,
    should_quit: Arc<AtomicBool>,
    auto_start: bool,
}

impl ConsoleUi {
    /// Start reading commands from stdin. `should_quit` is polled every frame, so a Ctrl-C
    /// handler can end the session.
    pub fn new(should_quit: Arc<AtomicBool>, auto_start: bool) -> HoloplaceResult<Self> {
        let (sender, commands) = mpsc::channel();
        std::thread::Builder::new()
            .name("console-ui".into())
            .spawn(move || {
                for line in std::io::stdin().lock().lines() {
                    let line = match line {
                        Ok(line) => line,
                        Err(e) => {
                            error!("[SIM_UI] Unable to read from stdin: {e:?}");
                            return;
                        }
                    };
                    match parse_command(&line) {
                        Some(event) => {
                            if sender.send(event).is_err() {
                                return;
                            }
                        }
                        None => warn!("[SIM_UI] Unknown command {line:?}"),
                    }
                }
            })?;

        Ok(Self {
            grant_permission: true,
            commands,
            should_quit,
            auto_start,
        })
    }
}

impl UiSurface for ConsoleUi {
    fn show_splash(&mut self, splash: &SplashOptions) {
        info!("[SIM_UI] ===== {} =====", splash.title);
        info!("[SIM_UI] {}", splash.subtitle);
        info!("[SIM_UI] [ {} ] (type `start`)", splash.button_text);
    }

    fn destroy_splash(&mut self) {
        debug!("[SIM_UI] Splash screen removed");
    }

    fn request_camera_permission(&mut self) -> bool {
        info!(
            "[SIM_UI] Camera permission {}",
            if self.grant_permission {
                "granted"
            } else {
                "denied"
            }
        );
        self.grant_permission
    }

    fn show_permission_denied(&mut self) {
        error!("[SIM_UI] Camera access is needed to place the hologram. Reload to try again.");
    }

    fn show_browser_incompatible(&mut self) {
        error!("[SIM_UI] This device can't run the experience.");
    }

    fn set_place_button_visible(&mut self, visible: bool) {
        debug!("[SIM_UI] Place button visible: {visible}");
    }

    fn set_place_button_label(&mut self, label: &str) {
        info!("[SIM_UI] [ {label} ] (type `place`)");
    }

    fn set_loading_indicator_visible(&mut self, visible: bool) {
        if visible {
            debug!("[SIM_UI] Loading..");
        } else {
            debug!("[SIM_UI] ..loaded");
        }
    }

    fn poll_events(&mut self) -> Vec<UiEvent> {
        let mut events = Vec::new();
        if self.auto_start {
            self.auto_start = false;
            events.push(UiEvent::StartTapped);
        }
        events.extend(self.commands.try_iter());
        if self.should_quit.load(Ordering::Relaxed) {
            events.push(UiEvent::Quit);
        }
        events
    }
}

/// A UI that plays back a fixed list of events, each on a given poll.
#[derive(Debug, Clone)]
pub struct ScriptedUi {
    /// Answer to the camera permission prompt
    pub grant_permission: bool,
    script: Vec<(u64, UiEvent)>,
    polls: u64,
}

impl ScriptedUi {
    /// `script` is a list of (poll number, event) pairs. Polls are counted from zero.
    pub fn new(script: Vec<(u64, UiEvent)>) -> Self {
        Self {
            grant_permission: true,
            script,
            polls: 0,
        }
    }
}

impl UiSurface for ScriptedUi {
    fn show_splash(&mut self, splash: &SplashOptions) {
        debug!("[SIM_UI] Splash: {}", splash.title);
    }

    fn destroy_splash(&mut self) {}

    fn request_camera_permission(&mut self) -> bool {
        self.grant_permission
    }

    fn show_permission_denied(&mut self) {}

    fn show_browser_incompatible(&mut self) {}

    fn set_place_button_visible(&mut self, _visible: bool) {}

    fn set_place_button_label(&mut self, _label: &str) {}

    fn set_loading_indicator_visible(&mut self, _visible: bool) {}

    fn poll_events(&mut self) -> Vec<UiEvent> {
        let poll = self.polls;
        self.polls += 1;
        self.script
            .iter()
            .filter(|(at, _)| *at == poll)
            .map(|(_, event)| *event)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_parse_commands() {
        assert_eq!(parse_command("  start "), Some(UiEvent::StartTapped));
        assert_eq!(parse_command("q"), Some(UiEvent::Quit));
        assert_eq!(
            parse_command("r 1920 1080 3"),
            Some(UiEvent::Resized {
                width: 1920,
                height: 1080,
                device_pixel_ratio: 3.0
            })
        );
        assert_eq!(parse_command("resize 1920"), None);
        assert_eq!(parse_command("resize wide tall"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    pub fn test_scripted_ui_plays_back_on_schedule() {
        let mut ui = ScriptedUi::new(vec![
            (0, UiEvent::StartTapped),
            (2, UiEvent::PlaceTapped),
            (2, UiEvent::Quit),
        ]);
        assert_eq!(ui.poll_events(), vec![UiEvent::StartTapped]);
        assert!(ui.poll_events().is_empty());
        assert_eq!(ui.poll_events(), vec![UiEvent::PlaceTapped, UiEvent::Quit]);
        assert!(ui.poll_events().is_empty());
    }
}
