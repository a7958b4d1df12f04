// Facade: a home theater that hides three unrelated devices behind two calls.

use tracing::debug;

use crate::config::{FacadeConfig, DEFAULT_VOLUME};
use crate::console::Console;

// ============================================================================
// Subsystems
// ============================================================================

pub struct DvdPlayer<'c> {
    console: &'c dyn Console,
}

impl<'c> DvdPlayer<'c> {
    pub fn new(console: &'c dyn Console) -> Self {
        Self { console }
    }

    pub fn turn_on(&self) {
        self.console.line("DVD Player is turned ON.");
    }

    pub fn play(&self) {
        self.console.line("DVD Player is playing the movie.");
    }

    pub fn turn_off(&self) {
        self.console.line("DVD Player is turned OFF.");
    }
}

pub struct Projector<'c> {
    console: &'c dyn Console,
}

impl<'c> Projector<'c> {
    pub fn new(console: &'c dyn Console) -> Self {
        Self { console }
    }

    pub fn turn_on(&self) {
        self.console.line("Projector is turned ON.");
    }

    pub fn turn_off(&self) {
        self.console.line("Projector is turned OFF.");
    }
}

pub struct SoundSystem<'c> {
    console: &'c dyn Console,
}

impl<'c> SoundSystem<'c> {
    pub fn new(console: &'c dyn Console) -> Self {
        Self { console }
    }

    pub fn turn_on(&self) {
        self.console.line("Sound System is turned ON.");
    }

    pub fn set_volume(&self, level: u8) {
        self.console.line(&format!("Sound System volume set to {level}."));
    }

    pub fn turn_off(&self) {
        self.console.line("Sound System is turned OFF.");
    }
}

// ============================================================================
// Facade
// ============================================================================

pub struct HomeTheater<'c> {
    console: &'c dyn Console,
    dvd_player: DvdPlayer<'c>,
    projector: Projector<'c>,
    sound_system: SoundSystem<'c>,
    volume: u8,
}

impl<'c> HomeTheater<'c> {
    pub fn new(
        console: &'c dyn Console,
        dvd_player: DvdPlayer<'c>,
        projector: Projector<'c>,
        sound_system: SoundSystem<'c>,
    ) -> Self {
        Self {
            console,
            dvd_player,
            projector,
            sound_system,
            volume: DEFAULT_VOLUME,
        }
    }

    /// All three devices writing to the same console.
    pub fn with_console(console: &'c dyn Console) -> Self {
        Self::new(
            console,
            DvdPlayer::new(console),
            Projector::new(console),
            SoundSystem::new(console),
        )
    }

    pub fn volume(mut self, level: u8) -> Self {
        self.volume = level;
        self
    }

    /// DVD on, projector on, sound on, volume, play. In that order.
    pub fn watch_movie(&self) {
        debug!(volume = self.volume, "starting home theater");
        self.console.blank();
        self.console.line("Starting the Home Theater System...");
        self.dvd_player.turn_on();
        self.projector.turn_on();
        self.sound_system.turn_on();
        self.sound_system.set_volume(self.volume);
        self.dvd_player.play();
    }

    /// DVD off, projector off, sound off.
    pub fn end_movie(&self) {
        debug!("shutting down home theater");
        self.console.blank();
        self.console.line("Shutting down the Home Theater System...");
        self.dvd_player.turn_off();
        self.projector.turn_off();
        self.sound_system.turn_off();
    }
}

pub fn run(console: &dyn Console, config: &FacadeConfig) {
    let home_theater = HomeTheater::with_console(console).volume(config.volume);
    home_theater.watch_movie();
    home_theater.end_movie();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RecordingConsole;

    #[test]
    fn test_watch_movie_order() {
        let console = RecordingConsole::new();
        HomeTheater::with_console(&console).watch_movie();

        assert_eq!(
            console.non_blank_lines(),
            vec![
                "Starting the Home Theater System...",
                "DVD Player is turned ON.",
                "Projector is turned ON.",
                "Sound System is turned ON.",
                "Sound System volume set to 50.",
                "DVD Player is playing the movie.",
            ]
        );
    }

    #[test]
    fn test_end_movie_order() {
        let console = RecordingConsole::new();
        HomeTheater::with_console(&console).end_movie();

        assert_eq!(
            console.non_blank_lines(),
            vec![
                "Shutting down the Home Theater System...",
                "DVD Player is turned OFF.",
                "Projector is turned OFF.",
                "Sound System is turned OFF.",
            ]
        );
    }

    #[test]
    fn test_headers_are_preceded_by_blank_line() {
        let console = RecordingConsole::new();
        let theater = HomeTheater::with_console(&console);
        theater.watch_movie();
        theater.end_movie();

        let lines = console.lines();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "");
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "Shutting down the Home Theater System...");
    }

    #[test]
    fn test_configured_volume() {
        let console = RecordingConsole::new();
        run(&console, &FacadeConfig { volume: 75 });

        assert!(console
            .lines()
            .contains(&"Sound System volume set to 75.".to_string()));
    }

    #[test]
    fn test_subsystems_can_use_separate_consoles() {
        let main = RecordingConsole::new();
        let sound = RecordingConsole::new();
        let theater = HomeTheater::new(
            &main,
            DvdPlayer::new(&main),
            Projector::new(&main),
            SoundSystem::new(&sound),
        );

        theater.watch_movie();

        assert_eq!(
            sound.lines(),
            vec!["Sound System is turned ON.", "Sound System volume set to 50."]
        );
        assert!(!main.lines().iter().any(|l| l.starts_with("Sound System")));
    }
}
