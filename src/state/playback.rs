//! Audio playback flags shared between the page and its controls.

#[cfg(test)]
#[path = "playback_test.rs"]
mod playback_test;

/// Playback status for the one-at-a-time audio session.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaybackState {
    /// A fetched audio clip is currently playing.
    pub playing: bool,
    /// A settings-change restart is in flight; suppresses further
    /// restarts until the replacement playback starts or fails.
    pub auto_restarting: bool,
}

impl PlaybackState {
    /// Whether a rate/pitch/language change should stop the current
    /// audio and refetch with the new parameters.
    #[must_use]
    pub fn should_restart_on_change(&self, has_audio: bool, has_summary: bool) -> bool {
        self.playing && has_audio && has_summary && !self.auto_restarting
    }
}
