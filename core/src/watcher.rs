//! Directory watching for live scouting sessions.
//!
//! A scout file grows while the match is being scouted; watching the
//! directory lets a front-end re-parse on every save. The watcher emits
//! plain events over a channel; the consumer decides what to re-parse.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::ScoutError;

/// File extension scout logs are expected to carry.
pub const SCOUT_EXTENSION: &str = "dvw";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoutFileEvent {
    Created(PathBuf),
    Modified(PathBuf),
}

/// Watches one directory for scout-file changes.
pub struct ScoutWatcher {
    // Held for its Drop; dropping the watcher stops the notifications
    _watcher: RecommendedWatcher,
    rx: Receiver<ScoutFileEvent>,
}

impl ScoutWatcher {
    pub fn new(dir: &Path) -> Result<Self, ScoutError> {
        let (tx, rx) = channel();

        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            let Ok(event) = result else {
                return;
            };
            for path in scout_paths(&event) {
                let send = match event.kind {
                    EventKind::Create(_) => tx.send(ScoutFileEvent::Created(path)),
                    EventKind::Modify(_) => tx.send(ScoutFileEvent::Modified(path)),
                    _ => Ok(()),
                };
                if send.is_err() {
                    // Receiver gone; nothing left to notify
                    return;
                }
            }
        })?;
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        Ok(ScoutWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Block until the next scout-file event, or `None` once the watcher
    /// backend shut down.
    pub fn next_event(&self) -> Option<ScoutFileEvent> {
        self.rx.recv().ok()
    }
}

fn scout_paths(event: &Event) -> Vec<PathBuf> {
    event
        .paths
        .iter()
        .filter(|p| is_scout_file(p))
        .cloned()
        .collect()
}

pub fn is_scout_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(SCOUT_EXTENSION))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scout_file_extension_filter() {
        assert!(is_scout_file(Path::new("match_2025.dvw")));
        assert!(is_scout_file(Path::new("MATCH.DVW")));
        assert!(!is_scout_file(Path::new("notes.txt")));
        assert!(!is_scout_file(Path::new("dvw")));
    }
}
