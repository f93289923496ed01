use std::fmt;

use kv_log_macro as log;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// How locations are represented in the URLs the history exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// `/base/42`
    #[default]
    Web,
    /// `/base/#/42`
    Hash,
}

/// A router-relative location: path, raw query pairs and fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub hash: String,
}

impl Default for Location {
    fn default() -> Self {
        Location {
            path: "/".to_string(),
            query: vec![],
            hash: String::new(),
        }
    }
}

impl Location {
    /// Splits `/42?tab=cast#top` into its parts. Nothing is decoded.
    pub fn parse(target: &str) -> Location {
        let (rest, hash) = match target.find('#') {
            Some(i) => (&target[..i], &target[i..]),
            None => (target, ""),
        };
        let (path, query) = match rest.find('?') {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        let query = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();

        Location {
            path,
            query,
            hash: hash.to_string(),
        }
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if !self.query.is_empty() {
            full.push('?');
            let pairs: Vec<String> = self
                .query
                .iter()
                .map(|(key, value)| {
                    if value.is_empty() {
                        key.clone()
                    } else {
                        format!("{}={}", key, value)
                    }
                })
                .collect();
            full.push_str(&pairs.join("&"));
        }
        full.push_str(&self.hash);
        full
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path())
    }
}

impl ::log::kv::ToValue for Location {
    fn to_value(&self) -> ::log::kv::Value<'_> {
        ::log::kv::Value::from_display(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Replace,
    Pop,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationEvent {
    pub from: Location,
    pub to: Location,
    pub kind: NavigationKind,
}

const EVENT_CAPACITY: usize = 64;

/// Session history the router reads its current location from.
///
/// Entries form a stack with a cursor, like a browser tab: pushing drops
/// every entry ahead of the cursor, `go` moves the cursor. Each effective
/// change is broadcast to subscribers as a [`NavigationEvent`].
pub struct History {
    mode: HistoryMode,
    base: String,
    entries: Vec<Location>,
    position: usize,
    events: broadcast::Sender<NavigationEvent>,
}

impl History {
    pub fn new(mode: HistoryMode, base: &str) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        History {
            mode,
            base: normalize_base(base),
            entries: vec![Location::default()],
            position: 0,
            events,
        }
    }

    /// Path-based history, the strategy used when no hash fragment is wanted.
    pub fn web(base: &str) -> Self {
        History::new(HistoryMode::Web, base)
    }

    pub fn hash(base: &str) -> Self {
        History::new(HistoryMode::Hash, base)
    }

    /// Starts the session at the location a browser URL points to.
    pub fn with_initial_url(mut self, url: &str) -> Self {
        self.entries = vec![self.location_from_url(url)];
        self.position = 0;
        self
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// The normalized base: no trailing slash, empty for the site root.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn location(&self) -> &Location {
        &self.entries[self.position]
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The URL shown for `location`.
    pub fn href(&self, location: &Location) -> String {
        match self.mode {
            HistoryMode::Web => format!("{}{}", self.base, location.full_path()),
            HistoryMode::Hash => format!("{}/#{}", self.base, location.full_path()),
        }
    }

    /// Reads the location out of a browser URL. URLs outside the base are
    /// taken as they are; a hash-mode URL without a fragment is the root.
    pub fn location_from_url(&self, url: &str) -> Location {
        let url = strip_origin(url);
        match self.mode {
            HistoryMode::Web => Location::parse(strip_base(url, &self.base)),
            HistoryMode::Hash => match url.find('#') {
                Some(i) => Location::parse(&url[i + 1..]),
                None => Location::default(),
            },
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NavigationEvent> {
        self.events.subscribe()
    }

    pub fn push(&mut self, location: Location) -> Option<NavigationEvent> {
        if location == *self.location() {
            log::debug!("Duplicated navigation ignored", { to: location });
            return None;
        }

        let from = self.location().clone();
        self.entries.truncate(self.position + 1);
        self.entries.push(location);
        self.position += 1;

        Some(self.emit(from, NavigationKind::Push))
    }

    pub fn replace(&mut self, location: Location) -> Option<NavigationEvent> {
        if location == *self.location() {
            log::debug!("Duplicated navigation ignored", { to: location });
            return None;
        }

        let from = std::mem::replace(&mut self.entries[self.position], location);

        Some(self.emit(from, NavigationKind::Replace))
    }

    pub fn go(&mut self, delta: isize) -> Option<NavigationEvent> {
        let target = (self.position as isize).checked_add(delta);
        let Some(target) = target.filter(|t| {
            delta != 0 && (0..self.entries.len() as isize).contains(t)
        }) else {
            log::debug!("History traversal out of range", {
                position: self.position,
                delta: delta
            });
            return None;
        };

        let from = self.location().clone();
        self.position = target as usize;

        Some(self.emit(from, NavigationKind::Pop))
    }

    pub fn back(&mut self) -> Option<NavigationEvent> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<NavigationEvent> {
        self.go(1)
    }

    fn emit(&self, from: Location, kind: NavigationKind) -> NavigationEvent {
        let event = NavigationEvent {
            from,
            to: self.location().clone(),
            kind,
        };

        // No subscribers is fine.
        let _ = self.events.send(event.clone());

        event
    }
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn strip_origin(url: &str) -> &str {
    match url.find("://") {
        Some(i) => {
            let after_scheme = &url[i + 3..];
            match after_scheme.find(['/', '?', '#']) {
                Some(j) => &after_scheme[j..],
                None => "/",
            }
        }
        None => url,
    }
}

fn strip_base<'a>(url: &'a str, base: &str) -> &'a str {
    if base.is_empty() {
        return url;
    }

    match url.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '?', '#']) => rest,
        _ => url,
    }
}
