//! Contracts for the collaborators screens consume: wall clock, network
//! status and a directory-tree filesystem.
//!
//! Collaborator failures never propagate past a screen. The screen logs them
//! and shows a placeholder instead.

use core::fmt;
use core::ops::Deref;

use heapless::{String, Vec};

// =============================================================================
// Text helpers
// =============================================================================

/// Copy as much of `text` as fits into a fixed-capacity string.
pub fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

// =============================================================================
// Clock
// =============================================================================

/// Time of day as shown on the home screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WallTime {
    /// 0-23
    pub hours: u8,
    /// 0-59
    pub minutes: u8,
    /// 0-59
    pub seconds: u8,
}

impl WallTime {
    /// Build a time from seconds since midnight (wraps past 24h).
    pub const fn from_day_seconds(secs: u32) -> Self {
        let secs = secs % 86_400;
        Self {
            hours: (secs / 3600) as u8,
            minutes: (secs / 60 % 60) as u8,
            seconds: (secs % 60) as u8,
        }
    }
}

impl fmt::Display for WallTime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Wall clock and monotonic uptime source.
pub trait Clock {
    /// Current time of day.
    fn now(&self) -> WallTime;

    /// Milliseconds since boot, used to timestamp log entries.
    fn uptime_ms(&self) -> u32;
}

// =============================================================================
// Network status
// =============================================================================

/// Capacity of each network detail string.
pub const INFO_LEN: usize = 24;

/// Fixed-capacity network detail text.
pub type InfoText = String<INFO_LEN>;

/// Association state of the wireless interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkState {
    /// Radio is off or absent.
    Disabled,
    /// Radio is on but not associated.
    NotConnected,
    /// Associated with an access point.
    Connected,
}

impl LinkState {
    /// Status line shown on the network screen.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Disabled => "WiFi Disabled",
            Self::NotConnected => "Not Connected",
            Self::Connected => "Connected",
        }
    }
}

/// Snapshot of the network interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkInfo {
    pub link: LinkState,
    pub ssid: InfoText,
    pub ip: InfoText,
    pub netmask: InfoText,
    pub gateway: InfoText,
    pub dns: InfoText,
    pub mac: InfoText,
    /// Signal strength, when the radio reports one.
    pub rssi_dbm: Option<i16>,
}

impl NetworkInfo {
    /// Info with every detail shown as `-`.
    pub fn placeholder(link: LinkState) -> Self {
        let dash = truncated("-");
        Self {
            link,
            ssid: dash.clone(),
            ip: dash.clone(),
            netmask: dash.clone(),
            gateway: dash.clone(),
            dns: dash.clone(),
            mac: dash,
            rssi_dbm: None,
        }
    }

    /// Whether an IP address is available.
    pub fn is_connected(&self) -> bool { self.link == LinkState::Connected }
}

/// Why network details could not be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetError {
    /// The radio driver did not answer.
    Unavailable,
    /// The driver answered with something unusable.
    InvalidResponse,
}

impl fmt::Display for NetError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("unavailable"),
            Self::InvalidResponse => f.write_str("bad response"),
        }
    }
}

/// Read-only view of the network interface.
pub trait NetworkStatus {
    fn info(&self) -> Result<NetworkInfo, NetError>;
}

// =============================================================================
// Filesystem
// =============================================================================

/// Maximum entries kept from one directory.
pub const MAX_DIR_ENTRIES: usize = 32;

/// Longest entry name kept in a listing (the FAT and littlefs limit).
pub const NAME_LEN: usize = 255;

/// Kind of directory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Folder,
    File,
}

/// One directory entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String<NAME_LEN>,
    pub kind: EntryKind,
}

impl DirEntry {
    /// `None` if `name` does not fit in [`NAME_LEN`] bytes.
    pub fn new(
        name: &str,
        kind: EntryKind,
    ) -> Option<Self> {
        let mut full = String::new();
        full.push_str(name).ok()?;
        Some(Self { name: full, kind })
    }

    /// Display order: folders first, then by name.
    fn sort_key(&self) -> (EntryKind, &str) { (self.kind, self.name.as_str()) }
}

/// Entries of one directory, at most [`MAX_DIR_ENTRIES`] of them.
///
/// Once full, an incoming entry replaces the kept entry that sorts last if
/// it sorts before it, so the listing always holds the first entries of the
/// display order regardless of read order. Anything not kept, including
/// names longer than [`NAME_LEN`], is counted in [`DirListing::omitted`].
#[derive(Debug, Default)]
pub struct DirListing {
    entries: Vec<DirEntry, MAX_DIR_ENTRIES>,
    omitted: usize,
}

impl DirListing {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            omitted: 0,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.omitted = 0;
    }

    pub fn insert(
        &mut self,
        name: &str,
        kind: EntryKind,
    ) {
        let Some(entry) = DirEntry::new(name, kind) else {
            self.omitted += 1;
            return;
        };
        if let Err(entry) = self.entries.push(entry) {
            self.omitted += 1;
            if let Some(last) = self.entries.iter_mut().max_by(|a, b| a.sort_key().cmp(&b.sort_key()))
                && entry.sort_key() < last.sort_key()
            {
                *last = entry;
            }
        }
    }

    /// Entries seen but not kept since the last [`DirListing::clear`].
    pub const fn omitted(&self) -> usize { self.omitted }

    /// Put the entries in display order.
    pub fn sort(&mut self) { self.entries.sort_unstable_by(|a, b| a.sort_key().cmp(&b.sort_key())); }
}

impl Deref for DirListing {
    type Target = [DirEntry];

    fn deref(&self) -> &[DirEntry] { &self.entries }
}

/// Why a filesystem operation failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FsError {
    /// No entry with that name in the current directory.
    NotFound,
    /// The entry exists but is a file.
    NotADirectory,
    /// Directory nesting exceeds what the implementation tracks.
    TooDeep,
    /// Underlying storage error.
    Io,
}

impl fmt::Display for FsError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("not found"),
            Self::NotADirectory => f.write_str("not a directory"),
            Self::TooDeep => f.write_str("too deep"),
            Self::Io => f.write_str("i/o error"),
        }
    }
}

/// Directory tree with a current working directory.
pub trait FileSystem {
    /// Return to the root directory.
    fn reset(&mut self);

    /// Whether the current directory is the root.
    fn is_root(&self) -> bool;

    /// Replace `out` with the entries of the current directory, via
    /// [`DirListing::clear`] and [`DirListing::insert`].
    fn read_dir(
        &mut self,
        out: &mut DirListing,
    ) -> Result<(), FsError>;

    /// Enter the folder `name` of the current directory.
    fn change_dir(
        &mut self,
        name: &str,
    ) -> Result<(), FsError>;

    /// Leave the current directory. A no-op at the root.
    fn parent(&mut self) -> Result<(), FsError>;
}

/// Node of a compile-time directory tree.
#[derive(Debug)]
pub struct StaticNode {
    pub name: &'static str,
    /// `Some` for folders, `None` for files.
    pub children: Option<&'static [StaticNode]>,
}

impl StaticNode {
    pub const fn file(name: &'static str) -> Self { Self { name, children: None } }

    pub const fn folder(
        name: &'static str,
        children: &'static [StaticNode],
    ) -> Self {
        Self {
            name,
            children: Some(children),
        }
    }
}

/// Maximum folder nesting tracked by [`StaticFs`].
pub const STATIC_FS_DEPTH: usize = 8;

/// In-memory, read-only [`FileSystem`] over a [`StaticNode`] tree.
pub struct StaticFs {
    root: &'static [StaticNode],
    path: Vec<&'static [StaticNode], STATIC_FS_DEPTH>,
}

impl StaticFs {
    pub const fn new(root: &'static [StaticNode]) -> Self {
        Self {
            root,
            path: Vec::new(),
        }
    }

    fn current(&self) -> &'static [StaticNode] { self.path.last().copied().unwrap_or(self.root) }
}

impl FileSystem for StaticFs {
    fn reset(&mut self) { self.path.clear(); }

    fn is_root(&self) -> bool { self.path.is_empty() }

    fn read_dir(
        &mut self,
        out: &mut DirListing,
    ) -> Result<(), FsError> {
        out.clear();
        for node in self.current() {
            let kind = if node.children.is_some() { EntryKind::Folder } else { EntryKind::File };
            out.insert(node.name, kind);
        }
        Ok(())
    }

    fn change_dir(
        &mut self,
        name: &str,
    ) -> Result<(), FsError> {
        let node = self.current().iter().find(|node| node.name == name).ok_or(FsError::NotFound)?;
        let children = node.children.ok_or(FsError::NotADirectory)?;
        self.path.push(children).map_err(|_| FsError::TooDeep)
    }

    fn parent(&mut self) -> Result<(), FsError> {
        self.path.pop();
        Ok(())
    }
}
