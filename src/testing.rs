//! Test doubles shared by the in-crate unit tests.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::BLACK;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, timing::MAX_TIMERS};
use crate::log_buffer::LogBuffer;
use crate::palette::Palette;
use crate::screen::{Context, Preferences};
use crate::services::{
    Clock,
    LinkState,
    NetError,
    NetworkInfo,
    NetworkStatus,
    StaticFs,
    StaticNode,
    WallTime,
    truncated,
};
use crate::surface::Surface;
use crate::timers::AlarmTable;

/// One recorded drawing call, with the pen color at the time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Clear(Rgb565),
    Rect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Rgb565,
    },
    Line {
        from: (i32, i32),
        to: (i32, i32),
        color: Rgb565,
    },
    Circle {
        center: (i32, i32),
        radius: u32,
        color: Rgb565,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        scale: u8,
        color: Rgb565,
    },
}

/// Surface that records every call. Text is 6px per character per scale step.
pub struct RecordingSurface {
    pub ops: Vec<Op>,
    pub frames: usize,
    pen: Rgb565,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            frames: 0,
            pen: BLACK,
        }
    }

    /// Text drawn since the last `reset`, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The text op whose string equals `text`, if any.
    pub fn find_text(
        &self,
        text: &str,
    ) -> Option<&Op> {
        self.ops.iter().find(|op| matches!(op, Op::Text { text: t, .. } if t == text))
    }

    pub fn reset(&mut self) {
        self.ops.clear();
        self.frames = 0;
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> (u32, u32) { (SCREEN_WIDTH, SCREEN_HEIGHT) }

    fn set_pen(
        &mut self,
        color: Rgb565,
    ) {
        self.pen = color;
    }

    fn clear(&mut self) { self.ops.push(Op::Clear(self.pen)); }

    fn rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) {
        self.ops.push(Op::Rect {
            x,
            y,
            width,
            height,
            color: self.pen,
        });
    }

    fn line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    ) {
        self.ops.push(Op::Line {
            from: (x1, y1),
            to: (x2, y2),
            color: self.pen,
        });
    }

    fn circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u32,
    ) {
        self.ops.push(Op::Circle {
            center: (cx, cy),
            radius,
            color: self.pen,
        });
    }

    fn text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        scale: u8,
    ) {
        self.ops.push(Op::Text {
            text: text.to_string(),
            x,
            y,
            scale,
            color: self.pen,
        });
    }

    fn measure_text(
        &self,
        text: &str,
        scale: u8,
    ) -> u32 {
        text.chars().count() as u32 * 6 * u32::from(scale)
    }

    fn update(&mut self) { self.frames += 1; }
}

/// Clock frozen at a settable instant.
pub struct FixedClock {
    pub time: WallTime,
    pub uptime_ms: u32,
}

impl Clock for FixedClock {
    fn now(&self) -> WallTime { self.time }

    fn uptime_ms(&self) -> u32 { self.uptime_ms }
}

/// Network status returning a canned result.
pub struct FakeNetwork(pub Result<NetworkInfo, NetError>);

impl FakeNetwork {
    pub fn connected(ip: &str) -> Self {
        let mut info = NetworkInfo::placeholder(LinkState::Connected);
        info.ssid = truncated("lab");
        info.ip = truncated(ip);
        info.rssi_dbm = Some(-61);
        Self(Ok(info))
    }
}

impl NetworkStatus for FakeNetwork {
    fn info(&self) -> Result<NetworkInfo, NetError> { self.0.clone() }
}

static EMPTY: [StaticNode; 0] = [];
static PROJECTS: [StaticNode; 2] = [StaticNode::file("notes.txt"), StaticNode::folder("old", &EMPTY)];

/// Small directory tree: files and folders deliberately out of order.
pub static TEST_TREE: [StaticNode; 4] = [
    StaticNode::file("main.py"),
    StaticNode::folder("projects", &PROJECTS),
    StaticNode::file("boot.py"),
    StaticNode::folder("lib", &EMPTY),
];

/// Owns one of every collaborator and hands out [`Context`]s over them.
pub struct Harness {
    pub surface: RecordingSurface,
    pub palette: Palette,
    pub prefs: Preferences,
    pub timers: AlarmTable<MAX_TIMERS>,
    pub clock: FixedClock,
    pub network: FakeNetwork,
    pub files: StaticFs,
    pub log: LogBuffer,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            surface: RecordingSurface::new(),
            palette: Palette::standard(),
            prefs: Preferences::default(),
            timers: AlarmTable::new(),
            clock: FixedClock {
                time: WallTime {
                    hours: 12,
                    minutes: 34,
                    seconds: 56,
                },
                uptime_ms: 0,
            },
            network: FakeNetwork(Err(NetError::Unavailable)),
            files: StaticFs::new(&TEST_TREE),
            log: LogBuffer::new(),
        }
    }

    pub fn ctx(&mut self) -> Context<'_> {
        Context {
            surface: &mut self.surface,
            palette: &mut self.palette,
            prefs: &mut self.prefs,
            timers: &mut self.timers,
            clock: &self.clock,
            network: &self.network,
            files: &mut self.files,
            log: &mut self.log,
        }
    }

    /// Whether any log entry contains `needle`.
    pub fn logged(
        &self,
        needle: &str,
    ) -> bool {
        self.log.iter().any(|entry| entry.message.contains(needle))
    }
}
