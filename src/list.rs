//! Scrollable list engine shared by the Settings, Select and Files screens.
//!
//! A list shows [`LIST_ITEMS_ON_SCREEN`] rows at a time. The window follows
//! the cursor lazily: it only scrolls once the cursor comes within
//! [`LIST_SCROLL_THRESHOLD`] rows of an edge, and snaps to the top or bottom
//! when the cursor reaches the first or last entry.
//!
//! # Invariants
//!
//! - `scroll_offset` is always in `[items_on_screen - items_in_list, 0]`,
//!   where `items_in_list = max(len, items_on_screen)`.
//! - `active_item` is always in `[0, max(len, 1) - 1]`.

use heapless::String;

use crate::config::{
    FONT_SCALE,
    ITEM_HEIGHT,
    ITEM_WIDTH,
    LIST_ITEMS_ON_SCREEN,
    LIST_SCROLL_THRESHOLD,
    PADDING,
    layout::{SCROLLBAR_PADDING, SCROLLBAR_WIDTH},
};
use crate::input::Button;
use crate::palette::Palette;
use crate::surface::Surface;

/// Text shown in place of the rows when the source is empty.
pub const EMPTY_PLACEHOLDER: &str = "-- list is empty --";

/// Marker drawn before rows matching the current value of a select list.
pub const SELECTED_MARKER: &str = "> ";

/// Capacity of a rendered row label (marker included).
pub const ROW_LABEL_LEN: usize = 48;

/// Entries a list screen draws from.
pub trait ListSource {
    /// Number of entries.
    fn len(&self) -> usize;

    /// Label of entry `index` (`index < len()`).
    fn label(
        &self,
        index: usize,
    ) -> &str;

    /// Whether entry `index` matches the screen's current value.
    fn is_selected(
        &self,
        _index: usize,
    ) -> bool {
        false
    }

    fn is_empty(&self) -> bool { self.len() == 0 }
}

/// Static menu entry: a label and the value reported when it is activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub value: usize,
}

impl MenuEntry {
    pub const fn new(
        label: &'static str,
        value: usize,
    ) -> Self {
        Self { label, value }
    }
}

impl ListSource for [MenuEntry] {
    fn len(&self) -> usize { <[MenuEntry]>::len(self) }

    fn label(
        &self,
        index: usize,
    ) -> &str {
        self[index].label
    }
}

/// One row as seen by the renderer. Rebuilt on every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListItem<'a> {
    pub label: &'a str,
    pub index: usize,
    /// The cursor is on this row.
    pub is_active: bool,
    /// This row matches the screen's current value.
    pub is_selected: bool,
}

/// What a list screen should do after a button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListInput {
    /// The cursor moved; redraw.
    Moved,
    /// Leave the list (X).
    Back,
    /// Activate the entry under the cursor (Y).
    Activate,
}

/// Axis-aligned rectangle in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Scrollbar geometry for an overflowing list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scrollbar {
    pub track: Rect,
    pub thumb: Rect,
}

/// Rows the window logic counts with: short lists behave like full ones.
#[inline]
pub fn items_in_list(
    len: usize,
    items_on_screen: usize,
) -> usize {
    len.max(items_on_screen)
}

/// Next scroll offset (in rows, `<= 0`) for a cursor at `active_item`.
///
/// Snaps to the top for the first entry and to the bottom for the last.
/// Otherwise shifts the window by one row when the cursor is closer than
/// `scroll_threshold` rows to either edge, then clamps.
pub fn scroll_offset(
    active_item: usize,
    current_offset: i32,
    len: usize,
    items_on_screen: usize,
    scroll_threshold: usize,
) -> i32 {
    let in_list = items_in_list(len, items_on_screen) as i32;
    let on_screen = items_on_screen as i32;
    let active = active_item as i32;
    let threshold = scroll_threshold as i32;
    let lowest = on_screen - in_list;

    if active == 0 {
        return 0;
    }
    if active == in_list - 1 {
        return lowest;
    }

    let items_above = active + current_offset;
    let mut offset = current_offset;
    if items_above < threshold {
        offset += 1;
    }
    if items_above > on_screen - 1 - threshold {
        offset -= 1;
    }
    offset.clamp(lowest, 0)
}

/// Scrollbar for a list of `len` entries scrolled to `offset`, or `None` when
/// everything fits on one screen.
///
/// The thumb height is proportional to the visible share of the list and the
/// thumb travels the rest of the track in proportion to the scroll position.
pub fn scrollbar(
    len: usize,
    offset: i32,
    screen_width: u32,
    screen_height: u32,
) -> Option<Scrollbar> {
    let in_list = items_in_list(len, LIST_ITEMS_ON_SCREEN);
    if in_list <= LIST_ITEMS_ON_SCREEN {
        return None;
    }
    let track = Rect {
        x: screen_width.saturating_sub(SCROLLBAR_WIDTH) as i32,
        y: 0,
        width: SCROLLBAR_WIDTH,
        height: screen_height,
    };

    let track_height = screen_height.saturating_sub(2 * SCROLLBAR_PADDING);
    let thumb_height = (track_height * LIST_ITEMS_ON_SCREEN as u32 / in_list as u32).max(1);
    let travel = track_height.saturating_sub(thumb_height);
    let hidden = (in_list - LIST_ITEMS_ON_SCREEN) as u32;
    let scrolled = offset.unsigned_abs().min(hidden);
    let thumb = Rect {
        x: track.x + SCROLLBAR_PADDING as i32,
        y: (SCROLLBAR_PADDING + travel * scrolled / hidden) as i32,
        width: SCROLLBAR_WIDTH - 2 * SCROLLBAR_PADDING,
        height: thumb_height,
    };
    Some(Scrollbar { track, thumb })
}

/// Cursor and window state of one list screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListView {
    active_item: usize,
    scroll_offset: i32,
}

impl ListView {
    pub const fn new() -> Self {
        Self {
            active_item: 0,
            scroll_offset: 0,
        }
    }

    /// Index of the entry under the cursor.
    #[inline]
    pub const fn active_item(&self) -> usize { self.active_item }

    /// Window position in rows (`<= 0`).
    #[inline]
    pub const fn scroll_offset(&self) -> i32 { self.scroll_offset }

    /// Cursor back to the first entry, window to the top.
    pub fn reset(&mut self) {
        self.active_item = 0;
        self.scroll_offset = 0;
    }

    /// Move the cursor to `index`, wrapping past either end. A no-op for an
    /// empty list.
    pub fn set_active(
        &mut self,
        index: isize,
        len: usize,
    ) {
        if len == 0 {
            return;
        }
        self.active_item = if index < 0 {
            len - 1
        } else if index as usize > len - 1 {
            0
        } else {
            index as usize
        };
    }

    pub fn select_prev(
        &mut self,
        len: usize,
    ) {
        self.set_active(self.active_item as isize - 1, len);
    }

    pub fn select_next(
        &mut self,
        len: usize,
    ) {
        self.set_active(self.active_item as isize + 1, len);
    }

    /// Recompute the window for the current cursor. Called once per render.
    pub fn update_offset(
        &mut self,
        len: usize,
    ) {
        self.scroll_offset = scroll_offset(
            self.active_item,
            self.scroll_offset,
            len,
            LIST_ITEMS_ON_SCREEN,
            LIST_SCROLL_THRESHOLD,
        );
    }

    /// Map the standard list buttons: A up, B down, X back, Y activate.
    pub fn on_button(
        &mut self,
        button: Button,
        len: usize,
    ) -> ListInput {
        match button {
            Button::A => {
                self.select_prev(len);
                ListInput::Moved
            }
            Button::B => {
                self.select_next(len);
                ListInput::Moved
            }
            Button::X => ListInput::Back,
            Button::Y => ListInput::Activate,
        }
    }

    /// Top edge of row `index` in pixels, given the current window.
    #[inline]
    pub fn row_y(
        &self,
        index: usize,
    ) -> i32 {
        (index as i32 + self.scroll_offset) * ITEM_HEIGHT as i32
    }

    /// Rows of `source` with cursor and selection flags.
    pub fn items<'a, S: ListSource + ?Sized>(
        &self,
        source: &'a S,
    ) -> impl Iterator<Item = ListItem<'a>> + use<'a, S> {
        let active = self.active_item;
        (0..source.len()).map(move |index| ListItem {
            label: source.label(index),
            index,
            is_active: index == active,
            is_selected: source.is_selected(index),
        })
    }

    /// Update the window and draw the whole list, then present it.
    pub fn render<S: ListSource + ?Sized>(
        &mut self,
        surface: &mut dyn Surface,
        palette: &Palette,
        source: &S,
    ) {
        let len = source.len();
        self.update_offset(len);
        let (width, height) = surface.bounds();

        surface.set_pen(palette.secondary());
        surface.clear();

        if len == 0 {
            surface.set_pen(palette.primary());
            surface.text(EMPTY_PLACEHOLDER, PADDING as i32, PADDING as i32, FONT_SCALE);
        }

        for item in self.items(source) {
            let y = self.row_y(item.index);
            if y + ITEM_HEIGHT as i32 <= 0 || y >= height as i32 {
                continue;
            }
            surface.set_pen(palette.primary());
            if item.is_active {
                surface.rectangle(0, y, ITEM_WIDTH, ITEM_HEIGHT);
                surface.set_pen(palette.secondary());
            }
            let label = row_label(&item);
            surface.text(&label, PADDING as i32, y + PADDING as i32, FONT_SCALE);
        }

        if let Some(bar) = scrollbar(len, self.scroll_offset, width, height) {
            surface.set_pen(palette.secondary());
            surface.rectangle(bar.track.x, bar.track.y, bar.track.width, bar.track.height);
            surface.set_pen(palette.primary());
            surface.rectangle(bar.thumb.x, bar.thumb.y, bar.thumb.width, bar.thumb.height);
        }

        surface.update();
    }
}

/// Row text: the label, prefixed with the marker on selected non-cursor rows.
fn row_label(item: &ListItem<'_>) -> String<ROW_LABEL_LEN> {
    let mut label = String::new();
    if item.is_selected && !item.is_active {
        label.push_str(SELECTED_MARKER).ok();
    }
    for c in item.label.chars() {
        if label.push(c).is_err() {
            break;
        }
    }
    label
}

/// Adapter giving a value-marking view over menu entries, for select lists.
pub struct Marked<'a> {
    pub entries: &'a [MenuEntry],
    pub value: usize,
}

impl ListSource for Marked<'_> {
    fn len(&self) -> usize { self.entries.len() }

    fn label(
        &self,
        index: usize,
    ) -> &str {
        self.entries[index].label
    }

    fn is_selected(
        &self,
        index: usize,
    ) -> bool {
        self.entries[index].value == self.value
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::colors::{BLACK, GREEN};
    use crate::testing::{Op, RecordingSurface};

    fn entries(n: usize) -> Vec<MenuEntry> {
        const LABELS: [&str; 40] = [
            "e0", "e1", "e2", "e3", "e4", "e5", "e6", "e7", "e8", "e9", "e10", "e11", "e12", "e13",
            "e14", "e15", "e16", "e17", "e18", "e19", "e20", "e21", "e22", "e23", "e24", "e25",
            "e26", "e27", "e28", "e29", "e30", "e31", "e32", "e33", "e34", "e35", "e36", "e37",
            "e38", "e39",
        ];
        (0..n).map(|i| MenuEntry::new(LABELS[i], i)).collect()
    }

    #[test]
    fn test_snaps_to_top_and_bottom() {
        assert_eq!(scroll_offset(0, -5, 20, 10, 2), 0);
        assert_eq!(scroll_offset(19, 0, 20, 10, 2), -10);
    }

    #[test]
    fn test_short_list_never_scrolls() {
        for active in 0..4 {
            assert_eq!(scroll_offset(active, 0, 4, 10, 2), 0);
        }
    }

    #[test]
    fn test_scrolling_down_twelve_items() {
        let mut view = ListView::new();
        let mut offsets = Vec::new();
        for _ in 0..11 {
            view.select_next(12);
            view.update_offset(12);
            offsets.push(view.scroll_offset());
        }
        assert_eq!(view.active_item(), 11);
        assert_eq!(offsets, [0, 0, 0, 0, 0, 0, 0, -1, -2, -2, -2]);
    }

    #[test]
    fn test_scrolling_back_up_keeps_threshold() {
        let mut view = ListView::new();
        view.set_active(19, 20);
        view.update_offset(20);
        assert_eq!(view.scroll_offset(), -10);

        // Cursor moves up within the window until two rows from the top
        for _ in 0..7 {
            view.select_prev(20);
            view.update_offset(20);
        }
        assert_eq!(view.active_item(), 12);
        assert_eq!(view.scroll_offset(), -10);
        view.select_prev(20);
        view.update_offset(20);
        assert_eq!(view.scroll_offset(), -9);
    }

    #[test]
    fn test_wraparound() {
        let mut view = ListView::new();
        view.select_prev(12);
        view.update_offset(12);
        assert_eq!(view.active_item(), 11);
        assert_eq!(view.scroll_offset(), -2);

        view.select_next(12);
        view.update_offset(12);
        assert_eq!(view.active_item(), 0);
        assert_eq!(view.scroll_offset(), 0);
    }

    #[test]
    fn test_empty_list_ignores_moves() {
        let mut view = ListView::new();
        assert_eq!(view.on_button(Button::B, 0), ListInput::Moved);
        view.select_prev(0);
        assert_eq!(view.active_item(), 0);
        assert_eq!(view.on_button(Button::X, 0), ListInput::Back);
        assert_eq!(view.on_button(Button::Y, 0), ListInput::Activate);
    }

    #[test]
    fn test_scrollbar_only_when_overflowing() {
        assert_eq!(scrollbar(10, 0, 320, 240), None);
        assert_eq!(scrollbar(3, 0, 320, 240), None);

        let top = scrollbar(12, 0, 320, 240).unwrap();
        assert_eq!(
            top.track,
            Rect {
                x: 302,
                y: 0,
                width: 18,
                height: 240
            }
        );
        assert_eq!(top.thumb.height, 190);
        assert_eq!(top.thumb.y, 6);
        assert_eq!(top.thumb.x, 308);
        assert_eq!(top.thumb.width, 6);

        let bottom = scrollbar(12, -2, 320, 240).unwrap();
        assert_eq!(bottom.thumb.y as u32 + bottom.thumb.height, 240 - 6);
    }

    #[test]
    fn test_scrollbar_on_screen_shorter_than_padding() {
        for height in [0, 8, 12] {
            let bar = scrollbar(12, -2, 320, height).unwrap();
            assert_eq!(bar.track.height, height);
            assert_eq!(bar.thumb.height, 1);
            assert_eq!(bar.thumb.y, 6);
        }
    }

    #[test]
    fn test_render_marks_cursor_and_selection() {
        let items = entries(3);
        let source = Marked {
            entries: &items,
            value: 2,
        };
        let mut view = ListView::new();
        let mut surface = RecordingSurface::new();
        view.render(&mut surface, &Palette::standard(), &source);

        assert_eq!(surface.ops[0], Op::Clear(BLACK));
        assert_eq!(
            surface.ops[1],
            Op::Rect {
                x: 0,
                y: 0,
                width: ITEM_WIDTH,
                height: ITEM_HEIGHT,
                color: GREEN
            }
        );
        assert_eq!(surface.texts(), ["e0", "e1", "> e2"]);
        assert!(matches!(surface.find_text("e0"), Some(Op::Text { color, .. }) if *color == BLACK));
        assert!(matches!(surface.find_text("e1"), Some(Op::Text { color, y: 30, .. }) if *color == GREEN));
        assert_eq!(surface.frames, 1);
    }

    #[test]
    fn test_selected_cursor_row_has_no_marker() {
        let items = entries(2);
        let source = Marked {
            entries: &items,
            value: 0,
        };
        let mut surface = RecordingSurface::new();
        ListView::new().render(&mut surface, &Palette::standard(), &source);
        assert_eq!(surface.texts(), ["e0", "e1"]);
    }

    #[test]
    fn test_render_empty_list_shows_placeholder() {
        let items: [MenuEntry; 0] = [];
        let mut surface = RecordingSurface::new();
        ListView::new().render(&mut surface, &Palette::standard(), &items[..]);
        assert_eq!(surface.texts(), [EMPTY_PLACEHOLDER]);
        assert!(!surface.ops.iter().any(|op| matches!(op, Op::Rect { .. })));
    }

    #[test]
    fn test_render_culls_offscreen_rows() {
        let items = entries(30);
        let mut view = ListView::new();
        view.set_active(29, 30);
        let mut surface = RecordingSurface::new();
        view.render(&mut surface, &Palette::standard(), &items[..]);

        let texts = surface.texts();
        assert_eq!(texts.len(), LIST_ITEMS_ON_SCREEN);
        assert_eq!(texts.first(), Some(&"e20"));
        assert_eq!(texts.last(), Some(&"e29"));
    }

    proptest! {
        #[test]
        fn prop_window_stays_valid(len in 0usize..40, moves in prop::collection::vec(any::<bool>(), 0..120)) {
            let mut view = ListView::new();
            let in_list = items_in_list(len, LIST_ITEMS_ON_SCREEN) as i32;
            for down in moves {
                if down { view.select_next(len) } else { view.select_prev(len) }
                view.update_offset(len);

                let offset = view.scroll_offset();
                prop_assert!(offset <= 0);
                prop_assert!(offset >= LIST_ITEMS_ON_SCREEN as i32 - in_list);
                prop_assert!(view.active_item() < len.max(1));

                let row = view.active_item() as i32 + offset;
                prop_assert!((0..LIST_ITEMS_ON_SCREEN as i32).contains(&row));
            }
        }

        #[test]
        fn prop_offset_bounds_for_any_state(
            active in 0usize..60,
            current in -60i32..5,
            len in 0usize..60,
        ) {
            let offset = scroll_offset(active, current, len, 10, 2);
            let in_list = items_in_list(len, 10) as i32;
            prop_assert!(offset <= 0);
            prop_assert!(offset >= 10 - in_list);
        }
    }
}
