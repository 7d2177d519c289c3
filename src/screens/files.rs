//! File browser over the [`FileSystem`](crate::services::FileSystem) collaborator.
//!
//! Folders are listed first and labelled `./name`; entries within each group
//! are sorted by name. Y enters a folder, X goes to the parent folder or, at
//! the root, back to HOME. Read errors show an empty list.

use heapless::{String, Vec};

use crate::input::Button;
use crate::list::{ListInput, ListSource, ListView, ROW_LABEL_LEN};
use crate::screen::{Action, Context, Screen};
use crate::services::{DirEntry, DirListing, EntryKind, MAX_DIR_ENTRIES};
use crate::{ui_info, ui_warn};

use super::{FILES, HOME};

/// Label prefix marking a folder.
const FOLDER_PREFIX: &str = "./";

struct Rows<'a>(&'a [String<ROW_LABEL_LEN>]);

impl ListSource for Rows<'_> {
    fn len(&self) -> usize { self.0.len() }

    fn label(
        &self,
        index: usize,
    ) -> &str {
        &self.0[index]
    }
}

/// Row label; long names are cut here, the entry keeps its full name.
fn entry_label(entry: &DirEntry) -> String<ROW_LABEL_LEN> {
    let mut label = String::new();
    if entry.kind == EntryKind::Folder {
        label.push_str(FOLDER_PREFIX).ok();
    }
    for c in entry.name.chars() {
        if label.push(c).is_err() {
            break;
        }
    }
    label
}

pub struct FilesScreen {
    listing: DirListing,
    labels: Vec<String<ROW_LABEL_LEN>, MAX_DIR_ENTRIES>,
    view: ListView,
}

impl FilesScreen {
    pub const fn new() -> Self {
        Self {
            listing: DirListing::new(),
            labels: Vec::new(),
            view: ListView::new(),
        }
    }

    /// Labels of the current folder, in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> { self.labels.iter().map(|label| label.as_str()) }

    /// Re-read the current folder and put the cursor on the first entry.
    fn reload(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        if let Err(err) = ctx.files.read_dir(&mut self.listing) {
            ui_warn!(ctx, "{}: read failed: {}", FILES, err);
            self.listing.clear();
        }
        if self.listing.omitted() > 0 {
            ui_warn!(ctx, "{}: {} entries not shown", FILES, self.listing.omitted());
        }
        self.listing.sort();

        self.labels.clear();
        for entry in self.listing.iter() {
            self.labels.push(entry_label(entry)).ok();
        }
        self.view.reset();
    }

    fn enter_selected(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        let active = self.view.active_item();
        let (Some(entry), Some(label)) = (self.listing.get(active), self.labels.get(active)) else {
            ui_warn!(ctx, "{}: nothing to select", FILES);
            return;
        };
        ui_info!(ctx, "{}: \"{}\" selected", FILES, label);
        if entry.kind != EntryKind::Folder {
            return;
        }
        match ctx.files.change_dir(&entry.name) {
            Ok(()) => {
                self.reload(ctx);
                self.render(ctx);
            }
            Err(err) => ui_warn!(ctx, "{}: cannot enter {}: {}", FILES, label, err),
        }
    }

    fn leave_folder(
        &mut self,
        ctx: &mut Context<'_>,
    ) -> Action {
        if ctx.files.is_root() {
            return Action::goto(HOME);
        }
        if let Err(err) = ctx.files.parent() {
            ui_warn!(ctx, "{}: cannot leave folder: {}", FILES, err);
        }
        self.reload(ctx);
        self.render(ctx);
        Action::None
    }
}

impl Default for FilesScreen {
    fn default() -> Self { Self::new() }
}

impl Screen for FilesScreen {
    fn name(&self) -> &'static str { FILES }

    fn init(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        ctx.files.reset();
        self.reload(ctx);
        self.render(ctx);
    }

    fn render(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        self.view.render(ctx.surface, ctx.palette, &Rows(&self.labels));
    }

    fn on_button(
        &mut self,
        button: Button,
        ctx: &mut Context<'_>,
    ) -> Action {
        match self.view.on_button(button, self.labels.len()) {
            ListInput::Moved => {
                self.render(ctx);
                Action::None
            }
            ListInput::Back => self.leave_folder(ctx),
            ListInput::Activate => {
                self.enter_selected(ctx);
                Action::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::EMPTY_PLACEHOLDER;
    use crate::services::{FileSystem, FsError, StaticFs, StaticNode};
    use crate::testing::Harness;

    fn labels(files: &FilesScreen) -> std::vec::Vec<&str> { files.labels().collect() }

    #[test]
    fn test_init_lists_root_folders_first() {
        let mut harness = Harness::new();
        let mut files = FilesScreen::new();
        files.init(&mut harness.ctx());
        assert_eq!(labels(&files), ["./lib", "./projects", "boot.py", "main.py"]);
        assert_eq!(harness.surface.texts(), ["./lib", "./projects", "boot.py", "main.py"]);
    }

    #[test]
    fn test_enter_folder_and_back_out() {
        let mut harness = Harness::new();
        let mut files = FilesScreen::new();
        files.init(&mut harness.ctx());

        files.on_button(Button::B, &mut harness.ctx());
        assert_eq!(files.on_button(Button::Y, &mut harness.ctx()), Action::None);
        assert_eq!(labels(&files), ["./old", "notes.txt"]);
        assert!(!harness.files.is_root());
        assert_eq!(files.view.active_item(), 0);

        assert_eq!(files.on_button(Button::X, &mut harness.ctx()), Action::None);
        assert!(harness.files.is_root());
        assert_eq!(labels(&files)[1], "./projects");

        assert_eq!(files.on_button(Button::X, &mut harness.ctx()), Action::goto(HOME));
    }

    #[test]
    fn test_selecting_a_file_stays_put() {
        let mut harness = Harness::new();
        let mut files = FilesScreen::new();
        files.init(&mut harness.ctx());
        files.on_button(Button::A, &mut harness.ctx());
        harness.surface.reset();

        assert_eq!(files.on_button(Button::Y, &mut harness.ctx()), Action::None);
        assert!(harness.logged("\"main.py\" selected"));
        assert!(harness.files.is_root());
        assert_eq!(harness.surface.frames, 0);
    }

    #[test]
    fn test_empty_folder_shows_placeholder() {
        let mut harness = Harness::new();
        let mut files = FilesScreen::new();
        files.init(&mut harness.ctx());
        files.on_button(Button::Y, &mut harness.ctx());
        assert!(labels(&files).is_empty());
        assert_eq!(harness.surface.texts().last(), Some(&EMPTY_PLACEHOLDER));

        files.on_button(Button::Y, &mut harness.ctx());
        assert!(harness.logged("nothing to select"));
    }

    #[test]
    fn test_reinit_starts_at_root() {
        let mut harness = Harness::new();
        let mut files = FilesScreen::new();
        files.init(&mut harness.ctx());
        files.on_button(Button::B, &mut harness.ctx());
        files.on_button(Button::Y, &mut harness.ctx());
        files.deinit(&mut harness.ctx());

        files.init(&mut harness.ctx());
        assert!(harness.files.is_root());
        assert_eq!(labels(&files)[0], "./lib");
    }

    const LONG_FOLDER: &str = "a_folder_name_longer_than_thirty_two_chars_and_then_some_more";

    static INSIDE_LONG: [StaticNode; 1] = [StaticNode::file("inside.txt")];
    static LONG_ROOT: [StaticNode; 2] = [StaticNode::file("boot.py"), StaticNode::folder(LONG_FOLDER, &INSIDE_LONG)];

    #[test]
    fn test_enter_folder_with_long_name() {
        let mut harness = Harness::new();
        let mut long_fs = StaticFs::new(&LONG_ROOT);
        let mut ctx = harness.ctx();
        ctx.files = &mut long_fs;
        let mut files = FilesScreen::new();
        files.init(&mut ctx);
        assert!(labels(&files)[0].starts_with("./a_folder_name_longer_than"));
        assert!(labels(&files)[0].len() < LONG_FOLDER.len() + FOLDER_PREFIX.len());

        files.on_button(Button::Y, &mut ctx);
        assert!(!ctx.files.is_root());
        drop(ctx);
        assert_eq!(labels(&files), ["inside.txt"]);
        assert!(!harness.logged("cannot enter"));
    }

    // More entries than a listing holds, with the only folder read last
    static CROWDED: [StaticNode; 36] = [
        StaticNode::file("f00"), StaticNode::file("f01"), StaticNode::file("f02"), StaticNode::file("f03"), StaticNode::file("f04"),
        StaticNode::file("f05"), StaticNode::file("f06"), StaticNode::file("f07"), StaticNode::file("f08"), StaticNode::file("f09"),
        StaticNode::file("f10"), StaticNode::file("f11"), StaticNode::file("f12"), StaticNode::file("f13"), StaticNode::file("f14"),
        StaticNode::file("f15"), StaticNode::file("f16"), StaticNode::file("f17"), StaticNode::file("f18"), StaticNode::file("f19"),
        StaticNode::file("f20"), StaticNode::file("f21"), StaticNode::file("f22"), StaticNode::file("f23"), StaticNode::file("f24"),
        StaticNode::file("f25"), StaticNode::file("f26"), StaticNode::file("f27"), StaticNode::file("f28"), StaticNode::file("f29"),
        StaticNode::file("f30"), StaticNode::file("f31"), StaticNode::file("f32"), StaticNode::file("f33"), StaticNode::file("f34"),
        StaticNode::folder("zz_last", &INSIDE_LONG),
    ];

    #[test]
    fn test_crowded_folder_keeps_folder_and_warns() {
        let mut harness = Harness::new();
        let mut crowded = StaticFs::new(&CROWDED);
        let mut ctx = harness.ctx();
        ctx.files = &mut crowded;
        let mut files = FilesScreen::new();
        files.init(&mut ctx);
        drop(ctx);

        let shown = labels(&files);
        assert_eq!(shown.len(), MAX_DIR_ENTRIES);
        assert_eq!(shown[0], "./zz_last");
        assert_eq!(shown[1], "f00");
        assert!(harness.logged("4 entries not shown"));
    }

    struct Broken;

    impl FileSystem for Broken {
        fn reset(&mut self) {}

        fn is_root(&self) -> bool { true }

        fn read_dir(
            &mut self,
            _out: &mut DirListing,
        ) -> Result<(), FsError> {
            Err(FsError::Io)
        }

        fn change_dir(
            &mut self,
            _name: &str,
        ) -> Result<(), FsError> {
            Err(FsError::Io)
        }

        fn parent(&mut self) -> Result<(), FsError> { Ok(()) }
    }

    #[test]
    fn test_read_error_degrades_to_empty_list() {
        let mut harness = Harness::new();
        let mut broken = Broken;
        let mut ctx = harness.ctx();
        ctx.files = &mut broken;
        let mut files = FilesScreen::new();
        files.init(&mut ctx);
        drop(ctx);

        assert!(labels(&files).is_empty());
        assert!(harness.logged("read failed: i/o error"));
        assert_eq!(harness.surface.texts(), [EMPTY_PLACEHOLDER]);
    }
}
