//! Settings menu: a plain list whose entries report their value to a callback.

use crate::input::Button;
use crate::list::{ListInput, ListView, MenuEntry};
use crate::screen::{Action, Context, Screen};
use crate::{ui_info, ui_warn};

use super::{HOME, SETTINGS};

/// Called with the value of the activated entry. The returned action is
/// performed by the host, so a callback may navigate.
pub type SelectCallback = fn(&mut Context<'_>, usize) -> Action;

/// Log the activation of the entry under the cursor and return its value.
///
/// Returns `None` for an empty list.
pub(crate) fn activate_entry(
    name: &str,
    entries: &[MenuEntry],
    view: &ListView,
    ctx: &mut Context<'_>,
) -> Option<usize> {
    match entries.get(view.active_item()) {
        Some(entry) => {
            ui_info!(ctx, "{}: \"{}\" selected", name, entry.label);
            Some(entry.value)
        }
        None => {
            ui_warn!(ctx, "{}: nothing to select", name);
            None
        }
    }
}

pub struct SettingsScreen {
    entries: &'static [MenuEntry],
    view: ListView,
    on_select: SelectCallback,
}

impl SettingsScreen {
    pub const fn new(
        entries: &'static [MenuEntry],
        on_select: SelectCallback,
    ) -> Self {
        Self {
            entries,
            view: ListView::new(),
            on_select,
        }
    }

    /// Cursor and window state.
    pub const fn view(&self) -> &ListView { &self.view }
}

impl Screen for SettingsScreen {
    fn name(&self) -> &'static str { SETTINGS }

    fn render(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        self.view.render(ctx.surface, ctx.palette, self.entries);
    }

    fn on_button(
        &mut self,
        button: Button,
        ctx: &mut Context<'_>,
    ) -> Action {
        match self.view.on_button(button, self.entries.len()) {
            ListInput::Moved => {
                self.render(ctx);
                Action::None
            }
            ListInput::Back => Action::goto(HOME),
            ListInput::Activate => match activate_entry(SETTINGS, self.entries, &self.view, ctx) {
                Some(value) => (self.on_select)(ctx, value),
                None => Action::None,
            },
        }
    }
}
