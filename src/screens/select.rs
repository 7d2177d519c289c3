//! Select screens: pick one value from a list, with the current value marked.

use crate::input::Button;
use crate::list::{ListInput, ListView, Marked, MenuEntry};
use crate::screen::{Action, Context, Screen};

use super::SETTINGS;
use super::settings::{SelectCallback, activate_entry};

pub struct SelectScreen {
    name: &'static str,
    entries: &'static [MenuEntry],
    value: usize,
    view: ListView,
    on_select: SelectCallback,
}

impl SelectScreen {
    /// `value` is the entry value shown as currently selected.
    pub const fn new(
        name: &'static str,
        entries: &'static [MenuEntry],
        value: usize,
        on_select: SelectCallback,
    ) -> Self {
        Self {
            name,
            entries,
            value,
            view: ListView::new(),
            on_select,
        }
    }

    /// Currently selected value.
    pub const fn value(&self) -> usize { self.value }
}

impl Screen for SelectScreen {
    fn name(&self) -> &'static str { self.name }

    fn render(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        let source = Marked {
            entries: self.entries,
            value: self.value,
        };
        self.view.render(ctx.surface, ctx.palette, &source);
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
            ListInput::Back => Action::goto(SETTINGS),
            ListInput::Activate => {
                let Some(value) = activate_entry(self.name, self.entries, &self.view, ctx) else {
                    return Action::None;
                };
                self.value = value;
                let action = (self.on_select)(ctx, value);
                // Redraw after the callback so palette changes show immediately
                self.render(ctx);
                action
            }
        }
    }
}
