//! Screen registry and lifecycle state machine.
//!
//! # Invariants
//!
//! - After [`ScreenHost::start`] exactly one screen is active.
//! - A transition runs `deinit` on the outgoing screen strictly before
//!   `init` on the incoming one. Transitioning to the active screen
//!   re-initializes it.
//! - A failed target lookup leaves the active screen untouched.

use heapless::Vec;

use crate::error::UiError;
use crate::input::Button;
use crate::screen::{Action, Context, Screen, Target};
use crate::{ui_info, ui_warn};

/// Lifecycle state of a registered screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Inactive,
    Active,
}

/// Owns up to `N` screens and routes events to the active one.
pub struct ScreenHost<'s, const N: usize> {
    screens: Vec<&'s mut dyn Screen, N>,
    active: Option<usize>,
}

impl<'s, const N: usize> ScreenHost<'s, N> {
    /// Create an empty host.
    pub const fn new() -> Self {
        Self {
            screens: Vec::new(),
            active: None,
        }
    }

    /// Add a screen. Registration order defines [`Target::Index`].
    pub fn register(
        &mut self,
        screen: &'s mut dyn Screen,
    ) -> Result<(), UiError> {
        if self.position(screen.name()).is_some() {
            return Err(UiError::DuplicateName);
        }
        self.screens.push(screen).map_err(|_| UiError::RegistryFull)
    }

    /// Activate the first registered screen.
    pub fn start(
        &mut self,
        ctx: &mut Context<'_>,
    ) -> Result<(), UiError> {
        ui_info!(ctx, "{} screens registered", self.screens.len());
        self.transition(Target::Index(0), ctx)
    }

    /// Number of registered screens.
    pub fn len(&self) -> usize { self.screens.len() }

    /// Whether no screen is registered.
    pub fn is_empty(&self) -> bool { self.screens.is_empty() }

    /// The active screen, once started.
    pub fn active(&self) -> Option<&dyn Screen> { self.active.map(|index| &*self.screens[index]) }

    /// Registration index of the active screen.
    pub const fn active_index(&self) -> Option<usize> { self.active }

    /// Name of the active screen.
    pub fn active_name(&self) -> Option<&'static str> { self.active().map(|screen| screen.name()) }

    /// Lifecycle state of the screen registered as `name`.
    pub fn lifecycle(
        &self,
        name: &str,
    ) -> Option<Lifecycle> {
        let index = self.position(name)?;
        Some(if self.active == Some(index) { Lifecycle::Active } else { Lifecycle::Inactive })
    }

    /// Switch to `target`: deinit the current screen, then init the new one.
    pub fn transition(
        &mut self,
        target: Target,
        ctx: &mut Context<'_>,
    ) -> Result<(), UiError> {
        let next = match self.resolve(target) {
            Ok(index) => index,
            Err(err) => {
                ui_warn!(ctx, "transition to {:?}: {}", target, err);
                return Err(err);
            }
        };

        let from = match self.active {
            Some(current) => {
                self.screens[current].deinit(ctx);
                self.screens[current].name()
            }
            None => "-",
        };
        self.active = Some(next);
        ui_info!(ctx, "{} -> {}", from, self.screens[next].name());
        self.screens[next].init(ctx);
        Ok(())
    }

    /// Deliver a debounced button press to the active screen and perform
    /// any transition it requests. Ignored before [`start`](Self::start).
    pub fn dispatch_button(
        &mut self,
        button: Button,
        ctx: &mut Context<'_>,
    ) -> Result<(), UiError> {
        let Some(current) = self.active else {
            return Ok(());
        };
        match self.screens[current].on_button(button, ctx) {
            Action::None => Ok(()),
            Action::Goto(target) => self.transition(target, ctx),
        }
    }

    /// Let the active screen consume pending timer work.
    pub fn tick(
        &mut self,
        ctx: &mut Context<'_>,
    ) {
        if let Some(current) = self.active {
            self.screens[current].update(ctx);
        }
    }

    fn position(
        &self,
        name: &str,
    ) -> Option<usize> {
        self.screens.iter().position(|screen| screen.name() == name)
    }

    fn resolve(
        &self,
        target: Target,
    ) -> Result<usize, UiError> {
        match target {
            Target::Name(name) => self.position(name).ok_or(UiError::NotFound),
            Target::Index(index) if index < self.screens.len() => Ok(index),
            Target::Index(_) => Err(UiError::NotFound),
        }
    }
}

impl<const N: usize> Default for ScreenHost<'_, N> {
    fn default() -> Self { Self::new() }
}
