//! Explicit controlled/uncontrolled state handle for compound components.

use frui_theme::resolve_controlled;
use leptos::*;

/// Reactive value shared by a component tree, passed down as a prop.
///
/// With an external signal the handle is controlled: [`ControlledState::set`]
/// reports the new value through `on_change`, but [`ControlledState::get`]
/// keeps returning the external value until its owner updates it. Without one,
/// the internal signal is authoritative.
pub struct ControlledState<T: 'static> {
    internal: RwSignal<T>,
    external: Option<Signal<T>>,
    on_change: Option<Callback<T>>,
}

impl<T: 'static> Clone for ControlledState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ControlledState<T> {}

impl<T: Clone + PartialEq + 'static> ControlledState<T> {
    /// Uncontrolled state starting at `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            internal: create_rw_signal(initial),
            external: None,
            on_change: None,
        }
    }

    /// Controlled state driven by `external`.
    ///
    /// The internal signal follows the external value so that dropping
    /// control later resumes from the last value the owner rendered.
    pub fn controlled(external: impl Into<Signal<T>>) -> Self {
        let external = external.into();
        let internal = create_rw_signal(external.get_untracked());
        create_effect(move |_| {
            let next = external.get();
            if internal.get_untracked() != next {
                internal.set(next);
            }
        });
        Self {
            internal,
            external: Some(external),
            on_change: None,
        }
    }

    /// Registers the change callback fired on every interaction.
    pub fn on_change(mut self, on_change: Callback<T>) -> Self {
        self.on_change = Some(on_change);
        self
    }

    /// Whether an external signal drives the rendered value.
    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// Rendered value (tracked).
    pub fn get(&self) -> T {
        let external = self.external.map(|external| external.get());
        self.internal
            .with(|internal| resolve_controlled(external.as_ref(), internal))
    }

    /// Rendered value (untracked).
    pub fn get_untracked(&self) -> T {
        let external = self.external.map(|external| external.get_untracked());
        self.internal
            .with_untracked(|internal| resolve_controlled(external.as_ref(), internal))
    }

    /// Records an interaction and reports it through `on_change`.
    pub fn set(&self, next: T) {
        if !self.is_controlled() {
            self.internal.set(next.clone());
        }
        if let Some(on_change) = self.on_change.as_ref() {
            on_change.call(next);
        }
    }
}

impl ControlledState<bool> {
    /// Flips an open/closed state.
    pub fn toggle(&self) {
        self.set(!self.get_untracked());
    }
}
