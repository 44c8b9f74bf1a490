//! Controlled/uncontrolled value duality shared by stateful components.
//!
//! When an external value is present it is the only source of truth for what
//! renders; user interaction still reports the new value, but nothing visible
//! changes until the owner feeds it back. Without an external value the
//! internal state is authoritative.

/// Picks the value to render: the external one when present.
pub fn resolve_controlled<T: Clone>(external: Option<&T>, internal: &T) -> T {
    external.cloned().unwrap_or_else(|| internal.clone())
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Value holder for a component that may be controlled or uncontrolled.
pub struct Controlled<T> {
    external: Option<T>,
    internal: T,
}

impl<T: Clone + PartialEq> Controlled<T> {
    /// Uncontrolled holder starting at `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            external: None,
            internal: initial,
        }
    }

    /// Holder seeded from an optional external value; `fallback` backs
    /// uncontrolled mode.
    pub fn with_external(external: Option<T>, fallback: T) -> Self {
        let internal = external.clone().unwrap_or(fallback);
        Self { external, internal }
    }

    /// Whether an external value currently drives rendering.
    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// The value to render.
    pub fn value(&self) -> T {
        resolve_controlled(self.external.as_ref(), &self.internal)
    }

    /// Records a user interaction and returns the value to report.
    ///
    /// Internal state only moves when uncontrolled; a controlled holder waits
    /// for the owner to feed the value back through [`Controlled::sync`].
    pub fn interact(&mut self, next: T) -> T {
        if self.external.is_none() {
            self.internal = next.clone();
        }
        next
    }

    /// Observes a new external value (the owner's next render).
    ///
    /// Returns `true` when the rendered value changed.
    pub fn sync(&mut self, external: Option<T>) -> bool {
        let before = self.value();
        if let Some(value) = &external {
            self.internal = value.clone();
        }
        self.external = external;
        self.value() != before
    }
}

impl<T: Clone + PartialEq + Default> Default for Controlled<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn controlled_click_reports_value_but_render_waits_for_owner() {
        let mut rating = Controlled::with_external(Some(2u8), 0);

        let emitted = rating.interact(4);
        assert_eq!(emitted, 4);
        assert_eq!(rating.value(), 2);

        assert!(rating.sync(Some(4)));
        assert_eq!(rating.value(), 4);
    }

    #[test]
    fn controlled_owner_may_reject_the_interaction() {
        let mut tabs = Controlled::with_external(Some("a".to_string()), String::new());
        assert_eq!(tabs.interact("b".to_string()), "b");

        assert!(!tabs.sync(Some("a".to_string())));
        assert_eq!(tabs.value(), "a");
    }

    #[test]
    fn uncontrolled_interaction_is_authoritative() {
        let mut open = Controlled::new(false);
        assert!(!open.is_controlled());
        assert!(open.interact(true));
        assert!(open.value());
    }

    #[test]
    fn releasing_control_keeps_last_external_value() {
        let mut value = Controlled::with_external(Some(7), 0);
        assert!(!value.sync(None));
        assert_eq!(value.value(), 7);
        value.interact(9);
        assert_eq!(value.value(), 9);
    }

    #[test]
    fn rejected_interaction_does_not_surface_after_release() {
        let mut rating = Controlled::with_external(Some(2u8), 0);
        assert_eq!(rating.interact(4), 4);

        assert!(!rating.sync(None));
        assert_eq!(rating.value(), 2);
    }

    #[test]
    fn resolve_prefers_external() {
        assert_eq!(resolve_controlled(Some(&1), &5), 1);
        assert_eq!(resolve_controlled(None, &5), 5);
    }
}
