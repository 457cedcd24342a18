/// Keeps keyboard focus cycling inside a fixed list of elements.
///
/// The list is captured once when the trap is enabled; later DOM changes are
/// not picked up until the trap is re-enabled.
#[derive(Debug, Clone, PartialEq)]
pub enum FocusTrap<T> {
    Inactive,
    Active {
        focusable: Vec<T>,
        restore: Option<T>,
    },
}

impl<T> Default for FocusTrap<T> {
    fn default() -> Self {
        FocusTrap::Inactive
    }
}

impl<T: PartialEq> FocusTrap<T> {
    /// Activates the trap and returns the element that should receive focus.
    ///
    /// An empty list leaves the trap inactive and forgets `previously_focused`.
    pub fn enable(&mut self, focusable: Vec<T>, previously_focused: Option<T>) -> Option<&T> {
        if focusable.is_empty() {
            *self = FocusTrap::Inactive;
            return None;
        }
        *self = FocusTrap::Active {
            focusable,
            restore: previously_focused,
        };
        match self {
            FocusTrap::Active { focusable, .. } => focusable.first(),
            FocusTrap::Inactive => None,
        }
    }

    /// Where focus has to jump for a Tab press, if it has to be redirected at all.
    ///
    /// `Some` means the browser default must be prevented.
    pub fn on_tab(&self, active: Option<&T>, shift: bool) -> Option<&T> {
        let FocusTrap::Active { focusable, .. } = self else {
            return None;
        };
        let first = focusable.first()?;
        let last = focusable.last()?;
        let active = active?;

        if shift && active == first {
            Some(last)
        } else if !shift && active == last {
            Some(first)
        } else {
            None
        }
    }

    /// Deactivates the trap and hands back the element to restore focus to.
    pub fn disable(&mut self) -> Option<T> {
        match std::mem::take(self) {
            FocusTrap::Active { restore, .. } => restore,
            FocusTrap::Inactive => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, FocusTrap::Active { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> Vec<&'static str> {
        vec!["home", "pricing", "contact", "theme"]
    }

    #[test]
    fn enable_focuses_first_element() {
        let mut trap = FocusTrap::default();
        assert_eq!(trap.enable(links(), Some("navToggle")), Some(&"home"));
        assert!(trap.is_active());
    }

    #[test]
    fn tab_wraps_from_last_to_first() {
        let mut trap = FocusTrap::default();
        trap.enable(links(), None);
        assert_eq!(trap.on_tab(Some(&"theme"), false), Some(&"home"));
        assert_eq!(trap.on_tab(Some(&"pricing"), false), None);
    }

    #[test]
    fn shift_tab_wraps_from_first_to_last() {
        let mut trap = FocusTrap::default();
        trap.enable(links(), None);
        assert_eq!(trap.on_tab(Some(&"home"), true), Some(&"theme"));
        assert_eq!(trap.on_tab(Some(&"contact"), true), None);
    }

    #[test]
    fn single_element_always_redirects_to_itself() {
        let mut trap = FocusTrap::default();
        trap.enable(vec!["only"], None);
        assert_eq!(trap.on_tab(Some(&"only"), false), Some(&"only"));
        assert_eq!(trap.on_tab(Some(&"only"), true), Some(&"only"));
    }

    #[test]
    fn disable_restores_previous_focus() {
        let mut trap = FocusTrap::default();
        trap.enable(links(), Some("navToggle"));
        assert_eq!(trap.disable(), Some("navToggle"));
        assert!(!trap.is_active());
        assert_eq!(trap.disable(), None);
    }

    #[test]
    fn empty_list_stays_inactive() {
        let mut trap = FocusTrap::default();
        assert_eq!(trap.enable(Vec::new(), Some("navToggle")), None);
        assert!(!trap.is_active());
        assert_eq!(trap.disable(), None);
    }

    #[test]
    fn inactive_trap_ignores_tab() {
        let trap: FocusTrap<&str> = FocusTrap::Inactive;
        assert_eq!(trap.on_tab(Some(&"home"), false), None);
    }

    #[test]
    fn focus_outside_the_list_is_left_alone() {
        let mut trap = FocusTrap::default();
        trap.enable(links(), None);
        assert_eq!(trap.on_tab(Some(&"footer"), false), None);
        assert_eq!(trap.on_tab(None, true), None);
    }
}
