/// Keyboard focus inside a bounded region, such as the open modal.
pub trait FocusScope {
    type Target: PartialEq;

    /// Focusable, visible, enabled elements in document order.
    fn focusables(&self) -> Vec<Self::Target>;
    /// The focused element, if it lies inside the region.
    fn active_within(&self) -> Option<Self::Target>;
    fn focus(&mut self, target: &Self::Target);
}

/// Decide where Tab should wrap to, if anywhere.
///
/// `active` is `None` when focus sits outside the region. Returns the index
/// to focus (the caller suppresses the default action) or `None` to let the
/// browser move focus normally.
pub fn trap_target<T: PartialEq>(focusables: &[T], active: Option<&T>, backwards: bool) -> Option<usize> {
    let last = focusables.len().checked_sub(1)?;
    let (edge, wrap_to) = if backwards { (0, last) } else { (last, 0) };
    match active {
        None => Some(wrap_to),
        Some(a) if *a == focusables[edge] => Some(wrap_to),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RING: [&str; 3] = ["close", "link", "next"];

    #[test]
    fn tab_on_last_wraps_to_first() {
        assert_eq!(trap_target(&RING, Some(&"next"), false), Some(0));
    }

    #[test]
    fn shift_tab_on_first_wraps_to_last() {
        assert_eq!(trap_target(&RING, Some(&"close"), true), Some(2));
    }

    #[test]
    fn middle_elements_use_default_movement() {
        assert_eq!(trap_target(&RING, Some(&"link"), false), None);
        assert_eq!(trap_target(&RING, Some(&"link"), true), None);
        assert_eq!(trap_target(&RING, Some(&"close"), false), None);
    }

    #[test]
    fn focus_outside_is_pulled_in() {
        assert_eq!(trap_target(&RING, None, false), Some(0));
        assert_eq!(trap_target(&RING, None, true), Some(2));
    }

    #[test]
    fn empty_region_ignores_tab() {
        let none: [&str; 0] = [];
        assert_eq!(trap_target(&none, None, false), None);
    }

    #[test]
    fn single_element_keeps_focus() {
        assert_eq!(trap_target(&["close"], Some(&"close"), false), Some(0));
        assert_eq!(trap_target(&["close"], Some(&"close"), true), Some(0));
    }
}
