/// Keys that open a focused card.
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// De-duplicates one user activation seen by several listeners.
///
/// A card click bubbles through the card's own listener and then the grid's
/// delegated one. Both call [`ActivationGuard::claim`] with the event; only
/// the first caller gets `true`.
#[derive(Debug)]
pub struct ActivationGuard<E> {
    last: Option<E>,
}

impl<E> Default for ActivationGuard<E> {
    fn default() -> Self {
        ActivationGuard { last: None }
    }
}

impl<E: PartialEq> ActivationGuard<E> {
    pub fn claim(&mut self, event: E) -> bool {
        if self.last.as_ref() == Some(&event) {
            return false;
        }
        self.last = Some(event);
        true
    }
}
