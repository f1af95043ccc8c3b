/// Enabled state of a prev/next control pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub has_prev: bool,
    pub has_next: bool,
}

impl NavState {
    pub const DISABLED: NavState = NavState {
        has_prev: false,
        has_next: false,
    };
}
