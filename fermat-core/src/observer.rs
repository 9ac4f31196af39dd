/// Hook called by a grid scan after each `(a, b)` pair is evaluated.
///
/// `E` is the per-pair event (the pair, its root bracket and what happened to
/// the selected candidate) and `A` is the set of controls the scan honours.
/// Returning `None` keeps scanning; the batch generator stops the current
/// exponent's grid when it receives its stop action.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. Pass `()` to scan
/// without one.
pub trait Observer<E, A> {
    /// Called once per scanned pair.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Never acts.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
