/// Progress of the latest request for one piece of page data.
///
/// `Loading` replaces whatever was shown before, so a view from an earlier
/// selection never stays on screen while its successor is fetched.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

// Written by hand: a derive would require `T: Default`.
impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}
