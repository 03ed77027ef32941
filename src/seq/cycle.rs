use crate::error::{AppError, AppResult, SeqError};

/// Replays a finite source forever, in first-observed order.
///
/// Every element is buffered exactly once during the first pass; replay
/// passes read the buffer, never the original source, so one-shot sources
/// are safe. An infinite source simply never reaches the replay phase.
///
/// An empty source is rejected at construction: cycling nothing would
/// otherwise either terminate (surprising for an infinite combinator) or
/// spin forever drawing from an empty buffer.
#[derive(Debug)]
pub struct Cycle<I: Iterator> {
    // `Some` during the first pass, dropped once the source is exhausted.
    source: Option<I>,
    saved: Vec<I::Item>,
    cursor: usize,
}

impl<I: Iterator> Cycle<I>
where
    I::Item: Clone,
{
    /// # Errors
    ///
    /// Returns [`SeqError::EmptySource`] when the source yields no
    /// elements. Emptiness is detected by pulling the first element
    /// eagerly at construction.
    pub fn new<S>(source: S) -> Result<Self, SeqError>
    where
        S: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        let mut iter = source.into_iter();
        let first = iter.next().ok_or(SeqError::EmptySource)?;
        Ok(Self {
            source: Some(iter),
            saved: vec![first],
            cursor: 0,
        })
    }
}

impl<I: Iterator> Iterator for Cycle<I>
where
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.saved.len() {
            match self.source.as_mut().and_then(Iterator::next) {
                Some(item) => self.saved.push(item),
                None => {
                    // First pass over; the buffer is final from here on.
                    self.source = None;
                    self.cursor = 0;
                }
            }
        }
        let item = self.saved.get(self.cursor).cloned();
        self.cursor = self.cursor.saturating_add(1);
        item
    }
}

/// Lazy-producer form of [`Cycle`].
///
/// # Errors
///
/// Returns [`SeqError::EmptySource`] when the source yields no elements.
pub fn cycle<S>(source: S) -> AppResult<impl Iterator<Item = S::Item>>
where
    S: IntoIterator,
    S::Item: Clone,
{
    let mut iter = source.into_iter();
    let first = iter
        .next()
        .ok_or_else(|| AppError::seq(SeqError::EmptySource))?;
    let mut source = Some(iter);
    let mut saved = vec![first];
    let mut cursor = 0usize;
    Ok(std::iter::from_fn(move || {
        if cursor >= saved.len() {
            match source.as_mut().and_then(Iterator::next) {
                Some(item) => saved.push(item),
                None => {
                    source = None;
                    cursor = 0;
                }
            }
        }
        let item = saved.get(cursor).cloned();
        cursor = cursor.saturating_add(1);
        item
    }))
}
