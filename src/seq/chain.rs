/// Concatenates an ordered collection of sources into one sequence.
///
/// Elements of the first source come first, then the second, and so on.
/// Empty sources are skipped transparently; with zero sources the iterator
/// is exhausted immediately. Forward-only and single-pass.
#[derive(Debug)]
pub struct Chain<I: Iterator> {
    remaining: std::vec::IntoIter<I>,
    active: Option<I>,
}

impl<I: Iterator> Chain<I> {
    #[must_use]
    pub fn new(sources: Vec<I>) -> Self {
        Self {
            remaining: sources.into_iter(),
            active: None,
        }
    }
}

impl<I: Iterator> Iterator for Chain<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(iter) = self.active.as_mut() {
                if let Some(item) = iter.next() {
                    return Some(item);
                }
                self.active = None;
            }
            // Advance to the next source; all sources exhausted means done.
            self.active = Some(self.remaining.next()?);
        }
    }
}

/// Lazy-producer form of [`Chain`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub fn chain<S>(sources: S) -> impl Iterator<Item = <S::Item as IntoIterator>::Item>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    let mut remaining = sources.into_iter();
    let mut active: Option<<S::Item as IntoIterator>::IntoIter> = None;
    std::iter::from_fn(move || {
        loop {
            if let Some(iter) = active.as_mut() {
                if let Some(item) = iter.next() {
                    return Some(item);
                }
                active = None;
            }
            active = Some(remaining.next()?.into_iter());
        }
    })
}
