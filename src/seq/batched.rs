use crate::error::{AppError, AppResult, SeqError};
use crate::types::PositiveUsize;

/// Chunks a source sequence into groups of `size` elements.
///
/// Every chunk except possibly the last has exactly `size` elements; the
/// last holds whatever remains. An empty source yields no chunks. The
/// iterator is fused: once the source is exhausted and the tail chunk
/// emitted, `next()` keeps returning `None`.
#[derive(Debug)]
pub struct Batched<I: Iterator> {
    source: I,
    size: PositiveUsize,
    pending: Vec<I::Item>,
    done: bool,
}

impl<I: Iterator> Batched<I> {
    #[must_use]
    pub fn new<S>(source: S, size: PositiveUsize) -> Self
    where
        S: IntoIterator<IntoIter = I, Item = I::Item>,
    {
        Self {
            source: source.into_iter(),
            size,
            pending: Vec::with_capacity(size.get()),
            done: false,
        }
    }
}

impl<I: Iterator> Iterator for Batched<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while self.pending.len() < self.size.get() {
            match self.source.next() {
                Some(item) => self.pending.push(item),
                None => {
                    self.done = true;
                    if self.pending.is_empty() {
                        return None;
                    }
                    return Some(std::mem::take(&mut self.pending));
                }
            }
        }
        Some(std::mem::replace(
            &mut self.pending,
            Vec::with_capacity(self.size.get()),
        ))
    }
}

/// Lazy-producer form of [`Batched`].
///
/// # Errors
///
/// Returns [`SeqError::ChunkSizeZero`] when `size` is zero, before any
/// element is consumed from the source.
pub fn batched<S>(source: S, size: usize) -> AppResult<impl Iterator<Item = Vec<S::Item>>>
where
    S: IntoIterator,
{
    if size == 0 {
        return Err(AppError::seq(SeqError::ChunkSizeZero));
    }
    let mut iter = source.into_iter();
    let mut done = false;
    Ok(std::iter::from_fn(move || {
        if done {
            return None;
        }
        let mut chunk = Vec::with_capacity(size);
        while chunk.len() < size {
            match iter.next() {
                Some(item) => chunk.push(item),
                None => {
                    done = true;
                    break;
                }
            }
        }
        if chunk.is_empty() { None } else { Some(chunk) }
    }))
}
