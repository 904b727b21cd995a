//! Partitioning a circuit's operations into contiguous slices.

use std::collections::BTreeSet;
use std::ops::Range;

use itertools::Itertools;

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidSliceBoundaryError {
    #[error("slice boundaries must not be empty")]
    Empty,

    #[error("slice boundaries must start at 0, found {first}")]
    MissingStart { first: usize },

    #[error("slice boundaries must end at the operation count {total}, found {last}")]
    MissingEnd { last: usize, total: usize },

    #[error("slice boundary {next} follows larger boundary {previous}")]
    NonMonotonic { previous: usize, next: usize },
}

/// A partition of the column range `[0, total)` into consecutive half-open slices.
///
/// The boundaries always begin at `0`, end at `total` and never decrease, so the slices cover
/// every column exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    boundaries: Vec<usize>,
}

impl Partition {
    /// A single slice covering all `total` columns.
    pub fn whole(total: usize) -> Self {
        Self {
            boundaries: vec![0, total],
        }
    }

    /// Split before each of the given column indices.
    ///
    /// Indices are clamped into `[0, total]`, merged with `0` and `total`, then sorted and
    /// deduplicated, so every input is accepted and no slice is empty unless `total` is zero.
    pub fn at_indices<I>(indices: I, total: usize) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let boundaries: Vec<usize> = indices
            .into_iter()
            .map(|index| index.min(total))
            .chain([0, total])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if boundaries.len() < 2 {
            Self::whole(total)
        } else {
            Self { boundaries }
        }
    }

    /// Split `total` columns into `count` slices of roughly equal size.
    ///
    /// Boundary `i` is `i * total / count` rounded to the nearest integer, with exact halves
    /// rounded to the even neighbour. When `total < count` some boundaries coincide and fewer
    /// than `count` slices result. A `count` of 0 or 1 does not split.
    pub fn even(count: usize, total: usize) -> Self {
        if count <= 1 {
            return Self::whole(total);
        }

        let points =
            (0..=count).map(|i| ((i * total) as f64 / count as f64).round_ties_even() as usize);

        Self::at_indices(points, total)
    }

    /// Use caller-supplied boundaries as they are, without normalization.
    ///
    /// Repeated boundaries are permitted and yield empty slices.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundaries are empty, do not start at `0`, do not end at `total`,
    /// or ever decrease.
    pub fn try_from_boundaries(
        boundaries: Vec<usize>,
        total: usize,
    ) -> Result<Self, InvalidSliceBoundaryError> {
        let (Some(&first), Some(&last)) = (boundaries.first(), boundaries.last()) else {
            return Err(InvalidSliceBoundaryError::Empty);
        };

        if first != 0 {
            return Err(InvalidSliceBoundaryError::MissingStart { first });
        }

        if last != total {
            return Err(InvalidSliceBoundaryError::MissingEnd { last, total });
        }

        if let Some((&previous, &next)) = boundaries
            .iter()
            .tuple_windows()
            .find(|(previous, next)| previous > next)
        {
            return Err(InvalidSliceBoundaryError::NonMonotonic { previous, next });
        }

        if boundaries.len() == 1 {
            // only possible when `total` is zero
            return Ok(Self::whole(total));
        }

        Ok(Self { boundaries })
    }

    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// The column range of each slice, in order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.boundaries
            .iter()
            .tuple_windows()
            .map(|(&start, &end)| start..end)
    }

    /// The number of slices. Always at least one.
    pub fn count(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// The number of columns partitioned.
    pub fn total(&self) -> usize {
        self.boundaries.last().copied().unwrap_or_default()
    }
}
