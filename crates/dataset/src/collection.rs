//! Immutable Dataset and Filtered Views

use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Ordered, immutable collection of rows.
///
/// Rows live behind an `Arc` and are never mutated once materialized.
/// Filtering returns a view that shares the same rows and keeps an ordered
/// selection of row indices, so views are cheap to clone and to hand out
/// across threads.
#[derive(Debug)]
pub struct Dataset<T> {
    rows: Arc<[T]>,
    /// Selected row indices, ascending; `None` selects every row
    selection: Option<Arc<[usize]>>,
}

impl<T> Clone for Dataset<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            selection: self.selection.clone(),
        }
    }
}

impl<T> Dataset<T> {
    /// Materialize a dataset from owned rows
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: rows.into(),
            selection: None,
        }
    }

    /// Number of rows visible through this dataset
    pub fn len(&self) -> usize {
        match &self.selection {
            Some(selection) => selection.len(),
            None => self.rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row at `index` within this view
    pub fn get(&self, index: usize) -> Option<&T> {
        match &self.selection {
            Some(selection) => selection.get(index).map(|&i| &self.rows[i]),
            None => self.rows.get(index),
        }
    }

    /// Iterate visible rows in their original relative order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            dataset: self,
            position: 0,
        }
    }

    /// Whether this dataset is a filtered view over a larger row set
    pub fn is_view(&self) -> bool {
        self.selection.is_some()
    }

    /// Build a view holding only the rows that satisfy `predicate`
    pub fn filter<F>(&self, mut predicate: F) -> Dataset<T>
    where
        F: FnMut(&T) -> bool,
    {
        let selection: Vec<usize> = self
            .indices()
            .filter(|&i| predicate(&self.rows[i]))
            .collect();

        Dataset {
            rows: Arc::clone(&self.rows),
            selection: Some(selection.into()),
        }
    }

    /// Build a new dataset by transforming every visible row, stopping at
    /// the first failure. The failing row's position is passed to the error
    /// constructor.
    pub fn try_map<U, E, F>(&self, mut transform: F) -> Result<Dataset<U>, E>
    where
        F: FnMut(usize, &T) -> Result<U, E>,
    {
        let mut rows = Vec::with_capacity(self.len());
        for (position, row) in self.iter().enumerate() {
            rows.push(transform(position, row)?);
        }
        Ok(Dataset::new(rows))
    }

    fn indices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        match &self.selection {
            Some(selection) => Box::new(selection.iter().copied()),
            None => Box::new(0..self.rows.len()),
        }
    }
}

impl<T> From<Vec<T>> for Dataset<T> {
    fn from(rows: Vec<T>) -> Self {
        Dataset::new(rows)
    }
}

impl<T: PartialEq> PartialEq for Dataset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Serialize> Serialize for Dataset<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Iterator over the visible rows of a [`Dataset`]
pub struct Iter<'a, T> {
    dataset: &'a Dataset<T>,
    position: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.dataset.get(self.position)?;
        self.position += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dataset.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Dataset<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
