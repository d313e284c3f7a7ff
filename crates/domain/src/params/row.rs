//! Editable presentation rows.

use serde::{Deserialize, Serialize};

use super::{QueryParam, QueryParams};
use crate::error::{DomainError, DomainResult};
use crate::id::RowId;

/// One editable (key, value) unit bound to one parameter occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Stable row identifier.
    pub id: RowId,
    /// Key exactly as typed (not trimmed).
    pub key: String,
    /// Value exactly as typed.
    pub value: String,
}

impl Row {
    /// Creates a row with a fresh id.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: RowId::generate(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Where a dragged row lands relative to its drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Insert before the target row.
    Before,
    /// Insert after the target row.
    After,
}

/// Rows in presentation order.
///
/// Presentation order is serialization order: moving a row moves its
/// parameter in the built query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rows {
    items: Vec<Row>,
}

impl Rows {
    /// Creates an empty row list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates one row per parameter occurrence.
    #[must_use]
    pub fn from_params(params: &QueryParams) -> Self {
        params
            .iter()
            .map(|p| Row::new(p.key.clone(), p.value.clone()))
            .collect()
    }

    /// Appends an empty row and returns its id.
    pub fn push_empty(&mut self) -> RowId {
        let row = Row::new("", "");
        let id = row.id.clone();
        self.items.push(row);
        id
    }

    /// Removes a row, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownRow`] if no row has this id.
    pub fn remove(&mut self, id: &RowId) -> DomainResult<Row> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    /// Returns the row with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownRow`] if no row has this id.
    pub fn get(&self, id: &RowId) -> DomainResult<&Row> {
        self.items
            .iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| DomainError::UnknownRow(id.to_string()))
    }

    /// Returns a mutable reference to the row with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownRow`] if no row has this id.
    pub fn get_mut(&mut self, id: &RowId) -> DomainResult<&mut Row> {
        self.items
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| DomainError::UnknownRow(id.to_string()))
    }

    /// Returns the current position of a row.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownRow`] if no row has this id.
    pub fn position(&self, id: &RowId) -> DomainResult<usize> {
        self.items
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| DomainError::UnknownRow(id.to_string()))
    }

    /// Returns the row at a position.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Row> {
        self.items.get(index)
    }

    /// Moves a row so that it ends up at `to_index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is unknown or `to_index` is past the end.
    pub fn move_to(&mut self, id: &RowId, to_index: usize) -> DomainResult<()> {
        let from = self.position(id)?;
        if to_index >= self.items.len() {
            return Err(DomainError::RowIndexOutOfRange {
                index: to_index,
                len: self.items.len(),
            });
        }
        let row = self.items.remove(from);
        self.items.insert(to_index, row);
        Ok(())
    }

    /// Moves `dragged` next to `target`, as a drop does.
    ///
    /// Dropping a row onto itself is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownRow`] if either row is unknown.
    pub fn move_relative(
        &mut self,
        dragged: &RowId,
        target: &RowId,
        placement: Placement,
    ) -> DomainResult<()> {
        let from = self.position(dragged)?;
        self.position(target)?;
        if dragged == target {
            return Ok(());
        }
        let row = self.items.remove(from);
        let target_index = self.position(target)?;
        let insert_at = match placement {
            Placement::Before => target_index,
            Placement::After => target_index + 1,
        };
        self.items.insert(insert_at, row);
        Ok(())
    }

    /// Returns the rows as parameters, exactly as typed.
    ///
    /// Keys are not trimmed and empty keys are kept; serialization applies
    /// those rules.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        self.items
            .iter()
            .map(|r| QueryParam::new(r.key.clone(), r.value.clone()))
            .collect()
    }

    /// Returns an iterator over the rows in presentation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.items.iter()
    }

    /// Returns the number of rows.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Row> for Rows {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
