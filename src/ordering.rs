use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{ContentBlock, Page, Section};

/// Anything with a persisted integer order inside a scoped collection.
/// Pages scope to a site, sections to a page, blocks to a section; the
/// algorithms below are identical for all three.
pub trait Ordered {
    fn id(&self) -> Uuid;
    fn position(&self) -> i32;
}

impl Ordered for Page {
    fn id(&self) -> Uuid {
        self.id
    }
    fn position(&self) -> i32 {
        self.position
    }
}

impl Ordered for Section {
    fn id(&self) -> Uuid {
        self.id
    }
    fn position(&self) -> i32 {
        self.position
    }
}

impl Ordered for ContentBlock {
    fn id(&self) -> Uuid {
        self.id
    }
    fn position(&self) -> i32 {
        self.order
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// One (id, new order) pair to persist.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct OrderChange {
    pub id: Uuid,
    pub position: i32,
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum OrderingError {
    #[error("Invalid move")]
    InvalidMove,

    #[error("Item {0} not found in collection")]
    UnknownItem(Uuid),
}

fn by_position(items: &[impl Ordered]) -> Vec<(Uuid, i32)> {
    let mut sorted: Vec<(Uuid, i32)> =
        items.iter().map(|i| (i.id(), i.position())).collect();
    sorted.sort_by_key(|&(_, position)| position);
    sorted
}

/// Swap the moving item's order value with its neighbor in the requested
/// direction. Only the two swapped values change; the collection is not
/// renumbered, so gaps between other items survive. Moving past either end
/// is rejected without touching anything.
pub fn shift(
    items: &[impl Ordered],
    moving_id: Uuid,
    direction: Direction,
) -> Result<[OrderChange; 2], OrderingError> {
    let sorted = by_position(items);

    let index = sorted
        .iter()
        .position(|&(id, _)| id == moving_id)
        .ok_or(OrderingError::UnknownItem(moving_id))?;

    let neighbor = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => (index + 1 < sorted.len()).then_some(index + 1),
    }
    .ok_or(OrderingError::InvalidMove)?;

    let (moving_id, moving_pos) = sorted[index];
    let (neighbor_id, neighbor_pos) = sorted[neighbor];

    Ok([
        OrderChange {
            id: neighbor_id,
            position: moving_pos,
        },
        OrderChange {
            id: moving_id,
            position: neighbor_pos,
        },
    ])
}

/// Remove the dragged item from the sorted sequence and reinsert it next to
/// the target: after it when dragging forward, before it when dragging
/// backward. The whole collection is renumbered 0..n-1 and every pair whose
/// order actually changed is returned.
pub fn drag(
    items: &[impl Ordered],
    dragged_id: Uuid,
    target_id: Uuid,
) -> Result<Vec<OrderChange>, OrderingError> {
    let sorted = by_position(items);

    let from = sorted
        .iter()
        .position(|&(id, _)| id == dragged_id)
        .ok_or(OrderingError::UnknownItem(dragged_id))?;
    let to = sorted
        .iter()
        .position(|&(id, _)| id == target_id)
        .ok_or(OrderingError::UnknownItem(target_id))?;

    if from == to {
        return Ok(Vec::new());
    }

    let mut sequence = sorted.clone();
    let dragged = sequence.remove(from);

    let target_index = sequence
        .iter()
        .position(|&(id, _)| id == target_id)
        .expect("target survives removal of dragged item");

    let insert_at = if from < to {
        target_index + 1
    } else {
        target_index
    };
    sequence.insert(insert_at, dragged);

    Ok(sequence
        .iter()
        .enumerate()
        .filter(|&(i, &(_, old_position))| old_position != i as i32)
        .map(|(i, &(id, _))| OrderChange {
            id,
            position: i as i32,
        })
        .collect())
}

/// The next free order value for an append.
pub fn next_position(items: &[impl Ordered]) -> i32 {
    items
        .iter()
        .map(Ordered::position)
        .max()
        .map_or(0, |max| max + 1)
}
