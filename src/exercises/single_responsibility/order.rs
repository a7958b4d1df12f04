// Order handling split three ways: business rules, persistence, presentation.
// Each type has exactly one reason to change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::console::Console;
use crate::error::{ExerciseError, Result};

// ============================================================================
// Business logic
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: u64,
    items: Vec<Item>,
}

impl Order {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Number of line items, not the sum of quantities.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the first line item equal to `item`.
    pub fn delete_item(&mut self, item: &Item) -> Option<Item> {
        let index = self.items.iter().position(|existing| existing == item)?;
        Some(self.items.remove(index))
    }

    pub fn total_sum(&self) -> f64 {
        self.items
            .iter()
            .fold(0.0, |total, item| total + item.subtotal())
    }
}

// ============================================================================
// Persistence
// ============================================================================

pub trait OrderRepository {
    fn load(&self, id: u64) -> Result<Order>;
    fn save(&mut self, order: &Order) -> Result<()>;
    fn update(&mut self, order: &Order) -> Result<()>;
    fn delete(&mut self, id: u64) -> Result<()>;
}

/// Keeps each order as a JSON snapshot, so a loaded order never aliases the
/// one that was saved.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    snapshots: BTreeMap<u64, String>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn load(&self, id: u64) -> Result<Order> {
        let snapshot = self
            .snapshots
            .get(&id)
            .ok_or(ExerciseError::OrderNotFound(id))?;
        debug!(id, "loading order");
        Ok(serde_json::from_str(snapshot)?)
    }

    fn save(&mut self, order: &Order) -> Result<()> {
        if self.snapshots.contains_key(&order.id) {
            return Err(ExerciseError::OrderAlreadyExists(order.id));
        }
        debug!(id = order.id, items = order.item_count(), "saving order");
        self.snapshots.insert(order.id, serde_json::to_string(order)?);
        Ok(())
    }

    fn update(&mut self, order: &Order) -> Result<()> {
        let snapshot = self
            .snapshots
            .get_mut(&order.id)
            .ok_or(ExerciseError::OrderNotFound(order.id))?;
        debug!(id = order.id, items = order.item_count(), "updating order");
        *snapshot = serde_json::to_string(order)?;
        Ok(())
    }

    fn delete(&mut self, id: u64) -> Result<()> {
        debug!(id, "deleting order");
        self.snapshots
            .remove(&id)
            .map(|_| ())
            .ok_or(ExerciseError::OrderNotFound(id))
    }
}

// ============================================================================
// Presentation
// ============================================================================

pub struct OrderPrinter;

impl OrderPrinter {
    pub fn print_order(&self, order: &Order, console: &dyn Console) {
        console.line(&format!("Order #{}", order.id()));
        for item in order.items() {
            console.line(&format!(
                "  {} x{} @ {:.2} = {:.2}",
                item.name,
                item.quantity,
                item.price,
                item.subtotal()
            ));
        }
        console.line(&format!("Total: {:.2}", order.total_sum()));
    }

    pub fn show_order(&self, order: &Order) -> String {
        format!(
            "Order #{}: {} item(s), total {:.2}",
            order.id(),
            order.item_count(),
            order.total_sum()
        )
    }
}
