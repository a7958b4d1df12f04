//! Single Responsibility refactorings: an order split into logic,
//! persistence and presentation, and an email sender that no longer logs by
//! itself.

pub mod email;
pub mod order;

pub use email::{sample_mailbox, ConsoleLogger, Email, EmailSender, Logger, TracingLogger};
pub use order::{InMemoryOrderRepository, Item, Order, OrderPrinter, OrderRepository};

use crate::console::Console;
use crate::error::Result;

pub fn run(console: &dyn Console) -> Result<()> {
    let mut repository = InMemoryOrderRepository::new();
    let printer = OrderPrinter;

    let mut order = Order::new(1);
    order.add_item(Item::new("Notebook", 2.5, 4));
    order.add_item(Item::new("Pen", 1.25, 2));
    repository.save(&order)?;

    order.add_item(Item::new("Eraser", 0.5, 1));
    order.delete_item(&Item::new("Pen", 1.25, 2));
    repository.update(&order)?;

    let stored = repository.load(order.id())?;
    printer.print_order(&stored, console);
    console.line(&printer.show_order(&stored));

    repository.delete(stored.id())?;

    console.blank();
    let sender = EmailSender::new(ConsoleLogger::new(console));
    for email in sample_mailbox() {
        sender.send(&email);
    }

    Ok(())
}
