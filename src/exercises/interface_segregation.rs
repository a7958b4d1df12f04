// Interface Segregation: four narrow capabilities instead of one fat item
// interface. A book never has to pretend it has a color or a size.

use crate::console::Console;

pub trait Priceable {
    fn set_price(&mut self, price: f64);
    fn price(&self) -> f64;
}

pub trait Discountable {
    fn apply_discount(&mut self, discount: &str);
    fn apply_promocode(&mut self, promocode: &str);
}

pub trait Colorable {
    fn set_color(&mut self, color: u8);
}

pub trait Sizeable {
    fn set_size(&mut self, size: u8);
}

// ============================================================================
// Book: price and discounts only
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Book {
    price: f64,
    discount: Option<String>,
    promocode: Option<String>,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn discount(&self) -> Option<&str> {
        self.discount.as_deref()
    }

    pub fn promocode(&self) -> Option<&str> {
        self.promocode.as_deref()
    }
}

impl Priceable for Book {
    fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    fn price(&self) -> f64 {
        self.price
    }
}

impl Discountable for Book {
    fn apply_discount(&mut self, discount: &str) {
        self.discount = Some(discount.to_string());
    }

    fn apply_promocode(&mut self, promocode: &str) {
        self.promocode = Some(promocode.to_string());
    }
}

// ============================================================================
// TopClothes: every capability
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopClothes {
    price: f64,
    color: u8,
    size: u8,
    discount: Option<String>,
    promocode: Option<String>,
}

impl TopClothes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(&self) -> u8 {
        self.color
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn discount(&self) -> Option<&str> {
        self.discount.as_deref()
    }

    pub fn promocode(&self) -> Option<&str> {
        self.promocode.as_deref()
    }
}

impl Priceable for TopClothes {
    fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    fn price(&self) -> f64 {
        self.price
    }
}

impl Discountable for TopClothes {
    fn apply_discount(&mut self, discount: &str) {
        self.discount = Some(discount.to_string());
    }

    fn apply_promocode(&mut self, promocode: &str) {
        self.promocode = Some(promocode.to_string());
    }
}

impl Colorable for TopClothes {
    fn set_color(&mut self, color: u8) {
        self.color = color;
    }
}

impl Sizeable for TopClothes {
    fn set_size(&mut self, size: u8) {
        self.size = size;
    }
}

// ============================================================================
// Callers ask for the narrowest bound they need
// ============================================================================

pub fn put_on_sale<T: Priceable + Discountable>(item: &mut T, price: f64, discount: &str) {
    item.set_price(price);
    item.apply_discount(discount);
}

pub fn tailor<T: Colorable + Sizeable>(item: &mut T, color: u8, size: u8) {
    item.set_color(color);
    item.set_size(size);
}

pub fn catalogue_total(items: &[&dyn Priceable]) -> f64 {
    items.iter().fold(0.0, |total, item| total + item.price())
}

pub fn run(console: &dyn Console) {
    let mut book = Book::new();
    put_on_sale(&mut book, 12.99, "10%");
    book.apply_promocode("READMORE");

    let mut top = TopClothes::new();
    put_on_sale(&mut top, 24.5, "20%");
    tailor(&mut top, 3, 42);

    console.line(&format!(
        "Book: price {:.2}, discount {}, promocode {}",
        book.price(),
        book.discount().unwrap_or("none"),
        book.promocode().unwrap_or("none")
    ));
    console.line(&format!(
        "Top: price {:.2}, discount {}, color {}, size {}",
        top.price(),
        top.discount().unwrap_or("none"),
        top.color(),
        top.size()
    ));
    let catalogue: [&dyn Priceable; 2] = [&book, &top];
    console.line(&format!("Catalogue total: {:.2}", catalogue_total(&catalogue)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RecordingConsole;

    #[test]
    fn test_book_needs_only_price_and_discount() {
        let mut book = Book::new();
        put_on_sale(&mut book, 9.5, "5%");
        book.apply_promocode("WELCOME");

        assert_eq!(book.price(), 9.5);
        assert_eq!(book.discount(), Some("5%"));
        assert_eq!(book.promocode(), Some("WELCOME"));
    }

    #[test]
    fn test_top_clothes_all_capabilities() {
        let mut top = TopClothes::new();
        put_on_sale(&mut top, 30.0, "15%");
        tailor(&mut top, 7, 48);
        top.apply_promocode("SUMMER");

        assert_eq!(top.price(), 30.0);
        assert_eq!(top.color(), 7);
        assert_eq!(top.size(), 48);
        assert_eq!(top.discount(), Some("15%"));
        assert_eq!(top.promocode(), Some("SUMMER"));
    }

    #[test]
    fn test_setters_overwrite() {
        let mut book = Book::new();
        book.apply_discount("5%");
        book.apply_discount("50%");
        book.set_price(1.0);
        book.set_price(2.0);

        assert_eq!(book.discount(), Some("50%"));
        assert_eq!(book.price(), 2.0);
    }

    #[test]
    fn test_fresh_items_have_no_codes() {
        assert_eq!(Book::new().discount(), None);
        assert_eq!(TopClothes::new().promocode(), None);
    }

    #[test]
    fn test_driver_transcript() {
        let console = RecordingConsole::new();
        run(&console);

        assert_eq!(
            console.lines(),
            vec![
                "Book: price 12.99, discount 10%, promocode READMORE",
                "Top: price 24.50, discount 20%, color 3, size 42",
                "Catalogue total: 37.49",
            ]
        );
    }
}
