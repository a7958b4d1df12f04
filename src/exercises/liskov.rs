// Liskov Substitution: a square is not a rectangle you can stretch.
//
// Both shapes report a correct area, but only `Rectangle` promises that width
// and height change independently. Keeping that promise in its own trait
// stops a `Square` from being handed to code that relies on it.

use crate::console::Console;

/// Areas are widened to `i64`, so any pair of `i32` sides fits.
pub trait Shape {
    fn area(&self) -> i64;
}

/// Width and height can be set independently of each other.
pub trait Resizable: Shape {
    fn set_width(&mut self, width: i32);
    fn set_height(&mut self, height: i32);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rectangle {
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }
}

impl Resizable for Rectangle {
    fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    fn set_height(&mut self, height: i32) {
        self.height = height;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square {
    pub side: i32,
}

impl Square {
    pub fn new(side: i32) -> Self {
        Self { side }
    }

    pub fn set_side(&mut self, side: i32) {
        self.side = side;
    }
}

impl Shape for Square {
    fn area(&self) -> i64 {
        i64::from(self.side) * i64::from(self.side)
    }
}

/// Sets both sides and returns the area. Any `Resizable` must answer
/// `width * height` here.
pub fn resize<R: Resizable>(shape: &mut R, width: i32, height: i32) -> i64 {
    shape.set_width(width);
    shape.set_height(height);
    shape.area()
}

/// Summed as `i128`: two `i32::MIN` squares already exceed `i64::MAX`.
pub fn total_area(shapes: &[&dyn Shape]) -> i128 {
    shapes.iter().map(|shape| i128::from(shape.area())).sum()
}

pub fn run(console: &dyn Console) {
    let mut rectangle = Rectangle::new(10, 10);
    let square = Square::new(10);

    console.line(&format!("Rectangle 10x10 area: {}", rectangle.area()));
    console.line(&format!("Square with side 10 area: {}", square.area()));
    let shapes: [&dyn Shape; 2] = [&rectangle, &square];
    console.line(&format!("Combined area: {}", total_area(&shapes)));

    let resized = resize(&mut rectangle, 5, 4);
    console.line(&format!("Rectangle resized to 5x4 area: {resized}"));
    console.line("Square is not Resizable: its width and height cannot change independently.");
}
