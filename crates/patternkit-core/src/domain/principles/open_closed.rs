//! Open/Closed: filtering products through composable specifications.
//!
//! [`ProductFilter`] is the "before" picture: every new criterion means a new
//! method. [`BetterFilter`] stays closed for modification; new criteria are new
//! [`Specification`] types, and [`AndSpecification`] combines them.

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    value_objects::{Color, Size},
};

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    /// Create a product. The name must not be blank.
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::MissingName { entity: "product" });
        }
        Ok(Self { name, color, size })
    }
}

// ── Before: one method per criterion ──────────────────────────────────────────

/// Filter that has to be edited for every new criterion.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn by_size<'a>(
        &self,
        products: &'a [Product],
        size: Size,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |p| p.size == size)
    }

    pub fn by_color<'a>(
        &self,
        products: &'a [Product],
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products.iter().filter(move |p| p.color == color)
    }

    pub fn by_size_and_color<'a>(
        &self,
        products: &'a [Product],
        size: Size,
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        products
            .iter()
            .filter(move |p| p.size == size && p.color == color)
    }
}

// ── After: specifications ─────────────────────────────────────────────────────

/// A single boolean predicate over `T`.
pub trait Specification<T> {
    fn is_satisfied(&self, item: &T) -> bool;
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Matches products of one colour.
#[derive(Debug, Clone, Copy)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

/// Matches products of one size.
#[derive(Debug, Clone, Copy)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

/// Conjunction of two specifications.
#[derive(Debug, Clone, Copy)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

/// Combinators available on every specification.
pub trait SpecificationExt<T>: Specification<T> + Sized {
    /// Both `self` and `other` must hold.
    fn and<S: Specification<T>>(self, other: S) -> AndSpecification<Self, S> {
        AndSpecification::new(self, other)
    }
}

impl<T, S: Specification<T>> SpecificationExt<T> for S {}

/// Filters a sequence lazily, keeping input order.
pub trait Filter<T> {
    fn filter<'a>(
        &self,
        items: &'a [T],
        spec: &'a dyn Specification<T>,
    ) -> Box<dyn Iterator<Item = &'a T> + 'a>;
}

/// The filter that never needs editing.
#[derive(Debug, Default, Clone, Copy)]
pub struct BetterFilter;

impl<T> Filter<T> for BetterFilter {
    fn filter<'a>(
        &self,
        items: &'a [T],
        spec: &'a dyn Specification<T>,
    ) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(items.iter().filter(move |item| spec.is_satisfied(item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];
    const SIZES: [Size; 4] = [Size::Small, Size::Medium, Size::Large, Size::Huge];

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Apple", Color::Green, Size::Small).unwrap(),
            Product::new("Tree", Color::Green, Size::Large).unwrap(),
            Product::new("House", Color::Blue, Size::Large).unwrap(),
            Product::new("Car", Color::Red, Size::Medium).unwrap(),
            Product::new("Lake", Color::Blue, Size::Huge).unwrap(),
            Product::new("Banana", Color::Yellow, Size::Small).unwrap(),
        ]
    }

    fn names<'a>(it: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        it.map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn blank_product_name_is_rejected() {
        assert_eq!(
            Product::new("  ", Color::Red, Size::Small),
            Err(DomainError::MissingName { entity: "product" })
        );
    }

    #[test]
    fn old_filter_finds_green_products() {
        let products = catalog();
        assert_eq!(
            names(ProductFilter.by_color(&products, Color::Green)),
            ["Apple", "Tree"]
        );
        assert_eq!(
            names(ProductFilter.by_size_and_color(&products, Size::Large, Color::Blue)),
            ["House"]
        );
    }

    #[test]
    fn better_filter_matches_old_filter() {
        let products = catalog();
        for size in SIZES {
            let spec = SizeSpecification::new(size);
            assert_eq!(
                names(BetterFilter.filter(&products, &spec)),
                names(ProductFilter.by_size(&products, size))
            );
        }
    }

    #[test]
    fn large_blue_items() {
        let products = catalog();
        let spec = ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Large));
        assert_eq!(names(BetterFilter.filter(&products, &spec)), ["House"]);
    }

    #[test]
    fn and_equals_ordered_intersection() {
        let products = catalog();
        for color in COLORS {
            for size in SIZES {
                let p = ColorSpecification::new(color);
                let q = SizeSpecification::new(size);
                let both = AndSpecification::new(p, q);

                let by_p = names(BetterFilter.filter(&products, &p));
                let by_q = names(BetterFilter.filter(&products, &q));
                let intersection: Vec<&str> =
                    by_p.into_iter().filter(|n| by_q.contains(n)).collect();

                assert_eq!(names(BetterFilter.filter(&products, &both)), intersection);
            }
        }
    }

    #[test]
    fn empty_input_yields_nothing() {
        let products: Vec<Product> = Vec::new();
        let spec = ColorSpecification::new(Color::Red);
        assert_eq!(BetterFilter.filter(&products, &spec).count(), 0);
    }
}
