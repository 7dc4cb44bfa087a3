//! Shopping Cart Ledger
//!
//! Cart transitions. Each function takes the current cart by value and
//! returns the next one; none of them can fail.

use super::models::{Cart, CartLineItem};
use crate::catalog::models::{Product, ProductId};

/// Adds one unit of `product`.
///
/// An existing line item only has its quantity bumped; its price and other
/// fields stay as they were when first added. New products go to the end.
pub fn add_to_cart(mut cart: Cart, product: &Product) -> Cart {
    if let Some(existing) = cart.items.iter_mut().find(|i| i.id() == product.id) {
        existing.quantity = existing.quantity.saturating_add(1);
    } else {
        cart.items.push(CartLineItem::new(product.clone()));
    }
    cart
}

/// Drops the line item for `product_id`; a missing id leaves the cart as is.
pub fn remove_from_cart(mut cart: Cart, product_id: ProductId) -> Cart {
    cart.items.retain(|i| i.id() != product_id);
    cart
}

/// Shifts the quantity of `product_id` by `delta`, never going below 1.
pub fn update_quantity(mut cart: Cart, product_id: ProductId, delta: i64) -> Cart {
    if let Some(item) = cart.items.iter_mut().find(|i| i.id() == product_id) {
        let next = (i128::from(item.quantity) + i128::from(delta)).max(1);
        item.quantity = u64::try_from(next).unwrap_or(u64::MAX);
    }
    cart
}

/// Sum of `price * quantity` over all line items.
pub fn cart_total(cart: &Cart) -> u64 {
    cart.items.iter().fold(0u64, |sum, i| {
        sum.saturating_add(i.product.price.saturating_mul(i.quantity))
    })
}

/// Sum of quantities over all line items.
pub fn cart_count(cart: &Cart) -> u64 {
    cart.items
        .iter()
        .fold(0u64, |sum, i| sum.saturating_add(i.quantity))
}

/// Produces a human-readable one-line summary for a cart.
///
/// Example output: `"2x iPhone 15 Pro Max, 1x AirPods Pro 2"`.
pub fn format_item_summary(cart: &Cart) -> String {
    cart.items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: ProductId) -> Product {
        Catalog::builtin().get(id).cloned().unwrap()
    }

    fn quantities(cart: &Cart) -> Vec<(ProductId, u64)> {
        cart.items().iter().map(|i| (i.id(), i.quantity)).collect()
    }

    #[test]
    fn empty_cart_has_zero_totals() {
        let cart = Cart::new();
        assert_eq!(cart_total(&cart), 0);
        assert_eq!(cart_count(&cart), 0);
        assert_eq!(format_item_summary(&cart), "");
    }

    #[test]
    fn adding_twice_merges_into_one_line() {
        let iphone = product(1);
        let cart = add_to_cart(add_to_cart(Cart::new(), &iphone), &iphone);
        assert_eq!(quantities(&cart), vec![(1, 2)]);
    }

    #[test]
    fn new_products_keep_insertion_order() {
        let cart = add_to_cart(Cart::new(), &product(5));
        let cart = add_to_cart(cart, &product(1));
        let cart = add_to_cart(cart, &product(5));
        assert_eq!(quantities(&cart), vec![(5, 2), (1, 1)]);
    }

    #[test]
    fn line_items_keep_the_price_they_were_added_at() {
        let mut iphone = product(1);
        let cart = add_to_cart(Cart::new(), &iphone);
        iphone.price = 99990;
        let cart = add_to_cart(cart, &iphone);
        assert_eq!(cart.get(1).map(|i| i.product.price), Some(129990));
        assert_eq!(cart_total(&cart), 259980);
    }

    #[test]
    fn quantity_clamps_at_one() {
        let cart = add_to_cart(Cart::new(), &product(2));
        for (delta, expected) in [(3, 4), (-1, 1), (-10, 1), (0, 1), (i64::MIN, 1)] {
            let next = update_quantity(cart.clone(), 2, delta);
            assert_eq!(next.get(2).map(|i| i.quantity), Some(expected));
        }
    }

    #[test]
    fn quantity_follows_max_one_rule() {
        let mut cart = add_to_cart(Cart::new(), &product(4));
        cart = update_quantity(cart, 4, 4);
        assert_eq!(cart.get(4).map(|i| i.quantity), Some(5));
        cart = update_quantity(cart, 4, -2);
        assert_eq!(cart.get(4).map(|i| i.quantity), Some(3));
        cart = update_quantity(cart, 4, -3);
        assert_eq!(cart.get(4).map(|i| i.quantity), Some(1));
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let cart = add_to_cart(Cart::new(), &product(3));
        assert_eq!(remove_from_cart(cart.clone(), 42), cart);
        assert_eq!(update_quantity(cart.clone(), 42, 5), cart);
    }

    #[test]
    fn totals_follow_line_items() {
        let cart = add_to_cart(Cart::new(), &product(1));
        let cart = add_to_cart(cart, &product(5));
        let cart = update_quantity(cart, 5, 2);
        assert_eq!(cart_count(&cart), 4);
        assert_eq!(cart_total(&cart), 129990 + 3 * 24990);
        assert_eq!(format_item_summary(&cart), "1x iPhone 15 Pro Max, 3x AirPods Pro 2");
    }

    #[test]
    fn iphone_walkthrough() {
        let iphone = product(1);

        let cart = add_to_cart(Cart::new(), &iphone);
        assert_eq!(quantities(&cart), vec![(1, 1)]);
        assert_eq!((cart_total(&cart), cart_count(&cart)), (129990, 1));

        let cart = add_to_cart(cart, &iphone);
        assert_eq!(quantities(&cart), vec![(1, 2)]);
        assert_eq!((cart_total(&cart), cart_count(&cart)), (259980, 2));

        let cart = update_quantity(cart, 1, -5);
        assert_eq!(quantities(&cart), vec![(1, 1)]);
        assert_eq!(cart_total(&cart), 129990);

        let cart = remove_from_cart(cart, 1);
        assert!(cart.is_empty());
        assert_eq!((cart_total(&cart), cart_count(&cart)), (0, 0));
    }
}
