//! The built-in catalog shipped with the storefront.

use super::models::{Category, CategoryFilter, CategoryInfo, Product, ProductId, Promo};

/// Immutable product list, kept in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Wraps an arbitrary product list. Ids are expected to be unique.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            product(
                1,
                "iPhone 15 Pro Max",
                129990,
                Some(149990),
                "https://images.unsplash.com/photo-1696446702792-da87e32a5f0b?w=400",
                Category::Phones,
                4.9,
                342,
                Some("ХИТ"),
            ),
            product(
                2,
                "Samsung Galaxy S24 Ultra",
                119990,
                None,
                "https://images.unsplash.com/photo-1610945415295-d9bbf067e59c?w=400",
                Category::Phones,
                4.8,
                256,
                Some("НОВИНКА"),
            ),
            product(
                3,
                "iPad Pro 12.9\"",
                109990,
                Some(119990),
                "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400",
                Category::Tablets,
                4.9,
                189,
                Some("-10%"),
            ),
            product(
                4,
                "Apple Watch Series 9",
                44990,
                None,
                "https://images.unsplash.com/photo-1434494878577-86c23bcb06b9?w=400",
                Category::Watches,
                4.7,
                423,
                None,
            ),
            product(
                5,
                "AirPods Pro 2",
                24990,
                Some(29990),
                "https://images.unsplash.com/photo-1606841837239-c5a1a4a07af7?w=400",
                Category::Accessories,
                4.8,
                567,
                Some("-17%"),
            ),
            product(
                6,
                "Xiaomi 14 Pro",
                79990,
                None,
                "https://images.unsplash.com/photo-1598327105666-5b89351aff97?w=400",
                Category::Phones,
                4.6,
                134,
                None,
            ),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: ProductId,
    name: &str,
    price: u64,
    old_price: Option<u64>,
    image: &str,
    category: Category,
    rating: f32,
    reviews: u32,
    badge: Option<&str>,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        old_price,
        image: image.to_string(),
        category,
        rating,
        reviews,
        in_stock: true,
        badge: badge.map(str::to_string),
    }
}

/// Category bar entries, "all" first.
pub fn categories() -> Vec<CategoryInfo> {
    let entry = |id: CategoryFilter, name: &'static str, icon: &'static str| CategoryInfo {
        id,
        name,
        icon,
    };
    vec![
        entry(CategoryFilter::All, "Все", "Grid3x3"),
        entry(CategoryFilter::Only(Category::Phones), "Смартфоны", "Smartphone"),
        entry(CategoryFilter::Only(Category::Tablets), "Планшеты", "Tablet"),
        entry(CategoryFilter::Only(Category::Watches), "Часы", "Watch"),
        entry(CategoryFilter::Only(Category::Accessories), "Аксессуары", "Headphones"),
    ]
}

/// Categories listed on the catalog tab (everything except "all").
pub fn browsable_categories() -> Vec<CategoryInfo> {
    categories()
        .into_iter()
        .filter(|c| c.id != CategoryFilter::All)
        .collect()
}

pub fn promos() -> Vec<Promo> {
    vec![
        Promo {
            id: 1,
            title: "Скидка 20% на смартфоны",
            description: "При покупке от 2 устройств",
            gradient: "from-purple-500 to-pink-500",
        },
        Promo {
            id: 2,
            title: "Trade-in +15%",
            description: "Сдай старый телефон выгодно",
            gradient: "from-blue-500 to-cyan-500",
        },
        Promo {
            id: 3,
            title: "Рассрочка 0%",
            description: "До 24 месяцев без переплаты",
            gradient: "from-orange-500 to-red-500",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.products().len());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(1).map(|p| p.price), Some(129990));
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn catalog_tab_hides_the_all_entry() {
        let browsable = browsable_categories();
        assert_eq!(browsable.len(), Category::ALL.len());
        assert!(browsable.iter().all(|c| c.id != CategoryFilter::All));
    }
}
