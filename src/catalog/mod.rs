use indexmap::IndexMap;

use crate::error::{AppError, AppResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

/// The authoritative in-memory product collection.
///
/// Backed by an insertion-ordered id-keyed map, so iteration preserves
/// creation order while lookups stay O(1). Ids are assigned monotonically
/// and never reused, even after a delete.
#[derive(Debug)]
pub struct Catalog {
    products: IndexMap<u64, Product>,
    next_id: u64,
}

impl Catalog {
    /// Empty catalog; the first assigned id is 1.
    pub fn new() -> Self {
        Self {
            products: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Catalog pre-loaded with the three fixed seed records (ids 1..=3).
    pub fn with_seed() -> Self {
        let mut catalog = Self::new();
        for (name, description, price, category, stock) in [
            (
                "Samsung Galaxy S23 Smartphone",
                "Android smartphone with a 6.1-inch display and 50MP camera",
                2999.99,
                "Electronics",
                15,
            ),
            (
                "Dell Inspiron 15 Notebook",
                "Notebook with an Intel i7 processor and 16GB of RAM",
                4599.99,
                "Computers",
                8,
            ),
            (
                "Sony WH-1000XM4 Headphones",
                "Wireless noise-cancelling headphones",
                1299.99,
                "Accessories",
                25,
            ),
        ] {
            catalog.create(CreateProduct {
                name: name.to_string(),
                description: description.to_string(),
                price,
                category: Some(category.to_string()),
                stock: Some(stock),
            });
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// All products in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> AppResult<Product> {
        self.products
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// Assigns the next unused id and appends the record.
    pub fn create(&mut self, payload: CreateProduct) -> Product {
        let product = Product {
            id: self.next_id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            stock: payload.stock,
        };
        self.products.insert(product.id, product.clone());
        self.next_id += 1;
        product
    }

    /// Merges the fields present in `payload` over the existing record.
    /// Omitted fields are untouched; the id never changes.
    pub fn update(&mut self, id: u64, payload: UpdateProduct) -> AppResult<Product> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

        if let Some(name) = payload.name {
            product.name = name;
        }
        if let Some(description) = payload.description {
            product.description = description;
        }
        if let Some(price) = payload.price {
            product.price = price;
        }
        if let Some(category) = payload.category {
            product.category = category;
        }
        if let Some(stock) = payload.stock {
            product.stock = stock;
        }

        Ok(product.clone())
    }

    /// Removes the record, keeping the remainder in order, and returns it.
    pub fn delete(&mut self, id: u64) -> AppResult<Product> {
        self.products
            .shift_remove(&id)
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// Case-insensitive substring match over name or description, in
    /// insertion order. The empty query matches every product.
    pub fn search(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.products
            .values()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
