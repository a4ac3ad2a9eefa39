use crate::domain::product::{Product, ProductId};

/// Read-only catalog snapshot for one scoring call. Row order is preserved
/// and meaningful: ties in every ranking are broken by first appearance.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    /// Index of the first row whose display name matches exactly.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|product| product.name == name)
    }
}
