use std::collections::HashSet;

use thiserror::Error;

use crate::{
    models::{Category, Product},
    store::{FileRepository, StoreError},
};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("duplicate product id {0} in catalog")]
    DuplicateId(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    PriceAsc,
    PriceDesc,
    NameAsc,
}

impl ProductSort {
    /// Parses the storefront's sort keys. Anything else keeps catalog order.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price-asc" => Some(ProductSort::PriceAsc),
            "price-desc" => Some(ProductSort::PriceDesc),
            "name-asc" => Some(ProductSort::NameAsc),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<ProductSort>,
}

/// Immutable product snapshot, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    pub async fn load(repo: &FileRepository<Product>) -> Result<Self, CatalogError> {
        let products = repo.read_all().await?;
        Self::new(products)
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

    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    pub fn query(&self, query: &CatalogQuery) -> Vec<Product> {
        let category = query
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != "all");
        let search = query
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut items: Vec<Product> = self
            .products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category.as_str() == c))
            .filter(|p| {
                search.as_deref().is_none_or(|s| {
                    p.name.to_lowercase().contains(s) || p.category.as_str().contains(s)
                })
            })
            .cloned()
            .collect();

        match query.sort {
            Some(ProductSort::PriceAsc) => items.sort_by_key(|p| p.price),
            Some(ProductSort::PriceDesc) => items.sort_by(|a, b| b.price.cmp(&a.price)),
            Some(ProductSort::NameAsc) => items.sort_by_cached_key(|p| p.name.to_lowercase()),
            None => {}
        }

        items
    }
}
