use crate::{
    catalog::{CatalogQuery, ProductSort},
    error::{AppError, AppResult},
    models::Product,
    routes::params::ProductQuery,
    state::AppState,
};

pub fn list_products(state: &AppState, query: ProductQuery) -> Vec<Product> {
    let query = CatalogQuery {
        category: query.category,
        search: query.q,
        sort: query.sort.as_deref().and_then(ProductSort::parse),
    };
    state.catalog.query(&query)
}

pub fn get_product(state: &AppState, id: i64) -> AppResult<Product> {
    state.catalog.get(id).cloned().ok_or(AppError::NotFound)
}
