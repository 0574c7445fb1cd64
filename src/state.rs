use std::{path::Path, sync::Arc};

use crate::{
    catalog::{Catalog, CatalogError},
    models::{Order, Product, User},
    store::FileRepository,
};

pub const PRODUCTS_FILE: &str = "products.json";
pub const USERS_FILE: &str = "users.json";
pub const ORDERS_FILE: &str = "orders.json";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub users: FileRepository<User>,
    pub orders: FileRepository<Order>,
}

impl AppState {
    /// Open the collections under `data_dir` and snapshot the catalog.
    pub async fn load(data_dir: &Path) -> Result<Self, CatalogError> {
        let products: FileRepository<Product> = FileRepository::new(data_dir.join(PRODUCTS_FILE));
        let catalog = Catalog::load(&products).await?;
        Ok(Self::with_catalog(data_dir, catalog))
    }

    pub fn with_catalog(data_dir: &Path, catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            users: FileRepository::new(data_dir.join(USERS_FILE)),
            orders: FileRepository::new(data_dir.join(ORDERS_FILE)),
        }
    }
}
