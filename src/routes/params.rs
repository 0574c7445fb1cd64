use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Category to keep; `all` or empty keeps every category.
    pub category: Option<String>,
    /// Case-insensitive match against name, or a match against category.
    pub q: Option<String>,
    /// One of `price-asc`, `price-desc`, `name-asc`.
    pub sort: Option<String>,
}
