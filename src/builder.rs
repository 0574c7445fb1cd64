//! Budget-constrained build suggestions.
//!
//! Each category gets a spending ceiling of `budget * ratio`, where the ratio
//! depends on the usage profile. The most expensive product at or under the
//! ceiling is picked for every category. Ratios are independent caps and do
//! not have to sum to one.

use crate::{
    catalog::Catalog,
    models::{Category, Product},
};

/// Fewest filled categories the storefront treats as a usable build.
pub const MIN_COMPLETE_PARTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsageProfile {
    #[default]
    Balanced,
    Gaming,
    Editing,
}

impl UsageProfile {
    /// Unknown or empty names fall back to the balanced profile.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "gaming" => UsageProfile::Gaming,
            "editing" => UsageProfile::Editing,
            _ => UsageProfile::Balanced,
        }
    }

    pub fn ratio(self, category: Category) -> f64 {
        match (self, category) {
            (UsageProfile::Gaming, Category::Cpu) => 0.20,
            (UsageProfile::Editing, Category::Cpu) => 0.35,
            (UsageProfile::Balanced, Category::Cpu) => 0.25,

            (UsageProfile::Gaming, Category::Gpu) => 0.40,
            (UsageProfile::Editing, Category::Gpu) => 0.25,
            (UsageProfile::Balanced, Category::Gpu) => 0.35,

            (UsageProfile::Editing, Category::Ram) => 0.12,
            (_, Category::Ram) => 0.08,

            (_, Category::Motherboard) => 0.12,
            (_, Category::Storage) => 0.08,
            (_, Category::Psu) => 0.08,
            (_, Category::Cabinet) => 0.04,
        }
    }

    pub fn ceiling(self, budget: f64, category: Category) -> f64 {
        budget * self.ratio(category)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Build {
    /// At most one product per category, in [`Category::ALL`] order.
    pub parts: Vec<Product>,
    pub total: u64,
}

impl Build {
    pub fn is_complete(&self) -> bool {
        self.parts.len() >= MIN_COMPLETE_PARTS
    }
}

/// Pick the best affordable product for every category.
///
/// Categories with nothing under their ceiling are left out. Equal prices go
/// to the product listed first in the catalog. A non-positive budget yields an
/// empty build.
pub fn allocate(catalog: &Catalog, budget: f64, profile: UsageProfile) -> Build {
    if budget.is_nan() || budget <= 0.0 {
        return Build::default();
    }

    let parts: Vec<Product> = Category::ALL
        .iter()
        .filter_map(|&category| {
            let ceiling = profile.ceiling(budget, category);
            best_under(catalog.in_category(category), ceiling).cloned()
        })
        .collect();
    let total = parts.iter().fold(0u64, |sum, p| sum.saturating_add(p.price));

    Build { parts, total }
}

fn best_under<'a>(
    candidates: impl Iterator<Item = &'a Product>,
    ceiling: f64,
) -> Option<&'a Product> {
    candidates
        .filter(|p| p.price as f64 <= ceiling)
        .fold(None, |best: Option<&Product>, p| match best {
            Some(b) if b.price >= p.price => Some(b),
            _ => Some(p),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::product;

    fn pc_catalog() -> Catalog {
        Catalog::new(vec![
            product(1, "Ryzen 5 5600", Category::Cpu, 11000),
            product(2, "Ryzen 7 7700X", Category::Cpu, 29000),
            product(3, "Core i9 14900K", Category::Cpu, 52000),
            product(10, "RTX 3050", Category::Gpu, 18000),
            product(11, "RTX 4070", Category::Gpu, 55000),
            product(12, "RTX 4090", Category::Gpu, 160000),
            product(20, "B550M", Category::Motherboard, 9000),
            product(21, "X670E", Category::Motherboard, 30000),
            product(30, "16GB DDR4", Category::Ram, 3500),
            product(31, "32GB DDR5", Category::Ram, 9000),
            product(40, "1TB NVMe", Category::Storage, 5500),
            product(50, "650W Bronze", Category::Psu, 4500),
            product(51, "850W Gold", Category::Psu, 11000),
            product(60, "Airflow Mid Tower", Category::Cabinet, 3900),
        ])
        .unwrap()
    }

    fn ids(build: &Build) -> Vec<i64> {
        build.parts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn gaming_picks_most_expensive_cpu_under_ceiling() {
        let catalog = Catalog::new(vec![
            product(1, "cpu a", Category::Cpu, 100),
            product(2, "cpu b", Category::Cpu, 200),
        ])
        .unwrap();

        let build = allocate(&catalog, 1000.0, UsageProfile::Gaming);
        assert_eq!(ids(&build), vec![2]);
        assert_eq!(build.total, 200);
    }

    #[test]
    fn tiny_budget_yields_empty_build() {
        for profile in [UsageProfile::Balanced, UsageProfile::Gaming, UsageProfile::Editing] {
            let build = allocate(&pc_catalog(), 10.0, profile);
            assert!(build.parts.is_empty());
            assert_eq!(build.total, 0);
            assert!(!build.is_complete());
        }
    }

    #[test]
    fn non_positive_budget_yields_empty_build() {
        let catalog = Catalog::new(vec![product(1, "free cooler", Category::Cabinet, 0)]).unwrap();
        assert!(allocate(&catalog, 0.0, UsageProfile::Balanced).parts.is_empty());
        assert!(allocate(&catalog, -500.0, UsageProfile::Balanced).parts.is_empty());
        assert!(allocate(&catalog, f64::NAN, UsageProfile::Balanced).parts.is_empty());
    }

    #[test]
    fn every_part_respects_its_ceiling() {
        let catalog = pc_catalog();
        for budget in [20_000.0, 75_000.0, 150_000.0, 400_000.0] {
            for profile in [UsageProfile::Balanced, UsageProfile::Gaming, UsageProfile::Editing] {
                let build = allocate(&catalog, budget, profile);
                for part in &build.parts {
                    assert!(part.price as f64 <= profile.ceiling(budget, part.category));
                }
            }
        }
    }

    #[test]
    fn parts_follow_category_order_without_repeats() {
        let build = allocate(&pc_catalog(), 400_000.0, UsageProfile::Balanced);
        let categories: Vec<Category> = build.parts.iter().map(|p| p.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        assert_eq!(build.total, build.parts.iter().map(|p| p.price).sum::<u64>());
    }

    #[test]
    fn categories_without_an_affordable_part_are_omitted() {
        // 100k gaming: cpu 20k, gpu 40k, board 12k, ram 8k, storage 8k, psu 8k, cabinet 4k
        let build = allocate(&pc_catalog(), 100_000.0, UsageProfile::Gaming);
        assert_eq!(ids(&build), vec![1, 10, 20, 30, 40, 50, 60]);

        let catalog = Catalog::new(vec![product(1, "only cpu", Category::Cpu, 100)]).unwrap();
        let build = allocate(&catalog, 1_000.0, UsageProfile::Balanced);
        assert_eq!(ids(&build), vec![1]);
    }

    #[test]
    fn editing_shifts_budget_towards_cpu_and_ram() {
        let catalog = pc_catalog();
        let editing = allocate(&catalog, 100_000.0, UsageProfile::Editing);
        // cpu ceiling 35k, ram ceiling 12k
        assert!(editing.parts.iter().any(|p| p.id == 2));
        assert!(editing.parts.iter().any(|p| p.id == 31));
    }

    #[test]
    fn equal_prices_resolve_to_catalog_order() {
        let catalog = Catalog::new(vec![
            product(5, "first", Category::Gpu, 300),
            product(6, "second", Category::Gpu, 300),
        ])
        .unwrap();
        let build = allocate(&catalog, 1_000.0, UsageProfile::Balanced);
        assert_eq!(ids(&build), vec![5]);
    }

    #[test]
    fn allocation_is_repeatable() {
        let catalog = pc_catalog();
        let first = allocate(&catalog, 123_456.0, UsageProfile::Gaming);
        let second = allocate(&catalog, 123_456.0, UsageProfile::Gaming);
        assert_eq!(first, second);
    }

    #[test]
    fn profile_names_are_forgiving() {
        assert_eq!(UsageProfile::parse(" Gaming "), UsageProfile::Gaming);
        assert_eq!(UsageProfile::parse("EDITING"), UsageProfile::Editing);
        assert_eq!(UsageProfile::parse("streaming"), UsageProfile::Balanced);
        assert_eq!(UsageProfile::parse(""), UsageProfile::Balanced);
    }

    #[test]
    fn completeness_threshold() {
        let catalog = Catalog::new(vec![
            product(1, "cpu", Category::Cpu, 100),
            product(2, "gpu", Category::Gpu, 100),
        ])
        .unwrap();
        assert!(!allocate(&catalog, 10_000.0, UsageProfile::Balanced).is_complete());
        assert!(allocate(&pc_catalog(), 400_000.0, UsageProfile::Balanced).is_complete());
    }
}
