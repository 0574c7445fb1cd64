use quantum_build_api::{
    config::AppConfig,
    models::{Category, Product},
    state::PRODUCTS_FILE,
    store::FileRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let repo: FileRepository<Product> = FileRepository::new(config.data_dir.join(PRODUCTS_FILE));
    if repo.path().exists() {
        println!("{} already exists, leaving it alone", repo.path().display());
        return Ok(());
    }

    let products = sample_products();
    repo.write_all(&products).await?;

    println!("Seeded {} products into {}", products.len(), repo.path().display());
    Ok(())
}

fn sample_products() -> Vec<Product> {
    let rows = [
        (Category::Cpu, "AMD Ryzen 5 5600", 10999, "6C/12T, 4.4 GHz boost", "Budget gaming", 14),
        (Category::Cpu, "AMD Ryzen 7 7700X", 28999, "8C/16T, 5.4 GHz boost", "Gaming and streaming", 6),
        (Category::Cpu, "Intel Core i9-14900K", 52999, "24C/32T, 6.0 GHz boost", "Editing and 3D", 3),
        (Category::Gpu, "NVIDIA RTX 3050 8GB", 21999, "8GB GDDR6", "1080p gaming", 9),
        (Category::Gpu, "NVIDIA RTX 4070 Super", 58999, "12GB GDDR6X", "1440p gaming", 4),
        (Category::Gpu, "NVIDIA RTX 4090", 164999, "24GB GDDR6X", "4K gaming and AI", 2),
        (Category::Motherboard, "MSI B550M Pro-VDH", 8999, "AM4, mATX, PCIe 4.0", "Budget builds", 11),
        (Category::Motherboard, "ASUS ROG Strix X670E-E", 41999, "AM5, ATX, PCIe 5.0", "High-end builds", 3),
        (Category::Ram, "Corsair Vengeance 16GB DDR4", 3499, "2x8GB 3200MHz", "Everyday use", 25),
        (Category::Ram, "G.Skill Trident Z5 32GB DDR5", 10999, "2x16GB 6000MHz", "Editing", 8),
        (Category::Storage, "WD Blue SN580 1TB", 5499, "NVMe PCIe 4.0", "Boot drive", 18),
        (Category::Storage, "Samsung 990 Pro 2TB", 15999, "NVMe PCIe 4.0", "Large projects", 5),
        (Category::Psu, "Cooler Master MWE 650W", 4599, "80+ Bronze", "Mid-range builds", 12),
        (Category::Psu, "Corsair RM850x", 11999, "80+ Gold, fully modular", "High-end builds", 7),
        (Category::Cabinet, "Ant Esports ICE-112", 3299, "Mid tower, mesh front", "Airflow", 16),
        (Category::Cabinet, "Lian Li O11 Dynamic", 12999, "Dual chamber", "Showcase builds", 4),
    ];

    rows.into_iter()
        .zip(1..)
        .map(|((category, name, price, specs, usage, stock), id)| Product {
            id,
            name: name.to_string(),
            category,
            price,
            image: format!("images/{}.jpg", category),
            badge: String::new(),
            specs: specs.to_string(),
            description: format!("{name} ({specs})"),
            usage: usage.to_string(),
            stock,
        })
        .collect()
}
