use log::info;
use pedigree_layout::utils::test::fixtures;
use pedigree_layout::{LayoutConfig, layout_families};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let families = vec![
        fixtures::nuclear_family(),
        fixtures::three_generation_family(),
        fixtures::single_parent_family(),
        fixtures::polygamous_family(),
        fixtures::disconnected_family(),
    ];

    let start = Instant::now();
    let config = LayoutConfig::default().with_progress(true);
    let layouts = layout_families(&families, &config)?;
    info!(
        "Laid out {} families in {:?}",
        families.len(),
        start.elapsed()
    );

    for layout in layouts.iter().flatten() {
        println!("{}", layout.to_json()?);
    }

    Ok(())
}
