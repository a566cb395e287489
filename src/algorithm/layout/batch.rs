//! Parallel layout of many families
//!
//! Families share no state, so each is laid out on its own rayon task.

use super::family::layout_family;
use super::types::PedigreeLayout;
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::models::Family;
use crate::utils::logging::{create_main_progress_bar, finish_progress_bar};
use rayon::prelude::*;

/// Lay out `families` in parallel, keeping input order
///
/// # Arguments
/// * `families` - Families to lay out
/// * `config` - Layout configuration shared by every family
///
/// # Returns
/// The layouts of each family, in the order of `families`
pub fn layout_families(
    families: &[Family],
    config: &LayoutConfig,
) -> Result<Vec<Vec<PedigreeLayout>>> {
    config.solver.validate()?;

    let pb = config
        .show_progress
        .then(|| create_main_progress_bar(families.len() as u64, Some("Laying out families")));

    let layouts = families
        .par_iter()
        .map(|family| {
            let layout = layout_family(family, config);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            layout
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(pb) = &pb {
        finish_progress_bar(pb, Some("Layout complete"));
    }

    let fallbacks = layouts
        .iter()
        .flatten()
        .filter(|layout| layout.is_fallback())
        .count();
    log::info!(
        "Laid out {} families ({} fallback layouts)",
        families.len(),
        fallbacks
    );

    Ok(layouts)
}
