//! Layout of a single family
//!
//! A family is split into connected components; each component is solved on
//! its own and the resulting layouts are placed side by side.

use super::types::PedigreeLayout;
use crate::algorithm::pedigree::FamilyConnections;
use crate::algorithm::sandwich::SandwichSolver;
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::models::Family;
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};
use std::time::Instant;

/// Horizontal gap between the layouts of two components
const COMPONENT_GAP: f64 = 4.0;

/// Lay out every connected component of `family`
///
/// Malformed and unsolvable components fall back to a single row; errors
/// are only returned for unusable configuration.
///
/// # Arguments
/// * `family` - Family to lay out; it is not modified
/// * `config` - Solver settings and whether placeholder parents are added
///
/// # Returns
/// One layout per connected component, placed left to right without
/// overlapping
pub fn layout_family(family: &Family, config: &LayoutConfig) -> Result<Vec<PedigreeLayout>> {
    config.solver.validate()?;
    log_operation_start("Laying out", &family.family_id);
    let start = Instant::now();

    let connections = match FamilyConnections::from_family(family, config.add_missing_members) {
        Ok(connections) => connections,
        Err(err) if err.is_malformed_family() => {
            log_warning(&format!("Missing family connections ({err})"), Some(family.family_id.as_str()));
            return Ok(vec![PedigreeLayout::fallback(family)]);
        }
        Err(err) => return Err(err),
    };

    let solver = SandwichSolver::new(config.solver.clone());

    let layouts = if connections.is_connected() {
        vec![build_layout(connections, &solver)?]
    } else {
        let components = connections.connected_components();
        log::debug!(
            "family {} has {} connected components",
            family.family_id,
            components.len()
        );

        let mut layouts = Vec::with_capacity(components.len());
        let mut offset = 0.0;
        for component in components {
            let subfamily = connections.family().subfamily(&component);
            let mut layout = match FamilyConnections::from_family(&subfamily, false) {
                Ok(sub_connections) => build_layout(sub_connections, &solver)?,
                Err(err) if err.is_malformed_family() => {
                    log_warning(
                        &format!("Missing component connections ({err})"),
                        Some(family.family_id.as_str()),
                    );
                    PedigreeLayout::fallback(&subfamily)
                }
                Err(err) => return Err(err),
            };

            if let Some((left, right)) = layout.extent() {
                layout.translate(offset - left);
                offset += right - left + COMPONENT_GAP;
            }
            layouts.push(layout);
        }
        layouts
    };

    log_operation_complete(
        "laid out",
        &family.family_id,
        layouts.len(),
        Some(start.elapsed()),
    );
    Ok(layouts)
}

/// Solve one connected pedigree, falling back to a single row
fn build_layout(
    mut connections: FamilyConnections,
    solver: &SandwichSolver,
) -> Result<PedigreeLayout> {
    let instance = connections.create_sandwich_instance()?;
    let report = solver.solve_with_report(&instance);

    let Some(intervals) = report.intervals else {
        log_warning("No intervals, using a single row", Some(connections.family().family_id.as_str()));
        return Ok(PedigreeLayout::fallback(connections.family()));
    };

    let relaxed = report
        .removed_edges
        .iter()
        .map(|&(u, v)| {
            (
                connections.group_key(u).to_string(),
                connections.group_key(v).to_string(),
            )
        })
        .collect();

    Ok(PedigreeLayout::from_intervals(&connections, &intervals).with_relaxed_edges(relaxed))
}
