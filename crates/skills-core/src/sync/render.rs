//! Rendering of generated region content.

use super::scan::{ModuleEntry, ReferenceFile};

/// Bullet list for the `References` region: other documents first, then modules.
pub fn render_references(modules: &[ModuleEntry], others: &[ReferenceFile]) -> String {
    let other_lines = others
        .iter()
        .map(|f| format!("- [{0}](references/{0}) - {1}", f.file, f.title));

    let module_lines = modules.iter().map(|m| {
        let description = m
            .description
            .clone()
            .unwrap_or_else(|| format!("{} module details", m.name));
        format!("- [{0}](references/{0}) - {1}", m.file, description)
    });

    other_lines.chain(module_lines).collect::<Vec<_>>().join("\n")
}

/// YAML block for the hub document's `Config` region.
pub fn render_config(commit: &str, date: &str) -> String {
    format!("```yaml\nlast_tracked_commit: \"{commit}\"\nlast_updated: \"{date}\"\n```")
}

/// Rows of the Core Modules table, one per module.
pub fn render_table_rows(modules: &[ModuleEntry], link_label: &str) -> Vec<String> {
    modules
        .iter()
        .map(|m| {
            format!(
                "| {} | {} | [{}](references/{}) |",
                m.name,
                m.description.as_deref().unwrap_or(""),
                link_label,
                m.file
            )
        })
        .collect()
}
