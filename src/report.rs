//! Plain text rendering of a cut list report

use cutlistkit_core::get_unit_label;
use cutlistkit_parts::PartRegistry;
use cutlistkit_scene::CutlistReport;
use std::fmt::Write;

/// Render the report as aligned text tables
pub fn render_text(report: &CutlistReport) -> String {
    let mut out = String::new();
    if !report.title.is_empty() {
        let _ = writeln!(out, "{}", report.title);
        let _ = writeln!(out);
    }

    let unit = get_unit_label(report.format.unit);
    render_parts(&mut out, "Solid parts", &report.solid, report, unit);
    render_parts(&mut out, "Sheet parts", &report.sheet, report, unit);

    if !report.hardware.is_empty() {
        let _ = writeln!(out, "Hardware");
        for (name, count) in report.hardware.iter() {
            let _ = writeln!(out, "  {:>4} x {}", count, name);
        }
        let _ = writeln!(out);
    }

    if !report.skipped.is_empty() {
        let _ = writeln!(out, "Skipped");
        for node in &report.skipped {
            let _ = writeln!(out, "  {} {}: {}", node.id, node.name, node.reason);
        }
    }

    out
}

fn render_parts(
    out: &mut String,
    heading: &str,
    parts: &PartRegistry,
    report: &CutlistReport,
    unit: &str,
) {
    if parts.is_empty() {
        return;
    }

    let _ = writeln!(out, "{} ({})", heading, unit);
    let _ = writeln!(
        out,
        "  {:>4}  {:>9}  {:>9}  {:>7}  {:<11}  {:<24}  {}",
        "Qty", "Length", "Width", "Thick", "Edges UDLR", "Name", "Material"
    );
    for row in parts.compact_rows(&report.format) {
        let edges = row
            .edges
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let name = if row.oriented {
            format!("{} (grain)", row.name)
        } else {
            row.name
        };
        let _ = writeln!(
            out,
            "  {:>4}  {:>9}  {:>9}  {:>7}  {:<11}  {:<24}  {}",
            row.quantity, row.length, row.width, row.thickness, edges, name, row.material
        );
    }

    for total in parts.material_totals() {
        let _ = writeln!(
            out,
            "  Total {}: {:.4} {}",
            total.material, total.amount, total.label
        );
    }
    let _ = writeln!(out);
}
