//! Report views over a sequence of parts

use crate::part::Part;
use cutlistkit_core::LengthFormat;
use serde::Serialize;

/// Several identical consecutive parts shown as one line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompactRow {
    pub name: String,
    pub sub_assembly_name: String,
    /// Cutting length in the display unit
    pub length: String,
    /// Cutting width in the display unit
    pub width: String,
    pub thickness: String,
    pub material: String,
    pub quantity: usize,
    /// Edge output indices: up, down, left, right
    pub edges: [u32; 4],
    pub oriented: bool,
}

/// Summed amount for one material
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialTotal {
    pub material: String,
    pub amount: f64,
    pub label: &'static str,
}

pub(crate) fn compact_rows<'a, I>(parts: I, fmt: &LengthFormat) -> Vec<CompactRow>
where
    I: IntoIterator<Item = &'a Part>,
{
    let mut rows: Vec<CompactRow> = Vec::new();
    let mut previous: Option<&Part> = None;

    for part in parts {
        let row = CompactRow {
            name: part.name.clone(),
            sub_assembly_name: part.sub_assembly_name.clone(),
            length: part.cutting_length_string(fmt),
            width: part.cutting_width_string(fmt),
            thickness: part.thickness_string(fmt),
            material: part.material.clone(),
            quantity: 1,
            edges: part.edges.output_indices(),
            oriented: part.oriented,
        };

        let same_as_last = match (previous, rows.last()) {
            (Some(prev), Some(last)) => {
                prev.edges == part.edges
                    && last.name == row.name
                    && last.length == row.length
                    && last.width == row.width
                    && last.thickness == row.thickness
                    && last.material == row.material
            }
            _ => false,
        };

        match rows.last_mut() {
            Some(last) if same_as_last => last.quantity += 1,
            _ => rows.push(row),
        }
        previous = Some(part);
    }

    rows
}

pub(crate) fn material_totals<'a, I>(parts: I) -> Vec<MaterialTotal>
where
    I: IntoIterator<Item = &'a Part>,
{
    let mut totals: Vec<MaterialTotal> = Vec::new();
    for part in parts {
        match totals.iter_mut().find(|t| t.material == part.material) {
            Some(total) => total.amount += part.amount(),
            None => totals.push(MaterialTotal {
                material: part.material.clone(),
                amount: part.amount(),
                label: part.amount_label(),
            }),
        }
    }
    totals
}
