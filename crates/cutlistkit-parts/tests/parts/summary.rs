use cutlistkit_core::{LengthFormat, LengthUnit};
use cutlistkit_parts::*;

fn shelf(name: &str, band: Option<&str>) -> Part {
    let mut edges = EdgeSet::default();
    if let Some(material) = band {
        edges.up = Edge {
            material: Some(material.to_string()),
            thickness: 2.0,
            output_index: 1,
        };
    }
    Part::builder(StockKind::Sheet)
        .name(name)
        .sub_assembly("Cabinet")
        .material("Birch Plywood Sheet")
        .dimensions(800.0, 300.0, 18.0)
        .edges(edges)
        .build(&LengthFormat::new(LengthUnit::Millimeter))
}

#[test]
fn test_compact_rows_group_consecutive_identical_parts() {
    let registry: PartRegistry = [
        shelf("Shelf", Some("PVC White")),
        shelf("Shelf", Some("PVC White")),
        shelf("Shelf", None),
        shelf("Shelf", Some("PVC White")),
    ]
    .into_iter()
    .collect();

    let rows = registry.compact_rows(&LengthFormat::new(LengthUnit::Millimeter));
    let quantities: Vec<usize> = rows.iter().map(|r| r.quantity).collect();
    assert_eq!(quantities, vec![2, 1, 1]);
    assert_eq!(rows[0].edges, [1, 0, 0, 0]);
    assert_eq!(rows[0].width, "298");
    assert_eq!(rows[0].length, "800");
    assert_eq!(rows[0].sub_assembly_name, "Cabinet");
}

#[test]
fn test_material_totals_accumulate_in_first_seen_order() {
    let fmt = LengthFormat::new(LengthUnit::Millimeter);
    let registry: PartRegistry = [
        shelf("Shelf", None),
        Part::builder(StockKind::Sheet)
            .name("Back")
            .material("Hardboard Sheet")
            .dimensions(1000.0, 1000.0, 3.0)
            .build(&fmt),
        shelf("Shelf", None),
    ]
    .into_iter()
    .collect();

    let totals = registry.material_totals();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].material, "Birch Plywood Sheet");
    assert!((totals[0].amount - 0.48).abs() < 1e-9);
    assert_eq!(totals[0].label, "Square m");
    assert!((totals[1].amount - 1.0).abs() < 1e-9);
}

#[test]
fn test_registry_serializes_as_part_sequence() {
    let registry: PartRegistry = [shelf("Shelf", None)].into_iter().collect();
    let json = serde_json::to_value(&registry).unwrap();
    assert_eq!(json[0]["name"], "Shelf");
    assert_eq!(json[0]["kind"], "sheet");
    assert_eq!(json[0]["thickness"], 18.0);
}
