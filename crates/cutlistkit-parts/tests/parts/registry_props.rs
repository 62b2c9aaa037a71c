use cutlistkit_core::{LengthFormat, LengthUnit};
use cutlistkit_parts::*;
use proptest::prelude::*;

const MATERIALS: [&str; 3] = ["Oak", "Pine", "Birch Plywood"];
const THICKNESSES: [f64; 3] = [12.0, 18.0, 20.0];

#[derive(Debug, Clone)]
enum Op {
    Add(usize, usize, usize),
    Remove(usize, usize, usize),
    RemoveFirst,
    InsertFirst(usize, usize, usize),
}

fn make_part(name: usize, material: usize, thickness: usize) -> Part {
    Part::builder(StockKind::Sheet)
        .name(format!("P{name}"))
        .material(MATERIALS[material])
        .dimensions(400.0, 300.0, THICKNESSES[thickness])
        .build(&LengthFormat::new(LengthUnit::Millimeter))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..4usize, 0..3usize, 0..3usize).prop_map(|(n, m, t)| Op::Add(n, m, t)),
        3 => (0..4usize, 0..3usize, 0..3usize).prop_map(|(n, m, t)| Op::Remove(n, m, t)),
        1 => Just(Op::RemoveFirst),
        1 => (0..4usize, 0..3usize, 0..3usize).prop_map(|(n, m, t)| Op::InsertFirst(n, m, t)),
    ]
}

fn sorted_names<'a>(parts: impl Iterator<Item = &'a Part>) -> Vec<String> {
    let mut names: Vec<String> = parts
        .map(|p| format!("{}|{}|{}", p.name, p.material, p.thickness))
        .collect();
    names.sort();
    names
}

proptest! {
    #[test]
    fn prop_index_matches_sequence(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut registry = PartRegistry::new();
        for op in ops {
            match op {
                Op::Add(n, m, t) => registry.add(make_part(n, m, t)),
                Op::Remove(n, m, t) => {
                    registry.remove(&make_part(n, m, t));
                }
                Op::RemoveFirst => {
                    registry.remove_first();
                }
                Op::InsertFirst(n, m, t) => registry.insert_first(make_part(n, m, t)),
            }

            let keys: Vec<PartKey> = registry.keys().cloned().collect();
            let from_index = sorted_names(keys.iter().flat_map(|k| registry.indexed(k)));
            prop_assert_eq!(from_index, sorted_names(registry.iter()));
            for key in &keys {
                prop_assert!(registry.indexed(key).count() > 0);
            }
        }
    }

    #[test]
    fn prop_split_by_material_covers_all_parts(
        parts in prop::collection::vec((0..4usize, 0..3usize, 0..3usize), 0..30)
    ) {
        let registry: PartRegistry = parts
            .iter()
            .map(|&(n, m, t)| make_part(n, m, t))
            .collect();
        let split = registry.split_by_material();
        let combined = sorted_names(split.iter().flat_map(|r| r.iter()));
        prop_assert_eq!(combined, sorted_names(registry.iter()));
        for part in &split {
            prop_assert!(part.all_same_material());
        }
    }

    #[test]
    fn prop_split_by_thickness_covers_all_parts(
        parts in prop::collection::vec((0..4usize, 0..3usize, 0..3usize), 0..30)
    ) {
        let registry: PartRegistry = parts
            .iter()
            .map(|&(n, m, t)| make_part(n, m, t))
            .collect();
        let split = registry.split_by_thickness();
        let combined = sorted_names(split.iter().flat_map(|r| r.iter()));
        prop_assert_eq!(combined, sorted_names(registry.iter()));
        for part in &split {
            prop_assert!(part.all_same_thickness());
        }
    }

    #[test]
    fn prop_split_by_material_and_thickness_covers_all_parts(
        parts in prop::collection::vec((0..4usize, 0..3usize, 0..3usize), 0..30)
    ) {
        let registry: PartRegistry = parts
            .iter()
            .map(|&(n, m, t)| make_part(n, m, t))
            .collect();
        let split = registry.split_by_material_and_thickness();
        let combined = sorted_names(split.iter().flat_map(|r| r.iter()));
        prop_assert_eq!(combined, sorted_names(registry.iter()));
        for part in &split {
            prop_assert!(part.all_same_material() && part.all_same_thickness());
            prop_assert!(part.keys().count() <= 1);
        }
    }
}
