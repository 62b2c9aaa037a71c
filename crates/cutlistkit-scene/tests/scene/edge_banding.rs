use crate::fixtures::*;
use cutlistkit_core::WordList;
use cutlistkit_parts::StockKind;
use cutlistkit_scene::*;
use cutlistkit_settings::EdgeMaterialRule;

const DOOR_SCENE: &str = r#"{
    "title": "Wall cabinet",
    "units": "mm",
    "definitions": [
        {
            "id": 1,
            "name": "Door",
            "bounds": { "min": [0, 0, 0], "max": [600, 400, 18] },
            "entities": [
                { "type": "face", "area": 240000,
                  "bounds": { "min": [0, 0, 18], "max": [600, 400, 18] },
                  "material": { "name": "Birch Sheet", "textured": true } },
                { "type": "face", "area": 7200,
                  "bounds": { "min": [0, 0, 0], "max": [0, 400, 18] },
                  "material": { "name": "PVC White" } },
                { "type": "face", "area": 7200,
                  "bounds": { "min": [600, 0, 0], "max": [600, 400, 18] },
                  "material": { "name": "PVC White" } },
                { "type": "face", "area": 10800,
                  "bounds": { "min": [0, 400, 0], "max": [600, 400, 18] } },
                { "type": "edge" }
            ]
        }
    ],
    "entities": [
        { "type": "instance", "id": 10, "definition": 1, "name": "Left door" }
    ]
}"#;

fn banding_config() -> cutlistkit_settings::CutlistConfig {
    let mut config = config();
    config.edge_materials = vec![
        EdgeMaterialRule::new(WordList::new(["pvc", "-thin"]), 2.0, 1),
        EdgeMaterialRule::new(WordList::new(["pvc"]), 0.4, 2),
    ];
    config
}

#[test]
fn test_door_edges_are_bound_from_json_scene() {
    let scene = Scene::from_json(DOOR_SCENE).unwrap();
    let report = discover(&scene, &banding_config(), &Selection::All);

    assert_eq!(report.title, "Wall cabinet");
    assert_eq!(report.sheet.len(), 1);
    let door = report.sheet.get(0).unwrap();
    assert_eq!(door.name, "Door");
    assert_eq!(door.material, "Birch Sheet");
    assert_eq!(door.kind, StockKind::Sheet);
    assert!(door.oriented);

    assert_eq!(door.edges.left.material.as_deref(), Some("PVC White"));
    assert_eq!(door.edges.right.output_index, 1);
    assert!(!door.edges.up.is_bound());
    assert!(!door.edges.down.is_bound());

    assert_eq!(door.cutting_length, 596.0);
    assert_eq!(door.cutting_width, 400.0);
}

#[test]
fn test_compact_rows_report_edge_slots() {
    let scene = Scene::from_json(DOOR_SCENE).unwrap();
    let report = discover(&scene, &banding_config(), &Selection::All);
    let rows = report.sheet.compact_rows(&report.format);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].edges, [0, 0, 1, 1]);
    assert_eq!(rows[0].length, "596");
    assert_eq!(
        report.sheet.get(0).unwrap().summary(&report.format),
        "Door (596, 400, 18) Birch Sheet"
    );
}

const REVERSED_BOUNDS_SCENE: &str = r#"{
    "units": "mm",
    "definitions": [
        {
            "id": 1,
            "name": "Door",
            "bounds": { "min": [600, 0, 0], "max": [0, 400, 18] },
            "entities": [
                { "type": "face", "area": 7200,
                  "bounds": { "min": [0, 400, 18], "max": [0, 0, 0] },
                  "material": { "name": "PVC White" } }
            ]
        }
    ],
    "entities": [
        { "type": "instance", "id": 1, "definition": 1 }
    ]
}"#;

#[test]
fn test_reversed_json_bounds_measure_like_ordered_ones() {
    let scene = Scene::from_json(REVERSED_BOUNDS_SCENE).unwrap();
    let report = discover(&scene, &banding_config(), &Selection::All);
    let door = report.solid.get(0).unwrap();

    assert_eq!((door.length, door.width, door.thickness), (600.0, 400.0, 18.0));
    assert!(door.thickness <= door.width && door.thickness <= door.length);
    assert_eq!(door.edges.left.material.as_deref(), Some("PVC White"));
    assert_eq!(door.cutting_length, 598.0);
}
