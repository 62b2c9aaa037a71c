use crate::fixtures::*;
use cutlistkit_core::{BoundingBox, LengthUnit};
use cutlistkit_parts::StockKind;
use cutlistkit_scene::*;
use nalgebra::Matrix4;

#[test]
fn test_table_splits_into_solid_and_sheet_parts() {
    let report = discover(&table_scene(), &config(), &Selection::All);

    assert_eq!(report.solid.len(), 1);
    let leg = report.solid.get(0).unwrap();
    assert_eq!(leg.name, "Leg");
    assert_eq!(leg.thickness, 5.0);
    assert_eq!(leg.material, "Oak");
    assert_eq!(leg.sub_assembly_name, "Table");
    assert_eq!(leg.kind, StockKind::Solid);

    assert_eq!(report.sheet.len(), 1);
    let top = report.sheet.get(0).unwrap();
    assert_eq!(top.name, "Top");
    assert_eq!(top.thickness, 18.0);
    assert_eq!((top.length, top.width), (600.0, 400.0));

    assert!(report.hardware.is_empty());
    assert!(report.skipped.is_empty());
    assert!(report.solid.iter().chain(report.sheet.iter()).all(|p| p.name != "Table"));
}

#[test]
fn test_hardware_is_counted_and_never_measured() {
    let mut scene = table_scene();
    scene.definitions.push(Definition::new(3, "Hinge", BoundingBox::from_size(40.0, 30.0, 2.0)));
    // a zero transform cannot be measured, so a measured hinge would land in `skipped`
    let hinge = Instance::new(3, DefinitionId(3))
        .with_material(Material::new("Brass Hinge Hardware"))
        .with_transform(Matrix4::zeros());
    scene.entities.push(Entity::Instance(hinge.clone()));
    scene.entities.push(Entity::Instance(Instance { id: EntityId(4), ..hinge }));

    let report = discover(&scene, &config(), &Selection::All);
    let hardware: Vec<_> = report.hardware.iter().collect();
    assert_eq!(hardware, vec![("Hinge", 2)]);
    assert_eq!(report.part_count(), 2);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_hidden_and_unselected_nodes_are_ignored() {
    let mut scene = table_scene();
    scene.definitions.push(Definition::new(3, "Shelf", BoundingBox::from_size(500.0, 300.0, 18.0)));
    scene.entities.push(Entity::Instance(Instance::new(5, DefinitionId(3))));
    scene.entities.push(Entity::Instance(Instance::new(6, DefinitionId(3)).hidden()));

    let all = discover(&scene, &config(), &Selection::All);
    assert_eq!(all.part_count(), 3);

    let only_shelf = discover(&scene, &config(), &Selection::of([5]));
    assert_eq!(only_shelf.part_count(), 1);
    assert_eq!(only_shelf.solid.get(0).unwrap().name, "Shelf");
    assert_eq!(only_shelf.solid.get(0).unwrap().sub_assembly_name, "Table");
}

#[test]
fn test_empty_selection_is_rejected() {
    let err = Reporter::new(config())
        .run(&table_scene(), &Selection::of(Vec::<u64>::new()))
        .unwrap_err();
    assert!(matches!(err, SceneError::NothingSelected));
}

#[test]
fn test_selection_without_parts_reports_no_parts() {
    let discovery = Reporter::new(config())
        .run(&table_scene(), &Selection::of([999]))
        .unwrap();
    assert!(matches!(discovery, Discovery::NoParts { ref skipped } if skipped.is_empty()));
    assert!(discovery.report().is_none());
}

#[test]
fn test_group_without_definition_is_skipped_but_counts_for_parent() {
    let mut scene = Scene::new(LengthUnit::Millimeter);
    let orphan = Group::new(2).named("Orphan");
    scene.entities = vec![Entity::Group(Group::new(1).named("Frame").with_entities(vec![Entity::Group(orphan)]))];

    let discovery = Reporter::new(config()).run(&scene, &Selection::All).unwrap();
    match discovery {
        Discovery::NoParts { skipped } => {
            assert_eq!(skipped.len(), 1);
            assert_eq!(skipped[0].name, "Orphan");
            assert_eq!(skipped[0].id, EntityId(2));
        }
        Discovery::Parts(report) => panic!("unexpected parts: {:?}", report.solid),
    }
}

#[test]
fn test_group_bounds_resolve_through_definition_scan() {
    let mut scene = Scene::new(LengthUnit::Millimeter);
    scene.definitions = vec![
        Definition::new(1, "Group#3", BoundingBox::from_size(300.0, 100.0, 20.0)).with_instances([7]),
    ];
    scene.entities = vec![Entity::Group(Group::new(7))];

    let report = discover(&scene, &config(), &Selection::All);
    let part = report.solid.get(0).unwrap();
    assert_eq!(part.name, "Group#3");
    assert_eq!(part.thickness, 20.0);
}

#[test]
fn test_unnamed_part_gets_dimension_name() {
    let mut scene = Scene::new(LengthUnit::Millimeter);
    scene.definitions = vec![Definition::new(1, "", BoundingBox::from_size(300.0, 100.0, 20.0))];
    scene.entities = vec![Entity::Instance(Instance::new(1, DefinitionId(1)))];

    let report = discover(&scene, &config(), &Selection::All);
    assert_eq!(report.solid.get(0).unwrap().name, "noname_300mm100mm20mm");
}

#[test]
fn test_sorted_listing() {
    let mut scene = Scene::new(LengthUnit::Millimeter);
    scene.definitions = vec![
        Definition::new(1, "Stile", BoundingBox::from_size(700.0, 50.0, 20.0)),
        Definition::new(2, "Rail", BoundingBox::from_size(400.0, 50.0, 20.0)),
    ];
    scene.entities = vec![
        Entity::Instance(Instance::new(1, DefinitionId(1))),
        Entity::Instance(Instance::new(2, DefinitionId(2))),
    ];

    let mut config = config();
    let unsorted = discover(&scene, &config, &Selection::All);
    assert_eq!(unsorted.solid.get(0).unwrap().name, "Stile");

    config.list_all_sorted = true;
    let sorted = discover(&scene, &config, &Selection::All);
    assert_eq!(sorted.solid.get(0).unwrap().name, "Rail");
}

#[test]
fn test_discovery_is_deterministic() {
    let scene = table_scene();
    let config = config();
    let first = serde_json::to_string(&discover(&scene, &config, &Selection::All)).unwrap();
    let second = serde_json::to_string(&discover(&scene, &config, &Selection::All)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dangling_instance_definition_is_an_error() {
    let mut scene = Scene::new(LengthUnit::Millimeter);
    scene.entities = vec![Entity::Instance(Instance::new(1, DefinitionId(9)))];
    let err = Reporter::new(config()).run(&scene, &Selection::All).unwrap_err();
    assert!(matches!(err, SceneError::UnknownDefinition { .. }));
}

#[test]
fn test_degenerate_sibling_is_skipped_and_walk_continues() {
    let mut scene = Scene::new(LengthUnit::Millimeter);
    scene.title = "Bookcase".to_string();
    scene.definitions = vec![Definition::new(1, "Shelf", BoundingBox::from_size(500.0, 300.0, 18.0))];
    let flat = Matrix4::new_nonuniform_scaling(&nalgebra::Vector3::new(1.0, 1.0, 0.0));
    scene.entities = vec![
        Entity::Instance(Instance::new(1, DefinitionId(1))),
        Entity::Instance(Instance::new(2, DefinitionId(1)).named("Flattened").with_transform(flat)),
    ];

    let report = discover(&scene, &config(), &Selection::All);
    assert_eq!(report.solid.len(), 1);
    let shelf = report.solid.get(0).unwrap();
    assert_eq!(shelf.name, "Shelf");
    assert_eq!(shelf.sub_assembly_name, "Bookcase");

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].id, EntityId(2));
    assert!(report.skipped[0].reason.contains("Degenerate transform"));
}
