use crate::fixtures::*;
use cutlistkit_core::{BoundingBox, LengthUnit, WordList};
use cutlistkit_scene::*;
use cutlistkit_settings::EdgeMaterialRule;
use nalgebra::{Matrix4, Point3, Vector3};
use std::f64::consts::FRAC_PI_2;

fn single_board(units: LengthUnit, bounds: BoundingBox, transform: Matrix4<f64>) -> Scene {
    let mut scene = Scene::new(units);
    scene.definitions = vec![Definition::new(1, "Board", bounds)];
    scene.entities = vec![Entity::Instance(
        Instance::new(1, DefinitionId(1)).with_transform(transform),
    )];
    scene
}

#[test]
fn test_rotation_does_not_change_dimensions() {
    let rotation = Matrix4::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2)
        * Matrix4::new_translation(&Vector3::new(100.0, 50.0, 0.0));
    let scene = single_board(
        LengthUnit::Millimeter,
        BoundingBox::from_size(600.0, 400.0, 18.0),
        rotation,
    );
    let report = discover(&scene, &config(), &Selection::All);
    let board = report.solid.get(0).unwrap();
    assert!((board.length - 600.0).abs() < 1e-9);
    assert!((board.width - 400.0).abs() < 1e-9);
    assert!((board.thickness - 18.0).abs() < 1e-9);
}

#[test]
fn test_parent_scale_accumulates() {
    let mut scene = single_board(
        LengthUnit::Centimeter,
        BoundingBox::from_size(30.0, 10.0, 2.0),
        Matrix4::identity(),
    );
    let leaf = scene.entities.remove(0);
    let stretched = Group::new(50)
        .named("Stretched")
        .with_transform(Matrix4::new_nonuniform_scaling(&Vector3::new(2.0, 1.0, 1.0)))
        .with_entities(vec![leaf]);
    scene.entities = vec![Entity::Group(stretched)];

    let report = discover(&scene, &config(), &Selection::All);
    let board = report.solid.get(0).unwrap();
    assert_eq!(board.length, 600.0);
    assert_eq!(board.width, 100.0);
    assert_eq!(board.thickness, 20.0);
    assert_eq!(board.sub_assembly_name, "Stretched");
}

#[test]
fn test_scale_can_change_thickness_axis() {
    // flattened along X until X is the thinnest extent
    let scene = single_board(
        LengthUnit::Millimeter,
        BoundingBox::from_size(100.0, 300.0, 200.0),
        Matrix4::new_nonuniform_scaling(&Vector3::new(0.1, 1.0, 1.0)),
    );
    let report = discover(&scene, &config(), &Selection::All);
    let board = report.solid.get(0).unwrap();
    assert!((board.thickness - 10.0).abs() < 1e-9);
    assert_eq!((board.length, board.width), (300.0, 200.0));
}

#[test]
fn test_quarter_turn_for_y_thickness_moves_banding() {
    let mut scene = Scene::new(LengthUnit::Millimeter);
    let band = Face::new(
        BoundingBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(400.0, 18.0, 0.0)),
        Some(Material::new("PVC Oak")),
        7200.0,
    );
    scene.definitions = vec![Definition::new(1, "Side", BoundingBox::from_size(400.0, 18.0, 600.0))
        .with_entities(vec![Entity::Face(band)])];
    scene.entities = vec![Entity::Instance(Instance::new(1, DefinitionId(1)).with_material(Material::new("Oak")))];

    let mut config = config();
    config.edge_materials = vec![EdgeMaterialRule::new(WordList::new(["pvc"]), 2.0, 3)];
    let report = discover(&scene, &config, &Selection::All);
    let side = report.solid.get(0).unwrap();

    assert_eq!(side.thickness, 18.0);
    assert_eq!((side.length, side.width), (400.0, 600.0));
    assert_eq!(side.edges.up.output_index, 3);
    assert!(!side.edges.left.is_bound());
    assert_eq!(side.cutting_length, 400.0);
    assert_eq!(side.cutting_width, 598.0);
}

#[test]
fn test_imperial_scene_is_measured_in_mm() {
    let scene = single_board(
        LengthUnit::Inch,
        BoundingBox::from_size(24.0, 12.0, 0.75),
        Matrix4::identity(),
    );
    let report = discover(&scene, &config(), &Selection::All);
    let board = report.solid.get(0).unwrap();
    assert!((board.length - 609.6).abs() < 1e-9);
    assert!((board.thickness - 19.05).abs() < 1e-9);
}
