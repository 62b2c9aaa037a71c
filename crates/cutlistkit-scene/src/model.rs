//! Scene model
//!
//! A read-only description of a modelling host's scene graph. It is what
//! the walker consumes and is usually deserialized from a JSON export.
//!
//! Transforms are 4x4 affine matrices serialized column-major as 16
//! numbers. Bounding boxes and face bounds are in the owning node's local
//! coordinates, expressed in [`Scene::units`].

use crate::error::{SceneError, SceneResult};
use cutlistkit_core::{BoundingBox, LengthUnit};
use cutlistkit_parts::NONAME;
use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

fn identity() -> Matrix4<f64> {
    Matrix4::identity()
}

fn visible_by_default() -> bool {
    true
}

fn opaque_by_default() -> f64 {
    1.0
}

/// Identifier of a group or instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a component definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionId(pub u64);

impl fmt::Display for DefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "def#{}", self.0)
    }
}

/// A material applied to a node or face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Carries a directional texture (wood grain)
    #[serde(default)]
    pub textured: bool,
    #[serde(default = "opaque_by_default")]
    pub opacity: f64,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            textured: false,
            opacity: 1.0,
        }
    }

    pub fn textured(mut self) -> Self {
        self.textured = true;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn is_opaque(&self) -> bool {
        self.opacity >= 1.0
    }
}

/// A face of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub bounds: BoundingBox,
    #[serde(default)]
    pub material: Option<Material>,
    pub area: f64,
}

impl Face {
    pub fn new(bounds: BoundingBox, material: Option<Material>, area: f64) -> Self {
        Self {
            bounds,
            material,
            area,
        }
    }
}

/// A component instance sharing the entities of a [`Definition`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: EntityId,
    pub definition: DefinitionId,
    #[serde(default)]
    pub name: String,
    #[serde(default = "identity")]
    pub transform: Matrix4<f64>,
    #[serde(default)]
    pub material: Option<Material>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
}

impl Instance {
    pub fn new(id: u64, definition: DefinitionId) -> Self {
        Self {
            id: EntityId(id),
            definition,
            name: String::new(),
            transform: Matrix4::identity(),
            material: None,
            hidden: false,
            visible: true,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    pub fn with_transform(mut self, transform: Matrix4<f64>) -> Self {
        self.transform = transform;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// A group owning its entities directly
///
/// Hosts keep a hidden definition behind every group for its bounds. The
/// `definition` link is optional because hosts do not always report it;
/// [`Scene::group_definition`] falls back to searching the definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default = "identity")]
    pub transform: Matrix4<f64>,
    #[serde(default)]
    pub material: Option<Material>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub definition: Option<DefinitionId>,
}

impl Group {
    pub fn new(id: u64) -> Self {
        Self {
            id: EntityId(id),
            name: String::new(),
            transform: Matrix4::identity(),
            material: None,
            hidden: false,
            visible: true,
            entities: Vec::new(),
            definition: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    pub fn with_transform(mut self, transform: Matrix4<f64>) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_definition(mut self, definition: DefinitionId) -> Self {
        self.definition = Some(definition);
        self
    }

    pub fn with_entities(mut self, entities: Vec<Entity>) -> Self {
        self.entities = entities;
        self
    }
}

/// Shared geometry of component instances (and the hidden twin of a group)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub id: DefinitionId,
    #[serde(default)]
    pub name: String,
    pub bounds: BoundingBox,
    #[serde(default)]
    pub entities: Vec<Entity>,
    /// Groups and instances placed from this definition
    #[serde(default)]
    pub instances: Vec<EntityId>,
}

impl Definition {
    pub fn new(id: u64, name: impl Into<String>, bounds: BoundingBox) -> Self {
        Self {
            id: DefinitionId(id),
            name: name.into(),
            bounds,
            entities: Vec::new(),
            instances: Vec::new(),
        }
    }

    pub fn with_entities(mut self, entities: Vec<Entity>) -> Self {
        self.entities = entities;
        self
    }

    pub fn with_instances(mut self, instances: impl IntoIterator<Item = u64>) -> Self {
        self.instances = instances.into_iter().map(EntityId).collect();
        self
    }
}

/// Anything that can sit in an entity list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entity {
    Instance(Instance),
    Group(Group),
    Face(Face),
    /// Edges, guides, text and other entities the cut list ignores
    #[serde(other)]
    Other,
}

/// Which top-level entities a run covers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    /// Every visible top-level entity
    #[default]
    All,
    /// Only these top-level entities
    Entities(HashSet<EntityId>),
}

impl Selection {
    pub fn of(ids: impl IntoIterator<Item = u64>) -> Self {
        Self::Entities(ids.into_iter().map(EntityId).collect())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        match self {
            Self::All => true,
            Self::Entities(ids) => ids.contains(&id),
        }
    }

    /// An explicit selection with nothing in it
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Entities(ids) if ids.is_empty())
    }
}

/// A complete scene
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub units: LengthUnit,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

impl Scene {
    pub fn new(units: LengthUnit) -> Self {
        Self {
            units,
            ..Self::default()
        }
    }

    /// Parse a JSON scene description
    pub fn from_json(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON scene description from disk
    pub fn load(path: &Path) -> SceneResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn definition(&self, id: DefinitionId) -> Option<&Definition> {
        self.definitions.iter().find(|d| d.id == id)
    }

    /// Definition behind a group.
    ///
    /// Uses the group's own link when it resolves, otherwise the first
    /// definition listing the group among its instances.
    pub fn group_definition(&self, group: &Group) -> Option<&Definition> {
        group
            .definition
            .and_then(|id| self.definition(id))
            .or_else(|| {
                self.definitions
                    .iter()
                    .find(|d| d.instances.contains(&group.id))
            })
    }

    /// View an entity as a traversable node.
    ///
    /// Faces and other entities yield `None`.
    pub fn node<'a>(&'a self, entity: &'a Entity) -> SceneResult<Option<Node<'a>>> {
        match entity {
            Entity::Instance(instance) => {
                let definition = self.definition(instance.definition).ok_or(
                    SceneError::UnknownDefinition {
                        instance: instance.id,
                        definition: instance.definition,
                    },
                )?;
                Ok(Some(Node::Instance {
                    instance,
                    definition,
                }))
            }
            Entity::Group(group) => Ok(Some(Node::Group {
                group,
                definition: self.group_definition(group),
            })),
            Entity::Face(_) | Entity::Other => Ok(None),
        }
    }
}

/// A group or instance resolved against its scene
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Instance {
        instance: &'a Instance,
        definition: &'a Definition,
    },
    Group {
        group: &'a Group,
        definition: Option<&'a Definition>,
    },
}

impl<'a> Node<'a> {
    pub fn id(&self) -> EntityId {
        match *self {
            Self::Instance { instance, .. } => instance.id,
            Self::Group { group, .. } => group.id,
        }
    }

    /// Not hidden and on a visible layer
    pub fn is_visible(&self) -> bool {
        match *self {
            Self::Instance { instance, .. } => instance.visible && !instance.hidden,
            Self::Group { group, .. } => group.visible && !group.hidden,
        }
    }

    pub fn transform(&self) -> &'a Matrix4<f64> {
        match *self {
            Self::Instance { instance, .. } => &instance.transform,
            Self::Group { group, .. } => &group.transform,
        }
    }

    /// Child entities
    pub fn entities(&self) -> &'a [Entity] {
        match *self {
            Self::Instance { definition, .. } => &definition.entities,
            Self::Group { group, .. } => &group.entities,
        }
    }

    /// Faces among the direct children
    pub fn faces(&self) -> impl Iterator<Item = &'a Face> {
        self.entities().iter().filter_map(|entity| match entity {
            Entity::Face(face) => Some(face),
            _ => None,
        })
    }

    /// Local bounds, `None` for a group whose definition is unknown
    pub fn bounds(&self) -> Option<&'a BoundingBox> {
        match *self {
            Self::Instance { definition, .. } => Some(&definition.bounds),
            Self::Group { definition, .. } => definition.map(|d| &d.bounds),
        }
    }

    /// Name used for the part and as the sub-assembly of its children
    ///
    /// Instances prefer their definition's name, groups their own; the
    /// other one is the fallback and [`NONAME`] the last resort.
    pub fn effective_name(&self) -> &'a str {
        let (primary, fallback) = match *self {
            Self::Instance {
                instance,
                definition,
            } => (definition.name.trim(), instance.name.trim()),
            Self::Group { group, definition } => (
                group.name.trim(),
                definition.map(|d| d.name.trim()).unwrap_or_default(),
            ),
        };
        [primary, fallback]
            .into_iter()
            .find(|name| !name.is_empty())
            .unwrap_or(NONAME)
    }

    /// Own material, else the first opaque face material among the direct
    /// children.
    pub fn effective_material(&self) -> Option<&'a Material> {
        let own = match *self {
            Self::Instance { instance, .. } => instance.material.as_ref(),
            Self::Group { group, .. } => group.material.as_ref(),
        };
        own.or_else(|| {
            self.faces()
                .filter_map(|face| face.material.as_ref())
                .find(|material| material.is_opaque())
        })
    }
}
