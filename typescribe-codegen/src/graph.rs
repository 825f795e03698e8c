//! Dependency graph construction.
//!
//! This module groups entities into ordered emission layers. An entity's
//! layer index is one past the maximum layer of its direct relation targets,
//! so every target is fully placed before (or alongside) the entities that
//! import it. A relation chain that closes back on an in-progress entity is
//! a genuine cycle and aborts the build; no partial layering is produced.

use crate::error::CodegenError;
use typescribe_schema::{FieldKind, Schema};

/// One placed entity plus its direct dependencies.
///
/// Both fields index into `Schema::entities`.
#[derive(Debug, Clone)]
pub struct LayerEntry {
    /// Entity index.
    pub entity: usize,
    /// Direct relation targets, first-occurrence order, deduplicated.
    pub dependencies: Vec<usize>,
}

/// A batch of entities whose dependencies are all resolved in earlier or
/// co-equal layers.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    /// Placed entities, in placement order.
    pub entries: Vec<LayerEntry>,
}

/// Ordered emission layers, layer 0 first.
#[derive(Debug, Clone, Default)]
pub struct DependencyLayers {
    layers: Vec<Layer>,
}

impl DependencyLayers {
    /// Returns the layers in ascending order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if no layers were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns the layer index an entity was placed in.
    #[must_use]
    pub fn layer_of(&self, entity: usize) -> Option<usize> {
        self.layers
            .iter()
            .position(|layer| layer.entries.iter().any(|entry| entry.entity == entity))
    }
}

/// Per-entity placement state, confined to one `build_layers` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Unvisited,
    InProgress,
    Placed(usize),
}

/// One step of the explicit placement stack.
struct Frame {
    entity: usize,
    dependencies: Vec<usize>,
    cursor: usize,
}

/// Builds the ordered dependency layers for a schema.
///
/// # Arguments
/// * `schema` - The entity schema to layer
///
/// # Returns
/// Ordered layers, or an error if the relation graph cannot be layered.
///
/// # Errors
/// Returns `CodegenError::CyclicDependency` if a relation chain cycles back
/// on itself, or `CodegenError::UnknownTarget` for a dangling relation.
pub fn build_layers(schema: &Schema) -> Result<DependencyLayers, CodegenError> {
    let mut placement = vec![Placement::Unvisited; schema.len()];
    let mut result = DependencyLayers::default();

    for root in 0..schema.len() {
        if placement[root] != Placement::Unvisited {
            continue;
        }
        place_from(schema, root, &mut placement, &mut result.layers)?;
    }

    Ok(result)
}

/// Places `root` and everything it transitively depends on.
fn place_from(
    schema: &Schema,
    root: usize,
    placement: &mut [Placement],
    layers: &mut Vec<Layer>,
) -> Result<(), CodegenError> {
    placement[root] = Placement::InProgress;
    let mut stack = vec![frame_for(schema, root)?];

    while let Some(frame) = stack.last_mut() {
        if let Some(&dep) = frame.dependencies.get(frame.cursor) {
            frame.cursor += 1;
            match placement[dep] {
                Placement::Placed(_) => {}
                Placement::InProgress => {
                    return Err(cycle_error(schema, &stack, dep));
                }
                Placement::Unvisited => {
                    placement[dep] = Placement::InProgress;
                    stack.push(frame_for(schema, dep)?);
                }
            }
            continue;
        }

        // All dependencies placed: the entry joins the layer one past the
        // deepest of them.
        let entity = frame.entity;
        let dependencies = std::mem::take(&mut frame.dependencies);
        stack.pop();

        let layer_index = dependencies
            .iter()
            .filter_map(|&dep| match placement[dep] {
                Placement::Placed(layer) => Some(layer + 1),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        while layers.len() <= layer_index {
            layers.push(Layer::default());
        }
        layers[layer_index].entries.push(LayerEntry {
            entity,
            dependencies,
        });
        placement[entity] = Placement::Placed(layer_index);
    }

    Ok(())
}

/// Builds the placement frame for an entity, enumerating its direct
/// relation targets.
///
/// A nullable self-reference resolves within the entity's own declaration
/// file and contributes no edge; a non-nullable one stays in the dependency
/// list and is caught as a one-member cycle.
fn frame_for(schema: &Schema, index: usize) -> Result<Frame, CodegenError> {
    let entity = &schema.entities[index];
    let mut dependencies = Vec::new();

    for field in &entity.fields {
        let FieldKind::Relation { target, .. } = &field.kind else {
            continue;
        };
        if target == &entity.name && field.nullable {
            continue;
        }
        let Some(dep) = schema.entity_index(target) else {
            return Err(CodegenError::UnknownTarget {
                target: target.clone(),
                field: format!("{}.{}", entity.name, field.name),
            });
        };
        if !dependencies.contains(&dep) {
            dependencies.push(dep);
        }
    }

    Ok(Frame {
        entity: index,
        dependencies,
        cursor: 0,
    })
}

/// Builds the cycle error for a revisited in-progress entity.
///
/// In-progress entities are exactly the stack members, so the cycle is the
/// stack segment from the revisited entity to the top.
fn cycle_error(schema: &Schema, stack: &[Frame], revisited: usize) -> CodegenError {
    let start = stack
        .iter()
        .position(|frame| frame.entity == revisited)
        .unwrap_or_default();
    let members = stack[start..]
        .iter()
        .map(|frame| schema.entities[frame.entity].name.clone())
        .collect();
    CodegenError::cyclic(members)
}
