use super::app::{Bundle, FieldId, ModelId, RelationshipType};
use super::{DefaultResolver, TypeNames, TypeResolver};
use crate::{Error, Result};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Discovers the relationships implied by reference fields and records them
/// in the bundle, using the [`DefaultResolver`].
pub fn infer_relationships(bundle: &mut Bundle) -> Result<()> {
    Inference::new(DefaultResolver).run(bundle)
}

/// Relationship inference with a caller-provided [`TypeResolver`].
#[derive(Debug, Clone, Default)]
pub struct Inference<R> {
    resolver: R,
}

/// A reference field pointing from one model to another.
#[derive(Debug, Clone, Copy)]
struct Edge {
    from: ModelId,
    field: FieldId,
    to: ModelId,
    list: bool,
}

/// Reference fields between two models, keyed by the model that sorts
/// first by name.
#[derive(Debug, Default)]
struct Pair {
    forward: Vec<Edge>,
    backward: Vec<Edge>,
}

impl<R: TypeResolver> Inference<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Builds every missing relationship.
    ///
    /// Fields that already navigate a relationship are left alone, so
    /// running inference twice is a no-op. Pairs of models are processed in
    /// name order, which keeps relationship ids independent of the order in
    /// which models were registered.
    pub fn run(&self, bundle: &mut Bundle) -> Result<()> {
        let pairs = self.collect_pairs(bundle)?;

        for ((first, second), pair) in &pairs {
            if first == second {
                for edge in pair.forward.iter().chain(&pair.backward) {
                    link_unidirectional(bundle, &self.resolver, edge)?;
                }
                continue;
            }

            let forward = pair.forward.len();
            let backward = pair.backward.len();

            match (forward, backward) {
                (1, 1) => link_bidirectional(
                    bundle,
                    &self.resolver,
                    &pair.forward[0],
                    &pair.backward[0],
                )?,
                (_, 0) | (0, _) => {
                    for edge in pair.forward.iter().chain(&pair.backward) {
                        link_unidirectional(bundle, &self.resolver, edge)?;
                    }
                }
                _ => return Err(Error::ambiguous_relationship(first, second)),
            }
        }

        Ok(())
    }

    fn collect_pairs(&self, bundle: &Bundle) -> Result<BTreeMap<(String, String), Pair>> {
        let names = TypeNames::collect(bundle);
        let mut pairs: BTreeMap<(String, String), Pair> = BTreeMap::new();

        let mut models: Vec<_> = bundle.models().collect();
        models.sort_by(|a, b| a.name.cmp(&b.name));

        for model in models {
            for field in model.fields() {
                if field.relation().is_some() {
                    continue;
                }

                let ty = self.resolver.resolve(&field.ty, &names);
                trace!(model = %model.name, field = %field.name, ty = ?ty, "classified field");

                let Some(target) = ty.as_model() else {
                    continue;
                };

                let Some(remote) = bundle.model_by_name(target) else {
                    return Err(Error::unresolved_reference(
                        &model.name,
                        &field.name,
                        target,
                        &bundle.name,
                    ));
                };

                let edge = Edge {
                    from: model.id(),
                    field: field.id(),
                    to: remote.id(),
                    list: field.list,
                };

                if model.name <= remote.name {
                    pairs
                        .entry((model.name.clone(), remote.name.clone()))
                        .or_default()
                        .forward
                        .push(edge);
                } else {
                    pairs
                        .entry((remote.name.clone(), model.name.clone()))
                        .or_default()
                        .backward
                        .push(edge);
                }
            }
        }

        Ok(pairs)
    }
}

/// The field holder becomes the left side; the target has no field.
fn link_unidirectional(
    bundle: &mut Bundle,
    resolver: impl TypeResolver,
    edge: &Edge,
) -> Result<()> {
    let ty = if edge.list {
        RelationshipType::OneToMany
    } else {
        RelationshipType::OneToOne
    };

    let id = bundle.add_relationship_with(
        resolver,
        ty,
        (edge.from, Some(edge.field)),
        (edge.to, None),
    )?;

    debug!(
        relationship = ?id,
        %ty,
        left = %bundle.model(edge.from).name,
        right = %bundle.model(edge.to).name,
        field = %bundle.field(edge.field).name,
        "inferred unidirectional relationship"
    );

    Ok(())
}

/// `first` comes from the model sorting first by name. For one-to-many the
/// model holding the list field becomes the left ("one") side; otherwise the
/// name order decides.
fn link_bidirectional(
    bundle: &mut Bundle,
    resolver: impl TypeResolver,
    first: &Edge,
    second: &Edge,
) -> Result<()> {
    let ty = RelationshipType::from_list_flags(first.list, second.list);

    let (left, right) = if ty == RelationshipType::OneToMany && second.list {
        (second, first)
    } else {
        (first, second)
    };

    let id = bundle.add_relationship_with(
        resolver,
        ty,
        (left.from, Some(left.field)),
        (right.from, Some(right.field)),
    )?;

    debug!(
        relationship = ?id,
        %ty,
        left = %bundle.model(left.from).name,
        right = %bundle.model(right.from).name,
        "inferred bidirectional relationship"
    );

    Ok(())
}
