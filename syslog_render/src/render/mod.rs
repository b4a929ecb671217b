//! The recursive value-to-syntax renderer.
//!
//! [`Renderer::render`] walks any [`Render`] value and returns the nodes it
//! produces. It never fails: each problem becomes a [`RenderNode::Error`] at
//! the point where it occurred and the rest of the tree keeps rendering.


use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Field, FieldClass, FilterTranslator, MapKey, MatchExprTranslator, Record, Render, RenderError,
    RenderNode, RenderSettings, Scalar, SecretRef, SecretResolver, ValueKind, fields_of,
};

/// Order in which mapping entries are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapOrder {
    /// Entries sorted by key; non-string keys come last.
    #[default]
    Sorted,
    /// The container's own iteration order, which for hash maps varies
    /// between runs.
    Unordered,
}

/// Renders values using a secret resolver and a filter translator.
///
/// # Examples
///
/// ```
/// use syslog_render::{Record, RenderNode, Renderer, SecretStore};
///
/// #[derive(Record)]
/// struct Output {
///     #[syslog(pos = 0)]
///     tag: String,
///     retries: u32,
/// }
///
/// let secrets = SecretStore::new();
/// let nodes = Renderer::new(&secrets).render(&Output { tag: "t1".into(), retries: 3 });
/// assert_eq!(
///     nodes,
///     vec![
///         RenderNode::literal("t1"),
///         RenderNode::option_expr("retries", vec![RenderNode::literal(3_u32)]),
///     ],
/// );
/// ```
#[derive(Clone, Copy)]
pub struct Renderer<'r> {
    secrets: &'r dyn SecretResolver,
    filters: &'r dyn FilterTranslator,
    map_order: MapOrder,
}

impl<'r> Renderer<'r> {
    /// A renderer using [`MatchExprTranslator`] and sorted mapping entries.
    #[must_use]
    pub const fn new(secrets: &'r dyn SecretResolver) -> Self {
        Self {
            secrets,
            filters: &MatchExprTranslator,
            map_order: MapOrder::Sorted,
        }
    }

    /// Replaces the filter translator.
    #[must_use]
    pub const fn with_filter_translator(mut self, filters: &'r dyn FilterTranslator) -> Self {
        self.filters = filters;
        self
    }

    /// Sets the mapping entry order.
    #[must_use]
    pub const fn with_map_order(mut self, map_order: MapOrder) -> Self {
        self.map_order = map_order;
        self
    }

    /// Applies the render-related parts of `settings`.
    #[must_use]
    pub const fn with_settings(self, settings: &RenderSettings) -> Self {
        self.with_map_order(settings.map_order)
    }

    /// Renders `value` into a node sequence.
    ///
    /// Empty containers and `None` yield no nodes. Within a record, all
    /// positional fields come first, in ascending position (ties keep
    /// declaration order), followed by option fields in declaration order.
    /// An option field that renders no nodes is left out rather than
    /// emitted as an empty `key()`.
    #[must_use]
    pub fn render(&self, value: &dyn Render) -> Vec<RenderNode> {
        match value.kind() {
            ValueKind::Secret(secret) => vec![self.render_secret(secret)],
            ValueKind::Indirect(None) => Vec::new(),
            ValueKind::Indirect(Some(inner)) => self.render(inner),
            ValueKind::Match(expr) => vec![RenderNode::filter_expr(self.filters.translate(expr))],
            ValueKind::Scalar(scalar) => vec![RenderNode::Literal(scalar)],
            ValueKind::Sequence(items) => items.into_iter().flat_map(|item| self.render(item)).collect(),
            ValueKind::Mapping(entries) => self.render_mapping(entries),
            ValueKind::Record(record) => self.render_record(record),
            ValueKind::Nodes(nodes) => nodes,
            ValueKind::Unsupported(type_name) => {
                tracing::debug!(type_name, "cannot render value");
                vec![RenderNode::error(RenderError::unsupported(type_name))]
            }
        }
    }

    /// Renders one top-level field as a named statement.
    ///
    /// The statement is named after the field's key and holds the field's
    /// nodes, space separated.
    #[must_use]
    pub fn render_driver(&self, field: Field<'_>) -> RenderNode {
        field.meta().key().map_or_else(RenderNode::error, |name| {
            self.render_statement(&name, field.value())
        })
    }

    /// Renders `value` as the body of a statement called `name`.
    #[must_use]
    pub fn render_statement(&self, name: &str, value: &dyn Render) -> RenderNode {
        tracing::trace!(driver = name, "rendering driver statement");
        RenderNode::paren_def_stmt(name, vec![RenderNode::space_separated(self.render(value))])
    }

    /// Renders every non-nil field of `record` as its own statement.
    #[must_use]
    pub fn render_drivers(&self, record: &dyn Record) -> Vec<RenderNode> {
        record
            .fields()
            .into_iter()
            .filter(|field| !is_nil(field.value()))
            .map(|field| self.render_driver(field))
            .collect()
    }

    fn render_secret(&self, secret: &SecretRef) -> RenderNode {
        match self.secrets.resolve(secret) {
            Ok(plaintext) => RenderNode::Literal(Scalar::Str(plaintext)),
            Err(err) => {
                let description = secret.describe();
                tracing::debug!(secret = %description, error = %err, "secret resolution failed");
                RenderNode::error(RenderError::SecretResolution {
                    secret: description,
                    reason: err.to_string(),
                })
            }
        }
    }

    fn render_mapping(&self, mut entries: Vec<(MapKey<'_>, &dyn Render)>) -> Vec<RenderNode> {
        if self.map_order == MapOrder::Sorted {
            entries.sort_by(|(left, _), (right, _)| left.cmp(right));
        }
        entries
            .into_iter()
            .map(|(key, value)| match key {
                MapKey::Str(key) => RenderNode::option_expr(key.into_owned(), self.render(value)),
                MapKey::Other(key_type) => {
                    tracing::debug!(key_type, "cannot render map entry");
                    RenderNode::error(RenderError::non_string_key(key_type))
                }
            })
            .collect()
    }

    fn render_record(&self, record: &dyn Record) -> Vec<RenderNode> {
        let mut positional: Vec<(i8, Vec<RenderNode>)> = Vec::new();
        let mut options = Vec::new();
        for field in fields_of(record) {
            match field.class {
                FieldClass::Positional(index) => positional.push((index, self.render(field.value))),
                FieldClass::Option(key) => {
                    let children = self.render(field.value);
                    if !children.is_empty() {
                        options.push(RenderNode::option_expr(key, children));
                    }
                }
                FieldClass::Invalid(err) => {
                    tracing::debug!(
                        record = record.type_name(),
                        field = field.ident,
                        error = %err,
                        "invalid field metadata"
                    );
                    options.push(RenderNode::error(err));
                }
            }
        }
        positional.sort_by_key(|(index, _)| *index);
        positional
            .into_iter()
            .flat_map(|(_, nodes)| nodes)
            .chain(options)
            .collect()
    }
}

impl fmt::Debug for Renderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("map_order", &self.map_order)
            .finish_non_exhaustive()
    }
}

fn is_nil(value: &dyn Render) -> bool {
    match value.kind() {
        ValueKind::Indirect(None) => true,
        ValueKind::Indirect(Some(inner)) => is_nil(inner),
        _ => false,
    }
}

/// Renders `value` with the default translator and sorted mappings.
#[must_use]
pub fn render_value(value: &dyn Render, secrets: &dyn SecretResolver) -> Vec<RenderNode> {
    Renderer::new(secrets).render(value)
}

/// Renders `field` as a named statement with the default settings.
#[must_use]
pub fn render_driver(field: Field<'_>, secrets: &dyn SecretResolver) -> RenderNode {
    Renderer::new(secrets).render_driver(field)
}
