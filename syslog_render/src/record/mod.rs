//! Structured records and their field metadata.
//!
//! A record lists its fields through [`Record::fields`]. Each field carries a
//! [`FieldMeta`] attached once when the record's shape is defined: the derive
//! macro builds a `static` table with [`FieldMeta::new`], while hand-written
//! records can parse tag strings with [`FieldMeta::from_tag`], typically into
//! a `LazyLock` table.
//!
//! [`fields_of`] is the introspection entry point used by the renderer. It
//! classifies every field as positional, option, or invalid.

mod tag;
#[cfg(test)]
mod tests;

use std::borrow::Cow;

use crate::{Render, RenderError, to_syntax_key};

/// Position specifier attached to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    /// Zero-based argument index. Lower indices render first.
    Index(i8),
    /// A specifier that failed to parse as a small integer.
    Invalid {
        /// The specifier as written.
        spec: Cow<'static, str>,
        /// Parser diagnostic.
        reason: Cow<'static, str>,
    },
}

impl Position {
    /// Parses a raw specifier. Empty specifiers mean "not positional".
    ///
    /// # Examples
    ///
    /// ```
    /// use syslog_render::Position;
    ///
    /// assert_eq!(Position::parse("2"), Some(Position::Index(2)));
    /// assert_eq!(Position::parse(""), None);
    /// assert!(matches!(Position::parse("x"), Some(Position::Invalid { .. })));
    /// ```
    #[must_use]
    pub fn parse(spec: &str) -> Option<Self> {
        if spec.is_empty() {
            return None;
        }
        Some(spec.parse::<i8>().map_or_else(
            |err| Self::Invalid {
                spec: Cow::Owned(spec.to_owned()),
                reason: Cow::Owned(err.to_string()),
            },
            Self::Index,
        ))
    }
}

/// Metadata describing how one field renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMeta {
    ident: Cow<'static, str>,
    name: Option<Cow<'static, str>>,
    position: Option<Position>,
    omit_empty: bool,
}

impl FieldMeta {
    /// Builds metadata from already validated parts.
    ///
    /// This is what `#[derive(Record)]` emits for its `static` tables.
    #[must_use]
    pub const fn new(
        ident: &'static str,
        name: Option<&'static str>,
        position: Option<i8>,
        omit_empty: bool,
    ) -> Self {
        Self {
            ident: Cow::Borrowed(ident),
            name: match name {
                Some(keyword) => Some(Cow::Borrowed(keyword)),
                None => None,
            },
            position: match position {
                Some(index) => Some(Position::Index(index)),
                None => None,
            },
            omit_empty,
        }
    }

    /// Metadata for a plain keyword field named after `ident`.
    #[must_use]
    pub const fn keyword(ident: &'static str) -> Self {
        Self::new(ident, None, None, false)
    }

    /// Parses a tag of comma-separated settings.
    ///
    /// Recognised settings are `pos=<int>`, `name=<keyword>`, and the bare
    /// flag `omitempty`; anything else is ignored. Position errors are kept
    /// and reported when the field is rendered.
    ///
    /// # Examples
    ///
    /// ```
    /// use syslog_render::{FieldClass, FieldMeta};
    ///
    /// let meta = FieldMeta::from_tag("Tag", "pos=0");
    /// assert_eq!(meta.classify(), FieldClass::Positional(0));
    ///
    /// let meta = FieldMeta::from_tag("LogFIFOSize", "name=log-fifo-size,omitempty");
    /// assert_eq!(meta.classify(), FieldClass::Option("log-fifo-size".into()));
    /// assert!(meta.omit_empty());
    /// ```
    #[must_use]
    pub fn from_tag(ident: impl Into<Cow<'static, str>>, tag: &str) -> Self {
        let settings = tag::parse(tag);
        Self {
            ident: ident.into(),
            name: settings.name.map(|name| Cow::Owned(name.to_owned())),
            position: settings.pos.and_then(Position::parse),
            omit_empty: settings.omit_empty,
        }
    }

    /// Field identifier as declared on the record.
    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Explicit name override, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Position specifier, if the field is positional.
    #[must_use]
    pub const fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// Whether empty values are left out of the output.
    #[must_use]
    pub const fn omit_empty(&self) -> bool {
        self.omit_empty
    }

    /// Resolves the keyword used for this field, ignoring any position.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Naming`] when the explicit override is empty.
    pub fn key(&self) -> Result<String, RenderError> {
        match self.name.as_deref() {
            Some("") => Err(RenderError::Naming {
                field: self.ident.clone().into_owned(),
            }),
            Some(name) => Ok(name.to_owned()),
            None => Ok(to_syntax_key(&self.ident)),
        }
    }

    /// Classifies the field as positional, option, or invalid.
    #[must_use]
    pub fn classify(&self) -> FieldClass {
        match &self.position {
            Some(Position::Index(index)) => FieldClass::Positional(*index),
            Some(Position::Invalid { spec, reason }) => {
                FieldClass::Invalid(RenderError::InvalidFieldMetadata {
                    field: self.ident.clone().into_owned(),
                    spec: spec.clone().into_owned(),
                    reason: reason.clone().into_owned(),
                })
            }
            None => self
                .key()
                .map_or_else(FieldClass::Invalid, FieldClass::Option),
        }
    }
}

/// Rendering role of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldClass {
    /// Rendered by position alone.
    Positional(i8),
    /// Rendered as `key(value)`.
    Option(String),
    /// Rendered as an error node in place of the field.
    Invalid(RenderError),
}

/// A field of a record together with its metadata.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    meta: &'a FieldMeta,
    value: &'a dyn Render,
}

impl<'a> Field<'a> {
    /// Pairs a metadata entry with the field's current value.
    #[must_use]
    pub const fn new(meta: &'a FieldMeta, value: &'a dyn Render) -> Self {
        Self { meta, value }
    }

    /// Metadata of the field.
    #[must_use]
    pub const fn meta(&self) -> &'a FieldMeta {
        self.meta
    }

    /// Current value of the field.
    #[must_use]
    pub const fn value(&self) -> &'a dyn Render {
        self.value
    }
}

/// A typed value composed of named, metadata-annotated fields.
///
/// Usually derived:
///
/// ```
/// use syslog_render::Record;
///
/// #[derive(Record)]
/// struct Loggly {
///     #[syslog(pos = 0)]
///     host: String,
///     #[syslog(omit_empty)]
///     tag: String,
/// }
/// ```
pub trait Record {
    /// Name of the record type, used in diagnostics.
    fn type_name(&self) -> &'static str;

    /// Fields in declaration order, with flattened records spliced in.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// One introspected field, ready for rendering.
pub struct FieldDescriptor<'a> {
    /// Field identifier as declared.
    pub ident: &'a str,
    /// Current value.
    pub value: &'a dyn Render,
    /// Rendering role derived from the metadata.
    pub class: FieldClass,
}

/// Enumerates and classifies the fields of `record`.
///
/// Fields marked `omit_empty` whose value reports
/// [`Render::is_empty_value`] are left out.
#[must_use]
pub fn fields_of(record: &dyn Record) -> Vec<FieldDescriptor<'_>> {
    record
        .fields()
        .into_iter()
        .filter(|field| !(field.meta.omit_empty() && field.value.is_empty_value()))
        .map(|field| FieldDescriptor {
            ident: field.meta.ident(),
            value: field.value,
            class: field.meta.classify(),
        })
        .collect()
}
