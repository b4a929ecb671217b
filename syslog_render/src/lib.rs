//! Render typed configuration values into syslog-ng configuration syntax.
//!
//! The crate turns records, collections and scalars into a [`RenderNode`]
//! tree. The nodes carry literals, `key(value)` option expressions, filter
//! subtrees and named statements. Failures never abort a render; they are
//! embedded as [`RenderNode::Error`] and collected later, so one pass
//! reports every problem in a configuration.
//!
//! Records describe their fields through [`Record`], usually derived with
//! the companion `syslog_render_macros` crate:
//!
//! ```
//! use syslog_render::{Emitter, Record, Renderer, SecretRef, SecretStore};
//!
//! #[derive(Record)]
//! struct Loggly {
//!     #[syslog(pos = 0)]
//!     host: String,
//!     token: SecretRef,
//!     #[syslog(omit_empty)]
//!     tag: String,
//! }
//!
//! let secrets = SecretStore::new().with_secret("loggly", "token", "s3cr3t");
//! let output = Loggly {
//!     host: "logs-01.loggly.com".into(),
//!     token: SecretRef::from_secret("loggly", "token"),
//!     tag: String::new(),
//! };
//! let node = Renderer::new(&secrets).render_statement("loggly", &output);
//! let text = Emitter::default().emit(&[node])?;
//! assert_eq!(text, "loggly(\n    \"logs-01.loggly.com\"\n    token(\"s3cr3t\")\n)");
//! # Ok::<(), syslog_render::AggregatedErrors>(())
//! ```

extern crate self as syslog_render;

pub use syslog_render_macros::Record;

pub mod emit;
mod error;
mod filter;
mod naming;
mod node;
mod record;
mod render;
mod secret;
mod settings;
mod value;

pub use emit::Emitter;
pub use error::{AggregatedErrors, RenderError};
pub use filter::{FilterTranslator, MatchExpr, MatchExprTranslator, RegexpMatch};
pub use naming::to_syntax_key;
pub use node::{FilterOp, RenderNode, Scalar, collect_errors};
pub use record::{Field, FieldClass, FieldDescriptor, FieldMeta, Position, Record, fields_of};
pub use render::{MapOrder, Renderer, render_driver, render_value};
pub use secret::{
    MountedSecret, SecretError, SecretKeySelector, SecretRef, SecretResolver, SecretSource,
    SecretStore,
};
pub use settings::{DEFAULT_SETTINGS_FILE, ENV_PREFIX, EmitSettings, RenderSettings, SettingsError};
pub use value::{MapKey, Render, RenderKey, ValueKind};
