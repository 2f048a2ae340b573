//! Decoration options.

use serde::Deserialize;

/// Default class marker identifying metadata blocks.
pub const DEFAULT_BLOCK_CLASS: &str = "image-metadata";

/// What to do with a field entry whose label/value structure is missing.
///
/// Applies to rows with fewer than two cells and to `creator` /
/// `copyrightHolder` values with fewer than two child elements. The
/// contentUrl-with-no-image case is always a silent skip, independent of
/// this policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalformedPolicy {
    /// Log the entry and drop it, keep decorating with the rest.
    #[default]
    Skip,
    /// Abort the whole invocation with an error.
    Fail,
}

/// Options for a decoration run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecorateOptions {
    /// Class marker that identifies decorable blocks.
    pub block_class: String,
    /// Policy for structurally malformed field entries.
    pub on_malformed: MalformedPolicy,
}

impl Default for DecorateOptions {
    fn default() -> Self {
        Self {
            block_class: DEFAULT_BLOCK_CLASS.to_string(),
            on_malformed: MalformedPolicy::default(),
        }
    }
}
