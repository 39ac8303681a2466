// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::qualification::{NumericField, QualificationKind, Requirement};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static GLOBAL_REGISTRY: LazyLock<QualificationRegistry> = LazyLock::new(QualificationRegistry::new);

/// Describes how one variant is read from its WCIF object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDescriptor {
    kind: QualificationKind,
}

impl VariantDescriptor {
    /// Returns the variant this descriptor builds.
    #[must_use]
    pub const fn kind(&self) -> QualificationKind {
        self.kind
    }

    /// Returns the WCIF `type` tag of the variant.
    #[must_use]
    pub const fn wcif_type(&self) -> &'static str {
        self.kind.wcif_type()
    }

    /// Builds the variant requirement from the matching key of `object`.
    #[must_use]
    pub fn parse_requirement(&self, object: &Map<String, Value>) -> Requirement {
        let value: NumericField = NumericField::from_raw(object.get(self.kind.value_key()));
        Requirement::new(self.kind, value)
    }
}

/// Maps WCIF discriminator tags to variant descriptors.
///
/// The registry is built from the closed set in [`QualificationKind::ALL`]
/// and is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualificationRegistry {
    variants: BTreeMap<&'static str, VariantDescriptor>,
}

impl QualificationRegistry {
    /// Builds the registry of all known variants.
    #[must_use]
    pub fn new() -> Self {
        let variants: BTreeMap<&'static str, VariantDescriptor> = QualificationKind::ALL
            .into_iter()
            .map(|kind| (kind.wcif_type(), VariantDescriptor { kind }))
            .collect();
        Self { variants }
    }

    /// Returns the process-wide registry, building it on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_REGISTRY
    }

    /// Resolves a WCIF `type` tag.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownQualificationType` if the tag is not registered.
    pub fn resolve(&self, tag: &str) -> Result<&VariantDescriptor, CoreError> {
        self.variants
            .get(tag)
            .ok_or_else(|| CoreError::UnknownQualificationType {
                tag: Some(tag.to_string()),
            })
    }

    /// Returns the registered tags in registry order.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        QualificationKind::ALL
            .into_iter()
            .map(|kind| kind.wcif_type())
            .filter(|tag| self.variants.contains_key(tag))
            .collect()
    }
}

impl Default for QualificationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
