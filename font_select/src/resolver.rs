// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeSet;
use std::sync::Arc;

use fontique::{
    Attributes, Blob, Collection, CollectionOptions, FontStyle, FontWeight, FontWidth,
    GenericFamily, QueryFamily, QueryStatus, SourceCache,
};

use crate::descriptor::FontDescriptor;

/// A concrete font usable for rendering: raw data plus face index and size.
#[derive(Clone, Debug)]
pub struct ResolvedFont {
    /// The name of the family that actually matched. Empty when the
    /// registry had no usable font at all.
    pub family: String,
    /// The font data.
    pub blob: Blob<u8>,
    /// The face index within a font collection (`ttc`) file.
    pub index: u32,
    /// The requested size in points, carried through unchanged.
    pub size: f32,
}

impl ResolvedFont {
    /// The raw font bytes.
    pub fn data(&self) -> &[u8] {
        self.blob.as_ref()
    }

    /// Returns `true` if this font carries actual data.
    ///
    /// `false` only when the registry was empty; renderers then draw
    /// nothing rather than fail.
    pub fn is_usable(&self) -> bool {
        !self.data().is_empty()
    }
}

/// Resolves [`FontDescriptor`]s against the installed-font registry.
///
/// Resolution never fails. Lookup order: the requested family, then the
/// configured generic fallback, then nothing (an empty font). Substitutions
/// are logged at `warn` level once per requested family.
pub struct FontResolver {
    collection: Collection,
    source_cache: SourceCache,
    fallback: GenericFamily,
    warned: BTreeSet<String>,
}

impl core::fmt::Debug for FontResolver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FontResolver")
            .field("fallback", &self.fallback)
            .field("warned", &self.warned)
            .finish_non_exhaustive()
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FontResolver {
    /// Create a resolver over the system fonts, falling back to sans-serif.
    pub fn new() -> Self {
        Self::with_fallback(GenericFamily::SansSerif)
    }

    /// Create a resolver with an explicit generic fallback family.
    pub fn with_fallback(fallback: GenericFamily) -> Self {
        Self {
            collection: Collection::new(CollectionOptions::default()),
            source_cache: SourceCache::default(),
            fallback,
            warned: BTreeSet::new(),
        }
    }

    /// The names of all installed families, sorted.
    ///
    /// This is the enumeration source a family picker consumes.
    pub fn family_names(&mut self) -> Vec<String> {
        let mut names: Vec<String> = self.collection.family_names().map(str::to_string).collect();
        names.sort();
        names
    }

    /// Returns `true` if the registry contains no families at all.
    pub fn is_empty(&mut self) -> bool {
        self.collection.family_names().next().is_none()
    }

    /// Map `descriptor` to a usable rendering font.
    ///
    /// The requested size, weight and slant are preserved across family
    /// fallback. Never fails; see [`ResolvedFont::is_usable`] for the
    /// empty-registry degradation.
    pub fn resolve(&mut self, descriptor: &FontDescriptor) -> ResolvedFont {
        let attributes = Attributes::new(
            FontWidth::NORMAL,
            if descriptor.italic {
                FontStyle::Italic
            } else {
                FontStyle::Normal
            },
            if descriptor.bold {
                FontWeight::BOLD
            } else {
                FontWeight::NORMAL
            },
        );

        let mut found = None;
        {
            let mut query = self.collection.query(&mut self.source_cache);
            query.set_families([
                QueryFamily::Named(&descriptor.family),
                QueryFamily::Generic(self.fallback),
            ]);
            query.set_attributes(attributes);
            query.matches_with(|font| {
                found = Some((font.family.0, font.blob.clone(), font.index));
                QueryStatus::Stop
            });
        }

        match found {
            Some((family_id, blob, index)) => {
                let family = self
                    .collection
                    .family_name(family_id)
                    .unwrap_or_default()
                    .to_string();
                if !family.eq_ignore_ascii_case(&descriptor.family) {
                    self.warn_once(&descriptor.family, &family);
                }
                ResolvedFont {
                    family,
                    blob,
                    index,
                    size: descriptor.size,
                }
            }
            None => {
                self.warn_once(&descriptor.family, "<no installed fonts>");
                ResolvedFont {
                    family: String::new(),
                    blob: Blob::new(Arc::new([0_u8; 0])),
                    index: 0,
                    size: descriptor.size,
                }
            }
        }
    }

    fn warn_once(&mut self, requested: &str, substituted: &str) {
        if self.warned.insert(requested.to_string()) {
            log::warn!("font family {requested:?} unavailable, substituted {substituted:?}");
        }
    }
}
