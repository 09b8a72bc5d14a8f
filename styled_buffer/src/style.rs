// Copyright 2026 the Inkpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Horizontal paragraph alignment.
///
/// Alignment is a paragraph-level attribute: spans carrying it are widened
/// to full line bounds when applied through
/// [`AttributedDocument::apply_attribute`].
///
/// [`AttributedDocument::apply_attribute`]: crate::AttributedDocument::apply_attribute
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center between the edges.
    Center,
    /// Align to the right edge.
    Right,
}

/// A single style annotation that can be applied to a character range.
///
/// `Bold`, `Italic` and `Underline` are flags; `TextColor` and `Alignment`
/// carry a value. Attributes of different kinds compose over the same range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StyleAttribute {
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
    /// Underline decoration.
    Underline,
    /// Foreground text color.
    TextColor(Color),
    /// Paragraph alignment.
    Alignment(Alignment),
}

impl StyleAttribute {
    /// The value-free discriminant of this attribute.
    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Bold => AttributeKind::Bold,
            Self::Italic => AttributeKind::Italic,
            Self::Underline => AttributeKind::Underline,
            Self::TextColor(_) => AttributeKind::TextColor,
            Self::Alignment(_) => AttributeKind::Alignment,
        }
    }
}

/// The kind of a [`StyleAttribute`], without its value.
///
/// The span index maintains its per-kind non-overlap invariant independently
/// for each variant listed here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttributeKind {
    /// See [`StyleAttribute::Bold`].
    Bold,
    /// See [`StyleAttribute::Italic`].
    Italic,
    /// See [`StyleAttribute::Underline`].
    Underline,
    /// See [`StyleAttribute::TextColor`].
    TextColor,
    /// See [`StyleAttribute::Alignment`].
    Alignment,
}

pub(crate) const KIND_COUNT: usize = 5;

impl AttributeKind {
    /// All attribute kinds, in lane order.
    pub const ALL: [Self; KIND_COUNT] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::TextColor,
        Self::Alignment,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Bold => 0,
            Self::Italic => 1,
            Self::Underline => 2,
            Self::TextColor => 3,
            Self::Alignment => 4,
        }
    }
}

/// The resolved set of attributes active at one offset or over one run.
///
/// Holds at most one value per [`AttributeKind`]. This is what exporters and
/// the font resolver consume; it is never stored per character.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct StyleSet {
    slots: [Option<StyleAttribute>; KIND_COUNT],
}

impl StyleSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, replacing any existing value of the same kind.
    pub fn insert(&mut self, attribute: StyleAttribute) {
        self.slots[attribute.kind().index()] = Some(attribute);
    }

    /// The attribute of the given kind, if active.
    pub fn get(&self, kind: AttributeKind) -> Option<StyleAttribute> {
        self.slots[kind.index()]
    }

    /// Returns `true` if an attribute of the given kind is active.
    pub fn contains(&self, kind: AttributeKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Returns `true` if no attribute is active.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The number of active attributes.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns `true` if bold is active.
    pub fn bold(&self) -> bool {
        self.contains(AttributeKind::Bold)
    }

    /// Returns `true` if italic is active.
    pub fn italic(&self) -> bool {
        self.contains(AttributeKind::Italic)
    }

    /// Returns `true` if underline is active.
    pub fn underline(&self) -> bool {
        self.contains(AttributeKind::Underline)
    }

    /// The active text color, if any.
    pub fn text_color(&self) -> Option<Color> {
        match self.get(AttributeKind::TextColor) {
            Some(StyleAttribute::TextColor(color)) => Some(color),
            _ => None,
        }
    }

    /// The active paragraph alignment, if any.
    pub fn alignment(&self) -> Option<Alignment> {
        match self.get(AttributeKind::Alignment) {
            Some(StyleAttribute::Alignment(alignment)) => Some(alignment),
            _ => None,
        }
    }

    /// Iterate over the active attributes in lane order.
    pub fn iter(&self) -> impl Iterator<Item = StyleAttribute> + '_ {
        self.slots.iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trip() {
        for (i, kind) in AttributeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i, "lane order must match `ALL`");
        }
        assert_eq!(StyleAttribute::Bold.kind(), AttributeKind::Bold);
        assert_eq!(
            StyleAttribute::TextColor(Color::from_rgb8(1, 2, 3)).kind(),
            AttributeKind::TextColor
        );
    }

    #[test]
    fn set_replaces_same_kind() {
        let mut set = StyleSet::new();
        set.insert(StyleAttribute::Alignment(Alignment::Left));
        set.insert(StyleAttribute::Alignment(Alignment::Right));
        assert_eq!(set.alignment(), Some(Alignment::Right));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn accessors() {
        let mut set = StyleSet::new();
        assert!(set.is_empty());
        set.insert(StyleAttribute::Bold);
        set.insert(StyleAttribute::TextColor(Color::from_rgb8(255, 0, 0)));
        assert!(set.bold());
        assert!(!set.italic());
        assert_eq!(set.text_color(), Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(set.iter().count(), 2);
    }
}
