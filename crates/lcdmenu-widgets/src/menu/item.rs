#![forbid(unsafe_code)]

//! Menu entries and their display labels.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use lcdmenu_core::{Icon, IconAnimation, PLUGINS_14};

/// Activation callback. Receives the item's external index.
pub type MenuCallback = Arc<dyn Fn(u32) + Send + Sync>;

/// Labels replaced by a shorter synonym in the grid layout's narrow slots.
const GRID_SYNONYMS: [(&str, &str); 3] = [
    ("Applications", "Apps"),
    ("125 kHz RFID", "RFID"),
    ("Sub-GHz", "SubGHz"),
];

/// Item label: borrowed when static, otherwise shared.
///
/// Cloning never copies the text, so snapshots taken on every redraw stay
/// allocation-free per label.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Label(LabelRepr);

#[derive(Clone, PartialEq, Eq, Hash)]
enum LabelRepr {
    Static(&'static str),
    Shared(Arc<str>),
}

impl Label {
    /// The label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match &self.0 {
            LabelRepr::Static(text) => text,
            LabelRepr::Shared(text) => text,
        }
    }

    /// Whether the text is borrowed from static storage.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self.0, LabelRepr::Static(_))
    }
}

impl Deref for Label {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Cow<'static, str>> for Label {
    fn from(text: Cow<'static, str>) -> Self {
        match text {
            Cow::Borrowed(text) => Self(LabelRepr::Static(text)),
            Cow::Owned(text) => Self(LabelRepr::Shared(text.into())),
        }
    }
}

impl From<&'static str> for Label {
    fn from(text: &'static str) -> Self {
        Self(LabelRepr::Static(text))
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self(LabelRepr::Shared(text.into()))
    }
}

/// One selectable entry.
pub struct MenuItem {
    label: Label,
    icon: IconAnimation,
    external_index: u32,
    callback: Option<MenuCallback>,
}

impl MenuItem {
    /// Create an item. Without an icon the item plays [`PLUGINS_14`].
    #[must_use]
    pub fn new(
        label: impl Into<Cow<'static, str>>,
        icon: Option<&'static Icon>,
        external_index: u32,
        callback: Option<MenuCallback>,
    ) -> Self {
        let label: Cow<'static, str> = label.into();
        Self {
            label: label.into(),
            icon: IconAnimation::new(icon.unwrap_or(&PLUGINS_14)),
            external_index,
            callback,
        }
    }

    /// Full label as given.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The item's owned animation.
    #[must_use]
    pub fn icon(&self) -> &IconAnimation {
        &self.icon
    }

    pub(crate) fn icon_mut(&mut self) -> &mut IconAnimation {
        &mut self.icon
    }

    /// Caller-assigned identifier reported on activation.
    #[must_use]
    pub const fn external_index(&self) -> u32 {
        self.external_index
    }

    /// Activation callback, if any.
    #[must_use]
    pub fn callback(&self) -> Option<&MenuCallback> {
        self.callback.as_ref()
    }

    pub(crate) fn shared_label(&self) -> Label {
        self.label.clone()
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("external_index", &self.external_index)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Strip a leading `"[tag] "` prefix, if present.
///
/// `"[JS] Calculator"` becomes `"Calculator"`; labels without a closing
/// `"] "` after the opening bracket are returned unchanged.
#[must_use]
pub fn short_label(label: &str) -> &str {
    if !label.starts_with('[') {
        return label;
    }
    match label[1..].find("] ") {
        Some(at) => &label[1 + at + 2..],
        None => label,
    }
}

/// Label shown in the grid layout: tag stripped, then a synonym if the
/// full label has one.
#[must_use]
pub fn grid_label(label: &str) -> &str {
    GRID_SYNONYMS
        .iter()
        .find(|(long, _)| *long == label)
        .map_or_else(|| short_label(label), |&(_, short)| short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_icon_falls_back_to_plugins() {
        let item = MenuItem::new("Clock", None, 7, None);
        assert!(std::ptr::eq(item.icon().icon(), &PLUGINS_14));
        assert!(!item.icon().is_running());
        assert_eq!(item.external_index(), 7);
        assert!(item.callback().is_none());
    }

    #[test]
    fn owned_and_static_labels() {
        let owned = MenuItem::new(String::from("Dynamic"), None, 0, None);
        let borrowed = MenuItem::new("Static", None, 0, None);
        assert_eq!(owned.label(), "Dynamic");
        assert!(borrowed.shared_label().is_static());
        assert!(!owned.shared_label().is_static());
    }

    #[test]
    fn shared_label_clones_without_copying() {
        let item = MenuItem::new(format!("Item {}", 7), None, 0, None);
        let first = item.shared_label();
        let second = item.shared_label();
        assert!(std::ptr::eq(first.as_str(), second.as_str()));
        assert_eq!(&*first, "Item 7");
        assert_eq!(format!("{first:?}"), "\"Item 7\"");
    }

    #[test]
    fn short_label_strips_tag() {
        assert_eq!(short_label("[JS] Calculator"), "Calculator");
        assert_eq!(short_label("[ESP] Marauder"), "Marauder");
        assert_eq!(short_label("Calculator"), "Calculator");
        assert_eq!(short_label("[broken"), "[broken");
        assert_eq!(short_label("[x]y"), "[x]y");
        assert_eq!(short_label("[] Empty tag"), "Empty tag");
    }

    #[test]
    fn grid_label_applies_synonyms() {
        assert_eq!(grid_label("Applications"), "Apps");
        assert_eq!(grid_label("125 kHz RFID"), "RFID");
        assert_eq!(grid_label("Sub-GHz"), "SubGHz");
        assert_eq!(grid_label("[Tools] NFC"), "NFC");
        assert_eq!(grid_label("Sub-GHz Remote"), "Sub-GHz Remote");
    }

    #[test]
    fn debug_hides_callback_body() {
        let item = MenuItem::new("A", None, 1, Some(Arc::new(|_| {})));
        let text = format!("{item:?}");
        assert!(text.contains("callback: true"));
    }
}
