//! Document patches.
//!
//! Controllers never touch a document directly. They describe the writes a
//! host page must perform, keyed by element id, and the host applies them in
//! order.

use serde::{Deserialize, Serialize};

/// Target name for the page body.
pub const BODY: &str = "body";

/// One write to the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Patch {
    /// Replace an element's text content.
    SetText { target: String, text: String },
    /// Replace an element's children with markup.
    SetHtml { target: String, html: String },
    /// Set an attribute.
    SetAttribute {
        target: String,
        name: String,
        value: String,
    },
    /// Set an inline style property; an empty value clears it.
    SetStyle {
        target: String,
        property: String,
        value: String,
    },
}

impl Patch {
    pub fn text(target: &str, text: impl Into<String>) -> Self {
        Patch::SetText {
            target: target.to_string(),
            text: text.into(),
        }
    }

    pub fn html(target: &str, html: impl Into<String>) -> Self {
        Patch::SetHtml {
            target: target.to_string(),
            html: html.into(),
        }
    }

    pub fn attribute(target: &str, name: &str, value: impl Into<String>) -> Self {
        Patch::SetAttribute {
            target: target.to_string(),
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn style(target: &str, property: &str, value: impl Into<String>) -> Self {
        Patch::SetStyle {
            target: target.to_string(),
            property: property.to_string(),
            value: value.into(),
        }
    }

    /// Toggle `aria-hidden` on an overlay.
    pub fn hidden(target: &str, hidden: bool) -> Self {
        Patch::attribute(target, "aria-hidden", if hidden { "true" } else { "false" })
    }

    /// Element id this patch writes to.
    pub fn target(&self) -> &str {
        match self {
            Patch::SetText { target, .. }
            | Patch::SetHtml { target, .. }
            | Patch::SetAttribute { target, .. }
            | Patch::SetStyle { target, .. } => target,
        }
    }
}

/// Ordered patches produced by one handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patches(Vec<Patch>);

impl Patches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, patch: Patch) {
        self.0.push(patch);
    }

    pub fn extend(&mut self, other: Patches) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Patch> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Patch> {
        self.0
    }

    /// Last text written to `target`.
    pub fn text_of(&self, target: &str) -> Option<&str> {
        self.0.iter().rev().find_map(|p| match p {
            Patch::SetText { target: t, text } if t == target => Some(text.as_str()),
            _ => None,
        })
    }

    /// Last markup written to `target`.
    pub fn html_of(&self, target: &str) -> Option<&str> {
        self.0.iter().rev().find_map(|p| match p {
            Patch::SetHtml { target: t, html } if t == target => Some(html.as_str()),
            _ => None,
        })
    }

    /// Last value written to attribute `name` of `target`.
    pub fn attribute_of(&self, target: &str, name: &str) -> Option<&str> {
        self.0.iter().rev().find_map(|p| match p {
            Patch::SetAttribute {
                target: t,
                name: n,
                value,
            } if t == target && n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Last value written to style `property` of `target`.
    pub fn style_of(&self, target: &str, property: &str) -> Option<&str> {
        self.0.iter().rev().find_map(|p| match p {
            Patch::SetStyle {
                target: t,
                property: n,
                value,
            } if t == target && n == property => Some(value.as_str()),
            _ => None,
        })
    }

    /// Whether any patch writes to `target`.
    pub fn touches(&self, target: &str) -> bool {
        self.0.iter().any(|p| p.target() == target)
    }
}

impl From<Vec<Patch>> for Patches {
    fn from(patches: Vec<Patch>) -> Self {
        Self(patches)
    }
}

impl IntoIterator for Patches {
    type Item = Patch;
    type IntoIter = std::vec::IntoIter<Patch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_return_last_write() {
        let patches = Patches::from(vec![
            Patch::text("cartCount", "1"),
            Patch::hidden("modal", false),
            Patch::text("cartCount", "2"),
            Patch::style(BODY, "overflow", "hidden"),
        ]);

        assert_eq!(patches.text_of("cartCount"), Some("2"));
        assert_eq!(patches.attribute_of("modal", "aria-hidden"), Some("false"));
        assert_eq!(patches.style_of(BODY, "overflow"), Some("hidden"));
        assert_eq!(patches.html_of("cartItems"), None);
        assert!(!patches.touches("cartTotal"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Patch::text("year", "2026")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"op": "set_text", "target": "year", "text": "2026"})
        );
    }
}
