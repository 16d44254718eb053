//! Product detail modal.

use vitrine_commerce::catalog::Product;

use crate::config::HookIds;
use crate::patch::{Patch, Patches};

/// Modal state. The open state carries the product its add button targets.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Product),
}

/// Controller for the product modal.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Show `product`. Whatever was shown before is forgotten.
    pub fn open(&mut self, product: Product) {
        self.state = ModalState::Open(product);
    }

    /// Close the modal. Closing a closed modal changes nothing.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Product the add button currently targets.
    pub fn add_target(&self) -> Option<&Product> {
        match &self.state {
            ModalState::Open(product) => Some(product),
            ModalState::Closed => None,
        }
    }

    /// Writes that bring the modal in line with its state.
    pub fn patches(&self, hooks: &HookIds) -> Patches {
        match &self.state {
            ModalState::Closed => Patches::from(vec![Patch::hidden(&hooks.modal, true)]),
            ModalState::Open(product) => Patches::from(vec![
                Patch::attribute(&hooks.modal_img, "src", product.image.clone()),
                Patch::attribute(&hooks.modal_img, "alt", product.title.clone()),
                Patch::text(&hooks.modal_title, product.title.clone()),
                Patch::text(&hooks.modal_desc, product.description.clone()),
                Patch::text(&hooks.modal_price, product.price.display()),
                Patch::hidden(&hooks.modal, false),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_commerce::catalog::ProductAttributes;

    fn product() -> Product {
        let attrs = ProductAttributes::new("ps5", "PlayStation 5", "Sony", "499.99")
            .with_image("img/ps5.png")
            .with_description("Console");
        Product::read(&attrs).unwrap()
    }

    #[test]
    fn test_open_populates_fields() {
        let mut modal = ModalController::new();
        modal.open(product());

        let patches = modal.patches(&HookIds::default());
        assert_eq!(patches.text_of("modalTitle"), Some("PlayStation 5"));
        assert_eq!(patches.text_of("modalDesc"), Some("Console"));
        assert_eq!(patches.text_of("modalPrice"), Some("499,99\u{a0}\u{20ac}"));
        assert_eq!(patches.attribute_of("modalImg", "src"), Some("img/ps5.png"));
        assert_eq!(patches.attribute_of("modal", "aria-hidden"), Some("false"));
    }

    #[test]
    fn test_close_forgets_product() {
        let mut modal = ModalController::new();
        modal.open(product());
        assert_eq!(modal.add_target().map(|p| p.id.as_str()), Some("ps5"));

        modal.close();
        assert_eq!(modal.state(), &ModalState::Closed);
        assert!(modal.add_target().is_none());

        let patches = modal.patches(&HookIds::default());
        assert_eq!(patches.attribute_of("modal", "aria-hidden"), Some("true"));
        assert_eq!(patches.len(), 1);
    }

    #[test]
    fn test_reopen_replaces_target() {
        let mut modal = ModalController::new();
        modal.open(product());
        let other = Product::read(&ProductAttributes::new("xbox", "Xbox", "Microsoft", "450")).unwrap();
        modal.open(other);

        assert_eq!(modal.add_target().map(|p| p.id.as_str()), Some("xbox"));
    }
}
