//! Document-element presentation attribute writer.

use platform::ModeAttribute;

/// Attribute name styling consumers key off. Present = dark, absent = light.
#[cfg(target_arch = "wasm32")]
const MODE_ATTRIBUTE_NAME: &str = "dark";

#[derive(Debug, Clone, Copy, Default)]
/// Browser attribute target writing the `dark` attribute on the document
/// element.
pub struct DocumentModeAttribute;

#[cfg(target_arch = "wasm32")]
fn document_root() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

impl ModeAttribute for DocumentModeAttribute {
    fn set_dark(&self, dark: bool) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(root) = document_root() else {
                return;
            };
            if dark {
                let _ = root.set_attribute(MODE_ATTRIBUTE_NAME, "");
            } else {
                let _ = root.remove_attribute(MODE_ATTRIBUTE_NAME);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = dark;
    }

    fn is_dark(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            document_root()
                .map(|root| root.has_attribute(MODE_ATTRIBUTE_NAME))
                .unwrap_or(false)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }
}
