//! Manifest rendering.
//!
//! Templates are registered once per renderer. Values are escaped with the
//! default handlebars escape, which is valid inside plist `<string>` nodes.

use super::{layout, template};
use handlebars::Handlebars;
use std::collections::BTreeMap;

const GENERAL: &str = "general";
const CHAPTER: &str = "chapter";
const PAGE: &str = "page";

/// Renders the three manifest documents of a bundle.
pub struct ManifestRenderer {
    handlebars: Handlebars<'static>,
}

impl ManifestRenderer {
    /// Registers the manifest templates.
    pub fn new() -> Result<Self, String> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);

        for (name, source) in [
            (GENERAL, template::GENERAL_MANIFEST),
            (CHAPTER, template::CHAPTER_MANIFEST),
            (PAGE, template::PAGE_MANIFEST),
        ] {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| format!("failed to register {name} manifest template: {e}"))?;
        }

        Ok(Self { handlebars })
    }

    /// Top-level manifest listing the single chapter and the cover image.
    pub fn general(&self, name: &str) -> Result<String, String> {
        let mut data = BTreeMap::new();
        data.insert("chapter", layout::chapter_folder(name));
        data.insert("image", layout::COVER_IMAGE_FILE.to_string());
        data.insert("name", name.to_string());
        self.render(GENERAL, &data)
    }

    /// Chapter manifest pointing at the initial page and the template page.
    pub fn chapter(&self, name: &str) -> Result<String, String> {
        let mut data = BTreeMap::new();
        data.insert("name", name.to_string());
        data.insert(
            "template_page",
            layout::page_folder(layout::TEMPLATE_PAGE_NAME),
        );
        data.insert("page", layout::page_folder(name));
        self.render(CHAPTER, &data)
    }

    /// Page manifest.
    pub fn page(&self, name: &str) -> Result<String, String> {
        let mut data = BTreeMap::new();
        data.insert("name", name.to_string());
        self.render(PAGE, &data)
    }

    fn render(&self, template: &str, data: &BTreeMap<&str, String>) -> Result<String, String> {
        self.handlebars
            .render(template, data)
            .map_err(|e| format!("failed to render {template} manifest: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_manifest_references_chapter_and_image() {
        let manifest = ManifestRenderer::new().unwrap().general("Demo").unwrap();

        assert!(manifest.contains("<string>Chapter Demo.chapter</string>"));
        assert!(manifest.contains("<string>bundle-cover.png</string>"));
        for key in [
            "Chapters",
            "ContentIdentifier",
            "ContentVersion",
            "DeploymentTarget",
            "DevelopmentRegion",
            "ImageReference",
            "Name",
            "Version",
            "UserModuleMode",
        ] {
            assert!(manifest.contains(&format!("<key>{key}</key>")), "missing {key}");
        }
    }

    #[test]
    fn chapter_manifest_lists_initial_page() {
        let manifest = ManifestRenderer::new().unwrap().chapter("Demo").unwrap();

        assert!(manifest.contains("<string>Template.page</string>"));
        assert!(manifest.contains("<string>Demo.page</string>"));
    }

    #[test]
    fn names_are_escaped() {
        let manifest = ManifestRenderer::new().unwrap().page("A & <B>").unwrap();

        assert!(manifest.contains("<string>A &amp; &lt;B&gt;</string>"));
    }
}
