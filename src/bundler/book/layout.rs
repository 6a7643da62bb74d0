//! Names and folder layout of a bundle.
//!
//! ```text
//! <name>.bundle/Contents/
//!     Manifest.plist
//!     Chapters/Chapter <name>.chapter/
//!         Manifest.plist
//!         Pages/<name>.page/{main.source, Manifest.plist}
//!         Pages/Template.page/{main.source, Manifest.plist}
//!     PrivateResources/bundle-cover.png
//!     UserModules/<module>.module/Sources/...
//! ```

use std::path::{Path, PathBuf};

pub const BUNDLE_EXTENSION: &str = "bundle";
pub const CHAPTER_EXTENSION: &str = "chapter";
pub const PAGE_EXTENSION: &str = "page";
pub const MODULE_EXTENSION: &str = "module";

pub const CONTENTS_FOLDER: &str = "Contents";
pub const CHAPTERS_FOLDER: &str = "Chapters";
pub const PAGES_FOLDER: &str = "Pages";
pub const RESOURCES_FOLDER: &str = "PrivateResources";
pub const USER_MODULES_FOLDER: &str = "UserModules";
pub const SOURCES_FOLDER: &str = "Sources";

pub const MANIFEST_FILE: &str = "Manifest.plist";
pub const PAGE_BODY_FILE: &str = "main.source";
pub const TEMPLATE_PAGE_NAME: &str = "Template";
pub const COVER_IMAGE_FILE: &str = "bundle-cover.png";

/// `<name>.bundle`
pub fn bundle_folder(name: &str) -> String {
    format!("{name}.{BUNDLE_EXTENSION}")
}

/// `Chapter <name>`
pub fn chapter_name(name: &str) -> String {
    format!("Chapter {name}")
}

/// `Chapter <name>.chapter`
pub fn chapter_folder(name: &str) -> String {
    format!("{}.{CHAPTER_EXTENSION}", chapter_name(name))
}

/// `<name>.page`
pub fn page_folder(name: &str) -> String {
    format!("{name}.{PAGE_EXTENSION}")
}

/// `<name>.module`
pub fn module_folder(name: &str) -> String {
    format!("{name}.{MODULE_EXTENSION}")
}

/// Absolute folders of one bundle.
#[derive(Debug, Clone)]
pub struct BookLayout {
    pub contents: PathBuf,
    pub resources: PathBuf,
    pub chapter: PathBuf,
    pub page: PathBuf,
    pub template_page: PathBuf,
    pub user_modules: PathBuf,
}

impl BookLayout {
    pub fn new(bundle_path: &Path, name: &str) -> Self {
        let contents = bundle_path.join(CONTENTS_FOLDER);
        let chapter = contents.join(CHAPTERS_FOLDER).join(chapter_folder(name));
        let pages = chapter.join(PAGES_FOLDER);

        Self {
            resources: contents.join(RESOURCES_FOLDER),
            page: pages.join(page_folder(name)),
            template_page: pages.join(page_folder(TEMPLATE_PAGE_NAME)),
            user_modules: contents.join(USER_MODULES_FOLDER),
            chapter,
            contents,
        }
    }

    /// `UserModules/<module>.module/Sources`
    pub fn module_sources(&self, module: &str) -> PathBuf {
        self.user_modules
            .join(module_folder(module))
            .join(SOURCES_FOLDER)
    }
}
