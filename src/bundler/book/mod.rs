//! Bundle assembly.
//!
//! Builds the fixed bundle tree for a set of discovered modules. The bundle
//! path is always wiped first, so a bundle is never merged with a previous one.
//!
//! # Process
//!
//! 1. Remove whatever is at the bundle path
//! 2. Create the contents, chapter, page and resource folders
//! 3. Write the general, chapter and page manifests
//! 4. Write the page bodies
//! 5. Decode and write the cover image
//! 6. Copy every module's sources into `UserModules`
//!
//! The first failure aborts assembly.

pub mod layout;
mod manifest;
mod resources;
mod template;

pub use layout::BookLayout;
pub use manifest::ManifestRenderer;

use crate::bundler::{
    error::{BookError, StorageError},
    package::Module,
    utils::{Storage, resolve_path},
};
use std::path::{Path, PathBuf};

/// Assembles the bundle named `name` at `bundle_path` from `modules`.
pub async fn assemble<S: Storage>(
    storage: &S,
    bundle_path: &Path,
    name: &str,
    modules: &[Module],
) -> Result<(), BookError> {
    log::debug!("Assembling bundle at {}", bundle_path.display());
    storage.remove(bundle_path).await;

    let layout = BookLayout::new(bundle_path, name);
    let renderer = ManifestRenderer::new().map_err(|reason| BookError::Manifest {
        path: layout.contents.clone(),
        reason,
    })?;

    make_structure(storage, &layout).await?;
    write_manifests(storage, &renderer, &layout, name).await?;
    write_pages(storage, &layout).await?;
    write_resources(storage, &layout).await?;

    for module in modules {
        add_module(storage, &layout, module).await?;
    }

    Ok(())
}

/// Creates `path`, accepting an existing folder.
async fn ensure_folder<S: Storage>(storage: &S, path: &Path) -> Result<(), StorageError> {
    match storage.create_folder(path).await {
        Ok(_) | Err(StorageError::AlreadyExists { .. }) => Ok(()),
        Err(e) => Err(e),
    }
}

async fn make_structure<S: Storage>(storage: &S, layout: &BookLayout) -> Result<(), BookError> {
    for folder in [&layout.contents, &layout.chapter] {
        ensure_folder(storage, folder)
            .await
            .map_err(|e| BookError::Manifest {
                path: folder.join(layout::MANIFEST_FILE),
                reason: e.to_string(),
            })?;
    }

    for page in [&layout.page, &layout.template_page] {
        ensure_folder(storage, page)
            .await
            .map_err(|source| BookError::Page {
                path: page.clone(),
                source,
            })?;
    }

    ensure_folder(storage, &layout.resources)
        .await
        .map_err(|e| BookError::Resource {
            path: layout.resources.clone(),
            reason: e.to_string(),
        })
}

async fn write_manifests<S: Storage>(
    storage: &S,
    renderer: &ManifestRenderer,
    layout: &BookLayout,
    name: &str,
) -> Result<(), BookError> {
    let manifests = [
        (&layout.contents, renderer.general(name)),
        (&layout.chapter, renderer.chapter(name)),
        (&layout.page, renderer.page(name)),
        (&layout.template_page, renderer.page(layout::TEMPLATE_PAGE_NAME)),
    ];

    for (folder, rendered) in manifests {
        let path = folder.join(layout::MANIFEST_FILE);
        let content = rendered.map_err(|reason| BookError::Manifest {
            path: path.clone(),
            reason,
        })?;

        storage
            .create_file(content.as_bytes(), &path)
            .await
            .map_err(|e| BookError::Manifest {
                path: path.clone(),
                reason: e.to_string(),
            })?;
    }

    Ok(())
}

async fn write_pages<S: Storage>(storage: &S, layout: &BookLayout) -> Result<(), BookError> {
    for page in [&layout.page, &layout.template_page] {
        storage
            .create_file(
                template::PAGE_SOURCE.as_bytes(),
                &page.join(layout::PAGE_BODY_FILE),
            )
            .await
            .map_err(|source| BookError::Page {
                path: page.clone(),
                source,
            })?;
    }
    Ok(())
}

async fn write_resources<S: Storage>(storage: &S, layout: &BookLayout) -> Result<(), BookError> {
    let path = layout.resources.join(layout::COVER_IMAGE_FILE);
    let image = resources::cover_image().map_err(|e| BookError::Resource {
        path: path.clone(),
        reason: format!("invalid embedded image: {e}"),
    })?;

    storage
        .create_file(&image, &path)
        .await
        .map_err(|e| BookError::Resource {
            path: path.clone(),
            reason: e.to_string(),
        })?;
    Ok(())
}

async fn add_module<S: Storage>(
    storage: &S,
    layout: &BookLayout,
    module: &Module,
) -> Result<(), BookError> {
    let invalid = |source: StorageError| BookError::InvalidModule {
        module: module.name.clone(),
        source,
    };

    let sources_path = layout.module_sources(&module.name);
    ensure_folder(storage, &sources_path).await.map_err(invalid)?;

    for source in &module.sources {
        let file = source_path(module, source, &sources_path).map_err(invalid)?;
        storage
            .copy(&file, &sources_path, true)
            .await
            .map_err(invalid)?;
    }

    log::info!(
        "Added module {} ({} sources)",
        module.name,
        module.sources.len()
    );
    Ok(())
}

fn source_path(module: &Module, source: &str, sources_path: &Path) -> Result<PathBuf, StorageError> {
    resolve_path(&module.path, source).map_err(|e| StorageError::NotCopied {
        from: module.path.join(source),
        to: sources_path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{package::ModuleKind, settings::Language, utils::LocalStorage};

    fn module(root: &Path, name: &str, sources: &[&str]) -> Module {
        Module {
            name: name.to_string(),
            kind: ModuleKind::Library,
            language: Language::Swift,
            path: root.to_path_buf(),
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn builds_full_tree() {
        let temp = tempfile::tempdir().unwrap();
        let sources = temp.path().join("Alpha/Sources/AlphaCore");
        std::fs::create_dir_all(sources.join("Sub")).unwrap();
        std::fs::write(sources.join("A.swift"), "struct A {}").unwrap();
        std::fs::write(sources.join("Sub/B.swift"), "struct B {}").unwrap();
        let bundle = temp.path().join("Demo.bundle");

        assemble(
            &LocalStorage::new(),
            &bundle,
            "Demo",
            &[module(&sources, "AlphaCore", &["A.swift", "Sub/../Sub/B.swift"])],
        )
        .await
        .unwrap();

        let contents = bundle.join("Contents");
        let chapter = contents.join("Chapters/Chapter Demo.chapter");
        assert!(contents.join("Manifest.plist").is_file());
        assert!(chapter.join("Manifest.plist").is_file());
        for page in ["Demo.page", "Template.page"] {
            assert!(chapter.join("Pages").join(page).join("main.source").is_file());
            assert!(chapter.join("Pages").join(page).join("Manifest.plist").is_file());
        }
        assert!(contents.join("PrivateResources/bundle-cover.png").is_file());
        let module_sources = contents.join("UserModules/AlphaCore.module/Sources");
        assert!(module_sources.join("A.swift").is_file());
        assert!(module_sources.join("B.swift").is_file());
    }

    #[tokio::test]
    async fn missing_source_names_the_module() {
        let temp = tempfile::tempdir().unwrap();
        let bundle = temp.path().join("Demo.bundle");

        let result = assemble(
            &LocalStorage::new(),
            &bundle,
            "Demo",
            &[module(temp.path(), "Broken", &["Nope.swift"])],
        )
        .await;

        assert!(matches!(
            result,
            Err(BookError::InvalidModule { ref module, .. }) if module == "Broken"
        ));
    }
}
