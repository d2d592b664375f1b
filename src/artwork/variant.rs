//! Artwork variants and the default SteamGridDB set.

use serde::Serialize;

use crate::appid::ShortcutId;

/// One artwork image Steam looks up by file name in `config/grid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtworkVariant {
    pub name: String,
    pub suffix: String,
    pub url: String,
    pub extension: String,
}

impl ArtworkVariant {
    /// Build a variant; the extension is `ico` for `.ico` URLs and `png` otherwise.
    pub fn new(name: impl Into<String>, suffix: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        let extension = if url.ends_with(".ico") { "ico" } else { "png" };
        Self {
            name: name.into(),
            suffix: suffix.into(),
            url,
            extension: extension.to_string(),
        }
    }

    /// Build a variant named after its suffix.
    pub fn from_suffix(suffix: impl Into<String>, url: impl Into<String>) -> Self {
        let suffix = suffix.into();
        Self::new(label_for_suffix(&suffix), suffix, url)
    }

    /// File name for this variant under the given shortcut id.
    pub fn file_name(&self, id: ShortcutId) -> String {
        id.grid_file_name(&self.suffix, &self.extension)
    }
}

/// Human label for the suffixes Steam understands.
pub fn label_for_suffix(suffix: &str) -> String {
    match suffix {
        "p" => "portrait grid",
        "" => "main grid",
        "_hero" => "hero",
        "_logo" => "logo",
        "_icon" => "icon",
        other => other,
    }
    .to_string()
}

/// The five images for the Minecraft Splitscreen shortcut.
pub fn default_variants() -> Vec<ArtworkVariant> {
    vec![
        ArtworkVariant::from_suffix(
            "p",
            "https://cdn2.steamgriddb.com/grid/a73027901f88055aaa0fd1a9e25d36c7.png",
        ),
        ArtworkVariant::from_suffix(
            "",
            "https://cdn2.steamgriddb.com/grid/e353b610e9ce20f963b4cca5da565605.jpg",
        ),
        ArtworkVariant::from_suffix(
            "_hero",
            "https://cdn2.steamgriddb.com/hero/ecd812da02543c0269cfc2c56ab3c3c0.png",
        ),
        ArtworkVariant::from_suffix(
            "_logo",
            "https://cdn2.steamgriddb.com/logo/90915208c601cc8c86ad01250ee90c12.png",
        ),
        ArtworkVariant::from_suffix(
            "_icon",
            "https://cdn2.steamgriddb.com/icon/add7a048049671970976f3e18f21ade3.ico",
        ),
    ]
}
