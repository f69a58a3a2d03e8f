//! Localized display-name strings.

use super::{BundleLayout, error::{ErrorExt, Result}, names, utils::fs};

/// UTF-16LE byte order mark, written ahead of every strings file.
const BOM_UTF16_LE: [u8; 2] = [0xFF, 0xFE];

/// Writes `InfoPlist.strings` for every configured locale.
///
/// Each file lands in `Contents/Resources/<locale>.lproj/` and carries the
/// localized `CFBundleName` and `CFBundleDisplayName`, encoded UTF-16LE with
/// a BOM as the platform expects.
pub async fn write_localizations(layout: &BundleLayout) -> Result<()> {
    for (locale, name) in names::LOCALIZED_BUNDLE_NAMES {
        let lproj = layout.resources_dir().join(format!("{}.lproj", locale));
        fs::create_dir_all(&lproj, false)
            .await
            .fs_context("creating lproj directory", &lproj)?;

        let path = lproj.join("InfoPlist.strings");
        tokio::fs::write(&path, strings_file(name))
            .await
            .fs_context("writing localization strings", &path)?;
        log::debug!("✓ Localized {}: {}", locale, name);
    }
    Ok(())
}

/// Encodes the two localization entries as UTF-16LE with BOM.
fn strings_file(name: &str) -> Vec<u8> {
    let content = format!(
        "CFBundleName = \"{name}\";\nCFBundleDisplayName = \"{name}\";\n"
    );

    let mut bytes = Vec::with_capacity(BOM_UTF16_LE.len() + content.len() * 2);
    bytes.extend_from_slice(&BOM_UTF16_LE);
    for unit in content.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}
