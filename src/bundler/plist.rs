//! `Info.plist` descriptor generation.

use super::{BundleLayout, Settings, error::Result, names};
use plist::{Dictionary, Value};

/// Writes the bundle descriptor to `Contents/Info.plist`.
///
/// The key set is fixed; only the identifier, bundle name, and short version
/// string vary with the settings. `CFBundleShortVersionString` falls back to
/// `"1"` when no version was supplied.
pub async fn write_descriptor(settings: &Settings, layout: &BundleLayout) -> Result<()> {
    let path = layout.info_plist();
    log::info!("Writing descriptor: {}", path.display());

    let info = descriptor(settings);

    // plist serializes synchronously; the descriptor is tiny
    Value::Dictionary(info).to_file_xml(&path)?;
    Ok(())
}

/// Builds the descriptor dictionary from the settings.
fn descriptor(settings: &Settings) -> Dictionary {
    let locales: Vec<Value> = names::LOCALIZED_BUNDLE_NAMES
        .iter()
        .map(|(locale, _)| Value::from(*locale))
        .collect();

    let mut info = Dictionary::new();
    info.insert("CFBundleDisplayName".into(), names::DISPLAY_NAME.into());
    info.insert("CFBundleExecutable".into(), names::EXECUTABLE_NAME.into());
    info.insert("CFBundleIconFile".into(), names::ICON_FILE_NAME.into());
    info.insert(
        "CFBundleIdentifier".into(),
        settings.bundle_identifier().into(),
    );
    info.insert("CFBundleInfoDictionaryVersion".into(), "6.0".into());
    info.insert("CFBundleLocalizations".into(), Value::Array(locales));
    info.insert("CFBundleName".into(), settings.bundle_name().into());
    info.insert("CFBundlePackageType".into(), "APPL".into());
    info.insert(
        "CFBundleShortVersionString".into(),
        settings.version_or_default().into(),
    );
    info.insert("CFBundleSignature".into(), "???".into());
    info.insert("CFBundleVersion".into(), names::DEFAULT_VERSION.into());
    info.insert("LSHasLocalizedDisplayName".into(), true.into());
    info
}
