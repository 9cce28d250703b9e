//! FluentBundle construction and message resolution

use crate::error::{I18nError, I18nResult};
use crate::{LabelKey, Locale};
use fluent::{FluentBundle, FluentResource};
use tracing::{debug, error};

/// Parse a locale's bundled source into a ready-to-query bundle
pub(crate) fn build_bundle(locale: Locale) -> I18nResult<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(locale.source().to_string()).map_err(|(_, errors)| {
        let errors: Vec<String> = errors.into_iter().map(|e| format!("{e:?}")).collect();
        error!("Failed to parse Fluent resource for {:?}: {:?}", locale, errors);
        I18nError::FluentParseError {
            locale: locale.code().to_string(),
            errors,
        }
    })?;

    let mut bundle = FluentBundle::new(vec![locale.to_language_identifier()?]);
    // Labels are spliced into HTML and SVG; no bidi isolation marks.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| I18nError::BundleError {
            locale: locale.code().to_string(),
            errors: errors.into_iter().map(|e| e.to_string()).collect(),
        })?;

    debug!("Built Fluent bundle for {:?}", locale);
    Ok(bundle)
}

/// Resolve one label to its display string
pub(crate) fn resolve(
    bundle: &FluentBundle<FluentResource>,
    locale: Locale,
    key: LabelKey,
) -> I18nResult<String> {
    let id = key.message_id();
    let pattern = bundle
        .get_message(id)
        .and_then(|message| message.value())
        .ok_or_else(|| I18nError::MessageNotFound {
            key: id.to_string(),
            locale: locale.code().to_string(),
        })?;

    let mut errors = Vec::new();
    let value = bundle.format_pattern(pattern, None, &mut errors);
    if !errors.is_empty() {
        return Err(I18nError::MessageFormatError {
            key: id.to_string(),
            locale: locale.code().to_string(),
            errors: errors.into_iter().map(|e| e.to_string()).collect(),
        });
    }

    Ok(value.into_owned())
}
