//! Metadata extraction from candidate source files
//!
//! Each candidate file documents its service with a doc block carrying an
//! `@alias` tag; the exported class name is taken from the declaration the
//! block documents (or an explicit `@name` tag). Extraction is asynchronous
//! and per-file failures never abort the run - the candidate is simply
//! dropped by the caller.

use crate::error::ExtractError;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::trace;

static DOC_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*.*?\*/").unwrap());
static ALIAS_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@alias\s+([A-Za-z_$][\w$]*)").unwrap());
static NAME_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@name\s+([A-Za-z_$][\w$]*)").unwrap());
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:export\s+(?:default\s+)?)?(?:class|function)\s+([A-Za-z_$][\w$]*)").unwrap()
});

/// Service metadata extracted from a candidate's documentation block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// Logical name application code will use to address this service
    pub alias: String,
    /// Exported class name backing the alias
    pub class_name: String,
}

/// Extracts service metadata from the file at `path`
///
/// Returns `Ok(None)` when the file is readable but carries no alias tag -
/// the file is not a service (a shared helper under the services root, for
/// example) and contributes nothing to resolution.
///
/// # Errors
///
/// Returns `ExtractError::Unreadable` if the file cannot be read, and
/// `ExtractError::MissingClassName` if an alias tag is present but no class
/// name can be derived from the documented declaration.
pub async fn extract(path: &Path) -> Result<Option<ServiceMetadata>, ExtractError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ExtractError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

    parse_metadata(path, &content)
}

/// Parses the first alias-tagged doc block out of `content`
fn parse_metadata(path: &Path, content: &str) -> Result<Option<ServiceMetadata>, ExtractError> {
    for block in DOC_BLOCK.find_iter(content) {
        let alias = match ALIAS_TAG.captures(block.as_str()) {
            Some(cap) => cap[1].to_string(),
            None => continue,
        };

        let class_name = NAME_TAG
            .captures(block.as_str())
            .map(|cap| cap[1].to_string())
            .or_else(|| {
                // The class name comes from the declaration the block
                // documents, so only look at the text after the block.
                DECLARATION
                    .captures(&content[block.end()..])
                    .map(|cap| cap[1].to_string())
            });

        return match class_name {
            Some(class_name) => {
                trace!(path = %path.display(), alias, class_name, "Extracted metadata");
                Ok(Some(ServiceMetadata { alias, class_name }))
            }
            None => Err(ExtractError::MissingClassName {
                path: path.to_path_buf(),
                alias,
            }),
        };
    }

    trace!(path = %path.display(), "No alias tag, not a service");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<Option<ServiceMetadata>, ExtractError> {
        parse_metadata(&PathBuf::from("test.js"), content)
    }

    #[test]
    fn test_alias_and_class_extracted() {
        let meta = parse(
            "/**\n * class for volume service\n * @alias volumeService\n */\nclass VolumeService {}\nexport default VolumeService;\n",
        )
        .unwrap()
        .unwrap();
        assert_eq!(meta.alias, "volumeService");
        assert_eq!(meta.class_name, "VolumeService");
    }

    #[test]
    fn test_export_default_class_declaration() {
        let meta = parse(
            "/** @alias channelService */\nexport default class ChannelService extends AbstractXhrService {}\n",
        )
        .unwrap()
        .unwrap();
        assert_eq!(meta.class_name, "ChannelService");
    }

    #[test]
    fn test_name_tag_overrides_declaration() {
        let meta = parse(
            "/**\n * @alias programService\n * @name DesktopProgramService\n */\nclass Renamed {}\n",
        )
        .unwrap()
        .unwrap();
        assert_eq!(meta.class_name, "DesktopProgramService");
    }

    #[test]
    fn test_file_without_alias_is_not_a_service() {
        let result = parse("/** shared helper */\nexport const clamp = (v) => v;\n").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_undocumented_file_is_not_a_service() {
        let result = parse("export default class Plain {}\n").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_alias_without_class_is_malformed() {
        let result = parse("/** @alias brokenService */\nconst x = 1;\n");
        assert!(matches!(
            result,
            Err(ExtractError::MissingClassName { alias, .. }) if alias == "brokenService"
        ));
    }

    #[test]
    fn test_first_tagged_block_wins() {
        let meta = parse(
            "/** preamble */\n/** @alias vodService */\nclass AbstractVodService {}\n/** @alias other */\nclass Other {}\n",
        )
        .unwrap()
        .unwrap();
        assert_eq!(meta.alias, "vodService");
        assert_eq!(meta.class_name, "AbstractVodService");
    }

    #[tokio::test]
    async fn test_missing_file_is_unreadable() {
        let result = extract(&PathBuf::from("/nonexistent/volumeService.js")).await;
        assert!(matches!(result, Err(ExtractError::Unreadable { .. })));
    }
}
