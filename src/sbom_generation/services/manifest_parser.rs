use crate::sbom_generation::domain::{PartRecord, SnapManifest};
use crate::shared::Result;
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_yaml_ng::Value;
use std::fmt;

/// Top-level keys of snapcraft.yaml that the SBOM needs
///
/// Scalars are deserialized as `String` so the YAML text is kept verbatim
/// (`source-tag: 1.10` stays `"1.10"` instead of becoming the float `1.1`).
#[derive(Debug, Deserialize)]
struct RawManifest {
    name: Option<String>,
    version: Option<String>,
    summary: Option<String>,
    parts: Option<RawParts>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawPart {
    source: Option<String>,
    source_type: Option<String>,
    source_tag: Option<String>,
    source_branch: Option<String>,
    source_commit: Option<String>,
    source_depth: Option<String>,
    plugin: Option<String>,
}

/// Parts in manifest order; bodies that are not mappings are kept as `None`
#[derive(Debug, Default)]
struct RawParts(Vec<(String, Option<RawPart>)>);

impl<'de> Deserialize<'de> for RawParts {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PartsVisitor;

        impl<'de> Visitor<'de> for PartsVisitor {
            type Value = RawParts;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping of part names to definitions")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<RawParts, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut parts = Vec::new();
                while let Some(name) = map.next_key::<String>()? {
                    let PartBody(body) = map.next_value()?;
                    parts.push((name, body));
                }
                Ok(RawParts(parts))
            }
        }

        deserializer.deserialize_map(PartsVisitor)
    }
}

struct PartBody(Option<RawPart>);

impl<'de> Deserialize<'de> for PartBody {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BodyVisitor;

        impl<'de> Visitor<'de> for BodyVisitor {
            type Value = PartBody;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a part definition")
            }

            fn visit_map<A>(self, map: A) -> std::result::Result<PartBody, A::Error>
            where
                A: MapAccess<'de>,
            {
                RawPart::deserialize(MapAccessDeserializer::new(map)).map(|p| PartBody(Some(p)))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<PartBody, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(PartBody(None))
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<PartBody, E> {
                Ok(PartBody(None))
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<PartBody, E> {
                Ok(PartBody(None))
            }

            fn visit_str<E: de::Error>(self, _: &str) -> std::result::Result<PartBody, E> {
                Ok(PartBody(None))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<PartBody, E> {
                Ok(PartBody(None))
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<PartBody, E> {
                Ok(PartBody(None))
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<PartBody, E> {
                Ok(PartBody(None))
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<PartBody, E> {
                Ok(PartBody(None))
            }
        }

        deserializer.deserialize_any(BodyVisitor)
    }
}

/// ManifestParser service for turning snapcraft YAML into a `SnapManifest`
///
/// Only the keys the SBOM needs are read; everything else in the manifest is
/// ignored, and no schema validation is attempted. Parts without a `source`
/// (or whose body is not a mapping) are skipped.
pub struct ManifestParser;

impl ManifestParser {
    /// Parses snapcraft.yaml content
    ///
    /// # Errors
    /// Returns an error if:
    /// - The content is not valid YAML
    /// - The document root is not a mapping
    /// - `parts` is present but is not a mapping
    /// - A recognised part or snap field holds a list or mapping instead of a scalar
    pub fn parse(content: &str) -> Result<SnapManifest> {
        Self::check_shape(content)?;

        let raw: RawManifest = serde_yaml_ng::from_str(content)
            .map_err(|e| anyhow::anyhow!("Invalid manifest field: {}", e))?;

        let parts = raw
            .parts
            .unwrap_or_default()
            .0
            .into_iter()
            .filter_map(|(name, body)| Self::build_record(name, body?))
            .collect();

        Ok(SnapManifest::new(raw.name, raw.version, raw.summary, parts))
    }

    /// Structural checks done on the untyped document so errors stay readable
    fn check_shape(content: &str) -> Result<()> {
        let document: Value = serde_yaml_ng::from_str(content)
            .map_err(|e| anyhow::anyhow!("Invalid YAML: {}", e))?;

        let root = document
            .as_mapping()
            .ok_or_else(|| anyhow::anyhow!("Manifest root must be a mapping"))?;

        match root.get("parts") {
            None | Some(Value::Null) | Some(Value::Mapping(_)) => Ok(()),
            Some(_) => anyhow::bail!("'parts' must be a mapping of part names to definitions"),
        }
    }

    fn build_record(name: String, part: RawPart) -> Option<PartRecord> {
        Some(
            PartRecord::new(name, part.source?)
                .with_source_type(part.source_type)
                .with_source_tag(part.source_tag)
                .with_source_branch(part.source_branch)
                .with_source_commit(part.source_commit)
                .with_source_depth(part.source_depth)
                .with_plugin(part.plugin),
        )
    }
}
