//! Shared helpers for driving the mapper against an in-memory host.
//!
//! `Scenario` provides an isolated environment (temp directory plus a
//! capturing host); `MappingFileBuilder` writes mapping documents to disk
//! without hand-assembled JSON strings.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use chanmap::{
    ChannelMapper, ConfigFormat, MapperOptions, MappingDocument, MediaRecord, MemoryHost, Stage,
    PLUGIN_KEY,
};

/// Output template that opts downloads into remapping.
pub const MAPPED_TEMPLATE: &str = "%(mapped_channel)s/%(title)s.%(ext)s";

/// Fluent builder for mapping documents written to disk.
#[derive(Default)]
pub struct MappingFileBuilder {
    document: MappingDocument,
}

impl MappingFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `original` to `mapped` under the `channel` field of `category`.
    pub fn channel_mapping(mut self, category: &str, original: &str, mapped: &str) -> Self {
        self.document
            .categories
            .entry(category.to_string())
            .or_default()
            .field
            .entry("channel".to_string())
            .or_default()
            .insert(original.to_string(), mapped.to_string());
        self
    }

    /// Sets the destination directory of `category`.
    pub fn home(mut self, category: &str, dir: &Path) -> Self {
        self.document
            .categories
            .entry(category.to_string())
            .or_default()
            .home = Some(dir.to_string_lossy().into_owned());
        self
    }

    /// Sets the temporary download directory of `category`.
    pub fn temp(mut self, category: &str, dir: &Path) -> Self {
        self.document
            .categories
            .entry(category.to_string())
            .or_default()
            .temp = Some(dir.to_string_lossy().into_owned());
        self
    }

    pub fn document(&self) -> &MappingDocument {
        &self.document
    }

    pub fn write(&self, path: &Path, format: ConfigFormat) {
        let content = format.encode(&self.document).expect("encode mapping");
        std::fs::write(path, content).expect("write mapping file");
    }
}

/// Isolated test environment: a temp directory for the mapping file and
/// routed directories, plus a host capturing warnings and notices.
pub struct Scenario {
    pub dir: TempDir,
    pub host: MemoryHost,
}

impl Scenario {
    /// Host registered at `pre_process` with the mapped output template.
    pub fn registered() -> Self {
        Self::at_stage(Stage::PreProcess)
    }

    /// Host registered at the given stage with the mapped output template.
    pub fn at_stage(when: Stage) -> Self {
        Self {
            dir: TempDir::new().expect("create temp directory"),
            host: MemoryHost::new()
                .with_output_template(MAPPED_TEMPLATE)
                .register(PLUGIN_KEY, when),
        }
    }

    /// Host whose output template never references the mapped channel.
    pub fn unmapped_template() -> Self {
        Self {
            dir: TempDir::new().expect("create temp directory"),
            host: MemoryHost::new()
                .with_output_template("%(title)s.%(ext)s")
                .register(PLUGIN_KEY, Stage::PreProcess),
        }
    }

    pub fn mapping_path(&self) -> PathBuf {
        self.dir.path().join("mapping.json")
    }

    /// A directory path inside the scenario's temp dir (not created yet).
    pub fn routed_dir(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes the builder's document and constructs a mapper reading it.
    pub fn mapper_with(&self, builder: &MappingFileBuilder) -> ChannelMapper {
        builder.write(&self.mapping_path(), ConfigFormat::Json);
        self.mapper_at(&self.mapping_path())
    }

    /// Constructs a mapper pointed at an arbitrary mapping path.
    pub fn mapper_at(&self, path: &Path) -> ChannelMapper {
        let options = MapperOptions::new().with_config(path.to_string_lossy().into_owned());
        ChannelMapper::new(&options, &self.host).expect("construct mapper")
    }
}

/// A record carrying just a channel name.
pub fn channel_record(channel: &str) -> MediaRecord {
    let mut record = MediaRecord::new();
    record.insert("channel", channel);
    record
}
