use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directory roles a host exposes for rerouting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// Final destination directory for finished downloads.
    Home,
    /// Directory for in-flight download artifacts.
    Temp,
}

impl PathKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PathKind::Home => "home",
            PathKind::Temp => "temp",
        }
    }
}

/// Lifecycle stages a post-processor can be registered at, in pipeline order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    PreProcess,
    AfterFilter,
    Video,
    BeforeDl,
    #[default]
    PostProcess,
    AfterMove,
    AfterVideo,
    Playlist,
}

impl Stage {
    pub const ALL: &'static [Stage] = &[
        Stage::PreProcess,
        Stage::AfterFilter,
        Stage::Video,
        Stage::BeforeDl,
        Stage::PostProcess,
        Stage::AfterMove,
        Stage::AfterVideo,
        Stage::Playlist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::PreProcess => "pre_process",
            Stage::AfterFilter => "after_filter",
            Stage::Video => "video",
            Stage::BeforeDl => "before_dl",
            Stage::PostProcess => "post_process",
            Stage::AfterMove => "after_move",
            Stage::AfterVideo => "after_video",
            Stage::Playlist => "playlist",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stage name is not part of the lifecycle vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown lifecycle stage '{0}'")]
pub struct UnknownStage(pub String);

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .iter()
            .copied()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| UnknownStage(s.to_string()))
    }
}

/// Registration descriptor for a post-processor known to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostprocessorSpec {
    pub key: String,
    #[serde(default)]
    pub when: Stage,
}

impl PostprocessorSpec {
    pub fn new(key: impl Into<String>, when: Stage) -> Self {
        Self {
            key: key.into(),
            when,
        }
    }
}

/// Capabilities a hosting download pipeline exposes to a post-processor.
///
/// The host owns the parameter store; post-processors read templates and
/// rewrite directory parameters only through this seam.
pub trait Host {
    /// Currently configured directory for `kind`, if any.
    fn path(&self, kind: PathKind) -> Option<&Path>;

    /// Points the directory for `kind` at a new location.
    fn set_path(&mut self, kind: PathKind, path: PathBuf);

    /// The active output filename template.
    fn output_template(&self) -> Option<&str>;

    /// Post-processors registered with the host, in registration order.
    fn postprocessors(&self) -> &[PostprocessorSpec];

    /// Surfaces a warning to the operator.
    fn warn(&self, message: &str);

    /// Prints an informational line for the operator.
    fn to_screen(&self, message: &str);
}

/// In-memory host for tests and for embedding without a full pipeline.
///
/// Warnings and screen output are captured for later inspection.
#[derive(Debug, Default)]
pub struct MemoryHost {
    home: Option<PathBuf>,
    temp: Option<PathBuf>,
    output_template: Option<String>,
    postprocessors: Vec<PostprocessorSpec>,
    warnings: RefCell<Vec<String>>,
    notices: RefCell<Vec<String>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_template(mut self, template: impl Into<String>) -> Self {
        self.output_template = Some(template.into());
        self
    }

    pub fn with_path(mut self, kind: PathKind, path: impl Into<PathBuf>) -> Self {
        match kind {
            PathKind::Home => self.home = Some(path.into()),
            PathKind::Temp => self.temp = Some(path.into()),
        }
        self
    }

    /// Registers a post-processor at the given stage.
    pub fn register(mut self, key: impl Into<String>, when: Stage) -> Self {
        self.postprocessors.push(PostprocessorSpec::new(key, when));
        self
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }
}

impl Host for MemoryHost {
    fn path(&self, kind: PathKind) -> Option<&Path> {
        match kind {
            PathKind::Home => self.home.as_deref(),
            PathKind::Temp => self.temp.as_deref(),
        }
    }

    fn set_path(&mut self, kind: PathKind, path: PathBuf) {
        match kind {
            PathKind::Home => self.home = Some(path),
            PathKind::Temp => self.temp = Some(path),
        }
    }

    fn output_template(&self) -> Option<&str> {
        self.output_template.as_deref()
    }

    fn postprocessors(&self) -> &[PostprocessorSpec] {
        &self.postprocessors
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn to_screen(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}
