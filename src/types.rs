// src/types.rs
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Every concurrency idiom the detector catalog can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Idiom {
    ChannelMake,
    ChannelSend,
    ChannelReceive,
    MutexDecl,
    RwMutexDecl,
    WaitGroupDecl,
    OnceDecl,
    LockerDecl,
    MutexField,
    RwMutexField,
    WaitGroupField,
    OnceField,
    LockerField,
    Lock,
    Unlock,
    WaitGroupAdd,
    WaitGroupDone,
    WaitGroupWait,
    NewCond,
    CondSignal,
    CondBroadcast,
    OnceDo,
}

/// Coarse grouping used for console coloring and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Channel,
    Lock,
    WaitGroup,
    Once,
    Cond,
}

impl Idiom {
    /// Stable snake_case label, identical to the JSON `idiom` field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ChannelMake => "channel_make",
            Self::ChannelSend => "channel_send",
            Self::ChannelReceive => "channel_receive",
            Self::MutexDecl => "mutex_decl",
            Self::RwMutexDecl => "rw_mutex_decl",
            Self::WaitGroupDecl => "wait_group_decl",
            Self::OnceDecl => "once_decl",
            Self::LockerDecl => "locker_decl",
            Self::MutexField => "mutex_field",
            Self::RwMutexField => "rw_mutex_field",
            Self::WaitGroupField => "wait_group_field",
            Self::OnceField => "once_field",
            Self::LockerField => "locker_field",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::WaitGroupAdd => "wait_group_add",
            Self::WaitGroupDone => "wait_group_done",
            Self::WaitGroupWait => "wait_group_wait",
            Self::NewCond => "new_cond",
            Self::CondSignal => "cond_signal",
            Self::CondBroadcast => "cond_broadcast",
            Self::OnceDo => "once_do",
        }
    }

    #[must_use]
    pub fn family(self) -> Family {
        match self {
            Self::ChannelMake | Self::ChannelSend | Self::ChannelReceive => Family::Channel,
            Self::MutexDecl
            | Self::RwMutexDecl
            | Self::LockerDecl
            | Self::MutexField
            | Self::RwMutexField
            | Self::LockerField
            | Self::Lock
            | Self::Unlock => Family::Lock,
            Self::WaitGroupDecl
            | Self::WaitGroupField
            | Self::WaitGroupAdd
            | Self::WaitGroupDone
            | Self::WaitGroupWait => Family::WaitGroup,
            Self::OnceDecl | Self::OnceField | Self::OnceDo => Family::Once,
            Self::NewCond | Self::CondSignal | Self::CondBroadcast => Family::Cond,
        }
    }
}

impl fmt::Display for Idiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source location of a finding. Line and column are 1-based; the column
/// counts bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub fn new(file: &Path, point: tree_sitter::Point) -> Self {
        Self {
            file: file.to_path_buf(),
            line: point.row + 1,
            column: point.column + 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// Buffer argument of a channel allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Buffer {
    Unbuffered,
    /// Integer literal, kept verbatim (`5`, `0x10`, `1_000`).
    Literal(String),
    /// Any other literal kind (`2.0`, `'a'`, `"x"`).
    NonInteger(String),
    /// Arbitrary expression, rendered.
    Computed(String),
}

/// Operand of a receive: a bare identifier or a rendered expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Operand {
    Ident(String),
    Expr(String),
}

/// Idiom-specific payload of a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Detail {
    Channel { element_type: String, buffer: Buffer },
    Send { channel: String, value: String },
    Receive { channel: Operand },
    Declared { name: String },
    Field { name: String },
    Receiver { receiver: String },
    None,
}

impl Detail {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// One reported idiom occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub idiom: Idiom,
    #[serde(flatten)]
    pub position: Position,
    #[serde(skip_serializing_if = "Detail::is_none")]
    pub detail: Detail,
}

impl Finding {
    #[must_use]
    pub fn new(idiom: Idiom, position: Position, detail: Detail) -> Self {
        Self { idiom, position, detail }
    }

    /// Human readable description, without the location prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match (&self.detail, self.idiom) {
            (Detail::Channel { element_type, buffer }, _) => channel_message(element_type, buffer),
            (Detail::Send { channel, value }, _) => {
                format!("found a send to channel {channel} for value {value}")
            }
            (Detail::Receive { channel: Operand::Ident(name) }, _) => {
                format!("found a read of channel {name}")
            }
            (Detail::Receive { channel: Operand::Expr(expr) }, _) => {
                format!("found a read of channel from expr {expr}")
            }
            (Detail::Declared { name }, idiom) => {
                format!("found declaration of {} {name}", object_noun(idiom))
            }
            (Detail::Field { name }, idiom) => {
                format!("found declaration of {} field {name}", object_noun(idiom))
            }
            (Detail::Receiver { receiver }, idiom) => {
                format!("found call of {} on {receiver}", method_name(idiom))
            }
            (Detail::None, Idiom::NewCond) => "found call of sync.NewCond".to_string(),
            (Detail::None, idiom) => format!("found {idiom}"),
        }
    }
}

fn channel_message(element_type: &str, buffer: &Buffer) -> String {
    match buffer {
        Buffer::Unbuffered => format!("found a channel of type {element_type}"),
        Buffer::Literal(size) => {
            format!("found a channel of type {element_type} with literal buffer size {size}")
        }
        Buffer::NonInteger(size) => {
            format!("found a channel of type {element_type} with a buffer size {size}")
        }
        Buffer::Computed(expr) => {
            format!("found a channel of type {element_type} with a computed buffer size {expr}")
        }
    }
}

fn object_noun(idiom: Idiom) -> &'static str {
    match idiom {
        Idiom::MutexDecl | Idiom::MutexField => "mutex",
        Idiom::RwMutexDecl | Idiom::RwMutexField => "rwmutex",
        Idiom::WaitGroupDecl | Idiom::WaitGroupField => "waitgroup",
        Idiom::OnceDecl | Idiom::OnceField => "once",
        Idiom::LockerDecl | Idiom::LockerField => "locker",
        _ => "object",
    }
}

fn method_name(idiom: Idiom) -> &'static str {
    match idiom {
        Idiom::Lock => "Lock",
        Idiom::Unlock => "Unlock",
        Idiom::WaitGroupAdd => "Add",
        Idiom::WaitGroupDone => "Done",
        Idiom::WaitGroupWait => "Wait",
        Idiom::CondSignal => "Signal",
        Idiom::CondBroadcast => "Broadcast",
        Idiom::OnceDo => "Do",
        _ => "method",
    }
}

/// Analysis results for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
    /// Set when the file could not be read or parsed; `findings` is then empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    #[must_use]
    pub fn ok(path: &Path, findings: Vec<Finding>) -> Self {
        Self { path: path.to_path_buf(), findings, error: None }
    }

    #[must_use]
    pub fn failed(path: &Path, error: String) -> Self {
        Self { path: path.to_path_buf(), findings: Vec::new(), error: Some(error) }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Aggregated results from scanning multiple files, in enumeration order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
    pub total_findings: usize,
    pub failed_files: usize,
    pub duration_ms: u128,
}

impl ScanReport {
    #[must_use]
    pub fn from_files(files: Vec<FileReport>, duration_ms: u128) -> Self {
        Self {
            total_findings: files.iter().map(|f| f.findings.len()).sum(),
            failed_files: files.iter().filter(|f| f.is_failed()).count(),
            files,
            duration_ms,
        }
    }

    /// Iterates every finding, file by file, in emission order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.files.iter().flat_map(|f| f.findings.iter())
    }

    /// Number of findings per idiom; idioms with no findings are absent.
    #[must_use]
    pub fn counts_by_idiom(&self) -> BTreeMap<Idiom, usize> {
        let mut counts = BTreeMap::new();
        for finding in self.findings() {
            *counts.entry(finding.idiom).or_insert(0) += 1;
        }
        counts
    }
}
