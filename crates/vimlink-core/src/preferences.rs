//! Preference domain types and defaults.
//!
//! This module contains the flat preference record, the persisted key for
//! each field, and the descriptive metadata used to render a preferences
//! view. These are pure domain types with no infrastructure dependencies.

use std::path::PathBuf;

/// Default name passed to `--servername`.
pub const DEFAULT_SERVER_NAME: &str = "Unity";

/// Default comma-separated list of file suffixes opened in the editor.
pub const DEFAULT_CODE_EXTENSIONS: &str = ".cs,.shader,.h,.m,.c,.cpp,.txt,.md,.json";

/// Platform fallback for the editor executable when none was chosen.
pub fn default_editor_path() -> PathBuf {
    if cfg!(target_os = "windows") {
        PathBuf::from("gvim.exe")
    } else if cfg!(target_os = "linux") {
        PathBuf::from("/usr/bin/gvim")
    } else {
        PathBuf::from("/usr/local/bin/mvim")
    }
}

/// How the editor's `path` option is augmented when opening a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    /// Don't modify the path variable.
    None,
    /// Append `{assets}/**`.
    #[default]
    ProjectPath,
    /// Append `{assets}/Scripts/**`.
    ScriptPath,
}

impl PathMode {
    /// All modes, in persisted-integer order.
    pub const ALL: [Self; 3] = [Self::None, Self::ProjectPath, Self::ScriptPath];

    /// Integer persisted in the preference store.
    pub const fn as_int(self) -> i64 {
        match self {
            Self::None => 0,
            Self::ProjectPath => 1,
            Self::ScriptPath => 2,
        }
    }

    /// Decode a persisted integer; unknown values yield `None`.
    pub const fn from_int(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::ProjectPath),
            2 => Some(Self::ScriptPath),
            _ => None,
        }
    }

    /// Human-readable choice label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Don't modify path variable",
            Self::ProjectPath => "Add project path (Assets/**)",
            Self::ScriptPath => "Add script path (Assets/Scripts/**)",
        }
    }
}

impl std::fmt::Display for PathMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for PathMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "0" => Ok(Self::None),
            "project" | "project_path" | "1" => Ok(Self::ProjectPath),
            "scripts" | "script" | "script_path" | "2" => Ok(Self::ScriptPath),
            other => Err(format!(
                "unknown path mode '{other}' (expected none, project or scripts)"
            )),
        }
    }
}

/// Snapshot of every preference at one point in time.
///
/// The store itself is read lazily per field; this record is what the
/// synthesizer and launcher consume. No cross-field validation happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub editor_path: PathBuf,
    pub server_name: String,
    pub force_foreground: bool,
    pub generate_aux_project: bool,
    pub path_mode: PathMode,
    pub extra_commands: String,
    /// Raw comma-separated list, as persisted.
    pub code_extensions: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            editor_path: default_editor_path(),
            server_name: DEFAULT_SERVER_NAME.to_string(),
            force_foreground: false,
            generate_aux_project: true,
            path_mode: PathMode::default(),
            extra_commands: String::new(),
            code_extensions: DEFAULT_CODE_EXTENSIONS.to_string(),
        }
    }
}

impl Preferences {
    /// Notices a preferences view should surface for this combination.
    pub fn notices(&self) -> Vec<PreferenceNotice> {
        let mut notices = Vec::new();
        if self.code_extensions.is_empty() {
            notices.push(PreferenceNotice {
                level: NoticeLevel::Info,
                message: "All files will be opened in vim.".to_string(),
            });
        }
        // Some editor builds only run one +command from --remote-silent.
        if self.path_mode != PathMode::None && !self.extra_commands.trim().is_empty() {
            notices.push(PreferenceNotice {
                level: NoticeLevel::Warning,
                message: "Set 'path' and Extra commands may not play well together. \
                          If files aren't opened correctly, try removing extra commands."
                    .to_string(),
            });
        }
        notices
    }

    /// One row per field, in display order.
    pub fn rows(&self) -> Vec<PreferenceRow> {
        PreferenceField::ALL
            .iter()
            .map(|field| PreferenceRow {
                field: *field,
                value: self.display_value(*field),
            })
            .collect()
    }

    fn display_value(&self, field: PreferenceField) -> String {
        match field {
            PreferenceField::EditorPath => self.editor_path.display().to_string(),
            PreferenceField::ServerName => self.server_name.clone(),
            PreferenceField::ForceForeground => self.force_foreground.to_string(),
            PreferenceField::GenerateAuxProject => self.generate_aux_project.to_string(),
            PreferenceField::PathMode => self.path_mode.to_string(),
            PreferenceField::ExtraCommands => self.extra_commands.clone(),
            PreferenceField::CodeExtensions => self.code_extensions.clone(),
        }
    }
}

/// Identifies a single persisted preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceField {
    EditorPath,
    ServerName,
    ForceForeground,
    GenerateAuxProject,
    PathMode,
    ExtraCommands,
    CodeExtensions,
}

impl PreferenceField {
    /// Display order, with the chosen editor first.
    pub const ALL: [Self; 7] = [
        Self::EditorPath,
        Self::CodeExtensions,
        Self::GenerateAuxProject,
        Self::ForceForeground,
        Self::ServerName,
        Self::PathMode,
        Self::ExtraCommands,
    ];

    /// Key used in the preference store.
    pub const fn key(self) -> &'static str {
        match self {
            Self::EditorPath => "editor_path",
            Self::ServerName => "server_name",
            Self::ForceForeground => "force_foreground",
            Self::GenerateAuxProject => "generate_aux_project",
            Self::PathMode => "path_mode",
            Self::ExtraCommands => "extra_commands",
            Self::CodeExtensions => "code_extensions",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EditorPath => "Editor executable",
            Self::ServerName => "Vim server name",
            Self::ForceForeground => "Force foreground",
            Self::GenerateAuxProject => "Generate IDE project files",
            Self::PathMode => "Set 'path' in vim",
            Self::ExtraCommands => "Extra commands before filename",
            Self::CodeExtensions => "File extensions",
        }
    }

    pub const fn help(self) -> &'static str {
        match self {
            Self::EditorPath => "Executable launched to open files. Pick one with `vimlink use`.",
            Self::ServerName => {
                "The name to pass to --servername. Displayed at the top of Vim window."
            }
            Self::ForceForeground => {
                "Tell vim to put itself in the foreground when opening a file. \
                 Don't enable unless Vim's failing to foreground itself."
            }
            Self::GenerateAuxProject => {
                "Regenerate IDE project files on full sync and when files are added or moved."
            }
            Self::PathMode => {
                "Adds {project}/Assets/** or {project}/Assets/Scripts/** to vim's 'path' \
                 variable to improve behaviour of gf and :find."
            }
            Self::ExtraCommands => {
                "Pass more commands to vim (like +\"runtime unity.vim\" to do extra setup \
                 in ~/.vim/unity.vim)."
            }
            Self::CodeExtensions => {
                "Comma-separated list of file extensions to open in Vim. \
                 Clear it to open all files in vim."
            }
        }
    }

    /// Look a field up by its store key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl std::fmt::Display for PreferenceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Severity of a preference notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// Advisory message about the current preference combination.
///
/// Notices are never enforced; the synthesizer emits arguments regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceNotice {
    pub level: NoticeLevel,
    pub message: String,
}

/// A field paired with its current display value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceRow {
    pub field: PreferenceField,
    pub value: String,
}
