//! Remote-server argument synthesis.
//!
//! Builds the argument string handed to a GUI Vim so that an already
//! running instance (addressed by `--servername`) opens a file and moves
//! the cursor. Everything here is pure: no I/O, no preference reads.
//!
//! Token order is fixed: server flags and the cursor command come first,
//! then user extra commands, then the `path` fragment, and the quoted file
//! path is always the last token. Vim applies `+command` arguments in order
//! before opening the trailing file argument.

use std::path::{Path, PathBuf};

use crate::preferences::{PathMode, Preferences};

/// Host-provided project locations used for path augmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Top-level asset directory (`{project}/Assets`).
    pub assets_dir: PathBuf,
}

impl ProjectPaths {
    /// Layout for a project rooted at `root`.
    pub fn from_project_root(root: &Path) -> Self {
        Self {
            assets_dir: root.join("Assets"),
        }
    }

    /// Scripts subdirectory of the asset tree.
    pub fn scripts_dir(&self) -> PathBuf {
        self.assets_dir.join("Scripts")
    }
}

/// The `+"set path+=..."` command for `mode`, or an empty string for
/// [`PathMode::None`].
pub fn path_fragment(mode: PathMode, project: &ProjectPaths) -> String {
    let dir = match mode {
        PathMode::None => return String::new(),
        PathMode::ProjectPath => project.assets_dir.clone(),
        PathMode::ScriptPath => project.scripts_dir(),
    };
    format!("+\"set path+={}/**\"", dir.display())
}

/// Build the argument string that opens `file_path` at `line`/`column`.
///
/// Negative columns (the host's "no column" sentinel) become 0, which Vim's
/// `cursor()` treats as "keep the current column". Lines are clamped the
/// same way; line 0 lets plugins such as last-position recall decide.
///
/// The file path is wrapped in double quotes and not otherwise escaped, so
/// the string only tokenises cleanly for paths without `"`.
pub fn build_arguments(
    file_path: &Path,
    line: i32,
    column: i32,
    prefs: &Preferences,
    project: &ProjectPaths,
) -> String {
    let column = column.max(0);
    let line = line.max(0);
    let path = path_fragment(prefs.path_mode, project);

    format!(
        "--servername {} --remote-silent +\"call cursor({line},{column})\" {} {} \"{}\"",
        prefs.server_name,
        prefs.extra_commands,
        path,
        file_path.display()
    )
}

/// Arguments for the helper invocation that asks the server `server_name`
/// to raise itself, then quits the helper.
///
/// `--clean` skips loading the user's vimrc so the helper returns quickly.
pub fn build_foreground_arguments(server_name: &str) -> String {
    format!("--clean +\"call remote_foreground('{server_name}')\" +quit")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> ProjectPaths {
        ProjectPaths::from_project_root(Path::new("/work/game"))
    }

    fn args(line: i32, column: i32, prefs: &Preferences) -> String {
        build_arguments(Path::new("Assets/Foo.cs"), line, column, prefs, &project())
    }

    #[test]
    fn test_default_arguments() {
        let out = args(10, 3, &Preferences::default());
        assert_eq!(
            out,
            "--servername Unity --remote-silent +\"call cursor(10,3)\"  \
             +\"set path+=/work/game/Assets/**\" \"Assets/Foo.cs\""
        );
        assert!(out.ends_with("\"Assets/Foo.cs\""));
    }

    #[test]
    fn test_negative_and_zero_column_clamp_to_zero() {
        let prefs = Preferences::default();
        for column in [-1, -100, 0] {
            assert!(args(5, column, &prefs).contains("call cursor(5,0)"));
        }
        assert!(args(5, 12, &prefs).contains("call cursor(5,12)"));
    }

    #[test]
    fn test_negative_and_zero_line_clamp_to_zero() {
        let prefs = Preferences::default();
        for line in [-1, i32::MIN, 0] {
            assert!(args(line, 2, &prefs).contains("call cursor(0,2)"));
        }
        assert!(args(42, 2, &prefs).contains("call cursor(42,2)"));
    }

    #[test]
    fn test_path_fragment_per_mode() {
        let project = project();
        assert_eq!(path_fragment(PathMode::None, &project), "");

        let project_frag = path_fragment(PathMode::ProjectPath, &project);
        assert_eq!(project_frag, "+\"set path+=/work/game/Assets/**\"");
        assert!(!project_frag.contains("Scripts"));

        let script_frag = path_fragment(PathMode::ScriptPath, &project);
        assert_eq!(script_frag, "+\"set path+=/work/game/Assets/Scripts/**\"");
    }

    #[test]
    fn test_extra_commands_without_path_fragment() {
        let prefs = Preferences {
            path_mode: PathMode::None,
            extra_commands: "+\"runtime unity.vim\"".to_string(),
            ..Default::default()
        };
        let out = args(1, 1, &prefs);
        assert!(out.contains("+\"runtime unity.vim\""));
        assert!(!out.contains("set path+="));
    }

    #[test]
    fn test_extra_commands_precede_path_fragment() {
        let prefs = Preferences {
            extra_commands: "+\"runtime unity.vim\"".to_string(),
            ..Default::default()
        };
        let out = args(1, 1, &prefs);
        let extra = out.find("runtime unity.vim").unwrap();
        let path = out.find("set path+=").unwrap();
        let cursor = out.find("call cursor").unwrap();
        assert!(cursor < extra && extra < path);
    }

    #[test]
    fn test_server_name_is_used() {
        let prefs = Preferences {
            server_name: "MyGame".to_string(),
            ..Default::default()
        };
        assert!(args(1, 1, &prefs).starts_with("--servername MyGame --remote-silent"));
    }

    #[test]
    fn test_identical_inputs_give_identical_output() {
        let prefs = Preferences::default();
        assert_eq!(args(7, 9, &prefs), args(7, 9, &prefs));
    }

    #[test]
    fn test_foreground_arguments() {
        assert_eq!(
            build_foreground_arguments("Unity"),
            "--clean +\"call remote_foreground('Unity')\" +quit"
        );
    }

    #[test]
    fn test_arguments_tokenise_into_argv() {
        let out = args(10, 3, &Preferences::default());
        assert_eq!(
            shlex::split(&out).unwrap(),
            vec![
                "--servername",
                "Unity",
                "--remote-silent",
                "+call cursor(10,3)",
                "+set path+=/work/game/Assets/**",
                "Assets/Foo.cs",
            ]
        );
    }

    #[test]
    fn test_file_with_spaces_stays_one_token() {
        let prefs = Preferences::default();
        let out = build_arguments(
            Path::new("Assets/My Scripts/Foo Bar.cs"),
            1,
            1,
            &prefs,
            &project(),
        );
        let argv = shlex::split(&out).unwrap();
        assert_eq!(argv.last().map(String::as_str), Some("Assets/My Scripts/Foo Bar.cs"));
    }

    #[test]
    fn test_foreground_arguments_tokenise() {
        assert_eq!(
            shlex::split(&build_foreground_arguments("My Game")).unwrap(),
            vec!["--clean", "+call remote_foreground('My Game')", "+quit"]
        );
    }
}
