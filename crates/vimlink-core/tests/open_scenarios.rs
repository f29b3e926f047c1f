//! End-to-end open/sync scenarios through the public `EditorService` API.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use vimlink_core::{
    AssetChanges, EditorLauncher, EditorService, LaunchMode, MemoryPreferenceStore, PathMode,
    ProcessError, ProcessHandle, ProcessSpawner, ProjectPaths, ProjectSync, SyncError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Call {
    program: PathBuf,
    args: Vec<String>,
    blocking: bool,
}

#[derive(Default)]
struct RecordingSpawner {
    calls: Mutex<Vec<Call>>,
    fail_with_not_found: bool,
}

impl RecordingSpawner {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, program: &Path, args: &[String], blocking: bool) -> Result<(), ProcessError> {
        if self.fail_with_not_found {
            return Err(ProcessError::NotFound(program.display().to_string()));
        }
        self.calls.lock().unwrap().push(Call {
            program: program.to_path_buf(),
            args: args.to_vec(),
            blocking,
        });
        Ok(())
    }
}

impl ProcessSpawner for RecordingSpawner {
    fn spawn_detached(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<ProcessHandle, ProcessError> {
        self.record(program, args, false)?;
        Ok(ProcessHandle::running(4242))
    }

    fn run_to_completion(
        &self,
        program: &Path,
        args: &[String],
    ) -> Result<ProcessHandle, ProcessError> {
        self.record(program, args, true)?;
        Ok(ProcessHandle::exited(None, Some(0)))
    }
}

#[derive(Default)]
struct CountingSync {
    count: Mutex<u32>,
}

impl ProjectSync for CountingSync {
    fn regenerate_project_files(&self) -> Result<(), SyncError> {
        *self.count.lock().unwrap() += 1;
        Ok(())
    }
}

fn build(
    spawner: Arc<RecordingSpawner>,
    sync: Arc<CountingSync>,
    mode: LaunchMode,
) -> EditorService {
    EditorService::new(
        Arc::new(MemoryPreferenceStore::new()),
        EditorLauncher::new(spawner).with_mode(mode),
        sync,
        ProjectPaths::from_project_root(Path::new("/projects/demo")),
    )
}

#[test]
fn default_open_spawns_one_detached_editor() {
    let spawner = Arc::new(RecordingSpawner::default());
    let service = build(
        spawner.clone(),
        Arc::new(CountingSync::default()),
        LaunchMode::Detached,
    );
    service
        .preferences()
        .set_editor_path(Path::new("/opt/vim/gvim"))
        .unwrap();

    assert!(service.open(Path::new("Assets/Foo.cs"), 10, 3).unwrap());

    let calls = spawner.calls();
    assert_eq!(calls.len(), 1);
    assert!(!calls[0].blocking);
    assert_eq!(calls[0].program, PathBuf::from("/opt/vim/gvim"));
    assert_eq!(
        calls[0].args,
        vec![
            "--servername",
            "Unity",
            "--remote-silent",
            "+call cursor(10,3)",
            "+set path+=/projects/demo/Assets/**",
            "Assets/Foo.cs",
        ]
    );
}

#[test]
fn force_foreground_adds_blocking_helper_after_primary() {
    let spawner = Arc::new(RecordingSpawner::default());
    let service = build(
        spawner.clone(),
        Arc::new(CountingSync::default()),
        LaunchMode::Detached,
    );
    service.preferences().set_force_foreground(true).unwrap();
    service.preferences().set_server_name("Demo").unwrap();

    assert!(service.open(Path::new("Assets/Foo.cs"), 1, -1).unwrap());

    let calls = spawner.calls();
    assert_eq!(calls.len(), 2);
    assert!(!calls[0].blocking);
    assert!(calls[0].args.contains(&"+call cursor(1,0)".to_string()));
    assert!(calls[1].blocking);
    assert_eq!(
        calls[1].args,
        vec!["--clean", "+call remote_foreground('Demo')", "+quit"]
    );
}

#[test]
fn script_path_mode_and_spaces_in_file_name() {
    let spawner = Arc::new(RecordingSpawner::default());
    let service = build(
        spawner.clone(),
        Arc::new(CountingSync::default()),
        LaunchMode::WaitForExit,
    );
    service
        .preferences()
        .set_path_mode(PathMode::ScriptPath)
        .unwrap();

    assert!(
        service
            .open(Path::new("Assets/My Scripts/Player Controller.cs"), 0, 0)
            .unwrap()
    );

    let calls = spawner.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].blocking);
    assert!(
        calls[0]
            .args
            .contains(&"+set path+=/projects/demo/Assets/Scripts/**".to_string())
    );
    assert_eq!(
        calls[0].args.last().map(String::as_str),
        Some("Assets/My Scripts/Player Controller.cs")
    );
}

#[test]
fn ineligible_and_cleared_extension_list() {
    let spawner = Arc::new(RecordingSpawner::default());
    let service = build(
        spawner.clone(),
        Arc::new(CountingSync::default()),
        LaunchMode::Detached,
    );

    assert!(!service.open(Path::new("Assets/Readme.unknownext"), 1, 1).unwrap());
    assert!(spawner.calls().is_empty());

    service.preferences().set_code_extensions("").unwrap();
    assert!(service.is_eligible(Path::new("Assets/Readme.unknownext")));
    assert!(service.open(Path::new("Assets/Readme.unknownext"), 1, 1).unwrap());
    assert_eq!(spawner.calls().len(), 1);
}

#[test]
fn launch_failure_surfaces_as_error() {
    let spawner = Arc::new(RecordingSpawner {
        fail_with_not_found: true,
        ..Default::default()
    });
    let service = build(spawner, Arc::new(CountingSync::default()), LaunchMode::Detached);

    let err = service.open(Path::new("Assets/Foo.cs"), 1, 1).unwrap_err();
    assert!(
        err.to_string()
            .contains("could not open file in external editor")
    );
}

#[test]
fn sync_regenerates_on_structure_changes_only() {
    let sync = Arc::new(CountingSync::default());
    let service = build(
        Arc::new(RecordingSpawner::default()),
        sync.clone(),
        LaunchMode::Detached,
    );

    assert!(service.resync_all().unwrap());
    assert!(
        !service
            .resync_changed(&AssetChanges {
                imported: vec![PathBuf::from("Assets/Foo.cs")],
                ..Default::default()
            })
            .unwrap()
    );
    assert!(
        service
            .resync_changed(&AssetChanges {
                added: vec![PathBuf::from("Assets/Bar.cs")],
                ..Default::default()
            })
            .unwrap()
    );
    assert_eq!(*sync.count.lock().unwrap(), 2);
}
