//! Parses the sample dumps under `tests/samples` and checks the resulting records.

use std::path::PathBuf;

use threadscope::{
    parse, parse_file, CanonicalState, DumpSource, Error, InformalState, ThreadDumpReader,
    ThreadInfo, ThreadState,
};

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/samples")
        .join(name)
}

fn load(name: &str) -> Vec<ThreadInfo> {
    parse_file(sample(name)).unwrap()
}

#[test]
fn verify_number_of_threads_in_samples() {
    let tests = [
        ("jdk8.txt", 11),
        ("jdk9.txt", 5),
        ("jdk14-together.txt", 9),
        ("jdk11-truncated.txt", 1),
        ("crlf.txt", 1),
        ("noise.txt", 0),
    ];

    for (name, expected) in tests {
        assert_eq!(load(name).len(), expected, "{name}");
    }
}

#[test]
fn batch_reading_matches_sequential() {
    let names = [
        "jdk8.txt",
        "jdk9.txt",
        "jdk14-together.txt",
        "noise.txt",
        "missing.txt",
    ];
    let paths: Vec<_> = names.iter().map(|name| sample(name)).collect();

    let results = ThreadDumpReader::new().read_files(&paths);
    assert_eq!(results.len(), names.len());
    for (name, result) in names.iter().zip(&results) {
        match result {
            Ok(threads) => assert_eq!(threads, &load(name), "{name}"),
            Err(Error::FileError(e)) => {
                assert_eq!(*name, "missing.txt");
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
            }
            Err(e) => panic!("unexpected error for {name}: {e}"),
        }
    }
}

#[test]
fn check_thread_info() {
    let threads = load("jdk9.txt");

    let tests = [
        ("Attach Listener", true, "0x00007f321c001000", "0x5ac6", "RUNNABLE"),
        ("DestroyJavaVM", false, "0x00007f32b4012000", "0x5934", "RUNNABLE"),
        ("scheduling-1", false, "0x00007f32b556c000", "0x596c", "TIMED_WAITING"),
        ("http-nio-8080-Acceptor", true, "0x00007f32b53d7000", "0x596b", "RUNNABLE"),
        ("http-nio-8080-ClientPoller", true, "0x00007f32b53f1000", "0x596a", "RUNNABLE"),
    ];

    assert_eq!(threads.len(), tests.len());
    for (thread, (name, daemon, id, native_id, state)) in threads.iter().zip(tests) {
        assert_eq!(thread.name(), name);
        assert_eq!(thread.is_daemon(), daemon, "{name}");
        assert_eq!(thread.id(), id, "{name}");
        assert_eq!(thread.native_id(), native_id, "{name}");
        assert_eq!(thread.state(), state, "{name}");
        assert!(thread.state().is_explicit(), "{name}");
    }
}

#[test]
fn check_together_threads() {
    let threads = load("jdk14-together.txt");

    let tests = [
        ("Reference Handler", true, "0x00007f195c29c000", "0xb07f", "RUNNABLE"),
        ("VM Thread", false, "0x00007f195c299000", "0xb07e", "runnable"),
        ("GC Thread#7", false, "0x00007f191400a800", "0xb091", "runnable"),
        ("G1 Main Marker", false, "0x00007f195c08c000", "0xb07a", "runnable"),
        ("G1 Conc#0", false, "0x00007f195c08d800", "0xb07b", "runnable"),
        ("G1 Conc#1", false, "0x00007f1924001000", "0xb097", "runnable"),
        ("G1 Refine#0", false, "0x00007f195c20c000", "0xb07c", "runnable"),
        ("G1 Young RemSet Sampling", false, "0x00007f195c20d800", "0xb07d", "runnable"),
        ("VM Periodic Task Thread", false, "0x00007f195c30f000", "0xb087", "waiting on condition"),
    ];

    assert_eq!(threads.len(), tests.len());
    for (thread, (name, daemon, id, native_id, state)) in threads.iter().zip(tests) {
        assert_eq!(thread.name(), name);
        assert_eq!(thread.is_daemon(), daemon, "{name}");
        assert_eq!(thread.id(), id, "{name}");
        assert_eq!(thread.native_id(), native_id, "{name}");
        assert_eq!(thread.state(), state, "{name}");
    }

    assert_eq!(
        threads[0].stack_trace(),
        Some(
            "at java.lang.ref.Reference.waitForReferencePendingList(java.base@14.0.1/Native Method)\n\
             at java.lang.ref.Reference.processPendingReferences(java.base@14.0.1/Reference.java:241)\n\
             at java.lang.ref.Reference$ReferenceHandler.run(java.base@14.0.1/Reference.java:213)\n"
        )
    );
    assert!(threads[1..].iter().all(|thread| thread.stack_trace().is_none()));
    assert_eq!(
        threads[8].state(),
        ThreadState::Inferred(InformalState::WaitingOnCondition)
    );
}

#[test]
fn jdk8_states_and_traces() {
    let threads = load("jdk8.txt");

    let attach = &threads[0];
    assert_eq!(attach.name(), "Attach Listener");
    assert_eq!(attach.state(), ThreadState::Explicit(CanonicalState::Runnable));
    assert_eq!(attach.stack_trace(), None);

    let blocked = &threads[1];
    assert_eq!(blocked.state(), ThreadState::Explicit(CanonicalState::Blocked));
    assert_eq!(
        blocked.top_frame(),
        Some("at com.example.cache.RegionCache.refresh(RegionCache.java:88)")
    );
    assert_eq!(blocked.frames().count(), 4);

    let owner = &threads[2];
    assert_eq!(owner.state(), "RUNNABLE");
    assert!(!owner.stack_trace().unwrap().contains("ownable"));

    let vm = threads.iter().find(|t| t.name() == "VM Thread").unwrap();
    assert_eq!(vm.state(), ThreadState::Inferred(InformalState::Runnable));
    assert!(vm.id().starts_with("0x00007f74"));

    let periodic = threads.last().unwrap();
    assert_eq!(periodic.name(), "VM Periodic Task Thread");
    assert_eq!(periodic.state(), ThreadState::Unknown);
}

#[test]
fn truncated_dump_keeps_complete_records() {
    let threads = load("jdk11-truncated.txt");
    assert_eq!(threads[0].name(), "main");
    assert_eq!(threads[0].state(), "TIMED_WAITING");
    assert_eq!(threads[0].frames().count(), 2);
}

#[test]
fn crlf_terminators_are_stripped() {
    let threads = load("crlf.txt");
    assert_eq!(threads[0].state(), "RUNNABLE");
    assert_eq!(threads[0].stack_trace(), Some("at Main.main(Main.java:3)\n"));
}

#[test]
fn file_and_string_sources_agree() {
    let text = std::fs::read_to_string(sample("jdk8.txt")).unwrap();
    assert_eq!(parse(&text), load("jdk8.txt"));

    let source = DumpSource::from_file(sample("jdk8.txt")).unwrap();
    assert_eq!(source.len(), text.len());
    assert_eq!(ThreadDumpReader::new().read_source(&source), parse(&text));
}

#[test]
fn parsing_twice_is_identical() {
    assert_eq!(load("jdk14-together.txt"), load("jdk14-together.txt"));
}

#[test]
fn missing_file_is_an_io_error() {
    match parse_file(sample("does-not-exist.txt")) {
        Err(Error::FileError(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected FileError, got {other:?}"),
    }
}

#[test]
fn empty_input() {
    assert!(parse("").is_empty());
    assert!(ThreadDumpReader::new()
        .read_source(&DumpSource::from_mem(Vec::new()))
        .is_empty());
}
