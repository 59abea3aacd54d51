//! Integration tests for patternkit-core.

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use mockall::{Sequence, mock, predicate::eq};
use patternkit_core::{
    application::{ApplicationError, DEMO_REGISTRY, catalog},
    prelude::*,
};

mock! {
    pub Output {}

    impl Console for Output {
        fn write_line(&self, line: &str) -> PatternResult<()>;
        fn heading(&self, title: &str) -> PatternResult<()>;
    }
}

mock! {
    pub Disk {}

    impl Filesystem for Disk {
        fn create_dir_all(&self, path: &Path) -> PatternResult<()>;
        fn write_file(&self, path: &Path, content: &str) -> PatternResult<()>;
        fn exists(&self, path: &Path) -> bool;
    }
}

/// Console that keeps every line.
#[derive(Default)]
struct Transcript(Mutex<Vec<String>>);

impl Transcript {
    fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Console for Transcript {
    fn write_line(&self, line: &str) -> PatternResult<()> {
        self.0.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

#[test]
fn observer_lines_arrive_in_order() {
    let mut console = MockOutput::new();
    let mut seq = Sequence::new();

    console
        .expect_heading()
        .with(eq("observer"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    for line in [
        "Manager Bonus is 3000",
        "Employee Bonus is 2000",
        "Manager Bonus is 6000",
        "Employee Bonus is 4000",
    ] {
        console
            .expect_write_line()
            .with(eq(line))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
    }

    DemoService::new(Arc::new(console))
        .run(DemoKind::Observer)
        .unwrap();
}

#[test]
fn console_failure_stops_the_demo() {
    let mut console = MockOutput::new();
    console.expect_heading().returning(|_| Ok(()));
    console.expect_write_line().times(1).returning(|_| {
        Err(ApplicationError::ConsoleWrite {
            reason: "broken pipe".into(),
        }
        .into())
    });

    let err = DemoService::new(Arc::new(console))
        .run(DemoKind::Composite)
        .unwrap_err();
    assert!(matches!(
        err,
        PatternError::Application(ApplicationError::ConsoleWrite { .. })
    ));
}

#[test]
fn composite_demo_prints_tree_pre_order() {
    let transcript = Arc::new(Transcript::default());
    DemoService::new(transcript.clone())
        .run(DemoKind::Composite)
        .unwrap();

    assert_eq!(
        transcript.lines(),
        [
            "composite",
            "My Drawing",
            "*Red Square",
            "*Yellow Circle",
            "*Group",
            "**Blue Circle",
            "**Blue Square",
        ]
    );
}

#[test]
fn html_demo_renders_indented_tree() {
    let transcript = Arc::new(Transcript::default());
    DemoService::new(transcript.clone())
        .run(DemoKind::HtmlBuilder)
        .unwrap();

    assert_eq!(
        transcript.lines()[1..],
        [
            "<ul>",
            "  <li>",
            "    hello",
            "  </li>",
            "  <li>",
            "    world",
            "  </li>",
            "</ul>",
        ]
    );
}

#[test]
fn drink_demo_uses_configured_amount() {
    let transcript = Arc::new(Transcript::default());
    let service = DemoService::with_settings(
        transcript.clone(),
        DemoSettings {
            drink_amount: 250,
            ..DemoSettings::default()
        },
    );
    service.run(DemoKind::DrinkFactory).unwrap();

    let lines = transcript.lines();
    assert_eq!(
        lines[1],
        "Put in a tea bag, boil water, pour 250 ml, add lemon, enjoy!"
    );
    assert_eq!(lines[4], "This coffee is sensational!");
}

#[test]
fn message_bridge_demo_mixes_sent_and_rejected() {
    let transcript = Arc::new(Transcript::default());
    DemoService::new(transcript.clone())
        .run(DemoKind::MessageBridge)
        .unwrap();

    assert_eq!(
        transcript.lines()[1..],
        [
            "Hello from the long channel this message send by SMS",
            "Hi there this message send by Email",
            "Unable to send message, length size >= 10",
        ]
    );
}

#[test]
fn every_catalog_entry_runs() {
    let transcript = Arc::new(Transcript::default());
    let service = DemoService::new(transcript.clone());

    for info in catalog() {
        let kind: DemoKind = info.name.parse().unwrap();
        service.run(kind).unwrap();
    }
    assert!(transcript.lines().len() > DEMO_REGISTRY.len());
}

#[test]
fn journal_save_respects_existing_file() {
    let mut disk = MockDisk::new();
    disk.expect_exists()
        .with(eq(Path::new("notes/journal.txt")))
        .returning(|_| true);
    disk.expect_write_file().never();

    let persistence = JournalPersistence::new(Box::new(disk));
    let mut journal = Journal::new();
    journal.add_entry("I cried today");

    assert!(!persistence.save(&journal, "notes/journal.txt", false).unwrap());
}

#[test]
fn journal_overwrite_creates_parent_and_writes() {
    let mut disk = MockDisk::new();
    disk.expect_exists().never();
    disk.expect_create_dir_all()
        .with(eq(Path::new("notes")))
        .times(1)
        .returning(|_| Ok(()));
    disk.expect_write_file()
        .withf(|path, content| {
            path == Path::new("notes/journal.txt") && content == "1: I cried today\n2: I ate a bug"
        })
        .times(1)
        .returning(|_, _| Ok(()));

    let persistence = JournalPersistence::new(Box::new(disk));
    let mut journal = Journal::new();
    journal.add_entry("I cried today");
    journal.add_entry("I ate a bug");

    assert!(persistence.save(&journal, "notes/journal.txt", true).unwrap());
}
