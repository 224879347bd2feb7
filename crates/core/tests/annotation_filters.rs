//! Annotation-driven filtering against a fake class inspector.

use classhound_api::{
    BoxError, ClassInspector, ClassMetadata, InspectError, Loader, MemberMetadata, Resource,
    ResourceHandler, Root,
};
use classhound_core::ClasspathScanner;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

struct FakeClass {
    type_annotations: Vec<&'static str>,
    member_annotations: Vec<Vec<&'static str>>,
}

struct FakeMember(Vec<&'static str>);

impl ClassMetadata for FakeClass {
    fn has_type_annotation(&self, annotation: &str) -> bool {
        self.type_annotations.iter().any(|a| *a == annotation)
    }

    fn members(&self) -> Vec<Box<dyn MemberMetadata>> {
        self.member_annotations
            .iter()
            .map(|m| Box::new(FakeMember(m.clone())) as Box<dyn MemberMetadata>)
            .collect()
    }
}

impl MemberMetadata for FakeMember {
    fn has_annotation(&self, annotation: &str) -> bool {
        self.0.iter().any(|a| *a == annotation)
    }
}

/// Inspector that only knows the classes it was given; anything else fails
/// to load, like a classpath entry whose dependencies are absent.
struct FakeInspector {
    known: HashMap<&'static str, (Vec<&'static str>, Vec<Vec<&'static str>>)>,
}

impl ClassInspector for FakeInspector {
    fn load_and_inspect(&self, class_name: &str) -> Result<Box<dyn ClassMetadata>, InspectError> {
        let (types, members) = self
            .known
            .get(class_name)
            .ok_or_else(|| InspectError::NotFound(class_name.to_string()))?;
        Ok(Box::new(FakeClass {
            type_annotations: types.clone(),
            member_annotations: members.clone(),
        }))
    }
}

fn class_dir(entries: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for entry in entries {
        let path = dir.path().join(entry);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"x").unwrap();
    }
    dir
}

fn dir_loader(path: &Path) -> Arc<Loader> {
    Arc::new(Loader::single("classes", Root::new(path)))
}

fn collect_names(scanner: &mut ClasspathScanner) -> Vec<String> {
    let mut names = Vec::new();
    let mut handler = |resource: &Resource| -> Result<(), BoxError> {
        names.push(resource.name().to_string());
        Ok(())
    };
    scanner.scan(Some(&mut handler)).unwrap();
    names.sort();
    names
}

#[test]
fn type_annotation_filter_keeps_declaring_classes_only() {
    let dir = class_dir(&["a/B.class", "a/C.class", "a/Gone.class", "a/notes.txt"]);

    let mut known = HashMap::new();
    known.insert("a.B", (vec!["Marker"], vec![]));
    known.insert("a.C", (vec![], vec![]));
    let inspector = Arc::new(FakeInspector { known });

    let mut scanner = ClasspathScanner::new();
    scanner
        .add_loader(&dir_loader(dir.path()))
        .with_inspector(inspector)
        .filter_type_annotation("Marker");

    assert_eq!(collect_names(&mut scanner), ["a.B"]);

    // The unloadable class is rejected with a diagnostic, not an error.
    let messages = scanner.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("failed to load class a.Gone"));

    // The resource never reached the inspector: rejected on kind first.
    assert_eq!(scanner.resources_count(), 4);
}

#[test]
fn member_annotation_filter_needs_one_annotated_member() {
    let dir = class_dir(&["svc/Jobs.class", "svc/Plain.class"]);

    let mut known = HashMap::new();
    known.insert("svc.Jobs", (vec![], vec![vec![], vec!["Scheduled"]]));
    known.insert("svc.Plain", (vec![], vec![vec![]]));
    let inspector = Arc::new(FakeInspector { known });

    let mut scanner = ClasspathScanner::new();
    scanner
        .add_loader(&dir_loader(dir.path()))
        .with_inspector(inspector)
        .filter_member_annotation("Scheduled");

    assert_eq!(collect_names(&mut scanner), ["svc.Jobs"]);
    assert!(scanner.messages().is_empty());
}

#[test]
fn member_load_failures_get_their_own_wording() {
    let dir = class_dir(&["svc/Gone.class"]);
    let inspector = Arc::new(FakeInspector {
        known: HashMap::new(),
    });

    let mut scanner = ClasspathScanner::new();
    scanner
        .add_loader(&dir_loader(dir.path()))
        .with_inspector(inspector)
        .filter_member_annotation("Scheduled");

    assert!(collect_names(&mut scanner).is_empty());
    let messages = scanner.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("failed to inspect members of class svc.Gone"));
}

#[test]
fn metadata_filters_without_inspector_reject_with_diagnostics() {
    let dir = class_dir(&["a/B.class"]);

    let mut scanner = ClasspathScanner::new();
    scanner
        .add_loader(&dir_loader(dir.path()))
        .filter_type_annotation("Marker");

    assert!(collect_names(&mut scanner).is_empty());
    let messages = scanner.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("no inspector configured"));
}
