//! Integration tests for environment scoping and isolation

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use sitewright::{
    rules, BuildError, EnvironmentKey, EnvironmentReader, EnvironmentValues, Rule, RuleExt,
};

struct LabelKey;
impl EnvironmentKey for LabelKey {
    type Value = String;
    fn default_value() -> String {
        "default".to_string()
    }
}

/// Records the label and output directory each time it runs
#[derive(Clone)]
struct Probe {
    seen: Rc<RefCell<Vec<(String, PathBuf)>>>,
}

impl Probe {
    fn new() -> Self {
        Self {
            seen: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn labels(&self) -> Vec<String> {
        self.seen.borrow().iter().map(|(l, _)| l.clone()).collect()
    }

    fn dirs(&self) -> Vec<PathBuf> {
        self.seen.borrow().iter().map(|(_, d)| d.clone()).collect()
    }
}

impl Rule for Probe {
    fn run(&self, env: &EnvironmentValues) -> Result<(), BuildError> {
        self.seen.borrow_mut().push((
            env.get::<LabelKey>(),
            env.output_directory().to_path_buf(),
        ));
        Ok(())
    }
}

#[test]
fn test_unset_key_yields_default_everywhere() {
    let probe = Probe::new();
    let tree = rules![probe.clone(), probe.clone().output_path("sub")];

    tree.execute("/out").unwrap();
    assert_eq!(probe.labels(), vec!["default", "default"]);
}

#[test]
fn test_override_visible_to_whole_subtree() {
    let probe = Probe::new();
    let subtree = rules![probe.clone(), probe.clone().output_path("deeper")]
        .environment::<LabelKey>("scoped".to_string());

    subtree.execute("/out").unwrap();
    assert_eq!(probe.labels(), vec!["scoped", "scoped"]);
}

#[test]
fn test_nested_override_applies_only_in_nested_subtree() {
    let probe = Probe::new();
    let tree = rules![
        probe.clone().environment::<LabelKey>("inner".to_string()),
        probe.clone(),
    ]
    .environment::<LabelKey>("outer".to_string());

    tree.execute("/out").unwrap();
    assert_eq!(probe.labels(), vec!["inner", "outer"]);
}

#[test]
fn test_sibling_subtrees_are_isolated() {
    let probe = Probe::new();
    let tree = rules![
        probe.clone().environment::<LabelKey>("left".to_string()),
        probe.clone(),
        probe
            .clone()
            .output_path("right")
            .environment::<LabelKey>("right".to_string()),
        probe.clone(),
    ];

    tree.execute("/out").unwrap();
    assert_eq!(probe.labels(), vec!["left", "default", "right", "default"]);
    assert_eq!(
        probe.dirs(),
        vec![
            PathBuf::from("/out"),
            PathBuf::from("/out"),
            PathBuf::from("/out/right"),
            PathBuf::from("/out"),
        ]
    );
}

#[test]
fn test_output_path_segments_accumulate_down_the_tree() {
    let probe = Probe::new();
    probe
        .clone()
        .output_path("2021")
        .output_path("blog")
        .execute("/out")
        .unwrap();
    assert_eq!(probe.dirs(), vec![PathBuf::from("/out/blog/2021")]);
}

#[test]
fn test_reader_parametrizes_subtree_without_modifying_environment() {
    let probe = Probe::new();
    let inner = probe.clone();
    let reader = EnvironmentReader::<LabelKey>::new(move |label| {
        assert_eq!(label, "chosen");
        Box::new(inner.clone().output_path(label))
    });

    reader
        .environment::<LabelKey>("chosen".to_string())
        .execute("/out")
        .unwrap();

    // the built rule ran with the same environment the reader observed
    assert_eq!(probe.labels(), vec!["chosen"]);
    assert_eq!(probe.dirs(), vec![PathBuf::from("/out/chosen")]);
}
