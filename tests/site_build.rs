//! End-to-end build of the demo site

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use sitewright::site::{Site, SiteTemplate, TitleKey};
use sitewright::{Content, RuleExt, Write};

fn build_site(out: &Path) {
    Site.environment::<TitleKey>("objc.io".to_string())
        .wrap(SiteTemplate::new())
        .execute(out)
        .unwrap();
}

fn read_tree(out: &Path) -> BTreeMap<String, String> {
    let mut files = BTreeMap::new();
    collect(out, out, &mut files);
    files
}

fn collect(root: &Path, dir: &Path, files: &mut BTreeMap<String, String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(root, &path, files);
        } else {
            let rel = path.strip_prefix(root).unwrap();
            let rel = rel.to_string_lossy().replace('\\', "/");
            files.insert(rel, fs::read_to_string(&path).unwrap());
        }
    }
}

#[test]
fn test_site_produces_expected_file_set() {
    let dir = tempfile::tempdir().unwrap();
    build_site(dir.path());

    let files = read_tree(dir.path());
    assert_eq!(
        files.keys().map(String::as_str).collect::<Vec<_>>(),
        vec![
            "archive/index.html",
            "blog/one.html",
            "blog/three.html",
            "blog/two.html",
            "index.html",
        ]
    );
}

#[test]
fn test_index_and_archive_use_site_template() {
    let dir = tempfile::tempdir().unwrap();
    build_site(dir.path());
    let files = read_tree(dir.path());

    assert_eq!(
        files["index.html"],
        "<html><head><title>objc.io</title></head>\
         <body><h1>Homepage objc.io</h1></body></html>"
    );
    assert_eq!(
        files["archive/index.html"],
        "<html><head><title>objc.io</title></head>\
         <body><h1>Archive</h1></body></html>"
    );
}

#[test]
fn test_posts_nest_blog_template_inside_site_template() {
    let dir = tempfile::tempdir().unwrap();
    build_site(dir.path());
    let files = read_tree(dir.path());

    for post in ["one", "two", "three"] {
        assert_eq!(
            files[&format!("blog/{post}.html")],
            format!(
                "<html><head><title>Blog - {post}</title></head>\
                 <body><h1>Blog</h1>{post}</body></html>"
            )
        );
    }
}

#[test]
fn test_rebuild_is_deterministic() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    build_site(first.path());
    build_site(second.path());
    assert_eq!(read_tree(first.path()), read_tree(second.path()));

    // building again over existing output overwrites in place
    build_site(first.path());
    assert_eq!(read_tree(first.path()), read_tree(second.path()));
}

#[test]
fn test_directory_creation_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let nested = Write::new(Content::text("x"), "a/b/page.html");

    nested.execute(dir.path()).unwrap();
    // second run hits already-existing intermediate directories
    nested.execute(dir.path()).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("a/b/page.html")).unwrap(),
        "x"
    );
}
