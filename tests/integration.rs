// SPDX-License-Identifier: MPL-2.0
use community_site::config::{self, Config};
use community_site::forms::contact::Field;
use community_site::forms::{ContactForm, FieldValue, SubmitState, Submission};
use community_site::gallery::{discover, DiscoveryConfig, Strategy};
use community_site::i18n::fluent::I18n;
use community_site::site::{self, partials, HttpFetcher};
use community_site::store::{DocumentStore, MemoryStore, CREATED_AT_FIELD};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("nav-gallery"), "Galerie");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "[gallery]\nfolder = \"Images/events/\"\nstrategies = [\"manifest\"]\n",
    )
    .expect("write settings");

    let loaded = config::load_from_path(&path).expect("load settings");
    assert_eq!(loaded.gallery.folder, "Images/events/");
    assert_eq!(loaded.gallery.strategies, vec![Strategy::Manifest]);
    assert_eq!(loaded.site, Config::default().site);
    assert!(loaded.gallery.encode_names);
}

#[tokio::test]
async fn test_local_folder_is_discovered_through_its_index() {
    let site_dir = tempdir().expect("site dir");
    let album = site_dir.path().join("Images").join("photoAlbum");
    fs::create_dir_all(&album).expect("album dir");
    for name in ["pic10.jpg", "pic2.PNG", "pic1.jpg", "readme.txt"] {
        fs::write(album.join(name), b"data").expect("write photo");
    }

    let base = site::parse_base_url(site_dir.path().to_str().expect("utf-8 path"))
        .expect("base url");
    let config = DiscoveryConfig::from_config(&base, &Config::default().gallery)
        .expect("discovery config");
    let fetcher = HttpFetcher::new().expect("fetcher");

    let discovery = discover(&fetcher, &config).await;
    assert_eq!(discovery.strategy, Some(Strategy::DirectoryIndex));
    let names: Vec<&str> = discovery.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["pic1.jpg", "pic2.PNG", "pic10.jpg"]);

    let url = config.resolver.photo_url(names[0]).expect("photo url");
    let bytes = fs::read(url.to_file_path().expect("file path")).expect("read photo");
    assert_eq!(bytes, b"data");
}

#[tokio::test]
async fn test_local_manifest_is_used_when_index_is_disabled() {
    let site_dir = tempdir().expect("site dir");
    let album = site_dir.path().join("Images").join("photoAlbum");
    fs::create_dir_all(&album).expect("album dir");
    fs::write(album.join("manifest.json"), r#"["b.jpg", "a.jpg", "notes.md"]"#)
        .expect("write manifest");

    let base = site::parse_base_url(site_dir.path().to_str().expect("utf-8 path"))
        .expect("base url");
    let mut gallery = Config::default().gallery;
    gallery.strategies = vec![Strategy::Manifest, Strategy::Injected];
    let config = DiscoveryConfig::from_config(&base, &gallery).expect("discovery config");

    let discovery = discover(&HttpFetcher::new().expect("fetcher"), &config).await;
    assert_eq!(discovery.strategy, Some(Strategy::Manifest));
    assert_eq!(discovery.items.len(), 2);
}

#[tokio::test]
async fn test_local_partials_are_loaded() {
    let site_dir = tempdir().expect("site dir");
    fs::write(
        site_dir.path().join("header.html"),
        r#"<nav class="main-nav"><a href="index.html">Home</a><a href="gallery.html">Gallery</a></nav>"#,
    )
    .expect("write header");

    let base = site::parse_base_url(site_dir.path().to_str().expect("utf-8 path"))
        .expect("base url");
    let mut loaded = partials::load(
        &HttpFetcher::new().expect("fetcher"),
        &base,
        &Config::default().site,
    )
    .await;
    loaded.set_current_page("gallery.html");

    let header = loaded.header.expect("header loaded");
    assert!(!header[0].active);
    assert!(header[1].active);
    assert_eq!(loaded.footer, None, "missing footer stays empty");
}

#[tokio::test]
async fn test_contact_submission_writes_one_record() {
    let store = MemoryStore::new();
    let mut form = ContactForm::default();
    form.set(Field::FirstName, "  Ada ".to_string());
    form.set(Field::Email, "ada@example.org".to_string());
    form.set(Field::Message, "Hello!".to_string());

    let mut submit = SubmitState::default();
    let Submission::Write(record) = submit.begin(&form) else {
        panic!("valid form should produce a record");
    };
    assert!(!record.fields.contains_key(CREATED_AT_FIELD));

    let result = store.add(record).await;
    submit.finish(&mut form, result);

    assert!(!submit.submitting);
    assert_eq!(form, ContactForm::default());
    let documents = store.documents().await;
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].record.collection, "contactMessages");
    assert_eq!(
        documents[0].record.get("firstName"),
        Some(&FieldValue::Text("Ada".to_string()))
    );
}
