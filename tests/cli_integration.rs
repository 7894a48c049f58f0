use std::path::Path;
use std::process::{Command, Output};

/// Run the binary with config and data directories isolated under `home`.
fn artscapes(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_artscapes"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("ARTSCAPES_LOG", "off")
        .env_remove("COLORFGBG");
    cmd
}

fn run(home: &Path, args: &[&str]) -> (Output, String) {
    let output = artscapes(home).args(args).output().expect("failed to run");
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    (output, stdout)
}

fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut last = 0;
    for needle in needles {
        let idx = haystack[last..]
            .find(needle)
            .unwrap_or_else(|| panic!("'{}' missing or out of order in:\n{}", needle, haystack));
        last += idx + needle.len();
    }
}

#[test]
fn test_help_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    let (output, stdout) = run(home.path(), &["--help"]);
    assert!(output.status.success(), "artscapes --help should exit 0");
    assert!(
        stdout.contains("Browse a curated gallery"),
        "help should contain description"
    );
}

#[test]
fn test_version_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    let (output, stdout) = run(home.path(), &["--version"]);
    assert!(output.status.success());
    assert!(stdout.contains("artscapes"));
}

#[test]
fn test_list_defaults_to_newest_first() {
    let home = tempfile::tempdir().unwrap();
    let (output, stdout) = run(home.path(), &["list"]);
    assert!(output.status.success());
    assert_in_order(
        &stdout,
        &["Cosmic Filament", "Galactic Voyager", "Steampunk Metropolis", "Mountain's Peak"],
    );
    assert!(stdout.contains("16 wallpaper(s)"));
}

#[test]
fn test_list_tag_filter() {
    let home = tempfile::tempdir().unwrap();
    let (output, stdout) = run(home.path(), &["list", "--tag", "Space"]);
    assert!(output.status.success());
    assert_in_order(&stdout, &["Cosmic Filament", "Galactic Voyager", "Cosmic Reef"]);
    assert!(stdout.contains("3 wallpaper(s)"));
    assert!(!stdout.contains("Serene Valley"));
}

#[test]
fn test_list_tag_filter_without_matches() {
    let home = tempfile::tempdir().unwrap();
    let (output, stdout) = run(home.path(), &["list", "--tag", "Nonexistent"]);
    assert!(output.status.success());
    assert!(stdout.contains("No wallpapers match"));
}

#[test]
fn test_list_rejects_unknown_sort() {
    let home = tempfile::tempdir().unwrap();
    let (output, _) = run(home.path(), &["list", "--sort", "popular"]);
    assert!(!output.status.success());
}

#[test]
fn test_navigate_wraps_around() {
    let home = tempfile::tempdir().unwrap();

    let (output, stdout) = run(home.path(), &["navigate", "15", "--direction", "next"]);
    assert!(output.status.success());
    assert!(stdout.contains("Cosmic Filament"));
    assert!(stdout.contains("(1/16)"));

    let (_, stdout) = run(home.path(), &["navigate", "16", "--direction", "prev"]);
    assert!(stdout.contains("Mountain's Peak"));
    assert!(stdout.contains("(16/16)"));
}

#[test]
fn test_navigate_within_collection() {
    let home = tempfile::tempdir().unwrap();
    let (_, stdout) = run(
        home.path(),
        &["navigate", "1", "--collection", "cosmic-wonders"],
    );
    // Members newest first: 16, 10, 1, 7
    assert!(stdout.contains("Quantum Entanglement"));
    assert!(stdout.contains("(4/4)"));
}

#[test]
fn test_navigate_unknown_collection_falls_back() {
    let home = tempfile::tempdir().unwrap();
    let (output, stdout) = run(home.path(), &["navigate", "1", "--collection", "no-such"]);
    assert!(output.status.success());
    assert!(stdout.contains("Collection 'no-such' not found"));
    assert!(stdout.contains("/16)"));
}

#[test]
fn test_show_unknown_id_is_friendly() {
    let home = tempfile::tempdir().unwrap();
    let (output, stdout) = run(home.path(), &["show", "999"]);
    assert!(output.status.success());
    assert!(stdout.contains("Wallpaper '999' not found"));
    assert!(stdout.contains("Cosmic Filament"));
}

#[test]
fn test_show_prints_details() {
    let home = tempfile::tempdir().unwrap();
    let (_, stdout) = run(home.path(), &["show", "16"]);
    assert!(stdout.contains("Space Ultrawide"));
    assert!(stdout.contains("5120x1440 (Ultrawide)"));
    assert!(stdout.contains("Cosmic_Filament_5120x1440.jpg"));
}

#[test]
fn test_tag_list_grouped_puts_other_last() {
    let home = tempfile::tempdir().unwrap();
    let (output, stdout) = run(home.path(), &["tag", "list", "--grouped"]);
    assert!(output.status.success());

    let headings: Vec<&str> = stdout
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with(' '))
        .collect();
    assert_eq!(headings.first(), Some(&"A"));
    assert_eq!(headings.last(), Some(&"#"));
    assert!(stdout.contains("  4K (1)"));
}

#[test]
fn test_tag_show_is_case_insensitive() {
    let home = tempfile::tempdir().unwrap();
    let (_, stdout) = run(home.path(), &["tag", "show", "portrait"]);
    assert_in_order(&stdout, &["Neon Grid Runner", "Vertical Dreams", "Nature's Pillar"]);
}

#[test]
fn test_collection_show_unknown_lists_collections() {
    let home = tempfile::tempdir().unwrap();
    let (output, stdout) = run(home.path(), &["collection", "show", "missing"]);
    assert!(output.status.success());
    assert!(stdout.contains("Collection 'missing' not found."));
    assert_in_order(
        &stdout,
        &["Cosmic Wonders", "Cyberpunk Visions", "Enchanted Realms", "Portrait Perspectives"],
    );
}

#[test]
fn test_collection_show_members_newest_first() {
    let home = tempfile::tempdir().unwrap();
    let (_, stdout) = run(home.path(), &["collection", "show", "cosmic-wonders"]);
    assert!(stdout.contains("42 MB"));
    assert_in_order(
        &stdout,
        &["Cosmic Filament", "Galactic Voyager", "Cosmic Reef", "Quantum Entanglement"],
    );
}

#[test]
fn test_theme_persists_between_runs() {
    let home = tempfile::tempdir().unwrap();

    let (_, stdout) = run(home.path(), &["theme", "get"]);
    assert_eq!(stdout.trim(), "dark");

    let (output, _) = run(home.path(), &["theme", "set", "light"]);
    assert!(output.status.success());

    let (_, stdout) = run(home.path(), &["theme", "get"]);
    assert_eq!(stdout.trim(), "light");

    run(home.path(), &["theme", "toggle"]);
    let (_, stdout) = run(home.path(), &["theme", "get"]);
    assert_eq!(stdout.trim(), "dark");
}

#[test]
fn test_check_reports_dangling_references() {
    let home = tempfile::tempdir().unwrap();
    let catalog = home.path().join("gallery.json");
    std::fs::write(
        &catalog,
        r#"{
            "wallpapers": [
                {"id": "a", "title": "Alpha", "tags": ["Space"], "dateAdded": "2024-05-01T00:00:00Z"}
            ],
            "collections": [
                {
                    "id": "c1",
                    "name": "Broken",
                    "slug": "broken",
                    "description": "Points at nothing",
                    "coverWallpaperId": "zzz",
                    "wallpaperIds": ["a", "missing"],
                    "tags": []
                }
            ]
        }"#,
    )
    .unwrap();

    let (output, stdout) = run(
        home.path(),
        &["check", "--catalog", catalog.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert!(stdout.contains("Wallpapers:  1"));
    assert!(stdout.contains("2 dangling reference(s)"));
    assert!(stdout.contains("'zzz'"));
    assert!(stdout.contains("'missing'"));
}

#[test]
fn test_missing_catalog_file_fails_without_panic() {
    let home = tempfile::tempdir().unwrap();
    let (output, _) = run(
        home.path(),
        &["list", "--catalog", "/nonexistent/artscapes/gallery.json"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked"));
}
