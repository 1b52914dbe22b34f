use assert_cmd::Command;
use predicates::str::{contains, diff};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("image_to_bmp").unwrap()
}

fn stdout_lines<P: AsRef<OsStr>>(dir: &Path, args: &[P]) -> Vec<String> {
    let output = cmd().current_dir(dir).args(args).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().lines().map(str::to_string).collect()
}

fn write_rgba_png(path: &Path) {
    image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 128, 255, 64])).save(path).unwrap();
}

#[test]
fn no_arguments_prints_usage() {
    cmd()
        .assert()
        .success()
        .stdout("Usage: image_to_bmp [image1.png] [image2.jpg] ...\n");
}

#[test]
fn converts_rgba_png_without_alpha() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("icon.png");
    write_rgba_png(&input);
    let output = tmp.path().join("icon.bmp");

    cmd()
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("Starting batch conversion for 1 image(s)..."))
        .stdout(contains(format!("Successfully converted: '{}' -> '{}'", input.display(), output.display())))
        .stdout(contains("Conversion complete."));

    let decoded = image::open(&output).unwrap();
    assert!(!decoded.color().has_alpha());
}

#[test]
fn converts_jpeg_and_grayscale() {
    let tmp = TempDir::new().unwrap();
    let jpeg = tmp.path().join("photo.jpg");
    image::RgbImage::from_pixel(8, 8, image::Rgb([200, 100, 50])).save(&jpeg).unwrap();
    let gray = tmp.path().join("scan.png");
    image::GrayImage::from_pixel(8, 8, image::Luma([90])).save(&gray).unwrap();

    cmd().arg(&jpeg).arg(&gray).assert().success();

    assert!(tmp.path().join("photo.bmp").is_file());
    assert!(tmp.path().join("scan.bmp").is_file());
}

#[test]
fn failures_do_not_stop_the_batch() {
    let tmp = TempDir::new().unwrap();
    let fake = tmp.path().join("fake.png");
    fs::write(&fake, "this is not an image").unwrap();
    let missing = tmp.path().join("missing.png");
    let good = tmp.path().join("good.png");
    write_rgba_png(&good);

    let lines = stdout_lines(tmp.path(), &[&fake, &missing, &good]);

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Starting batch conversion for 3 image(s)...");
    assert!(lines[1].starts_with(&format!("Error converting '{}': ", fake.display())));
    assert_eq!(lines[2], format!("Error: File not found '{}'", missing.display()));
    assert!(lines[3].starts_with("Successfully converted: "));
    assert_eq!(lines[4], "Conversion complete.");

    assert!(!tmp.path().join("fake.bmp").exists());
    assert!(!tmp.path().join("missing.bmp").exists());
    assert!(tmp.path().join("good.bmp").is_file());
}

#[test]
fn relative_paths_are_reported_as_given() {
    let tmp = TempDir::new().unwrap();
    write_rgba_png(&tmp.path().join("rel.png"));

    let lines = stdout_lines(tmp.path(), &[Path::new("rel.png")]);

    assert_eq!(lines[1], "Successfully converted: 'rel.png' -> 'rel.bmp'");
    assert!(tmp.path().join("rel.bmp").is_file());
}

#[test]
fn rerun_overwrites_with_same_bytes() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("again.png");
    write_rgba_png(&input);
    let output = tmp.path().join("again.bmp");

    cmd().arg(&input).assert().success();
    let first = fs::read(&output).unwrap();
    cmd().arg(&input).assert().success();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn logs_stay_off_stdout() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("gone.png");

    cmd()
        .env("IMAGE_TO_BMP_LOG", "debug")
        .arg(&missing)
        .assert()
        .success()
        .stdout(diff(format!(
            "Starting batch conversion for 1 image(s)...\nError: File not found '{}'\nConversion complete.\n",
            missing.display()
        )));
}
