use std::fs;
use std::process::Command;

use lithos_tools::texture::{self, NoiseRange, Pixmap};

const HEADER: &[u8] = b"P6\n16 16\n255\n";

#[test]
fn integration_write_and_read_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("block.ppm");

    let img = texture::generate_block_texture();
    texture::write_ppm(&img, &path).expect("write");

    let bytes = fs::read(&path).expect("read");
    assert_eq!(bytes.len(), HEADER.len() + 16 * 16 * 3);
    assert_eq!(&bytes[..HEADER.len()], HEADER);
    for px in bytes[HEADER.len()..].chunks_exact(3) {
        assert!((180..=250).contains(&px[0]), "value {} out of range", px[0]);
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
    }

    let decoded = Pixmap::decode(&bytes).expect("decode");
    assert_eq!(decoded, img);
}

#[test]
fn integration_overwrites_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("block.ppm");
    fs::write(&path, vec![0u8; 4096]).expect("seed file");

    texture::write_ppm(&texture::generate_block_texture(), &path).expect("write");
    assert_eq!(fs::metadata(&path).unwrap().len() as usize, HEADER.len() + 768);
}

#[test]
fn integration_missing_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("no/such/dir/block.ppm");
    let err = texture::write_ppm(&texture::generate_block_texture(), &path).unwrap_err();
    assert!(err.contains("failed to write"));
}

#[test]
fn cli_writes_default_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("assets/textures")).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_gen-texture"))
        .current_dir(dir.path())
        .output()
        .expect("run gen-texture");
    assert!(out.status.success());

    let path = dir.path().join("assets/textures/block.ppm");
    let img = texture::verify_ppm(&path, NoiseRange::default()).expect("verify");
    assert_eq!((img.width, img.height), (16, 16));
}

#[test]
fn cli_fails_without_target_directory() {
    let dir = tempfile::tempdir().expect("tempdir");

    let out = Command::new(env!("CARGO_BIN_EXE_gen-texture"))
        .current_dir(dir.path())
        .output()
        .expect("run gen-texture");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("error:"));
}

#[test]
fn cli_seed_is_reproducible() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = dir.path().join("a.ppm");
    let b = dir.path().join("b.ppm");

    for path in [&a, &b] {
        let status = Command::new(env!("CARGO_BIN_EXE_gen-texture"))
            .arg("--seed")
            .arg("1234")
            .arg("--verify")
            .arg("--output")
            .arg(path)
            .status()
            .expect("run gen-texture");
        assert!(status.success());
    }
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}
