use std::fs;
use std::path::Path;

const PLACEHOLDER_INDEX: &str = "<!doctype html>\n<html lang=\"zh\"><head><meta charset=\"utf-8\"><title>付款申请单</title></head>\n<body><p>Frontend not built. Run <code>trunk build --release</code> in <code>frontend/</code> and rebuild the backend.</p></body></html>\n";

fn main() {
    let out_dir = Path::new("static/dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).content_only(true),
        )
        .unwrap();
    } else if !out_dir.join("index.html").exists() {
        // include_dir! needs the directory to exist even without a frontend build.
        fs::create_dir_all(out_dir).unwrap();
        fs::write(out_dir.join("index.html"), PLACEHOLDER_INDEX).unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
