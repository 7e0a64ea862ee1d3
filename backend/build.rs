use std::fs;
use std::path::Path;

// Embeds the trunk output. `static/dist` always exists so the launcher still
// compiles before the frontend has been built; it then serves a 404.
fn main() {
    let out_dir = Path::new("static/dist");
    let dist_dir = Path::new("../frontend/dist");

    let _ = fs::remove_dir_all(out_dir);
    fs::create_dir_all(out_dir).expect("create static/dist");

    if dist_dir.exists() {
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).content_only(true),
        )
        .expect("copy frontend bundle");
    } else {
        println!("cargo:warning=frontend/dist not found; run `trunk build` in frontend first");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
