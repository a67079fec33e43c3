use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=static/");

    let mut files: Vec<PathBuf> = Vec::new();
    let mut dirs = vec![PathBuf::from("static")];
    while let Some(dir) = dirs.pop() {
        for entry in fs::read_dir(dir).unwrap().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_dir() {
                dirs.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files.sort();

    let mut hasher = DefaultHasher::new();
    for path in files {
        path.to_str().unwrap().hash(&mut hasher);
        fs::read(&path).unwrap().hash(&mut hasher);
    }

    let hash = format!("{:016x}", hasher.finish());
    println!("cargo:rustc-env=STATIC_HASH={}", &hash[..8]);
}
