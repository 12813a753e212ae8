use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const ENTRY_SHEET: &str = "assets/css/main.css";
const BUNDLE_PATH: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed={CSS_DIR}");
    // Directory mtime only tracks added/removed files, so list each sheet too
    for entry in fs::read_dir(CSS_DIR).expect("Failed to read assets/css").flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "css") {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }

    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    // Inlines layout.css and form.css through main.css @imports
    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY_SHEET))
        .expect("Failed to bundle CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write(BUNDLE_PATH, css.code).expect("Failed to write bundle.css");
}
