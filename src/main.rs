use badgegen::{generate_icons, OUTPUT_DIR};

fn main() {
    println!("Generating app icons...");
    match generate_icons(OUTPUT_DIR) {
        Ok(paths) => {
            for path in paths {
                println!("wrote {}", path.display());
            }
        }
        Err(e) => {
            eprintln!("Icon generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
