use blp_decode::parser::load_blp;

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <input.blp> [output.png] [mipmap]", args[0]);
        println!("\nExample: Decode a BLP texture file and save it as PNG");
        return;
    }

    let blp_filename = &args[1];
    let output_filename = args.get(2).map(String::as_str).unwrap_or("output.png");
    let mipmap = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0);

    let blp_file = match load_blp(blp_filename) {
        Ok(blp_file) => blp_file,
        Err(e) => {
            eprintln!("✗ Failed to load BLP file '{blp_filename}': {e}");
            return;
        }
    };

    let blp = &blp_file.descriptor;
    println!("✓ Loaded BLP file: {blp_filename}");
    println!("  Version: {}", blp.version());
    match blp.format() {
        Ok(format) => println!("  Format: {format}"),
        Err(e) => println!("  Format: {e}"),
    }
    println!("  Dimensions: {}x{}", blp.width(), blp.height());
    println!("  Mipmaps: {}", blp.mipmap_count());

    match blp_file.to_image(mipmap) {
        Ok(image) => match image.save(output_filename) {
            Ok(_) => println!("✓ Saved {}x{} as: {output_filename}", image.width(), image.height()),
            Err(e) => eprintln!("✗ Failed to save image: {e}"),
        },
        Err(e) => eprintln!("✗ Failed to decode BLP file: {e}"),
    }
}
