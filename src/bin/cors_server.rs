//! Serves the working directory on port 8000 with permissive CORS headers.
//! Ctrl+C stops it cleanly.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    devserve::run(devserve::Variant::Cors)
}
