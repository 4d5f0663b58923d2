//! Serves the working directory on port 8080 with no extra headers.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    devserve::run(devserve::Variant::Plain)
}
