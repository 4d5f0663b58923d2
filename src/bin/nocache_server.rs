//! Serves a fixed project directory on port 8080 with headers that forbid
//! caching.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    devserve::run(devserve::Variant::NoCache)
}
