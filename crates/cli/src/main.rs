fn main() -> Result<(), Box<dyn std::error::Error>> {
    collbridge_cli::run()
}
