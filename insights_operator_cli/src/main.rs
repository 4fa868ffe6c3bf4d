//! Entrypoint of the insights-operator-cli binary

fn main() -> Result<(), std::io::Error> {
    insights_operator_cli::startup(std::env::args().collect())
}
