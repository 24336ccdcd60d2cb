fn main() -> Result<(), netflix_eda::EdaError> {
    netflix_eda::cli::run()
}
